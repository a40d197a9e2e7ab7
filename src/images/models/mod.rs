pub mod generate_image_response;
pub mod image_file;
pub mod stored_image;
