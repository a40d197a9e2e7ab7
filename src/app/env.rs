use serde::Deserialize;

pub static DEFAULT_PORT: u16 = 8000;
pub static DEFAULT_GENERATED_DIR: &str = "generated";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub generated_dir: Option<String>,
    pub expose_file_listing: Option<bool>,

    pub pollinations_api_url: Option<String>,
    pub pollinations_model: Option<String>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn generated_dir(&self) -> &str {
        self.generated_dir
            .as_deref()
            .unwrap_or(DEFAULT_GENERATED_DIR)
    }

    pub fn expose_file_listing(&self) -> bool {
        self.expose_file_listing.unwrap_or(true)
    }
}
