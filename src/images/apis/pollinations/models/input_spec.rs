use serde::Serialize;

/// Query parameters sent alongside the prompt path segment.
#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub width: i64,
    pub height: i64,
    pub model: String,
    pub steps: i64,
    pub cfg_scale: u8,
    pub sampler: String,
    pub enhance: bool,
    pub nologo: bool,
    pub negative_prompt: String,
    pub upscale: bool,
    pub upscale_amount: String,
}
