use crate::app::env::Envy;

pub static API_URL: &str = "https://image.pollinations.ai/prompt";
pub static DEFAULT_MODEL: &str = "flux-pro";

pub static CFG_SCALE: u8 = 9;
pub static SAMPLER: &str = "DPM++ SDE Karras";
pub static UPSCALE_AMOUNT: &str = "2";

pub static PROMPT_SUFFIX: &str = "high resolution, highly detailed, sharp focus, \
    professional photography, cinematic lighting, \
    8k uhd, ray tracing, ambient lighting";

pub static NEGATIVE_PROMPT: &str = "blurry, low quality, low resolution, \
    watermark, signature, oversaturated, \
    distorted, deformed, pixelated";

pub fn api_url(envy: &Envy) -> &str {
    envy.pollinations_api_url.as_deref().unwrap_or(API_URL)
}

pub fn model(envy: &Envy) -> &str {
    envy.pollinations_model.as_deref().unwrap_or(DEFAULT_MODEL)
}
