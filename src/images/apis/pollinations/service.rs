use reqwest::{StatusCode, Url};

use crate::{
    images::{dtos::generate_image_dto::GenerateImageDto, models::stored_image::StoredImage},
    AppState,
};

use super::{
    config::{self, CFG_SCALE, NEGATIVE_PROMPT, PROMPT_SUFFIX, SAMPLER, UPSCALE_AMOUNT},
    errors::PollinationsError,
    models::input_spec::InputSpec,
};

/// Makes one call to the generation api and stores the returned body.
/// No file is created unless the api answers with 200.
pub async fn fetch_image(
    dto: &GenerateImageDto,
    state: &AppState,
) -> Result<StoredImage, PollinationsError> {
    let url = provide_url(config::api_url(&state.envy), &enhance_prompt(&dto.prompt))?;
    let input_spec = provide_input_spec(dto, config::model(&state.envy));

    let res = match state.client.get(url).query(&input_spec).send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(PollinationsError::Transport(e));
        }
    };

    let status = res.status();
    if status != StatusCode::OK {
        let text = res.text().await.unwrap_or_default();
        tracing::error!("pollinations responded {}: {}", status, text);
        return Err(PollinationsError::Status(status));
    }

    match state.store.persist(res.bytes_stream()).await {
        Ok(image) => {
            tracing::info!("image saved as {}", image.path.display());
            Ok(image)
        }
        Err(e) => {
            tracing::error!(%e);
            Err(PollinationsError::Storage(e))
        }
    }
}

pub fn enhance_prompt(prompt: &str) -> String {
    [prompt, ", ", PROMPT_SUFFIX].concat()
}

fn provide_url(base: &str, prompt: &str) -> Result<Url, PollinationsError> {
    let mut url = Url::parse(base).map_err(|_| PollinationsError::InvalidUrl(base.to_string()))?;

    url.path_segments_mut()
        .map_err(|_| PollinationsError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .push(prompt);

    Ok(url)
}

fn provide_input_spec(dto: &GenerateImageDto, model: &str) -> InputSpec {
    InputSpec {
        width: dto.width,
        height: dto.height,
        model: model.to_string(),
        steps: dto.steps,
        cfg_scale: CFG_SCALE,
        sampler: SAMPLER.to_string(),
        enhance: dto.enhance,
        nologo: true,
        negative_prompt: NEGATIVE_PROMPT.to_string(),
        upscale: true,
        upscale_amount: UPSCALE_AMOUNT.to_string(),
    }
}
