use std::pin::Pin;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{
    ProviderBox,
    error::{PipelineError, Result},
};

pub mod openai_compat;
pub use openai_compat::OpenAiCompatProvider;

#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    clap::ValueEnum,
    Serialize,
    Deserialize,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    Default,
)]
pub enum Model {
    #[default]
    Gemini,
    Dalle3,
    Flux,
}

impl Model {
    /// Identifier the provider expects in the `model` field
    pub fn api_name(&self) -> &'static str {
        match self {
            Model::Gemini => "gemini",
            Model::Dalle3 => "dall-e-3",
            Model::Flux => "flux",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

/// Where the bytes of a generated image can be found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Base64(String),
}

impl ImagesResponse {
    /// Only the first result counts; an empty list is the same failure as a
    /// missing field.
    pub fn first_image(self) -> Result<ImageSource> {
        let first = self
            .data
            .into_iter()
            .next()
            .ok_or(PipelineError::NoImageData)?;

        match first {
            ImageData { url: Some(url), .. } => Ok(ImageSource::Url(url)),
            ImageData {
                b64_json: Some(b64),
                ..
            } => Ok(ImageSource::Base64(b64)),
            _ => Err(PipelineError::InvalidImageData(
                "neither url nor b64_json present".into(),
            )),
        }
    }
}

pub trait ImageProvider {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ImagesResponse>> + Send + 'a>>;

    fn clone(&self) -> ProviderBox;
    fn model(&self) -> Model;
}
