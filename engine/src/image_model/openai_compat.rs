use std::{future::Future, pin::Pin};

use log::{debug, info};
use reqwest::Client;
use serde::Serialize;

use super::{ImageProvider, ImagesResponse, Model};
use crate::{
    ProviderBox,
    error::{PipelineError, Result},
};

/// Talks to an OpenAI-compatible `images/generations` endpoint.
#[derive(Clone)]
pub struct OpenAiCompatProvider {
    model: Model,
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub response_format: &'a str,
}

impl OpenAiCompatProvider {
    /// `client` should already carry the session cookie jar.
    pub fn new(model: Model, client: Client, base_url: impl Into<String>) -> Self {
        Self {
            model,
            client,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/images/generations", self.base_url.trim_end_matches('/'))
    }
}

impl ImageProvider for OpenAiCompatProvider {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ImagesResponse>> + Send + 'a>> {
        Box::pin(async move {
            let body = GenerationRequest {
                model: self.model.api_name(),
                prompt,
                response_format: "url",
            };
            let endpoint = self.endpoint();
            info!("Requesting image from {} ({endpoint})", self.model);
            debug!("Generation request: {body:#?}");

            let resp = self.client.post(&endpoint).json(&body).send().await?;

            let status = resp.status();
            let text = resp.text().await?;
            if !status.is_success() {
                return Err(PipelineError::Generation { status, body: text });
            }

            serde_json::from_str(&text)
                .map_err(|e| PipelineError::InvalidImageData(format!("{e}: {text}")))
        })
    }

    fn clone(&self) -> ProviderBox {
        Box::new(Clone::clone(self))
    }

    fn model(&self) -> Model {
        self.model
    }
}
