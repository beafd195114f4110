use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::info;
use reqwest::Client;

use crate::{
    ProviderBox,
    download::{DownloadOutcome, download_image, write_image},
    error::Result,
    filename::image_filename,
    image_model::{ImageProvider, ImageSource, OpenAiCompatProvider},
    session::SessionCookie,
    settings::Settings,
};

/// Result of one run. `filename` is returned even when nothing was written,
/// check `outcome` to tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub filename: String,
    pub path: PathBuf,
    pub outcome: DownloadOutcome,
}

pub struct PromptToImage {
    provider: ProviderBox,
    client: Client,
}

impl Clone for PromptToImage {
    fn clone(&self) -> Self {
        Self {
            provider: ImageProvider::clone(&*self.provider),
            client: self.client.clone(),
        }
    }
}

impl PromptToImage {
    pub fn new(provider: ProviderBox, client: Client) -> Self {
        Self { provider, client }
    }

    /// Builds a client whose cookie jar carries `cookie` and points the
    /// configured provider at it.
    pub fn from_settings(settings: &Settings, cookie: &SessionCookie) -> Result<Self> {
        let client = Client::builder().cookie_provider(cookie.jar()?).build()?;
        let provider = OpenAiCompatProvider::new(settings.model, client.clone(), &settings.base_url);
        Ok(Self::new(Box::new(provider), client))
    }

    /// Generates, downloads and stores the image for `prompt` in `dir`.
    pub async fn run_in(&self, prompt: &str, dir: &Path) -> Result<Rendered> {
        let filename = image_filename(prompt);
        let path = dir.join(&filename);

        let response = self.provider.generate(prompt).await?;
        let outcome = match response.first_image()? {
            ImageSource::Url(url) => download_image(&self.client, &url, &path).await?,
            ImageSource::Base64(data) => write_image(&path, &STANDARD.decode(data)?).await?,
        };
        info!("{} image for {filename}: {outcome:?}", self.provider.model());

        Ok(Rendered {
            filename,
            path,
            outcome,
        })
    }

    /// Same as [`Self::run_in`] with the working directory as target
    pub async fn run(&self, prompt: &str) -> Result<Rendered> {
        self.run_in(prompt, Path::new(".")).await
    }
}

/// One shot: inject `session_id`, generate, download, write.
pub async fn run(prompt: &str, session_id: &str, settings: &Settings) -> Result<Rendered> {
    let cookie = settings.session_cookie(session_id)?;
    PromptToImage::from_settings(settings, &cookie)?
        .run(prompt)
        .await
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;

    use tempfile::TempDir;

    use super::*;
    use crate::{
        PipelineError,
        ProviderBox,
        image_model::{ImageData, ImagesResponse, Model},
    };

    #[derive(Clone)]
    struct Canned(Vec<ImageData>);

    impl ImageProvider for Canned {
        fn generate<'a>(
            &'a self,
            _prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<ImagesResponse>> + Send + 'a>> {
            let data = self.0.clone();
            Box::pin(async move { Ok(ImagesResponse { data }) })
        }

        fn clone(&self) -> ProviderBox {
            Box::new(Clone::clone(self))
        }

        fn model(&self) -> Model {
            Model::Gemini
        }
    }

    fn pipeline(data: Vec<ImageData>) -> PromptToImage {
        PromptToImage::new(Box::new(Canned(data)), Client::new())
    }

    #[tokio::test]
    async fn inline_image_is_written() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let rendered = pipeline(vec![ImageData {
            url: None,
            b64_json: Some(STANDARD.encode([0xFFu8, 0xD8, 0xFF])),
        }])
        .run_in("tiny jpeg", dir.path())
        .await?;

        assert_eq!(rendered.filename, "tiny_jpeg.jpg");
        assert_eq!(rendered.outcome, DownloadOutcome::Written { bytes: 3 });
        assert_eq!(std::fs::read(dir.path().join("tiny_jpeg.jpg")).unwrap(), [0xFF, 0xD8, 0xFF]);
        Ok(())
    }

    #[tokio::test]
    async fn clone_runs_independently() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let original = pipeline(vec![ImageData {
            url: None,
            b64_json: Some(STANDARD.encode(b"jpeg")),
        }]);
        let copy = original.clone();
        drop(original);

        let rendered = copy.run_in("copied run", dir.path()).await?;
        assert!(rendered.outcome.is_written());
        assert_eq!(std::fs::read(dir.path().join("copied_run.jpg")).unwrap(), b"jpeg");
        Ok(())
    }

    #[tokio::test]
    async fn broken_inline_image() {
        let dir = TempDir::new().unwrap();
        let err = pipeline(vec![ImageData {
            url: None,
            b64_json: Some("not base64!".into()),
        }])
        .run_in("x", dir.path())
        .await
        .unwrap_err();

        assert!(matches!(err, PipelineError::Decode(_)));
        assert!(!dir.path().join("x.jpg").exists());
    }

    #[tokio::test]
    async fn no_results() {
        let dir = TempDir::new().unwrap();
        let err = pipeline(vec![]).run_in("x", dir.path()).await.unwrap_err();
        assert!(matches!(err, PipelineError::NoImageData));
    }

    #[tokio::test]
    async fn missing_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = pipeline(vec![ImageData {
            url: None,
            b64_json: Some(STANDARD.encode(b"img")),
        }])
        .run_in("sub/dir", dir.path())
        .await
        .unwrap_err();

        match err {
            PipelineError::Io { path, .. } => assert!(path.ends_with("sub/dir.jpg")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
