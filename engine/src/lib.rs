use crate::image_model::ImageProvider;

pub mod download;
pub mod error;
pub mod filename;
pub mod image_model;
pub mod pipeline;
pub mod session;
pub mod settings;

pub use error::{PipelineError, Result};
pub use pipeline::{PromptToImage, Rendered, run};
pub use settings::Settings;

pub type ProviderBox = Box<dyn ImageProvider + Send + Sync>;
