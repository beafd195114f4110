use engine::{PipelineError, image_model::Model};

#[derive(Debug, clap::Parser)]
#[command(about = "Generate an image from a prompt and save it as <prompt>.jpg")]
pub struct Cli {
    /// Text to generate an image for, also used as the file name
    #[arg(allow_hyphen_values = true)]
    pub prompt: Option<String>,

    /// Session cookie value for the image provider
    #[arg(allow_hyphen_values = true)]
    pub session_id: Option<String>,

    /// Overrides the model from the config file
    #[arg(short, long, value_enum)]
    pub model: Option<Model>,

    /// Anything after the session id is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    NoPrompt,
    Generate { prompt: String, session_id: String },
}

impl Cli {
    pub fn invocation(&self) -> Result<Invocation, PipelineError> {
        match (&self.prompt, &self.session_id) {
            (None, _) => Ok(Invocation::NoPrompt),
            (Some(_), None) => Err(PipelineError::MissingSessionId),
            (Some(prompt), Some(session_id)) => Ok(Invocation::Generate {
                prompt: prompt.clone(),
                session_id: session_id.clone(),
            }),
        }
    }
}
