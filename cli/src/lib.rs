use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::{Report, Result};
use engine::{Settings, download::DownloadOutcome};
use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::cli::{Cli, Invocation};

pub mod cli;

pub const NO_PROMPT_MESSAGE: &str = "Please provide a prompt.";

pub fn load_ron_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let src = fs::read_to_string(path)?;
    Ok(ron::from_str(&src)?)
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_local_dir().map(|dir| dir.join("prompt_to_image.ron"))
}

/// Defaults when there is no file at `path`
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        Ok(Settings::default())
    } else {
        info!("Loading settings from {}", path.display());
        load_ron_file(path)
    }
}

/// Defaults when the platform has no config dir
pub fn load_settings_at(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => load_settings_from(path),
        None => {
            warn!("No config dir on this platform, using default settings");
            Ok(Settings::default())
        }
    }
}

pub fn load_settings() -> Result<Settings> {
    load_settings_at(config_path().as_deref())
}

/// The single line the forgiving executable prints instead of a report
pub fn error_line(err: &Report) -> String {
    format!("An error occurred: {err}")
}

/// [`execute`] with every failure collapsed into [`error_line`] on `out`
pub async fn execute_forgiving(cli: Cli, out: &mut impl Write) {
    if let Err(e) = execute(cli, out).await {
        let _ = writeln!(out, "{}", error_line(&e));
    }
}

/// Shared body of both executables. Writes the user facing lines to `out`;
/// error policy is left to the caller.
pub async fn execute(cli: Cli, out: &mut impl Write) -> Result<()> {
    let (prompt, session_id) = match cli.invocation()? {
        Invocation::NoPrompt => {
            writeln!(out, "{NO_PROMPT_MESSAGE}")?;
            return Ok(());
        }
        Invocation::Generate { prompt, session_id } => (prompt, session_id),
    };

    let mut settings = load_settings()?;
    if let Some(model) = cli.model {
        settings.model = model;
    }

    let rendered = engine::run(&prompt, &session_id, &settings).await?;
    if let DownloadOutcome::Skipped { status } = rendered.outcome {
        warn!(
            "Download returned {status}, {} was not written",
            rendered.filename
        );
    }
    writeln!(out, "{}", rendered.filename)?;

    Ok(())
}
