use clap::Parser;
use color_eyre::Result;
use prompt_to_image::{cli::Cli, execute};

/// Strict variant: failures leave `main` and end the process with a report.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    execute(Cli::parse(), &mut std::io::stdout()).await
}
