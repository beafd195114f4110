use clap::Parser;
use color_eyre::Result;
use prompt_to_image::{cli::Cli, execute_forgiving};

/// Forgiving variant: any failure is reported as a single line and the
/// process still exits successfully.
#[tokio::main]
pub async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    execute_forgiving(Cli::parse(), &mut std::io::stdout()).await;

    Ok(())
}
