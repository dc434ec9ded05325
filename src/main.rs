use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use color_eyre::Result;

use html_grader::cli::{args::Args, report, resolve};
use html_grader::config::Config;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            });
        }
    };

    env_logger::builder()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = Config::load(args.config.as_deref())?;
    let invocation = resolve::resolve(&args, &config)?;
    log::debug!("{invocation:?}");

    let result = html_grader::app::run(&invocation).await?;
    report::print(&result)?;
    Ok(ExitCode::SUCCESS)
}
