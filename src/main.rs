use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use dockpick::cli::Cli;
use dockpick::docker::DockerCli;
use dockpick::logging;
use dockpick::pipeline::{self, RunConfig};
use dockpick::select::TerminalSelector;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    logging::init(cli.verbose);

    let Some(config) = cli.run_config() else {
        let _ = Cli::command().write_help(&mut io::stderr());
        return ExitCode::FAILURE;
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dockpick: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let engine = DockerCli::connect(config.docker.clone())?;
    let mut selector = TerminalSelector::new();
    pipeline::run(
        config,
        &engine,
        &mut selector,
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    Ok(())
}
