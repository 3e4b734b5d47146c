mod cli;
mod commands;
mod duration;
mod error;
mod figures;
mod rate;
mod report;

use clap::{CommandFactory, Parser};
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    if cli.run_tests {
        commands::selftest::run_selftest()?;
    } else if cli.print_table {
        commands::table::run_table()?;
    } else if let (Some(cap), Some(speed)) = (cli.cap, cli.speed) {
        commands::report::run_report(cap, speed)?;
    } else {
        // Help text and the non-zero exit status both come from clap's own
        // error path.
        let mut cmd = Cli::command();
        cmd.print_help()?;
        cmd.error(
            clap::error::ErrorKind::MissingRequiredArgument,
            "Must specify --cap and --speed",
        )
        .exit();
    }

    Ok(())
}

/// `-v` turns on debug logging, `-q` silences everything, default is warnings
/// only.
fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        log::LevelFilter::Off
    } else if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();
}
