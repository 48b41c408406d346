use clap::{Parser, Subcommand};

mod cmd;
mod export;
mod format;
mod input;
mod schedule;
mod validate;

#[derive(Parser, Debug)]
#[command(name = "depsched", version, about = "Straight-line asset depreciation schedule calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute and display the depreciation schedule
    Schedule(cmd::schedule::ScheduleCommand),
    /// Check an input file for validation issues
    Validate(cmd::validate::ValidateCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Schedule(cmd) => cmd.exec(),
        Command::Validate(cmd) => cmd.exec(),
    }
}
