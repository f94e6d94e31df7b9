use std::process::ExitCode;

use clap::{Parser, Subcommand};
use demo::{DemoOptions, handle_demo};
use ports::handle_ports;
use rsee::error::RseeError;
use tracing::error;

mod demo;
mod ports;

#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
struct Cli {
    /// Log every dispatched command
    #[clap(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Connect, switch on, set and read back brightness, disconnect
    #[command(name = "demo", alias = "d")]
    Demo(DemoOptions),

    /// List serial ports visible to the system
    #[command(name = "ports")]
    Ports,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let result = match cli.command {
        Command::Demo(opts) => handle_demo(opts),
        Command::Ports => handle_ports(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ RseeError::Connection(_)) => {
            error!("{}", e);
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}
