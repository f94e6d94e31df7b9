use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use rsee::{
    Controller,
    constants::{DEFAULT_NET_PORT, DEFAULT_SERIAL_BAUD},
    demo::{DemoLink, DemoPlan, run_demo},
    error::RseeResult,
};
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum ConnectionMode {
    /// PM-D-8TE over the network
    Net,
    /// PM-D over a serial port
    Serial,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct DemoOptions {
    /// Connection mode
    #[clap(short, long, value_enum, default_value_t = ConnectionMode::Net)]
    mode: ConnectionMode,

    /// Controller IP address
    #[clap(short, long, default_value = "192.168.1.100")]
    ip: String,

    /// Controller TCP port
    #[clap(short, long, default_value_t = DEFAULT_NET_PORT)]
    port: u16,

    /// Serial port name
    #[clap(short, long, default_value = "COM3")]
    com: String,

    /// Baud rate
    #[clap(short, long, default_value_t = DEFAULT_SERIAL_BAUD)]
    baud: u32,

    /// Channel to drive
    #[clap(long, default_value_t = 1)]
    channel: u8,

    /// Path to the RseeController library
    #[clap(short, long)]
    library: Option<PathBuf>,

    /// Milliseconds to wait after each write
    #[clap(long, default_value_t = 500)]
    settle_ms: u64,
}

pub(crate) fn handle_demo(opts: DemoOptions) -> RseeResult<()> {
    let link = match opts.mode {
        ConnectionMode::Net => DemoLink::Network {
            address: opts.ip,
            port: opts.port,
        },
        ConnectionMode::Serial => DemoLink::Serial {
            port: opts.com,
            baud: opts.baud,
        },
    };
    info!("Initializing Rsee controller ({:?} mode)...", opts.mode);

    let mut controller = Controller::load(opts.library.as_deref())?;
    info!("Controller instance created.");

    let mut plan = DemoPlan::new(link);
    plan.channel = opts.channel;
    plan.settle = Duration::from_millis(opts.settle_ms);
    plan.progress = true;

    let report = run_demo(&mut controller, &plan)?;
    info!("Read back {:?}", report.readback);

    Ok(())
}
