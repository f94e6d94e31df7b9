use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::connection::{ComHandle, ComSlot, NetHandle};
use crate::dispatch::{LightMode, Output};
use crate::driver::Driver;
use crate::error::{RseeError, RseeResult};
use crate::util::step_progress;
use crate::Controller;

/// How the demo reaches its controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoLink {
    /// PM-D-8TE addressed by the handle of a network connection
    Network { address: String, port: u16 },
    /// PM-D on a serial port
    Serial { port: String, baud: u32 },
}

#[derive(Debug, Clone)]
pub struct DemoPlan {
    pub link: DemoLink,
    pub channel: u8,
    /// Brightness values written and read back in order
    pub brightness: Vec<i32>,
    /// Pause after every write
    pub settle: Duration,
    pub progress: bool,
}

impl DemoPlan {
    pub fn new(link: DemoLink) -> Self {
        DemoPlan {
            link,
            channel: 1,
            brightness: vec![255, 100],
            settle: Duration::from_millis(500),
            progress: false,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Brightness read back after each write
    pub readback: Vec<i32>,
    /// Constant-light selection was skipped because its entry point is undeclared
    pub light_mode_skipped: bool,
}

enum Session {
    Network(NetHandle),
    Serial { port: String, com: ComHandle },
}

impl Session {
    fn select_constant_light<D: Driver>(&self, controller: &mut Controller<D>) -> RseeResult<i32> {
        match self {
            Session::Network(device) => {
                controller.pmd_8te_set_strobe_mode(ComSlot::Unbound, *device, LightMode::Constant)
            }
            Session::Serial { com, .. } => controller.pmd_change_mode(*com, LightMode::Constant),
        }
    }

    fn output_on<D: Driver>(&self, controller: &mut Controller<D>) -> RseeResult<i32> {
        match self {
            Session::Network(device) => {
                controller.pmd_8te_set_onoff_mode(ComSlot::Unbound, *device, Output::On)
            }
            Session::Serial { com, .. } => controller.pmd_set_onoff(*com, Output::On),
        }
    }

    fn set_brightness<D: Driver>(
        &self,
        controller: &mut Controller<D>,
        channel: u8,
        value: i32,
    ) -> RseeResult<i32> {
        match self {
            Session::Network(device) => {
                controller.pmd_8te_brt_set_channel(ComSlot::Unbound, *device, channel, value)
            }
            Session::Serial { com, .. } => controller.pmd_brt_set_channel(*com, channel, value),
        }
    }

    fn read_brightness<D: Driver>(
        &self,
        controller: &mut Controller<D>,
        channel: u8,
    ) -> RseeResult<i32> {
        match self {
            Session::Network(device) => {
                controller.pmd_8te_brt_read_channel(ComSlot::Unbound, *device, channel)
            }
            Session::Serial { com, .. } => controller.pmd_brt_read_channel(*com, channel),
        }
    }
}

/// Connect, select constant light, switch the output on, write and read back
/// each brightness, then disconnect. The connection that was opened is
/// always closed, also when a step fails.
pub fn run_demo<D: Driver>(
    controller: &mut Controller<D>,
    plan: &DemoPlan,
) -> RseeResult<DemoReport> {
    let session = connect(controller, &plan.link)?;
    let outcome = drive(controller, &session, plan);
    disconnect(controller, &session);
    outcome
}

fn connect<D: Driver>(controller: &mut Controller<D>, link: &DemoLink) -> RseeResult<Session> {
    match link {
        DemoLink::Network { address, port } => {
            info!("Connecting to {}:{}...", address, port);
            let device = controller.connect_net(address, *port)?;
            info!("Successfully connected. Net handle: {}", device.raw());
            Ok(Session::Network(device))
        }
        DemoLink::Serial { port, baud } => {
            info!("Connecting to {}...", port);
            let com = controller.open_com(port, *baud, true)?;
            info!("Successfully connected. COM handle: {}", com.raw());
            Ok(Session::Serial {
                port: port.clone(),
                com,
            })
        }
    }
}

fn drive<D: Driver>(
    controller: &mut Controller<D>,
    session: &Session,
    plan: &DemoPlan,
) -> RseeResult<DemoReport> {
    let channel = plan.channel;
    let steps = 2 + 2 * plan.brightness.len() as u64;
    let pb = step_progress(plan.progress, steps, &format!("channel {}", channel));
    let mut report = DemoReport::default();

    info!("Setting mode to Constant Light");
    match session.select_constant_light(controller) {
        Ok(status) => info!("Constant light selected, status {}", status),
        Err(RseeError::UndeclaredEntryPoint(symbol)) => {
            warn!("Skipping light mode selection, {} is not available", symbol);
            report.light_mode_skipped = true;
        }
        Err(e) => return Err(e),
    }
    pb.inc(1);
    thread::sleep(plan.settle);

    info!("Turning light output ON");
    let status = session.output_on(controller)?;
    info!("Output on, status {}", status);
    pb.inc(1);
    thread::sleep(plan.settle);

    for &brightness in &plan.brightness {
        info!("Setting channel {} brightness to {}", channel, brightness);
        let status = session.set_brightness(controller, channel, brightness)?;
        info!("Brightness set, status {}", status);
        pb.inc(1);
        thread::sleep(plan.settle);

        let value = session.read_brightness(controller, channel)?;
        info!("Read brightness from channel {}: {}", channel, value);
        report.readback.push(value);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(report)
}

fn disconnect<D: Driver>(controller: &mut Controller<D>, session: &Session) {
    info!("Closing connection...");
    let result = match session {
        Session::Network(device) => controller.close_net(*device),
        Session::Serial { port, com } => controller.close_com(port, *com),
    };
    match result {
        Ok(true) => info!("Connection closed."),
        Ok(false) => warn!("Library reported failure closing the connection"),
        Err(e) => warn!("Failed to close connection: {}", e),
    }
}
