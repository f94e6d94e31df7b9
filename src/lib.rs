use std::path::Path;

pub use connection::{ComHandle, ComSlot, NetHandle, Target};
pub use dispatch::{Arg, LightMode, Output, RangeSetting, Response, Switch, TextReply};
use driver::{Driver, NativeLibrary};
use error::RseeResult;
pub use registry::{Family, Operation};
pub use series::Mdps;

pub mod connection;
pub mod constants;
pub mod demo;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod registry;
pub(crate) mod series;
pub(crate) mod util;

/// Entry point for talking to Rsee light controllers.
///
/// Holds the driver and the set of live connections. Every command method
/// validates its arguments and handles before anything reaches the driver.
pub struct Controller<D: Driver = NativeLibrary> {
    driver: D,
    connections: connection::Connections,
}

impl Controller<NativeLibrary> {
    /// Load the RseeController library, see [`NativeLibrary::load`]
    pub fn load(library: Option<&Path>) -> RseeResult<Self> {
        Ok(Controller::with_driver(NativeLibrary::load(library)?))
    }
}

impl<D: Driver> Controller<D> {
    pub fn with_driver(driver: D) -> Self {
        Controller {
            driver,
            connections: connection::Connections::default(),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Open a serial port through the library
    pub fn open_com(&mut self, port: &str, baud: u32, overlapped: bool) -> RseeResult<ComHandle> {
        self.connections
            .open_com(&mut self.driver, port, baud, overlapped)
    }

    /// Open a serial port at 19200 baud with overlapped I/O
    pub fn connect_serial(&mut self, port: &str) -> RseeResult<ComHandle> {
        self.open_com(port, constants::DEFAULT_SERIAL_BAUD, true)
    }

    /// Close a serial handle; `port` must be the name it was opened with
    pub fn close_com(&mut self, port: &str, handle: ComHandle) -> RseeResult<bool> {
        self.connections.close_com(&mut self.driver, port, handle)
    }

    pub fn connect_net(&mut self, address: &str, port: u16) -> RseeResult<NetHandle> {
        self.connections
            .connect_net(&mut self.driver, address, port)
    }

    pub fn close_net(&mut self, handle: NetHandle) -> RseeResult<bool> {
        self.connections.close_net(&mut self.driver, handle)
    }

    pub fn is_connected(&self, target: Target) -> bool {
        match target {
            Target::Com(com) => self.connections.is_com_live(com),
            Target::Routed { com, device } => {
                let com_live = match com {
                    ComSlot::Open(com) => self.connections.is_com_live(com),
                    ComSlot::Unbound => true,
                };
                com_live && self.connections.is_net_live(device)
            }
            Target::Device(device) => self.connections.is_net_live(device),
        }
    }

    /// Run any registered operation with untyped arguments
    pub fn execute(
        &mut self,
        target: Target,
        family: Family,
        operation: Operation,
        args: &[Arg],
    ) -> RseeResult<Response> {
        dispatch::execute(
            &mut self.driver,
            &self.connections,
            target,
            family,
            operation,
            args,
        )
    }

    pub(crate) fn status(
        &mut self,
        target: Target,
        family: Family,
        operation: Operation,
        args: &[Arg],
    ) -> RseeResult<i32> {
        match self.execute(target, family, operation, args)? {
            Response::Status(code) => Ok(code),
            Response::Text(reply) => Ok(reply.status),
        }
    }

    pub(crate) fn text(
        &mut self,
        target: Target,
        family: Family,
        operation: Operation,
        args: &[Arg],
    ) -> RseeResult<TextReply> {
        match self.execute(target, family, operation, args)? {
            Response::Text(reply) => Ok(reply),
            Response::Status(status) => Ok(TextReply {
                status,
                text: Ok(String::new()),
            }),
        }
    }
}
