use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::{info, warn};

use crate::driver::Driver;
use crate::error::{RseeError, RseeResult, ValidationError};

/// Serial connection token returned by `RseeController_OpenCom`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComHandle(i32);

/// Network connection token returned by `RseeController_ConnectNet`.
/// Also serves as the device address of network-addressed families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetHandle(u32);

impl ComHandle {
    pub fn from_raw(raw: i32) -> Self {
        ComHandle(raw)
    }

    pub fn raw(self) -> i32 {
        self.0
    }
}

impl NetHandle {
    pub fn from_raw(raw: u32) -> Self {
        NetHandle(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ComHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "com#{}", self.0)
    }
}

impl fmt::Display for NetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "net#{}", self.0)
    }
}

/// Transport slot of a routed call.
///
/// `Unbound` is forwarded to the library as a null serial handle: the device
/// address alone carries the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComSlot {
    Open(ComHandle),
    Unbound,
}

/// Identifiers a command is sent with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Com(ComHandle),
    Routed { com: ComSlot, device: NetHandle },
    Device(NetHandle),
}

/// Live transport handles. The only place handles are created or retired.
#[derive(Debug, Default)]
pub struct Connections {
    com: HashMap<i32, String>,
    net: HashSet<u32>,
}

impl Connections {
    pub fn open_com<D: Driver + ?Sized>(
        &mut self,
        driver: &mut D,
        port: &str,
        baud: u32,
        overlapped: bool,
    ) -> RseeResult<ComHandle> {
        let raw = driver.open_com(port, baud, overlapped)?;
        if raw == 0 {
            return Err(RseeError::Connection(format!(
                "Failed to open serial port {} at {} baud",
                port, baud
            )));
        }

        self.com.insert(raw, port.to_owned());
        let handle = ComHandle(raw);
        info!("Opened {} on {}", handle, port);
        Ok(handle)
    }

    /// Close a serial handle opened on `port`. Returns the library's verdict;
    /// the handle stays live when the library reports failure.
    pub fn close_com<D: Driver + ?Sized>(
        &mut self,
        driver: &mut D,
        port: &str,
        handle: ComHandle,
    ) -> RseeResult<bool> {
        let opened = self
            .com
            .get(&handle.0)
            .ok_or_else(|| ValidationError::StaleHandle(handle.to_string()))?;
        if opened != port {
            return Err(ValidationError::PortMismatch {
                handle: handle.to_string(),
                opened: opened.clone(),
                given: port.to_owned(),
            }
            .into());
        }

        let closed = driver.close_com(port, handle.0)?;
        if closed {
            self.com.remove(&handle.0);
            info!("Closed {} on {}", handle, port);
        } else {
            warn!("Library refused to close {} on {}", handle, port);
        }
        Ok(closed)
    }

    pub fn connect_net<D: Driver + ?Sized>(
        &mut self,
        driver: &mut D,
        address: &str,
        port: u16,
    ) -> RseeResult<NetHandle> {
        let raw = driver.connect_net(address, port)?;
        if raw == 0 {
            return Err(RseeError::Connection(format!(
                "Failed to connect to {}:{}",
                address, port
            )));
        }

        self.net.insert(raw);
        let handle = NetHandle(raw);
        info!("Connected {} to {}:{}", handle, address, port);
        Ok(handle)
    }

    pub fn close_net<D: Driver + ?Sized>(
        &mut self,
        driver: &mut D,
        handle: NetHandle,
    ) -> RseeResult<bool> {
        self.check_net(handle)?;

        let closed = driver.close_net(handle.0)?;
        if closed {
            self.net.remove(&handle.0);
            info!("Closed {}", handle);
        } else {
            warn!("Library refused to close {}", handle);
        }
        Ok(closed)
    }

    pub fn is_com_live(&self, handle: ComHandle) -> bool {
        self.com.contains_key(&handle.0)
    }

    pub fn is_net_live(&self, handle: NetHandle) -> bool {
        self.net.contains(&handle.0)
    }

    pub(crate) fn check_com(&self, handle: ComHandle) -> Result<(), ValidationError> {
        if self.is_com_live(handle) {
            Ok(())
        } else {
            Err(ValidationError::StaleHandle(handle.to_string()))
        }
    }

    pub(crate) fn check_net(&self, handle: NetHandle) -> Result<(), ValidationError> {
        if self.is_net_live(handle) {
            Ok(())
        } else {
            Err(ValidationError::StaleHandle(handle.to_string()))
        }
    }
}
