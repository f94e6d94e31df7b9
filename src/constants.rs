/// Scratch buffer handed to info/IP/MAC calls.
pub const TEXT_BUFFER_CAPACITY: usize = 1024;

pub const DEFAULT_SERIAL_BAUD: u32 = 19200;
pub const DEFAULT_NET_PORT: u16 = 8899;

pub(crate) const LIBRARY_STEM: &str = "RseeController";

pub(crate) const BLOCK_LEN: usize = 8;
