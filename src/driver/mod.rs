pub mod library;

use crate::error::RseeResult;

pub use library::NativeLibrary;

/// One positional argument of a native entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeArg {
    /// Serial handle slot (`HANDLE`), zero when the slot is unbound
    Com(i32),
    /// Network/socket handle (`UINT`)
    Net(u32),
    Int(i32),
    Bool(bool),
    /// `int[8]`, passed by pointer
    Block([i32; 8]),
    /// Position of the caller's scratch buffer (`char*`)
    Buffer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeReturn {
    pub code: i32,
    /// Bytes written to the scratch buffer, when the driver can tell
    pub filled: Option<usize>,
}

impl NativeReturn {
    pub fn code(code: i32) -> Self {
        NativeReturn { code, filled: None }
    }
}

/// Boundary to the RseeController protocol implementation.
///
/// Every call blocks until the driver returns. Timeouts and retries, if any,
/// happen behind this trait.
#[cfg_attr(test, mockall::automock)]
pub trait Driver: Send {
    /// Returns the native serial handle, zero on failure
    fn open_com(&mut self, port: &str, baud: u32, overlapped: bool) -> RseeResult<i32>;

    fn close_com(&mut self, port: &str, handle: i32) -> RseeResult<bool>;

    /// Returns the native network handle, zero on failure
    fn connect_net(&mut self, address: &str, port: u16) -> RseeResult<u32>;

    fn close_net(&mut self, handle: u32) -> RseeResult<bool>;

    /// Call `symbol` with already marshalled arguments. `buffer` is empty
    /// unless `args` contains [`NativeArg::Buffer`].
    fn invoke(
        &mut self,
        symbol: &str,
        args: &[NativeArg],
        buffer: &mut [u8],
    ) -> RseeResult<NativeReturn>;
}
