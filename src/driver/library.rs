use libloading as lib;

use std::ffi::{CString, c_char, c_int, c_uint, c_void};
use std::path::{Path, PathBuf};

use lib::Library;
use tracing::info;

use super::{Driver, NativeArg, NativeReturn};
use crate::constants::LIBRARY_STEM;
use crate::error::{RseeError, RseeResult};

type Handle = *mut c_void;

/// [`Driver`] backed by the vendor RseeController shared library
pub struct NativeLibrary {
    dll: Library,
}

impl NativeLibrary {
    /// Load the library from `path`, or from next to the running executable
    /// and then the system search path when `path` is `None`.
    pub fn load(path: Option<&Path>) -> RseeResult<NativeLibrary> {
        if !cfg!(target_pointer_width = "64") {
            return Err(RseeError::Library(
                "Unsupported architecture. Only 64-bit is supported.".to_owned(),
            ));
        }

        let path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(RseeError::Library(format!(
                        "{} not found at the specified path: {}",
                        LIBRARY_STEM,
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => default_library_path(),
        };

        let dll = unsafe { Library::new(&path) }.map_err(|e| {
            RseeError::Library(format!("Failed to load {}: {}", path.display(), e))
        })?;
        info!("Loaded {}", path.display());

        Ok(NativeLibrary { dll })
    }

    /// # Safety
    /// `T` must match the exported signature of `name`.
    unsafe fn symbol<T>(&self, name: &str) -> RseeResult<lib::Symbol<'_, T>> {
        unsafe { self.dll.get::<T>(name.as_bytes()) }
            .map_err(|_| RseeError::FunctionNotFound(name.to_owned()))
    }
}

fn default_library_path() -> PathBuf {
    let file_name = lib::library_filename(LIBRARY_STEM);
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from(file_name))
}

fn c_string(value: &str) -> RseeResult<CString> {
    CString::new(value)
        .map_err(|_| RseeError::Connection(format!("{:?} contains a NUL byte", value)))
}

fn handle(raw: i32) -> Handle {
    raw as isize as Handle
}

/// Pull `(range, on/off)` pairs back out of a flattened settings call
fn pairs<const N: usize>(args: &[NativeArg]) -> Option<[(c_int, bool); N]> {
    if args.len() != N * 2 {
        return None;
    }
    let mut out = [(0, false); N];
    for (slot, pair) in out.iter_mut().zip(args.chunks_exact(2)) {
        match pair {
            [NativeArg::Int(range), NativeArg::Bool(on)] => *slot = (*range, *on),
            _ => return None,
        }
    }
    Some(out)
}

fn no_signature(symbol: &str, args: &[NativeArg]) -> RseeError {
    RseeError::Library(format!("no native signature for {} taking {:?}", symbol, args))
}

impl Driver for NativeLibrary {
    fn open_com(&mut self, port: &str, baud: u32, overlapped: bool) -> RseeResult<i32> {
        let port = c_string(port)?;
        let handle = unsafe {
            self.symbol::<unsafe extern "C" fn(*const c_char, c_int, bool) -> c_int>(
                "RseeController_OpenCom",
            )?(port.as_ptr(), baud as c_int, overlapped)
        };
        Ok(handle)
    }

    fn close_com(&mut self, port: &str, handle: i32) -> RseeResult<bool> {
        let port = c_string(port)?;
        let closed = unsafe {
            self.symbol::<unsafe extern "C" fn(*const c_char, c_int) -> bool>(
                "RseeController_CloseCom",
            )?(port.as_ptr(), handle)
        };
        Ok(closed)
    }

    fn connect_net(&mut self, address: &str, port: u16) -> RseeResult<u32> {
        let address = c_string(address)?;
        let handle = unsafe {
            self.symbol::<unsafe extern "C" fn(*const c_char, c_int) -> c_uint>(
                "RseeController_ConnectNet",
            )?(address.as_ptr(), c_int::from(port))
        };
        Ok(handle)
    }

    fn close_net(&mut self, handle: u32) -> RseeResult<bool> {
        let closed = unsafe {
            self.symbol::<unsafe extern "C" fn(c_uint) -> bool>("RseeController_CloseNet")?(
                handle,
            )
        };
        Ok(closed)
    }

    fn invoke(
        &mut self,
        symbol: &str,
        args: &[NativeArg],
        buffer: &mut [u8],
    ) -> RseeResult<NativeReturn> {
        use NativeArg::{Block, Bool, Buffer, Com, Int, Net};

        let out = buffer.as_mut_ptr().cast::<c_char>();
        let code = unsafe {
            match args {
                [Com(h), Int(a), Int(b)] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_int, c_int) -> c_int>(symbol)?(
                    handle(*h),
                    *a,
                    *b,
                ),
                [Com(h), Int(a)] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_int) -> c_int>(symbol)?(
                    handle(*h),
                    *a,
                ),
                [Com(h), Bool(a)] => self
                    .symbol::<unsafe extern "C" fn(Handle, bool) -> c_int>(symbol)?(
                    handle(*h),
                    *a,
                ),
                [Com(h)] => {
                    self.symbol::<unsafe extern "C" fn(Handle) -> c_int>(symbol)?(handle(*h))
                }
                [Com(h), Net(n), Int(a), Int(b)] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_uint, c_int, c_int) -> c_int>(
                    symbol,
                )?(handle(*h), *n, *a, *b),
                [Com(h), Net(n), Int(a), Bool(b)] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_uint, c_int, bool) -> c_int>(
                    symbol,
                )?(handle(*h), *n, *a, *b),
                [Com(h), Net(n), Int(a)] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_uint, c_int) -> c_int>(symbol)?(
                    handle(*h),
                    *n,
                    *a,
                ),
                [Com(h), Net(n), Bool(a)] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_uint, bool) -> c_int>(symbol)?(
                    handle(*h),
                    *n,
                    *a,
                ),
                [Com(h), Net(n), Block(values)] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_uint, *const c_int) -> c_int>(
                    symbol,
                )?(handle(*h), *n, values.as_ptr()),
                [Com(h), Net(n)] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_uint) -> c_int>(symbol)?(
                    handle(*h),
                    *n,
                ),
                [Com(h), Net(n), Buffer] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_uint, *mut c_char) -> c_int>(
                    symbol,
                )?(handle(*h), *n, out),
                [Com(h), Net(n), Int(port), Buffer] => self
                    .symbol::<unsafe extern "C" fn(Handle, c_uint, c_int, *mut c_char) -> c_int>(
                    symbol,
                )?(handle(*h), *n, *port, out),
                [Com(h), Net(n), Int(a), Int(b), Int(c), Int(d), Buffer] => self
                    .symbol::<unsafe extern "C" fn(
                        Handle,
                        c_uint,
                        c_int,
                        c_int,
                        c_int,
                        c_int,
                        *mut c_char,
                    ) -> c_int>(symbol)?(
                    handle(*h), *n, *a, *b, *c, *d, out
                ),
                [
                    Com(h),
                    Net(n),
                    Int(a),
                    Int(b),
                    Int(c),
                    Int(d),
                    Int(e),
                    Int(f),
                    Buffer,
                ] => self
                    .symbol::<unsafe extern "C" fn(
                        Handle,
                        c_uint,
                        c_int,
                        c_int,
                        c_int,
                        c_int,
                        c_int,
                        c_int,
                        *mut c_char,
                    ) -> c_int>(symbol)?(
                    handle(*h), *n, *a, *b, *c, *d, *e, *f, out
                ),
                [Net(n), Int(a), Int(b)] => self
                    .symbol::<unsafe extern "C" fn(c_uint, c_int, c_int) -> c_int>(symbol)?(
                    *n, *a, *b,
                ),
                [Net(n), Int(a)] => self
                    .symbol::<unsafe extern "C" fn(c_uint, c_int) -> c_int>(symbol)?(*n, *a),
                [Net(n), Bool(a)] => self
                    .symbol::<unsafe extern "C" fn(c_uint, bool) -> c_int>(symbol)?(*n, *a),
                [Com(h), rest @ ..] if rest.len() == 12 => {
                    let s = pairs::<6>(rest).ok_or_else(|| no_signature(symbol, args))?;
                    self.symbol::<unsafe extern "C" fn(
                        Handle,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                    ) -> c_int>(symbol)?(
                        handle(*h),
                        s[0].0,
                        s[0].1,
                        s[1].0,
                        s[1].1,
                        s[2].0,
                        s[2].1,
                        s[3].0,
                        s[3].1,
                        s[4].0,
                        s[4].1,
                        s[5].0,
                        s[5].1,
                    )
                }
                [Com(h), rest @ ..] if rest.len() == 16 => {
                    let s = pairs::<8>(rest).ok_or_else(|| no_signature(symbol, args))?;
                    self.symbol::<unsafe extern "C" fn(
                        Handle,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                    ) -> c_int>(symbol)?(
                        handle(*h),
                        s[0].0,
                        s[0].1,
                        s[1].0,
                        s[1].1,
                        s[2].0,
                        s[2].1,
                        s[3].0,
                        s[3].1,
                        s[4].0,
                        s[4].1,
                        s[5].0,
                        s[5].1,
                        s[6].0,
                        s[6].1,
                        s[7].0,
                        s[7].1,
                    )
                }
                [Net(n), rest @ ..] if rest.len() == 16 => {
                    let s = pairs::<8>(rest).ok_or_else(|| no_signature(symbol, args))?;
                    self.symbol::<unsafe extern "C" fn(
                        c_uint,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                        c_int,
                        bool,
                    ) -> c_int>(symbol)?(
                        *n, s[0].0, s[0].1, s[1].0, s[1].1, s[2].0, s[2].1, s[3].0, s[3].1,
                        s[4].0, s[4].1, s[5].0, s[5].1, s[6].0, s[6].1, s[7].0, s[7].1,
                    )
                }
                _ => return Err(no_signature(symbol, args)),
            }
        };

        Ok(NativeReturn::code(code))
    }
}
