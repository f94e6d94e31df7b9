#![allow(dead_code)]

use std::collections::HashMap;

use rsee::driver::{Driver, NativeArg, NativeReturn};
use rsee::error::RseeResult;

pub const NET_HANDLE: u32 = 42;
pub const COM_HANDLE: i32 = 7;

/// Driver that remembers channel writes and answers reads with them
#[derive(Default)]
pub struct EchoDriver {
    pub refuse_connections: bool,
    pub calls: Vec<(String, Vec<NativeArg>)>,
    pub closed_net: Vec<u32>,
    pub closed_com: Vec<(String, i32)>,
    /// Bytes copied into the scratch buffer of text calls
    pub text: Vec<u8>,
    /// Length reported back for text calls
    pub filled: Option<usize>,
    pub memory: HashMap<(String, i32), i32>,
}

impl EchoDriver {
    pub fn invocations(&self) -> usize {
        self.calls.len()
    }

    pub fn last_call(&self) -> Option<&(String, Vec<NativeArg>)> {
        self.calls.last()
    }
}

fn int(arg: &NativeArg) -> Option<i32> {
    match arg {
        NativeArg::Int(value) => Some(*value),
        _ => None,
    }
}

impl Driver for EchoDriver {
    fn open_com(&mut self, _port: &str, _baud: u32, _overlapped: bool) -> RseeResult<i32> {
        Ok(if self.refuse_connections { 0 } else { COM_HANDLE })
    }

    fn close_com(&mut self, port: &str, handle: i32) -> RseeResult<bool> {
        self.closed_com.push((port.to_owned(), handle));
        Ok(true)
    }

    fn connect_net(&mut self, _address: &str, _port: u16) -> RseeResult<u32> {
        Ok(if self.refuse_connections { 0 } else { NET_HANDLE })
    }

    fn close_net(&mut self, handle: u32) -> RseeResult<bool> {
        self.closed_net.push(handle);
        Ok(true)
    }

    fn invoke(
        &mut self,
        symbol: &str,
        args: &[NativeArg],
        buffer: &mut [u8],
    ) -> RseeResult<NativeReturn> {
        self.calls.push((symbol.to_owned(), args.to_vec()));

        if symbol.ends_with("SetChannel") {
            if let [.., channel, value] = args {
                if let (Some(channel), Some(value)) = (int(channel), int(value)) {
                    let key = (symbol.replace("SetChannel", "ReadChannel"), channel);
                    self.memory.insert(key, value);
                }
            }
            return Ok(NativeReturn::code(0));
        }

        if symbol.ends_with("ReadChannel") {
            let value = args
                .last()
                .and_then(int)
                .and_then(|channel| self.memory.get(&(symbol.to_owned(), channel)).copied())
                .unwrap_or(-1);
            return Ok(NativeReturn::code(value));
        }

        if args.last() == Some(&NativeArg::Buffer) {
            let n = self.text.len().min(buffer.len());
            buffer[..n].copy_from_slice(&self.text[..n]);
            return Ok(NativeReturn {
                code: 0,
                filled: self.filled,
            });
        }

        Ok(NativeReturn::code(0))
    }
}
