use tracing::{debug, trace, warn};

use crate::connection::{ComSlot, Connections, Target};
use crate::constants::{BLOCK_LEN, TEXT_BUFFER_CAPACITY};
use crate::driver::{Driver, NativeArg};
use crate::error::{DecodeError, RseeError, RseeResult, ValidationError};
use crate::registry::{self, Addressing, Command, Encoding, Family, Operation, Param, Reply, SwitchKind};

/// Overall light output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Off,
    On,
}

/// Constant light or strobe operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightMode {
    Constant,
    Strobe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    Output(Output),
    Mode(LightMode),
}

impl Switch {
    pub fn kind(self) -> SwitchKind {
        match self {
            Switch::Output(_) => SwitchKind::Output,
            Switch::Mode(_) => SwitchKind::LightMode,
        }
    }

    fn is_high(self) -> bool {
        matches!(self, Switch::Output(Output::On) | Switch::Mode(LightMode::Strobe))
    }
}

impl From<Output> for Switch {
    fn from(output: Output) -> Self {
        Switch::Output(output)
    }
}

impl From<LightMode> for Switch {
    fn from(mode: LightMode) -> Self {
        Switch::Mode(mode)
    }
}

/// One physical range of a DPS2 bulk configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSetting {
    pub range: i32,
    pub on: bool,
}

impl From<(i32, bool)> for RangeSetting {
    fn from((range, on): (i32, bool)) -> Self {
        RangeSetting { range, on }
    }
}

/// Typed argument of a logical operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Channel(u8),
    Value(i32),
    Block(Vec<i32>),
    Switch(Switch),
    Settings(Vec<RangeSetting>),
    Octets(Vec<u8>),
    Port(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReply {
    /// Native status, surfaced even when the text is degraded
    pub status: i32,
    pub text: Result<String, DecodeError>,
}

impl TextReply {
    /// Best-effort text, including the readable part of a degraded reply
    pub fn text_lossy(&self) -> &str {
        match &self.text {
            Ok(text) => text,
            Err(DecodeError::Truncated { partial }) => partial,
            Err(DecodeError::NotAscii { lossy }) => lossy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Status(i32),
    Text(TextReply),
}

pub(crate) fn execute<D: Driver + ?Sized>(
    driver: &mut D,
    connections: &Connections,
    target: Target,
    family: Family,
    operation: Operation,
    args: &[Arg],
) -> RseeResult<Response> {
    let command = registry::lookup(family, operation)
        .ok_or(ValidationError::UnknownOperation { family, operation })?;
    if !command.declared {
        warn!("{} has no declared signature, not calling it", command.symbol);
        return Err(RseeError::UndeclaredEntryPoint(command.symbol));
    }

    let mut native = address(command, connections, target).inspect_err(|e| {
        warn!("Rejected {}: {}", command.symbol, e);
    })?;
    marshal(command, args, &mut native).inspect_err(|e| {
        warn!("Rejected {}: {}", command.symbol, e);
    })?;

    let mut buffer = match command.reply {
        Reply::Status => Vec::new(),
        Reply::Text => {
            native.push(NativeArg::Buffer);
            vec![0u8; TEXT_BUFFER_CAPACITY]
        }
    };

    trace!("{} <- {:?}", command.symbol, native);
    let returned = driver.invoke(command.symbol, &native, &mut buffer)?;
    debug!("{} -> {}", command.symbol, returned.code);

    match command.reply {
        Reply::Status => Ok(Response::Status(returned.code)),
        Reply::Text => {
            let text = decode_text(&buffer, returned.filled);
            if let Err(e) = &text {
                warn!("{} returned degraded text: {}", command.symbol, e);
            }
            Ok(Response::Text(TextReply {
                status: returned.code,
                text,
            }))
        }
    }
}

/// Leading identifiers for `command`, checked against the live handles
fn address(
    command: &Command,
    connections: &Connections,
    target: Target,
) -> Result<Vec<NativeArg>, ValidationError> {
    match (command.addressing, target) {
        (Addressing::Com, Target::Com(com)) => {
            connections.check_com(com)?;
            Ok(vec![NativeArg::Com(com.raw())])
        }
        (Addressing::Routed, Target::Routed { com, device }) => {
            let slot = match com {
                ComSlot::Open(handle) => {
                    connections.check_com(handle)?;
                    handle.raw()
                }
                ComSlot::Unbound => 0,
            };
            connections.check_net(device)?;
            Ok(vec![NativeArg::Com(slot), NativeArg::Net(device.raw())])
        }
        (Addressing::Device, Target::Device(device)) => {
            connections.check_net(device)?;
            Ok(vec![NativeArg::Net(device.raw())])
        }
        (expected, _) => Err(ValidationError::Addressing {
            symbol: command.symbol,
            expected: expected.describe(),
        }),
    }
}

fn marshal(
    command: &Command,
    args: &[Arg],
    native: &mut Vec<NativeArg>,
) -> Result<(), ValidationError> {
    if args.len() != command.params.len() {
        return Err(ValidationError::Arity {
            symbol: command.symbol,
            expected: command.params.len(),
            actual: args.len(),
        });
    }

    for (position, (param, arg)) in command.params.iter().zip(args).enumerate() {
        match (param, arg) {
            (Param::Channel, Arg::Channel(channel)) => {
                let max = command.family.channels();
                if !(1..=max).contains(channel) {
                    return Err(ValidationError::ChannelOutOfRange {
                        family: command.family,
                        channel: *channel,
                        max,
                    });
                }
                native.push(NativeArg::Int(i32::from(*channel)));
            }
            (Param::Value, Arg::Value(value)) => native.push(NativeArg::Int(*value)),
            (Param::Block, Arg::Block(values)) => {
                let block = <[i32; BLOCK_LEN]>::try_from(values.as_slice()).map_err(|_| {
                    ValidationError::Length {
                        what: "channel block",
                        expected: BLOCK_LEN,
                        actual: values.len(),
                    }
                })?;
                native.push(NativeArg::Block(block));
            }
            (Param::Switch(kind, encoding), Arg::Switch(switch)) if switch.kind() == *kind => {
                native.push(encode(*encoding, *switch));
            }
            (Param::Settings(arity), Arg::Settings(settings)) => {
                if settings.len() != *arity {
                    return Err(ValidationError::Length {
                        what: "range settings",
                        expected: *arity,
                        actual: settings.len(),
                    });
                }
                for setting in settings {
                    native.push(NativeArg::Int(setting.range));
                    native.push(NativeArg::Bool(setting.on));
                }
            }
            (Param::Octets(count), Arg::Octets(octets)) => {
                if octets.len() != *count {
                    return Err(ValidationError::Length {
                        what: "address octets",
                        expected: *count,
                        actual: octets.len(),
                    });
                }
                native.extend(octets.iter().map(|octet| NativeArg::Int(i32::from(*octet))));
            }
            (Param::Port, Arg::Port(port)) => native.push(NativeArg::Int(i32::from(*port))),
            (param, _) => {
                return Err(ValidationError::ArgumentKind {
                    symbol: command.symbol,
                    position,
                    expected: param.describe(),
                });
            }
        }
    }

    Ok(())
}

fn encode(encoding: Encoding, switch: Switch) -> NativeArg {
    match encoding {
        Encoding::Bool => NativeArg::Bool(switch.is_high()),
        Encoding::OneTwo => NativeArg::Int(if switch.is_high() { 2 } else { 1 }),
    }
}

/// Text up to the first NUL or the reported length, whichever comes first.
/// A reply that reaches the end of the buffer is treated as cut.
pub(crate) fn decode_text(buffer: &[u8], filled: Option<usize>) -> Result<String, DecodeError> {
    let capacity = buffer.len();
    let terminator = buffer.iter().position(|&byte| byte == 0);
    let end = terminator
        .unwrap_or(capacity)
        .min(filled.unwrap_or(capacity));
    let bytes = &buffer[..end];

    let truncated = match filled {
        Some(filled) => filled >= capacity,
        None => terminator.is_none(),
    };
    if truncated {
        return Err(DecodeError::Truncated {
            partial: ascii_only(bytes),
        });
    }
    if !bytes.is_ascii() {
        return Err(DecodeError::NotAscii {
            lossy: ascii_only(bytes),
        });
    }

    Ok(ascii_only(bytes))
}

fn ascii_only(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|byte| byte.is_ascii())
        .map(|&byte| char::from(byte))
        .collect()
}
