use std::fmt;

/// Controller product lines understood by the RseeController library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// DPS2 digital power supplies (6T/8T over serial, 8TE over network)
    Dps2,
    Dps3,
    PmD,
    /// PM-D-4TE/8TE, network controllers addressed through a socket handle
    PmD8te,
    Mdps24w75,
    Mdps24w96,
    Npc,
    Ahc,
    PmC,
    Sps,
    PmS,
    Cpl8t,
}

impl Family {
    /// Number of output channels; channel arguments must fall in `1..=channels()`
    pub fn channels(self) -> u8 {
        match self {
            Family::Dps2 | Family::PmD8te | Family::Npc | Family::PmS | Family::Cpl8t => 8,
            Family::Dps3
            | Family::PmD
            | Family::Mdps24w75
            | Family::Mdps24w96
            | Family::Ahc
            | Family::PmC
            | Family::Sps => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::Dps2 => "DPS2",
            Family::Dps3 => "DPS3",
            Family::PmD => "PM-D",
            Family::PmD8te => "PM-D-8TE",
            Family::Mdps24w75 => "MDPS-24W75",
            Family::Mdps24w96 => "MDPS-24W96",
            Family::Npc => "NPC",
            Family::Ahc => "AHC",
            Family::PmC => "PM-C",
            Family::Sps => "SPS",
            Family::PmS => "PM-S",
            Family::Cpl8t => "CPL-8T",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SetChannel,
    ReadChannel,
    BrtSetChannel,
    BrtReadChannel,
    BrtSetAll,
    PlsSetChannel,
    PlsReadChannel,
    PlsSetAll,
    SetOnoff,
    ChangeMode,
    StrobeMode,
    SetMode,
    SetInt,
    ReadInt,
    SetCurrent,
    Setting6T,
    Setting8T,
    Setting8TE,
    SetIp,
    SetPort,
    SetMac,
    ReadInfo,
}

/// Which identifiers a native entry point takes before its own arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// Serial handle only
    Com,
    /// Serial handle slot followed by a device address
    Routed,
    /// Device address only
    Device,
}

impl Addressing {
    pub fn describe(self) -> &'static str {
        match self {
            Addressing::Com => "a serial handle",
            Addressing::Routed => "a transport slot and a device address",
            Addressing::Device => "a device address",
        }
    }
}

/// Native convention for a two-state argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// C `bool`: Off/Constant is `false`, On/Strobe is `true`
    Bool,
    /// C `int`: Off/Constant is `1`, On/Strobe is `2`
    OneTwo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchKind {
    Output,
    LightMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Channel,
    Value,
    /// One integer per channel, exactly eight
    Block,
    Switch(SwitchKind, Encoding),
    /// `(range, on/off)` pairs, flattened on the native side
    Settings(usize),
    Octets(usize),
    Port,
}

impl Param {
    pub fn describe(self) -> &'static str {
        match self {
            Param::Channel => "a channel",
            Param::Value => "a value",
            Param::Block => "an 8-value block",
            Param::Switch(SwitchKind::Output, _) => "an output switch",
            Param::Switch(SwitchKind::LightMode, _) => "a light mode",
            Param::Settings(_) => "range settings",
            Param::Octets(_) => "address octets",
            Param::Port => "a port",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Status,
    /// Status plus the contents of a caller-owned scratch buffer
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub family: Family,
    pub operation: Operation,
    pub symbol: &'static str,
    pub addressing: Addressing,
    pub params: &'static [Param],
    pub reply: Reply,
    /// False when the library is used with a symbol whose signature was never declared
    pub declared: bool,
}

const fn row(
    family: Family,
    operation: Operation,
    symbol: &'static str,
    addressing: Addressing,
    params: &'static [Param],
) -> Command {
    Command {
        family,
        operation,
        symbol,
        addressing,
        params,
        reply: Reply::Status,
        declared: true,
    }
}

const fn text_row(
    family: Family,
    operation: Operation,
    symbol: &'static str,
    params: &'static [Param],
) -> Command {
    Command {
        reply: Reply::Text,
        ..row(family, operation, symbol, Addressing::Routed, params)
    }
}

const NONE: &[Param] = &[];
const CH: &[Param] = &[Param::Channel];
const VALUE: &[Param] = &[Param::Value];
const CH_VALUE: &[Param] = &[Param::Channel, Param::Value];
const BLOCK: &[Param] = &[Param::Block];
const OUTPUT_BOOL: &[Param] = &[Param::Switch(SwitchKind::Output, Encoding::Bool)];
const MODE_BOOL: &[Param] = &[Param::Switch(SwitchKind::LightMode, Encoding::Bool)];
const OUTPUT_ONE_TWO: &[Param] = &[Param::Switch(SwitchKind::Output, Encoding::OneTwo)];
const MODE_ONE_TWO: &[Param] = &[Param::Switch(SwitchKind::LightMode, Encoding::OneTwo)];
const CH_OUTPUT_BOOL: &[Param] = &[
    Param::Channel,
    Param::Switch(SwitchKind::Output, Encoding::Bool),
];
const SETTINGS_6: &[Param] = &[Param::Settings(6)];
const SETTINGS_8: &[Param] = &[Param::Settings(8)];
const IP: &[Param] = &[Param::Octets(4)];
const MAC: &[Param] = &[Param::Octets(6)];
const PORT: &[Param] = &[Param::Port];

use Addressing::{Com, Device, Routed};
use Family::*;
use Operation::*;

static COMMANDS: &[Command] = &[
    // DPS2
    row(Dps2, SetChannel, "RseeController_DPS2_SetChannel", Com, CH_VALUE),
    row(Dps2, ReadChannel, "RseeController_DPS2_ReadChannel", Com, CH),
    row(Dps2, Setting6T, "RseeController_DPS2_6T_Setting", Com, SETTINGS_6),
    row(Dps2, Setting8T, "RseeController_DPS2_8T_Setting", Com, SETTINGS_8),
    row(Dps2, Setting8TE, "RseeController_DPS2_8TE_Setting", Device, SETTINGS_8),
    // DPS3
    row(Dps3, BrtSetChannel, "RseeController_DPS3_BRTSetChannel", Com, CH_VALUE),
    row(Dps3, PlsSetChannel, "RseeController_DPS3_PLSSetChannel", Com, CH_VALUE),
    row(Dps3, BrtReadChannel, "RseeController_DPS3_BRTReadChannel", Com, CH),
    row(Dps3, PlsReadChannel, "RseeController_DPS3_PLSReadChannel", Com, CH),
    // PM-D
    row(PmD, BrtSetChannel, "RseeController_PM_D_BRTSetChannel", Com, CH_VALUE),
    row(PmD, BrtReadChannel, "RseeController_PM_D_BRTReadChannel", Com, CH),
    row(PmD, PlsSetChannel, "RseeController_PM_D_PLSSetChannel", Com, CH_VALUE),
    row(PmD, PlsReadChannel, "RseeController_PM_D_PLSReadChannel", Com, CH),
    row(PmD, SetOnoff, "RseeController_PM_D_SetOnoff", Com, OUTPUT_BOOL),
    row(PmD, ChangeMode, "RseeController_PM_D_ChangeMode", Com, MODE_BOOL),
    // PM-D-8TE
    row(PmD8te, BrtSetChannel, "RseeController_PM_D_8TE_BRTSetChannel", Routed, CH_VALUE),
    row(PmD8te, BrtSetAll, "RseeController_PM_D_8TE_BRTSetAll", Routed, BLOCK),
    row(PmD8te, BrtReadChannel, "RseeController_PM_D_8TE_BRTReadChannel", Routed, CH),
    row(PmD8te, PlsSetChannel, "RseeController_PM_D_8TE_PLSSetChannel", Routed, CH_VALUE),
    row(PmD8te, PlsSetAll, "RseeController_PM_D_8TE_PLSSetAll", Routed, BLOCK),
    row(PmD8te, PlsReadChannel, "RseeController_PM_D_8TE_PLSReadChannel", Routed, CH),
    text_row(PmD8te, SetIp, "RseeController_PM_D_8TE_SetIP", IP),
    text_row(PmD8te, SetPort, "RseeController_PM_D_8TE_SetPort", PORT),
    text_row(PmD8te, SetMac, "RseeController_PM_D_8TE_SetMac", MAC),
    row(PmD8te, ChangeMode, "RseeController_PM_D_8TE_ChangeMode", Routed, OUTPUT_ONE_TWO),
    text_row(PmD8te, ReadInfo, "RseeController_PM_D_8TE_ReadInfo", NONE),
    Command {
        declared: false,
        ..row(PmD8te, StrobeMode, "RseeController_PM_D_8TE_ChangeMode_New", Routed, MODE_ONE_TWO)
    },
    // MDPS-24W75
    row(Mdps24w75, BrtSetChannel, "RseeController_MDPS_24W75_BRTSetChannel", Com, CH_VALUE),
    row(Mdps24w75, PlsSetChannel, "RseeController_MDPS_24W75_PLSSetChannel", Com, CH_VALUE),
    row(Mdps24w75, BrtReadChannel, "RseeController_MDPS_24W75_BRTReadChannel", Com, CH),
    row(Mdps24w75, PlsReadChannel, "RseeController_MDPS_24W75_PLSReadChannel", Com, CH),
    row(Mdps24w75, SetOnoff, "RseeController_MDPS_24W75_SetOnoff", Com, OUTPUT_BOOL),
    row(Mdps24w75, ChangeMode, "RseeController_MDPS_24W75_ChangeMode", Com, MODE_BOOL),
    // MDPS-24W96
    row(Mdps24w96, BrtSetChannel, "RseeController_MDPS_24W96_BRTSetChannel", Com, CH_VALUE),
    row(Mdps24w96, PlsSetChannel, "RseeController_MDPS_24W96_PLSSetChannel", Com, CH_VALUE),
    row(Mdps24w96, BrtReadChannel, "RseeController_MDPS_24W96_BRTReadChannel", Com, CH),
    row(Mdps24w96, PlsReadChannel, "RseeController_MDPS_24W96_PLSReadChannel", Com, CH),
    row(Mdps24w96, SetOnoff, "RseeController_MDPS_24W96_SetOnoff", Com, OUTPUT_BOOL),
    row(Mdps24w96, ChangeMode, "RseeController_MDPS_24W96_ChangeMode", Com, MODE_BOOL),
    // NPC
    row(Npc, SetChannel, "RseeController_NPC_SetChannel", Routed, CH_VALUE),
    row(Npc, ReadChannel, "RseeController_NPC_ReadChannel", Routed, CH),
    row(Npc, SetOnoff, "RseeController_NPC_SetOnoff", Routed, CH_OUTPUT_BOOL),
    // AHC
    row(Ahc, SetChannel, "RseeController_AHC_SetChannel", Com, CH_VALUE),
    row(Ahc, ReadChannel, "RseeController_AHC_ReadChannel", Com, CH),
    row(Ahc, SetOnoff, "RseeController_AHC_SetOnoff", Com, OUTPUT_BOOL),
    // PM-C
    row(PmC, SetChannel, "RseeController_PM_C_SetChannel", Com, CH_VALUE),
    row(PmC, ReadChannel, "RseeController_PM_C_ReadChannel", Com, CH),
    row(PmC, SetOnoff, "RseeController_PM_C_SetOnoff", Com, OUTPUT_BOOL),
    // SPS
    row(Sps, SetChannel, "RseeController_SPS_SetChannel", Com, CH_VALUE),
    row(Sps, ReadChannel, "RseeController_SPS_ReadChannel", Com, CH),
    row(Sps, SetMode, "RseeController_SPS_SetMode", Com, MODE_BOOL),
    row(Sps, SetInt, "RseeController_SPS_SetInt", Com, VALUE),
    row(Sps, ReadInt, "RseeController_SPS_ReadInt", Com, NONE),
    // PM-S
    row(PmS, SetChannel, "RseeController_PM_S_SetChannel", Routed, CH_VALUE),
    row(PmS, SetInt, "RseeController_PM_S_SetInt", Routed, VALUE),
    row(PmS, SetMode, "RseeController_PM_S_SetMode", Routed, MODE_BOOL),
    row(PmS, ReadChannel, "RseeController_PM_S_ReadChannel", Routed, CH),
    row(PmS, ReadInt, "RseeController_PM_S_ReadInt", Routed, NONE),
    // CPL-8T
    row(Cpl8t, SetChannel, "RseeController_CPL_8T_SetChannel", Device, CH_VALUE),
    row(Cpl8t, ReadChannel, "RseeController_CPL_8T_ReadChannel", Device, CH),
    row(Cpl8t, SetOnoff, "RseeController_CPL_8T_SetOnoff", Device, OUTPUT_BOOL),
    row(Cpl8t, SetCurrent, "RseeController_CPL_8T_SetCurrent", Device, CH_VALUE),
];

/// Every registered command, in declaration order
pub fn commands() -> &'static [Command] {
    COMMANDS
}

pub fn lookup(family: Family, operation: Operation) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|command| command.family == family && command.operation == operation)
}

pub fn family_commands(family: Family) -> impl Iterator<Item = &'static Command> {
    COMMANDS.iter().filter(move |command| command.family == family)
}
