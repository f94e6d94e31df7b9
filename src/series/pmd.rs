use std::net::Ipv4Addr;

use crate::connection::{ComHandle, ComSlot, NetHandle, Target};
use crate::dispatch::{Arg, LightMode, Output, TextReply};
use crate::driver::Driver;
use crate::error::RseeResult;
use crate::registry::{Family, Operation};
use crate::Controller;

fn routed(com: ComSlot, device: NetHandle) -> Target {
    Target::Routed { com, device }
}

impl<D: Driver> Controller<D> {
    pub fn pmd_brt_set_channel(&mut self, com: ComHandle, channel: u8, value: i32) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::PmD,
            Operation::BrtSetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn pmd_brt_read_channel(&mut self, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::PmD,
            Operation::BrtReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn pmd_pls_set_channel(&mut self, com: ComHandle, channel: u8, value: i32) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::PmD,
            Operation::PlsSetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn pmd_pls_read_channel(&mut self, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::PmD,
            Operation::PlsReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn pmd_set_onoff(&mut self, com: ComHandle, output: Output) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::PmD,
            Operation::SetOnoff,
            &[Arg::Switch(output.into())],
        )
    }

    pub fn pmd_change_mode(&mut self, com: ComHandle, mode: LightMode) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::PmD,
            Operation::ChangeMode,
            &[Arg::Switch(mode.into())],
        )
    }

    /// Set the constant-light brightness of one channel
    pub fn pmd_8te_brt_set_channel(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        channel: u8,
        value: i32,
    ) -> RseeResult<i32> {
        self.status(
            routed(com, device),
            Family::PmD8te,
            Operation::BrtSetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    /// Set all eight brightness values in one call
    pub fn pmd_8te_brt_set_all(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        values: &[i32],
    ) -> RseeResult<i32> {
        self.status(
            routed(com, device),
            Family::PmD8te,
            Operation::BrtSetAll,
            &[Arg::Block(values.to_vec())],
        )
    }

    pub fn pmd_8te_brt_read_channel(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        channel: u8,
    ) -> RseeResult<i32> {
        self.status(
            routed(com, device),
            Family::PmD8te,
            Operation::BrtReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    /// Set the strobe pulse width of one channel
    pub fn pmd_8te_pls_set_channel(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        channel: u8,
        time: i32,
    ) -> RseeResult<i32> {
        self.status(
            routed(com, device),
            Family::PmD8te,
            Operation::PlsSetChannel,
            &[Arg::Channel(channel), Arg::Value(time)],
        )
    }

    pub fn pmd_8te_pls_set_all(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        values: &[i32],
    ) -> RseeResult<i32> {
        self.status(
            routed(com, device),
            Family::PmD8te,
            Operation::PlsSetAll,
            &[Arg::Block(values.to_vec())],
        )
    }

    pub fn pmd_8te_pls_read_channel(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        channel: u8,
    ) -> RseeResult<i32> {
        self.status(
            routed(com, device),
            Family::PmD8te,
            Operation::PlsReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn pmd_8te_set_ip(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        ip: Ipv4Addr,
    ) -> RseeResult<TextReply> {
        self.text(
            routed(com, device),
            Family::PmD8te,
            Operation::SetIp,
            &[Arg::Octets(ip.octets().to_vec())],
        )
    }

    pub fn pmd_8te_set_port(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        port: u16,
    ) -> RseeResult<TextReply> {
        self.text(
            routed(com, device),
            Family::PmD8te,
            Operation::SetPort,
            &[Arg::Port(port)],
        )
    }

    pub fn pmd_8te_set_mac(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        mac: [u8; 6],
    ) -> RseeResult<TextReply> {
        self.text(
            routed(com, device),
            Family::PmD8te,
            Operation::SetMac,
            &[Arg::Octets(mac.to_vec())],
        )
    }

    pub fn pmd_8te_read_info(&mut self, com: ComSlot, device: NetHandle) -> RseeResult<TextReply> {
        self.text(routed(com, device), Family::PmD8te, Operation::ReadInfo, &[])
    }

    /// Turn the whole output on or off (native codes 1=OFF, 2=ON)
    pub fn pmd_8te_set_onoff_mode(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        output: Output,
    ) -> RseeResult<i32> {
        self.status(
            routed(com, device),
            Family::PmD8te,
            Operation::ChangeMode,
            &[Arg::Switch(output.into())],
        )
    }

    /// Select constant light or strobe.
    ///
    /// The library entry point behind this has never had a declared
    /// signature, so this always fails with
    /// [`RseeError::UndeclaredEntryPoint`](crate::error::RseeError::UndeclaredEntryPoint).
    pub fn pmd_8te_set_strobe_mode(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        mode: LightMode,
    ) -> RseeResult<i32> {
        self.status(
            routed(com, device),
            Family::PmD8te,
            Operation::StrobeMode,
            &[Arg::Switch(mode.into())],
        )
    }
}
