use crate::connection::{ComSlot, NetHandle, Target};
use crate::dispatch::{Arg, LightMode, Output};
use crate::driver::Driver;
use crate::error::RseeResult;
use crate::registry::{Family, Operation};
use crate::Controller;

// Controllers reached through a device address: NPC, PM-S and CPL-8T.
impl<D: Driver> Controller<D> {
    pub fn npc_set_channel(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        channel: u8,
        value: i32,
    ) -> RseeResult<i32> {
        self.status(
            Target::Routed { com, device },
            Family::Npc,
            Operation::SetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn npc_read_channel(&mut self, com: ComSlot, device: NetHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Routed { com, device },
            Family::Npc,
            Operation::ReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    /// Switch a single NPC channel on or off
    pub fn npc_set_onoff(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        channel: u8,
        output: Output,
    ) -> RseeResult<i32> {
        self.status(
            Target::Routed { com, device },
            Family::Npc,
            Operation::SetOnoff,
            &[Arg::Channel(channel), Arg::Switch(output.into())],
        )
    }

    pub fn pms_set_channel(
        &mut self,
        com: ComSlot,
        device: NetHandle,
        channel: u8,
        value: i32,
    ) -> RseeResult<i32> {
        self.status(
            Target::Routed { com, device },
            Family::PmS,
            Operation::SetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn pms_set_int(&mut self, com: ComSlot, device: NetHandle, value: i32) -> RseeResult<i32> {
        self.status(
            Target::Routed { com, device },
            Family::PmS,
            Operation::SetInt,
            &[Arg::Value(value)],
        )
    }

    pub fn pms_set_mode(&mut self, com: ComSlot, device: NetHandle, mode: LightMode) -> RseeResult<i32> {
        self.status(
            Target::Routed { com, device },
            Family::PmS,
            Operation::SetMode,
            &[Arg::Switch(mode.into())],
        )
    }

    pub fn pms_read_channel(&mut self, com: ComSlot, device: NetHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Routed { com, device },
            Family::PmS,
            Operation::ReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn pms_read_int(&mut self, com: ComSlot, device: NetHandle) -> RseeResult<i32> {
        self.status(
            Target::Routed { com, device },
            Family::PmS,
            Operation::ReadInt,
            &[],
        )
    }

    pub fn cpl_8t_set_channel(&mut self, device: NetHandle, channel: u8, value: i32) -> RseeResult<i32> {
        self.status(
            Target::Device(device),
            Family::Cpl8t,
            Operation::SetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn cpl_8t_read_channel(&mut self, device: NetHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Device(device),
            Family::Cpl8t,
            Operation::ReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn cpl_8t_set_onoff(&mut self, device: NetHandle, output: Output) -> RseeResult<i32> {
        self.status(
            Target::Device(device),
            Family::Cpl8t,
            Operation::SetOnoff,
            &[Arg::Switch(output.into())],
        )
    }

    pub fn cpl_8t_set_current(&mut self, device: NetHandle, channel: u8, current: i32) -> RseeResult<i32> {
        self.status(
            Target::Device(device),
            Family::Cpl8t,
            Operation::SetCurrent,
            &[Arg::Channel(channel), Arg::Value(current)],
        )
    }
}
