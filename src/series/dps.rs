use crate::connection::{ComHandle, NetHandle, Target};
use crate::dispatch::{Arg, RangeSetting};
use crate::driver::Driver;
use crate::error::RseeResult;
use crate::registry::{Family, Operation};
use crate::Controller;

impl<D: Driver> Controller<D> {
    pub fn dps2_set_channel(&mut self, com: ComHandle, channel: u8, value: i32) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Dps2,
            Operation::SetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn dps2_read_channel(&mut self, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Dps2,
            Operation::ReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    /// Configure all six ranges of a DPS2-6T; `settings[i]` is range `i + 1`
    pub fn dps2_6t_setting(&mut self, com: ComHandle, settings: &[RangeSetting]) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Dps2,
            Operation::Setting6T,
            &[Arg::Settings(settings.to_vec())],
        )
    }

    pub fn dps2_8t_setting(&mut self, com: ComHandle, settings: &[RangeSetting]) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Dps2,
            Operation::Setting8T,
            &[Arg::Settings(settings.to_vec())],
        )
    }

    /// Network variant of [`Controller::dps2_8t_setting`], addressed by socket handle only
    pub fn dps2_8te_setting(
        &mut self,
        device: NetHandle,
        settings: &[RangeSetting],
    ) -> RseeResult<i32> {
        self.status(
            Target::Device(device),
            Family::Dps2,
            Operation::Setting8TE,
            &[Arg::Settings(settings.to_vec())],
        )
    }

    pub fn dps3_brt_set_channel(&mut self, com: ComHandle, channel: u8, value: i32) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Dps3,
            Operation::BrtSetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn dps3_pls_set_channel(&mut self, com: ComHandle, channel: u8, time: i32) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Dps3,
            Operation::PlsSetChannel,
            &[Arg::Channel(channel), Arg::Value(time)],
        )
    }

    pub fn dps3_brt_read_channel(&mut self, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Dps3,
            Operation::BrtReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn dps3_pls_read_channel(&mut self, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Dps3,
            Operation::PlsReadChannel,
            &[Arg::Channel(channel)],
        )
    }
}
