use crate::connection::{ComHandle, Target};
use crate::dispatch::{Arg, LightMode, Output};
use crate::driver::Driver;
use crate::error::RseeResult;
use crate::registry::{Family, Operation};
use crate::Controller;

// Serial-only controllers: AHC, PM-C and SPS.
impl<D: Driver> Controller<D> {
    pub fn ahc_set_channel(&mut self, com: ComHandle, channel: u8, value: i32) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Ahc,
            Operation::SetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn ahc_read_channel(&mut self, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Ahc,
            Operation::ReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn ahc_set_onoff(&mut self, com: ComHandle, output: Output) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Ahc,
            Operation::SetOnoff,
            &[Arg::Switch(output.into())],
        )
    }

    pub fn pmc_set_channel(&mut self, com: ComHandle, channel: u8, value: i32) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::PmC,
            Operation::SetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn pmc_read_channel(&mut self, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::PmC,
            Operation::ReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn pmc_set_onoff(&mut self, com: ComHandle, output: Output) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::PmC,
            Operation::SetOnoff,
            &[Arg::Switch(output.into())],
        )
    }

    pub fn sps_set_channel(&mut self, com: ComHandle, channel: u8, value: i32) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Sps,
            Operation::SetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn sps_read_channel(&mut self, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Sps,
            Operation::ReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn sps_set_mode(&mut self, com: ComHandle, mode: LightMode) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Sps,
            Operation::SetMode,
            &[Arg::Switch(mode.into())],
        )
    }

    /// Set the strobe interval
    pub fn sps_set_int(&mut self, com: ComHandle, time: i32) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            Family::Sps,
            Operation::SetInt,
            &[Arg::Value(time)],
        )
    }

    pub fn sps_read_int(&mut self, com: ComHandle) -> RseeResult<i32> {
        self.status(Target::Com(com), Family::Sps, Operation::ReadInt, &[])
    }
}
