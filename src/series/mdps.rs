use super::Mdps;
use crate::connection::{ComHandle, Target};
use crate::dispatch::{Arg, LightMode, Output};
use crate::driver::Driver;
use crate::error::RseeResult;
use crate::registry::Operation;
use crate::Controller;

impl<D: Driver> Controller<D> {
    pub fn mdps_brt_set_channel(
        &mut self,
        model: Mdps,
        com: ComHandle,
        channel: u8,
        value: i32,
    ) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            model.into(),
            Operation::BrtSetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn mdps_pls_set_channel(
        &mut self,
        model: Mdps,
        com: ComHandle,
        channel: u8,
        value: i32,
    ) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            model.into(),
            Operation::PlsSetChannel,
            &[Arg::Channel(channel), Arg::Value(value)],
        )
    }

    pub fn mdps_brt_read_channel(&mut self, model: Mdps, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            model.into(),
            Operation::BrtReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn mdps_pls_read_channel(&mut self, model: Mdps, com: ComHandle, channel: u8) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            model.into(),
            Operation::PlsReadChannel,
            &[Arg::Channel(channel)],
        )
    }

    pub fn mdps_set_onoff(&mut self, model: Mdps, com: ComHandle, output: Output) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            model.into(),
            Operation::SetOnoff,
            &[Arg::Switch(output.into())],
        )
    }

    pub fn mdps_change_mode(&mut self, model: Mdps, com: ComHandle, mode: LightMode) -> RseeResult<i32> {
        self.status(
            Target::Com(com),
            model.into(),
            Operation::ChangeMode,
            &[Arg::Switch(mode.into())],
        )
    }
}
