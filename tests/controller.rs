mod common;

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use rsee::driver::NativeArg;
    use rsee::error::{DecodeError, RseeError, ValidationError};
    use rsee::{
        Arg, ComSlot, Controller, Family, LightMode, Mdps, Operation, Output, RangeSetting,
        Response, Target,
    };

    use crate::common::{COM_HANDLE, EchoDriver, NET_HANDLE};

    fn controller() -> Controller<EchoDriver> {
        Controller::with_driver(EchoDriver::default())
    }

    fn with_text(text: &[u8], filled: Option<usize>) -> Controller<EchoDriver> {
        Controller::with_driver(EchoDriver {
            text: text.to_vec(),
            filled,
            ..EchoDriver::default()
        })
    }

    fn is_validation(err: &RseeError) -> bool {
        matches!(err, RseeError::Validation(_))
    }

    #[test]
    fn network_round_trip_then_double_close() {
        let mut controller = controller();

        let device = controller.connect_net("192.0.2.1", 8899).unwrap();
        assert_eq!(device.raw(), NET_HANDLE);

        let status = controller
            .pmd_8te_brt_set_channel(ComSlot::Unbound, device, 1, 255)
            .unwrap();
        assert_eq!(status, 0);
        let value = controller
            .pmd_8te_brt_read_channel(ComSlot::Unbound, device, 1)
            .unwrap();
        assert_eq!(value, 255);

        assert!(controller.close_net(device).unwrap());
        let err = controller.close_net(device).unwrap_err();
        assert!(matches!(
            err,
            RseeError::Validation(ValidationError::StaleHandle(_))
        ));
        assert_eq!(controller.driver().closed_net, vec![NET_HANDLE]);
    }

    #[test]
    fn commands_after_close_never_reach_driver() {
        let mut controller = controller();
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();
        let com = controller.connect_serial("COM3").unwrap();
        controller.close_net(device).unwrap();
        controller.close_com("COM3", com).unwrap();

        let errors = [
            controller
                .pmd_8te_brt_set_channel(ComSlot::Unbound, device, 1, 10)
                .unwrap_err(),
            controller.cpl_8t_set_onoff(device, Output::On).unwrap_err(),
            controller.pmd_brt_set_channel(com, 1, 10).unwrap_err(),
            controller.sps_read_int(com).unwrap_err(),
        ];
        assert!(errors.iter().all(is_validation));
        assert_eq!(controller.driver().invocations(), 0);
    }

    #[test]
    fn routed_call_with_closed_serial_slot_is_rejected() {
        let mut controller = controller();
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();
        let com = controller.connect_serial("COM3").unwrap();
        controller.close_com("COM3", com).unwrap();

        let err = controller
            .pms_set_channel(ComSlot::Open(com), device, 1, 5)
            .unwrap_err();
        assert!(is_validation(&err));
        assert_eq!(controller.driver().invocations(), 0);
    }

    #[test]
    fn routed_call_carries_both_identifiers() {
        let mut controller = controller();
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();
        let com = controller.open_com("COM3", 115200, false).unwrap();

        controller
            .npc_set_onoff(ComSlot::Open(com), device, 3, Output::On)
            .unwrap();
        let (symbol, args) = controller.driver().last_call().unwrap();
        assert_eq!(symbol, "RseeController_NPC_SetOnoff");
        assert_eq!(
            args,
            &vec![
                NativeArg::Com(COM_HANDLE),
                NativeArg::Net(NET_HANDLE),
                NativeArg::Int(3),
                NativeArg::Bool(true),
            ]
        );
    }

    #[test]
    fn eight_channel_family_rejects_channel_nine() {
        let mut controller = controller();
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();

        for channel in [0, 9] {
            let err = controller.cpl_8t_set_channel(device, channel, 1).unwrap_err();
            assert!(matches!(
                err,
                RseeError::Validation(ValidationError::ChannelOutOfRange { max: 8, .. })
            ));
        }
        controller.cpl_8t_set_channel(device, 8, 1).unwrap();
        assert_eq!(controller.driver().invocations(), 1);
    }

    #[test]
    fn set_all_requires_exactly_eight_values() {
        let mut controller = controller();
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();

        for values in [vec![1; 7], vec![1; 9], Vec::new()] {
            let err = controller
                .pmd_8te_brt_set_all(ComSlot::Unbound, device, &values)
                .unwrap_err();
            assert!(matches!(
                err,
                RseeError::Validation(ValidationError::Length { expected: 8, .. })
            ));
        }
        assert_eq!(controller.driver().invocations(), 0);

        let values: Vec<i32> = (1..=8).collect();
        controller
            .pmd_8te_pls_set_all(ComSlot::Unbound, device, &values)
            .unwrap();
        let (_, args) = controller.driver().last_call().unwrap();
        assert_eq!(args[2], NativeArg::Block([1, 2, 3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn onoff_mode_encodes_one_and_two() {
        let mut controller = controller();
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();

        controller
            .pmd_8te_set_onoff_mode(ComSlot::Unbound, device, Output::On)
            .unwrap();
        assert_eq!(
            controller.driver().last_call().unwrap().1[2],
            NativeArg::Int(2)
        );

        controller
            .pmd_8te_set_onoff_mode(ComSlot::Unbound, device, Output::Off)
            .unwrap();
        assert_eq!(
            controller.driver().last_call().unwrap().1[2],
            NativeArg::Int(1)
        );
    }

    #[test]
    fn serial_onoff_and_mode_use_native_bool() {
        let mut controller = controller();
        let com = controller.connect_serial("COM3").unwrap();

        controller.pmd_set_onoff(com, Output::On).unwrap();
        assert_eq!(
            controller.driver().last_call().unwrap().1,
            vec![NativeArg::Com(COM_HANDLE), NativeArg::Bool(true)]
        );

        controller
            .mdps_change_mode(Mdps::W96, com, LightMode::Constant)
            .unwrap();
        let (symbol, args) = controller.driver().last_call().unwrap();
        assert_eq!(symbol, "RseeController_MDPS_24W96_ChangeMode");
        assert_eq!(args[1], NativeArg::Bool(false));
    }

    #[test]
    fn strobe_selector_is_a_known_gap() {
        let mut controller = controller();
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();

        let err = controller
            .pmd_8te_set_strobe_mode(ComSlot::Unbound, device, LightMode::Strobe)
            .unwrap_err();
        assert!(matches!(err, RseeError::UndeclaredEntryPoint(_)));
        assert_eq!(controller.driver().invocations(), 0);
    }

    #[test]
    fn read_info_returns_exact_text() {
        let mut controller = with_text(b"PM-D-8TE V1.5\0\x7fjunk", None);
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();

        let reply = controller
            .pmd_8te_read_info(ComSlot::Unbound, device)
            .unwrap();
        assert_eq!(reply.status, 0);
        assert_eq!(reply.text, Ok("PM-D-8TE V1.5".to_owned()));

        let (symbol, args) = controller.driver().last_call().unwrap();
        assert_eq!(symbol, "RseeController_PM_D_8TE_ReadInfo");
        assert_eq!(args.last(), Some(&NativeArg::Buffer));
    }

    #[test]
    fn oversized_text_is_flagged_not_cut_silently() {
        let mut controller = with_text(&[b'x'; 1024], Some(1024));
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();

        let reply = controller
            .pmd_8te_set_ip(ComSlot::Unbound, device, Ipv4Addr::new(192, 168, 1, 50))
            .unwrap();
        assert_eq!(reply.status, 0);
        assert!(matches!(reply.text, Err(DecodeError::Truncated { .. })));
        assert_eq!(reply.text_lossy().len(), 1024);

        let (_, args) = controller.driver().last_call().unwrap();
        assert_eq!(
            &args[2..6],
            &[
                NativeArg::Int(192),
                NativeArg::Int(168),
                NativeArg::Int(1),
                NativeArg::Int(50)
            ]
        );
    }

    #[test]
    fn mac_and_port_are_marshalled_in_order() {
        let mut controller = with_text(b"OK\0", None);
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();

        let reply = controller
            .pmd_8te_set_mac(ComSlot::Unbound, device, [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0xff])
            .unwrap();
        assert_eq!(reply.text, Ok("OK".to_owned()));
        let (_, args) = controller.driver().last_call().unwrap();
        assert_eq!(args.len(), 9);
        assert_eq!(args[7], NativeArg::Int(0xff));

        controller
            .pmd_8te_set_port(ComSlot::Unbound, device, 8899)
            .unwrap();
        let (_, args) = controller.driver().last_call().unwrap();
        assert_eq!(args[2], NativeArg::Int(8899));
    }

    #[test]
    fn dps2_network_setting_is_device_addressed() {
        let mut controller = controller();
        let device = controller.connect_net("192.0.2.1", 8899).unwrap();
        let settings: Vec<RangeSetting> = (0..8).map(|i| (i, i < 4).into()).collect();

        controller.dps2_8te_setting(device, &settings).unwrap();
        let (symbol, args) = controller.driver().last_call().unwrap();
        assert_eq!(symbol, "RseeController_DPS2_8TE_Setting");
        assert_eq!(args.len(), 17);
        assert_eq!(args[0], NativeArg::Net(NET_HANDLE));
        assert_eq!(args[15], NativeArg::Int(7));
        assert_eq!(args[16], NativeArg::Bool(false));

        let err = controller.dps2_8te_setting(device, &settings[..6]).unwrap_err();
        assert!(is_validation(&err));
    }

    #[test]
    fn wrong_addressing_form_is_rejected() {
        let mut controller = controller();
        let com = controller.connect_serial("COM3").unwrap();

        let err = controller
            .execute(
                Target::Com(com),
                Family::PmD8te,
                Operation::BrtSetChannel,
                &[Arg::Channel(1), Arg::Value(1)],
            )
            .unwrap_err();
        assert!(matches!(
            err,
            RseeError::Validation(ValidationError::Addressing { .. })
        ));

        let err = controller
            .execute(Target::Com(com), Family::Ahc, Operation::SetIp, &[])
            .unwrap_err();
        assert!(matches!(
            err,
            RseeError::Validation(ValidationError::UnknownOperation { .. })
        ));
    }

    #[test]
    fn generic_execute_matches_typed_call() {
        let mut controller = controller();
        let com = controller.connect_serial("COM3").unwrap();

        controller.sps_set_channel(com, 2, 40).unwrap();
        let response = controller
            .execute(
                Target::Com(com),
                Family::Sps,
                Operation::ReadChannel,
                &[Arg::Channel(2)],
            )
            .unwrap();
        assert_eq!(response, Response::Status(40));
    }

    #[test]
    fn failed_open_is_a_connection_error() {
        let mut controller = Controller::with_driver(EchoDriver {
            refuse_connections: true,
            ..EchoDriver::default()
        });

        assert!(matches!(
            controller.connect_net("192.0.2.1", 8899),
            Err(RseeError::Connection(_))
        ));
        assert!(matches!(
            controller.open_com("COM3", 19200, true),
            Err(RseeError::Connection(_))
        ));
    }
}
