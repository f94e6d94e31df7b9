mod common;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rsee::Controller;
    use rsee::demo::{DemoLink, DemoPlan, run_demo};
    use rsee::error::RseeError;

    use crate::common::{COM_HANDLE, EchoDriver, NET_HANDLE};

    fn plan(link: DemoLink) -> DemoPlan {
        let mut plan = DemoPlan::new(link);
        plan.settle = Duration::ZERO;
        plan
    }

    fn network() -> DemoLink {
        DemoLink::Network {
            address: "192.0.2.1".to_owned(),
            port: 8899,
        }
    }

    #[test]
    fn network_demo_reads_back_what_it_wrote() {
        let mut controller = Controller::with_driver(EchoDriver::default());

        let report = run_demo(&mut controller, &plan(network())).unwrap();

        assert_eq!(report.readback, vec![255, 100]);
        assert!(report.light_mode_skipped);
        let symbols: Vec<&str> = controller
            .driver()
            .calls
            .iter()
            .map(|(symbol, _)| symbol.as_str())
            .collect();
        assert_eq!(
            symbols,
            vec![
                "RseeController_PM_D_8TE_ChangeMode",
                "RseeController_PM_D_8TE_BRTSetChannel",
                "RseeController_PM_D_8TE_BRTReadChannel",
                "RseeController_PM_D_8TE_BRTSetChannel",
                "RseeController_PM_D_8TE_BRTReadChannel",
            ]
        );
        assert_eq!(controller.driver().closed_net, vec![NET_HANDLE]);
    }

    #[test]
    fn serial_demo_drives_pmd_and_closes_port() {
        let mut controller = Controller::with_driver(EchoDriver::default());
        let mut plan = plan(DemoLink::Serial {
            port: "COM3".to_owned(),
            baud: 19200,
        });
        plan.channel = 2;
        plan.brightness = vec![42];

        let report = run_demo(&mut controller, &plan).unwrap();

        assert_eq!(report.readback, vec![42]);
        assert!(!report.light_mode_skipped);
        assert_eq!(
            controller.driver().calls[0].0,
            "RseeController_PM_D_ChangeMode"
        );
        assert_eq!(
            controller.driver().closed_com,
            vec![("COM3".to_owned(), COM_HANDLE)]
        );
    }

    #[test]
    fn failed_step_still_disconnects() {
        let mut controller = Controller::with_driver(EchoDriver::default());
        let mut plan = plan(network());
        plan.channel = 12;

        let err = run_demo(&mut controller, &plan).unwrap_err();

        assert!(matches!(err, RseeError::Validation(_)));
        assert_eq!(controller.driver().closed_net, vec![NET_HANDLE]);
    }

    #[test]
    fn failed_connect_aborts_without_closing() {
        let mut controller = Controller::with_driver(EchoDriver {
            refuse_connections: true,
            ..EchoDriver::default()
        });

        let err = run_demo(&mut controller, &plan(network())).unwrap_err();

        assert!(matches!(err, RseeError::Connection(_)));
        assert!(controller.driver().calls.is_empty());
        assert!(controller.driver().closed_net.is_empty());
    }
}
