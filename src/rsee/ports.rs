use rsee::error::{RseeError, RseeResult};

pub(crate) fn handle_ports() -> RseeResult<()> {
    let ports = serialport::available_ports()
        .map_err(|e| RseeError::SerialPort(format!("Could not get available ports. Err {:?}", e)))?;

    if ports.is_empty() {
        println!("No serial ports found");
    }
    for port in ports {
        match port.port_type {
            serialport::SerialPortType::UsbPort(info) => println!(
                "{}\tUSB {:04x}:{:04x} {}",
                port.port_name,
                info.vid,
                info.pid,
                info.product.unwrap_or_default()
            ),
            other => println!("{}\t{:?}", port.port_name, other),
        }
    }

    Ok(())
}
