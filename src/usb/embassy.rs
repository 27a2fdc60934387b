//! Bridge to `embassy-usb`.
//!
//! `embassy-usb` builds its own device and string descriptors from a
//! [`Config`]. This fills that config from a [`DeviceIdentity`] so a device
//! built with `embassy_usb::Builder` enumerates with the same identity and
//! the strings for the negotiated speed.

use embassy_usb::Config;

use super::provider::DeviceIdentity;
use super::Speed;

/// Device-level `embassy-usb` config for `identity` at `speed`.
pub fn usb_config(identity: &'static DeviceIdentity, speed: Speed) -> Config<'static> {
    let device = &identity.device;

    let mut config = Config::new(device.vendor_id, device.product_id);
    config.device_class = device.device_class;
    config.device_sub_class = device.device_sub_class;
    config.device_protocol = device.device_protocol;
    config.composite_with_iads = false;
    config.device_release = device.bcd_device;
    config.max_packet_size_0 = device.max_packet_size_0;
    config.manufacturer = Some(identity.manufacturer);
    config.product = Some(*identity.product.select(speed));
    config.serial_number = Some(*identity.serial_number.select(speed));

    debug!("embassy-usb config ({})", speed);
    config
}
