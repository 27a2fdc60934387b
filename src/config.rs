//! Compile-time device identity.
//!
//! VID/PID, language, string literals and buffer sizing live here so they
//! can be tuned in one place. `usb::provider::HID_JOYSTICK` is assembled
//! from these values.

// USB identity

/// USB VID/PID - STMicroelectronics VID with the HID joystick demo PID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x0483;
pub const USB_PID: u16 = 0x5710;

/// USB specification release (BCD). 0x0200 = USB 2.0.
pub const USB_BCD_USB: u16 = 0x0200;

/// Device release number (BCD). 0x0200 = rel. 2.00.
pub const USB_BCD_DEVICE: u16 = 0x0200;

/// Max packet size of control endpoint 0 (bytes).
pub const USB_MAX_EP0_SIZE: u8 = 64;

/// Number of configurations reported in the device descriptor.
pub const USB_MAX_NUM_CONFIGURATION: u8 = 1;

/// String descriptor language. 0x0409 = English (United States).
pub const USB_LANGID: u16 = 0x0409;

// Strings

pub const USB_MANUFACTURER: &str = "STMicroelectronics";

pub const USB_PRODUCT_HS: &str = "HID Joystick in HS Mode";
pub const USB_PRODUCT_FS: &str = "HID Joystick in FS Mode";

pub const USB_SERIAL_NUMBER_HS: &str = "00000000001A";
pub const USB_SERIAL_NUMBER_FS: &str = "00000000001B";

pub const USB_CONFIGURATION_HS: &str = "HID Config in HS Mode";
pub const USB_CONFIGURATION_FS: &str = "HID Config in FS Mode";

pub const USB_INTERFACE_HS: &str = "HID Interface in HS Mode";
pub const USB_INTERFACE_FS: &str = "HID Interface in FS Mode";

// Buffers

/// Capacity of the shared string-descriptor scratch buffer (bytes).
pub const MAX_STR_DESC_SIZE: usize = 0x100;
