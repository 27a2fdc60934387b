//! Descriptor provider - answers descriptor requests for one device identity.
//!
//! The device and LANGID descriptors are built once from the identity and
//! served as-is for every speed. String descriptors are encoded into a
//! single scratch slot owned by the provider; every request overwrites it.

use super::descriptor::{lang_id_descriptor, Aligned, DeviceDescriptor};
use super::string::{check_fits, StringBuffer};
use super::{DescriptorKind, Speed, IDX_INTERFACE_STR, LEN_DEV_DESC, LEN_LANGID_STR_DESC};
use crate::config;
use crate::config::MAX_STR_DESC_SIZE;
use crate::error::Error;

/// A value with one variant per link speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PerSpeed<T> {
    pub high: T,
    pub full: T,
}

impl<T> PerSpeed<T> {
    pub const fn new(high: T, full: T) -> Self {
        Self { high, full }
    }

    /// High-Speed gets `high`; every other speed gets `full`.
    pub const fn select(&self, speed: Speed) -> &T {
        match speed {
            Speed::High => &self.high,
            Speed::Full | Speed::Low => &self.full,
        }
    }
}

/// Extra string descriptor served at an index past the standard ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UserString {
    pub index: u8,
    pub value: PerSpeed<&'static str>,
}

/// Everything that ends up in the joystick's descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    pub device: DeviceDescriptor,
    pub lang_id: u16,
    pub manufacturer: &'static str,
    pub product: PerSpeed<&'static str>,
    pub serial_number: PerSpeed<&'static str>,
    pub configuration: PerSpeed<&'static str>,
    pub interface: PerSpeed<&'static str>,
    pub user_strings: &'static [UserString],
}

impl DeviceIdentity {
    /// Literal for a string kind at `speed`; `None` for the binary kinds.
    pub const fn string(&self, kind: DescriptorKind, speed: Speed) -> Option<&'static str> {
        match kind {
            DescriptorKind::Device | DescriptorKind::LangId => None,
            DescriptorKind::Manufacturer => Some(self.manufacturer),
            DescriptorKind::Product => Some(*self.product.select(speed)),
            DescriptorKind::Serial => Some(*self.serial_number.select(speed)),
            DescriptorKind::Configuration => Some(*self.configuration.select(speed)),
            DescriptorKind::Interface => Some(*self.interface.select(speed)),
        }
    }

    /// Check every literal (both speeds, user strings included) fits the
    /// scratch slot, and user strings sit past the standard indices with
    /// no index used twice.
    pub const fn check(&self) -> Result<(), Error> {
        const SPEEDS: [Speed; 2] = [Speed::High, Speed::Full];
        const KINDS: [DescriptorKind; 7] = DescriptorKind::ALL;

        let mut s = 0;
        while s < SPEEDS.len() {
            let mut k = 0;
            while k < KINDS.len() {
                if KINDS[k].is_encoded() {
                    if let Some(literal) = self.string(KINDS[k], SPEEDS[s]) {
                        if let Err(e) = check_fits(literal, MAX_STR_DESC_SIZE) {
                            return Err(e);
                        }
                    }
                }
                k += 1;
            }

            let mut u = 0;
            while u < self.user_strings.len() {
                let user = &self.user_strings[u];
                if user.index <= IDX_INTERFACE_STR {
                    return Err(Error::UnknownStringIndex(user.index));
                }
                let mut prev = 0;
                while prev < u {
                    if self.user_strings[prev].index == user.index {
                        return Err(Error::DuplicateStringIndex(user.index));
                    }
                    prev += 1;
                }
                if let Err(e) = check_fits(*user.value.select(SPEEDS[s]), MAX_STR_DESC_SIZE) {
                    return Err(e);
                }
                u += 1;
            }
            s += 1;
        }
        Ok(())
    }
}

/// The HID joystick's identity, from [`crate::config`].
pub const HID_JOYSTICK: DeviceIdentity = DeviceIdentity {
    device: DeviceDescriptor::new(config::USB_VID, config::USB_PID),
    lang_id: config::USB_LANGID,
    manufacturer: config::USB_MANUFACTURER,
    product: PerSpeed::new(config::USB_PRODUCT_HS, config::USB_PRODUCT_FS),
    serial_number: PerSpeed::new(config::USB_SERIAL_NUMBER_HS, config::USB_SERIAL_NUMBER_FS),
    configuration: PerSpeed::new(config::USB_CONFIGURATION_HS, config::USB_CONFIGURATION_FS),
    interface: PerSpeed::new(config::USB_INTERFACE_HS, config::USB_INTERFACE_FS),
    user_strings: &[],
};

// The built-in literal set must fit the scratch slot.
const _: () = assert!(HID_JOYSTICK.check().is_ok());

/// Serves descriptor bytes for one identity.
pub struct DescriptorProvider {
    identity: &'static DeviceIdentity,
    device: Aligned<[u8; LEN_DEV_DESC]>,
    lang_id: Aligned<[u8; LEN_LANGID_STR_DESC]>,
    scratch: StringBuffer,
}

impl DescriptorProvider {
    /// Provider for a custom identity. Fails if any literal would not fit
    /// the scratch slot.
    pub fn new(identity: &'static DeviceIdentity) -> Result<Self, Error> {
        if let Err(e) = identity.check() {
            warn!("descriptor identity rejected: {}", e);
            return Err(e);
        }
        debug!(
            "descriptor provider for {:x}:{:x}",
            identity.device.vendor_id,
            identity.device.product_id
        );
        Ok(Self::build(identity))
    }

    /// Provider for the built-in HID joystick identity.
    pub const fn hid_joystick() -> Self {
        Self::build(&HID_JOYSTICK)
    }

    const fn build(identity: &'static DeviceIdentity) -> Self {
        Self {
            identity,
            device: identity.device.bytes(),
            lang_id: lang_id_descriptor(identity.lang_id),
            scratch: StringBuffer::new(),
        }
    }

    pub fn identity(&self) -> &'static DeviceIdentity {
        self.identity
    }

    /// Standard device descriptor. Identical for every speed.
    pub fn device_descriptor(&self, speed: Speed) -> &[u8] {
        trace!("device descriptor ({})", speed);
        self.device.as_bytes()
    }

    /// String descriptor zero (supported languages). Identical for every speed.
    pub fn lang_id_descriptor(&self, speed: Speed) -> &[u8] {
        trace!("LANGID descriptor ({})", speed);
        self.lang_id.as_bytes()
    }

    pub fn manufacturer_string(&mut self, speed: Speed) -> &[u8] {
        self.encode(DescriptorKind::Manufacturer, speed)
    }

    pub fn product_string(&mut self, speed: Speed) -> &[u8] {
        self.encode(DescriptorKind::Product, speed)
    }

    pub fn serial_string(&mut self, speed: Speed) -> &[u8] {
        self.encode(DescriptorKind::Serial, speed)
    }

    pub fn configuration_string(&mut self, speed: Speed) -> &[u8] {
        self.encode(DescriptorKind::Configuration, speed)
    }

    pub fn interface_string(&mut self, speed: Speed) -> &[u8] {
        self.encode(DescriptorKind::Interface, speed)
    }

    /// Any descriptor of the set by kind.
    pub fn descriptor(&mut self, kind: DescriptorKind, speed: Speed) -> &[u8] {
        if kind.is_encoded() {
            return self.encode(kind, speed);
        }
        match kind {
            DescriptorKind::Device => self.device_descriptor(speed),
            _ => self.lang_id_descriptor(speed),
        }
    }

    /// String descriptor by `GET_DESCRIPTOR(STRING, idx)` index, standard
    /// and user strings alike.
    pub fn string_descriptor(&mut self, index: u8, speed: Speed) -> Result<&[u8], Error> {
        match DescriptorKind::from_string_index(index) {
            Some(kind) => Ok(self.descriptor(kind, speed)),
            None => self.user_string(index, speed),
        }
    }

    /// User-defined string registered at `index`.
    pub fn user_string(&mut self, index: u8, speed: Speed) -> Result<&[u8], Error> {
        let user = self
            .identity
            .user_strings
            .iter()
            .find(|u| u.index == index)
            .ok_or(Error::UnknownStringIndex(index))?;
        let bytes = self.scratch.encode(user.value.select(speed));
        trace!("user string {} ({}): {} bytes", index, speed, bytes.len());
        Ok(bytes)
    }

    fn encode(&mut self, kind: DescriptorKind, speed: Speed) -> &[u8] {
        let literal = self.identity.string(kind, speed).unwrap_or_default();
        let bytes = self.scratch.encode(literal);
        trace!("{} string ({}): {} bytes", kind, speed, bytes.len());
        bytes
    }
}
