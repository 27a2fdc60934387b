//! Descriptor set - the callback table the USB device core binds to.

use super::provider::DescriptorProvider;
use super::{DescriptorKind, Speed};

/// One descriptor callback: `(provider, speed) -> descriptor bytes`.
pub type DescriptorCallback = for<'a> fn(&'a mut DescriptorProvider, Speed) -> &'a [u8];

/// Seven callbacks, one per [`DescriptorKind`]. Built once, never mutated.
#[derive(Clone, Copy)]
pub struct DescriptorSet {
    pub device: DescriptorCallback,
    pub lang_id: DescriptorCallback,
    pub manufacturer: DescriptorCallback,
    pub product: DescriptorCallback,
    pub serial: DescriptorCallback,
    pub configuration: DescriptorCallback,
    pub interface: DescriptorCallback,
}

impl DescriptorSet {
    pub const fn callback(&self, kind: DescriptorKind) -> DescriptorCallback {
        match kind {
            DescriptorKind::Device => self.device,
            DescriptorKind::LangId => self.lang_id,
            DescriptorKind::Manufacturer => self.manufacturer,
            DescriptorKind::Product => self.product,
            DescriptorKind::Serial => self.serial,
            DescriptorKind::Configuration => self.configuration,
            DescriptorKind::Interface => self.interface,
        }
    }

    /// Invoke the callback for `kind`.
    pub fn request<'a>(
        &self,
        provider: &'a mut DescriptorProvider,
        kind: DescriptorKind,
        speed: Speed,
    ) -> &'a [u8] {
        (self.callback(kind))(provider, speed)
    }
}

fn device(p: &mut DescriptorProvider, speed: Speed) -> &[u8] {
    p.device_descriptor(speed)
}

fn lang_id(p: &mut DescriptorProvider, speed: Speed) -> &[u8] {
    p.lang_id_descriptor(speed)
}

fn manufacturer(p: &mut DescriptorProvider, speed: Speed) -> &[u8] {
    p.manufacturer_string(speed)
}

fn product(p: &mut DescriptorProvider, speed: Speed) -> &[u8] {
    p.product_string(speed)
}

fn serial(p: &mut DescriptorProvider, speed: Speed) -> &[u8] {
    p.serial_string(speed)
}

fn configuration(p: &mut DescriptorProvider, speed: Speed) -> &[u8] {
    p.configuration_string(speed)
}

fn interface(p: &mut DescriptorProvider, speed: Speed) -> &[u8] {
    p.interface_string(speed)
}

/// The HID joystick's descriptor set.
pub const HID_DESCRIPTOR_SET: DescriptorSet = DescriptorSet {
    device,
    lang_id,
    manufacturer,
    product,
    serial,
    configuration,
    interface,
};
