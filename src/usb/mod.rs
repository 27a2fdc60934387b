//! USB descriptor set for the dual-speed HID joystick.
//!
//! The USB device core owns enumeration; during `GET_DESCRIPTOR` it calls
//! into the [`registry::DescriptorSet`] with the negotiated link speed and
//! copies the returned bytes into its data stage:
//!
//! - Device and LANGID descriptors are fixed, built at compile time.
//! - Manufacturer is one literal for every speed.
//! - Product, serial, configuration and interface strings have one literal
//!   per speed and are encoded into the provider's scratch buffer on demand.

pub mod descriptor;
#[cfg(feature = "embassy")]
pub mod embassy;
pub mod provider;
pub mod registry;
pub mod string;


use crate::config::MAX_STR_DESC_SIZE;
use crate::error::Error;

// Descriptor types (USB 2.0 table 9-5)

pub const DESC_TYPE_DEVICE: u8 = 0x01;
pub const DESC_TYPE_STRING: u8 = 0x03;

// Descriptor lengths

pub const LEN_DEV_DESC: usize = 0x12;
pub const LEN_LANGID_STR_DESC: usize = 0x04;

// String indices baked into the device descriptor

pub const IDX_LANGID_STR: u8 = 0x00;
pub const IDX_MFC_STR: u8 = 0x01;
pub const IDX_PRODUCT_STR: u8 = 0x02;
pub const IDX_SERIAL_STR: u8 = 0x03;
pub const IDX_CONFIG_STR: u8 = 0x04;
pub const IDX_INTERFACE_STR: u8 = 0x05;

/// Negotiated link speed, in the controller's raw encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Speed {
    High = 0,
    Full = 1,
    Low = 2,
}

impl TryFrom<u8> for Speed {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Error> {
        match raw {
            0 => Ok(Speed::High),
            1 => Ok(Speed::Full),
            2 => Ok(Speed::Low),
            other => Err(Error::InvalidSpeed(other)),
        }
    }
}

/// One entry of the descriptor set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DescriptorKind {
    Device,
    LangId,
    Manufacturer,
    Product,
    Serial,
    Configuration,
    Interface,
}

impl DescriptorKind {
    /// All kinds, in descriptor-set order.
    pub const ALL: [DescriptorKind; 7] = [
        DescriptorKind::Device,
        DescriptorKind::LangId,
        DescriptorKind::Manufacturer,
        DescriptorKind::Product,
        DescriptorKind::Serial,
        DescriptorKind::Configuration,
        DescriptorKind::Interface,
    ];

    /// Map a `GET_DESCRIPTOR(STRING, idx)` index to the standard string it
    /// names. Indices past the interface string belong to user strings.
    pub const fn from_string_index(idx: u8) -> Option<Self> {
        match idx {
            IDX_LANGID_STR => Some(DescriptorKind::LangId),
            IDX_MFC_STR => Some(DescriptorKind::Manufacturer),
            IDX_PRODUCT_STR => Some(DescriptorKind::Product),
            IDX_SERIAL_STR => Some(DescriptorKind::Serial),
            IDX_CONFIG_STR => Some(DescriptorKind::Configuration),
            IDX_INTERFACE_STR => Some(DescriptorKind::Interface),
            _ => None,
        }
    }

    /// String index of this kind; `None` for the device descriptor.
    pub const fn string_index(self) -> Option<u8> {
        match self {
            DescriptorKind::Device => None,
            DescriptorKind::LangId => Some(IDX_LANGID_STR),
            DescriptorKind::Manufacturer => Some(IDX_MFC_STR),
            DescriptorKind::Product => Some(IDX_PRODUCT_STR),
            DescriptorKind::Serial => Some(IDX_SERIAL_STR),
            DescriptorKind::Configuration => Some(IDX_CONFIG_STR),
            DescriptorKind::Interface => Some(IDX_INTERFACE_STR),
        }
    }

    /// Whether the bytes for this kind come from the scratch buffer.
    pub const fn is_encoded(self) -> bool {
        !matches!(self, DescriptorKind::Device | DescriptorKind::LangId)
    }
}

/// A descriptor copied out of the provider, owned by the caller.
pub type OwnedDescriptor = heapless::Vec<u8, MAX_STR_DESC_SIZE>;

/// Copy descriptor bytes into an owned buffer so the provider can be
/// asked for the next string.
pub fn copy_out(bytes: &[u8]) -> Result<OwnedDescriptor, Error> {
    OwnedDescriptor::from_slice(bytes).map_err(|_| Error::BufferOverflow {
        needed: bytes.len(),
        capacity: MAX_STR_DESC_SIZE,
    })
}
