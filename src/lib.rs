//! USB descriptor set for a dual-speed (High-Speed / Full-Speed) HID joystick.
//!
//! The USB device core drives enumeration and, for each `GET_DESCRIPTOR`,
//! calls one entry of [`usb::registry::HID_DESCRIPTOR_SET`] with the
//! negotiated [`usb::Speed`]. The entry returns the descriptor bytes, either
//! from a compile-time constant or freshly encoded into the provider's
//! string scratch slot.
//!
//! ```
//! use joystick_desc::usb::provider::DescriptorProvider;
//! use joystick_desc::usb::registry::HID_DESCRIPTOR_SET;
//! use joystick_desc::usb::{DescriptorKind, Speed};
//!
//! let mut provider = DescriptorProvider::hid_joystick();
//! let product = HID_DESCRIPTOR_SET.request(&mut provider, DescriptorKind::Product, Speed::Full);
//! assert_eq!(product[1], 0x03);
//! ```
//!
//! Host tests: `cargo test`. With the `defmt` feature every request is
//! traced; with `embassy` an `embassy_usb::Config` can be derived from the
//! same identity.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod usb;

pub use error::Error;
pub use usb::provider::{DescriptorProvider, DeviceIdentity, HID_JOYSTICK};
pub use usb::registry::{DescriptorSet, HID_DESCRIPTOR_SET};
pub use usb::{DescriptorKind, Speed};
