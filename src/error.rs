//! Unified error type for joystick-desc.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! None of these can surface from the descriptor callbacks themselves;
//! they come from the places where runtime data enters (custom identities,
//! raw speed values, the public string encoder).

use core::fmt;

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Output buffer too small for the encoded descriptor.
    BufferOverflow {
        /// Bytes the descriptor needs.
        needed: usize,
        /// Bytes the buffer can hold.
        capacity: usize,
    },

    /// String does not fit the 8-bit `bLength` of a string descriptor.
    StringTooLong {
        /// UTF-16 code units in the rejected string.
        units: usize,
    },

    /// Raw speed value outside the controller's speed encoding.
    InvalidSpeed(u8),

    /// No string descriptor is registered at this index.
    UnknownStringIndex(u8),

    /// Two user strings claim the same index.
    DuplicateStringIndex(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferOverflow { needed, capacity } => write!(
                f,
                "descriptor needs {} bytes but buffer holds {}",
                needed, capacity
            ),
            Error::StringTooLong { units } => {
                write!(f, "string of {} UTF-16 units exceeds a string descriptor", units)
            }
            Error::InvalidSpeed(raw) => write!(f, "invalid USB speed value {}", raw),
            Error::UnknownStringIndex(idx) => write!(f, "no string descriptor at index {}", idx),
            Error::DuplicateStringIndex(idx) => {
                write!(f, "string descriptor index {} registered twice", idx)
            }
        }
    }
}
