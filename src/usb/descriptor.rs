//! Fixed USB standard descriptors, built at compile time.
//!
//! Device descriptor layout (18 bytes):
//! ```text
//! Byte 0:      bLength (0x12)
//! Byte 1:      bDescriptorType (0x01 = DEVICE)
//! Byte 2-3:    bcdUSB (LE)
//! Byte 4-6:    bDeviceClass / bDeviceSubClass / bDeviceProtocol
//!              (all 0 - class is declared per interface)
//! Byte 7:      bMaxPacketSize0
//! Byte 8-9:    idVendor (LE)
//! Byte 10-11:  idProduct (LE)
//! Byte 12-13:  bcdDevice (LE)
//! Byte 14-16:  iManufacturer / iProduct / iSerialNumber
//! Byte 17:     bNumConfigurations
//! ```
//!
//! LANGID string descriptor layout (4 bytes):
//! ```text
//! Byte 0:      bLength (0x04)
//! Byte 1:      bDescriptorType (0x03 = STRING)
//! Byte 2-3:    wLANGID[0] (LE)
//! ```

use crate::config;

use super::{
    DESC_TYPE_DEVICE, DESC_TYPE_STRING, IDX_MFC_STR, IDX_PRODUCT_STR, IDX_SERIAL_STR,
    LEN_DEV_DESC, LEN_LANGID_STR_DESC,
};

/// Word-aligned storage so the controller can DMA straight out of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C, align(4))]
pub struct Aligned<T>(pub T);

impl<const N: usize> Aligned<[u8; N]> {
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Field values of a standard device descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceDescriptor {
    pub bcd_usb: u16,
    pub device_class: u8,
    pub device_sub_class: u8,
    pub device_protocol: u8,
    pub max_packet_size_0: u8,
    pub vendor_id: u16,
    pub product_id: u16,
    pub bcd_device: u16,
    pub manufacturer_index: u8,
    pub product_index: u8,
    pub serial_index: u8,
    pub num_configurations: u8,
}

impl DeviceDescriptor {
    /// Interface-level class device with the standard string indices and
    /// the release/packet-size values from [`crate::config`].
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            bcd_usb: config::USB_BCD_USB,
            device_class: 0x00,
            device_sub_class: 0x00,
            device_protocol: 0x00,
            max_packet_size_0: config::USB_MAX_EP0_SIZE,
            vendor_id,
            product_id,
            bcd_device: config::USB_BCD_DEVICE,
            manufacturer_index: IDX_MFC_STR,
            product_index: IDX_PRODUCT_STR,
            serial_index: IDX_SERIAL_STR,
            num_configurations: config::USB_MAX_NUM_CONFIGURATION,
        }
    }

    /// Serialise into the USB 2.0 wire layout.
    pub const fn bytes(&self) -> Aligned<[u8; LEN_DEV_DESC]> {
        let usb = self.bcd_usb.to_le_bytes();
        let vid = self.vendor_id.to_le_bytes();
        let pid = self.product_id.to_le_bytes();
        let rel = self.bcd_device.to_le_bytes();
        Aligned([
            LEN_DEV_DESC as u8,
            DESC_TYPE_DEVICE,
            usb[0],
            usb[1],
            self.device_class,
            self.device_sub_class,
            self.device_protocol,
            self.max_packet_size_0,
            vid[0],
            vid[1],
            pid[0],
            pid[1],
            rel[0],
            rel[1],
            self.manufacturer_index,
            self.product_index,
            self.serial_index,
            self.num_configurations,
        ])
    }
}

/// String descriptor zero: the single supported language.
pub const fn lang_id_descriptor(lang_id: u16) -> Aligned<[u8; LEN_LANGID_STR_DESC]> {
    let id = lang_id.to_le_bytes();
    Aligned([LEN_LANGID_STR_DESC as u8, DESC_TYPE_STRING, id[0], id[1]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_descriptor_layout() {
        let desc = DeviceDescriptor::new(0x1209, 0x0001).bytes();
        assert_eq!(
            desc.0,
            [
                0x12, 0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x40, 0x09, 0x12, 0x01, 0x00, 0x00, 0x02,
                0x01, 0x02, 0x03, 0x01
            ]
        );
    }

    #[test]
    fn lang_id_layout() {
        assert_eq!(lang_id_descriptor(0x0407).0, [0x04, 0x03, 0x07, 0x04]);
    }

    #[test]
    fn aligned_storage_is_word_aligned() {
        assert_eq!(core::mem::align_of::<Aligned<[u8; LEN_DEV_DESC]>>(), 4);
        let desc = DeviceDescriptor::new(0, 0).bytes();
        assert_eq!(desc.as_bytes().as_ptr() as usize % 4, 0);
    }
}
