//! Integration tests: walk the descriptor set the way a USB core enumerates.

use joystick_desc::usb::{copy_out, OwnedDescriptor};
use joystick_desc::{DescriptorKind, DescriptorProvider, Speed, HID_DESCRIPTOR_SET};

/// Fetch every descriptor in set order, copying each out before the next
/// request as the core must.
fn enumerate(speed: Speed) -> heapless::Vec<OwnedDescriptor, 7> {
    let mut provider = DescriptorProvider::hid_joystick();
    let mut out = heapless::Vec::new();
    for kind in DescriptorKind::ALL {
        let bytes = HID_DESCRIPTOR_SET.request(&mut provider, kind, speed);
        out.push(copy_out(bytes).expect("descriptor fits")).unwrap();
    }
    out
}

#[test]
fn high_speed_enumeration() {
    let descs = enumerate(Speed::High);
    assert_eq!(descs[0].len(), 18);
    assert_eq!(&descs[1][..], &[0x04, 0x03, 0x09, 0x04]);
    // "HID Joystick in HS Mode" = 23 chars.
    assert_eq!(descs[3][0], 2 + 2 * 23);
    assert_eq!(descs[3][1], 0x03);
    assert_eq!(&descs[3][2..6], &[b'H', 0x00, b'I', 0x00]);
}

#[test]
fn speeds_share_fixed_descriptors_and_manufacturer() {
    let hs = enumerate(Speed::High);
    let fs = enumerate(Speed::Full);
    assert_eq!(hs[0], fs[0]);
    assert_eq!(hs[1], fs[1]);
    assert_eq!(hs[2], fs[2]);
    for i in 3..7 {
        assert_ne!(hs[i], fs[i], "entry {} should vary with speed", i);
    }
}

#[test]
fn string_requests_by_raw_index_and_speed() {
    let mut provider = DescriptorProvider::hid_joystick();
    let speed = Speed::try_from(1).unwrap();
    let serial = provider.string_descriptor(3, speed).unwrap();
    assert_eq!(serial.len(), 26);
    assert_eq!(serial[serial.len() - 2..], [b'B', 0x00]);
}
