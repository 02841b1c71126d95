use crate::common::cmd_defs::CommandSlot;
use crate::control::address::{DeviceAddress, InstanceAddress};
use crate::control::cmd_defs::device_command;
use crate::control::event::EventDescriptor;
use crate::error::DecodeError;
use crate::gear::address::GearAddress;
use crate::gear::cmd_defs::{gear_command, special_command};
use crate::utils::fallback::FallbackDecoder;
use crate::utils::frame::Frame;
use log::debug;
use std::fmt;

/// A decoded frame. Rendered to text with `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Gear {
        address: GearAddress,
        command: CommandSlot,
    },
    SpecialGear {
        command: CommandSlot,
        data: u8,
    },
    Device {
        device: DeviceAddress,
        instance: InstanceAddress,
        command: CommandSlot,
    },
    Event(EventDescriptor),
    Fallback(String),
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoded::Gear { address, command } => write!(f, "{} {}", address, command),
            Decoded::SpecialGear { command, data } => {
                write!(f, "Special Gear {}({})", command, data)
            }
            Decoded::Device {
                device,
                instance,
                command,
            } => write!(f, "{} {} {}", device, instance, command),
            Decoded::Event(event) => event.fmt(f),
            Decoded::Fallback(s) => f.write_str(s),
        }
    }
}

fn classify_16bit(b0: u8, b1: u8) -> Option<Decoded> {
    if let Ok(address) = GearAddress::from_bus_address(b0) {
        Some(Decoded::Gear {
            address,
            command: gear_command(b1),
        })
    } else if b0 & 0x81 == 0x81 && b0 > 0xa0 && b0 <= 0xcb {
        Some(Decoded::SpecialGear {
            command: special_command(b0),
            data: b1,
        })
    } else {
        None
    }
}

fn classify_24bit(b0: u8, b1: u8, b2: u8) -> Decoded {
    if b0 & 0x01 != 0 {
        Decoded::Device {
            device: DeviceAddress::from_bus_address(b0),
            instance: InstanceAddress::from_bus_address(b1),
            command: device_command(b2),
        }
    } else {
        Decoded::Event(EventDescriptor::from_bytes(b0, b1))
    }
}

/// Fast path classification. Returns `None` for frames left to a fallback decoder.
pub fn classify(frame: &Frame) -> Option<Decoded> {
    let pkt = frame.bytes();
    match frame.bit_length() {
        16 => classify_16bit(pkt[0], pkt[1]),
        24 => Some(classify_24bit(pkt[0], pkt[1], pkt[2])),
        _ => None,
    }
}

pub fn decode_frame(frame: &Frame, fallback: &dyn FallbackDecoder) -> Result<Decoded, DecodeError> {
    if let Some(decoded) = classify(frame) {
        return Ok(decoded);
    }
    debug!("Frame {} not classified, using fallback decoder", frame);
    fallback.decode(frame).map(Decoded::Fallback)
}

#[cfg(test)]
mod test {
    use super::{classify, decode_frame, Decoded};
    use crate::common::cmd_defs::CommandSlot;
    use crate::control::address::{DeviceAddress, InstanceAddress};
    use crate::error::DecodeError;
    use crate::utils::fallback::{FallbackDecoder, StandardDecoder};
    use crate::utils::frame::Frame;
    use std::cell::RefCell;

    /// Records the frames it is asked to decode
    struct StubDecoder {
        seen: RefCell<Vec<Frame>>,
        fail: bool,
    }

    impl StubDecoder {
        fn new(fail: bool) -> StubDecoder {
            StubDecoder {
                seen: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl FallbackDecoder for StubDecoder {
        fn decode(&self, frame: &Frame) -> Result<String, DecodeError> {
            self.seen.borrow_mut().push(*frame);
            if self.fail {
                Err(DecodeError::UnrecognizedFrame(*frame, "stub"))
            } else {
                Ok(format!("stub {}", frame))
            }
        }
    }

    fn describe(hex: &str) -> String {
        let stub = StubDecoder::new(false);
        decode_frame(&Frame::from_hex(hex).unwrap(), &stub)
            .unwrap()
            .to_string()
    }

    #[test]
    fn gear_frames() {
        assert_eq!(describe("0101"), "Gear[0] Up");
        assert_eq!(describe("ff00"), "Gear Broadcast Off");
        assert_eq!(describe("0b15"), "Gear[5] GoToScene 5");
        assert_eq!(describe("7fb3"), "Gear[63] QueryScene 3 Level");
        assert_eq!(describe("010d"), "Gear[0] Reserved(0x0d)");
    }

    #[test]
    fn special_gear_frames() {
        assert_eq!(describe("a500"), "Special Gear Initialise(0)");
        assert_eq!(describe("a1ff"), "Special Gear Terminate(255)");
        assert_eq!(describe("c9ff"), "Special Gear WriteMemoryLocationNoReply(255)");
        assert_eq!(describe("cb07"), "Special Gear Reserved(0xcb)(7)");
    }

    #[test]
    fn device_frames() {
        assert_eq!(describe("01ff99"), "DEV[0] InstanceBroadcast Reserved(0x99)");
        assert_eq!(describe("01a580"), "DEV[0] FeatureInstanceGroup[5] QueryInstanceType");
        assert_eq!(describe("fffe00"), "Device Broadcast No Instance IdentifyDevice");
        assert_eq!(
            describe("fd4634"),
            "Unaddressed Device Broadcast reserved QueryVersionNumber"
        );
        let frame = Frame::from([0x03, 0x85, 0x62]);
        assert_eq!(
            classify(&frame),
            Some(Decoded::Device {
                device: DeviceAddress::Device(1),
                instance: InstanceAddress::InstanceGroup(5),
                command: crate::control::cmd_defs::device_command(0x62),
            })
        );
    }

    #[test]
    fn event_frames() {
        assert_eq!(describe("068b00"), "device 3 instance 5 EVENT 0x306");
        assert_eq!(describe("840000"), "device group 2 type 0 EVENT 0x084");
        assert_eq!(describe("c40000"), "instance group 34 type 0 EVENT 0x0c4");
        assert_eq!(describe("848200"), "Type 2 Instance 1 EVENT 0x284");
    }

    #[test]
    fn unclassified_frames_use_fallback() {
        // DAPC, group command, special command outside the fast path range, odd lengths
        for hex in ["0280", "8305", "9f00", "cd00", "fe00", "12", "123", "12345", "12345678"] {
            let stub = StubDecoder::new(false);
            let frame = Frame::from_hex(hex).unwrap();
            assert_eq!(classify(&frame), None);
            let res = decode_frame(&frame, &stub).unwrap();
            assert_eq!(res, Decoded::Fallback(format!("stub {}", hex)));
            assert_eq!(stub.seen.borrow().as_slice(), &[frame]);
        }
    }

    #[test]
    fn fast_path_does_not_call_fallback() {
        let stub = StubDecoder::new(true);
        for hex in ["0101", "ff00", "a500", "01ff99", "068b00"] {
            assert!(decode_frame(&Frame::from_hex(hex).unwrap(), &stub).is_ok());
        }
        assert!(stub.seen.borrow().is_empty());
    }

    #[test]
    fn fallback_failure_propagates() {
        let stub = StubDecoder::new(true);
        let frame = Frame::from_hex("0280").unwrap();
        assert_eq!(
            decode_frame(&frame, &stub),
            Err(DecodeError::UnrecognizedFrame(frame, "stub"))
        );
    }

    #[test]
    fn standard_fallback() {
        let frame = Frame::from_hex("0280").unwrap();
        assert_eq!(
            decode_frame(&frame, &StandardDecoder).unwrap().to_string(),
            "Addr: 1: Set power = 128"
        );
    }

    #[test]
    fn idempotent() {
        for v in 0..=0xffffu32 {
            let frame = Frame::from([(v >> 8) as u8, v as u8]);
            let a = decode_frame(&frame, &StandardDecoder);
            let b = decode_frame(&frame, &StandardDecoder);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn unassigned_slots_are_distinct() {
        let frame = Frame::from([0x01, 0x0d]);
        match classify(&frame) {
            Some(Decoded::Gear { command, .. }) => {
                assert_eq!(command, CommandSlot::Unassigned(0x0d))
            }
            r => panic!("Unexpected classification: {:?}", r),
        }
    }
}
