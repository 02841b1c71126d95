use crate::control::address::InstanceAddress;
use crate::control::cmd_defs::{device_command, is_instance_command};
use crate::error::DecodeError;
use crate::gear::cmd_defs::{self as gear, gear_command};
use crate::utils::frame::Frame;

/// Decoder used for frames the fast path does not classify.
pub trait FallbackDecoder {
    fn decode(&self, frame: &Frame) -> Result<String, DecodeError>;
}

/// Decodes 8, 16 and 24-bit frames according to IEC 62386 framing.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardDecoder;

type Reason = &'static str;

fn decode_addr(addr: u8) -> Result<String, Reason> {
    if addr & 0xfe == 0xfe {
        Ok("Broadcast".to_string())
    } else if addr & 0xfe == 0xfc {
        Ok("Unaddressed".to_string())
    } else if addr & 0x80 != 0 {
        if addr & 0x60 != 0 {
            Err("Illegal group address")
        } else {
            Ok(format!("Group: {}", (addr >> 1) & 0x0f))
        }
    } else {
        Ok(format!("Addr: {}", (addr >> 1) & 0x3f))
    }
}

fn decode_special_16bit(pkt: &[u8]) -> Result<String, Reason> {
    let data = pkt[1];
    let s = match pkt[0] {
        gear::TERMINATE => "Terminate".to_string(),
        gear::DTR0 => format!("Set DTR0 = {} (0x{:02x})", data, data),
        gear::DTR1 => format!("Set DTR1 = {} (0x{:02x})", data, data),
        gear::DTR2 => format!("Set DTR2 = {} (0x{:02x})", data, data),
        gear::INITIALISE => format!("Initialise {} (0x{:02x})", data, data),
        gear::RANDOMISE => "Randomise".to_string(),
        gear::COMPARE => "Compare".to_string(),
        gear::WITHDRAW => "Withdraw".to_string(),
        gear::PING => "Ping".to_string(),
        gear::SEARCHADDRH => format!("Search address high 0x{:02x}", data),
        gear::SEARCHADDRM => format!("Search address middle 0x{:02x}", data),
        gear::SEARCHADDRL => format!("Search address low 0x{:02x}", data),
        gear::PROGRAM_SHORT_ADDRESS => {
            format!("Program short address {}", (data >> 1) & 0x3f)
        }
        gear::VERIFY_SHORT_ADDRESS => format!("Verify short address {}", (data >> 1) & 0x3f),
        gear::QUERY_SHORT_ADDRESS => "Query short address".to_string(),
        gear::PHYSICAL_SELECTION => "Physical selection".to_string(),
        gear::ENABLE_DEVICE_TYPE => format!("Enable device type {}", data),
        gear::WRITE_MEMORY_LOCATION => format!("Write memory location: 0x{:02x}", data),
        gear::WRITE_MEMORY_LOCATION_NO_REPLY => {
            format!("Write memory location (no reply): 0x{:02x}", data)
        }
        _ => return Err("Unknown special command"),
    };
    Ok(s)
}

fn decode_16bit(pkt: &[u8]) -> Result<String, Reason> {
    if pkt[0] & 1 != 0 {
        if pkt[0] & 0xe0 == 0xa0 || pkt[0] & 0xe0 == 0xc0 {
            decode_special_16bit(pkt)
        } else {
            Ok(format!("{}: {}", decode_addr(pkt[0])?, gear_command(pkt[1])))
        }
    } else {
        // Direct arc power control
        Ok(format!("{}: Set power = {}", decode_addr(pkt[0])?, pkt[1]))
    }
}

fn decode_cmd_addr_24bit(addr: u8) -> Option<String> {
    if addr & 0xfe == 0xfe {
        Some("Broadcast".to_string())
    } else if addr & 0xfe == 0xfc {
        Some("Unaddressed".to_string())
    } else if addr & 0xc0 == 0x80 {
        Some(format!("Group: {}", (addr >> 1) & 0x1f))
    } else if addr & 0x80 == 0x00 {
        Some(format!("Addr: {}", (addr >> 1) & 0x3f))
    } else {
        None
    }
}

fn decode_instance_type(instance_type: u8) -> &'static str {
    match instance_type {
        1 => "Push button",
        2 => "Absolute input device",
        3 => "Occupancy sensor",
        4 => "Light sensor",
        _ => "Unknown",
    }
}

fn decode_event_source(source: &[u8]) -> Result<String, Reason> {
    let source1 = (source[0] >> 1) & 0x3f;
    let source2 = (source[1] >> 2) & 0x1f;
    let s = match (source[0] & 0xc0, source[1] & 0x80) {
        (0x00, 0x00) | (0x40, 0x00) => format!(
            "Device addr: {}, Instance type: {}",
            source1,
            decode_instance_type(source2)
        ),
        (0x00, 0x80) | (0x40, 0x80) => {
            format!("Device addr: {}, Instance: {}", source1, source2)
        }
        (0x80, 0x00) => format!(
            "Device group: {}, Instance type: {}",
            source1 & 0x1f,
            decode_instance_type(source2)
        ),
        (0x80, 0x80) => format!("Device group: {}, Instance: {}", source1 & 0x1f, source2),
        (0xc0, 0x00) => format!(
            "Instance group: {}, Instance type: {}",
            source1 & 0x1f,
            decode_instance_type(source2)
        ),
        _ => return Err("Reserved event source"),
    };
    Ok(s)
}

fn decode_special_24bit(pkt: &[u8]) -> Result<String, Reason> {
    let s = match pkt[0] {
        0xc1 => match (pkt[1], pkt[2]) {
            (0x00, 0x00) => "Terminate".to_string(),
            (0x01, device) => {
                let device = if device == 0x7f {
                    "uninitialized".to_string()
                } else if device == 0xff {
                    "all".to_string()
                } else if device & 0xc0 == 0x00 {
                    format!("{} (0x{:02x})", device, device)
                } else {
                    "none".to_string()
                };
                format!("Initialise {}", device)
            }
            (0x02, 0x00) => "Randomise".to_string(),
            (0x03, 0x00) => "Compare".to_string(),
            (0x04, 0x00) => "Withdraw".to_string(),
            (0x05, d) => format!("Search address high 0x{:02x}", d),
            (0x06, d) => format!("Search address middle 0x{:02x}", d),
            (0x07, d) => format!("Search address low 0x{:02x}", d),
            (0x08, d) => format!("Program short address {}", d),
            (0x09, d) => format!("Verify short address {}", d),
            (0x0a, 0x00) => "Query short address".to_string(),
            (0x20, d) => format!("Write memory location. Data: {}", d),
            (0x21, d) => format!("Write memory location - no reply, data {}", d),
            (0x30, d) => format!("Set DTR0 = {} (0x{:02x})", d, d),
            (0x31, d) => format!("Set DTR1 = {} (0x{:02x})", d, d),
            (0x32, d) => format!("Set DTR2 = {} (0x{:02x})", d, d),
            (0x33, d) => format!(
                "Send testframe. {}, priority {}{}{}",
                if d & 0x20 == 0 { "24 bits" } else { "16 bits" },
                d & 0x07,
                if d & 0x40 == 0x40 { ", transaction" } else { "" },
                if d & 0x18 > 0 {
                    format!(", repeat {} times", (d & 0x18) >> 3)
                } else {
                    String::new()
                }
            ),
            _ => return Err("Unknown special command"),
        },
        0xc5 => format!("Direct write memory, offset {}, data {}", pkt[1], pkt[2]),
        0xc7 => format!(
            "Set DTR1 = {} (0x{:02x}), DTR0 = {} (0x{:02x})",
            pkt[1], pkt[1], pkt[2], pkt[2]
        ),
        0xc9 => format!(
            "Set DTR2 = {} (0x{:02x}), DTR1 = {} (0x{:02x})",
            pkt[1], pkt[1], pkt[2], pkt[2]
        ),
        _ => return Err("Unknown command"),
    };
    Ok(s)
}

fn decode_24bit(pkt: &[u8]) -> Result<String, Reason> {
    if pkt[0] & 1 == 1 {
        let Some(addr) = decode_cmd_addr_24bit(pkt[0]) else {
            return decode_special_24bit(pkt);
        };
        let Some(cmd) = device_command(pkt[2]).command().copied() else {
            return Err(if is_instance_command(pkt[2]) {
                "Unknown instance command"
            } else {
                "Unknown device command"
            });
        };
        if pkt[1] == 0xfe {
            Ok(format!("{}: {}", addr, cmd))
        } else {
            let instance = InstanceAddress::from_bus_address(pkt[1]);
            Ok(format!("{}, {}: {}", addr, instance, cmd))
        }
    } else {
        let value = (u16::from(pkt[1] & 0x03) << 8) | u16::from(pkt[2]);
        Ok(format!(
            "({}): {} (0x{:03x})",
            decode_event_source(&pkt[0..2])?,
            value,
            value
        ))
    }
}

impl FallbackDecoder for StandardDecoder {
    fn decode(&self, frame: &Frame) -> Result<String, DecodeError> {
        let pkt = frame.bytes();
        let res = match frame.bit_length() {
            8 => Ok(format!("Answer {} (0x{:02x})", pkt[0], pkt[0])),
            16 => decode_16bit(&pkt),
            24 => decode_24bit(&pkt),
            _ => Err("Invalid frame length"),
        };
        res.map_err(|reason| DecodeError::UnrecognizedFrame(*frame, reason))
    }
}
