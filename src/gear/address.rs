use crate::common::address::AddressError;
pub use crate::common::address::Short;
use std::fmt;

/// Target of a 16-bit gear command frame handled by the fast path
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GearAddress {
    Broadcast,
    Short(Short),
}

impl GearAddress {
    /// Decode the first byte of a command frame (selector bit set).
    /// Group and special-command bytes are not gear addresses here.
    pub fn from_bus_address(bus: u8) -> Result<GearAddress, AddressError> {
        if bus == 0xff {
            Ok(GearAddress::Broadcast)
        } else if bus & 0x81 == 0x01 {
            Ok(GearAddress::Short(Short::new(bus >> 1)))
        } else {
            Err(AddressError::NotShort)
        }
    }
}

impl fmt::Display for GearAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GearAddress::Broadcast => write!(f, "Gear Broadcast"),
            GearAddress::Short(a) => write!(f, "Gear[{}]", a),
        }
    }
}
