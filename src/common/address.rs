use core::ops::RangeInclusive;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AddressError {
    NotShort,
    InvalidAddress,
}

impl std::fmt::Display for AddressError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        match self {
            AddressError::NotShort => write!(fmt, "Not a short address"),
            AddressError::InvalidAddress => write!(fmt, "InvalidAddress"),
        }
    }
}

impl std::error::Error for AddressError {}

/// Short address as seen on the bus, 0..64
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Short(u8);

impl Short {
    const RANGE: RangeInclusive<u8> = 0..=63;

    pub fn new(a: u8) -> Short {
        assert!(Self::RANGE.contains(&a));
        Short(a)
    }

    /// Address 0..64
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Short {
    type Error = AddressError;
    fn try_from(a: u8) -> Result<Short, Self::Error> {
        if Self::RANGE.contains(&a) {
            Ok(Short(a))
        } else {
            Err(AddressError::InvalidAddress)
        }
    }
}

impl std::fmt::Display for Short {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        self.0.fmt(fmt)
    }
}
