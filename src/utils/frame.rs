use crate::error::DecodeError;
use std::fmt;

/// A forward or backward frame as captured from the bus, up to 32 bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Frame {
    value: u32,
    bit_length: u8,
}

impl Frame {
    pub const MAX_BITS: usize = 32;

    /// Parse a frame from hex digits, four bits per digit.
    pub fn from_hex(s: &str) -> Result<Frame, DecodeError> {
        let mut value = 0u32;
        let mut bit_length = 0usize;
        for c in s.chars() {
            let Some(d) = c.to_digit(16) else {
                return Err(DecodeError::InvalidHex(s.to_string()));
            };
            if bit_length >= Self::MAX_BITS {
                return Err(DecodeError::InvalidHex(s.to_string()));
            }
            value = (value << 4) | d;
            bit_length += 4;
        }
        if bit_length == 0 {
            return Err(DecodeError::InvalidHex(s.to_string()));
        }
        Ok(Frame {
            value,
            bit_length: bit_length as u8,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Frame {
        assert!(bytes.len() <= 4);
        let value = bytes.iter().fold(0u32, |v, &b| (v << 8) | u32::from(b));
        Frame {
            value,
            bit_length: (bytes.len() * 8) as u8,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn bit_length(&self) -> usize {
        usize::from(self.bit_length)
    }

    /// Big endian bytes. A partial leading byte holds the top bits.
    pub fn bytes(&self) -> Vec<u8> {
        let len = (self.bit_length() + 7) / 8;
        (0..len)
            .rev()
            .map(|i| (self.value >> (i * 8)) as u8)
            .collect()
    }
}

impl From<[u8; 2]> for Frame {
    fn from(bytes: [u8; 2]) -> Frame {
        Frame::from_bytes(&bytes)
    }
}

impl From<[u8; 3]> for Frame {
    fn from(bytes: [u8; 3]) -> Frame {
        Frame::from_bytes(&bytes)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0width$x}",
            self.value,
            width = (self.bit_length() + 3) / 4
        )
    }
}

#[cfg(test)]
mod test {
    use super::Frame;
    use crate::error::DecodeError;

    #[test]
    fn parse_hex() {
        let f = Frame::from_hex("ff00").unwrap();
        assert_eq!(f.bit_length(), 16);
        assert_eq!(f.bytes(), vec![0xff, 0x00]);

        let f = Frame::from_hex("01a580").unwrap();
        assert_eq!(f.bit_length(), 24);
        assert_eq!(f.bytes(), vec![0x01, 0xa5, 0x80]);
        assert_eq!(f, Frame::from([0x01, 0xa5, 0x80]));

        let f = Frame::from_hex("12345").unwrap();
        assert_eq!(f.bit_length(), 20);
        assert_eq!(f.bytes(), vec![0x01, 0x23, 0x45]);
        assert_eq!(f.to_string(), "12345");
    }

    #[test]
    fn parse_invalid_hex() {
        assert_eq!(
            Frame::from_hex("01g1"),
            Err(DecodeError::InvalidHex("01g1".to_string()))
        );
        assert!(Frame::from_hex("").is_err());
        assert!(Frame::from_hex("123456789").is_err());
        assert!(Frame::from_hex("12345678").is_ok());
    }

    #[test]
    fn display_keeps_leading_zeros() {
        assert_eq!(Frame::from([0x00, 0x01]).to_string(), "0001");
        assert_eq!(Frame::from([0x01, 0x02, 0x03]).to_string(), "010203");
    }
}
