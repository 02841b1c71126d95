use std::fmt;

/// First byte of a 24-bit device command frame
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DeviceAddress {
    Broadcast,
    UnaddressedBroadcast,
    /// `bus >> 1`, group addresses land above 63
    Device(u8),
}

impl DeviceAddress {
    pub fn from_bus_address(bus: u8) -> DeviceAddress {
        match bus >> 1 {
            0x7f => DeviceAddress::Broadcast,
            0x7e => DeviceAddress::UnaddressedBroadcast,
            id => DeviceAddress::Device(id),
        }
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceAddress::Broadcast => write!(f, "Device Broadcast"),
            DeviceAddress::UnaddressedBroadcast => write!(f, "Unaddressed Device Broadcast"),
            DeviceAddress::Device(id) => write!(f, "DEV[{}]", id),
        }
    }
}

/// Second byte of a 24-bit device command frame
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InstanceAddress {
    Instance(u8),
    InstanceGroup(u8),
    InstanceType(u8),
    FeatureInstanceNumber(u8),
    FeatureInstanceGroup(u8),
    FeatureInstanceType(u8),
    FeatureInstanceBroadcast,
    InstanceBroadcast,
    FeatureDevice,
    NoInstance,
    Reserved,
}

impl InstanceAddress {
    pub fn from_bus_address(bus: u8) -> InstanceAddress {
        match bus {
            0xfd => InstanceAddress::FeatureInstanceBroadcast,
            0xff => InstanceAddress::InstanceBroadcast,
            0xfc => InstanceAddress::FeatureDevice,
            0xfe => InstanceAddress::NoInstance,
            _ => {
                let p = bus & 0x1f;
                match bus >> 5 {
                    0 => InstanceAddress::Instance(p),
                    1 => InstanceAddress::FeatureInstanceNumber(p),
                    3 => InstanceAddress::FeatureInstanceType(p),
                    4 => InstanceAddress::InstanceGroup(p),
                    5 => InstanceAddress::FeatureInstanceGroup(p),
                    6 => InstanceAddress::InstanceType(p),
                    _ => InstanceAddress::Reserved,
                }
            }
        }
    }
}

impl fmt::Display for InstanceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceAddress::Instance(p) => write!(f, "Instance[{}]", p),
            InstanceAddress::InstanceGroup(p) => write!(f, "InstanceGroup[{}]", p),
            InstanceAddress::InstanceType(p) => write!(f, "InstanceType[{}]", p),
            InstanceAddress::FeatureInstanceNumber(p) => write!(f, "FeatureInstanceNumber[{}]", p),
            InstanceAddress::FeatureInstanceGroup(p) => write!(f, "FeatureInstanceGroup[{}]", p),
            InstanceAddress::FeatureInstanceType(p) => write!(f, "FeatureInstanceType[{}]", p),
            InstanceAddress::FeatureInstanceBroadcast => write!(f, "FeatureInstanceBroadcast"),
            InstanceAddress::InstanceBroadcast => write!(f, "InstanceBroadcast"),
            InstanceAddress::FeatureDevice => write!(f, "FeatureDevice"),
            InstanceAddress::NoInstance => write!(f, "No Instance"),
            InstanceAddress::Reserved => write!(f, "reserved"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{DeviceAddress, InstanceAddress};

    #[test]
    fn device_address_test() {
        assert_eq!(DeviceAddress::from_bus_address(0xff), DeviceAddress::Broadcast);
        assert_eq!(
            DeviceAddress::from_bus_address(0xfd),
            DeviceAddress::UnaddressedBroadcast
        );
        assert_eq!(
            DeviceAddress::from_bus_address(0x02),
            DeviceAddress::Device(1)
        );
        assert_eq!(
            DeviceAddress::from_bus_address(0x03),
            DeviceAddress::Device(1)
        );
        assert_eq!(DeviceAddress::from_bus_address(0x7f).to_string(), "DEV[63]");
        assert_eq!(DeviceAddress::from_bus_address(0x81).to_string(), "DEV[64]");
        assert_eq!(DeviceAddress::from_bus_address(0xfe).to_string(), "Device Broadcast");
        assert_eq!(
            DeviceAddress::from_bus_address(0xfc).to_string(),
            "Unaddressed Device Broadcast"
        );
    }

    #[test]
    fn instance_address_test() {
        assert_eq!(InstanceAddress::from_bus_address(0x00), InstanceAddress::Instance(0));
        assert_eq!(
            InstanceAddress::from_bus_address(0x85),
            InstanceAddress::InstanceGroup(5)
        );
        assert_eq!(
            InstanceAddress::from_bus_address(0xc1),
            InstanceAddress::InstanceType(1)
        );
        assert_eq!(
            InstanceAddress::from_bus_address(0x3f),
            InstanceAddress::FeatureInstanceNumber(31)
        );
        assert_eq!(
            InstanceAddress::from_bus_address(0xa5),
            InstanceAddress::FeatureInstanceGroup(5)
        );
        assert_eq!(
            InstanceAddress::from_bus_address(0x62),
            InstanceAddress::FeatureInstanceType(2)
        );
    }

    #[test]
    fn instance_overrides_test() {
        assert_eq!(
            InstanceAddress::from_bus_address(0xfd),
            InstanceAddress::FeatureInstanceBroadcast
        );
        assert_eq!(
            InstanceAddress::from_bus_address(0xff),
            InstanceAddress::InstanceBroadcast
        );
        assert_eq!(InstanceAddress::from_bus_address(0xfc), InstanceAddress::FeatureDevice);
        assert_eq!(InstanceAddress::from_bus_address(0xfe), InstanceAddress::NoInstance);
        assert_eq!(InstanceAddress::from_bus_address(0xfe).to_string(), "No Instance");
    }

    #[test]
    fn instance_reserved_test() {
        for b in 0x40u8..0x60 {
            assert_eq!(InstanceAddress::from_bus_address(b), InstanceAddress::Reserved);
        }
        for b in 0xe0u8..0xfc {
            assert_eq!(InstanceAddress::from_bus_address(b), InstanceAddress::Reserved);
        }
        assert_eq!(InstanceAddress::Reserved.to_string(), "reserved");
    }

    #[test]
    fn total_over_all_bytes() {
        for b in 0..=255u8 {
            let _ = DeviceAddress::from_bus_address(b).to_string();
            let _ = InstanceAddress::from_bus_address(b).to_string();
        }
    }
}
