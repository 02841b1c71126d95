use std::fmt;

/// What an event source identifier refers to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceLabel {
    Device,
    DeviceGroup,
    InstanceGroup,
    Type,
    Instance,
    // Used for the "instance type + instance number" scheme
    SchemeType,
    SchemeInstance,
}

impl SourceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLabel::Device => "device",
            SourceLabel::DeviceGroup => "device group",
            SourceLabel::InstanceGroup => "instance group",
            SourceLabel::Type => "type",
            SourceLabel::Instance => "instance",
            SourceLabel::SchemeType => "Type",
            SourceLabel::SchemeInstance => "Instance",
        }
    }
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub group1: SourceLabel,
    pub id1: u8,
    pub group2: SourceLabel,
    pub id2: u8,
    /// 10 bits
    pub event_bits: u16,
}

impl EventDescriptor {
    /// Classify the source of an event frame from its first two bytes.
    /// The caller makes sure the command bit (bit 0 of `c1`) is clear.
    pub fn from_bytes(c1: u8, c2: u8) -> EventDescriptor {
        let b23 = c1 & 0x80 != 0;
        let b22 = c1 & 0x40 != 0;
        let b15 = c2 & 0x80 != 0;

        let (group1, group2) = match (b23, b22, b15) {
            (false, _, false) => (SourceLabel::Device, SourceLabel::Type),
            (false, _, true) => (SourceLabel::Device, SourceLabel::Instance),
            (true, false, false) => (SourceLabel::DeviceGroup, SourceLabel::Type),
            (true, true, false) => (SourceLabel::InstanceGroup, SourceLabel::Type),
            (true, _, true) => (SourceLabel::SchemeType, SourceLabel::SchemeInstance),
        };
        EventDescriptor {
            group1,
            id1: (c1 >> 1) & 0x3f,
            group2,
            id2: (c2 >> 1) & 0x3f,
            event_bits: (u16::from(c2 & 0x03) << 8) | u16::from(c1),
        }
    }
}

impl fmt::Display for EventDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} EVENT 0x{:03x}",
            self.group1, self.id1, self.group2, self.id2, self.event_bits
        )
    }
}
