use crate::common::cmd_defs::{CommandSlot, CommandTable, RangeDef};
use lazy_static::lazy_static;

// Special commands, first byte of a 16-bit frame
pub const TERMINATE: u8 = 0xa1;
pub const DTR0: u8 = 0xa3;
pub const INITIALISE: u8 = 0xa5;
pub const RANDOMISE: u8 = 0xa7;
pub const COMPARE: u8 = 0xa9;
pub const WITHDRAW: u8 = 0xab;
pub const PING: u8 = 0xad;
pub const SEARCHADDRH: u8 = 0xb1;
pub const SEARCHADDRM: u8 = 0xb3;
pub const SEARCHADDRL: u8 = 0xb5;
pub const PROGRAM_SHORT_ADDRESS: u8 = 0xb7;
pub const VERIFY_SHORT_ADDRESS: u8 = 0xb9;
pub const QUERY_SHORT_ADDRESS: u8 = 0xbb;
pub const PHYSICAL_SELECTION: u8 = 0xbd;
pub const ENABLE_DEVICE_TYPE: u8 = 0xc1;
pub const DTR1: u8 = 0xc3;
pub const DTR2: u8 = 0xc5;
pub const WRITE_MEMORY_LOCATION: u8 = 0xc7;
pub const WRITE_MEMORY_LOCATION_NO_REPLY: u8 = 0xc9;

const GEAR_COMMANDS: &[(u8, &str)] = &[
    (0x00, "Off"),
    (0x01, "Up"),
    (0x02, "On"),
    (0x03, "StepUp"),
    (0x04, "StepDown"),
    (0x05, "RecallMaxLevel"),
    (0x06, "RecallMinLevel"),
    (0x07, "StepDownAndOff"),
    (0x08, "OnAndStepUp"),
    (0x09, "EnableDAPCSequence"),
    (0x0a, "GoToLastActiveLevel"),
    (0x0b, "ContinuousUp"),
    (0x0c, "ContinuousDown"),
    (0x20, "Reset"),
    (0x21, "StoreActualLevelInDTR0"),
    (0x22, "SavePersistentVariables"),
    (0x23, "SetOperatingMode"),
    (0x24, "ResetMemoryBank"),
    (0x25, "IdentifyDevice"),
    (0x2a, "SetMaxLevel"),
    (0x2b, "SetMinLevel"),
    (0x2c, "SetSystemFailureLevel"),
    (0x2d, "SetPowerOnLevel"),
    (0x2e, "SetFadeTime"),
    (0x2f, "SetFadeRate"),
    (0x30, "SetExtendedFadeTime"),
    (0x80, "SetShortAddress"),
    (0x81, "EnableWriteMemory"),
    (0x90, "QueryStatus"),
    (0x91, "QueryControlGearPresent"),
    (0x92, "QueryLampFailure"),
    (0x93, "QueryLampPowerOn"),
    (0x94, "QueryLimitError"),
    (0x95, "QueryResetState"),
    (0x96, "QueryMissingShortAddress"),
    (0x97, "QueryVersionNumber"),
    (0x98, "QueryContentDTR0"),
    (0x99, "QueryDeviceType"),
    (0x9a, "QueryPhysicalMinimum"),
    (0x9b, "QueryPowerFailure"),
    (0x9c, "QueryContentDTR1"),
    (0x9d, "QueryContentDTR2"),
    (0x9e, "QueryOperatingMode"),
    (0x9f, "QueryLightSourceType"),
    (0xa0, "QueryActualLevel"),
    (0xa1, "QueryMaxLevel"),
    (0xa2, "QueryMinLevel"),
    (0xa3, "QueryPowerOnLevel"),
    (0xa4, "QuerySystemFailureLevel"),
    (0xa5, "QueryFadeTimeFadeRate"),
    (0xa6, "QueryManufacturerSpecificMode"),
    (0xa7, "QueryNextDeviceType"),
    (0xa8, "QueryExtendedFadeTime"),
    (0xaa, "QueryControlGearFailure"),
    (0xc0, "QueryGroupsZeroToSeven"),
    (0xc1, "QueryGroupsEightToFifteen"),
    (0xc2, "QueryRandomAddressH"),
    (0xc3, "QueryRandomAddressM"),
    (0xc4, "QueryRandomAddressL"),
    (0xc5, "ReadMemoryLocation"),
];

const GEAR_RANGES: &[RangeDef] = &[
    RangeDef {
        base: 0x10,
        name: "GoToScene",
        trailer: None,
    },
    RangeDef {
        base: 0x40,
        name: "SetScene",
        trailer: None,
    },
    RangeDef {
        base: 0x50,
        name: "RemoveFromScene",
        trailer: None,
    },
    RangeDef {
        base: 0x60,
        name: "AddToGroup",
        trailer: None,
    },
    RangeDef {
        base: 0x70,
        name: "RemoveFromGroup",
        trailer: None,
    },
    RangeDef {
        base: 0xb0,
        name: "QueryScene",
        trailer: Some("Level"),
    },
];

const SPECIAL_COMMANDS: &[(u8, &str)] = &[
    (TERMINATE, "Terminate"),
    (DTR0, "DTR0"),
    (INITIALISE, "Initialise"),
    (RANDOMISE, "Randomise"),
    (COMPARE, "Compare"),
    (WITHDRAW, "Withdraw"),
    (PING, "Ping"),
    (SEARCHADDRH, "SearchaddrH"),
    (SEARCHADDRM, "SearchaddrM"),
    (SEARCHADDRL, "SearchaddrL"),
    (PROGRAM_SHORT_ADDRESS, "ProgramShortAddress"),
    (VERIFY_SHORT_ADDRESS, "VerifyShortAddress"),
    (QUERY_SHORT_ADDRESS, "QueryShortAddress"),
    (ENABLE_DEVICE_TYPE, "EnableDeviceType"),
    (DTR1, "DTR1"),
    (DTR2, "DTR2"),
    (WRITE_MEMORY_LOCATION, "WriteMemoryLocation"),
    (WRITE_MEMORY_LOCATION_NO_REPLY, "WriteMemoryLocationNoReply"),
];

lazy_static! {
    static ref GEAR_TABLE: CommandTable = CommandTable::new(GEAR_COMMANDS, GEAR_RANGES);
    static ref SPECIAL_TABLE: CommandTable = CommandTable::new(SPECIAL_COMMANDS, &[]);
}

/// Command sent to control gear, second byte of a 16-bit frame
pub fn gear_command(opcode: u8) -> CommandSlot {
    GEAR_TABLE.lookup(opcode)
}

/// Special command, looked up by the first byte of a 16-bit frame
pub fn special_command(first: u8) -> CommandSlot {
    SPECIAL_TABLE.lookup(first)
}
