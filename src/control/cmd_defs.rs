use crate::common::cmd_defs::{CommandSlot, CommandTable};
use lazy_static::lazy_static;

/// Lowest opcode of the instance commands
pub const FIRST_INSTANCE_COMMAND: u8 = 0x61;

// Device and instance commands, third byte of a 24-bit frame
const DEVICE_COMMANDS: &[(u8, &str)] = &[
    (0x00, "IdentifyDevice"),
    (0x01, "ResetPowerCycleSeen"),
    (0x10, "Reset"),
    (0x11, "ResetMemoryBank"),
    (0x14, "SetShortAddress"),
    (0x15, "EnableWriteMemory"),
    (0x16, "EnableApplicationController"),
    (0x17, "DisableApplicationController"),
    (0x18, "SetOperatingMode"),
    (0x19, "AddToDeviceGroupsZeroToFifteen"),
    (0x1a, "AddToDeviceGroupsSixteenToThirtyOne"),
    (0x1b, "RemoveFromDeviceGroupsZeroToFifteen"),
    (0x1c, "RemoveFromDeviceGroupsSixteenToThirtyOne"),
    (0x1d, "StartQuiescentMode"),
    (0x1e, "StopQuiescentMode"),
    (0x1f, "EnablePowerCycleNotification"),
    (0x20, "DisablePowerCycleNotification"),
    (0x21, "SavePersistentVariables"),
    (0x30, "QueryDeviceStatusResponse"),
    (0x31, "QueryApplicationControllerError"),
    (0x32, "QueryInputDeviceError"),
    (0x33, "QueryMissingShortAddress"),
    (0x34, "QueryVersionNumber"),
    (0x35, "QueryNumberOfInstances"),
    (0x36, "QueryContentDTR0"),
    (0x37, "QueryContentDTR1"),
    (0x38, "QueryContentDTR2"),
    (0x39, "QueryRandomAddressH"),
    (0x3a, "QueryRandomAddressM"),
    (0x3b, "QueryRandomAddressL"),
    (0x3c, "ReadMemoryLocation"),
    (0x3d, "QueryApplicationControlEnabled"),
    (0x3e, "QueryOperatingMode"),
    (0x3f, "QueryManufacturerSpecificMode"),
    (0x40, "QueryQuiescentMode"),
    (0x41, "QueryDeviceGroupsZeroToSeven"),
    (0x42, "QueryDeviceGroupsEightToFifteen"),
    (0x43, "QueryDeviceGroupsSixteenToTwentyThree"),
    (0x44, "QueryDeviceGroupsTwentyFourToThirtyOne"),
    (0x45, "QueryPowerCycleNotification"),
    (0x46, "QueryDeviceCapabilities"),
    (0x47, "QueryExtendedVersionNumber"),
    (0x48, "QueryResetState"),
    (0x61, "SetEventPriority"),
    (0x62, "EnableInstance"),
    (0x63, "DisableInstance"),
    (0x64, "SetPrimaryInstanceGroup"),
    (0x65, "SetInstanceGroup1"),
    (0x66, "SetInstanceGroup2"),
    (0x67, "SetEventScheme"),
    (0x68, "SetEventFilter"),
    (0x80, "QueryInstanceType"),
    (0x81, "QueryResolution"),
    (0x82, "QueryInstanceError"),
    (0x83, "QueryInstanceStatus"),
    (0x84, "QueryEventPriority"),
    (0x86, "QueryInstanceEnabled"),
    (0x88, "QueryPrimaryInstanceGroup"),
    (0x89, "QueryInstanceGroup1"),
    (0x8a, "QueryInstanceGroup2"),
    (0x8b, "QueryEventScheme"),
    (0x8c, "QueryInputValue"),
    (0x8d, "QueryInputValueLatch"),
    (0x8e, "QueryFeatureType"),
    (0x8f, "QueryNextFeatureType"),
    (0x90, "QueryEventFilterZeroToSeven"),
    (0x91, "QueryEventFilterEightToFifteen"),
    (0x92, "QueryEventFilterSixteenToTwentyThree"),
];

lazy_static! {
    static ref DEVICE_TABLE: CommandTable = CommandTable::new(DEVICE_COMMANDS, &[]);
}

pub fn device_command(opcode: u8) -> CommandSlot {
    DEVICE_TABLE.lookup(opcode)
}

pub fn is_instance_command(opcode: u8) -> bool {
    opcode >= FIRST_INSTANCE_COMMAND
}

#[cfg(test)]
mod test {
    use super::{device_command, DEVICE_TABLE};
    use crate::common::cmd_defs::CommandSlot;

    #[test]
    fn device_commands() {
        assert_eq!(device_command(0x00).to_string(), "IdentifyDevice");
        assert_eq!(device_command(0x37).to_string(), "QueryContentDTR1");
        assert_eq!(device_command(0x61).to_string(), "SetEventPriority");
        assert_eq!(
            device_command(0x92).to_string(),
            "QueryEventFilterSixteenToTwentyThree"
        );
    }

    #[test]
    fn no_parametrized_entries() {
        assert!(DEVICE_TABLE.assigned().all(|(_, cmd)| cmd.param.is_none()));
        assert_eq!(DEVICE_TABLE.assigned().count(), 68);
    }

    #[test]
    fn unassigned_device_commands() {
        for op in [0x02u8, 0x22, 0x49, 0x60, 0x85, 0x87, 0x93, 0xff] {
            assert_eq!(device_command(op), CommandSlot::Unassigned(op));
        }
    }
}
