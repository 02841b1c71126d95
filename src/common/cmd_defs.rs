use std::fmt;

/// Number of consecutive opcodes covered by a parametrized range
pub const RANGE_LEN: u8 = 16;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    /// Scene or group number for parametrized commands
    pub param: Option<u8>,
    /// Word following the parameter, e.g. "QueryScene 3 Level"
    pub trailer: Option<&'static str>,
}

impl Command {
    pub const fn new(name: &'static str) -> Command {
        Command {
            name,
            param: None,
            trailer: None,
        }
    }

    pub const fn indexed(name: &'static str, param: u8, trailer: Option<&'static str>) -> Command {
        Command {
            name,
            param: Some(param),
            trailer,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if let Some(p) = self.param {
            write!(f, " {}", p)?;
        }
        if let Some(t) = self.trailer {
            write!(f, " {}", t)?;
        }
        Ok(())
    }
}

/// Result of looking up an opcode
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandSlot {
    Assigned(Command),
    Unassigned(u8),
}

impl CommandSlot {
    pub fn command(&self) -> Option<&Command> {
        match self {
            CommandSlot::Assigned(cmd) => Some(cmd),
            CommandSlot::Unassigned(_) => None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, CommandSlot::Assigned(_))
    }
}

impl fmt::Display for CommandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandSlot::Assigned(cmd) => cmd.fmt(f),
            CommandSlot::Unassigned(opcode) => write!(f, "Reserved(0x{:02x})", opcode),
        }
    }
}

/// Sixteen opcodes starting at `base`, parameter is `opcode - base`
pub struct RangeDef {
    pub base: u8,
    pub name: &'static str,
    pub trailer: Option<&'static str>,
}

/// Opcode table with one slot per possible opcode.
pub struct CommandTable {
    slots: [CommandSlot; 256],
}

impl CommandTable {
    pub fn new(plain: &[(u8, &'static str)], ranges: &[RangeDef]) -> CommandTable {
        let mut slots = [CommandSlot::Unassigned(0); 256];
        for (opcode, slot) in slots.iter_mut().enumerate() {
            *slot = CommandSlot::Unassigned(opcode as u8);
        }
        for &(opcode, name) in plain {
            slots[usize::from(opcode)] = CommandSlot::Assigned(Command::new(name));
        }
        for range in ranges {
            for p in 0..RANGE_LEN {
                let opcode = usize::from(range.base) + usize::from(p);
                slots[opcode] =
                    CommandSlot::Assigned(Command::indexed(range.name, p, range.trailer));
            }
        }
        CommandTable { slots }
    }

    pub fn lookup(&self, opcode: u8) -> CommandSlot {
        self.slots[usize::from(opcode)]
    }

    /// Iterate over assigned opcodes in ascending order
    pub fn assigned(&self) -> impl Iterator<Item = (u8, &Command)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(op, slot)| slot.command().map(|cmd| (op as u8, cmd)))
    }
}
