use array_concat::*;

use crate::instruments::CommandPack;
use crate::reader::Reader;
use crate::writer::Writer;

/// A table of human-readable FX command mnemonics, indexed by FX key.
#[derive(Copy, Clone)]
pub struct FxCommands {
    pub commands: &'static [&'static str],
}

impl FxCommands {
    pub fn try_render(self, cmd: u8) -> Option<&'static str> {
        let cmd = cmd as usize;

        if cmd < self.commands.len() {
            Some(self.commands[cmd])
        } else {
            None
        }
    }
}

/// A single FX slot: a command key paired with its 8-bit argument.
///
/// `command == 0xFF` is the empty sentinel (invariant: an [`FXTuple`] with an
/// empty command always carries `value == 0`, produced by [`FX::default`]).
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct FX {
    pub command: u8,
    pub value: u8,
}

impl Default for FX {
    fn default() -> Self {
        Self {
            command: 0xFF,
            value: 0,
        }
    }
}

#[rustfmt::skip]
const SEQ_COMMANDS: [&'static str; 27] = [
    "ARP", "CHA", "DEL", "GRV", "HOP", "KIL", "RND", "RNL", "RET", "REP",
    "RMX", "NTH", "PSL", "PBN", "PVB", "PVX", "SCA", "SCG", "SED", "SNG",
    "TBL", "THO", "TIC", "TBX", "TPO", "TSP", "OFF",
];

#[rustfmt::skip]
const MIXER_COMMANDS: [&'static str; 44] = [
    "VMV", "XCM", "XCF", "XCW", "XCR", "XDT", "XDF", "XDW", "XDR", "XRS",
    "XRD", "XRM", "XRF", "XRW", "XRZ", "VCH", "VDE", "VRE", "VT1", "VT2",
    "VT3", "VT4", "VT5", "VT6", "VT7", "VT8", "DJC", "VIN", "ICH", "IDE",
    "IRE", "VI2", "IC2", "ID2", "IR2", "USB",
    "DJR", "DJT", "EQM", "EQI", "INS", "RTO", "ARC", "GGR",
];

const COMMANDS: [&'static str; concat_arrays_size!(SEQ_COMMANDS, MIXER_COMMANDS)] =
    concat_arrays!(SEQ_COMMANDS, MIXER_COMMANDS);

impl FX {
    pub const SIZE: usize = 2;

    pub(crate) fn from_reader(reader: &Reader) -> Self {
        Self {
            command: reader.read(),
            value: reader.read(),
        }
    }

    pub fn write(self, w: &mut Writer) {
        w.write(self.command);
        w.write(self.value);
    }

    pub fn is_empty(self) -> bool {
        self.command == 0xFF
    }

    /// The full sequencer+mixer FX mnemonic table (0x00..0x1A sequencer,
    /// 0x1B..0x46 mixer); instrument-specific commands above 0x80 are
    /// resolved separately through a [`CommandPack`].
    pub fn command_names() -> FxCommands {
        FxCommands {
            commands: &COMMANDS,
        }
    }

    pub fn print(&self, fx: FxCommands, pack: CommandPack) -> String {
        if self.is_empty() {
            "---  ".to_string()
        } else {
            let c = self.format_command(fx, pack);
            format!("{}{:02x}", c, self.value)
        }
    }

    fn format_command(&self, fx: FxCommands, instr: CommandPack) -> String {
        match fx.try_render(self.command) {
            Some(s) => String::from(s),
            None => {
                if instr.accepts(self.command) {
                    match instr.try_render(self.command) {
                        Some(v) => String::from(v),
                        None => format!("I{:02X}", self.command - 0x80),
                    }
                } else {
                    format!("?{:02x}", self.command)
                }
            }
        }
    }
}
