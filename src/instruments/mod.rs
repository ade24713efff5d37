use crate::error::Result;
use crate::reader::Reader;
use crate::version::Version;
use crate::writer::Writer;

mod common;
mod external_inst;
mod fmsynth;
mod hypersynth;
mod macrosynth;
mod modulator;
mod sampler;
mod wavsynth;

pub use common::{LimitType, SynthParams, TranspEq};

pub use external_inst::*;
pub use fmsynth::*;
pub use hypersynth::*;
pub use macrosynth::*;
pub use modulator::*;
pub use sampler::*;
pub use wavsynth::*;

/// One of the six closed instrument families this crate models, or an
/// opaque placeholder for an instrument type this crate doesn't decode
/// (MIDI Out, or a kind byte from a newer firmware revision).
#[derive(PartialEq, Debug, Clone, Default)]
pub enum Instrument {
    WavSynth(WavSynth),
    MacroSynth(MacroSynth),
    Sampler(Sampler),
    FMSynth(FMSynth),
    HyperSynth(HyperSynth),
    External(ExternalInst),
    /// A recognized-but-unmodeled instrument kind byte (MIDI Out is 3).
    /// The raw 215-byte record is preserved for byte-exact round trips.
    Opaque { kind: u8, raw: Vec<u8> },
    #[default]
    None,
}

/// Various constants for common parameters, to avoid nasty typos everywhere
#[allow(unused)]
pub(crate) mod params {
    pub const NAME: &'static str = "NAME";
    pub const TRANSPOSE: &'static str = "TRANSPOSE";
    pub const TBLTIC: &'static str = "TBL. TIC";
    pub const SCALE: &'static str = "SCALE";

    pub const CCA: &'static str = "CCA";
    pub const CCB: &'static str = "CCB";
    pub const CCC: &'static str = "CCC";
    pub const CCD: &'static str = "CCD";

    pub const DEST: &'static str = "DEST";
    pub const AMOUNT: &'static str = "AMT";
    pub const ATTACK: &'static str = "ATK";
    pub const DECAY: &'static str = "DEC";
    pub const HOLD: &'static str = "HOLD";
    pub const SUSTAIN: &'static str = "SUS";
    pub const RELEASE: &'static str = "REL";
    pub const PEAK: &'static str = "PEAK";
    pub const BODY: &'static str = "BODY";
    pub const FREQ: &'static str = "FREQ";
    pub const TRIGGER: &'static str = "TRIG";
    pub const LFOSHAPE: &'static str = "OSC";
    pub const SOURCE: &'static str = "SRC";
}

/// Various constants for modulation destinations, to avoid nasty typos everywhere
pub(crate) mod dests {
    pub const OFF: &'static str = "OFF";
    pub const VOLUME: &'static str = "VOLUME";
    pub const PITCH: &'static str = "PITCH";
    pub const CUTOFF: &'static str = "CUTOFF";
    pub const RES: &'static str = "RES";
    pub const AMP: &'static str = "AMP";
    pub const PAN: &'static str = "PAN";
    pub const DEGRADE: &'static str = "DEGRADE";
    pub const MOD_AMT: &'static str = "MOD AMT";
    pub const MOD_RATE: &'static str = "MOD RATE";
    pub const MOD_BOTH: &'static str = "MOD BOTH";
    pub const MOD_BINV: &'static str = "MOD BINV";
}

/// This structure aggregates, for an instrument and its four modulators,
/// the name of every FX command that can target it.
#[derive(Clone, Copy, Default)]
pub struct CommandPack {
    /// Instrument-specific commands
    pub instr: &'static [&'static str],

    /// For all four modulators, their respective command names
    pub mod_commands: [&'static [&'static str]; SynthParams::MODULATOR_COUNT],
}

impl CommandPack {
    /// Instrument-specific commands start at 0x80.
    pub const INSTRUMENT_COMMAND_OFFSET: usize = 0x80;

    /// Below `INSTRUMENT_COMMAND_OFFSET` + this many slots, a command index
    /// indexes into [`CommandPack::instr`] directly.
    pub const BASE_INSTRUMENT_COMMAND_COUNT: usize = 18;

    /// Last base instrument command index.
    pub const BASE_INSTRUMENT_COMMAND_END: usize = CommandPack::INSTRUMENT_COMMAND_OFFSET
        + Mod::COMMAND_PER_MOD * SynthParams::MODULATOR_COUNT;

    /// Can this command pack render a given FX command byte?
    pub fn accepts(self, cmd: u8) -> bool {
        let cmd = cmd as usize;
        CommandPack::INSTRUMENT_COMMAND_OFFSET <= cmd
            && cmd <= (CommandPack::BASE_INSTRUMENT_COMMAND_END + self.instr.len())
    }

    pub fn try_render(self, cmd: u8) -> Option<&'static str> {
        if self.instr.is_empty() {
            return None;
        }
        if (cmd as usize) < CommandPack::INSTRUMENT_COMMAND_OFFSET {
            return None;
        }

        let cmd = cmd as usize - CommandPack::INSTRUMENT_COMMAND_OFFSET;

        if cmd < CommandPack::BASE_INSTRUMENT_COMMAND_COUNT {
            return self.instr.get(cmd).copied();
        }

        let mod_cmd = cmd - CommandPack::BASE_INSTRUMENT_COMMAND_COUNT;
        let mod_ix = mod_cmd / Mod::COMMAND_PER_MOD;

        if mod_ix < self.mod_commands.len() {
            let ix = mod_cmd - Mod::COMMAND_PER_MOD * mod_ix;
            return Some(self.mod_commands[mod_ix][ix]);
        }

        let extra_cmd = cmd - (Mod::COMMAND_PER_MOD * SynthParams::MODULATOR_COUNT);
        self.instr.get(extra_cmd).copied()
    }
}

impl Instrument {
    /// Every instrument family record, including the opaque ones, is
    /// fixed at this many bytes within an instrument table slot.
    pub const INSTRUMENT_MEMORY_SIZE: usize = 215;

    pub fn is_empty(&self) -> bool {
        matches!(self, Instrument::None)
    }

    pub fn instr_command_text(&self, ver: Version) -> CommandPack {
        let (commands, mods) = match self {
            Instrument::WavSynth(ws) => (ws.command_name(), &ws.synth_params.mods),
            Instrument::MacroSynth(ms) => (ms.command_name(), &ms.synth_params.mods),
            Instrument::Sampler(s) => (s.command_name(), &s.synth_params.mods),
            Instrument::FMSynth(fs) => (fs.command_name(), &fs.synth_params.mods),
            Instrument::HyperSynth(hs) => (hs.command_name(), &hs.synth_params.mods),
            Instrument::External(ex) => (ex.command_name(), &ex.synth_params.mods),
            Instrument::Opaque { .. } | Instrument::None => return CommandPack::default(),
        };

        CommandPack {
            instr: commands,
            mod_commands: [
                mods[0].command_name(ver, 0),
                mods[1].command_name(ver, 1),
                mods[2].command_name(ver, 2),
                mods[3].command_name(ver, 3),
            ],
        }
    }

    pub fn write(&self, w: &mut Writer) {
        let start = w.pos();
        match self {
            Instrument::WavSynth(ws) => {
                w.write(0);
                ws.write(w);
            }
            Instrument::MacroSynth(ms) => {
                w.write(1);
                ms.write(w);
            }
            Instrument::Sampler(s) => {
                w.write(2);
                s.write(w);
            }
            Instrument::FMSynth(fs) => {
                w.write(4);
                fs.write(w);
            }
            Instrument::HyperSynth(hs) => {
                w.write(5);
                hs.write(w);
            }
            Instrument::External(ex) => {
                w.write(6);
                ex.write(w);
            }
            Instrument::Opaque { kind, raw } => {
                w.write(*kind);
                w.write_bytes(raw);
            }
            Instrument::None => w.write(0xFF),
        }
        w.seek(start + Instrument::INSTRUMENT_MEMORY_SIZE);
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Instrument::WavSynth(ws) => Some(&ws.name),
            Instrument::MacroSynth(ms) => Some(&ms.name),
            Instrument::Sampler(s) => Some(&s.name),
            Instrument::FMSynth(fs) => Some(&fs.name),
            Instrument::HyperSynth(hs) => Some(&hs.name),
            Instrument::External(ex) => Some(&ex.name),
            Instrument::Opaque { .. } | Instrument::None => None,
        }
    }

    pub fn set_name(&mut self, name: String) {
        match self {
            Instrument::WavSynth(ws) => ws.name = name,
            Instrument::MacroSynth(ms) => ms.name = name,
            Instrument::Sampler(s) => s.name = name,
            Instrument::FMSynth(fs) => fs.name = name,
            Instrument::HyperSynth(hs) => hs.name = name,
            Instrument::External(ex) => ex.name = name,
            Instrument::Opaque { .. } | Instrument::None => {}
        }
    }

    /// Read a single instrument record. `reader` must be positioned at
    /// the start of the record (the kind byte).
    pub fn from_reader(reader: &Reader, number: u8, version: Version) -> Result<Self> {
        let start_pos = reader.pos();
        reader.require(Instrument::INSTRUMENT_MEMORY_SIZE)?;
        let kind = reader.read();

        let instr = match kind {
            0x00 => Self::WavSynth(WavSynth::from_reader(reader, number, version)?),
            0x01 => Self::MacroSynth(MacroSynth::from_reader(reader, number, version)?),
            0x02 => Self::Sampler(Sampler::from_reader(reader, start_pos, number, version)?),
            0x04 => Self::FMSynth(FMSynth::from_reader(reader, number, version)?),
            0x05 => Self::HyperSynth(HyperSynth::from_reader(reader, number)?),
            0x06 => Self::External(ExternalInst::from_reader(reader, number)?),
            0xFF => Self::None,
            other => {
                log::warn!("instrument {number}: unmodeled kind byte {other}, preserving as opaque");
                let raw = reader
                    .read_bytes(Instrument::INSTRUMENT_MEMORY_SIZE - 1)
                    .to_vec();
                Self::Opaque { kind: other, raw }
            }
        };

        reader.set_pos(start_pos + Instrument::INSTRUMENT_MEMORY_SIZE);

        Ok(instr)
    }

    /// Read a standalone `.m8i` instrument file: a 14-byte version header
    /// followed by one instrument record.
    pub fn read(buf: Vec<u8>) -> Result<Self> {
        let reader = Reader::new(buf);
        reader.require(crate::version::Version::SIZE + Instrument::INSTRUMENT_MEMORY_SIZE)?;
        let version = crate::version::Version::from_reader(&reader);
        Self::from_reader(&reader, 0, version)
    }

    pub fn write_m8i(&self, version: Version) -> Vec<u8> {
        let mut w = Writer::with_size(crate::version::Version::SIZE + Self::INSTRUMENT_MEMORY_SIZE);
        version.write(&mut w);
        self.write(&mut w);
        w.finish()
    }
}
