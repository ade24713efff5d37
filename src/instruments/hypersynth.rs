use arr_macro::arr;

use crate::error::Result;
use crate::instruments::common::*;
use crate::reader::Reader;
use crate::version::Version;
use crate::writer::Writer;

use super::dests;
use super::CommandPack;

#[derive(PartialEq, Debug, Clone)]
pub struct HyperSynth {
    pub number: u8,
    pub name: String,
    pub transpose: bool,
    pub table_tick: u8,
    pub volume: u8,
    pub pitch: u8,
    pub fine_tune: u8,
    pub synth_params: SynthParams,

    pub scale: u8,
    pub default_chord: [u8; 7],
    pub shift: u8,
    pub swarm: u8,
    pub width: u8,
    pub subosc: u8,

    /// 16 user-programmable chord slots, each a padding byte followed by
    /// 6 note offsets.
    pub chords: [[u8; 6]; 0x10],
}

#[rustfmt::skip]
const HYPERSYNTH_COMMAND_NAMES: [&'static str; CommandPack::BASE_INSTRUMENT_COMMAND_COUNT + 2] = [
    "VOL", "PIT", "FIN", "CRD", "SHF", "SWM", "WID", "SUB", "FLT", "CUT",
    "RES", "AMP", "LIM", "PAN", "DRY", "SCH", "SDL", "SRV",
    "CVO", "SNC", // extra
];

#[rustfmt::skip]
const DESTINATIONS: [&'static str; 15] = [
    dests::OFF, dests::VOLUME, dests::PITCH, "SHIFT", "SWARM", "WIDTH",
    "SUBOSC", dests::CUTOFF, dests::RES, dests::AMP, dests::PAN,
    dests::MOD_AMT, dests::MOD_RATE, dests::MOD_BOTH, dests::MOD_BINV,
];

impl HyperSynth {
    pub const MOD_OFFSET: usize = 23;

    pub fn new(number: u8) -> Self {
        Self {
            number,
            name: String::new(),
            transpose: true,
            table_tick: 1,
            volume: 0,
            pitch: 0,
            fine_tune: 0x80,
            synth_params: SynthParams::default(),

            scale: 0,
            default_chord: [0xFF; 7],
            shift: 0,
            swarm: 0,
            width: 0,
            subosc: 0,
            chords: [[0; 6]; 0x10],
        }
    }

    pub fn command_name(&self) -> &'static [&'static str] {
        &HYPERSYNTH_COMMAND_NAMES
    }

    pub fn destination_names(&self) -> &'static [&'static str] {
        &DESTINATIONS
    }

    pub fn human_readable_filter(&self) -> &'static str {
        COMMON_FILTER_TYPES[self.synth_params.filter_type as usize]
    }

    pub fn write(&self, w: &mut Writer) {
        w.write_string(&self.name, 12);
        w.write(TranspEq::new(self.transpose).into());
        w.write(self.table_tick);
        w.write(self.volume);
        w.write(self.pitch);
        w.write(self.fine_tune);

        for c in self.default_chord {
            w.write(c);
        }

        w.write(self.scale);
        w.write(self.shift);
        w.write(self.swarm);
        w.write(self.width);
        w.write(self.subosc);

        self.synth_params.write(w, HyperSynth::MOD_OFFSET);

        for chd in self.chords {
            w.write(0xFF);
            for k in chd {
                w.write(k);
            }
        }
    }

    fn load_chord(reader: &Reader) -> [u8; 6] {
        let _ = reader.read(); // padding
        arr![reader.read(); 6]
    }

    pub fn from_reader(reader: &Reader, number: u8) -> Result<Self> {
        let name = reader.read_string(12);
        let transp_eq = TranspEq::from_byte(reader.read());
        let table_tick = reader.read();
        let volume = reader.read();
        let pitch = reader.read();
        let fine_tune0 = reader.read();

        let default_chord = arr![reader.read(); 7];
        let scale = reader.read();
        let shift = reader.read();
        let swarm = reader.read();
        let width = reader.read();
        let subosc = reader.read();
        let synth_params = SynthParams::from_reader(reader, HyperSynth::MOD_OFFSET)?;

        let chords = arr![HyperSynth::load_chord(reader); 0x10];

        Ok(HyperSynth {
            number,
            name,
            transpose: transp_eq.transpose,
            table_tick,
            volume,
            pitch,
            fine_tune: if fine_tune0 == 0 { 0x80 } else { fine_tune0 },
            synth_params,

            scale,
            default_chord,
            shift,
            swarm,
            width,
            subosc,
            chords,
        })
    }
}
