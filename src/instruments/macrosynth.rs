use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{Error, Result};
use crate::instruments::common::*;
use crate::reader::Reader;
use crate::version::Version;
use crate::writer::Writer;

use super::dests;
use super::CommandPack;

/// Macro synth oscillator modes.
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[derive(PartialEq, Copy, Clone, Default, Debug)]
pub enum MacroSynthOsc {
    #[default]
    CSAW,
    MORPH,
    SAW_SQUARE,
    SINE_TRIANGLE,
    BUZZ,
    SQUARE_SUB,
    SAW_SUB,
    SQUARE_SYNC,
    SAW_SYNC,
    TRIPLE_SAW,
    TRIPLE_SQUARE,
    TRIPLE_TRIANGLE,
    TRIPLE_SIN,
    TRIPLE_RNG,
    SAW_SWARM,
    SAW_COMB,
    TOY,
    DIGITAL_FILTER_LP,
    DIGITAL_FILTER_PK,
    DIGITAL_FILTER_BP,
    DIGITAL_FILTER_HP,
    VOSIM,
    VOWEL,
    VOWEL_FOF,
    HARMONICS,
    FM,
    FEEDBACK_FM,
    CHAOTIC_FEEDBACK_FM,
    PLUCKED,
    BOWED,
    BLOWN,
    FLUTED,
    STRUCK_BELL,
    STRUCK_DRUM,
    KICK,
    CYMBAL,
    SNARE,
    WAVETABLES,
    WAVE_MAP,
    WAV_LINE,
    WAV_PARAPHONIC,
    FILTERED_NOISE,
    TWIN_PEAKS_NOISE,
    CLOCKED_NOISE,
    GRANULAR_CLOUD,
    PARTICLE_NOISE,
    DIGITAL_MOD,
    MORSE_NOISE,
}

#[rustfmt::skip]
const MACRO_SYNTH_COMMANDS: [&'static str; CommandPack::BASE_INSTRUMENT_COMMAND_COUNT + 1] = [
    "VOL", "PIT", "FIN", "OSC", "TBR", "COL", "DEG", "RED", "FIL", "CUT",
    "RES", "AMP", "LIM", "PAN", "DRY", "SCH", "SDL", "SRV",
    "TRG", // extra command
];

#[rustfmt::skip]
const DESTINATIONS: [&'static str; 15] = [
    dests::OFF, dests::VOLUME, dests::PITCH, "TIMBRE", "COLOR",
    dests::DEGRADE, "REDUX", dests::CUTOFF, dests::RES, dests::AMP, dests::PAN,
    dests::MOD_AMT, dests::MOD_RATE, dests::MOD_BOTH, dests::MOD_BINV,
];

#[derive(PartialEq, Debug, Clone)]
pub struct MacroSynth {
    pub number: u8,
    pub name: String,
    pub transpose: bool,
    pub table_tick: u8,
    pub volume: u8,
    pub pitch: u8,
    pub fine_tune: u8,
    pub synth_params: SynthParams,

    pub shape: MacroSynthOsc,
    pub timbre: u8,
    pub color: u8,
    pub degrade: u8,
    pub redux: u8,
}

impl MacroSynth {
    pub const MOD_OFFSET: usize = 30;

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

            shape: MacroSynthOsc::default(),
            timbre: 0x80,
            color: 0x80,
            degrade: 0,
            redux: 0,
        }
    }

    pub fn command_name(&self) -> &'static [&'static str] {
        &MACRO_SYNTH_COMMANDS
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

        w.write(self.shape.into());
        w.write(self.timbre);
        w.write(self.color);
        w.write(self.degrade);
        w.write(self.redux);

        self.synth_params.write(w, MacroSynth::MOD_OFFSET);
    }

    pub fn from_reader(reader: &Reader, number: u8, _version: Version) -> Result<Self> {
        let name = reader.read_string(12);

        let transp_eq = TranspEq::from_byte(reader.read());
        let table_tick = reader.read();
        let volume = reader.read();
        let pitch = reader.read();
        let fine_tune0 = reader.read();

        let shape = reader.read();
        let timbre = reader.read();
        let color = reader.read();
        let degrade = reader.read();
        let redux = reader.read();

        let synth_params = SynthParams::from_reader(reader, MacroSynth::MOD_OFFSET)?;

        Ok(MacroSynth {
            number,
            name,
            transpose: transp_eq.transpose,
            table_tick,
            volume,
            pitch,
            fine_tune: if fine_tune0 == 0 { 0x80 } else { fine_tune0 },
            synth_params,

            shape: shape.try_into().map_err(|_| Error::UnknownEnumValue {
                enum_name: "MacroSynthOsc".to_string(),
                value: shape,
            })?,
            timbre,
            color,
            degrade,
            redux,
        })
    }
}
