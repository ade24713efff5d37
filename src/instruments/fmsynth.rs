use arr_macro::arr;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{Error, Result};
use crate::instruments::common::*;
use crate::reader::Reader;
use crate::version::Version;
use crate::writer::Writer;

use super::dests;
use super::CommandPack;

#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct FmAlgo(pub u8);

#[rustfmt::skip]
const FM_ALGO_STRINGS: [&str; 0x0C] = [
    "A>B>C>D",
    "[A+B]>C>D",
    "[A>B+C]>D",
    "[A>B+A>C]>D",
    "[A+B+C]>D",
    "[A>B>C]+D",
    "[A>B>C]+[A>B>D]",
    "[A>B]+[C>D]",
    "[A>B]+[A>C]+[A>D]",
    "[A>B]+[A>C]+D",
    "[A>B]+C+D",
    "A+B+C+D",
];

impl TryFrom<u8> for FmAlgo {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if (value as usize) < FM_ALGO_STRINGS.len() {
            Ok(FmAlgo(value))
        } else {
            Err(Error::UnknownEnumValue {
                enum_name: "FmAlgo".to_string(),
                value,
            })
        }
    }
}

impl FmAlgo {
    pub fn id(self) -> u8 {
        self.0
    }

    pub fn str(self) -> &'static str {
        FM_ALGO_STRINGS[self.id() as usize]
    }

    pub fn from_name(name: &str) -> Result<FmAlgo> {
        FM_ALGO_STRINGS
            .iter()
            .position(|s| *s == name)
            .map(|i| FmAlgo(i as u8))
            .ok_or_else(|| Error::UnknownEnumName {
                enum_name: "FmAlgo".to_string(),
                name: name.to_string(),
            })
    }
}

/// FM operator waveform: the base 16 classic shapes plus the W09..W45
/// extended wavetable set, for 53 variants total.
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[derive(PartialEq, Copy, Clone, Default, Debug)]
pub enum FMWave {
    #[default]
    SIN,
    SW2,
    SW3,
    SW4,
    SW5,
    SW6,
    TRI,
    SAW,
    SQR,
    PUL,
    IMP,
    NOI,
    NLP,
    NHP,
    NBP,
    CLK,
    W09,
    W10,
    W11,
    W12,
    W13,
    W14,
    W15,
    W16,
    W17,
    W18,
    W19,
    W20,
    W21,
    W22,
    W23,
    W24,
    W25,
    W26,
    W27,
    W28,
    W29,
    W30,
    W31,
    W32,
    W33,
    W34,
    W35,
    W36,
    W37,
    W38,
    W39,
    W40,
    W41,
    W42,
    W43,
    W44,
    W45,
}

#[rustfmt::skip]
const FM_FX_COMMANDS: [&'static str; CommandPack::BASE_INSTRUMENT_COMMAND_COUNT + 1] = [
    "VOL", "PIT", "FIN", "ALG", "FM1", "FM2", "FM3", "FM4", "FLT", "CUT",
    "RES", "AMP", "LIM", "PAN", "DRY", "SCH", "SDL", "SRV",
    "FMP", // extra command
];

#[rustfmt::skip]
const DESTINATIONS: [&'static str; 15] = [
    dests::OFF, dests::VOLUME, dests::PITCH, "MOD1", "MOD2", "MOD3", "MOD4",
    dests::CUTOFF, dests::RES, dests::AMP, dests::PAN,
    dests::MOD_AMT, dests::MOD_RATE, dests::MOD_BOTH, dests::MOD_BINV,
];

#[derive(PartialEq, Debug, Default, Clone)]
pub struct Operator {
    pub shape: FMWave,
    pub ratio: u8,
    pub ratio_fine: u8,
    pub level: u8,
    pub feedback: u8,
    pub mod_a: u8,
    pub mod_b: u8,
}

#[derive(PartialEq, Debug, Clone)]
pub struct FMSynth {
    pub number: u8,
    pub name: String,
    pub transpose: bool,
    pub table_tick: u8,
    pub volume: u8,
    pub pitch: u8,
    pub fine_tune: u8,
    pub synth_params: SynthParams,

    pub algo: FmAlgo,
    pub operators: [Operator; 4],
    pub mod1: u8,
    pub mod2: u8,
    pub mod3: u8,
    pub mod4: u8,
}

impl FMSynth {
    pub const MOD_OFFSET: usize = 2;

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

            algo: FmAlgo(0),
            operators: arr![Operator::default(); 4],
            mod1: 0,
            mod2: 0,
            mod3: 0,
            mod4: 0,
        }
    }

    pub fn command_name(&self) -> &'static [&'static str] {
        &FM_FX_COMMANDS
    }

    pub fn destination_names(&self) -> &'static [&'static str] {
        &DESTINATIONS
    }

    pub fn write(&self, w: &mut Writer) {
        w.write_string(&self.name, 12);
        w.write(TranspEq::new(self.transpose).into());
        w.write(self.table_tick);
        w.write(self.volume);
        w.write(self.pitch);
        w.write(self.fine_tune);

        w.write(self.algo.0);

        for op in &self.operators {
            w.write(op.shape.into());
        }

        for op in &self.operators {
            w.write(op.ratio);
            w.write(op.ratio_fine);
        }

        for op in &self.operators {
            w.write(op.level);
            w.write(op.feedback);
        }

        for op in &self.operators {
            w.write(op.mod_a);
        }

        for op in &self.operators {
            w.write(op.mod_b);
        }

        w.write(self.mod1);
        w.write(self.mod2);
        w.write(self.mod3);
        w.write(self.mod4);

        self.synth_params.write(w, FMSynth::MOD_OFFSET);
    }

    pub fn from_reader(reader: &Reader, number: u8, _version: Version) -> Result<Self> {
        let name = reader.read_string(12);
        let transp_eq = TranspEq::from_byte(reader.read());
        let table_tick = reader.read();
        let volume = reader.read();
        let pitch = reader.read();
        let fine_tune0 = reader.read();

        let algo = reader.read();
        let mut operators: [Operator; 4] = arr![Operator::default(); 4];
        for op in operators.iter_mut() {
            let wav_code = reader.read();
            op.shape = FMWave::try_from(wav_code).map_err(|_| Error::UnknownEnumValue {
                enum_name: "FMWave".to_string(),
                value: wav_code,
            })?;
        }
        for op in operators.iter_mut() {
            op.ratio = reader.read();
            op.ratio_fine = reader.read();
        }
        for op in operators.iter_mut() {
            op.level = reader.read();
            op.feedback = reader.read();
        }
        for op in operators.iter_mut() {
            op.mod_a = reader.read();
        }
        for op in operators.iter_mut() {
            op.mod_b = reader.read();
        }
        let mod1 = reader.read();
        let mod2 = reader.read();
        let mod3 = reader.read();
        let mod4 = reader.read();

        let synth_params = SynthParams::from_reader(reader, FMSynth::MOD_OFFSET)?;

        Ok(FMSynth {
            number,
            name,
            transpose: transp_eq.transpose,
            table_tick,
            volume,
            pitch,
            fine_tune: if fine_tune0 == 0 { 0x80 } else { fine_tune0 },
            synth_params,

            algo: FmAlgo(algo),
            operators,
            mod1,
            mod2,
            mod3,
            mod4,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Writer;

    #[test]
    fn operator_round_trip_matches_byte_layout() {
        let mut fs = FMSynth::new(0);
        fs.algo = FmAlgo::try_from(0x0B).unwrap();
        fs.operators[0] = Operator {
            shape: FMWave::SIN,
            ratio: 25,
            level: 0xA0,
            feedback: 0xA1,
            ..Default::default()
        };
        fs.operators[3] = Operator {
            shape: FMWave::SQR,
            ratio: 4,
            level: 0xD0,
            feedback: 0xD1,
            ..Default::default()
        };

        let mut w = Writer::with_size(crate::instruments::Instrument::INSTRUMENT_MEMORY_SIZE);
        crate::instruments::Instrument::FMSynth(fs).write(&mut w);
        let data = w.finish();

        assert_eq!(data[18], 0x0B);
        assert_eq!(data[19], 0x00);
        assert_eq!(data[22], 0x08);

        let reader = Reader::new(data);
        reader.read(); // discard the instrument kind byte
        let back = FMSynth::from_reader(&reader, 0, Version::default()).unwrap();

        assert_eq!(back.algo.id(), 0x0B);
        assert_eq!(back.operators[0].ratio, 25);
        assert_eq!(back.operators[3].ratio, 4);
        assert_eq!(back.operators[0].level, 0xA0);
        assert_eq!(back.operators[3].feedback, 0xD1);
    }
}
