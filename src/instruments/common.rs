use crate::error::{Error, Result};
use crate::instruments::modulator::*;
use crate::reader::Reader;
use crate::writer::Writer;

/// The packed transpose/associated-table byte shared by every instrument
/// family header. Bit 0 is the transpose flag; the remaining 7 bits are an
/// index this crate does not interpret but preserves byte-for-byte.
#[derive(PartialEq, Copy, Clone, Default, Debug)]
pub struct TranspEq {
    pub transpose: bool,
    pub reserved: u8,
}

impl TranspEq {
    pub fn new(transpose: bool) -> Self {
        Self {
            transpose,
            reserved: 0,
        }
    }

    pub fn from_byte(value: u8) -> Self {
        Self {
            transpose: (value & 1) != 0,
            reserved: value >> 1,
        }
    }
}

impl From<TranspEq> for u8 {
    fn from(value: TranspEq) -> Self {
        (if value.transpose { 1 } else { 0 }) | (value.reserved << 1)
    }
}

#[rustfmt::skip]
const LIMIT_TYPE: [&str; 8] = [
    "CLIP", "SIN", "FOLD", "WRAP", "POST", "POSTAD", "POST:W1", "POST:W2",
];

/// The instrument's output limiter mode.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct LimitType(pub u8);

impl TryFrom<u8> for LimitType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if (value as usize) < LIMIT_TYPE.len() {
            Ok(LimitType(value))
        } else {
            Err(Error::UnknownEnumValue {
                enum_name: "LimitType".to_string(),
                value,
            })
        }
    }
}

impl LimitType {
    pub fn id(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        LIMIT_TYPE[self.id() as usize]
    }
}

#[rustfmt::skip]
pub(crate) const COMMON_FILTER_TYPES: [&'static str; 8] = [
    "OFF", "LOWPASS", "HIGHPAS", "BANDPAS", "BANDSTP", "LP > HP", "ZDF LP", "ZDF HP",
];

/// The block of synth parameters (filter/amp/mixer sends + the 4-slot
/// modulator bank) shared byte-for-byte by every instrument family, always
/// located at the family's `mod_offset` from the start of its record.
#[derive(PartialEq, Debug, Clone)]
pub struct SynthParams {
    pub filter_type: u8,
    pub filter_cutoff: u8,
    pub filter_res: u8,

    pub amp: u8,
    pub limit: LimitType,

    pub mixer_pan: u8,
    pub mixer_dry: u8,
    pub mixer_chorus: u8,
    pub mixer_delay: u8,
    pub mixer_reverb: u8,

    pub mods: ModulatorBank,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            filter_type: 0,
            filter_cutoff: 0xFF,
            filter_res: 0,

            amp: 0,
            limit: LimitType(0),

            mixer_pan: 0x80,
            mixer_dry: 0xC0,
            mixer_chorus: 0,
            mixer_delay: 0,
            mixer_reverb: 0,

            mods: default_modulator_bank(),
        }
    }
}

impl SynthParams {
    pub const MODULATOR_COUNT: usize = 4;

    pub fn from_reader(reader: &Reader, mod_offset: usize) -> Result<Self> {
        let filter_type = reader.read();
        let filter_cutoff = reader.read();
        let filter_res = reader.read();

        let amp = reader.read();
        let limit = reader.read();

        let mixer_pan = reader.read();
        let mixer_dry = reader.read();
        let mixer_chorus = reader.read();
        let mixer_delay = reader.read();
        let mixer_reverb = reader.read();

        let reader_pos = reader.pos();
        reader.set_pos(reader_pos + mod_offset);

        let mods = [
            Mod::from_reader(reader)?,
            Mod::from_reader(reader)?,
            Mod::from_reader(reader)?,
            Mod::from_reader(reader)?,
        ];

        Ok(Self {
            filter_type,
            filter_cutoff: if filter_cutoff == 0 { 0xFF } else { filter_cutoff },
            filter_res,
            amp,
            limit: LimitType::try_from(limit)?,
            mixer_pan: if mixer_pan == 0 { 0x80 } else { mixer_pan },
            mixer_dry: if mixer_dry == 0 { 0xC0 } else { mixer_dry },
            mixer_chorus,
            mixer_delay,
            mixer_reverb,
            mods,
        })
    }

    pub fn write(&self, w: &mut Writer, mod_offset: usize) {
        w.write(self.filter_type);
        w.write(self.filter_cutoff);
        w.write(self.filter_res);

        w.write(self.amp);
        w.write(self.limit.0);

        w.write(self.mixer_pan);
        w.write(self.mixer_dry);
        w.write(self.mixer_chorus);
        w.write(self.mixer_delay);
        w.write(self.mixer_reverb);

        let writer_pos = w.pos();
        w.seek(writer_pos + mod_offset);
        for m in &self.mods {
            m.write(w);
        }
    }
}
