use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{Error, Result};
use crate::reader::Reader;
use crate::writer::Writer;

use super::Mod;

#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[derive(PartialEq, Copy, Clone, Default, Debug)]
pub enum LfoShape {
    #[default]
    TRI,
    SIN,
    RAMP_DOWN,
    RAMP_UP,
    EXP_DN,
    EXP_UP,
    SQR_DN,
    SQR_UP,
    RANDOM,
    DRUNK,
    TRI_T,
    SIN_T,
    RAMPD_T,
    RAMPU_T,
    EXPD_T,
    EXPU_T,
    SQ_D_T,
    SQ_U_T,
    RAND_T,
    DRNK_T,
}

#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[derive(PartialEq, Copy, Clone, Default, Debug)]
pub enum LfoTriggerMode {
    #[default]
    FREE,
    RETRIG,
    HOLD,
    ONCE,
}

/// Low-frequency oscillator modulator, the default for slots 2 and 3.
#[derive(PartialEq, Debug, Clone)]
pub struct LFO {
    pub shape: LfoShape,
    pub dest: u8,
    pub trigger_mode: LfoTriggerMode,
    pub freq: u8,
    pub amount: u8,
    pub retrigger: u8,
}

pub(crate) const DEFAULT_FREQUENCY: u8 = 0x10;

impl Default for LFO {
    fn default() -> Self {
        Self {
            shape: LfoShape::default(),
            dest: 0x00,
            trigger_mode: LfoTriggerMode::default(),
            freq: DEFAULT_FREQUENCY,
            amount: 0xFF,
            retrigger: 0,
        }
    }
}

#[rustfmt::skip]
const LFO_COMMAND_NAMES: [[&'static str; 5]; 4] = [
    ["LA1", "LO1", "LS1", "LF1", "LT1"],
    ["LA2", "LO2", "LS2", "LF2", "LT2"],
    ["LA3", "LO3", "LS3", "LF3", "LT3"],
    ["LA4", "LO4", "LS4", "LF4", "LT4"],
];

impl LFO {
    pub fn new(dest: u8) -> Self {
        Self {
            dest,
            ..Default::default()
        }
    }

    pub fn command_name(mod_id: usize) -> &'static [&'static str] {
        &LFO_COMMAND_NAMES[mod_id]
    }

    pub fn from_reader(reader: &Reader, dest: u8) -> Result<Self> {
        let amount = reader.read();
        let shape = reader.read();
        let trigger_mode = reader.read();
        let freq = reader.read();
        let retrigger = reader.read();

        Ok(Self {
            dest,
            amount,
            shape: shape.try_into().map_err(|_| Error::UnknownEnumValue {
                enum_name: "LfoShape".to_string(),
                value: shape,
            })?,
            trigger_mode: trigger_mode
                .try_into()
                .map_err(|_| Error::UnknownEnumValue {
                    enum_name: "LfoTriggerMode".to_string(),
                    value: trigger_mode,
                })?,
            freq,
            retrigger,
        })
    }

    pub fn write(&self, w: &mut Writer) {
        w.write(self.amount);
        w.write(self.shape.into());
        w.write(self.trigger_mode.into());
        w.write(self.freq);
        w.write(self.retrigger);
    }

    pub fn to_mod(self) -> Mod {
        Mod::LFO(self)
    }
}
