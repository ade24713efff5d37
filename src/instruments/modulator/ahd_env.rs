use crate::reader::Reader;
use crate::writer::Writer;

use super::Mod;

/// Attack-hold-decay envelope, the default modulator type for slots 0 and 1.
#[derive(PartialEq, Debug, Clone)]
pub struct AHDEnv {
    pub dest: u8,
    pub amount: u8,
    pub attack: u8,
    pub hold: u8,
    pub decay: u8,
}

pub(crate) const DEFAULT_DECAY: u8 = 0x80;

impl Default for AHDEnv {
    fn default() -> Self {
        Self {
            dest: 0x00,
            amount: 0xFF,
            attack: 0,
            hold: 0,
            decay: DEFAULT_DECAY,
        }
    }
}

#[rustfmt::skip]
const AHDENV_COMMAND_NAMES: [[&'static str; 5]; 4] = [
    ["EA1", "AT1", "HO1", "DE1", "ET1"],
    ["EA2", "AT2", "HO2", "DE2", "ET2"],
    ["EA3", "AT3", "HO3", "DE3", "ET3"],
    ["EA4", "AT4", "HO4", "DE4", "ET4"],
];

impl AHDEnv {
    pub fn new(dest: u8) -> Self {
        Self {
            dest,
            ..Default::default()
        }
    }

    pub fn command_names(mod_id: usize) -> &'static [&'static str] {
        &AHDENV_COMMAND_NAMES[mod_id]
    }

    /// `dest` was already consumed from the type/dest byte by the caller.
    pub fn from_reader(reader: &Reader, dest: u8) -> Self {
        Self {
            dest,
            amount: reader.read(),
            attack: reader.read(),
            hold: reader.read(),
            decay: reader.read(),
        }
    }

    pub fn write(&self, w: &mut Writer) {
        w.write(self.amount);
        w.write(self.attack);
        w.write(self.hold);
        w.write(self.decay);
    }

    pub fn to_mod(self) -> Mod {
        Mod::AHDEnv(self)
    }
}
