use crate::reader::Reader;
use crate::writer::Writer;

use super::Mod;

#[rustfmt::skip]
const DRUMENV_COMMAND_NAMES: [[&'static str; 5]; 4] = [
    ["EA1", "PK1", "BO1", "DE1", "ET1"],
    ["EA2", "PK2", "BO2", "DE2", "ET2"],
    ["EA3", "PK3", "BO3", "DE3", "ET3"],
    ["EA4", "PK4", "BO4", "DE4", "ET4"],
];

#[derive(PartialEq, Debug, Clone)]
pub struct DrumEnv {
    pub dest: u8,
    pub amount: u8,
    pub peak: u8,
    pub body: u8,
    pub decay: u8,
}

impl Default for DrumEnv {
    fn default() -> Self {
        Self {
            dest: 0x00,
            amount: 0xFF,
            peak: 0,
            body: 0,
            decay: 0x80,
        }
    }
}

impl DrumEnv {
    pub fn new(dest: u8) -> Self {
        Self {
            dest,
            ..Default::default()
        }
    }

    pub fn command_names(mod_id: usize) -> &'static [&'static str] {
        &DRUMENV_COMMAND_NAMES[mod_id]
    }

    pub fn write(&self, w: &mut Writer) {
        w.write(self.amount);
        w.write(self.peak);
        w.write(self.body);
        w.write(self.decay);
    }

    pub fn from_reader(reader: &Reader, dest: u8) -> Self {
        Self {
            dest,
            amount: reader.read(),
            peak: reader.read(),
            body: reader.read(),
            decay: reader.read(),
        }
    }

    pub fn to_mod(self) -> Mod {
        Mod::DrumEnv(self)
    }
}
