use crate::error::{Error, Result};
use crate::reader::Reader;
use crate::version::Version;
use crate::writer::Writer;

mod adsr_env;
mod ahd_env;
mod drum_env;
mod lfo;
mod tracking_env;
mod trig_env;

pub use adsr_env::*;
pub use ahd_env::*;
pub use drum_env::*;
pub use lfo::*;
pub use tracking_env::*;
pub use trig_env::*;

/// A single 6-byte modulator record: a 4-bit type, a 4-bit destination, and
/// a type-specific tail.
#[derive(PartialEq, Debug, Clone)]
pub enum Mod {
    AHDEnv(AHDEnv),
    ADSREnv(ADSREnv),
    DrumEnv(DrumEnv),
    LFO(LFO),
    TrigEnv(TrigEnv),
    TrackingEnv(TrackingEnv),
}

/// Per-modulator-slot default type: slots 0 and 1 default to AHD envelopes,
/// slots 2 and 3 default to LFOs.
const DEFAULT_MODULATOR_TYPES: [u8; 4] = [0, 0, 3, 3];

impl Mod {
    /// Size in bytes of a single modulator record.
    pub const SIZE: usize = 6;

    /// Number of FX commands each modulator slot contributes to a
    /// [`crate::instruments::CommandPack`].
    pub const COMMAND_PER_MOD: usize = 5;

    /// Build the default modulator for a given bank slot (0..3), per the
    /// firmware's default modulator type table.
    pub fn default_for_slot(slot: usize) -> Self {
        match DEFAULT_MODULATOR_TYPES[slot] {
            0 => Mod::AHDEnv(AHDEnv::default()),
            3 => Mod::LFO(LFO::default()),
            _ => unreachable!("default modulator table only contains AHD/LFO codes"),
        }
    }

    pub fn dest(&self) -> u8 {
        match self {
            Mod::AHDEnv(m) => m.dest,
            Mod::ADSREnv(m) => m.dest,
            Mod::DrumEnv(m) => m.dest,
            Mod::LFO(m) => m.dest,
            Mod::TrigEnv(m) => m.dest,
            Mod::TrackingEnv(m) => m.dest,
        }
    }

    pub fn command_name(&self, _ver: Version, mod_id: usize) -> &'static [&'static str] {
        match self {
            Mod::AHDEnv(_) => AHDEnv::command_names(mod_id),
            Mod::ADSREnv(_) => ADSREnv::command_name(mod_id),
            Mod::DrumEnv(_) => DrumEnv::command_names(mod_id),
            Mod::LFO(_) => LFO::command_name(mod_id),
            Mod::TrigEnv(_) => TrigEnv::command_name(mod_id),
            Mod::TrackingEnv(_) => TrackingEnv::command_name(mod_id),
        }
    }

    pub fn from_reader(reader: &Reader) -> Result<Self> {
        let start_pos = reader.pos();
        let first_byte = reader.read();
        let ty = first_byte >> 4;
        let dest = first_byte & 0x0F;

        let r = match ty {
            0 => Mod::AHDEnv(AHDEnv::from_reader(reader, dest)),
            1 => Mod::ADSREnv(ADSREnv::from_reader(reader, dest)),
            2 => Mod::DrumEnv(DrumEnv::from_reader(reader, dest)),
            3 => Mod::LFO(LFO::from_reader(reader, dest)?),
            4 => Mod::TrigEnv(TrigEnv::from_reader(reader, dest)),
            5 => Mod::TrackingEnv(TrackingEnv::from_reader(reader, dest)),
            x => {
                return Err(Error::UnknownEnumValue {
                    enum_name: "ModulatorType".to_string(),
                    value: x,
                })
            }
        };

        reader.set_pos(start_pos + Self::SIZE);
        Ok(r)
    }

    pub fn write(&self, w: &mut Writer) {
        let start = w.pos();

        match self {
            Mod::AHDEnv(env) => {
                w.write(env.dest);
                env.write(w);
            }
            Mod::ADSREnv(env) => {
                w.write(1 << 4 | env.dest);
                env.write(w);
            }
            Mod::DrumEnv(env) => {
                w.write(2 << 4 | env.dest);
                env.write(w);
            }
            Mod::LFO(lfo) => {
                w.write(3 << 4 | lfo.dest);
                lfo.write(w);
            }
            Mod::TrigEnv(env) => {
                w.write(4 << 4 | env.dest);
                env.write(w);
            }
            Mod::TrackingEnv(env) => {
                w.write(5 << 4 | env.dest);
                env.write(w);
            }
        }

        w.seek(start + Self::SIZE);
    }
}

/// The fixed 4-slot bank of modulators carried by every instrument family.
pub type ModulatorBank = [Mod; 4];

pub fn default_modulator_bank() -> ModulatorBank {
    [
        Mod::default_for_slot(0),
        Mod::default_for_slot(1),
        Mod::default_for_slot(2),
        Mod::default_for_slot(3),
    ]
}

/// First slot in the bank whose destination is the empty sentinel `0x00`.
pub fn modulator_bank_available_slot(bank: &ModulatorBank) -> Option<usize> {
    bank.iter().position(|m| m.dest() == 0)
}

/// Place `m` in the first available slot, replacing its default occupant.
pub fn modulator_bank_add(bank: &mut ModulatorBank, m: Mod) -> Result<usize> {
    let slot = modulator_bank_available_slot(bank).ok_or(Error::NoSlotAvailable {
        collection: "ModulatorBank".to_string(),
    })?;
    bank[slot] = m;
    Ok(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bank_matches_firmware_defaults() {
        let bank = default_modulator_bank();
        assert!(matches!(bank[0], Mod::AHDEnv(_)));
        assert!(matches!(bank[1], Mod::AHDEnv(_)));
        assert!(matches!(bank[2], Mod::LFO(_)));
        assert!(matches!(bank[3], Mod::LFO(_)));
    }

    #[test]
    fn ahd_round_trip_preserves_decay() {
        let env = AHDEnv {
            dest: 2,
            amount: 0x40,
            attack: 0x10,
            hold: 0x20,
            decay: 0x33,
        };
        let m = Mod::AHDEnv(env.clone());
        let mut w = Writer::with_size(Mod::SIZE);
        m.write(&mut w);
        let buf = w.finish();

        let r = Reader::new(buf);
        let read_back = Mod::from_reader(&r).unwrap();
        assert_eq!(read_back, Mod::AHDEnv(env));
    }

    #[test]
    fn ahd_decay_survives_past_block_end() {
        let env = AHDEnv {
            dest: 0x01,
            amount: 0xFF,
            attack: 0x00,
            hold: 0x00,
            decay: 0x60,
        };
        let m = Mod::AHDEnv(env.clone());
        let mut w = Writer::with_size(Mod::SIZE);
        m.write(&mut w);
        let buf = w.finish();

        let r = Reader::new(buf);
        let read_back = Mod::from_reader(&r).unwrap();
        match read_back {
            Mod::AHDEnv(back) => assert_eq!(back.decay, 0x60),
            other => panic!("expected AHDEnv, got {:?}", other),
        }
    }

    #[test]
    fn lfo_round_trip() {
        let lfo = LFO {
            shape: LfoShape::SQR_UP,
            dest: 5,
            trigger_mode: LfoTriggerMode::RETRIG,
            freq: 0x22,
            amount: 0x11,
            retrigger: 0x03,
        };
        let m = Mod::LFO(lfo.clone());
        let mut w = Writer::with_size(Mod::SIZE);
        m.write(&mut w);
        let buf = w.finish();

        let r = Reader::new(buf);
        let read_back = Mod::from_reader(&r).unwrap();
        assert_eq!(read_back, Mod::LFO(lfo));
    }
}
