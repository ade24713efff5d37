use std::fmt;

use arr_macro::arr;

use crate::error::Result;
use crate::reader::Reader;
use crate::version::Version;
use crate::writer::Writer;

/// A custom microtonal scale: per-semitone enable flags and fine-tuning
/// offsets for the 12 notes of an octave.
#[derive(PartialEq, Clone)]
pub struct Scale {
    pub number: u8,
    pub name: String,
    pub notes: [NoteOffset; 12],
}

impl Scale {
    pub const SIZE: usize = 32;

    /// Read a standalone scale file: a 14-byte version header followed by
    /// one scale record.
    pub fn read(buf: Vec<u8>) -> Result<Self> {
        let reader = Reader::new(buf);
        reader.require(Version::SIZE + Self::SIZE)?;
        Version::from_reader(&reader);
        Ok(Self::from_reader(&reader, 0))
    }

    pub(crate) fn from_reader(reader: &Reader, number: u8) -> Self {
        let map = reader.read_u16();
        let mut notes = arr![NoteOffset::default(); 12];

        for (i, note) in notes.iter_mut().enumerate() {
            note.enabled = ((map >> i) & 0x1) == 1;
            let offset = f32::from(reader.read()) + (f32::from(reader.read()) / 100.0);
            note.semitones = offset;
        }

        let name = reader.read_string(16);
        Self {
            number,
            name,
            notes,
        }
    }

    pub fn write(&self, w: &mut Writer) {
        let mut map: u16 = 0;
        for (i, note) in self.notes.iter().enumerate() {
            if note.enabled {
                map |= 1 << i;
            }
        }
        w.write_u16(map);

        for note in &self.notes {
            let whole = note.semitones.trunc();
            let cents = ((note.semitones - whole).abs() * 100.0).round() as u8;
            w.write(whole as i8 as u8);
            w.write(cents);
        }

        w.write_string(&self.name, 16);
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            number: 0,
            name: "CHROMATIC".to_string(),
            notes: arr![NoteOffset::default(); 12],
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        let offsets = self
            .notes
            .iter()
            .zip(notes.iter())
            .map(|(offset, note)| -> String {
                let s = if offset.enabled {
                    let sign = if offset.semitones < 0.0 { "-" } else { " " };
                    format!(" ON{}{:02.2}", sign, offset.semitones.abs())
                } else {
                    " -- -- --".to_string()
                };
                format!("{:<2}{}", note, &s)
            })
            .collect::<Vec<String>>()
            .join("\n");

        write!(
            f,
            "Scale {}\nKEY   C\n\n   EN OFFSET\n{}\n\nNAME  {}",
            self.number, offsets, &self.name
        )
    }
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self)
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct NoteOffset {
    pub enabled: bool,
    /// Semitones.cents, roughly -24.0..24.0.
    pub semitones: f32,
}

impl Default for NoteOffset {
    fn default() -> Self {
        Self {
            enabled: true,
            semitones: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_is_chromatic() {
        let s = Scale::default();
        assert_eq!(s.name, "CHROMATIC");
        assert!(s.notes.iter().all(|n| n.enabled));
    }
}
