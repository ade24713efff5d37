use std::fmt;

use arr_macro::arr;

use crate::error::{Error, Result};
use crate::fx::{FxCommands, FX};
use crate::instruments::{CommandPack, Instrument};
use crate::reader::Reader;
use crate::scale::Scale;
use crate::settings::{EffectsSettings, MidiMapping, MidiSettings, MixerSettings};
use crate::version::Version;
use crate::writer::Writer;

/// Fixed byte offsets of a project's top-level sub-records, as laid out by
/// the 4.0 firmware (this crate does not model the 4.1 EQ extension).
pub struct Offsets {
    pub groove: usize,
    pub song: usize,
    pub phrases: usize,
    pub chains: usize,
    pub table: usize,
    pub instruments: usize,
    pub effect_settings: usize,
    pub midi_mapping: usize,
    pub scale: usize,
}

pub const V4_OFFSETS: Offsets = Offsets {
    groove: 0xEE,
    song: 0x2EE,
    phrases: 0xAEE,
    chains: 0x9A5E,
    table: 0xBA3E,
    instruments: 0x13A3E,
    effect_settings: 0x1A5C1,
    midi_mapping: 0x1A5FE,
    scale: 0x1AA7E,
};

////////////////////////////////////////////////////////////////////////////////////
/// MARK: Project
////////////////////////////////////////////////////////////////////////////////////
/// The top-level aggregate decoded from a `.m8s` file: firmware version,
/// song metadata, the song matrix, and every bank of chains, phrases,
/// instruments, tables, grooves, and scales. Holds the original byte
/// buffer so that unmodeled regions survive a read-then-write round trip.
#[derive(PartialEq, Clone)]
pub struct Project {
    pub version: Version,
    pub directory: String,
    pub transpose: u8,
    pub tempo: f32,
    pub quantize: u8,
    pub name: String,
    pub key: u8,

    pub song: SongMatrix,
    pub phrases: Vec<Phrase>,
    pub chains: Vec<Chain>,
    pub instruments: Vec<Instrument>,
    pub tables: Vec<Table>,
    pub grooves: Vec<Groove>,
    pub scales: Vec<Scale>,

    pub mixer_settings: MixerSettings,
    pub effects_settings: EffectsSettings,
    pub midi_settings: MidiSettings,
    pub midi_mappings: Vec<MidiMapping>,

    data: Vec<u8>,
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("version", &self.version)
            .field("directory", &self.directory)
            .field("name", &self.name)
            .field("tempo", &self.tempo)
            .field("transpose", &self.transpose)
            .field("quantize", &self.quantize)
            .field("key", &self.key)
            .field("song", &self.song)
            .field("chains", self.chains.first().unwrap_or(&Chain::default()))
            .field("phrases", &self.phrase_view(0))
            .field(
                "instruments",
                self.instruments.first().unwrap_or(&Instrument::default()),
            )
            .field("tables", &self.table_view(0))
            .field("grooves", &self.grooves[0])
            .field("scales", &self.scales[0])
            .field("mixer_settings", &self.mixer_settings)
            .field("effects_settings", &self.effects_settings)
            .field("midi_settings", &self.midi_settings)
            .finish()
    }
}

impl Project {
    const SIZE: usize = 0x1AC7E;

    pub const N_PHRASES: usize = 255;
    pub const N_CHAINS: usize = 255;
    pub const N_INSTRUMENTS: usize = 128;
    pub const N_TABLES: usize = 256;
    pub const N_GROOVES: usize = 32;
    pub const N_SCALES: usize = 16;
    pub const N_MIDI_MAPPINGS: usize = 128;

    pub fn phrase_view(&self, ix: usize) -> PhraseView {
        PhraseView {
            phrase: &self.phrases[ix],
            instruments: &self.instruments,
        }
    }

    pub fn table_view(&self, ix: usize) -> TableView {
        TableView {
            table: &self.tables[ix],
            instrument: if ix < Self::N_INSTRUMENTS {
                self.instruments[ix].instr_command_text(self.version)
            } else {
                CommandPack::default()
            },
        }
    }

    /// Build a fresh project from an all-zero template buffer, the way a
    /// new project on the device itself starts out. Every family's
    /// `from_reader` already repairs a zero byte in a non-zero-default
    /// field (e.g. Sampler's `LENGTH`/`PAN`/`FINE_TUNE`), so reading the
    /// zeroed buffer is enough to produce correctly-defaulted instruments.
    pub fn initialise() -> Self {
        let buf = vec![0u8; Version::SIZE + Self::SIZE];
        Self::read(buf).expect("all-zero template buffer must parse")
    }

    /// Read a complete `.m8s` project file.
    pub fn read(buf: Vec<u8>) -> Result<Self> {
        let reader = Reader::new(buf);
        reader.require(Version::SIZE + Self::SIZE)?;
        let version = Version::from_reader(&reader);
        Self::from_reader(&reader, version)
    }

    /// Read a project from a file on disk.
    pub fn read_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let buf = std::fs::read(path)?;
        Self::read(buf)
    }

    /// Write the project back out, preserving every byte of the original
    /// buffer this project was read from outside the known sub-record
    /// ranges.
    pub fn write(&self) -> Vec<u8> {
        let mut w = Writer::new(self.data.clone());
        self.write_patterns(&V4_OFFSETS, &mut w);
        w.finish()
    }

    /// Write the project out to a file on disk.
    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.write())?;
        Ok(())
    }

    fn write_patterns(&self, ofs: &Offsets, w: &mut Writer) {
        // `self.version.write` only touches offset 0x0A onward -- bytes
        // 0x00..0x0A are the file's magic, carried over untouched from
        // `self.data`.
        self.version.write(w);
        w.write_string(&self.directory, 128);
        w.write(self.transpose);
        w.write_f32(self.tempo);
        w.write(self.quantize);
        w.write_string(&self.name, 12);
        self.midi_settings.write(w);
        w.write(self.key);
        w.write_bytes(&[0; 18]);
        self.mixer_settings.write(w);

        w.seek(ofs.groove);
        for g in &self.grooves {
            g.write(w);
        }

        w.seek(ofs.song);
        w.write_bytes(&self.song.steps);

        w.seek(ofs.phrases);
        for ph in &self.phrases {
            ph.write(w);
        }

        w.seek(ofs.chains);
        for ch in &self.chains {
            ch.write(w);
        }

        w.seek(ofs.table);
        for table in &self.tables {
            table.write(w);
        }

        w.seek(ofs.instruments);
        for instr in &self.instruments {
            instr.write(w);
        }

        w.seek(ofs.effect_settings);
        self.effects_settings.write(w, self.version);

        w.seek(ofs.midi_mapping);
        for m in &self.midi_mappings {
            m.write(w);
        }

        w.seek(ofs.scale);
        for s in &self.scales {
            s.write(w);
        }
    }

    fn from_reader(reader: &Reader, version: Version) -> Result<Self> {
        let data = reader.buffer().to_vec();

        let directory = reader.read_string(128);
        let transpose = reader.read();
        let tempo = reader.read_f32();
        let quantize = reader.read();
        let name = reader.read_string(12);
        let midi_settings = MidiSettings::from_reader(reader);
        let key = reader.read();
        reader.read_bytes(18); // reserved
        let mixer_settings = MixerSettings::from_reader(reader);

        let grooves = (0..Self::N_GROOVES)
            .map(|i| Groove::from_reader(reader, i as u8))
            .collect::<Vec<Groove>>();
        let song = SongMatrix::from_reader(reader);
        let phrases = (0..Self::N_PHRASES)
            .map(|_| Phrase::from_reader(reader, version))
            .collect::<Vec<Phrase>>();
        let chains = (0..Self::N_CHAINS)
            .map(|_| Chain::from_reader(reader))
            .collect::<Vec<Chain>>();
        let tables = (0..Self::N_TABLES)
            .map(|_| Table::from_reader(reader, version))
            .collect::<Vec<Table>>();

        let instruments = (0..Self::N_INSTRUMENTS)
            .map(|i| Instrument::from_reader(reader, i as u8, version))
            .collect::<Result<Vec<Instrument>>>()?;

        reader.read_bytes(3); // reserved
        let effects_settings = EffectsSettings::from_reader(reader, version);
        reader.set_pos(V4_OFFSETS.midi_mapping);
        let midi_mappings = (0..Self::N_MIDI_MAPPINGS)
            .map(|_| MidiMapping::from_reader(reader))
            .collect::<Vec<MidiMapping>>();

        reader.set_pos(V4_OFFSETS.scale);
        let scales = (0..Self::N_SCALES)
            .map(|i| Scale::from_reader(reader, i as u8))
            .collect::<Vec<Scale>>();

        Ok(Self {
            version,
            directory,
            transpose,
            tempo,
            quantize,
            name,
            midi_settings,
            key,
            mixer_settings,
            grooves,
            song,
            phrases,
            chains,
            tables,
            instruments,
            scales,
            effects_settings,
            midi_mappings,

            data,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////
// MARK: SongMatrix
////////////////////////////////////////////////////////////////////////////////////
/// 256 rows x 8 columns of chain indices. `0xFF` denotes an empty cell.
#[derive(PartialEq, Clone)]
pub struct SongMatrix {
    pub steps: [u8; SongMatrix::TRACK_COUNT * SongMatrix::ROW_COUNT],
}

impl SongMatrix {
    pub const TRACK_COUNT: usize = 8;
    pub const ROW_COUNT: usize = 0x100;

    pub fn print_screen(&self) -> String {
        self.print_screen_from(0)
    }

    pub fn print_screen_from(&self, start: u8) -> String {
        (start..start + 16).fold("   1  2  3  4  5  6  7  8  \n".to_string(), |s, row| {
            s + &self.print_row(row) + "\n"
        })
    }

    pub fn print_row(&self, row: u8) -> String {
        let start = row as usize * 8;
        (start..start + 8).fold(format!("{row:02x} "), |s, b| -> String {
            let v = self.steps[b];
            let repr = if v == 0xFF {
                "-- ".to_string()
            } else {
                format!("{:02x} ", v)
            };
            s + &repr
        })
    }

    fn from_reader(reader: &Reader) -> Self {
        Self {
            steps: reader
                .read_bytes(Self::TRACK_COUNT * Self::ROW_COUNT)
                .try_into()
                .unwrap(),
        }
    }
}

impl fmt::Display for SongMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SONG\n\n{}", self.print_screen())
    }
}
impl fmt::Debug for SongMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self)
    }
}

////////////////////////////////////////////////////////////////////////////////////
// MARK: Chain
////////////////////////////////////////////////////////////////////////////////////
#[derive(PartialEq, Clone, Default)]
pub struct Chain {
    pub steps: [ChainStep; 16],
}

impl Chain {
    pub const SIZE: usize = ChainStep::SIZE * 16;

    pub fn is_empty(&self) -> bool {
        self.steps.iter().all(|s| s.is_empty())
    }

    pub fn clear(&mut self) {
        let dflt = ChainStep::default();
        for s in &mut self.steps {
            *s = dflt;
        }
    }

    /// Place a step in the first empty slot.
    pub fn add_step(&mut self, phrase: u8, transpose: u8) -> Result<usize> {
        let slot = self
            .steps
            .iter()
            .position(|s| s.is_empty())
            .ok_or(Error::NoSlotAvailable {
                collection: "Chain".to_string(),
            })?;
        self.steps[slot] = ChainStep { phrase, transpose };
        Ok(slot)
    }

    pub fn print_screen(&self) -> String {
        (0..16).fold("  PH TSP\n".to_string(), |s, row| {
            s + &self.steps[row].print(row as u8) + "\n"
        })
    }

    pub fn write(&self, w: &mut Writer) {
        for cs in &self.steps {
            cs.write(w)
        }
    }

    pub fn from_reader(reader: &Reader) -> Self {
        Self {
            steps: arr![ChainStep::from_reader(reader); 16],
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CHAIN\n\n{}", self.print_screen())
    }
}
impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self)
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ChainStep {
    pub phrase: u8,
    pub transpose: u8,
}

impl Default for ChainStep {
    fn default() -> Self {
        Self {
            phrase: 0xFF,
            transpose: 0,
        }
    }
}

impl ChainStep {
    pub const SIZE: usize = 2;

    pub fn is_empty(self) -> bool {
        self.phrase == 0xFF
    }

    pub fn print(&self, row: u8) -> String {
        if self.is_empty() {
            format!("{:x} -- 00", row)
        } else {
            format!("{:x} {:02x} {:02x}", row, self.phrase, self.transpose)
        }
    }

    pub fn write(&self, w: &mut Writer) {
        w.write(self.phrase);
        w.write(self.transpose);
    }

    fn from_reader(reader: &Reader) -> Self {
        Self {
            phrase: reader.read(),
            transpose: reader.read(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////
// MARK: Phrase
////////////////////////////////////////////////////////////////////////////////////
#[derive(PartialEq, Clone)]
pub struct Phrase {
    pub steps: [Step; 16],
    version: Version,
}

impl Default for Phrase {
    fn default() -> Self {
        Self {
            steps: Default::default(),
            version: Version::default(),
        }
    }
}

impl Phrase {
    pub const SIZE: usize = 16 * Step::SIZE;

    pub fn is_empty(&self) -> bool {
        self.steps.iter().all(|s| s.is_empty())
    }

    pub fn clear(&mut self) {
        for s in &mut self.steps {
            s.clear();
        }
    }

    pub fn print_screen(&self, instruments: &[Instrument]) -> String {
        let mut cmd_pack = CommandPack::default();
        let fx_commands = FX::command_names();
        let mut acc = String::from("  N   V  I  FX1   FX2   FX3  \n");

        for (i, step) in self.steps.iter().enumerate() {
            let instrument = step.instrument as usize;

            if instrument < Project::N_INSTRUMENTS {
                cmd_pack = instruments[instrument].instr_command_text(self.version);
            }

            acc += &step.print(i as u8, fx_commands, cmd_pack);
            acc += "\n";
        }

        acc
    }

    pub fn write(&self, w: &mut Writer) {
        for s in &self.steps {
            s.write(w);
        }
    }

    pub fn from_reader(reader: &Reader, version: Version) -> Self {
        Self {
            steps: arr![Step::from_reader(reader); 16],
            version,
        }
    }
}

pub struct PhraseView<'a> {
    phrase: &'a Phrase,
    instruments: &'a [Instrument],
}

impl<'a> fmt::Display for PhraseView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PHRASE \n\n{}", self.phrase.print_screen(self.instruments))
    }
}

impl<'a> fmt::Debug for PhraseView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self)
    }
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct Step {
    pub note: Note,
    pub velocity: u8,
    pub instrument: u8,
    pub fx1: FX,
    pub fx2: FX,
    pub fx3: FX,
}

impl Step {
    pub const SIZE: usize = 3 + 3 * FX::SIZE;

    pub fn print(&self, row: u8, fx_cmds: FxCommands, cmd_pack: CommandPack) -> String {
        let velocity = if self.velocity == 0xFF {
            "--".to_string()
        } else {
            format!("{:02x}", self.velocity)
        };
        let instrument = if self.instrument == 0xFF {
            "--".to_string()
        } else {
            format!("{:02x}", self.instrument)
        };

        format!(
            "{:x} {} {} {} {} {} {}",
            row,
            self.note,
            velocity,
            instrument,
            self.fx1.print(fx_cmds, cmd_pack),
            self.fx2.print(fx_cmds, cmd_pack),
            self.fx3.print(fx_cmds, cmd_pack)
        )
    }

    pub fn clear(&mut self) {
        self.note = Note::default();
        self.velocity = 0xFF;
        self.instrument = 0xFF;
        self.fx1 = FX::default();
        self.fx2 = FX::default();
        self.fx3 = FX::default();
    }

    pub fn is_empty(&self) -> bool {
        self.note.is_empty()
            && self.velocity == 0xFF
            && self.instrument == 0xFF
            && self.fx1.is_empty()
            && self.fx2.is_empty()
            && self.fx3.is_empty()
    }

    /// Place an FX tuple in the step's first empty FX slot.
    pub fn add_fx(&mut self, command: u8, value: u8) -> Result<usize> {
        let slot = [self.fx1, self.fx2, self.fx3]
            .iter()
            .position(|fx| fx.is_empty())
            .ok_or(Error::NoSlotAvailable {
                collection: "Step".to_string(),
            })?;
        let fx = FX { command, value };
        match slot {
            0 => self.fx1 = fx,
            1 => self.fx2 = fx,
            _ => self.fx3 = fx,
        }
        Ok(slot)
    }

    pub fn write(&self, w: &mut Writer) {
        w.write(self.note.0);
        w.write(self.velocity);
        w.write(self.instrument);
        self.fx1.write(w);
        self.fx2.write(w);
        self.fx3.write(w);
    }

    fn from_reader(reader: &Reader) -> Self {
        Self {
            note: Note(reader.read()),
            velocity: reader.read(),
            instrument: reader.read(),
            fx1: FX::from_reader(reader),
            fx2: FX::from_reader(reader),
            fx3: FX::from_reader(reader),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////
// MARK: Note
////////////////////////////////////////////////////////////////////////////////////
/// A note byte: `0x00..=0x7F` pitched note, `0xFE` note-off, `0xFF` empty.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Note(pub u8);

impl Note {
    pub const OFF: u8 = 0xFE;
    pub const EMPTY: u8 = 0xFF;

    pub fn is_empty(self) -> bool {
        self.0 == Self::EMPTY
    }

    pub fn is_off(self) -> bool {
        self.0 == Self::OFF
    }
}

impl Default for Note {
    fn default() -> Self {
        Note(Self::EMPTY)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "---")
        } else if self.is_off() || self.0 >= 0x80 {
            write!(f, "OFF")
        } else {
            let oct = (self.0 / 12) + 1;
            let n = match self.0 % 12 {
                0 => "C-",
                1 => "C#",
                2 => "D-",
                3 => "D#",
                4 => "E-",
                5 => "F-",
                6 => "F#",
                7 => "G-",
                8 => "G#",
                9 => "A-",
                10 => "A#",
                11 => "B-",
                _ => "??",
            };
            write!(f, "{}{:X}", n, oct)
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////
// MARK: Table
////////////////////////////////////////////////////////////////////////////////////
#[derive(PartialEq, Clone)]
pub struct Table {
    pub steps: [TableStep; 16],
    version: Version,
}

impl Table {
    pub const SIZE: usize = 16 * TableStep::SIZE;

    pub fn is_empty(&self) -> bool {
        self.steps.iter().all(|s| s.is_empty())
    }

    pub fn clear(&mut self) {
        let dflt = TableStep::default();
        for s in &mut self.steps {
            *s = dflt.clone();
        }
    }

    pub fn print_screen(&self, cmd: CommandPack) -> String {
        let fx_cmd = FX::command_names();
        let mut acc = String::from("  N  V  FX1   FX2   FX3  \n");

        for (i, step) in self.steps.iter().enumerate() {
            acc += &step.print(i as u8, fx_cmd, cmd);
            acc += "\n";
        }

        acc
    }

    pub fn write(&self, w: &mut Writer) {
        for ts in &self.steps {
            ts.write(w);
        }
    }

    pub fn from_reader(reader: &Reader, version: Version) -> Self {
        Self {
            steps: arr![TableStep::from_reader(reader); 16],
            version,
        }
    }
}

pub struct TableView<'a> {
    table: &'a Table,
    instrument: CommandPack,
}

impl<'a> fmt::Display for TableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TABLE\n\n{}", self.table.print_screen(self.instrument))
    }
}

impl<'a> fmt::Debug for TableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct TableStep {
    pub transpose: u8,
    pub velocity: u8,
    pub fx1: FX,
    pub fx2: FX,
    pub fx3: FX,
}

impl Default for TableStep {
    fn default() -> Self {
        Self {
            transpose: 0,
            velocity: 0xFF,
            fx1: Default::default(),
            fx2: Default::default(),
            fx3: Default::default(),
        }
    }
}

impl TableStep {
    pub const SIZE: usize = 2 + 3 * FX::SIZE;

    pub fn is_empty(&self) -> bool {
        self.transpose == 0
            && self.velocity == 0xFF
            && self.fx1.is_empty()
            && self.fx2.is_empty()
            && self.fx3.is_empty()
    }

    pub fn print(&self, row: u8, fx_cmd: FxCommands, cmds: CommandPack) -> String {
        let transpose = if self.transpose == 0xFF {
            "--".to_string()
        } else {
            format!("{:02x}", self.transpose)
        };
        let velocity = if self.velocity == 0xFF {
            "--".to_string()
        } else {
            format!("{:02x}", self.velocity)
        };
        format!(
            "{:x} {} {} {} {} {}",
            row,
            transpose,
            velocity,
            self.fx1.print(fx_cmd, cmds),
            self.fx2.print(fx_cmd, cmds),
            self.fx3.print(fx_cmd, cmds)
        )
    }

    pub fn write(&self, w: &mut Writer) {
        w.write(self.transpose);
        w.write(self.velocity);
        self.fx1.write(w);
        self.fx2.write(w);
        self.fx3.write(w);
    }

    fn from_reader(reader: &Reader) -> Self {
        Self {
            transpose: reader.read(),
            velocity: reader.read(),
            fx1: FX::from_reader(reader),
            fx2: FX::from_reader(reader),
            fx3: FX::from_reader(reader),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////
// MARK: Groove
////////////////////////////////////////////////////////////////////////////////////
#[derive(PartialEq, Clone)]
pub struct Groove {
    pub number: u8,
    pub steps: [u8; 16],
}

impl Groove {
    pub const SIZE: usize = 16;

    fn from_reader(reader: &Reader, number: u8) -> Self {
        Self {
            number,
            steps: reader.read_bytes(16).try_into().unwrap(),
        }
    }

    pub fn write(&self, w: &mut Writer) {
        w.write_bytes(&self.steps);
    }

    /// Steps up to (but not including) the first `0xFF` end-of-groove
    /// sentinel.
    pub fn active_steps(&self) -> &[u8] {
        let end = self.steps.iter().position(|&x| x == 0xFF).unwrap_or(15);
        &self.steps[0..end]
    }
}

impl fmt::Display for Groove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Groove {}:{:?}", self.number, self.active_steps())
    }
}
impl fmt::Debug for Groove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_step_default_is_empty() {
        assert_eq!(ChainStep::default(), ChainStep { phrase: 0xFF, transpose: 0 });
        assert!(ChainStep::default().is_empty());
    }

    #[test]
    fn groove_active_steps_stops_at_sentinel() {
        let mut steps = [0u8; 16];
        steps[0] = 4;
        steps[1] = 6;
        steps[2] = 0xFF;
        let g = Groove { number: 0, steps };
        assert_eq!(g.steps, steps);
        assert_eq!(g.active_steps(), &[4, 6]);
    }

    #[test]
    fn song_matrix_empty_cell_renders_dashes() {
        let m = SongMatrix {
            steps: [0xFF; SongMatrix::TRACK_COUNT * SongMatrix::ROW_COUNT],
        };
        assert!(m.print_row(0).trim_end().ends_with("-- -- -- -- -- -- -- --"));
    }
}
