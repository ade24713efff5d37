use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{Error, Result};
use crate::instruments::common::*;
use crate::reader::Reader;
use crate::version::Version;
use crate::writer::Writer;

use super::dests;
use super::CommandPack;

/// Sample playback mode, including the repitch/BPM-sync family added
/// alongside the sampler's wavetable-oscillator modes.
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(IntoPrimitive, TryFromPrimitive)]
#[derive(PartialEq, Copy, Clone, Default, Debug)]
pub enum SamplePlayMode {
    #[default]
    FWD,
    REV,
    FWDLOOP,
    REVLOOP,
    FWD_PP,
    REV_PP,
    OSC,
    OSC_REV,
    OSC_PP,
    REPITCH,
    REP_REV,
    REP_PP,
    REP_BPM,
    BPM_REV,
    BPM_PP,
}

#[derive(PartialEq, Debug, Clone)]
pub struct Sampler {
    pub number: u8,
    pub name: String,
    pub transpose: bool,
    pub table_tick: u8,
    pub volume: u8,
    pub pitch: u8,
    pub fine_tune: u8,
    pub synth_params: SynthParams,

    pub sample_path: String,
    pub play_mode: SamplePlayMode,
    pub slice: u8,
    pub start: u8,
    pub loop_start: u8,
    pub length: u8,
    pub degrade: u8,
}

#[rustfmt::skip]
const SAMPLER_FX_COMMANDS: [&'static str; CommandPack::BASE_INSTRUMENT_COMMAND_COUNT + 1] = [
    "VOL", "PIT", "FIN", "PLY", "STA", "LOP", "LEN", "DEG", "FLT", "CUT",
    "RES", "AMP", "LIM", "PAN", "DRY", "SCH", "SDL", "SRV",
    "SLI", // extra command
];

#[rustfmt::skip]
const DESTINATIONS: [&'static str; 14] = [
    dests::OFF, dests::VOLUME, dests::PITCH, "LOOP ST", "LENGTH",
    dests::DEGRADE, dests::CUTOFF, dests::RES, dests::AMP, dests::PAN,
    dests::MOD_AMT, dests::MOD_RATE, dests::MOD_BOTH, dests::MOD_BINV,
];

impl Sampler {
    pub const MOD_OFFSET: usize = 29;
    /// Offset of the 128-byte sample path field from the start of the record.
    pub const SAMPLE_PATH_OFFSET: usize = 0x57;

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

            sample_path: String::new(),
            play_mode: SamplePlayMode::default(),
            slice: 0,
            start: 0,
            loop_start: 0,
            length: 0xFF,
            degrade: 0,
        }
    }

    pub fn command_name(&self) -> &'static [&'static str] {
        &SAMPLER_FX_COMMANDS
    }

    pub fn destination_names(&self) -> &'static [&'static str] {
        &DESTINATIONS
    }

    pub fn write(&self, w: &mut Writer) {
        let pos = w.pos();
        w.write_string(&self.name, 12);
        w.write(TranspEq::new(self.transpose).into());
        w.write(self.table_tick);
        w.write(self.volume);
        w.write(self.pitch);
        w.write(self.fine_tune);

        w.write(self.play_mode.into());
        w.write(self.slice);
        w.write(self.start);
        w.write(self.loop_start);
        w.write(self.length);
        w.write(self.degrade);

        self.synth_params.write(w, Sampler::MOD_OFFSET);

        w.seek(pos + Sampler::SAMPLE_PATH_OFFSET);
        w.write_string(&self.sample_path, 128);
    }

    pub fn from_reader(reader: &Reader, start_pos: usize, number: u8, _version: Version) -> Result<Self> {
        let name = reader.read_string(12);

        let transp_eq = TranspEq::from_byte(reader.read());
        let table_tick = reader.read();
        let volume = reader.read();
        let pitch = reader.read();
        let fine_tune0 = reader.read();

        let play_mode = reader.read();
        let slice = reader.read();
        let start = reader.read();
        let loop_start = reader.read();
        let length0 = reader.read();
        let degrade = reader.read();

        let synth_params = SynthParams::from_reader(reader, Sampler::MOD_OFFSET)?;

        reader.set_pos(start_pos + Sampler::SAMPLE_PATH_OFFSET);
        let sample_path = reader.read_string(128);

        Ok(Sampler {
            number,
            name,
            transpose: transp_eq.transpose,
            table_tick,
            volume,
            pitch,
            fine_tune: if fine_tune0 == 0 { 0x80 } else { fine_tune0 },
            synth_params,

            sample_path,
            play_mode: play_mode.try_into().map_err(|_| Error::UnknownEnumValue {
                enum_name: "SamplePlayMode".to_string(),
                value: play_mode,
            })?,
            slice,
            start,
            loop_start,
            length: if length0 == 0 { 0xFF } else { length0 },
            degrade,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Writer;

    #[test]
    fn new_applies_documented_defaults() {
        let mut s = Sampler::new(0);
        s.name = "KICK".to_string();

        assert_eq!(s.length, 0xFF);
        assert_eq!(s.synth_params.filter_cutoff, 0xFF);
        assert_eq!(s.synth_params.mixer_pan, 0x80);
        assert_eq!(s.synth_params.mixer_dry, 0xC0);
        assert_eq!(s.fine_tune, 0x80);

        let mut w = Writer::with_size(crate::instruments::Instrument::INSTRUMENT_MEMORY_SIZE);
        crate::instruments::Instrument::Sampler(s).write(&mut w);
        let data = w.finish();

        assert_eq!(data.len(), 215);
        assert_eq!(data[0], 0x02);
        assert_eq!(&data[1..5], b"KICK");
        assert_eq!(&data[5..13], &[0u8; 8]);
    }
}
