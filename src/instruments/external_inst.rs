use crate::error::Result;
use crate::instruments::common::*;
use crate::reader::Reader;
use crate::version::Version;
use crate::writer::Writer;

use super::dests;
use super::params;
use super::CommandPack;

/// A single MIDI control-change slot: target CC number and the value to
/// send.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct ControlChange {
    pub number: u8,
    pub value: u8,
}

impl ControlChange {
    pub fn write(self, w: &mut Writer) {
        w.write(self.number);
        w.write(self.value);
    }

    pub fn from_reader(reader: &Reader) -> Self {
        Self {
            number: reader.read(),
            value: reader.read(),
        }
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct ExternalInst {
    pub number: u8,
    pub name: String,
    pub transpose: bool,
    pub table_tick: u8,
    pub volume: u8,
    pub pitch: u8,
    pub fine_tune: u8,
    pub synth_params: SynthParams,

    pub input: u8,
    pub port: u8,
    pub channel: u8,
    pub bank: u8,
    pub program: u8,
    pub cca: ControlChange,
    pub ccb: ControlChange,
    pub ccc: ControlChange,
    pub ccd: ControlChange,
}

#[rustfmt::skip]
const EXTERNAL_INST_COMMANDS: [&'static str; CommandPack::BASE_INSTRUMENT_COMMAND_COUNT + 2] = [
    "VOL", "PIT", "MPB", "MPG", "CCA", "CCB", "CCC", "CCD", "FLT", "CUT",
    "RES", "AMP", "LIM", "PAN", "DRY", "SCH", "SDL", "SRV",
    "ADD", "CHD", // extra
];

#[rustfmt::skip]
const DESTINATIONS: [&'static str; 14] = [
    dests::OFF, dests::VOLUME, dests::CUTOFF, dests::RES, dests::AMP, dests::PAN,
    params::CCA, params::CCB, params::CCC, params::CCD,
    dests::MOD_AMT, dests::MOD_RATE, dests::MOD_BOTH, dests::MOD_BINV,
];

/// Port names of an external instrument's output routing.
pub const PORT: [&'static str; 4] = ["NONE", "MIDI+USB", "MIDI", "USB"];

impl ExternalInst {
    pub const MOD_OFFSET: usize = 22;

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

            input: 0,
            port: 0,
            channel: 0,
            bank: 0,
            program: 0,
            cca: ControlChange::default(),
            ccb: ControlChange::default(),
            ccc: ControlChange::default(),
            ccd: ControlChange::default(),
        }
    }

    pub fn command_name(&self) -> &'static [&'static str] {
        &EXTERNAL_INST_COMMANDS
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

        w.write(self.input);
        w.write(self.port);
        w.write(self.channel);
        w.write(self.bank);
        w.write(self.program);

        self.cca.write(w);
        self.ccb.write(w);
        self.ccc.write(w);
        self.ccd.write(w);

        self.synth_params.write(w, ExternalInst::MOD_OFFSET);
    }

    pub fn from_reader(reader: &Reader, number: u8) -> Result<Self> {
        let name = reader.read_string(12);
        let transp_eq = TranspEq::from_byte(reader.read());
        let table_tick = reader.read();
        let volume = reader.read();
        let pitch = reader.read();
        let fine_tune0 = reader.read();

        let input = reader.read();
        let port = reader.read();
        let channel = reader.read();
        let bank = reader.read();
        let program = reader.read();
        let cca = ControlChange::from_reader(reader);
        let ccb = ControlChange::from_reader(reader);
        let ccc = ControlChange::from_reader(reader);
        let ccd = ControlChange::from_reader(reader);

        let synth_params = SynthParams::from_reader(reader, ExternalInst::MOD_OFFSET)?;

        Ok(ExternalInst {
            number,
            name,
            transpose: transp_eq.transpose,
            table_tick,
            volume,
            pitch,
            fine_tune: if fine_tune0 == 0 { 0x80 } else { fine_tune0 },
            synth_params,

            input,
            port,
            channel,
            bank,
            program,
            cca,
            ccb,
            ccc,
            ccd,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_land_at_documented_byte_offsets() {
        let mut ex = ExternalInst::new(0);
        ex.input = 0x01;
        ex.port = 0x02;
        ex.channel = 0x03;
        ex.bank = 0x04;
        ex.program = 0x05;
        ex.cca = ControlChange { number: 0x01, value: 0x06 };
        ex.ccb = ControlChange { number: 0x02, value: 0x07 };
        ex.ccc = ControlChange { number: 0x03, value: 0x08 };
        ex.ccd = ControlChange { number: 0x04, value: 0x09 };
        ex.synth_params.filter_type = 0x07;
        ex.synth_params.filter_cutoff = 0x0A;
        ex.synth_params.filter_res = 0x0B;
        ex.synth_params.amp = 0x0C;
        ex.synth_params.limit = LimitType::try_from(0x08).unwrap();
        ex.synth_params.mixer_pan = 0x0D;
        ex.synth_params.mixer_dry = 0x0E;
        ex.synth_params.mixer_chorus = 0x0F;
        ex.synth_params.mixer_delay = 0x10;
        ex.synth_params.mixer_reverb = 0x11;

        let mut w = Writer::with_size(crate::instruments::Instrument::INSTRUMENT_MEMORY_SIZE);
        crate::instruments::Instrument::External(ex).write(&mut w);
        let data = w.finish();

        assert_eq!(data[18], 0x01); // INPUT
        assert_eq!(data[19], 0x02); // PORT
        assert_eq!(data[20], 0x03); // CHANNEL
        assert_eq!(data[21], 0x04); // BANK
        assert_eq!(data[22], 0x05); // PROGRAM
        assert_eq!(data[23], 0x01); // CCA number
        assert_eq!(data[24], 0x06); // CCA value
        assert_eq!(data[25], 0x02); // CCB number
        assert_eq!(data[26], 0x07); // CCB value
        assert_eq!(data[27], 0x03); // CCC number
        assert_eq!(data[28], 0x08); // CCC value
        assert_eq!(data[29], 0x04); // CCD number
        assert_eq!(data[30], 0x09); // CCD value
        assert_eq!(data[31], 0x07); // FILTER
        assert_eq!(data[32], 0x0A); // CUTOFF
        assert_eq!(data[33], 0x0B); // RESONANCE
        assert_eq!(data[34], 0x0C); // AMP
        assert_eq!(data[35], 0x08); // LIMIT
        assert_eq!(data[36], 0x0D); // PAN
        assert_eq!(data[37], 0x0E); // DRY
        assert_eq!(data[38], 0x0F); // CHORUS
        assert_eq!(data[39], 0x10); // DELAY
        assert_eq!(data[40], 0x11); // REVERB
    }
}
