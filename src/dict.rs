//! Human-readable export/import: instruments and their modulators as nested
//! JSON, with enum fields rendered either as their raw integer or as an
//! uppercase symbolic name. This is the boundary format YAML/JSON tooling
//! outside this crate is expected to consume; the crate itself never reads
//! or writes files in this shape.

use serde_json::{json, Map, Value};

use crate::error::{Error, Result};
use crate::instruments::*;

/// Selects how enum-typed fields are rendered in a dict.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum EnumMode {
    Value,
    Name,
}

fn enum_field(mode: EnumMode, raw: u8, name: &str) -> Value {
    match mode {
        EnumMode::Value => json!(raw),
        EnumMode::Name => json!(name),
    }
}

/// Reads a param that may be given as an integer or as a name string,
/// resolving the string form against `names[value].as_ref() == name`.
fn parse_enum_field<S: AsRef<str>>(
    params: &Map<String, Value>,
    key: &str,
    enum_name: &str,
    names: &[S],
) -> Result<u8> {
    let v = params.get(key).ok_or_else(|| Error::UnknownField(key.to_string()))?;
    match v {
        Value::Number(n) => {
            let raw = n.as_u64().ok_or_else(|| Error::UnknownField(key.to_string()))? as u8;
            Ok(raw)
        }
        Value::String(s) => names
            .iter()
            .position(|n| n.as_ref() == s)
            .map(|i| i as u8)
            .ok_or_else(|| Error::UnknownEnumName {
                enum_name: enum_name.to_string(),
                name: s.clone(),
            }),
        _ => Err(Error::UnknownField(key.to_string())),
    }
}

fn parse_u8_field(params: &Map<String, Value>, key: &str) -> Result<u8> {
    params
        .get(key)
        .and_then(|v| v.as_u64())
        .map(|v| v as u8)
        .ok_or_else(|| Error::UnknownField(key.to_string()))
}

fn parse_bool_field(params: &Map<String, Value>, key: &str) -> Result<bool> {
    params
        .get(key)
        .and_then(|v| v.as_bool())
        .ok_or_else(|| Error::UnknownField(key.to_string()))
}

fn parse_limit_type(params: &Map<String, Value>, key: &str) -> Result<LimitType> {
    let v = params.get(key).ok_or_else(|| Error::UnknownField(key.to_string()))?;
    match v {
        Value::Number(n) => {
            let raw = n.as_u64().ok_or_else(|| Error::UnknownField(key.to_string()))? as u8;
            LimitType::try_from(raw)
        }
        Value::String(s) => (0u8..8)
            .find_map(|i| LimitType::try_from(i).ok().filter(|lt| lt.name() == s))
            .ok_or_else(|| Error::UnknownEnumName {
                enum_name: "LimitType".to_string(),
                name: s.clone(),
            }),
        _ => Err(Error::UnknownField(key.to_string())),
    }
}

const MOD_TYPE_NAMES: [&str; 6] = [
    "AHD_ENVELOPE",
    "ADSR_ENVELOPE",
    "DRUM_ENVELOPE",
    "LFO",
    "TRIG_ENVELOPE",
    "TRACKING_ENVELOPE",
];

fn mod_to_dict(m: &Mod, index: usize, mode: EnumMode, dest_names: &[&str]) -> Value {
    let dest_name = dest_names.get(m.dest() as usize).copied().unwrap_or("?");
    let dest = enum_field(mode, m.dest(), dest_name);

    let (type_name, mut obj) = match m {
        Mod::AHDEnv(e) => (
            MOD_TYPE_NAMES[0],
            json!({"amount": e.amount, "attack": e.attack, "hold": e.hold, "decay": e.decay}),
        ),
        Mod::ADSREnv(e) => (
            MOD_TYPE_NAMES[1],
            json!({"amount": e.amount, "attack": e.attack, "decay": e.decay, "sustain": e.sustain, "release": e.release}),
        ),
        Mod::DrumEnv(e) => (
            MOD_TYPE_NAMES[2],
            json!({"amount": e.amount, "peak": e.peak, "body": e.body, "decay": e.decay}),
        ),
        Mod::LFO(l) => (
            MOD_TYPE_NAMES[3],
            json!({
                "amount": l.amount,
                "oscillator": enum_field(mode, l.shape.into(), &format!("{:?}", l.shape)),
                "trigger": enum_field(mode, l.trigger_mode.into(), &format!("{:?}", l.trigger_mode)),
                "frequency": l.freq,
                "retrigger": l.retrigger,
            }),
        ),
        Mod::TrigEnv(e) => (
            MOD_TYPE_NAMES[4],
            json!({"amount": e.amount, "attack": e.attack, "hold": e.hold, "decay": e.decay, "source": e.src}),
        ),
        Mod::TrackingEnv(e) => (
            MOD_TYPE_NAMES[5],
            json!({"amount": e.amount, "source": e.src, "lval": e.lval, "hval": e.hval}),
        ),
    };

    let map = obj.as_object_mut().unwrap();
    map.insert("index".to_string(), json!(index));
    map.insert("type".to_string(), json!(type_name));
    map.insert("destination".to_string(), dest);
    obj
}

fn mod_from_dict(v: &Value, dest_names: &[&str]) -> Result<Mod> {
    let obj = v.as_object().ok_or_else(|| Error::UnknownField("modulator".to_string()))?;
    let type_name = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::UnknownField("type".to_string()))?;
    let dest = parse_enum_field(obj, "destination", "Destination", dest_names)?;
    let amount = parse_u8_field(obj, "amount").unwrap_or(0xFF);

    Ok(match type_name {
        "AHD_ENVELOPE" => Mod::AHDEnv(AHDEnv {
            dest,
            amount,
            attack: parse_u8_field(obj, "attack")?,
            hold: parse_u8_field(obj, "hold")?,
            decay: parse_u8_field(obj, "decay")?,
        }),
        "ADSR_ENVELOPE" => Mod::ADSREnv(ADSREnv {
            dest,
            amount,
            attack: parse_u8_field(obj, "attack")?,
            decay: parse_u8_field(obj, "decay")?,
            sustain: parse_u8_field(obj, "sustain")?,
            release: parse_u8_field(obj, "release")?,
        }),
        "DRUM_ENVELOPE" => Mod::DrumEnv(DrumEnv {
            dest,
            amount,
            peak: parse_u8_field(obj, "peak")?,
            body: parse_u8_field(obj, "body")?,
            decay: parse_u8_field(obj, "decay")?,
        }),
        "LFO" => {
            let shape = parse_enum_field(
                obj,
                "oscillator",
                "LfoShape",
                &[
                    "TRI", "SIN", "RAMP_DOWN", "RAMP_UP", "EXP_DN", "EXP_UP", "SQR_DN", "SQR_UP",
                    "RANDOM", "DRUNK", "TRI_T", "SIN_T", "RAMPD_T", "RAMPU_T", "EXPD_T", "EXPU_T",
                    "SQ_D_T", "SQ_U_T", "RAND_T", "DRNK_T",
                ],
            )?;
            let trigger_mode =
                parse_enum_field(obj, "trigger", "LfoTriggerMode", &["FREE", "RETRIG", "HOLD", "ONCE"])?;
            Mod::LFO(LFO {
                shape: shape.try_into().map_err(|_| Error::UnknownEnumValue {
                    enum_name: "LfoShape".to_string(),
                    value: shape,
                })?,
                dest,
                trigger_mode: trigger_mode.try_into().map_err(|_| Error::UnknownEnumValue {
                    enum_name: "LfoTriggerMode".to_string(),
                    value: trigger_mode,
                })?,
                freq: parse_u8_field(obj, "frequency")?,
                amount,
                retrigger: parse_u8_field(obj, "retrigger").unwrap_or(0),
            })
        }
        "TRIG_ENVELOPE" => Mod::TrigEnv(TrigEnv {
            dest,
            amount,
            attack: parse_u8_field(obj, "attack")?,
            hold: parse_u8_field(obj, "hold")?,
            decay: parse_u8_field(obj, "decay")?,
            src: parse_u8_field(obj, "source")?,
        }),
        "TRACKING_ENVELOPE" => Mod::TrackingEnv(TrackingEnv {
            dest,
            amount,
            src: parse_u8_field(obj, "source")?,
            lval: parse_u8_field(obj, "lval")?,
            hval: parse_u8_field(obj, "hval")?,
        }),
        other => {
            return Err(Error::UnknownEnumName {
                enum_name: "ModulatorType".to_string(),
                name: other.to_string(),
            })
        }
    })
}

fn mods_to_dict(mods: &ModulatorBank, mode: EnumMode, dest_names: &[&str]) -> Value {
    Value::Array(
        mods.iter()
            .enumerate()
            .map(|(i, m)| mod_to_dict(m, i, mode, dest_names))
            .collect(),
    )
}

fn mods_from_dict(v: &Value, dest_names: &[&str]) -> Result<ModulatorBank> {
    let arr = v.as_array().ok_or_else(|| Error::UnknownField("modulators".to_string()))?;
    let mut bank = crate::instruments::default_modulator_bank();
    for entry in arr {
        let index = entry
            .get("index")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| Error::UnknownField("index".to_string()))? as usize;
        if index < bank.len() {
            bank[index] = mod_from_dict(entry, dest_names)?;
        }
    }
    Ok(bank)
}

impl Instrument {
    /// Export this instrument as a nested dict: `{type, name, params,
    /// modulators, sample_path?}`.
    pub fn to_dict(&self, mode: EnumMode) -> Value {
        match self {
            Instrument::WavSynth(ws) => {
                let mut d = json!({
                    "type": "WAVSYNTH",
                    "name": ws.name,
                    "params": {
                        "SHAPE": enum_field(mode, ws.shape.into(), &format!("{:?}", ws.shape)),
                        "SIZE": ws.size,
                        "MULT": ws.mult,
                        "WARP": ws.warp,
                        "SCAN": ws.scan,
                        "FINE_TUNE": ws.fine_tune,
                        "FILTER": ws.synth_params.filter_type,
                        "CUTOFF": ws.synth_params.filter_cutoff,
                        "RESONANCE": ws.synth_params.filter_res,
                        "AMP": ws.synth_params.amp,
                        "LIMIT": enum_field(mode, ws.synth_params.limit.id(), ws.synth_params.limit.name()),
                        "PAN": ws.synth_params.mixer_pan,
                        "DRY": ws.synth_params.mixer_dry,
                        "CHORUS": ws.synth_params.mixer_chorus,
                        "DELAY": ws.synth_params.mixer_delay,
                        "REVERB": ws.synth_params.mixer_reverb,
                    },
                    "modulators": mods_to_dict(&ws.synth_params.mods, mode, ws.destination_names()),
                });
                d["volume"] = json!(ws.volume);
                d["pitch"] = json!(ws.pitch);
                d["transpose"] = json!(ws.transpose);
                d
            }
            Instrument::MacroSynth(ms) => json!({
                "type": "MACROSYNTH",
                "name": ms.name,
                "volume": ms.volume,
                "pitch": ms.pitch,
                "transpose": ms.transpose,
                "params": {
                    "SHAPE": enum_field(mode, ms.shape.into(), &format!("{:?}", ms.shape)),
                    "TIMBRE": ms.timbre,
                    "COLOR": ms.color,
                    "DEGRADE": ms.degrade,
                    "REDUX": ms.redux,
                    "FINE_TUNE": ms.fine_tune,
                    "FILTER": ms.synth_params.filter_type,
                    "CUTOFF": ms.synth_params.filter_cutoff,
                    "RESONANCE": ms.synth_params.filter_res,
                    "AMP": ms.synth_params.amp,
                    "LIMIT": enum_field(mode, ms.synth_params.limit.id(), ms.synth_params.limit.name()),
                    "PAN": ms.synth_params.mixer_pan,
                    "DRY": ms.synth_params.mixer_dry,
                    "CHORUS": ms.synth_params.mixer_chorus,
                    "DELAY": ms.synth_params.mixer_delay,
                    "REVERB": ms.synth_params.mixer_reverb,
                },
                "modulators": mods_to_dict(&ms.synth_params.mods, mode, ms.destination_names()),
            }),
            Instrument::Sampler(s) => json!({
                "type": "SAMPLER",
                "name": s.name,
                "sample_path": s.sample_path,
                "volume": s.volume,
                "pitch": s.pitch,
                "transpose": s.transpose,
                "params": {
                    "PLAY_MODE": enum_field(mode, s.play_mode.into(), &format!("{:?}", s.play_mode)),
                    "SLICE": s.slice,
                    "START": s.start,
                    "LOOP_START": s.loop_start,
                    "LENGTH": s.length,
                    "DEGRADE": s.degrade,
                    "FINE_TUNE": s.fine_tune,
                    "FILTER": s.synth_params.filter_type,
                    "CUTOFF": s.synth_params.filter_cutoff,
                    "RESONANCE": s.synth_params.filter_res,
                    "AMP": s.synth_params.amp,
                    "LIMIT": enum_field(mode, s.synth_params.limit.id(), s.synth_params.limit.name()),
                    "PAN": s.synth_params.mixer_pan,
                    "DRY": s.synth_params.mixer_dry,
                    "CHORUS": s.synth_params.mixer_chorus,
                    "DELAY": s.synth_params.mixer_delay,
                    "REVERB": s.synth_params.mixer_reverb,
                },
                "modulators": mods_to_dict(&s.synth_params.mods, mode, s.destination_names()),
            }),
            Instrument::FMSynth(fs) => {
                let ops: Vec<Value> = fs
                    .operators
                    .iter()
                    .map(|op| {
                        json!({
                            "shape": enum_field(mode, op.shape.into(), &format!("{:?}", op.shape)),
                            "ratio": op.ratio,
                            "ratio_fine": op.ratio_fine,
                            "level": op.level,
                            "feedback": op.feedback,
                            "mod_a": op.mod_a,
                            "mod_b": op.mod_b,
                        })
                    })
                    .collect();
                json!({
                    "type": "FMSYNTH",
                    "name": fs.name,
                    "volume": fs.volume,
                    "pitch": fs.pitch,
                    "transpose": fs.transpose,
                    "params": {
                        "ALGO": enum_field(mode, fs.algo.id(), fs.algo.str()),
                        "OPERATORS": ops,
                        "MOD1": fs.mod1,
                        "MOD2": fs.mod2,
                        "MOD3": fs.mod3,
                        "MOD4": fs.mod4,
                        "FINE_TUNE": fs.fine_tune,
                        "FILTER": fs.synth_params.filter_type,
                        "CUTOFF": fs.synth_params.filter_cutoff,
                        "RESONANCE": fs.synth_params.filter_res,
                        "AMP": fs.synth_params.amp,
                        "LIMIT": enum_field(mode, fs.synth_params.limit.id(), fs.synth_params.limit.name()),
                        "PAN": fs.synth_params.mixer_pan,
                        "DRY": fs.synth_params.mixer_dry,
                        "CHORUS": fs.synth_params.mixer_chorus,
                        "DELAY": fs.synth_params.mixer_delay,
                        "REVERB": fs.synth_params.mixer_reverb,
                    },
                    "modulators": mods_to_dict(&fs.synth_params.mods, mode, fs.destination_names()),
                })
            }
            Instrument::HyperSynth(hs) => json!({
                "type": "HYPERSYNTH",
                "name": hs.name,
                "volume": hs.volume,
                "pitch": hs.pitch,
                "transpose": hs.transpose,
                "params": {
                    "SCALE": hs.scale,
                    "CHORD": hs.default_chord,
                    "SHIFT": hs.shift,
                    "SWARM": hs.swarm,
                    "WIDTH": hs.width,
                    "SUBOSC": hs.subosc,
                    "FINE_TUNE": hs.fine_tune,
                    "FILTER": hs.synth_params.filter_type,
                    "CUTOFF": hs.synth_params.filter_cutoff,
                    "RESONANCE": hs.synth_params.filter_res,
                    "AMP": hs.synth_params.amp,
                    "LIMIT": enum_field(mode, hs.synth_params.limit.id(), hs.synth_params.limit.name()),
                    "PAN": hs.synth_params.mixer_pan,
                    "DRY": hs.synth_params.mixer_dry,
                    "CHORUS": hs.synth_params.mixer_chorus,
                    "DELAY": hs.synth_params.mixer_delay,
                    "REVERB": hs.synth_params.mixer_reverb,
                },
                "modulators": mods_to_dict(&hs.synth_params.mods, mode, hs.destination_names()),
            }),
            Instrument::External(ex) => json!({
                "type": "EXTERNAL",
                "name": ex.name,
                "volume": ex.volume,
                "pitch": ex.pitch,
                "transpose": ex.transpose,
                "params": {
                    "INPUT": ex.input,
                    "PORT": enum_field(mode, ex.port, PORT.get(ex.port as usize).copied().unwrap_or("?")),
                    "CHANNEL": ex.channel,
                    "BANK": ex.bank,
                    "PROGRAM": ex.program,
                    "CCA": ex.cca.number, "CCA_VAL": ex.cca.value,
                    "CCB": ex.ccb.number, "CCB_VAL": ex.ccb.value,
                    "CCC": ex.ccc.number, "CCC_VAL": ex.ccc.value,
                    "CCD": ex.ccd.number, "CCD_VAL": ex.ccd.value,
                    "FINE_TUNE": ex.fine_tune,
                    "FILTER": ex.synth_params.filter_type,
                    "CUTOFF": ex.synth_params.filter_cutoff,
                    "RESONANCE": ex.synth_params.filter_res,
                    "AMP": ex.synth_params.amp,
                    "LIMIT": enum_field(mode, ex.synth_params.limit.id(), ex.synth_params.limit.name()),
                    "PAN": ex.synth_params.mixer_pan,
                    "DRY": ex.synth_params.mixer_dry,
                    "CHORUS": ex.synth_params.mixer_chorus,
                    "DELAY": ex.synth_params.mixer_delay,
                    "REVERB": ex.synth_params.mixer_reverb,
                },
                "modulators": mods_to_dict(&ex.synth_params.mods, mode, ex.destination_names()),
            }),
            Instrument::Opaque { kind, .. } => json!({"type": "OPAQUE", "kind": kind}),
            Instrument::None => json!({"type": "NONE"}),
        }
    }

    /// Reconstruct an instrument from a dict produced by [`Instrument::to_dict`].
    pub fn from_dict(dict: &Value) -> Result<Self> {
        let type_name = dict
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::UnknownField("type".to_string()))?;
        let name = dict.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string();
        let empty = Map::new();
        let params = dict.get("params").and_then(|v| v.as_object()).unwrap_or(&empty);
        let volume = dict.get("volume").and_then(|v| v.as_u64()).unwrap_or(0) as u8;
        let pitch = dict.get("pitch").and_then(|v| v.as_u64()).unwrap_or(0) as u8;
        let transpose = dict
            .get("transpose")
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        let modulators = dict.get("modulators").cloned().unwrap_or(Value::Array(vec![]));

        Ok(match type_name {
            "WAVSYNTH" => {
                let mut ws = WavSynth::new(0);
                ws.name = name;
                ws.volume = volume;
                ws.pitch = pitch;
                ws.transpose = transpose;
                ws.shape = parse_enum_field(
                    params,
                    "SHAPE",
                    "WavShape",
                    &wavsynth_shape_names(),
                )?
                .try_into()
                .map_err(|_| Error::UnknownField("SHAPE".to_string()))?;
                ws.size = parse_u8_field(params, "SIZE")?;
                ws.mult = parse_u8_field(params, "MULT")?;
                ws.warp = parse_u8_field(params, "WARP")?;
                ws.scan = parse_u8_field(params, "SCAN")?;
                ws.fine_tune = parse_u8_field(params, "FINE_TUNE")?;
                apply_common_params(&mut ws.synth_params, params)?;
                ws.synth_params.mods = mods_from_dict(&modulators, ws.destination_names())?;
                Instrument::WavSynth(ws)
            }
            "MACROSYNTH" => {
                let mut ms = MacroSynth::new(0);
                ms.name = name;
                ms.volume = volume;
                ms.pitch = pitch;
                ms.transpose = transpose;
                ms.shape = parse_enum_field(params, "SHAPE", "MacroSynthOsc", &macrosynth_osc_names())?
                    .try_into()
                    .map_err(|_| Error::UnknownField("SHAPE".to_string()))?;
                ms.timbre = parse_u8_field(params, "TIMBRE")?;
                ms.color = parse_u8_field(params, "COLOR")?;
                ms.degrade = parse_u8_field(params, "DEGRADE")?;
                ms.redux = parse_u8_field(params, "REDUX")?;
                ms.fine_tune = parse_u8_field(params, "FINE_TUNE")?;
                apply_common_params(&mut ms.synth_params, params)?;
                ms.synth_params.mods = mods_from_dict(&modulators, ms.destination_names())?;
                Instrument::MacroSynth(ms)
            }
            "SAMPLER" => {
                let mut s = Sampler::new(0);
                s.name = name;
                s.volume = volume;
                s.pitch = pitch;
                s.transpose = transpose;
                s.sample_path = dict
                    .get("sample_path")
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string();
                s.play_mode = parse_enum_field(params, "PLAY_MODE", "SamplePlayMode", &sampler_play_mode_names())?
                    .try_into()
                    .map_err(|_| Error::UnknownField("PLAY_MODE".to_string()))?;
                s.slice = parse_u8_field(params, "SLICE")?;
                s.start = parse_u8_field(params, "START")?;
                s.loop_start = parse_u8_field(params, "LOOP_START")?;
                s.length = parse_u8_field(params, "LENGTH")?;
                s.degrade = parse_u8_field(params, "DEGRADE")?;
                s.fine_tune = parse_u8_field(params, "FINE_TUNE")?;
                apply_common_params(&mut s.synth_params, params)?;
                s.synth_params.mods = mods_from_dict(&modulators, s.destination_names())?;
                Instrument::Sampler(s)
            }
            "FMSYNTH" => {
                let mut fs = FMSynth::new(0);
                fs.name = name;
                fs.volume = volume;
                fs.pitch = pitch;
                fs.transpose = transpose;
                fs.algo = match params.get("ALGO") {
                    Some(Value::Number(n)) => {
                        FmAlgo::try_from(n.as_u64().unwrap_or(0) as u8)?
                    }
                    Some(Value::String(s)) => FmAlgo::from_name(s)?,
                    _ => return Err(Error::UnknownField("ALGO".to_string())),
                };
                if let Some(ops) = params.get("OPERATORS").and_then(|v| v.as_array()) {
                    let wave_names = fmwave_names();
                    for (i, op) in ops.iter().enumerate().take(4) {
                        let shape = match op.get("shape") {
                            Some(Value::Number(n)) => n.as_u64().unwrap_or(0) as u8,
                            Some(Value::String(s)) => wave_names
                                .iter()
                                .position(|n| n == s)
                                .map(|i| i as u8)
                                .ok_or_else(|| Error::UnknownEnumName {
                                    enum_name: "FMWave".to_string(),
                                    name: s.clone(),
                                })?,
                            _ => return Err(Error::UnknownField("shape".to_string())),
                        };
                        fs.operators[i] = Operator {
                            shape: shape.try_into().map_err(|_| Error::UnknownEnumValue {
                                enum_name: "FMWave".to_string(),
                                value: shape,
                            })?,
                            ratio: op.get("ratio").and_then(|v| v.as_u64()).unwrap_or(0) as u8,
                            ratio_fine: op.get("ratio_fine").and_then(|v| v.as_u64()).unwrap_or(0) as u8,
                            level: op.get("level").and_then(|v| v.as_u64()).unwrap_or(0) as u8,
                            feedback: op.get("feedback").and_then(|v| v.as_u64()).unwrap_or(0) as u8,
                            mod_a: op.get("mod_a").and_then(|v| v.as_u64()).unwrap_or(0) as u8,
                            mod_b: op.get("mod_b").and_then(|v| v.as_u64()).unwrap_or(0) as u8,
                        };
                    }
                }
                fs.mod1 = parse_u8_field(params, "MOD1")?;
                fs.mod2 = parse_u8_field(params, "MOD2")?;
                fs.mod3 = parse_u8_field(params, "MOD3")?;
                fs.mod4 = parse_u8_field(params, "MOD4")?;
                fs.fine_tune = parse_u8_field(params, "FINE_TUNE")?;
                apply_common_params(&mut fs.synth_params, params)?;
                fs.synth_params.mods = mods_from_dict(&modulators, fs.destination_names())?;
                Instrument::FMSynth(fs)
            }
            "HYPERSYNTH" => {
                let mut hs = HyperSynth::new(0);
                hs.name = name;
                hs.volume = volume;
                hs.pitch = pitch;
                hs.transpose = transpose;
                hs.scale = parse_u8_field(params, "SCALE")?;
                if let Some(chord) = params.get("CHORD").and_then(|v| v.as_array()) {
                    for (i, v) in chord.iter().enumerate().take(7) {
                        hs.default_chord[i] = v.as_u64().unwrap_or(0xFF) as u8;
                    }
                }
                hs.shift = parse_u8_field(params, "SHIFT")?;
                hs.swarm = parse_u8_field(params, "SWARM")?;
                hs.width = parse_u8_field(params, "WIDTH")?;
                hs.subosc = parse_u8_field(params, "SUBOSC")?;
                hs.fine_tune = parse_u8_field(params, "FINE_TUNE")?;
                apply_common_params(&mut hs.synth_params, params)?;
                hs.synth_params.mods = mods_from_dict(&modulators, hs.destination_names())?;
                Instrument::HyperSynth(hs)
            }
            "EXTERNAL" => {
                let mut ex = ExternalInst::new(0);
                ex.name = name;
                ex.volume = volume;
                ex.pitch = pitch;
                ex.transpose = transpose;
                ex.input = parse_u8_field(params, "INPUT")?;
                ex.port = parse_enum_field(params, "PORT", "Port", &PORT)?;
                ex.channel = parse_u8_field(params, "CHANNEL")?;
                ex.bank = parse_u8_field(params, "BANK")?;
                ex.program = parse_u8_field(params, "PROGRAM")?;
                ex.cca = ControlChange { number: parse_u8_field(params, "CCA")?, value: parse_u8_field(params, "CCA_VAL")? };
                ex.ccb = ControlChange { number: parse_u8_field(params, "CCB")?, value: parse_u8_field(params, "CCB_VAL")? };
                ex.ccc = ControlChange { number: parse_u8_field(params, "CCC")?, value: parse_u8_field(params, "CCC_VAL")? };
                ex.ccd = ControlChange { number: parse_u8_field(params, "CCD")?, value: parse_u8_field(params, "CCD_VAL")? };
                ex.fine_tune = parse_u8_field(params, "FINE_TUNE")?;
                apply_common_params(&mut ex.synth_params, params)?;
                ex.synth_params.mods = mods_from_dict(&modulators, ex.destination_names())?;
                Instrument::External(ex)
            }
            "NONE" => Instrument::None,
            "OPAQUE" => {
                return Err(Error::UnknownField(
                    "OPAQUE instruments have no recoverable params; cannot reconstruct from a dict"
                        .to_string(),
                ))
            }
            other => {
                return Err(Error::UnknownEnumName {
                    enum_name: "InstrumentType".to_string(),
                    name: other.to_string(),
                })
            }
        })
    }
}

fn apply_common_params(sp: &mut SynthParams, params: &Map<String, Value>) -> Result<()> {
    sp.filter_type = parse_u8_field(params, "FILTER")?;
    sp.filter_cutoff = parse_u8_field(params, "CUTOFF")?;
    sp.filter_res = parse_u8_field(params, "RESONANCE")?;
    sp.amp = parse_u8_field(params, "AMP")?;
    sp.limit = parse_limit_type(params, "LIMIT")?;
    sp.mixer_pan = parse_u8_field(params, "PAN")?;
    sp.mixer_dry = parse_u8_field(params, "DRY")?;
    sp.mixer_chorus = parse_u8_field(params, "CHORUS")?;
    sp.mixer_delay = parse_u8_field(params, "DELAY")?;
    sp.mixer_reverb = parse_u8_field(params, "REVERB")?;
    Ok(())
}

fn wavsynth_shape_names() -> Vec<String> {
    (0u8..70)
        .map(|i| match WavShape::try_from(i) {
            Ok(v) => format!("{:?}", v),
            Err(_) => "?".to_string(),
        })
        .collect()
}

fn macrosynth_osc_names() -> Vec<String> {
    (0u8..48)
        .map(|i| match MacroSynthOsc::try_from(i) {
            Ok(v) => format!("{:?}", v),
            Err(_) => "?".to_string(),
        })
        .collect()
}

fn fmwave_names() -> Vec<String> {
    (0u8..53)
        .map(|i| match FMWave::try_from(i) {
            Ok(v) => format!("{:?}", v),
            Err(_) => "?".to_string(),
        })
        .collect()
}

fn sampler_play_mode_names() -> Vec<String> {
    [
        "FWD", "REV", "FWDLOOP", "REVLOOP", "FWD_PP", "REV_PP", "OSC", "OSC_REV", "OSC_PP",
        "REPITCH", "REP_REV", "REP_PP", "REP_BPM", "BPM_REV", "BPM_PP",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_dict_name_round_trip() {
        let mut s = Sampler::new(0);
        s.play_mode = SamplePlayMode::REV;
        let instr = Instrument::Sampler(s);

        let dict = instr.to_dict(EnumMode::Name);
        assert_eq!(dict["params"]["PLAY_MODE"], "REV");

        let back = Instrument::from_dict(&dict).unwrap();
        match back {
            Instrument::Sampler(s2) => assert_eq!(s2.play_mode, SamplePlayMode::REV),
            _ => panic!("expected sampler"),
        }
    }

    #[test]
    fn sampler_dict_value_mode_is_numeric() {
        let mut s = Sampler::new(0);
        s.play_mode = SamplePlayMode::REV;
        let instr = Instrument::Sampler(s);
        let dict = instr.to_dict(EnumMode::Value);
        assert_eq!(dict["params"]["PLAY_MODE"], 1);
    }

    #[test]
    fn unknown_enum_name_in_from_dict_fails() {
        let instr = Instrument::Sampler(Sampler::new(0));
        let mut dict = instr.to_dict(EnumMode::Name);
        dict["params"]["PLAY_MODE"] = json!("NOT_A_MODE");

        match Instrument::from_dict(&dict) {
            Err(Error::UnknownEnumName { enum_name, name }) => {
                assert_eq!(enum_name, "SamplePlayMode");
                assert_eq!(name, "NOT_A_MODE");
            }
            other => panic!("expected UnknownEnumName, got {:?}", other),
        }
    }
}
