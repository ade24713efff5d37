//! Cross-reference validation: song -> chain -> phrase -> instrument.
//! Every non-empty reference in one layer must point at a non-empty slot
//! in the next.

use crate::error::{Error, Result, ValidationError, ValidationErrorKind};
use crate::project::{ChainStep, Project};

impl Project {
    /// Sweep every song/chain/phrase reference and accumulate every
    /// dangling one. `Ok(())` iff no reference is dangling.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for row in 0..crate::project::SongMatrix::ROW_COUNT {
            for col in 0..crate::project::SongMatrix::TRACK_COUNT {
                let chain_ix = self.song.steps[row * crate::project::SongMatrix::TRACK_COUNT + col];
                if chain_ix == 0xFF {
                    continue;
                }
                let path = format!("song[{row}][{col}]");
                match self.chains.get(chain_ix as usize) {
                    None => errors.push(ValidationError {
                        path,
                        kind: ValidationErrorKind::IndexOutOfRange,
                    }),
                    Some(chain) if chain.is_empty() => errors.push(ValidationError {
                        path,
                        kind: ValidationErrorKind::EmptyReference,
                    }),
                    Some(_) => {}
                }
            }
        }

        for (chain_ix, chain) in self.chains.iter().enumerate() {
            for (step_ix, step) in chain.steps.iter().enumerate() {
                self.validate_chain_step(chain_ix, step_ix, step, &mut errors);
            }
        }

        for (phrase_ix, phrase) in self.phrases.iter().enumerate() {
            for (step_ix, step) in phrase.steps.iter().enumerate() {
                if step.instrument == 0xFF {
                    continue;
                }
                let path = format!("phrases[{phrase_ix}].steps[{step_ix}]");
                match self.instruments.get(step.instrument as usize) {
                    None => errors.push(ValidationError {
                        path,
                        kind: ValidationErrorKind::IndexOutOfRange,
                    }),
                    Some(instr) if instr.is_empty() => errors.push(ValidationError {
                        path,
                        kind: ValidationErrorKind::EmptyReference,
                    }),
                    Some(_) => {}
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Like [`Project::validate`] but surfaces the accumulated failures as
    /// a single [`crate::error::Error::ValidationError`].
    pub fn validate_or_err(&self) -> Result<()> {
        self.validate().map_err(Error::ValidationError)
    }

    fn validate_chain_step(
        &self,
        chain_ix: usize,
        step_ix: usize,
        step: &ChainStep,
        errors: &mut Vec<ValidationError>,
    ) {
        if step.is_empty() {
            return;
        }
        let path = format!("chains[{chain_ix}].steps[{step_ix}]");
        match self.phrases.get(step.phrase as usize) {
            None => errors.push(ValidationError {
                path,
                kind: ValidationErrorKind::IndexOutOfRange,
            }),
            Some(phrase) if phrase.is_empty() => errors.push(ValidationError {
                path,
                kind: ValidationErrorKind::EmptyReference,
            }),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::Instrument;
    use crate::project::{Chain, ChainStep, Note, Phrase, Step};

    fn minimal_project() -> Project {
        let buf = vec![0u8; 0x1AC7E + 14];
        Project::read(buf).expect("template-shaped buffer should parse")
    }

    #[test]
    fn scenario_s4_dangling_instrument_reference() {
        let mut project = minimal_project();

        project.song.steps[0] = 0;

        let mut chain = Chain::default();
        chain.steps[0] = ChainStep {
            phrase: 0,
            transpose: 0,
        };
        project.chains[0] = chain;

        let mut phrase = Phrase::default();
        phrase.steps[0] = Step {
            note: Note(60),
            velocity: 127,
            instrument: 2,
            ..Default::default()
        };
        project.phrases[0] = phrase;

        project.instruments[2] = Instrument::None;

        let errors = project.validate().expect_err("instrument 2 is empty");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "phrases[0].steps[0]");
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyReference);
    }

    #[test]
    fn empty_project_validates_clean() {
        let project = minimal_project();
        assert!(project.validate().is_ok());
    }
}
