//! This library parses and serializes Dirtywave M8 project (`.m8s`) and
//! instrument (`.m8i`) files.
//!
//! See, in particular, the `read` method available on:
//! - [`Project::read`]
//! - [`Instrument::read`]
//! - [`Scale::read`]
//!
//! E.g.:
//! ```no_run
//! use m8_files::*;
//!
//! let project = Project::read_from_file("./song.m8s").unwrap();
//! dbg!(&project);
//! project.validate().unwrap();
//! ```

mod dict;
mod error;
mod fx;
mod instruments;
mod project;
mod reader;
mod scale;
mod settings;
mod validate;
mod version;
mod writer;

pub use dict::*;
pub use error::*;
pub use fx::*;
pub use instruments::*;
pub use project::*;
pub use reader::Reader;
pub use scale::*;
pub use settings::*;
pub use version::*;
pub use writer::Writer;
