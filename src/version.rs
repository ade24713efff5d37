use std::fmt;

use crate::reader::Reader;
use crate::writer::Writer;

/// Firmware version a project/instrument file declares it was saved with.
#[derive(PartialEq, Clone, Copy)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Default for Version {
    fn default() -> Self {
        Self {
            major: 4,
            minor: 0,
            patch: 0,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self)
    }
}

impl Version {
    pub const SIZE: usize = 14;

    pub fn from_reader(reader: &Reader) -> Self {
        let _version_string = reader.read_bytes(10);
        let lsb = reader.read();
        let msb = reader.read();
        let major = msb & 0x0F;
        let minor = (lsb >> 4) & 0x0F;
        let patch = lsb & 0x0F;

        reader.read_bytes(2); // reserved

        let version = Self {
            major,
            minor,
            patch,
        };

        if !version.at_least(3, 0) {
            log::warn!(
                "file declares firmware version {}, older than the minimum version this crate targets (3.0); decoding may be inaccurate",
                version
            );
        }

        version
    }

    pub fn at_least(&self, major: u8, minor: u8) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }

    /// Write the packed major/minor/patch nibbles at offset `0x0A`, then 2
    /// reserved bytes. Bytes `0x00..0x0A` are the file's `M8VERSION` magic,
    /// never rendered from `self` -- `from_reader` only ever discards them
    /// (they're opaque to this crate), so `write` must leave them alone for
    /// the magic in the original buffer to survive.
    pub fn write(&self, w: &mut Writer) {
        w.seek(10);
        let lsb = (self.minor << 4) | self.patch;
        let msb = self.major;
        w.write(lsb);
        w.write(msb);
        w.write(0);
        w.write(0);
    }
}
