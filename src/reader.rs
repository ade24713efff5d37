use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};

/// A cursor over an in-memory byte buffer, shared via `Rc<RefCell<_>>` so
/// that nested `from_reader` calls can advance a single shared position
/// without threading `&mut` through every call site.
pub struct Reader {
    buffer: Vec<u8>,
    position: Rc<RefCell<usize>>,
}

#[allow(dead_code)]
impl Reader {
    pub fn new(buffer: Vec<u8>) -> Self {
        Self {
            buffer,
            position: Rc::new(RefCell::new(0)),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.pos())
    }

    pub fn require(&self, n: usize) -> Result<()> {
        if self.remaining() < n {
            Err(Error::ShortInput {
                needed: self.pos() + n,
                got: self.len(),
            })
        } else {
            Ok(())
        }
    }

    pub fn read(&self) -> u8 {
        let p: usize = *self.position.borrow();
        let b = self.buffer[p];
        *self.position.borrow_mut() += 1;
        b
    }

    pub fn read_bytes(&self, n: usize) -> &[u8] {
        let p: usize = *self.position.borrow();
        let bs = &self.buffer[p..p + n];
        *self.position.borrow_mut() += n;
        bs
    }

    pub fn read_bool(&self) -> bool {
        self.read() != 0
    }

    pub fn read_u16(&self) -> u16 {
        use byteorder::{ByteOrder, LittleEndian};
        LittleEndian::read_u16(self.read_bytes(2))
    }

    pub fn read_f32(&self) -> f32 {
        use byteorder::{ByteOrder, LittleEndian};
        LittleEndian::read_f32(self.read_bytes(4))
    }

    /// Reads a fixed-width, NUL/0xFF-terminated UTF-8 string field, as used
    /// for instrument/project/chain/scale names.
    pub fn read_string(&self, n: usize) -> String {
        let b = self.read_bytes(n);
        let end = b.iter().position(|&x| x == 0 || x == 255).unwrap_or(n);
        String::from_utf8_lossy(&b[0..end]).into_owned()
    }

    pub fn pos(&self) -> usize {
        *self.position.borrow()
    }

    pub fn set_pos(&self, n: usize) {
        *self.position.borrow_mut() = n;
    }

    pub fn skip(&self, n: usize) {
        self.set_pos(self.pos() + n);
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }
}
