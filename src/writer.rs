/// A cursor over an owned output buffer. The buffer is pre-sized to the
/// target file's full length before writing starts, so every field is
/// written by seeking to its fixed offset and writing in place -- bytes
/// belonging to no known field are left untouched, which is what makes
/// read-then-write round trips byte preserving.
pub struct Writer {
    buffer: Vec<u8>,
    pos: usize,
}

impl Writer {
    /// Initialize the writer from a loaded file's original buffer, so any
    /// region this crate doesn't model is carried over unchanged.
    pub fn new(v: Vec<u8>) -> Writer {
        Writer { buffer: v, pos: 0 }
    }

    /// Initialize a fresh all-zero buffer of a given size, for files built
    /// up from scratch rather than from a previously-read buffer.
    pub fn with_size(size: usize) -> Writer {
        Writer {
            buffer: vec![0; size],
            pos: 0,
        }
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    pub fn write(&mut self, v: u8) {
        self.buffer[self.pos] = v;
        self.pos += 1;
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let mut cursor = self.pos;
        let buff = &mut self.buffer;

        for b in bytes {
            buff[cursor] = *b;
            cursor += 1;
        }

        self.pos = cursor;
    }

    pub fn write_bool(&mut self, v: bool) {
        self.write(if v { 1 } else { 0 });
    }

    pub fn write_u16(&mut self, v: u16) {
        use byteorder::{ByteOrder, LittleEndian};
        let mut b = [0u8; 2];
        LittleEndian::write_u16(&mut b, v);
        self.write_bytes(&b);
    }

    pub fn write_f32(&mut self, v: f32) {
        use byteorder::{ByteOrder, LittleEndian};
        let mut b = [0u8; 4];
        LittleEndian::write_f32(&mut b, v);
        self.write_bytes(&b);
    }

    pub fn write_string(&mut self, s: &str, fill: usize) {
        let bytes = s.as_bytes();
        let n = bytes.len().min(fill);
        self.write_bytes(&bytes[..n]);
        self.fill_till(0, fill - n);
    }

    pub fn skip(&mut self, skip: usize) {
        self.pos += skip
    }

    pub fn seek(&mut self, new_pos: usize) {
        self.pos = new_pos;
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    fn fill_till(&mut self, v: u8, until: usize) {
        if until == 0 {
            return;
        }

        for _i in 0..until {
            self.buffer[self.pos] = v;
            self.pos += 1;
        }
    }
}
