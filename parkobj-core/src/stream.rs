//! Little-endian cursor over an in-memory buffer.

use std::io::{self, Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unexpected end of data at offset {offset:#x}: {need} bytes requested, {have} available")]
    UnexpectedEof { offset: usize, need: usize, have: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub struct Stream<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Stream<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self { Self { cursor: Cursor::new(data) } }

    #[must_use]
    pub fn position(&self) -> usize { self.cursor.position() as usize }

    #[must_use]
    pub fn len(&self) -> usize { self.cursor.get_ref().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn remaining(&self) -> usize { self.len().saturating_sub(self.position()) }

    fn ensure(&self, need: usize) -> Result<()> {
        let have = self.remaining();
        if have < need {
            return Err(Error::UnexpectedEof { offset: self.position(), need, have });
        }
        Ok(())
    }

    fn read_with<T>(
        &mut self,
        need: usize,
        read: impl FnOnce(&mut Cursor<&'a [u8]>) -> io::Result<T>,
    ) -> Result<T> {
        self.ensure(need)?;
        let offset = self.position();
        read(&mut self.cursor).map_err(|_| Error::UnexpectedEof { offset, need, have: 0 })
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.ensure(len)?;
        self.cursor.set_position((self.position() + len) as u64);
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> { self.read_with(1, ReadBytesExt::read_u8) }

    pub fn read_i8(&mut self) -> Result<i8> { self.read_with(1, ReadBytesExt::read_i8) }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_with(2, ReadBytesExt::read_u16::<LittleEndian>)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_with(2, ReadBytesExt::read_i16::<LittleEndian>)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_with(4, ReadBytesExt::read_u32::<LittleEndian>)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_with(8, ReadBytesExt::read_u64::<LittleEndian>)
    }

    pub fn peek_u8(&self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.cursor.get_ref()[self.position()])
    }

    pub fn peek_u16(&self) -> Result<u16> {
        self.ensure(2)?;
        let start = self.position();
        let bytes = &self.cursor.get_ref()[start..start + 2];
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.position();
        self.cursor.set_position((start + len) as u64);
        Ok(&data[start..start + len])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    /// Reads bytes up to a NUL terminator, consuming the terminator.
    pub fn read_cstr(&mut self) -> Result<&'a [u8]> {
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.position();
        let Some(len) = data[start..].iter().position(|&b| b == 0) else {
            return Err(Error::UnexpectedEof {
                offset: start,
                need:   self.remaining() + 1,
                have:   self.remaining(),
            });
        };
        self.cursor.set_position((start + len + 1) as u64);
        Ok(&data[start..start + len])
    }

    /// Reads as many bytes as available into `buf`, returning the number of bytes read.
    pub fn read_partial(&mut self, buf: &mut [u8]) -> usize {
        let mut total = 0;
        while total < buf.len() {
            match self.cursor.read(&mut buf[total..]) {
                Ok(0) | Err(_) => break,
                Ok(n) => total += n,
            }
        }
        total
    }

    /// Borrows everything after the cursor and moves to the end.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let data: &'a [u8] = *self.cursor.get_ref();
        let start = self.position().min(data.len());
        self.cursor.set_position(data.len() as u64);
        &data[start..]
    }
}
