//! Chunk codec of legacy object files.
//!
//! A chunk is a 5-byte header `{encoding: u8, length: u32}` followed by `length` encoded bytes.

use crate::stream::{self, Stream};

#[cfg(test)]
mod tests;

/// Upper bound of a decoded chunk.
pub const MAX_DECODED_LEN: usize = 16 * 1024 * 1024;

pub const HEADER_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::FromRepr)]
#[repr(u8)]
pub enum Encoding {
    None          = 0,
    Rle           = 1,
    RleCompressed = 2,
    Rotate        = 3,
}

impl Encoding {
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> { Self::from_repr(code) }

    #[must_use]
    pub fn code(self) -> u8 { self as u8 }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub encoding: Encoding,
    pub data:     Vec<u8>,
}

/// Reads a chunk header and its payload, then decodes the payload.
pub fn read(stream: &mut Stream<'_>) -> Result<Chunk> {
    let code = stream.read_u8()?;
    let encoding = Encoding::from_code(code).ok_or(Error::UnknownEncoding(code))?;
    let length = stream.read_u32()? as usize;
    let encoded = stream.read_bytes(length)?;
    Ok(Chunk { encoding, data: decode(encoding, encoded)? })
}

/// Encodes `data` and prepends the chunk header.
#[must_use]
pub fn write(encoding: Encoding, data: &[u8]) -> Vec<u8> {
    let encoded = encode(encoding, data);
    let mut out = Vec::with_capacity(HEADER_LEN + encoded.len());
    out.push(encoding.code());
    out.extend_from_slice(&(encoded.len() as u32).to_le_bytes());
    out.extend_from_slice(&encoded);
    out
}

pub fn decode(encoding: Encoding, src: &[u8]) -> Result<Vec<u8>> {
    match encoding {
        Encoding::None => Ok(src.to_vec()),
        Encoding::Rle => decode_rle(src),
        Encoding::RleCompressed => decode_repeat(&decode_rle(src)?),
        Encoding::Rotate => Ok(rotate(src, u8::rotate_right)),
    }
}

#[must_use]
pub fn encode(encoding: Encoding, src: &[u8]) -> Vec<u8> {
    match encoding {
        Encoding::None => src.to_vec(),
        Encoding::Rle => encode_rle(src),
        Encoding::RleCompressed => encode_rle(&encode_repeat(src)),
        Encoding::Rotate => rotate(src, u8::rotate_left),
    }
}

fn push_checked(out: &mut Vec<u8>, additional: usize) -> Result<()> {
    if out.len() + additional > MAX_DECODED_LEN {
        return Err(Error::TooLarge);
    }
    Ok(())
}

fn decode_rle(src: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(src.len() * 2);
    let mut i = 0;
    while i < src.len() {
        let control = src[i] as i8;
        i += 1;
        if control < 0 {
            let count = (1 - i16::from(control)) as usize;
            let &byte = src.get(i).ok_or(Error::TruncatedRun(i))?;
            i += 1;
            push_checked(&mut out, count)?;
            out.resize(out.len() + count, byte);
        } else {
            let count = control as usize + 1;
            let literal = src.get(i..i + count).ok_or(Error::TruncatedRun(i))?;
            i += count;
            push_checked(&mut out, count)?;
            out.extend_from_slice(literal);
        }
    }
    Ok(out)
}

fn encode_rle(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() + src.len() / 128 + 1);
    let mut i = 0;
    while i < src.len() {
        let byte = src[i];
        let run = src[i..].iter().take(128).take_while(|&&b| b == byte).count();
        if run >= 2 {
            out.push((1 - run as i16) as u8);
            out.push(byte);
            i += run;
        } else {
            let start = i;
            while i < src.len() && i - start < 128 && src.get(i + 1) != Some(&src[i]) {
                i += 1;
            }
            out.push((i - start - 1) as u8);
            out.extend_from_slice(&src[start..i]);
        }
    }
    out
}

const REPEAT_WINDOW: usize = 32;
const REPEAT_MAX_LEN: usize = 8;
const REPEAT_LITERAL: u8 = 0xFF;

fn decode_repeat(src: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(src.len() * 2);
    let mut i = 0;
    while i < src.len() {
        let code = src[i];
        if code == REPEAT_LITERAL {
            i += 1;
            let &byte = src.get(i).ok_or(Error::TruncatedRun(i))?;
            push_checked(&mut out, 1)?;
            out.push(byte);
        } else {
            let count = usize::from(code & 7) + 1;
            let back = REPEAT_WINDOW - usize::from(code >> 3);
            let start = out.len().checked_sub(back).ok_or(Error::BadBackReference { offset: i })?;
            push_checked(&mut out, count)?;
            for k in 0..count {
                let byte = out[start + k];
                out.push(byte);
            }
        }
        i += 1;
    }
    Ok(out)
}

fn encode_repeat(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() * 2);
    let mut i = 0;
    while i < src.len() {
        let mut best: Option<(usize, usize)> = None;
        for back in 1..=REPEAT_WINDOW.min(i) {
            // back 1 with length 8 would encode as the literal escape
            let max_len = if back == 1 { REPEAT_MAX_LEN - 1 } else { REPEAT_MAX_LEN };
            let len = (0..max_len.min(src.len() - i))
                .take_while(|&k| src[i - back + k] == src[i + k])
                .count();
            if len > 0 && best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((back, len));
            }
        }
        if let Some((back, len)) = best {
            out.push((((REPEAT_WINDOW - back) << 3) | (len - 1)) as u8);
            i += len;
        } else {
            out.push(REPEAT_LITERAL);
            out.push(src[i]);
            i += 1;
        }
    }
    out
}

fn rotate(src: &[u8], op: fn(u8, u32) -> u8) -> Vec<u8> {
    let mut key = 1;
    src.iter()
        .map(|&byte| {
            let out = op(byte, key);
            key = (key + 2) % 8;
            out
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Stream(#[from] stream::Error),
    #[error("unknown chunk encoding {0}")]
    UnknownEncoding(u8),
    #[error("encoded data ends inside a run at offset {0}")]
    TruncatedRun(usize),
    #[error("back reference at offset {offset} reaches before the start of the output")]
    BadBackReference { offset: usize },
    #[error("decoded chunk exceeds {MAX_DECODED_LEN} bytes")]
    TooLarge,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
