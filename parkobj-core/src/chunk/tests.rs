use strum::IntoEnumIterator;

use super::{Chunk, Encoding, Error, decode, encode, read, write};
use crate::stream::Stream;

fn sample() -> Vec<u8> {
    let mut data = b"ABCDABCDABCDxyz".to_vec();
    data.extend(std::iter::repeat_n(0, 300));
    data.extend((0..=255).collect::<Vec<u8>>());
    data.extend(b"ABCDEFGHABCDEFGH");
    data
}

#[test]
fn test_decode_rle() {
    // 2 literals, then 0xAA repeated 4 times
    let src = [0x01, b'h', b'i', (1i16 - 4) as u8, 0xAA];
    assert_eq!(decode(Encoding::Rle, &src), Ok(b"hi\xAA\xAA\xAA\xAA".to_vec()));
}

#[test]
fn test_decode_rle_truncated() {
    assert_eq!(decode(Encoding::Rle, &[0x05, 1, 2]), Err(Error::TruncatedRun(1)));
    assert_eq!(decode(Encoding::Rle, &[0xFE]), Err(Error::TruncatedRun(1)));
}

#[test]
fn test_decode_repeat() {
    // literal 'a', literal 'b', then copy 3 bytes from 2 back
    let back2_len3 = (((32 - 2) << 3) | 2) as u8;
    let rle = [0x04, 0xFF, b'a', 0xFF, b'b', back2_len3];
    assert_eq!(decode(Encoding::RleCompressed, &rle), Ok(b"ababa".to_vec()));
}

#[test]
fn test_decode_repeat_bad_reference() {
    let rle = [0x00, 0x00];
    assert_eq!(
        decode(Encoding::RleCompressed, &rle),
        Err(Error::BadBackReference { offset: 0 })
    );
}

#[test]
fn test_decode_rotate() {
    assert_eq!(decode(Encoding::Rotate, &[0b0000_0010, 0b0000_1000, 0x01]), Ok(vec![1, 1, 0x08]));
}

#[test]
fn test_encoders_are_inverse() {
    let data = sample();
    for encoding in Encoding::iter() {
        let encoded = encode(encoding, &data);
        assert_eq!(decode(encoding, &encoded).as_ref(), Ok(&data), "{encoding:?}");
    }
}

#[test]
fn test_compression_shrinks_runs() {
    let data = vec![7u8; 1000];
    assert!(encode(Encoding::Rle, &data).len() < 20);
    assert!(encode(Encoding::RleCompressed, &data).len() < 200);
}

#[test]
fn test_read_chunk() {
    let mut file = write(Encoding::Rle, b"hello");
    file.push(0x99);
    let mut stream = Stream::new(&file);
    assert_eq!(read(&mut stream), Ok(Chunk { encoding: Encoding::Rle, data: b"hello".to_vec() }));
    assert_eq!(stream.remaining(), 1);
}

#[test]
fn test_read_chunk_unknown_encoding() {
    let file = [9, 0, 0, 0, 0];
    assert_eq!(read(&mut Stream::new(&file)), Err(Error::UnknownEncoding(9)));
}

#[test]
fn test_read_chunk_short_payload() {
    let file = [0, 10, 0, 0, 0, 1, 2];
    assert!(matches!(read(&mut Stream::new(&file)), Err(Error::Stream(_))));
}
