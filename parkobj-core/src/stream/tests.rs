use super::{Error, Stream};

#[test]
fn test_reads_little_endian() {
    let data = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0xFF];
    let mut stream = Stream::new(&data);
    assert_eq!(stream.read_u8(), Ok(1));
    assert_eq!(stream.read_u16(), Ok(0x1234));
    assert_eq!(stream.read_u32(), Ok(0x1234_5678));
    assert_eq!(stream.read_i8(), Ok(-1));
    assert_eq!(stream.remaining(), 0);
}

#[test]
fn test_eof_does_not_advance() {
    let data = [0x01, 0x02, 0x03];
    let mut stream = Stream::new(&data);
    stream.skip(1).unwrap();
    assert_eq!(stream.read_u32(), Err(Error::UnexpectedEof { offset: 1, need: 4, have: 2 }));
    assert_eq!(stream.position(), 1);
    assert_eq!(stream.read_u16(), Ok(0x0302));
}

#[test]
fn test_read_cstr() {
    let data = b"abc\0de";
    let mut stream = Stream::new(data);
    assert_eq!(stream.read_cstr(), Ok(&b"abc"[..]));
    assert_eq!(stream.position(), 4);
    assert!(stream.read_cstr().is_err());
}

#[test]
fn test_read_partial() {
    let data = [1, 2, 3];
    let mut stream = Stream::new(&data);
    let mut buf = [0; 5];
    assert_eq!(stream.read_partial(&mut buf), 3);
    assert_eq!(buf, [1, 2, 3, 0, 0]);
}

#[test]
fn test_peek() {
    let data = [0xFF, 0xFF, 0x01];
    let mut stream = Stream::new(&data);
    assert_eq!(stream.peek_u16(), Ok(0xFFFF));
    assert_eq!(stream.peek_u8(), Ok(0xFF));
    assert_eq!(stream.position(), 0);
    stream.skip(2).unwrap();
    assert!(stream.peek_u16().is_err());
}
