use store::{ObjectType, SourceGame};

use super::{CHECKSUM_SALT_LEN, Identity, LegacyEntry, ObjectDescriptor, checksum, checksum_salt};
use crate::stream::Stream;

#[test]
fn test_entry_nibbles() {
    let entry = LegacyEntry::new(ObjectType::Walls, SourceGame::Rct2, "WALLBR32", 0);
    assert_eq!(entry.flags, 0x83);
    assert_eq!(entry.type_code(), 3);
    assert_eq!(entry.object_type(), Some(ObjectType::Walls));
    assert_eq!(entry.source_game(), SourceGame::Rct2);
    assert_eq!(entry.name(), "WALLBR32");
}

#[test]
fn test_entry_unknown_type_code() {
    let entry = LegacyEntry { flags: 0x8C, name: *b"BADTYPE ", checksum: 0 };
    assert_eq!(entry.object_type(), None);
    assert_eq!(ObjectDescriptor::from_legacy(entry), None);
}

#[test]
fn test_entry_name_padding() {
    let entry = LegacyEntry::new(ObjectType::SmallScenery, SourceGame::Custom, "TL0", 0);
    assert_eq!(&entry.name, b"TL0     ");
    assert_eq!(entry.name(), "TL0");
}

#[test]
fn test_entry_read_round_trip() {
    let entry = LegacyEntry::new(ObjectType::Banners, SourceGame::WackyWorlds, "BN1", 0xDEAD_BEEF);
    let bytes = entry.to_bytes();
    assert_eq!(LegacyEntry::read(&mut Stream::new(&bytes)), Ok(entry));
}

#[test]
fn test_empty_entry() {
    let bytes = [0xFF; 16];
    let entry = LegacyEntry::read(&mut Stream::new(&bytes)).unwrap();
    assert!(entry.is_empty());
    assert!(!LegacyEntry::new(ObjectType::Ride, SourceGame::Rct2, "X", 0).is_empty());
}

#[test]
fn test_checksum() {
    let entry = LegacyEntry { flags: 0x01, name: [0; 8], checksum: 0 };
    let expected = (0xF369_A75Bu32 ^ 0x01).rotate_left(11);
    let expected = (0..8).fold(expected, |sum, _| sum.rotate_left(11));
    assert_eq!(checksum(&entry, &[]), expected);
    assert_eq!(checksum(&entry, &[0x42]), (expected ^ 0x42).rotate_left(11));
}

#[test]
fn test_checksum_salt() {
    let data = b"packed object record".to_vec();
    for target in [0, 1, 0x8000_0000, 0xDEAD_BEEF, u32::MAX] {
        let entry = LegacyEntry::new(ObjectType::Water, SourceGame::Custom, "WTRSALT", target);
        let salt = checksum_salt(&entry, &data);
        assert_eq!(salt.len(), CHECKSUM_SALT_LEN);

        let mut salted = data.clone();
        salted.extend_from_slice(&salt);
        assert_eq!(checksum(&entry, &salted), target, "target {target:08X}");
    }
}

#[test]
fn test_checksum_salt_when_already_valid() {
    let mut entry = LegacyEntry::new(ObjectType::Water, SourceGame::Custom, "WTRSALT", 0);
    entry.checksum = checksum(&entry, &[1, 2, 3]).rotate_left(25);
    assert_eq!(checksum_salt(&entry, &[1, 2, 3]), [0; CHECKSUM_SALT_LEN]);
}

#[test]
fn test_identity_matching() {
    let a = LegacyEntry::new(ObjectType::Walls, SourceGame::Rct2, "WALL1", 1);
    let b = LegacyEntry::new(ObjectType::Walls, SourceGame::Custom, "WALL1", 2);
    let c = LegacyEntry::new(ObjectType::Banners, SourceGame::Rct2, "WALL1", 1);
    assert!(Identity::Legacy(a).matches(&Identity::Legacy(b)));
    assert!(!Identity::Legacy(a).matches(&Identity::Legacy(c)));
    assert!(!Identity::Legacy(a).matches(&Identity::Textual("WALL1".into())));
    assert!(Identity::Textual("x.y".into()).matches(&Identity::Textual("x.y".into())));
}
