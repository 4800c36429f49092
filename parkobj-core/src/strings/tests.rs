use std::collections::BTreeMap;

use super::{StringRole, StringTable};
use crate::context::ReadContext;
use crate::stream::Stream;

#[test]
fn test_read_legacy() {
    let mut data = Vec::new();
    data.push(0);
    data.extend(b"Tree\0");
    data.push(2);
    data.extend(b"Arbre \xE0 fleurs\0");
    data.push(1);
    data.extend(b"   \0");
    data.push(0xFF);
    data.push(0x42);

    let mut ctx = ReadContext::new("TEST", false);
    let mut stream = Stream::new(&data);
    let mut table = StringTable::default();
    table.read_legacy(&mut ctx, &mut stream, StringRole::Name).unwrap();

    assert_eq!(stream.remaining(), 1);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(StringRole::Name, "en-GB"), Some("Tree"));
    assert_eq!(table.get(StringRole::Name, "fr-FR"), Some("Arbre à fleurs"));
    assert_eq!(table.get(StringRole::Name, "en-US"), Some("Tree"));
    assert_eq!(table.get(StringRole::Description, "en-GB"), None);
    assert!(!ctx.was_warning());
}

#[test]
fn test_read_legacy_unknown_language() {
    let data = [12, b'x', 0, 0xFF];
    let mut ctx = ReadContext::new("TEST", false);
    let mut table = StringTable::default();
    table.read_legacy(&mut ctx, &mut Stream::new(&data), StringRole::Name).unwrap();
    assert!(table.is_empty());
    assert!(ctx.was_warning());
}

#[test]
fn test_read_legacy_truncated() {
    let data = [0, b'x'];
    let mut ctx = ReadContext::new("TEST", false);
    let mut table = StringTable::default();
    assert!(table.read_legacy(&mut ctx, &mut Stream::new(&data), StringRole::Name).is_err());
}

#[test]
fn test_read_json() {
    let strings: store::Strings = BTreeMap::from([
        (
            "name".to_string(),
            BTreeMap::from([
                ("en-GB".to_string(), "Pine".to_string()),
                ("de-DE".to_string(), "Kiefer".to_string()),
            ]),
        ),
        ("flavour".to_string(), BTreeMap::from([("en-GB".to_string(), "x".to_string())])),
    ]);
    let mut ctx = ReadContext::new("TEST", false);
    let mut table = StringTable::default();
    table.read_json(&mut ctx, &strings);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(StringRole::Name, "de-DE"), Some("Kiefer"));
    assert_eq!(table.roles(), [StringRole::Name]);
    assert!(!ctx.was_error());
}

#[test]
fn test_sort_prefers_language() {
    let mut table = StringTable::default();
    table.set(StringRole::Description, "en-GB", "d");
    table.set(StringRole::Name, "fr-FR", "Nom");
    table.set(StringRole::Name, "en-GB", "Name");
    table.set(StringRole::Name, "de-DE", "Name (de)");
    table.sort("de-DE");
    let order: Vec<_> = table.entries().iter().map(|e| (e.role, e.locale.as_str())).collect();
    assert_eq!(order, [
        (StringRole::Name, "de-DE"),
        (StringRole::Name, "en-GB"),
        (StringRole::Name, "fr-FR"),
        (StringRole::Description, "en-GB"),
    ]);
}

#[test]
fn test_role_keys() {
    assert_eq!(StringRole::from_key("park_name"), Some(StringRole::ParkName));
    assert_eq!(StringRole::VehicleName.key(), "vehicleName");
    assert_eq!(StringRole::from_key("Name"), None);
}
