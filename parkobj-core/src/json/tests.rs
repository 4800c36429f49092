use serde_json::json;

use super::{FlagKey, Properties, boolean, checked_int, colour, cursor, flags, int, string_list};
use crate::context::ReadContext;
use crate::lookup::{Colour, Cursor};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct TestFlags: u8 {
        const A = 1 << 0;
        const CANT_B = 1 << 1;
    }
}

const TABLE: &[FlagKey<TestFlags>] =
    &[FlagKey::normal("isA", TestFlags::A), FlagKey::inverted("isB", TestFlags::CANT_B)];

fn props(value: serde_json::Value) -> Properties {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("not an object"),
    }
}

#[test]
fn test_flags_polarity() {
    assert_eq!(flags(&props(json!({})), TABLE), TestFlags::empty());
    assert_eq!(flags(&props(json!({ "isA": true, "isB": true })), TABLE), TestFlags::A);
    assert_eq!(flags(&props(json!({ "isB": false })), TABLE), TestFlags::CANT_B);
    assert_eq!(flags(&props(json!({ "isA": 1, "isB": "no" })), TABLE), TestFlags::empty());
}

#[test]
fn test_lenient_getters() {
    let p = props(json!({
        "price": 300,
        "negative": -1,
        "text": "x",
        "flag": true,
        "colour": "bright_red",
        "cursor": "CURSOR_BENCH_DOWN",
    }));
    assert_eq!(int::<i16>(&p, "price", 0), 300);
    assert_eq!(int::<u8>(&p, "price", 7), 7);
    assert_eq!(int::<u8>(&p, "negative", 7), 7);
    assert_eq!(int::<i16>(&p, "text", 5), 5);
    assert!(boolean(&p, "flag", false));
    assert!(boolean(&p, "missing", true));
    assert_eq!(colour(&p, "colour", Colour::Black), Colour::BrightRed);
    assert_eq!(colour(&p, "missing", Colour::Grey), Colour::Grey);
    assert_eq!(cursor(&p, "cursor", Cursor::Arrow), Cursor::BenchDown);
}

#[test]
fn test_checked_int_logs() {
    let p = props(json!({ "height": "tall", "width": 3 }));
    let mut ctx = ReadContext::new("TEST", false);
    assert_eq!(checked_int::<u8>(&mut ctx, &p, "width", 0), 3);
    assert_eq!(checked_int::<u8>(&mut ctx, &p, "depth", 9), 9);
    assert!(!ctx.was_error());
    assert_eq!(checked_int::<u8>(&mut ctx, &p, "height", 1), 1);
    assert!(ctx.was_error());
}

#[test]
fn test_string_list() {
    assert_eq!(string_list(Some(&json!("a"))), ["a"]);
    assert_eq!(string_list(Some(&json!(["a", 1, "b", null]))), ["a", "b"]);
    assert!(string_list(Some(&json!(3))).is_empty());
    assert!(string_list(None).is_empty());
}
