//! Lenient accessors for the `properties` object of a manifest.
//!
//! Missing keys and values of the wrong JSON type read as the default.

use serde_json::{Map, Value};

use crate::context::{ObjectError, ReadContext};
use crate::lookup::{Colour, Cursor};

#[cfg(test)]
mod tests;

pub type Properties = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// The flag is set when the key is `true`. A missing key leaves it clear.
    Normal,
    /// The flag is set when the key is `false`. A missing key leaves it clear.
    Inverted,
}

/// Maps a boolean property to a bit flag.
#[derive(Debug, Clone, Copy)]
pub struct FlagKey<F> {
    pub key:      &'static str,
    pub flag:     F,
    pub polarity: Polarity,
}

impl<F> FlagKey<F> {
    pub const fn normal(key: &'static str, flag: F) -> Self {
        Self { key, flag, polarity: Polarity::Normal }
    }

    pub const fn inverted(key: &'static str, flag: F) -> Self {
        Self { key, flag, polarity: Polarity::Inverted }
    }
}

/// Combines the flags of all keys that are set.
pub fn flags<F: bitflags::Flags + Copy>(props: &Properties, table: &[FlagKey<F>]) -> F {
    let mut out = F::empty();
    for entry in table {
        let set = match entry.polarity {
            Polarity::Normal => boolean(props, entry.key, false),
            Polarity::Inverted => !boolean(props, entry.key, true),
        };
        if set {
            out.insert(entry.flag);
        }
    }
    out
}

#[must_use]
pub fn boolean(props: &Properties, key: &str, default: bool) -> bool {
    props.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Reads an integer property, falling back to `default` if it is missing,
/// not an integer, or out of range of `T`.
pub fn int<T: TryFrom<i64>>(props: &Properties, key: &str, default: T) -> T {
    value_int(props.get(key), default)
}

pub fn value_int<T: TryFrom<i64>>(value: Option<&Value>, default: T) -> T {
    value.and_then(Value::as_i64).and_then(|v| T::try_from(v).ok()).unwrap_or(default)
}

/// Like [`int`], but logs an invalid property if the key exists with an unusable value.
pub fn checked_int<T: TryFrom<i64>>(
    ctx: &mut ReadContext<'_>,
    props: &Properties,
    key: &str,
    default: T,
) -> T {
    match props.get(key) {
        None | Some(Value::Null) => default,
        Some(value) => {
            if let Some(v) = value.as_i64().and_then(|v| T::try_from(v).ok()) {
                v
            } else {
                ctx.log_error(ObjectError::InvalidProperty, format!("Invalid value for {key}: {value}"));
                default
            }
        }
    }
}

#[must_use]
pub fn string<'a>(props: &'a Properties, key: &str) -> Option<&'a str> {
    props.get(key).and_then(Value::as_str)
}

/// Reads a string or an array of strings. Non-string array entries are skipped.
#[must_use]
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => {
            items.iter().filter_map(Value::as_str).map(str::to_string).collect()
        }
        _ => Vec::new(),
    }
}

#[must_use]
pub fn object<'a>(props: &'a Properties, key: &str) -> Option<&'a Properties> {
    props.get(key).and_then(Value::as_object)
}

#[must_use]
pub fn array<'a>(props: &'a Properties, key: &str) -> &'a [Value] {
    props.get(key).and_then(Value::as_array).map_or(&[], Vec::as_slice)
}

#[must_use]
pub fn colour(props: &Properties, key: &str, default: Colour) -> Colour {
    string(props, key).map_or(default, |name| Colour::from_name(name, default))
}

#[must_use]
pub fn cursor(props: &Properties, key: &str, default: Cursor) -> Cursor {
    string(props, key).map_or(default, |name| Cursor::from_name(name, default))
}
