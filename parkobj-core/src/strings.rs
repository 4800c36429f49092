//! Localised strings of an object.

use std::str::FromStr;

use encoding_rs::{BIG5, EUC_KR, Encoding, GBK, SHIFT_JIS, WINDOWS_1252};
use itertools::Itertools;

use crate::context::{ObjectError, ReadContext};
use crate::stream::{self, Stream};

#[cfg(test)]
mod tests;

/// The locale that every object is expected to provide.
pub const FALLBACK_LOCALE: &str = "en-GB";

const LEGACY_LANGUAGE_END: u8 = 0xFF;

/// Purpose of a string within an object.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum StringRole {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "description")]
    Description,
    #[strum(serialize = "capacity")]
    Capacity,
    #[strum(serialize = "vehicleName")]
    VehicleName,
    #[strum(serialize = "park_name")]
    ParkName,
    #[strum(serialize = "details")]
    ScenarioDetails,
}

impl StringRole {
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> { Self::from_str(key).ok() }

    #[must_use]
    pub fn key(self) -> &'static str { self.into() }
}

/// Maps a legacy language id to its locale.
#[must_use]
pub fn legacy_locale(language: u8) -> Option<&'static str> {
    Some(match language {
        0 => "en-GB",
        1 => "en-US",
        2 => "fr-FR",
        3 => "de-DE",
        4 => "es-ES",
        5 => "it-IT",
        6 => "nl-NL",
        7 => "sv-SE",
        8 => "ja-JP",
        9 => "ko-KR",
        10 => "zh-CN",
        11 => "zh-TW",
        13 => "pt-BR",
        _ => return None,
    })
}

fn legacy_encoding(language: u8) -> &'static Encoding {
    match language {
        8 => SHIFT_JIS,
        9 => EUC_KR,
        10 => GBK,
        11 => BIG5,
        _ => WINDOWS_1252,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    pub role:   StringRole,
    pub locale: String,
    pub text:   String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: Vec<StringEntry>,
}

impl StringTable {
    /// Reads a legacy string table for `role`, terminated by language id `0xFF`.
    pub fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        role: StringRole,
    ) -> stream::Result<()> {
        loop {
            let language = stream.read_u8()?;
            if language == LEGACY_LANGUAGE_END {
                return Ok(());
            }
            let raw = stream.read_cstr()?;
            let Some(locale) = legacy_locale(language) else {
                ctx.log_warning(
                    ObjectError::BadStringTable,
                    format!("Unknown language id {language} in string table."),
                );
                continue;
            };
            let (text, _, had_errors) = legacy_encoding(language).decode(raw);
            if had_errors {
                ctx.log_verbose(
                    ObjectError::BadStringTable,
                    format!("Malformed {locale} text in string table."),
                );
            }
            self.set(role, locale, text.into_owned());
        }
    }

    /// Reads the `strings` object of a manifest. Unknown roles are ignored.
    pub fn read_json(&mut self, ctx: &mut ReadContext<'_>, strings: &store::Strings) {
        for (key, locales) in strings {
            let Some(role) = StringRole::from_key(key) else {
                ctx.log_verbose(ObjectError::BadStringTable, format!("Unknown string role {key}."));
                continue;
            };
            for (locale, text) in locales {
                self.set(role, locale.clone(), text.clone());
            }
        }
    }

    /// Inserts or replaces a string. Blank strings are dropped.
    pub fn set(&mut self, role: StringRole, locale: impl Into<String>, text: impl Into<String>) {
        let (locale, text) = (locale.into(), text.into());
        if text.trim().is_empty() {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.role == role && e.locale == locale) {
            entry.text = text;
        } else {
            self.entries.push(StringEntry { role, locale, text });
        }
    }

    /// Resolves a string in `locale`, falling back to [`FALLBACK_LOCALE`], then any locale.
    #[must_use]
    pub fn get(&self, role: StringRole, locale: &str) -> Option<&str> {
        let candidates = || self.entries.iter().filter(move |e| e.role == role);
        candidates()
            .find(|e| e.locale == locale)
            .or_else(|| candidates().find(|e| e.locale == FALLBACK_LOCALE))
            .or_else(|| candidates().next())
            .map(|e| e.text.as_str())
    }

    /// Orders entries by role, preferring `locale`, then [`FALLBACK_LOCALE`], then locale name.
    pub fn sort(&mut self, locale: &str) {
        let rank = |e: &StringEntry| {
            if e.locale == locale {
                0
            } else if e.locale == FALLBACK_LOCALE {
                1
            } else {
                2
            }
        };
        self.entries.sort_by(|a, b| {
            a.role.cmp(&b.role).then(rank(a).cmp(&rank(b))).then(a.locale.cmp(&b.locale))
        });
    }

    /// Roles that have at least one string, in role order.
    #[must_use]
    pub fn roles(&self) -> Vec<StringRole> {
        self.entries.iter().map(|e| e.role).sorted().dedup().collect()
    }

    #[must_use]
    pub fn entries(&self) -> &[StringEntry] { &self.entries }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
