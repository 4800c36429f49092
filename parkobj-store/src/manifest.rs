use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ImageDescriptor;

/// Root structure of a `.json` object file or the `object.json` inside a `.parkobj` archive.
///
/// Fields that loaders must tolerate in malformed form (`version`, `authors`, `sourceGame`)
/// are kept as raw JSON and interpreted by the loader.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Manifest {
    /// Name of the object type, e.g. `"scenery_small"`.
    ///
    /// Unknown names cause the manifest to be skipped, not rejected.
    #[serde(default)]
    pub object_type: String,
    /// Textual identifier of the object, e.g. `"rct2.scenery_small.tl0"`.
    #[serde(default)]
    pub id: String,
    /// `major.minor.patch` version string.
    #[serde(default)]
    pub version: Option<String>,
    /// Legacy identity in the form `FLAGS:NAME____:CHECKSUM`
    /// (8 hex digits, 8 characters, 8 hex digits).
    #[serde(default)]
    pub original_id: Option<String>,
    /// Author names. Entries that are not strings are ignored.
    #[serde(default)]
    pub authors: Value,
    /// A single source game tag or an array of them.
    #[serde(default)]
    pub source_game: Option<Value>,
    /// Whether the object only exists to load old parks.
    #[serde(default)]
    pub is_compatibility_object: bool,
    /// Type-specific properties.
    #[serde(default)]
    pub properties: Map<String, Value>,
    /// Localised strings.
    #[serde(default)]
    pub strings: Strings,
    /// Images of the object, in image-table order.
    #[serde(default)]
    pub images: Vec<ImageDescriptor>,
}

/// Localised strings keyed by role (`"name"`, `"description"`, ...) then by locale (`"en-GB"`).
pub type Strings = BTreeMap<String, BTreeMap<String, String>>;

/// Length of an encoded `originalId`.
pub const ORIGINAL_ID_LEN: usize = 8 + 1 + 8 + 1 + 8;

/// The decoded parts of an `originalId` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginalId {
    /// Legacy entry flags, including the type and source game nibbles.
    pub flags:    u32,
    /// Space-padded legacy name.
    pub name:     [u8; 8],
    /// Legacy checksum.
    pub checksum: u32,
}

impl OriginalId {
    /// Decodes an `originalId` string.
    ///
    /// Returns `None` unless the string has exactly the encoded length,
    /// both fields are separated by `:` and both numeric fields are 8 hex digits.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let bytes = input.as_bytes();
        if bytes.len() != ORIGINAL_ID_LEN || bytes[8] != b':' || bytes[17] != b':' {
            return None;
        }
        let flags = parse_hex(input.get(0..8)?)?;
        let name_bytes = input.get(9..17)?.as_bytes();
        let checksum = parse_hex(input.get(18..26)?)?;

        let mut name = [b' '; 8];
        name.copy_from_slice(name_bytes);
        Some(Self { flags, name, checksum })
    }
}

fn parse_hex(digits: &str) -> Option<u32> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

impl std::fmt::Display for OriginalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08X}:{}:{:08X}", self.flags, String::from_utf8_lossy(&self.name), self.checksum)
    }
}
