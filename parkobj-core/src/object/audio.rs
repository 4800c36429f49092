//! Sound effect and music sample packs.

use serde_json::Value;

use super::{Kind, Tables};
use crate::context::{ObjectError, ReadContext};
use crate::json::{self, Properties};
use crate::retriever::Asset;

/// Identifier every base game audio object is loaded as.
pub const CANONICAL_BASE_AUDIO: &str = "rct2.audio.base";

/// Base game audio identifiers that are loaded as [`CANONICAL_BASE_AUDIO`],
/// so that asset packs overriding the base audio target one name.
pub const BASE_AUDIO_ALIASES: &[&str] = &["rct2.audio.base.rct2", "rct2.audio.base.rctc"];

/// Maps an audio identifier to the one it is loaded as.
#[must_use]
pub fn canonical_identifier(identifier: &str) -> &str {
    if BASE_AUDIO_ALIASES.contains(&identifier) { CANONICAL_BASE_AUDIO } else { identifier }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    pub source: String,
    pub asset:  Asset,
    /// Playback volume in percent, if overridden.
    pub volume: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audio {
    pub samples: Vec<Sample>,
}

impl Kind for Audio {
    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.samples.clear();
        for value in json::array(props, "samples") {
            let (source, volume) = match value {
                Value::String(path) => (path.as_str(), None),
                Value::Object(entry) => {
                    let Some(path) = json::string(entry, "path") else {
                        ctx.log_warning(ObjectError::InvalidProperty, "Sample has no path.");
                        continue;
                    };
                    let volume = entry.get("volume").and_then(Value::as_u64);
                    (path, volume.map(|v| u8::try_from(v.min(100)).unwrap_or(100)))
                }
                _ => {
                    ctx.log_warning(ObjectError::InvalidProperty, "Invalid sample entry.");
                    continue;
                }
            };

            let asset = ctx.get_asset(source);
            if !asset.is_available() {
                ctx.log_verbose(ObjectError::Ok, format!("Sample {source} not found."));
            }
            self.samples.push(Sample { source: source.to_string(), asset, volume });
        }
    }
}
