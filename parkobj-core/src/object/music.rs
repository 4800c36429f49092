//! Ride music styles.

use super::{Kind, Tables};
use crate::context::{ObjectError, ReadContext};
use crate::json::{self, Properties};
use crate::lookup::RideType;
use crate::retriever::Asset;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicTrack {
    pub name:     String,
    pub composer: String,
    pub source:   String,
    pub asset:    Asset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Music {
    /// Ride types that can play this style. Empty means all of them.
    pub ride_types:        Vec<RideType>,
    pub original_style_id: Option<u8>,
    pub tracks:            Vec<MusicTrack>,
}

impl Music {
    #[must_use]
    pub fn supports_ride_type(&self, ty: RideType) -> bool {
        self.ride_types.is_empty() || self.ride_types.contains(&ty)
    }
}

impl Kind for Music {
    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.ride_types = json::string_list(props.get("rideTypes"))
            .iter()
            .filter_map(|name| RideType::from_name(name))
            .collect();
        self.original_style_id = props
            .get("originalStyleId")
            .and_then(|v| v.as_u64())
            .and_then(|id| u8::try_from(id).ok());

        self.tracks.clear();
        for track in json::array(props, "tracks") {
            let Some(track) = track.as_object() else { continue };
            let Some(source) = json::string(track, "source") else {
                ctx.log_warning(ObjectError::InvalidProperty, "Music track has no source.");
                continue;
            };
            let asset = ctx.get_asset(source);
            if !asset.is_available() {
                ctx.log_warning(
                    ObjectError::InvalidProperty,
                    format!("Music track {source} not found."),
                );
            }
            self.tracks.push(MusicTrack {
                name: json::string(track, "name").unwrap_or_default().to_string(),
                composer: json::string(track, "composer").unwrap_or_default().to_string(),
                source: source.to_string(),
                asset,
            });
        }
    }
}

