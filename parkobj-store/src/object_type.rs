use serde::{Deserialize, Serialize};

/// The kind of content an object describes.
///
/// The first eleven variants have a legacy binary type code;
/// the rest only exist as JSON manifests.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
    strum::EnumString,
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum ObjectType {
    /// A ride, coaster or shop.
    #[serde(rename = "ride")]
    #[strum(serialize = "ride")]
    Ride,
    /// Single-tile scenery such as trees and statues.
    #[serde(rename = "scenery_small")]
    #[strum(serialize = "scenery_small")]
    SmallScenery,
    /// Multi-tile scenery.
    #[serde(rename = "scenery_large")]
    #[strum(serialize = "scenery_large")]
    LargeScenery,
    /// Walls and fences placed on tile edges.
    #[serde(rename = "scenery_wall")]
    #[strum(serialize = "scenery_wall")]
    Walls,
    /// Footpath banners.
    #[serde(rename = "banner")]
    #[strum(serialize = "banner")]
    Banners,
    /// Legacy combined footpath surface and railings.
    #[serde(rename = "footpath")]
    #[strum(serialize = "footpath")]
    Paths,
    /// Benches, bins, lamps and other footpath items.
    #[serde(rename = "footpath_item")]
    #[strum(serialize = "footpath_item")]
    PathAdditions,
    /// A scenery tab grouping other scenery objects.
    #[serde(rename = "scenery_group")]
    #[strum(serialize = "scenery_group")]
    SceneryGroup,
    /// The park entrance building.
    #[serde(rename = "park_entrance")]
    #[strum(serialize = "park_entrance")]
    ParkEntrance,
    /// Water palette.
    #[serde(rename = "water")]
    #[strum(serialize = "water")]
    Water,
    /// Scenario text and metadata. Only valid inside an archive.
    #[serde(rename = "scenario_meta")]
    #[strum(serialize = "scenario_meta")]
    ScenarioMeta,
    /// Terrain surface style.
    #[serde(rename = "terrain_surface")]
    #[strum(serialize = "terrain_surface")]
    TerrainSurface,
    /// Terrain edge style.
    #[serde(rename = "terrain_edge")]
    #[strum(serialize = "terrain_edge")]
    TerrainEdge,
    /// Ride station style.
    #[serde(rename = "station")]
    #[strum(serialize = "station")]
    Station,
    /// Ride music style.
    #[serde(rename = "music")]
    #[strum(serialize = "music")]
    Music,
    /// Footpath surface style.
    #[serde(rename = "footpath_surface")]
    #[strum(serialize = "footpath_surface")]
    FootpathSurface,
    /// Footpath railings style.
    #[serde(rename = "footpath_railings")]
    #[strum(serialize = "footpath_railings")]
    FootpathRailings,
    /// Sound effect pack.
    #[serde(rename = "audio")]
    #[strum(serialize = "audio")]
    Audio,
    /// Guest name lists.
    #[serde(rename = "peep_names")]
    #[strum(serialize = "peep_names")]
    PeepNames,
    /// Guest and staff animation tables.
    #[serde(rename = "peep_animations")]
    #[strum(serialize = "peep_animations")]
    PeepAnimations,
    /// Monthly temperature and weather tables.
    #[serde(rename = "climate")]
    #[strum(serialize = "climate")]
    Climate,
}

impl ObjectType {
    /// Parses the `objectType` value of a manifest.
    ///
    /// Matching is exact; unknown names return `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> { name.parse().ok() }

    /// The `objectType` value of a manifest.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }

    /// The type code stored in the low nibble of a legacy entry's flags.
    #[must_use]
    pub fn legacy_code(self) -> Option<u8> {
        Some(match self {
            Self::Ride => 0,
            Self::SmallScenery => 1,
            Self::LargeScenery => 2,
            Self::Walls => 3,
            Self::Banners => 4,
            Self::Paths => 5,
            Self::PathAdditions => 6,
            Self::SceneryGroup => 7,
            Self::ParkEntrance => 8,
            Self::Water => 9,
            Self::ScenarioMeta => 10,
            _ => return None,
        })
    }

    /// Inverse of [`legacy_code`](Self::legacy_code).
    #[must_use]
    pub fn from_legacy_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Ride,
            1 => Self::SmallScenery,
            2 => Self::LargeScenery,
            3 => Self::Walls,
            4 => Self::Banners,
            5 => Self::Paths,
            6 => Self::PathAdditions,
            7 => Self::SceneryGroup,
            8 => Self::ParkEntrance,
            9 => Self::Water,
            10 => Self::ScenarioMeta,
            _ => return None,
        })
    }

    /// Whether objects of this type can be placed in the scenery tabs.
    #[must_use]
    pub fn is_scenery(self) -> bool {
        matches!(
            self,
            Self::SmallScenery
                | Self::LargeScenery
                | Self::Walls
                | Self::Banners
                | Self::PathAdditions
        )
    }
}
