use serde::{Deserialize, Serialize};

/// The game edition that originally shipped an object.
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
    strum::IntoStaticStr,
    strum::EnumString,
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum SourceGame {
    /// The first game.
    #[serde(rename = "rct1")]
    #[strum(serialize = "rct1")]
    Rct1,
    /// The first expansion of the first game.
    #[serde(rename = "rct1aa")]
    #[strum(serialize = "rct1aa")]
    AddedAttractions,
    /// The second expansion of the first game.
    #[serde(rename = "rct1ll")]
    #[strum(serialize = "rct1ll")]
    LoopyLandscapes,
    /// The second game.
    #[serde(rename = "rct2")]
    #[strum(serialize = "rct2")]
    Rct2,
    /// The first expansion of the second game.
    #[serde(rename = "rct2ww")]
    #[strum(serialize = "rct2ww")]
    WackyWorlds,
    /// The second expansion of the second game.
    #[serde(rename = "rct2tt")]
    #[strum(serialize = "rct2tt")]
    TimeTwister,
    /// Shipped with the reimplementation itself.
    #[serde(rename = "official")]
    #[strum(serialize = "official")]
    OpenRct2Official,
    /// Third-party content.
    #[serde(rename = "custom")]
    #[strum(serialize = "custom")]
    Custom,
}

impl SourceGame {
    /// Parses one `sourceGame` entry.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> { name.parse().ok() }

    /// The manifest spelling of this tag.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }

    /// Decodes the high nibble of a legacy entry's flags.
    ///
    /// Unassigned codes are treated as custom content.
    #[must_use]
    pub fn from_legacy_code(code: u8) -> Self {
        match code {
            1 => Self::WackyWorlds,
            2 => Self::TimeTwister,
            3 => Self::OpenRct2Official,
            4 => Self::Rct1,
            5 => Self::AddedAttractions,
            6 => Self::LoopyLandscapes,
            8 => Self::Rct2,
            _ => Self::Custom,
        }
    }

    /// The code stored in the high nibble of a legacy entry's flags.
    #[must_use]
    pub fn legacy_code(self) -> u8 {
        match self {
            Self::Custom => 0,
            Self::WackyWorlds => 1,
            Self::TimeTwister => 2,
            Self::OpenRct2Official => 3,
            Self::Rct1 => 4,
            Self::AddedAttractions => 5,
            Self::LoopyLandscapes => 6,
            Self::Rct2 => 8,
        }
    }

    /// Whether the object came from the second game or one of its expansions.
    #[must_use]
    pub fn is_rct2_family(self) -> bool {
        matches!(self, Self::Rct2 | Self::WackyWorlds | Self::TimeTwister)
    }
}
