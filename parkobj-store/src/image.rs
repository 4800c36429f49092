use serde::{Deserialize, Serialize};

/// One entry of a manifest's `images` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum ImageDescriptor {
    /// Shorthand string.
    ///
    /// `"$SOURCE[a..b]"` or `"$SOURCE[a]"` references images of an external source,
    /// anything else is a path to a PNG file relative to the object.
    Shorthand(String),
    /// A PNG file with explicit placement.
    File(ImageFile),
}

/// A PNG image imported into the image table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ImageFile {
    /// Path of the PNG file relative to the object.
    pub path:       String,
    /// Horizontal drawing offset.
    #[serde(default)]
    pub x:          i16,
    /// Vertical drawing offset.
    #[serde(default)]
    pub y:          i16,
    /// Left edge of the sub-image within the file.
    #[serde(default)]
    pub src_x:      Option<u32>,
    /// Top edge of the sub-image within the file.
    #[serde(default)]
    pub src_y:      Option<u32>,
    /// Width of the sub-image. Defaults to the rest of the file.
    #[serde(default)]
    pub src_width:  Option<u32>,
    /// Height of the sub-image. Defaults to the rest of the file.
    #[serde(default)]
    pub src_height: Option<u32>,
}
