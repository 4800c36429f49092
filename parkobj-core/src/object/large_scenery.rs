//! Multi-tile scenery, optionally with a scrolling or 3D text sign.

use serde_json::Value;

use super::{Frame, Kind, Tables, check_prices, json_reference, read_legacy_reference};
use crate::context::{ObjectError, ReadContext};
use crate::descriptor::Identity;
use crate::json::{self, FlagKey, Properties};
use crate::lookup::Cursor;
use crate::stream::{self, Stream};
use crate::strings::StringRole;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct LargeSceneryFlags: u8 {
        const HAS_PRIMARY_COLOUR   = 1 << 0;
        const HAS_SECONDARY_COLOUR = 1 << 1;
        const HAS_3D_TEXT          = 1 << 2;
        const ANIMATED             = 1 << 3;
        const PHOTOGENIC           = 1 << 4;
        const IS_TREE              = 1 << 5;
        const HAS_TERTIARY_COLOUR  = 1 << 6;
        const _ = !0;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct TileFlags: u16 {
        const NO_SUPPORTS          = 1 << 5;
        const ALLOW_SUPPORTS_ABOVE = 1 << 6;
        const _ = !0;
    }
}

const TILE_WALLS_SHIFT: u16 = 8;
const TILE_CORNERS_SHIFT: u16 = 12;

const FLAG_KEYS: &[FlagKey<LargeSceneryFlags>] = &[
    FlagKey::normal("hasPrimaryColour", LargeSceneryFlags::HAS_PRIMARY_COLOUR),
    FlagKey::normal("hasSecondaryColour", LargeSceneryFlags::HAS_SECONDARY_COLOUR),
    FlagKey::normal("hasTertiaryColour", LargeSceneryFlags::HAS_TERTIARY_COLOUR),
    FlagKey::normal("isAnimated", LargeSceneryFlags::ANIMATED),
    FlagKey::normal("isPhotogenic", LargeSceneryFlags::PHOTOGENIC),
    FlagKey::normal("isTree", LargeSceneryFlags::IS_TREE),
];

const TILE_FLAG_KEYS: &[FlagKey<TileFlags>] = &[
    FlagKey::inverted("hasSupports", TileFlags::NO_SUPPORTS),
    FlagKey::normal("allowSupportsAbove", TileFlags::ALLOW_SUPPORTS_ABOVE),
];

/// Scrolling mode value of scenery without a scrolling sign.
pub const SCROLLING_MODE_NONE: u8 = 0xFF;

const TILE_LIST_END: u16 = 0xFFFF;
const NUM_GLYPHS: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub x:         i16,
    pub y:         i16,
    pub z:         i16,
    pub clearance: u8,
    /// Tile flags, with the wall mask in bits 8 to 11 and the corner mask in bits 12 to 15.
    pub flags:     TileFlags,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glyph {
    pub image_offset: u8,
    pub width:        u8,
    pub height:       u8,
}

/// Layout of 3D text drawn on the scenery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub offsets:    [(i16, i16); 2],
    pub max_width:  u16,
    pub flags:      u8,
    pub num_images: u16,
    pub glyphs:     Vec<Glyph>,
}

impl Text {
    /// Size of the legacy text block.
    pub const LEGACY_LEN: usize = 4 * 2 + 2 + 2 + 1 + 1 + NUM_GLYPHS * 4;

    fn read_legacy(stream: &mut Stream<'_>) -> stream::Result<Self> {
        let mut offsets = [(0, 0); 2];
        for offset in &mut offsets {
            *offset = (stream.read_i16()?, stream.read_i16()?);
        }
        let max_width = stream.read_u16()?;
        stream.skip(2)?;
        let flags = stream.read_u8()?;
        stream.skip(1)?;
        let mut glyphs = Vec::with_capacity(NUM_GLYPHS);
        for _ in 0..NUM_GLYPHS {
            glyphs.push(Glyph {
                image_offset: stream.read_u8()?,
                width:        stream.read_u8()?,
                height:       stream.read_u8()?,
            });
            stream.skip(1)?;
        }
        let num_images = glyphs.iter().map(|g| u16::from(g.image_offset) + 1).max().unwrap_or(0);
        Ok(Self { offsets, max_width, flags, num_images, glyphs })
    }

    fn read_json(props: &Properties) -> Self {
        let mut offsets = [(0, 0); 2];
        for (offset, value) in offsets.iter_mut().zip(json::array(props, "offsets")) {
            let value = value.as_object();
            *offset = (
                value.map_or(0, |v| json::int(v, "x", 0)),
                value.map_or(0, |v| json::int(v, "y", 0)),
            );
        }
        let mut flags = 0;
        if json::boolean(props, "isVertical", false) {
            flags |= 1;
        }
        if json::boolean(props, "isTwoLine", false) {
            flags |= 2;
        }
        let glyphs = json::array(props, "glyphs")
            .iter()
            .filter_map(Value::as_object)
            .map(|glyph| Glyph {
                image_offset: json::int(glyph, "image", 0),
                width:        json::int(glyph, "width", 0),
                height:       json::int(glyph, "height", 0),
            })
            .collect();
        Self {
            offsets,
            max_width: json::int(props, "maxWidth", 0),
            flags,
            num_images: json::int(props, "numImages", 0),
            glyphs,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LargeScenery {
    pub tool:           Cursor,
    pub flags:          LargeSceneryFlags,
    pub price:          i16,
    pub removal_price:  i16,
    pub scrolling_mode: u8,
    pub tiles:          Vec<Tile>,
    pub text:           Option<Text>,
    pub scenery_group:  Option<Identity>,
}

impl Kind for LargeScenery {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(6)?;
        self.tool = Cursor::from_legacy(stream.read_u8()?, Cursor::StatueDown);
        self.flags = LargeSceneryFlags::from_bits_retain(stream.read_u8()?);
        self.price = stream.read_i16()?;
        self.removal_price = stream.read_i16()?;
        stream.skip(5)?;
        self.scrolling_mode = stream.read_u8()?;
        stream.skip(4)?;

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        self.scenery_group = read_legacy_reference(stream)?;

        if self.flags.contains(LargeSceneryFlags::HAS_3D_TEXT) {
            self.text = Some(Text::read_legacy(stream)?);
        }
        self.tiles = read_legacy_tiles(stream)?;

        tables.images.read_legacy(ctx, stream)?;

        check_prices(ctx, self.price, self.removal_price);
        if self.tiles.is_empty() {
            ctx.log_error(ObjectError::InvalidProperty, "Large scenery has no tiles.");
        }
        Ok(())
    }

    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.tool = json::cursor(props, "cursor", Cursor::StatueDown);
        self.price = json::int(props, "price", 0);
        self.removal_price = json::int(props, "removalPrice", 0);
        self.scrolling_mode = json::int(props, "scrollingMode", SCROLLING_MODE_NONE);
        self.flags = json::flags(props, FLAG_KEYS);

        self.tiles = json::array(props, "tiles")
            .iter()
            .filter_map(Value::as_object)
            .map(read_json_tile)
            .collect();
        if self.tiles.is_empty() {
            ctx.log_error(ObjectError::InvalidProperty, "Large scenery has no tiles.");
        }

        if let Some(text) = json::object(props, "3dFont") {
            self.flags |= LargeSceneryFlags::HAS_3D_TEXT;
            self.text = Some(Text::read_json(text));
        }

        self.scenery_group = json_reference(props, "sceneryGroup");
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        vec![Frame { index: 0, x: width / 2, y: height / 2 - 39 }]
    }
}

fn read_legacy_tiles(stream: &mut Stream<'_>) -> stream::Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    while stream.peek_u16()? != TILE_LIST_END {
        tiles.push(Tile {
            x:         stream.read_i16()?,
            y:         stream.read_i16()?,
            z:         stream.read_i16()?,
            clearance: stream.read_u8()?,
            flags:     TileFlags::from_bits_retain(stream.read_u16()?),
        });
    }
    stream.skip(2)?;
    Ok(tiles)
}

fn read_json_tile(tile: &Properties) -> Tile {
    let walls: u16 = json::int(tile, "walls", 0);
    let corners: u16 = json::int(tile, "corners", 0xF);
    let flags = json::flags(tile, TILE_FLAG_KEYS).bits()
        | ((walls & 0xF) << TILE_WALLS_SHIFT)
        | ((corners & 0xF) << TILE_CORNERS_SHIFT);
    Tile {
        x:         json::int(tile, "x", 0),
        y:         json::int(tile, "y", 0),
        z:         json::int(tile, "z", 0),
        clearance: json::int(tile, "clearance", 0),
        flags:     TileFlags::from_bits_retain(flags),
    }
}
