//! Single-tile scenery such as trees, shrubs and statues.

use super::{Frame, Kind, Tables, check_prices, fixups, json_reference, read_legacy_reference};
use crate::context::{ObjectError, ReadContext};
use crate::descriptor::Identity;
use crate::json::{self, FlagKey, Properties};
use crate::lookup::Cursor;
use crate::stream::{self, Stream};
use crate::strings::StringRole;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct SmallSceneryFlags: u32 {
        const FULL_TILE             = 1 << 0;
        const VOFFSET_CENTRE        = 1 << 1;
        const REQUIRE_FLAT_SURFACE  = 1 << 2;
        const ROTATABLE             = 1 << 3;
        const ANIMATED              = 1 << 4;
        const CAN_WITHER            = 1 << 5;
        const CAN_BE_WATERED        = 1 << 6;
        const ANIMATED_FG           = 1 << 7;
        const DIAGONAL              = 1 << 8;
        const HAS_GLASS             = 1 << 9;
        const HAS_PRIMARY_COLOUR    = 1 << 10;
        const FOUNTAIN_SPRAY_1      = 1 << 11;
        const FOUNTAIN_SPRAY_4      = 1 << 12;
        const IS_CLOCK              = 1 << 13;
        const SWAMP_GOO             = 1 << 14;
        const HAS_FRAME_OFFSETS     = 1 << 15;
        const INTERESTING_ANIMATION = 1 << 16;
        const STACKABLE             = 1 << 17;
        const NO_WALLS              = 1 << 18;
        const HAS_SECONDARY_COLOUR  = 1 << 19;
        const NO_SUPPORTS           = 1 << 20;
        const VISIBLE_WHEN_ZOOMED   = 1 << 21;
        const COG                   = 1 << 22;
        const BUILD_DIRECTLY_ONTOP  = 1 << 23;
        const HALF_SPACE            = 1 << 24;
        const THREE_QUARTERS        = 1 << 25;
        const PAINT_SUPPORTS        = 1 << 26;
        const IS_TREE               = 1 << 28;
        const HAS_TERTIARY_COLOUR   = 1 << 29;

        const _ = !0;
    }
}

/// Legacy small scenery taller than this is a tree.
const TREE_HEIGHT: u8 = 64;

const FLAG_KEYS: &[FlagKey<SmallSceneryFlags>] = &[
    FlagKey::normal("isVOffsetCentre", SmallSceneryFlags::VOFFSET_CENTRE),
    FlagKey::normal("requiresFlatSurface", SmallSceneryFlags::REQUIRE_FLAT_SURFACE),
    FlagKey::normal("isRotatable", SmallSceneryFlags::ROTATABLE),
    FlagKey::normal("isAnimated", SmallSceneryFlags::ANIMATED),
    FlagKey::normal("canWither", SmallSceneryFlags::CAN_WITHER),
    FlagKey::normal("canBeWatered", SmallSceneryFlags::CAN_BE_WATERED),
    FlagKey::normal("hasOverlayImage", SmallSceneryFlags::ANIMATED_FG),
    FlagKey::normal("hasGlass", SmallSceneryFlags::HAS_GLASS),
    FlagKey::normal("hasPrimaryColour", SmallSceneryFlags::HAS_PRIMARY_COLOUR),
    FlagKey::normal("isFountainSpray1", SmallSceneryFlags::FOUNTAIN_SPRAY_1),
    FlagKey::normal("isFountainSpray4", SmallSceneryFlags::FOUNTAIN_SPRAY_4),
    FlagKey::normal("isClock", SmallSceneryFlags::IS_CLOCK),
    FlagKey::normal("isSwampGoo", SmallSceneryFlags::SWAMP_GOO),
    FlagKey::normal("hasInterestingAnimation", SmallSceneryFlags::INTERESTING_ANIMATION),
    FlagKey::normal("isStackable", SmallSceneryFlags::STACKABLE),
    FlagKey::normal("prohibitWalls", SmallSceneryFlags::NO_WALLS),
    FlagKey::normal("hasSecondaryColour", SmallSceneryFlags::HAS_SECONDARY_COLOUR),
    FlagKey::normal("hasNoSupports", SmallSceneryFlags::NO_SUPPORTS),
    FlagKey::normal("isVisibleWhenZoomed", SmallSceneryFlags::VISIBLE_WHEN_ZOOMED),
    FlagKey::normal("isCog", SmallSceneryFlags::COG),
    FlagKey::normal("allowSupportsAbove", SmallSceneryFlags::BUILD_DIRECTLY_ONTOP),
    FlagKey::normal("supportsHavePrimaryColour", SmallSceneryFlags::PAINT_SUPPORTS),
    FlagKey::normal("isTree", SmallSceneryFlags::IS_TREE),
    FlagKey::normal("hasTertiaryColour", SmallSceneryFlags::HAS_TERTIARY_COLOUR),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmallScenery {
    pub flags:           SmallSceneryFlags,
    pub height:          u8,
    pub tool:            Cursor,
    pub price:           i16,
    pub removal_price:   i16,
    pub animation_delay: u16,
    pub animation_mask:  u16,
    pub num_frames:      u16,
    /// Image offsets of each animation frame, if [`SmallSceneryFlags::HAS_FRAME_OFFSETS`].
    pub frame_offsets:   Vec<u8>,
    pub scenery_group:   Option<Identity>,
}

impl Kind for SmallScenery {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(6)?;
        self.flags = SmallSceneryFlags::from_bits_retain(stream.read_u32()?);
        self.height = stream.read_u8()?;
        self.tool = Cursor::from_legacy(stream.read_u8()?, Cursor::StatueDown);
        self.price = stream.read_i16()?;
        self.removal_price = stream.read_i16()?;
        stream.skip(4)?;
        self.animation_delay = stream.read_u16()?;
        self.animation_mask = stream.read_u16()?;
        self.num_frames = stream.read_u16()?;
        stream.skip(1)?;

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        self.scenery_group = read_legacy_reference(stream)?;

        if self.flags.contains(SmallSceneryFlags::HAS_FRAME_OFFSETS) {
            self.frame_offsets = read_frame_offsets(stream)?;
        }
        if self.height > TREE_HEIGHT {
            self.flags |= SmallSceneryFlags::IS_TREE;
        }

        tables.images.read_legacy(ctx, stream)?;

        check_prices(ctx, self.price, self.removal_price);

        if let Some(group) = fixups::small_scenery_group(tables.descriptor) {
            self.scenery_group = Some(group);
        }
        Ok(())
    }

    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.price = json::int(props, "price", 0);
        self.removal_price = json::int(props, "removalPrice", 0);
        self.tool = json::cursor(props, "cursor", Cursor::StatueDown);
        self.height = json::checked_int(ctx, props, "height", 0);
        self.animation_delay = json::int(props, "animationDelay", 0);
        self.animation_mask = json::int(props, "animationMask", 0);
        self.num_frames = json::int(props, "numFrames", 0);

        self.flags = json::flags(props, FLAG_KEYS);
        if let Some(shape) = json::string(props, "shape") {
            self.flags |= parse_shape(ctx, shape);
        }

        self.frame_offsets =
            json::array(props, "frameOffsets").iter().map(|v| json::value_int(Some(v), 0)).collect();
        if !self.frame_offsets.is_empty() {
            self.flags |= SmallSceneryFlags::HAS_FRAME_OFFSETS;
        }

        self.scenery_group = json_reference(props, "sceneryGroup");
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        let mut y = (height / 2 + i32::from(self.height) / 2).min(height - 16);
        if self.flags.contains(SmallSceneryFlags::FULL_TILE | SmallSceneryFlags::VOFFSET_CENTRE) {
            y -= 12;
        }
        let x = width / 2;
        let mut frames = vec![Frame { index: 0, x, y }];
        if self.flags.intersects(SmallSceneryFlags::HAS_GLASS | SmallSceneryFlags::ANIMATED_FG) {
            frames.push(Frame { index: 4, x, y });
        }
        frames
    }
}

fn read_frame_offsets(stream: &mut Stream<'_>) -> stream::Result<Vec<u8>> {
    let mut offsets = Vec::new();
    loop {
        let offset = stream.read_u8()?;
        if offset == 0xFF {
            return Ok(offsets);
        }
        offsets.push(offset);
    }
}

/// Parses a tile occupancy such as `"2/4"`, `"4/4"` or `"1/4+D"`.
fn parse_shape(ctx: &mut ReadContext<'_>, shape: &str) -> SmallSceneryFlags {
    let (quarters, diagonal) = match shape.strip_suffix("+D") {
        Some(quarters) => (quarters, true),
        None => (shape, false),
    };
    let mut flags = match quarters {
        "1/4" => SmallSceneryFlags::empty(),
        "2/4" => SmallSceneryFlags::FULL_TILE | SmallSceneryFlags::HALF_SPACE,
        "3/4" => SmallSceneryFlags::FULL_TILE | SmallSceneryFlags::THREE_QUARTERS,
        "4/4" => SmallSceneryFlags::FULL_TILE,
        _ => {
            ctx.log_warning(ObjectError::InvalidProperty, format!("Unknown shape {shape}."));
            SmallSceneryFlags::empty()
        }
    };
    if diagonal {
        flags |= SmallSceneryFlags::DIAGONAL;
    }
    flags
}
