//! Walls, fences and doors placed on tile edges.

use super::{Frame, Kind, Tables, check_price, fixups, json_reference, read_legacy_reference};
use crate::context::ReadContext;
use crate::descriptor::Identity;
use crate::json::{self, FlagKey, Properties};
use crate::lookup::Cursor;
use crate::stream::{self, Stream};
use crate::strings::StringRole;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct WallFlags: u8 {
        const HAS_PRIMARY_COLOUR   = 1 << 0;
        const HAS_GLASS            = 1 << 1;
        const CANT_BUILD_ON_SLOPE  = 1 << 2;
        const IS_BANNER            = 1 << 3;
        const IS_DOOR              = 1 << 4;
        const LONG_DOOR_ANIMATION  = 1 << 5;
        const HAS_SECONDARY_COLOUR = 1 << 6;
        const HAS_TERTIARY_COLOUR  = 1 << 7;
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct WallFlags2: u8 {
        const NO_SELECT_PRIMARY_COLOUR = 1 << 0;
        const DOOR_SOUND_MASK          = 0b0110;
        const IS_OPAQUE                = 1 << 3;
        const ANIMATED                 = 1 << 4;
        const _ = !0;
    }
}

const DOOR_SOUND_SHIFT: u8 = 1;

const FLAG_KEYS: &[FlagKey<WallFlags>] = &[
    FlagKey::normal("hasPrimaryColour", WallFlags::HAS_PRIMARY_COLOUR),
    FlagKey::normal("hasGlass", WallFlags::HAS_GLASS),
    FlagKey::inverted("isAllowedOnSlope", WallFlags::CANT_BUILD_ON_SLOPE),
    FlagKey::normal("isBanner", WallFlags::IS_BANNER),
    FlagKey::normal("isDoor", WallFlags::IS_DOOR),
    FlagKey::normal("isLongDoorAnimation", WallFlags::LONG_DOOR_ANIMATION),
    FlagKey::normal("hasSecondaryColour", WallFlags::HAS_SECONDARY_COLOUR),
    FlagKey::normal("hasTertiaryColour", WallFlags::HAS_TERTIARY_COLOUR),
];

const FLAG2_KEYS: &[FlagKey<WallFlags2>] = &[
    FlagKey::normal("isOpaque", WallFlags2::IS_OPAQUE),
    FlagKey::normal("isAnimated", WallFlags2::ANIMATED),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wall {
    pub tool:           Cursor,
    pub flags:          WallFlags,
    pub height:         u8,
    pub flags2:         WallFlags2,
    pub price:          i16,
    pub scrolling_mode: u8,
    pub scenery_group:  Option<Identity>,
}

impl Wall {
    #[must_use]
    pub fn door_sound(&self) -> u8 {
        (self.flags2 & WallFlags2::DOOR_SOUND_MASK).bits() >> DOOR_SOUND_SHIFT
    }

    pub fn set_door_sound(&mut self, sound: u8) {
        self.flags2.remove(WallFlags2::DOOR_SOUND_MASK);
        self.flags2 |= WallFlags2::from_bits_retain(sound << DOOR_SOUND_SHIFT)
            & WallFlags2::DOOR_SOUND_MASK;
    }
}

impl Kind for Wall {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(6)?;
        self.tool = Cursor::from_legacy(stream.read_u8()?, Cursor::FenceDown);
        self.flags = WallFlags::from_bits_retain(stream.read_u8()?);
        self.height = stream.read_u8()?;
        self.flags2 = WallFlags2::from_bits_retain(stream.read_u8()?);
        self.price = stream.read_i16()?;
        stream.skip(1)?;
        self.scrolling_mode = stream.read_u8()?;

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        self.scenery_group = read_legacy_reference(stream)?;
        tables.images.read_legacy(ctx, stream)?;

        check_price(ctx, self.price);

        if fixups::needs_door_sound(tables.descriptor) {
            self.set_door_sound(1);
        }
        Ok(())
    }

    fn read_json(&mut self, _: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.tool = json::cursor(props, "cursor", Cursor::FenceDown);
        self.height = json::int(props, "height", 0);
        self.price = json::int(props, "price", 0);
        self.scrolling_mode = json::int(props, "scrollingMode", 0xFF);
        self.flags = json::flags(props, FLAG_KEYS);
        self.flags2 = json::flags(props, FLAG2_KEYS);
        if self.flags.contains(WallFlags::IS_DOOR) {
            self.set_door_sound(json::int(props, "doorSound", 0));
        }
        self.scenery_group = json_reference(props, "sceneryGroup");
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        let (x, y) = (width / 2 + 14, height / 2 + i32::from(self.height) * 2);
        let mut frames = vec![Frame { index: 0, x, y }];
        if self.flags.contains(WallFlags::HAS_GLASS) {
            frames.push(Frame { index: 6, x, y });
        } else if self.flags.contains(WallFlags::IS_DOOR) {
            frames.push(Frame { index: 1, x, y });
        }
        frames
    }
}
