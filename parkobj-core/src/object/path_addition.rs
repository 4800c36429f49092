//! Lamps, bins, benches and fountains placed on footpaths.

use super::{Frame, Kind, Tables, check_price, fixups, json_reference, read_legacy_reference};
use crate::context::{ObjectError, ReadContext};
use crate::descriptor::Identity;
use crate::json::{self, FlagKey, Properties};
use crate::lookup::Cursor;
use crate::stream::{self, Stream};
use crate::strings::StringRole;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct PathAdditionFlags: u16 {
        const IS_BIN                 = 1 << 0;
        const IS_BENCH               = 1 << 1;
        const IS_BREAKABLE           = 1 << 2;
        const LAMP                   = 1 << 3;
        const JUMPING_FOUNTAIN_WATER = 1 << 4;
        const JUMPING_FOUNTAIN_SNOW  = 1 << 5;
        const DONT_ALLOW_ON_QUEUE    = 1 << 6;
        const DONT_ALLOW_ON_SLOPE    = 1 << 7;
        const IS_QUEUE_SCREEN        = 1 << 8;
        const _ = !0;
    }
}

const FLAG_KEYS: &[FlagKey<PathAdditionFlags>] = &[
    FlagKey::normal("isBin", PathAdditionFlags::IS_BIN),
    FlagKey::normal("isBench", PathAdditionFlags::IS_BENCH),
    FlagKey::normal("isBreakable", PathAdditionFlags::IS_BREAKABLE),
    FlagKey::normal("isLamp", PathAdditionFlags::LAMP),
    FlagKey::normal("isJumpingFountainWater", PathAdditionFlags::JUMPING_FOUNTAIN_WATER),
    FlagKey::normal("isJumpingFountainSnow", PathAdditionFlags::JUMPING_FOUNTAIN_SNOW),
    FlagKey::inverted("isAllowedOnQueue", PathAdditionFlags::DONT_ALLOW_ON_QUEUE),
    FlagKey::inverted("isAllowedOnSlope", PathAdditionFlags::DONT_ALLOW_ON_SLOPE),
    FlagKey::normal("isTelevision", PathAdditionFlags::IS_QUEUE_SCREEN),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::FromRepr, strum::EnumString)]
#[repr(u8)]
#[strum(serialize_all = "snake_case")]
pub enum DrawType {
    #[default]
    #[strum(serialize = "lamp")]
    Light,
    Bin,
    Bench,
    #[strum(serialize = "fountain")]
    JumpingFountain,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathAddition {
    pub flags:         PathAdditionFlags,
    pub draw_type:     DrawType,
    pub tool:          Cursor,
    pub price:         i16,
    pub scenery_group: Option<Identity>,
}

impl Kind for PathAddition {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(6)?;
        self.flags = PathAdditionFlags::from_bits_retain(stream.read_u16()?);
        let draw_type = stream.read_u8()?;
        self.tool = Cursor::from_legacy(stream.read_u8()?, Cursor::LamppostDown);
        self.price = stream.read_i16()?;
        stream.skip(2)?;

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        self.scenery_group = read_legacy_reference(stream)?;
        tables.images.read_legacy(ctx, stream)?;

        check_price(ctx, self.price);
        if let Some(draw_type) = DrawType::from_repr(draw_type) {
            self.draw_type = draw_type;
        } else {
            ctx.log_error(ObjectError::InvalidProperty, format!("Unknown draw type {draw_type}."));
        }

        if let Some(group) = fixups::footpath_signs_group(ctx, tables.descriptor) {
            self.scenery_group = Some(group);
        }
        Ok(())
    }

    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.tool = json::cursor(props, "cursor", Cursor::LamppostDown);
        self.price = json::int(props, "price", 0);
        self.flags = json::flags(props, FLAG_KEYS);

        let render_as = json::string(props, "renderAs").unwrap_or("lamp");
        if let Ok(draw_type) = render_as.parse() {
            self.draw_type = draw_type;
        } else {
            ctx.log_error(ObjectError::InvalidProperty, format!("Unknown renderAs {render_as}."));
        }

        self.scenery_group = json_reference(props, "sceneryGroup");
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        vec![Frame { index: 0, x: width / 2 - 22, y: height / 2 - 16 }]
    }
}
