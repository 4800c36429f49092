//! Legacy footpaths, which bundle a surface, a queue surface and railings.

use super::{Frame, Kind, Tables};
use crate::context::{ObjectError, ReadContext};
use crate::json::{self, FlagKey, Properties};
use crate::stream::{self, Stream};
use crate::strings::StringRole;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct FootpathFlags: u8 {
        const HAS_SUPPORT_BASE_SPRITE     = 1 << 0;
        const HAS_PATH_BASE_SPRITE        = 1 << 1;
        const SHOW_ONLY_IN_SCENARIO_EDITOR = 1 << 2;
        const _ = !0;
    }
}

const FLAG_KEYS: &[FlagKey<FootpathFlags>] = &[
    FlagKey::normal("hasSupportImages", FootpathFlags::HAS_SUPPORT_BASE_SPRITE),
    FlagKey::normal("hasElevatedPathImages", FootpathFlags::HAS_PATH_BASE_SPRITE),
    FlagKey::normal("editorOnly", FootpathFlags::SHOW_ONLY_IN_SCENARIO_EDITOR),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::FromRepr, strum::EnumString)]
#[repr(u8)]
#[strum(serialize_all = "snake_case")]
pub enum SupportType {
    #[default]
    Box,
    Pole,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footpath {
    pub support_type:   SupportType,
    pub flags:          FootpathFlags,
    pub scrolling_mode: u8,
}

impl Kind for Footpath {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(10)?;
        let support_type = stream.read_u8()?;
        self.flags = FootpathFlags::from_bits_retain(stream.read_u8()?);
        self.scrolling_mode = stream.read_u8()?;
        stream.skip(1)?;

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        tables.images.read_legacy(ctx, stream)?;

        if let Some(support_type) = SupportType::from_repr(support_type) {
            self.support_type = support_type;
        } else {
            ctx.log_error(ObjectError::InvalidProperty, "RailingEntrySupportType not supported.");
        }
        Ok(())
    }

    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.support_type = read_json_support_type(ctx, props);
        self.scrolling_mode = json::int(props, "scrollingMode", 0);
        self.flags = json::flags(props, FLAG_KEYS);
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        let (x, y) = (width / 2, height / 2);
        vec![Frame { index: 71, x: x - 49, y: y - 17 }, Frame { index: 72, x: x + 4, y: y - 17 }]
    }
}

/// Reads `supportType`, which defaults to box supports.
pub(super) fn read_json_support_type(ctx: &mut ReadContext<'_>, props: &Properties) -> SupportType {
    let name = json::string(props, "supportType").unwrap_or("box");
    name.parse().unwrap_or_else(|_| {
        ctx.log_error(ObjectError::InvalidProperty, format!("Unknown supportType {name}."));
        SupportType::Box
    })
}
