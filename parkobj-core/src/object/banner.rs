//! Banners with scrolling text, placed across footpaths.

use super::{Frame, Kind, Tables, check_price, fixups, json_reference, read_legacy_reference};
use crate::context::ReadContext;
use crate::descriptor::Identity;
use crate::json::{self, FlagKey, Properties};
use crate::stream::{self, Stream};
use crate::strings::StringRole;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct BannerFlags: u8 {
        const HAS_PRIMARY_COLOUR = 1 << 0;
        const _ = !0;
    }
}

const FLAG_KEYS: &[FlagKey<BannerFlags>] =
    &[FlagKey::normal("hasPrimaryColour", BannerFlags::HAS_PRIMARY_COLOUR)];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    pub scrolling_mode: u8,
    pub flags:          BannerFlags,
    pub price:          i16,
    pub scenery_group:  Option<Identity>,
}

impl Kind for Banner {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(6)?;
        self.scrolling_mode = stream.read_u8()?;
        self.flags = BannerFlags::from_bits_retain(stream.read_u8()?);
        self.price = stream.read_i16()?;
        stream.skip(1)?;

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        self.scenery_group = read_legacy_reference(stream)?;
        tables.images.read_legacy(ctx, stream)?;

        check_price(ctx, self.price);

        if let Some(group) = fixups::footpath_signs_group(ctx, tables.descriptor) {
            self.scenery_group = Some(group);
        }
        Ok(())
    }

    fn read_json(&mut self, _: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.scrolling_mode = json::int(props, "scrollingMode", 0);
        self.price = json::int(props, "price", 0);
        self.flags = json::flags(props, FLAG_KEYS);
        self.scenery_group = json_reference(props, "sceneryGroup");
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        let (x, y) = (width / 2, height / 2);
        vec![Frame { index: 0, x: x - 12, y: y + 8 }, Frame { index: 1, x: x - 12, y: y + 8 }]
    }
}
