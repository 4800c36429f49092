//! Water palettes.

use super::{Kind, Tables};
use crate::context::ReadContext;
use crate::json::{self, FlagKey, Properties};
use crate::stream::{self, Stream};
use crate::strings::StringRole;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct WaterFlags: u16 {
        const ALLOW_DUCKS = 1 << 0;
        const _ = !0;
    }
}

const FLAG_KEYS: &[FlagKey<WaterFlags>] = &[FlagKey::normal("allowDucks", WaterFlags::ALLOW_DUCKS)];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Water {
    pub flags: WaterFlags,
}

impl Kind for Water {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(14)?;
        self.flags = WaterFlags::from_bits_retain(stream.read_u16()?);

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        tables.images.read_legacy(ctx, stream)?;
        Ok(())
    }

    fn read_json(&mut self, _: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.flags = json::flags(props, FLAG_KEYS);
    }
}
