//! The park entrance gate.

use super::{Frame, Kind, Tables};
use crate::context::ReadContext;
use crate::json::{self, Properties};
use crate::stream::{self, Stream};
use crate::strings::StringRole;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParkEntrance {
    pub scrolling_mode: u8,
    pub text_height:    u8,
}

impl Kind for ParkEntrance {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(6)?;
        self.scrolling_mode = stream.read_u8()?;
        self.text_height = stream.read_u8()?;

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        tables.images.read_legacy(ctx, stream)?;
        Ok(())
    }

    fn read_json(&mut self, _: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.scrolling_mode = json::int(props, "scrollingMode", 0);
        self.text_height = json::int(props, "textHeight", 0);
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        let (x, y) = (width / 2, height / 2);
        vec![
            Frame { index: 1, x: x - 32, y: y + 14 },
            Frame { index: 0, x, y: y + 28 },
            Frame { index: 2, x: x + 32, y: y + 44 },
        ]
    }
}
