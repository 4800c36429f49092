//! Metadata of a scenario shipped as an archive object.
//!
//! The record carries no fields of its own. Its name, park name and details live in the
//! string table and its preview in the image table.

use super::{Kind, Tables};
use crate::context::ReadContext;
use crate::json::Properties;
use crate::stream::{self, Stream};
use crate::strings::StringRole;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioMeta;

impl Kind for ScenarioMeta {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(6)?;
        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;
        tables.strings.read_legacy(ctx, stream, StringRole::ParkName)?;
        tables.strings.read_legacy(ctx, stream, StringRole::ScenarioDetails)?;
        tables.images.read_legacy(ctx, stream)?;
        Ok(())
    }

    fn read_json(&mut self, _: &mut ReadContext<'_>, _: &Properties, _: &mut Tables<'_>) {}
}
