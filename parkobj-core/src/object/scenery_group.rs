//! Scenery groups, the tabs of the scenery window.

use serde_json::Value;

use super::{Kind, Tables};
use crate::context::{ObjectError, ReadContext};
use crate::descriptor::{Identity, LegacyEntry};
use crate::json::{self, Properties};
use crate::stream::{self, Stream};
use crate::strings::StringRole;

/// Priority of groups that do not declare one.
pub const DEFAULT_PRIORITY: u8 = 40;

/// Size of the in-memory entry array of the legacy record, which files leave unused.
const LEGACY_ENTRY_SLOTS: usize = 0x80 * 2;

/// Entertainer costumes unlocked by building scenery of a group.
/// The discriminant is the bit index in the costume mask.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum EntertainerCostume {
    Panda     = 4,
    Tiger     = 5,
    Elephant  = 6,
    Roman     = 7,
    Gorilla   = 8,
    Snowman   = 9,
    Knight    = 10,
    Astronaut = 11,
    Bandit    = 12,
    Sheriff   = 13,
    Pirate    = 14,
}

impl EntertainerCostume {
    #[must_use]
    pub fn bit(self) -> u32 { 1 << self as u8 }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneryGroup {
    pub priority: u8,
    pub costumes: u32,
    /// Members of the group, in tab order.
    pub entries:  Vec<Identity>,
}

impl Default for SceneryGroup {
    fn default() -> Self { Self { priority: DEFAULT_PRIORITY, costumes: 0, entries: Vec::new() } }
}

impl SceneryGroup {
    /// Whether building scenery of this group unlocks `costume`.
    #[must_use]
    pub fn has_costume(&self, costume: EntertainerCostume) -> bool {
        self.costumes & costume.bit() != 0
    }
}

impl Kind for SceneryGroup {
    fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
        tables: &mut Tables<'_>,
    ) -> stream::Result<()> {
        stream.skip(6)?;
        stream.skip(LEGACY_ENTRY_SLOTS)?;
        // Entry count and a pad byte, both filled in at runtime.
        stream.skip(2)?;
        self.priority = stream.read_u8()?;
        stream.skip(1)?;
        self.costumes = stream.read_u32()?;

        tables.strings.read_legacy(ctx, stream, StringRole::Name)?;

        self.entries.clear();
        while stream.peek_u8()? != 0xFF {
            self.entries.push(Identity::Legacy(LegacyEntry::read(stream)?));
        }
        stream.skip(1)?;

        tables.images.read_legacy(ctx, stream)?;
        Ok(())
    }

    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.priority = json::int(props, "priority", DEFAULT_PRIORITY);

        self.costumes = 0;
        for name in json::array(props, "entertainerCostumes").iter().filter_map(Value::as_str) {
            match name.parse::<EntertainerCostume>() {
                Ok(costume) => self.costumes |= costume.bit(),
                Err(_) => ctx.log_warning(
                    ObjectError::InvalidProperty,
                    format!("Unknown entertainer costume {name}."),
                ),
            }
        }

        self.entries = json::array(props, "entries")
            .iter()
            .filter_map(Value::as_str)
            .map(|id| Identity::Textual(id.to_string()))
            .collect();
    }
}
