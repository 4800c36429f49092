//! Corrections applied to known defective legacy objects after they are read.

use store::{ObjectType, SourceGame};

use crate::context::ReadContext;
use crate::descriptor::{Identity, ObjectDescriptor};

/// Legacy small scenery published without a scenery group, and the group they belong to.
const SCENERY_GROUP_REMAPS: &[(&str, &str)] = &[
    ("TTRFTL02", "rct2.scenery_group.scgabstr"),
    ("TTRFTL03", "rct2.scenery_group.scgabstr"),
    ("TTRFTL04", "rct2.scenery_group.scgabstr"),
    ("TTRFTL07", "rct2.scenery_group.scgabstr"),
    ("TTRFTL08", "rct2.scenery_group.scgabstr"),
    ("TTPIRF05", "rct2.scenery_group.scgpirat"),
    ("TTPIRF07", "rct2.scenery_group.scgpirat"),
    ("TTPIRF08", "rct2.scenery_group.scgpirat"),
    ("TTRFWD01", "rct2.scenery_group.scgmine"),
    ("TTRFWD02", "rct2.scenery_group.scgmine"),
    ("TTRFWD03", "rct2.scenery_group.scgmine"),
    ("TTRFWD04", "rct2.scenery_group.scgmine"),
    ("TTRFWD05", "rct2.scenery_group.scgmine"),
    ("TTRFWD06", "rct2.scenery_group.scgmine"),
    ("TTRFWD07", "rct2.scenery_group.scgmine"),
    ("TTRFWD08", "rct2.scenery_group.scgmine"),
    ("TTRFGL01", "rct2.scenery_group.scgabstr"),
    ("TTRFGL02", "rct2.scenery_group.scgabstr"),
    ("TTRFGL03", "rct2.scenery_group.scgabstr"),
];

/// Scenery group that footpath signs of expansion and custom content are moved to.
pub const FOOTPATH_SIGNS_GROUP: &str = "rct2.scenery_group.scgpathx";

/// Legacy wall with a missing door sound.
const DOOR_SOUND_WALL: &str = "XXWLBR03";

/// Scenery group that the named legacy small scenery should be placed in.
pub fn small_scenery_group(descriptor: &ObjectDescriptor) -> Option<Identity> {
    let name = descriptor.legacy_entry()?.name();
    SCENERY_GROUP_REMAPS
        .iter()
        .find(|(object, _)| *object == name)
        .map(|(_, group)| Identity::Textual((*group).to_string()))
}

pub fn needs_door_sound(descriptor: &ObjectDescriptor) -> bool {
    descriptor.legacy_entry().is_some_and(|entry| entry.name() == DOOR_SOUND_WALL)
}

/// Path additions and banners of expansion and custom content are listed in
/// the footpath signs group instead of their own group, if that group is installed.
pub fn footpath_signs_group(ctx: &ReadContext<'_>, descriptor: &ObjectDescriptor) -> Option<Identity> {
    let entry = descriptor.legacy_entry()?;
    if !matches!(
        entry.source_game(),
        SourceGame::WackyWorlds | SourceGame::TimeTwister | SourceGame::Custom
    ) {
        return None;
    }
    let group = ObjectDescriptor::from_identifier(ObjectType::SceneryGroup, FOOTPATH_SIGNS_GROUP);
    ctx.lookup()?.contains(&group).then_some(group.identity)
}
