//! Sprite animations of guests and staff.

use std::collections::BTreeMap;

use serde_json::Value;

use super::{Frame, Kind, Tables};
use crate::context::{ObjectError, ReadContext};
use crate::json::{self, Properties};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum PeepType {
    #[default]
    Guest,
    Handyman,
    Mechanic,
    Security,
    Entertainer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Animation {
    /// Index of the first image of the animation in the object's image table.
    pub image_offset: u32,
    /// Frame indices relative to `image_offset`, in playback order.
    pub sequence:     Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationGroup {
    /// Legacy sprite type this group replaces, if any.
    pub legacy_position: Option<u8>,
    pub animations:      BTreeMap<String, Animation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeepAnimations {
    pub peep_type:           PeepType,
    pub no_random_placement: bool,
    pub slow_walking:        bool,
    pub groups:              Vec<AnimationGroup>,
}

impl Kind for PeepAnimations {
    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        let peep_type = json::string(props, "peepType").unwrap_or("guest");
        self.peep_type = peep_type.parse().unwrap_or_else(|_| {
            ctx.log_error(ObjectError::InvalidProperty, format!("Unknown peepType {peep_type}."));
            PeepType::Guest
        });
        self.no_random_placement = json::boolean(props, "noRandomPlacement", false);
        self.slow_walking = json::boolean(props, "isSlowWalking", false);

        self.groups = json::array(props, "animationGroups")
            .iter()
            .filter_map(Value::as_object)
            .map(|group| read_group(ctx, group))
            .collect();
        if self.groups.is_empty() {
            ctx.log_error(ObjectError::InvalidProperty, "No animation groups defined.");
        }
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        let index = self
            .groups
            .first()
            .and_then(|group| group.animations.get("walking"))
            .map_or(0, |animation| animation.image_offset);
        vec![Frame::centered(index, width, height)]
    }
}

fn read_group(ctx: &mut ReadContext<'_>, group: &Properties) -> AnimationGroup {
    let legacy_position = group.get("legacyPosition").and_then(Value::as_u64);
    let mut animations = BTreeMap::new();
    if let Some(entries) = json::object(group, "animations") {
        for (name, entry) in entries {
            let Some(entry) = entry.as_object() else {
                ctx.log_warning(ObjectError::InvalidProperty, format!("Invalid animation {name}."));
                continue;
            };
            let sequence = json::array(entry, "sequence")
                .iter()
                .filter_map(Value::as_u64)
                .filter_map(|frame| u8::try_from(frame).ok())
                .collect();
            animations.insert(name.clone(), Animation {
                image_offset: json::int(entry, "offset", 0),
                sequence,
            });
        }
    }
    AnimationGroup { legacy_position: legacy_position.and_then(|p| u8::try_from(p).ok()), animations }
}
