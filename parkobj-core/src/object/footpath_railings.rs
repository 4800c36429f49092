//! Railings and supports drawn along footpaths.

use super::footpath::{SupportType, read_json_support_type};
use super::{Frame, Kind, Tables};
use crate::context::ReadContext;
use crate::json::{self, FlagKey, Properties};
use crate::lookup::Colour;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct RailingsFlags: u8 {
        const HAS_SUPPORT_IMAGES      = 1 << 0;
        const HAS_ELEVATED_PATH_IMAGES = 1 << 1;
        const SUPPORTS_HAVE_COLOUR    = 1 << 2;
        const NO_QUEUE_BANNER         = 1 << 3;
        const _ = !0;
    }
}

const FLAG_KEYS: &[FlagKey<RailingsFlags>] = &[
    FlagKey::normal("hasSupportImages", RailingsFlags::HAS_SUPPORT_IMAGES),
    FlagKey::normal("hasElevatedPathImages", RailingsFlags::HAS_ELEVATED_PATH_IMAGES),
    FlagKey::normal("supportsHaveSecondaryColour", RailingsFlags::SUPPORTS_HAVE_COLOUR),
    FlagKey::normal("noQueueBanner", RailingsFlags::NO_QUEUE_BANNER),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootpathRailings {
    pub support_type:   SupportType,
    pub scrolling_mode: u8,
    /// Colour of the supports, if they are tinted.
    pub colour:         Colour,
    pub flags:          RailingsFlags,
}

impl Kind for FootpathRailings {
    fn read_json(&mut self, ctx: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.support_type = read_json_support_type(ctx, props);
        self.scrolling_mode = json::int(props, "scrollingMode", 0);
        self.colour = json::colour(props, "colour", Colour::Black);
        self.flags = json::flags(props, FLAG_KEYS);
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        vec![Frame { index: 1, x: width / 2 - 16, y: height / 2 }]
    }
}
