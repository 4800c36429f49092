//! Ride station platforms.

use super::{Frame, Kind, Tables};
use crate::context::ReadContext;
use crate::json::{self, FlagKey, Properties};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct StationFlags: u8 {
        const HAS_PRIMARY_COLOUR   = 1 << 0;
        const HAS_SECONDARY_COLOUR = 1 << 1;
        const IS_TRANSPARENT       = 1 << 2;
        const NO_PLATFORMS         = 1 << 3;
        const HAS_SHELTER          = 1 << 4;
        const _ = !0;
    }
}

const FLAG_KEYS: &[FlagKey<StationFlags>] = &[
    FlagKey::normal("hasPrimaryColour", StationFlags::HAS_PRIMARY_COLOUR),
    FlagKey::normal("hasSecondaryColour", StationFlags::HAS_SECONDARY_COLOUR),
    FlagKey::normal("isTransparent", StationFlags::IS_TRANSPARENT),
    FlagKey::normal("noPlatforms", StationFlags::NO_PLATFORMS),
    FlagKey::normal("hasShelter", StationFlags::HAS_SHELTER),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub scrolling_mode: u8,
    pub height:         i32,
    pub flags:          StationFlags,
}

impl Default for Station {
    fn default() -> Self { Self { scrolling_mode: 0xFF, height: 0, flags: StationFlags::empty() } }
}

impl Kind for Station {
    fn read_json(&mut self, _: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.scrolling_mode = json::int(props, "scrollingMode", 0xFF);
        self.height = json::int(props, "heightOffset", 0);
        self.flags = json::flags(props, FLAG_KEYS);
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        let (x, y) = (width / 2, height / 2 + 16);
        let mut frames = vec![Frame { index: 0, x, y }];
        if self.flags.contains(StationFlags::IS_TRANSPARENT) {
            frames.push(Frame { index: 16, x, y });
        }
        frames.push(Frame { index: 4, x, y });
        frames
    }
}
