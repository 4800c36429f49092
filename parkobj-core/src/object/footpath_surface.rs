//! Footpath and queue surfaces.

use super::{Frame, Kind, Tables};
use crate::context::ReadContext;
use crate::json::{self, FlagKey, Properties};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct FootpathSurfaceFlags: u8 {
        const IS_QUEUE           = 1 << 0;
        const NO_SLOPE_RAILINGS  = 1 << 1;
        const EDITOR_ONLY        = 1 << 2;
        const _ = !0;
    }
}

const FLAG_KEYS: &[FlagKey<FootpathSurfaceFlags>] = &[
    FlagKey::normal("isQueue", FootpathSurfaceFlags::IS_QUEUE),
    FlagKey::normal("noSlopeRailings", FootpathSurfaceFlags::NO_SLOPE_RAILINGS),
    FlagKey::normal("editorOnly", FootpathSurfaceFlags::EDITOR_ONLY),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootpathSurface {
    pub flags: FootpathSurfaceFlags,
}

impl FootpathSurface {
    #[must_use]
    pub fn is_queue(&self) -> bool { self.flags.contains(FootpathSurfaceFlags::IS_QUEUE) }
}

impl Kind for FootpathSurface {
    fn read_json(&mut self, _: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.flags = json::flags(props, FLAG_KEYS);
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        vec![Frame { index: 71, x: width / 2 - 16, y: height / 2 }]
    }
}
