//! Land surface textures.

use super::{Frame, Kind, Tables};
use crate::context::ReadContext;
use crate::json::{self, FlagKey, Properties};
use crate::lookup::Colour;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct TerrainSurfaceFlags: u8 {
        const SMOOTH_WITH_SELF  = 1 << 0;
        const SMOOTH_WITH_OTHER = 1 << 1;
        const CAN_GROW          = 1 << 2;
        const _ = !0;
    }
}

const FLAG_KEYS: &[FlagKey<TerrainSurfaceFlags>] = &[
    FlagKey::normal("smoothWithSelf", TerrainSurfaceFlags::SMOOTH_WITH_SELF),
    FlagKey::normal("smoothWithOther", TerrainSurfaceFlags::SMOOTH_WITH_OTHER),
    FlagKey::normal("canGrow", TerrainSurfaceFlags::CAN_GROW),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainSurface {
    /// Map colour, if the surface has one.
    pub colour:    Option<Colour>,
    pub rotations: u8,
    pub price:     i16,
    pub flags:     TerrainSurfaceFlags,
}

impl Default for TerrainSurface {
    fn default() -> Self {
        Self { colour: None, rotations: 1, price: 0, flags: TerrainSurfaceFlags::empty() }
    }
}

impl Kind for TerrainSurface {
    fn read_json(&mut self, _: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.colour = json::string(props, "colour").and_then(|name| name.parse().ok());
        self.rotations = json::int(props, "rotations", 1);
        self.price = json::int(props, "price", 0);
        self.flags = json::flags(props, FLAG_KEYS);
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        // Tile a flat surface image across the preview.
        let mut frames = Vec::new();
        for y in (0..height).step_by(16) {
            for x in (0..width).step_by(32) {
                frames.push(Frame { index: 0, x, y });
            }
        }
        frames
    }
}
