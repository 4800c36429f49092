//! Cliff faces shown on the sides of raised land.

use super::{Frame, Kind, Tables};
use crate::context::ReadContext;
use crate::json::{self, Properties};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainEdge {
    pub has_doors:           bool,
    pub num_images_per_view: u8,
}

impl Default for TerrainEdge {
    fn default() -> Self { Self { has_doors: false, num_images_per_view: 1 } }
}

impl Kind for TerrainEdge {
    fn read_json(&mut self, _: &mut ReadContext<'_>, props: &Properties, _: &mut Tables<'_>) {
        self.has_doors = json::boolean(props, "hasDoors", false);
        self.num_images_per_view = json::int(props, "numImagesPerView", 1);
    }

    fn preview(&self, width: i32, height: i32) -> Vec<Frame> {
        let (x, y) = (width / 2, height / 2);
        vec![
            Frame { index: 5, x: x + 8, y: y - 8 },
            Frame { index: 5, x: x + 8, y: y + 8 },
            Frame { index: 6, x: x - 8, y: y - 8 },
            Frame { index: 6, x: x - 8, y: y + 8 },
        ]
    }
}
