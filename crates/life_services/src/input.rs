//! Pointer input translation
//!
//! Maps a click in client (logical) coordinates to the grid cell under it
//! and decides which edit the click asks for.

use glam::{DVec2, UVec2};
use life_core::{CellAddress, EditIntent};
use life_render::GridLayout;

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    /// Command on macOS, the Windows key elsewhere.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, meta: false };

    /// Meta stamps a glider, shift a pulsar, a plain click toggles. Meta
    /// wins when both are held.
    pub fn intent_at(self, cell: CellAddress) -> EditIntent {
        if self.meta {
            EditIntent::Glider(cell)
        } else if self.shift {
            EditIntent::Pulsar(cell)
        } else {
            EditIntent::Toggle(cell)
        }
    }
}

/// A pointer click in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client: DVec2,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64, modifiers: Modifiers) -> Self {
        Self {
            client: DVec2::new(client_x, client_y),
            modifiers,
        }
    }
}

/// On-screen bounding rectangle of the surface, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(left, top),
            size: DVec2::new(width, height),
        }
    }
}

/// Client coordinates to cell addresses.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    layout: GridLayout,
}

impl CoordinateMapper {
    pub fn new(layout: GridLayout) -> Self {
        Self { layout }
    }

    /// Physical pixels per logical pixel on each axis.
    pub fn scale(rect: SurfaceRect, physical: UVec2) -> DVec2 {
        physical.as_dvec2() / rect.size
    }

    /// The cell under `client`, clamped onto the grid.
    ///
    /// Clicks on the outer border or outside the surface land on the
    /// nearest edge cell; the final separator line sits one pixel past the
    /// last cell.
    pub fn map(&self, client: DVec2, rect: SurfaceRect, physical: UVec2) -> CellAddress {
        let local = (client - rect.origin) * Self::scale(rect, physical);
        let cell = (local / f64::from(self.layout.pitch())).floor();
        self.layout.dims().clamp(cell.y as i64, cell.x as i64)
    }

    pub fn resolve(&self, event: &PointerEvent, rect: SurfaceRect, physical: UVec2) -> EditIntent {
        let cell = self.map(event.client, rect, physical);
        event.modifiers.intent_at(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::GridDims;

    fn mapper() -> (CoordinateMapper, UVec2) {
        let layout = GridLayout::new(5, GridDims::new(64, 48)).unwrap();
        (CoordinateMapper::new(layout), layout.surface_size())
    }

    fn cell_center(row: u32, column: u32) -> DVec2 {
        // pitch 6, fill starts one pixel in, 5 pixels wide
        DVec2::new(column as f64 * 6.0 + 3.5, row as f64 * 6.0 + 3.5)
    }

    #[test]
    fn centers_round_trip_at_each_scale() {
        let (mapper, physical) = mapper();
        let origin = DVec2::new(13.25, 40.0);

        for scale in [1.0, 2.0, 0.5] {
            let logical = physical.as_dvec2() / scale;
            let rect = SurfaceRect {
                origin,
                size: logical,
            };

            for row in 0..48 {
                for column in 0..64 {
                    let client = origin + cell_center(row, column) / scale;
                    assert_eq!(
                        mapper.map(client, rect, physical),
                        CellAddress::new(row, column),
                        "scale {scale}"
                    );
                }
            }
        }
    }

    #[test]
    fn outside_clicks_clamp_to_edges() {
        let (mapper, physical) = mapper();
        let rect = SurfaceRect::new(100.0, 100.0, physical.x as f64, physical.y as f64);

        assert_eq!(mapper.map(DVec2::new(0.0, 0.0), rect, physical), CellAddress::new(0, 0));
        assert_eq!(
            mapper.map(DVec2::new(5000.0, 5000.0), rect, physical),
            CellAddress::new(47, 63)
        );
        assert_eq!(
            mapper.map(DVec2::new(5000.0, 103.0), rect, physical),
            CellAddress::new(0, 63)
        );
        assert_eq!(
            mapper.map(DVec2::new(50.0, 5000.0), rect, physical),
            CellAddress::new(47, 0)
        );
    }

    #[test]
    fn last_border_pixel_is_last_cell() {
        let (mapper, physical) = mapper();
        let rect = SurfaceRect::new(0.0, 0.0, physical.x as f64, physical.y as f64);

        // x = 384 is the closing separator column
        let client = DVec2::new(384.5, 288.5);
        assert_eq!(mapper.map(client, rect, physical), CellAddress::new(47, 63));
    }

    #[test]
    fn degenerate_rect_stays_on_grid() {
        let (mapper, physical) = mapper();
        let rect = SurfaceRect::new(0.0, 0.0, 0.0, 0.0);

        let cell = mapper.map(DVec2::new(10.0, 10.0), rect, physical);
        assert!(GridDims::new(64, 48).contains(cell));
    }

    #[test]
    fn modifiers_pick_intent() {
        let cell = CellAddress::new(2, 9);
        assert_eq!(Modifiers::NONE.intent_at(cell), EditIntent::Toggle(cell));
        assert_eq!(
            Modifiers { meta: true, shift: false }.intent_at(cell),
            EditIntent::Glider(cell)
        );
        assert_eq!(
            Modifiers { meta: false, shift: true }.intent_at(cell),
            EditIntent::Pulsar(cell)
        );
        assert_eq!(
            Modifiers { meta: true, shift: true }.intent_at(cell),
            EditIntent::Glider(cell)
        );
    }

    #[test]
    fn resolve_combines_mapping_and_modifiers() {
        let (mapper, physical) = mapper();
        let rect = SurfaceRect::new(0.0, 0.0, physical.x as f64, physical.y as f64);
        let event = PointerEvent::new(33.5, 33.5, Modifiers { meta: false, shift: true });

        assert_eq!(
            mapper.resolve(&event, rect, physical),
            EditIntent::Pulsar(CellAddress::new(5, 5))
        );
    }
}
