//! Grid renderer

use crate::color::Palette;
use crate::layout::GridLayout;
use crate::surface::{GridLine, RasterSurface, SurfaceError};
use life_core::{CellAddress, CellView};

/// Paints the separator lattice and every cell of a grid.
///
/// Every call redraws the full grid.
#[derive(Debug, Clone)]
pub struct Renderer {
    layout: GridLayout,
    palette: Palette,
}

impl Renderer {
    pub fn new(layout: GridLayout, palette: Palette) -> Self {
        Self { layout, palette }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Fail if `surface` cannot hold the whole grid.
    pub fn check_surface<S: RasterSurface + ?Sized>(&self, surface: &S) -> Result<(), SurfaceError> {
        let required = self.layout.surface_size();
        let actual = surface.size();
        if actual.x < required.x || actual.y < required.y {
            return Err(SurfaceError::TooSmall { required, actual });
        }
        Ok(())
    }

    /// Stroke vertical and horizontal separators one pitch apart, regardless
    /// of cell state.
    pub fn draw_grid<S: RasterSurface + ?Sized>(&self, surface: &mut S) {
        let pitch = self.layout.pitch();
        let dims = self.layout.dims();

        for i in 0..=dims.width {
            surface.stroke_line(GridLine::Vertical(i * pitch), self.palette.grid);
        }
        for i in 0..=dims.height {
            surface.stroke_line(GridLine::Horizontal(i * pitch), self.palette.grid);
        }
    }

    /// Fill each cell, row-major, with the alive or dead color.
    ///
    /// Fails without drawing when `cells` was decoded for other dimensions.
    pub fn draw_cells<S: RasterSurface + ?Sized>(
        &self,
        surface: &mut S,
        cells: &CellView<'_>,
    ) -> Result<(), SurfaceError> {
        let dims = self.layout.dims();
        if cells.dims() != dims {
            return Err(SurfaceError::ViewMismatch {
                layout: dims,
                view: cells.dims(),
            });
        }

        let extent = self.layout.cell_extent();
        for row in 0..dims.height {
            for column in 0..dims.width {
                let cell = CellAddress::new(row, column);
                let color = if cells.is_alive(cell) {
                    self.palette.alive
                } else {
                    self.palette.dead
                };
                surface.fill_rect(self.layout.cell_origin(cell), extent, color);
            }
        }
        Ok(())
    }

    /// Full redraw: lattice, then cells.
    pub fn draw<S: RasterSurface + ?Sized>(
        &self,
        surface: &mut S,
        cells: &CellView<'_>,
    ) -> Result<(), SurfaceError> {
        self.draw_grid(surface);
        self.draw_cells(surface, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::surface::PixelSurface;
    use glam::UVec2;
    use life_core::GridDims;

    fn renderer(width: u32, height: u32) -> Renderer {
        Renderer::new(
            GridLayout::new(2, GridDims::new(width, height)).unwrap(),
            Palette::default(),
        )
    }

    #[test]
    fn draws_lattice_and_cells() {
        let renderer = renderer(2, 2);
        let mut surface = PixelSurface::for_layout(renderer.layout()).unwrap();
        assert_eq!(surface.size(), UVec2::new(7, 7));

        // only cell (0, 1) alive
        let bytes = [0b0000_0010u8];
        let cells = CellView::new(&bytes, GridDims::new(2, 2)).unwrap();
        renderer.draw(&mut surface, &cells).unwrap();

        let palette = Palette::default();
        for i in [0, 3, 6] {
            assert_eq!(surface.pixel(i, 4), Some(palette.grid));
            assert_eq!(surface.pixel(4, i), Some(palette.grid));
        }
        for (x, y) in [(4, 1), (5, 1), (4, 2), (5, 2)] {
            assert_eq!(surface.pixel(x, y), Some(palette.alive));
        }
        for (x, y) in [(1, 1), (2, 2), (1, 4), (5, 5)] {
            assert_eq!(surface.pixel(x, y), Some(palette.dead));
        }
    }

    #[test]
    fn redraw_replaces_previous_state() {
        let renderer = renderer(2, 1);
        let mut surface = PixelSurface::for_layout(renderer.layout()).unwrap();
        let dims = GridDims::new(2, 1);

        renderer.draw(&mut surface, &CellView::new(&[0b01], dims).unwrap()).unwrap();
        assert_eq!(surface.pixel(1, 1), Some(Rgba::BLACK));

        renderer.draw(&mut surface, &CellView::new(&[0b10], dims).unwrap()).unwrap();
        assert_eq!(surface.pixel(1, 1), Some(Rgba::WHITE));
        assert_eq!(surface.pixel(4, 1), Some(Rgba::BLACK));
    }

    #[test]
    fn rejects_small_surface() {
        let renderer = renderer(4, 4);
        let surface = PixelSurface::new(8, 8).unwrap();
        assert!(matches!(
            renderer.check_surface(&surface),
            Err(SurfaceError::TooSmall { .. })
        ));
    }

    #[test]
    fn rejects_view_of_other_dims() {
        let renderer = renderer(16, 16);
        let mut surface = PixelSurface::for_layout(renderer.layout()).unwrap();
        let bytes = [0xFFu8];
        let cells = CellView::new(&bytes, GridDims::new(8, 1)).unwrap();

        assert_eq!(
            renderer.draw_cells(&mut surface, &cells),
            Err(SurfaceError::ViewMismatch {
                layout: GridDims::new(16, 16),
                view: GridDims::new(8, 1),
            })
        );
        // nothing painted black
        assert!(surface.pixels().iter().all(|&pixel| pixel != Rgba::BLACK));
    }
}
