//! Simulation controller
//!
//! Two states: Paused (no frame requested) and Playing (exactly one frame
//! requested). The pending [`FrameHandle`] is the single source of truth
//! for which state we are in; it is released before a new one is acquired
//! and cancelled on pause, on every edit and on drop.

use crate::error::ControllerError;
use crate::scheduler::{FrameHandle, FrameScheduler};
use life_core::{CellAddress, CellView, EditIntent, Engine, GridError, TicksPerFrame};
use life_metrics::{FpsSnapshot, FrameProfiler};
use life_render::{RasterSurface, Renderer};
use life_services::{CoordinateMapper, PointerEvent, Settings, SurfaceRect};

pub struct SimulationController<E, S, R>
where
    E: Engine,
    S: FrameScheduler,
    R: RasterSurface,
{
    engine: E,
    scheduler: S,
    surface: R,
    renderer: Renderer,
    mapper: CoordinateMapper,
    profiler: FrameProfiler,
    ticks_per_frame: TicksPerFrame,
    autoplay: bool,
    pending: Option<FrameHandle>,
    frames_rendered: u64,
}

impl<E, S, R> SimulationController<E, S, R>
where
    E: Engine,
    S: FrameScheduler,
    R: RasterSurface,
{
    /// Build a paused controller. `start_ms` is the host clock at
    /// construction, the reference point for the first frame interval.
    pub fn new(
        engine: E,
        scheduler: S,
        surface: R,
        settings: &Settings,
        start_ms: f64,
    ) -> Result<Self, ControllerError> {
        settings.validate()?;

        let dims = engine.dims();
        if dims.width == 0 || dims.height == 0 {
            return Err(GridError::EmptyGrid {
                width: dims.width,
                height: dims.height,
            }
            .into());
        }

        let layout = settings.grid.layout(dims)?;
        let renderer = Renderer::new(layout, settings.grid.palette());
        renderer.check_surface(&surface)?;

        tracing::info!(
            width = dims.width,
            height = dims.height,
            cell_size = layout.cell_size(),
            ticks_per_frame = settings.playback.ticks_per_frame.get(),
            "simulation controller ready"
        );

        Ok(Self {
            engine,
            scheduler,
            surface,
            renderer,
            mapper: CoordinateMapper::new(layout),
            profiler: FrameProfiler::with_window(start_ms, settings.profiler.window),
            ticks_per_frame: settings.playback.ticks_per_frame,
            autoplay: settings.playback.autoplay,
            pending: None,
            frames_rendered: 0,
        })
    }

    /// Paint the initial state, then start playing if autoplay is on.
    pub fn start(&mut self) {
        self.render();
        if self.autoplay {
            self.play(self.ticks_per_frame);
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.pending.is_none()
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.pending.is_some()
    }

    /// Enter Playing and request the first frame. Already playing: the
    /// pending request is cancelled and replaced.
    pub fn play(&mut self, ticks_per_frame: impl Into<TicksPerFrame>) {
        self.ticks_per_frame = ticks_per_frame.into();
        self.release_pending();
        let handle = self.scheduler.request_frame();
        self.pending = Some(handle);
        tracing::debug!(
            handle = %handle,
            ticks_per_frame = self.ticks_per_frame.get(),
            "playing"
        );
    }

    /// Enter Paused, cancelling the pending frame. No-op when paused.
    pub fn pause(&mut self) {
        if self.release_pending() {
            tracing::debug!("paused");
        }
    }

    /// Play with the current ticks per frame, or pause.
    pub fn toggle(&mut self) {
        if self.is_paused() {
            self.play(self.ticks_per_frame);
        } else {
            self.pause();
        }
    }

    /// Takes effect from the next frame.
    pub fn set_ticks_per_frame(&mut self, ticks_per_frame: impl Into<TicksPerFrame>) {
        self.ticks_per_frame = ticks_per_frame.into();
    }

    pub fn ticks_per_frame(&self) -> TicksPerFrame {
        self.ticks_per_frame
    }

    /// Play/pause button face: what pressing it would do.
    pub fn play_pause_label(&self) -> &'static str {
        if self.is_paused() {
            "▶"
        } else {
            "⏸"
        }
    }

    /// Run one frame iteration for a fired request.
    ///
    /// Returns false, doing nothing, when `handle` is not the pending
    /// request (cancelled or superseded).
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) -> bool {
        if self.pending != Some(handle) {
            tracing::trace!(handle = %handle, "ignoring stale frame");
            return false;
        }
        self.pending = None;

        let ticks = self.ticks_per_frame.get();
        for _ in 0..ticks {
            self.engine.advance();
        }
        self.render();
        let fps = self.profiler.record(now_ms);

        let next = self.scheduler.request_frame();
        self.pending = Some(next);
        tracing::trace!(handle = %handle, next = %next, ticks, fps = fps.latest, "frame");
        true
    }

    fn release_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                self.scheduler.cancel_frame(handle);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Edits: always pause first, then redraw once
    // ------------------------------------------------------------------

    /// Randomize, then redraw. No generation is advanced afterwards.
    pub fn randomize(&mut self) {
        self.pause();
        self.engine.randomize_cells();
        tracing::debug!("randomized cells");
        self.render();
    }

    pub fn kill_all(&mut self) {
        self.pause();
        self.engine.kill_all_cells();
        tracing::debug!("killed all cells");
        self.render();
    }

    pub fn apply(&mut self, intent: EditIntent) {
        self.pause();
        intent.apply(&mut self.engine);
        tracing::debug!(edit = intent.name(), cell = %intent.cell(), "applied edit");
        self.render();
    }

    pub fn toggle_cell(&mut self, cell: CellAddress) {
        self.apply(EditIntent::Toggle(cell));
    }

    pub fn insert_glider(&mut self, cell: CellAddress) {
        self.apply(EditIntent::Glider(cell));
    }

    pub fn insert_pulsar(&mut self, cell: CellAddress) {
        self.apply(EditIntent::Pulsar(cell));
    }

    /// Resolve a click on the surface, whose on-screen bounds are `rect`,
    /// and apply the resulting edit.
    pub fn on_pointer(&mut self, event: &PointerEvent, rect: SurfaceRect) -> EditIntent {
        let intent = self.mapper.resolve(event, rect, self.surface.size());
        self.apply(intent);
        intent
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Decode the engine's current cells and redraw the whole surface.
    ///
    /// The view is bound fresh for this pass only.
    pub fn render(&mut self) {
        match CellView::bind(&self.engine) {
            Ok(cells) => match self.renderer.draw(&mut self.surface, &cells) {
                Ok(()) => self.frames_rendered += 1,
                Err(err) => tracing::error!(%err, "render pass failed"),
            },
            Err(err) => tracing::error!(%err, "skipping render pass"),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Bind a read-only view of the current cells.
    pub fn cells(&self) -> Result<CellView<'_>, GridError> {
        CellView::bind(&self.engine)
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Full redraws performed so far, including those after edits.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn fps(&self) -> Option<FpsSnapshot> {
        self.profiler.snapshot()
    }
}

impl<E, S, R> Drop for SimulationController<E, S, R>
where
    E: Engine,
    S: FrameScheduler,
    R: RasterSurface,
{
    fn drop(&mut self) {
        self.release_pending();
    }
}
