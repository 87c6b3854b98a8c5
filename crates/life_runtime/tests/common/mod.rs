#![allow(dead_code)]

use life_core::{packed_len, CellAddress, Engine, GridDims};
use life_render::PixelSurface;
use life_runtime::{FrameHandle, FrameScheduler, ManualScheduler, SimulationController};
use life_services::Settings;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

/// Every call the driver made into its collaborators, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Advance,
    /// The cell buffer was borrowed for decoding.
    Read,
    Toggle(u32, u32),
    Randomize,
    KillAll,
    Glider(u32, u32),
    Pulsar(u32, u32),
    RequestFrame,
    CancelFrame,
}

impl Call {
    /// Whether the call changes cell state.
    pub fn is_edit(self) -> bool {
        !matches!(self, Call::Advance | Call::Read | Call::RequestFrame | Call::CancelFrame)
    }
}

/// Call log shared between doubles, so their calls interleave.
pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Engine double: bit-packed storage with no transition rule. Stamps set
/// only their anchor cell.
pub struct FakeEngine {
    dims: GridDims,
    cells: Vec<u8>,
    rng: StdRng,
    short_buffer: bool,
    log: CallLog,
}

impl FakeEngine {
    pub fn new(width: u32, height: u32) -> Self {
        let dims = GridDims::new(width, height);
        Self {
            dims,
            cells: vec![0; packed_len(dims.cell_count())],
            rng: StdRng::seed_from_u64(7),
            short_buffer: false,
            log: CallLog::default(),
        }
    }

    /// An engine writing into `log` instead of its own.
    pub fn logging_to(width: u32, height: u32, log: &CallLog) -> Self {
        Self {
            log: Rc::clone(log),
            ..Self::new(width, height)
        }
    }

    /// An engine whose buffer is shorter than its grid needs.
    pub fn with_short_buffer(width: u32, height: u32) -> Self {
        Self {
            short_buffer: true,
            ..Self::new(width, height)
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn edits(&self) -> Vec<Call> {
        self.log.borrow().iter().copied().filter(|call| call.is_edit()).collect()
    }

    pub fn advances(&self) -> usize {
        self.log.borrow().iter().filter(|&&call| call == Call::Advance).count()
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }

    fn set(&mut self, row: u32, column: u32, alive: bool) {
        let index = self.dims.index_of(CellAddress::new(row, column));
        let mask = 1u8 << (index % 8);
        if alive {
            self.cells[index / 8] |= mask;
        } else {
            self.cells[index / 8] &= !mask;
        }
    }

    fn get(&self, row: u32, column: u32) -> bool {
        let index = self.dims.index_of(CellAddress::new(row, column));
        self.cells[index / 8] & (1 << (index % 8)) != 0
    }
}

impl Engine for FakeEngine {
    fn width(&self) -> u32 {
        self.dims.width
    }

    fn height(&self) -> u32 {
        self.dims.height
    }

    fn advance(&mut self) {
        self.record(Call::Advance);
    }

    fn cell_bytes(&self) -> &[u8] {
        self.record(Call::Read);
        if self.short_buffer {
            &self.cells[..self.cells.len() / 2]
        } else {
            &self.cells
        }
    }

    fn toggle_cell(&mut self, row: u32, column: u32) {
        self.record(Call::Toggle(row, column));
        let alive = self.get(row, column);
        self.set(row, column, !alive);
    }

    fn randomize_cells(&mut self) {
        self.record(Call::Randomize);
        // fresh allocation, like an engine that relocates its buffer
        let len = self.cells.len();
        self.cells = (0..len).map(|_| self.rng.gen()).collect();
    }

    fn kill_all_cells(&mut self) {
        self.record(Call::KillAll);
        self.cells.fill(0);
    }

    fn insert_glider(&mut self, row: u32, column: u32) {
        self.record(Call::Glider(row, column));
        self.set(row, column, true);
    }

    fn insert_pulsar(&mut self, row: u32, column: u32) {
        self.record(Call::Pulsar(row, column));
        self.set(row, column, true);
    }
}

pub type TestController = SimulationController<FakeEngine, ManualScheduler, PixelSurface>;

/// [`ManualScheduler`] that also writes its requests and cancels into a
/// shared log.
#[derive(Clone)]
pub struct LoggingScheduler {
    pub inner: ManualScheduler,
    log: CallLog,
}

impl LoggingScheduler {
    pub fn new(log: &CallLog) -> Self {
        Self {
            inner: ManualScheduler::new(),
            log: Rc::clone(log),
        }
    }
}

impl FrameScheduler for LoggingScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.log.borrow_mut().push(Call::RequestFrame);
        self.inner.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.log.borrow_mut().push(Call::CancelFrame);
        self.inner.cancel_frame(handle);
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Settings that leave the controller paused after `start`.
pub fn paused_settings() -> Settings {
    let mut settings = Settings::default();
    settings.playback.autoplay = false;
    settings
}

/// A controller over `engine` plus the host's handle on its scheduler.
pub fn controller_for(engine: FakeEngine, settings: &Settings) -> (TestController, ManualScheduler) {
    init_tracing();
    let scheduler = ManualScheduler::new();
    let surface = PixelSurface::for_layout(&settings.grid.layout(engine.dims()).unwrap()).unwrap();
    let controller =
        SimulationController::new(engine, scheduler.clone(), surface, settings, 0.0).unwrap();
    (controller, scheduler)
}

pub fn controller(width: u32, height: u32) -> (TestController, ManualScheduler) {
    controller_for(FakeEngine::new(width, height), &paused_settings())
}

/// Fire the oldest pending frame at `now_ms`. Returns whether an iteration ran.
pub fn fire(controller: &mut TestController, host: &ManualScheduler, now_ms: f64) -> bool {
    match host.fire_next() {
        Some(handle) => controller.on_frame(handle, now_ms),
        None => false,
    }
}
