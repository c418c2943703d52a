//! Recording collaborators for lifecycle tests.
//!
//! Every mock shares one [`Log`], so a test sees the exact order in which
//! probe and remove touch the mapper, the clock tree, the pin controller and
//! the registry. A [`Fault`] makes one collaborator call fail.

use std::cell::RefCell;
use std::rc::Rc;

use log::{Level, LevelFilter, Metadata, Record};

use crate::clock::{ClockProvider, Hertz};
use crate::descriptors::{DaiDriver, DmaBinding};
use crate::gpio::{PinControl, PinFunction, PinRange, PullMode};
use crate::lifecycle::Soc;
use crate::platform::DaiRegistry;
use crate::regs::{PhysAddr, RegisterMapper, RegisterWindow};

/// Words in the mock register file (a 0x100-byte window).
pub const REG_WORDS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Map(PhysAddr),
    Unmap(PhysAddr),
    ClockGet(&'static str),
    ClockPut(&'static str),
    SetParent(&'static str, &'static str),
    Enable(&'static str),
    Disable(&'static str),
    PinConfig(PinRange, PinFunction, PullMode),
    PinRelease(PinRange),
    Register(&'static str),
    Unregister(&'static str),
}

/// Which collaborator call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Map,
    ClockGet(&'static str),
    SetParent,
    Enable,
    Pins,
    Register,
}

#[derive(Debug)]
pub struct MockError;

#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.0.borrow().iter().filter(|e| *e == event).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

fn intern(name: &str) -> &'static str {
    String::from(name).leak()
}

// ── Registers ──────────────────────────────────────────────────────────────

pub struct MockWindow {
    base: PhysAddr,
    regs: Rc<RefCell<[u32; REG_WORDS]>>,
}

impl RegisterWindow for MockWindow {
    fn read32(&self, offset: usize) -> u32 {
        self.regs.borrow()[offset / 4]
    }

    fn write32(&mut self, offset: usize, value: u32) {
        self.regs.borrow_mut()[offset / 4] = value;
    }
}

pub struct MockMapper {
    log: Log,
    fail: bool,
    pub regs: Rc<RefCell<[u32; REG_WORDS]>>,
}

impl RegisterMapper for MockMapper {
    type Window = MockWindow;
    type Error = MockError;

    fn map(&mut self, phys: PhysAddr, size: usize) -> Result<MockWindow, MockError> {
        if self.fail || size > REG_WORDS * 4 {
            return Err(MockError);
        }
        self.log.push(Event::Map(phys));
        Ok(MockWindow {
            base: phys,
            regs: Rc::clone(&self.regs),
        })
    }

    fn unmap(&mut self, window: MockWindow) {
        self.log.push(Event::Unmap(window.base));
    }
}

// ── Clocks ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct MockClock {
    pub name: &'static str,
}

pub struct MockClocks {
    log: Log,
    fault: Option<Fault>,
    pub rate: Hertz,
}

impl ClockProvider for MockClocks {
    type Clock = MockClock;
    type Error = MockError;

    fn get(&mut self, name: &str) -> Result<MockClock, MockError> {
        if let Some(Fault::ClockGet(missing)) = self.fault {
            if missing == name {
                return Err(MockError);
            }
        }
        let name = intern(name);
        self.log.push(Event::ClockGet(name));
        Ok(MockClock { name })
    }

    fn set_parent(&mut self, clock: &MockClock, parent: &MockClock) -> Result<(), MockError> {
        if self.fault == Some(Fault::SetParent) {
            return Err(MockError);
        }
        self.log.push(Event::SetParent(clock.name, parent.name));
        Ok(())
    }

    fn enable(&mut self, clock: &MockClock) -> Result<(), MockError> {
        if self.fault == Some(Fault::Enable) {
            return Err(MockError);
        }
        self.log.push(Event::Enable(clock.name));
        Ok(())
    }

    fn disable(&mut self, clock: &MockClock) {
        self.log.push(Event::Disable(clock.name));
    }

    fn put(&mut self, clock: MockClock) {
        self.log.push(Event::ClockPut(clock.name));
    }

    fn rate(&self, _clock: &MockClock) -> Hertz {
        self.rate
    }
}

// ── Pins ───────────────────────────────────────────────────────────────────

pub struct MockPins {
    log: Log,
    fail: bool,
}

impl PinControl for MockPins {
    type Error = MockError;

    fn configure_range(
        &mut self,
        range: PinRange,
        function: PinFunction,
        pull: PullMode,
    ) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        self.log.push(Event::PinConfig(range, function, pull));
        Ok(())
    }

    fn release_range(&mut self, range: PinRange) {
        self.log.push(Event::PinRelease(range));
    }
}

// ── Registry ───────────────────────────────────────────────────────────────

pub struct MockRegistry {
    log: Log,
    fail: bool,
    pub registered: Option<(&'static DaiDriver, &'static DmaBinding)>,
}

impl DaiRegistry for MockRegistry {
    type Error = MockError;

    fn register(
        &mut self,
        dai: &'static DaiDriver,
        dma: &'static DmaBinding,
    ) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        self.log.push(Event::Register(dai.name));
        self.registered = Some((dai, dma));
        Ok(())
    }

    fn unregister(&mut self, name: &str) {
        self.log.push(Event::Unregister(intern(name)));
        self.registered = None;
    }
}

// ── Harness ────────────────────────────────────────────────────────────────

pub type MockSoc = Soc<MockMapper, MockClocks, MockPins>;

pub struct Harness {
    pub soc: MockSoc,
    pub registry: MockRegistry,
    pub log: Log,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn failing(fault: Fault) -> Self {
        Self::build(Some(fault))
    }

    fn build(fault: Option<Fault>) -> Self {
        let log = Log::default();
        let soc = Soc::new(
            MockMapper {
                log: log.clone(),
                fail: fault == Some(Fault::Map),
                regs: Rc::new(RefCell::new([0; REG_WORDS])),
            },
            MockClocks {
                log: log.clone(),
                fault,
                rate: Hertz(12_288_000),
            },
            MockPins {
                log: log.clone(),
                fail: fault == Some(Fault::Pins),
            },
        );
        let registry = MockRegistry {
            log: log.clone(),
            fail: fault == Some(Fault::Register),
            registered: None,
        };
        Harness { soc, registry, log }
    }

    /// Current value of the register at byte `offset`.
    pub fn reg(&self, offset: usize) -> u32 {
        self.soc.mapper.regs.borrow()[offset / 4]
    }

    pub fn set_reg(&self, offset: usize, value: u32) {
        self.soc.mapper.regs.borrow_mut()[offset / 4] = value;
    }
}

// ── Log capture ────────────────────────────────────────────────────────────

std::thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Logger that keeps each test thread's records apart.
struct ThreadLogger;

impl log::Log for ThreadLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: ThreadLogger = ThreadLogger;

/// Start capturing log records emitted on this thread.
pub fn capture_logs() {
    // Another test may have installed it already.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Messages captured on this thread at `level`.
pub fn logged(level: Level) -> Vec<String> {
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}
