use crate::transport::Transport;

use core::cell::{Cell, RefCell};
use embedded_hal::delay::DelayNs;

std::thread_local! {
    static CRITICAL_SECTION_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Per-thread nesting counter, so each test observes only its own sections
struct TestCriticalSection;
critical_section::set_impl!(TestCriticalSection);

unsafe impl critical_section::Impl for TestCriticalSection {
    unsafe fn acquire() -> critical_section::RawRestoreState {
        CRITICAL_SECTION_DEPTH.with(|depth| depth.set(depth.get() + 1));
    }

    unsafe fn release(_restore_state: critical_section::RawRestoreState) {
        CRITICAL_SECTION_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

pub fn in_critical_section() -> bool {
    CRITICAL_SECTION_DEPTH.with(|depth| depth.get() > 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Begin,
    Byte(u8),
    Flush,
    Delay(u32),
    End,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FakeTransportError;

/// Shared record of everything the transport and delay were asked to do
pub struct EventLog<const N: usize> {
    events: RefCell<heapless::Vec<Event, N>>,
    unguarded: Cell<usize>,
}

impl<const N: usize> EventLog<N> {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(heapless::Vec::new()),
            unguarded: Cell::new(0),
        }
    }

    pub fn push(&self, event: Event) {
        if !in_critical_section() {
            self.unguarded.set(self.unguarded.get() + 1);
        }
        self.events.borrow_mut().push(event).unwrap();
    }

    /// Number of events recorded outside a critical section
    pub fn unguarded(&self) -> usize {
        self.unguarded.get()
    }

    pub fn events(&self) -> heapless::Vec<Event, N> {
        self.events.borrow().clone()
    }

    pub fn bytes(&self) -> heapless::Vec<u8, N> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Byte(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }
}

pub struct FakeTransport<'a, const N: usize> {
    log: &'a EventLog<N>,
    fail_init: bool,
}

impl<'a, const N: usize> FakeTransport<'a, N> {
    pub fn new(log: &'a EventLog<N>) -> Self {
        Self {
            log,
            fail_init: false,
        }
    }

    pub fn new_failing(log: &'a EventLog<N>) -> Self {
        Self {
            log,
            fail_init: true,
        }
    }
}

impl<const N: usize> Transport for FakeTransport<'_, N> {
    type Error = FakeTransportError;

    const SETTLE_DELAY_US: u32 = 200;

    fn init(&mut self) -> Result<(), FakeTransportError> {
        if self.fail_init {
            return Err(FakeTransportError);
        }
        Ok(())
    }

    fn begin_transaction(&mut self) {
        self.log.push(Event::Begin);
    }

    fn transfer(&mut self, byte: u8) {
        self.log.push(Event::Byte(byte));
    }

    fn flush(&mut self) {
        self.log.push(Event::Flush);
    }

    fn end_transaction(&mut self) {
        self.log.push(Event::End);
    }
}

pub struct FakeDelay<'a, const N: usize> {
    log: &'a EventLog<N>,
}

impl<'a, const N: usize> FakeDelay<'a, N> {
    pub fn new(log: &'a EventLog<N>) -> Self {
        Self { log }
    }
}

impl<const N: usize> DelayNs for FakeDelay<'_, N> {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::Delay(ns));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_section_test() {
        let log = EventLog::<4>::new();

        assert!(!in_critical_section());
        log.push(Event::Begin);

        critical_section::with(|_| {
            assert!(in_critical_section());
            critical_section::with(|_| log.push(Event::Flush));
            assert!(in_critical_section());
        });

        assert!(!in_critical_section());
        assert_eq!(log.unguarded(), 1);
    }
}
