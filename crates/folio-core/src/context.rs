//! Explicitly constructed animation context.
//!
//! One context is created at application start and handed by reference to
//! whatever needs per-frame updates. Systems keep their mutable state in their
//! own struct and receive it as `&mut self` every frame.

use crate::clock::{FrameClock, FrameInfo};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Anything that wants to be called once per rendered frame.
pub trait FrameSystem {
    fn on_frame(&mut self, frame: &FrameInfo);
}

/// Registration token returned by [`AnimationContext::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

#[derive(Default)]
pub struct AnimationContext {
    clock: FrameClock,
    next_id: u64,
    systems: SmallVec<[(FrameHandle, Rc<RefCell<dyn FrameSystem>>); 4]>,
}

impl AnimationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<S: FrameSystem + 'static>(&mut self, system: Rc<RefCell<S>>) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        let system: Rc<RefCell<dyn FrameSystem>> = system;
        self.systems.push((handle, system));
        log::debug!("[context] registered frame system {:?}", handle);
        handle
    }

    /// Drop a registration. Returns false if the handle was already gone.
    pub fn unregister(&mut self, handle: FrameHandle) -> bool {
        let before = self.systems.len();
        self.systems.retain(|(h, _)| *h != handle);
        let removed = self.systems.len() != before;
        if removed {
            log::debug!("[context] unregistered frame system {:?}", handle);
        }
        removed
    }

    /// Advance the clock by `dt` seconds and run every system in registration order.
    pub fn tick(&mut self, dt: f32) -> FrameInfo {
        let frame = self.clock.advance(dt);
        self.run(&frame);
        frame
    }

    pub fn tick_fixed(&mut self) -> FrameInfo {
        let frame = self.clock.advance_fixed();
        self.run(&frame);
        frame
    }

    pub fn reset(&mut self) {
        self.clock.reset();
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    fn run(&self, frame: &FrameInfo) {
        for (_, system) in &self.systems {
            // A system borrowed elsewhere (e.g. mid-teardown) sits this frame out.
            if let Ok(mut s) = system.try_borrow_mut() {
                s.on_frame(frame);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<(&'static str, u64)>>>,
    }

    impl FrameSystem for Recorder {
        fn on_frame(&mut self, frame: &FrameInfo) {
            self.log.borrow_mut().push((self.name, frame.index));
        }
    }

    #[test]
    fn systems_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = AnimationContext::new();
        for name in ["a", "b", "c"] {
            ctx.register(Rc::new(RefCell::new(Recorder {
                name,
                log: log.clone(),
            })));
        }
        ctx.tick_fixed();
        assert_eq!(*log.borrow(), vec![("a", 1), ("b", 1), ("c", 1)]);
    }

    #[test]
    fn unregistered_system_is_not_called() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = AnimationContext::new();
        let h = ctx.register(Rc::new(RefCell::new(Recorder {
            name: "gone",
            log: log.clone(),
        })));
        assert!(ctx.unregister(h));
        assert!(!ctx.unregister(h));
        ctx.tick(0.016);
        assert!(log.borrow().is_empty());
        assert!(ctx.is_empty());
    }

    #[test]
    fn borrowed_system_is_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sys = Rc::new(RefCell::new(Recorder {
            name: "busy",
            log: log.clone(),
        }));
        let mut ctx = AnimationContext::new();
        ctx.register(sys.clone());
        let _held = sys.borrow_mut();
        ctx.tick(0.016);
        assert!(log.borrow().is_empty());
    }
}
