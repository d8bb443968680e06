use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// A payload that records its value into a shared log when dropped.
pub(crate) struct Tracked {
    pub(crate) value: i32,
    log: Rc<RefCell<Vec<i32>>>,
}

impl Tracked {
    pub(crate) fn new(value: i32, log: &Rc<RefCell<Vec<i32>>>) -> Self {
        Self {
            value,
            log: Rc::clone(log),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.value);
    }
}

/// A payload that only counts how many instances were dropped.
pub(crate) struct Counted(Rc<Cell<usize>>);

impl Counted {
    pub(crate) fn new(drops: &Rc<Cell<usize>>) -> Self {
        Self(Rc::clone(drops))
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A payload that counts its drop and, when armed, panics afterwards.
pub(crate) struct PanicOnDrop {
    armed: bool,
    drops: Rc<Cell<usize>>,
}

impl PanicOnDrop {
    pub(crate) fn new(armed: bool, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            armed,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for PanicOnDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
        if self.armed {
            panic!("payload drop panicked");
        }
    }
}
