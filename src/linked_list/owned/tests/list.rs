extern crate std;

use std::panic::{self, AssertUnwindSafe};
use std::vec;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use rand::Rng;

use crate::linked_list::{
    owned::OwnedList,
    test_util::{Counted, PanicOnDrop, Tracked},
    traits::List,
};

#[test]
fn test_owned_list_push_pop() {
    let mut list = OwnedList::new();
    assert!(list.is_empty());
    assert_eq!(list.pop(), None);

    list.push(1);
    list.push(2);
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());

    assert_eq!(list.pop(), Some(2));
    assert_eq!(list.len(), 1);

    list.push(3);
    assert_eq!(list.pop(), Some(3));
    assert_eq!(list.pop(), Some(1));
    assert_eq!(list.pop(), None);
    assert!(list.is_empty());
}

#[test]
fn test_owned_list_iter() {
    let mut list = OwnedList::new();
    list.push(10);
    list.push(20);
    list.push(30);

    let values: Vec<i32> = list.iter().copied().collect();
    assert_eq!(values, vec![30, 20, 10]);
    assert_eq!(list.iter().len(), 3);
}

#[test]
fn test_owned_list_random_pushes_come_back_reversed() {
    let mut rng = rand::rng();
    let pushed: Vec<i32> = (0..rng.random_range(0..500)).map(|_| rng.random()).collect();

    let mut list = OwnedList::new();
    let mut model = rpds::List::new();
    for &value in &pushed {
        list.push(value);
        model.push_front_mut(value);
    }

    assert_eq!(list.len(), pushed.len());
    assert!(list.iter().eq(model.iter()));
    assert!(list.iter().eq(pushed.iter().rev()));
}

#[test]
fn test_owned_list_peek() {
    let mut list = OwnedList::new();
    assert_eq!(list.peek(), None);
    assert_eq!(list.peek_mut(), None);

    list.push(1);
    list.push(2);
    assert_eq!(list.peek(), Some(&2));

    if let Some(value) = list.peek_mut() {
        *value = 42;
    }
    assert_eq!(list.peek(), Some(&42));
    assert_eq!(list.pop(), Some(42));
}

#[test]
fn test_owned_list_iter_mut() {
    let mut list: OwnedList<i32> = (1..=3).collect();
    for value in list.iter_mut() {
        *value *= 10;
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![30, 20, 10]);
}

#[test]
fn test_owned_list_into_iter() {
    let list: OwnedList<i32> = (1..=3).collect();
    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_owned_list_teardown_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let mut list = OwnedList::new();
        list.push(Tracked::new(10, &log));
        list.push(Tracked::new(20, &log));
        list.push(Tracked::new(30, &log));

        let values: Vec<i32> = list.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![30, 20, 10]);
        assert!(log.borrow().is_empty());
    }
    assert_eq!(*log.borrow(), vec![30, 20, 10]);
}

#[test]
fn test_owned_list_single_push_single_release() {
    let drops = Rc::new(Cell::new(0));
    let mut list = OwnedList::new();
    list.push(Counted::new(&drops));
    drop(list);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_owned_list_clear_leaves_empty_head() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut list = OwnedList::new();
    for value in 0..5 {
        list.push(Tracked::new(value, &log));
    }

    list.clear();
    assert!(list.is_empty());
    assert!(list.peek().is_none());
    assert_eq!(list.iter().count(), 0);
    assert_eq!(*log.borrow(), vec![4, 3, 2, 1, 0]);

    // The list stays usable after teardown.
    list.push(Tracked::new(7, &log));
    assert_eq!(list.peek().map(|t| t.value), Some(7));
}

#[test]
fn test_owned_list_long_teardown_does_not_overflow() {
    const NODES: usize = 1_000_000;

    let drops = Rc::new(Cell::new(0));
    let mut list = OwnedList::new();
    for _ in 0..NODES {
        list.push(Counted::new(&drops));
    }
    assert_eq!(list.len(), NODES);

    drop(list);
    assert_eq!(drops.get(), NODES);
}

#[test]
fn test_owned_list_panicking_payload_keeps_teardown_iterative() {
    const NODES: usize = 1_000_000;

    let drops = Rc::new(Cell::new(0));
    let mut list: OwnedList<PanicOnDrop> =
        (0..NODES).map(|_| PanicOnDrop::new(false, &drops)).collect();
    list.push(PanicOnDrop::new(true, &drops));

    let result = panic::catch_unwind(AssertUnwindSafe(move || drop(list)));
    assert!(result.is_err());
    assert_eq!(drops.get(), NODES + 1);
}

#[test]
fn test_owned_list_clear_after_panicking_payload_leaves_empty_head() {
    let drops = Rc::new(Cell::new(0));
    let mut list = OwnedList::new();
    for armed in [false, false, true, false] {
        list.push(PanicOnDrop::new(armed, &drops));
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| list.clear()));
    assert!(result.is_err());
    assert_eq!(drops.get(), 4);
    assert!(list.is_empty());
    assert!(list.peek().is_none());

    // The list stays usable after the failed teardown.
    list.push(PanicOnDrop::new(false, &drops));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_owned_list_into_iter_drops_remainder() {
    let drops = Rc::new(Cell::new(0));
    let list: OwnedList<Counted> = (0..1_000_000).map(|_| Counted::new(&drops)).collect();

    let mut iter = list.into_iter();
    drop(iter.next());
    assert_eq!(drops.get(), 1);
    drop(iter);
    assert_eq!(drops.get(), 1_000_000);
}

#[test]
fn test_owned_list_clone_and_eq() {
    let list: OwnedList<i32> = (1..=4).collect();
    let copy = list.clone();
    assert_eq!(list, copy);
    assert_eq!(copy.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);

    let other: OwnedList<i32> = (1..=3).collect();
    assert_ne!(list, other);
}

#[test]
fn test_owned_list_debug() {
    let list: OwnedList<i32> = (1..=3).collect();
    assert_eq!(std::format!("{list:?}"), "[3, 2, 1]");
}
