use std::cell::{Cell, RefCell};

use mediaprim_guard::*;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("failed to close descriptor {0}")]
struct CloseError(i32);

#[test]
fn safe_reset_releases_once() {
    let mut fd = 7;
    let mut closed = Vec::new();

    assert!(safe_reset(&mut fd, -1, |fd| closed.push(fd)));
    assert!(!safe_reset(&mut fd, -1, |fd| closed.push(fd)));
    assert!(!safe_reset(&mut fd, -1, |fd| closed.push(fd)));

    assert_eq!(fd, -1);
    assert_eq!(closed, [7]);
}

#[test]
fn safe_reset_skips_cleared_handle() {
    let mut handle = 0_usize;
    let released = Cell::new(false);

    assert!(!safe_reset(&mut handle, 0, |_| released.set(true)));
    assert!(!released.get());
    assert_eq!(handle, 0);
}

#[test]
fn try_safe_reset_clears_on_failure() {
    let mut fd = 3;

    let result = try_safe_reset(&mut fd, -1, |fd| Err(CloseError(fd)));
    assert_eq!(result, Err(CloseError(3)));
    assert_eq!(fd, -1);

    let result = try_safe_reset(&mut fd, -1, |fd| Err(CloseError(fd)));
    assert_eq!(result, Ok(false));
}

#[test]
fn option_slot() {
    let mut slot = Some(String::from("codec context"));
    let mut freed = Vec::new();

    assert!(safe_reset_option(&mut slot, |s| freed.push(s)));
    assert!(!safe_reset_option(&mut slot, |s| freed.push(s)));

    assert!(slot.is_none());
    assert_eq!(freed, ["codec context"]);
}

#[test]
fn guard_reset_is_idempotent() {
    let calls = Cell::new(0);
    let mut guard = ResetGuard::new(42_u32, 0, |_| calls.set(calls.get() + 1));

    assert!(!guard.is_cleared());
    assert!(guard.reset());
    assert!(!guard.reset());
    assert!(!guard.reset());

    assert!(guard.is_cleared());
    assert_eq!(*guard.get(), 0);
    drop(guard);

    assert_eq!(calls.get(), 1);
}

#[test]
fn guard_releases_on_drop() {
    let released = RefCell::new(Vec::new());

    {
        let _guard = ResetGuard::new(5, -1, |fd| released.borrow_mut().push(fd));
    }

    assert_eq!(*released.borrow(), [5]);
}

#[test]
fn guard_set_releases_previous() {
    let released = RefCell::new(Vec::new());

    let mut guard = ResetGuard::empty(-1, |fd| released.borrow_mut().push(fd));
    guard.set(10);
    guard.set(11);
    guard.set(-1);
    guard.set(12);
    drop(guard);

    assert_eq!(*released.borrow(), [10, 11, 12]);
}

#[test]
fn guard_out_parameter() {
    let released = Cell::new(None);

    let mut guard = ResetGuard::empty(0_usize, |h| released.set(Some(h)));
    *guard.get_mut() = 0xBEEF;
    assert_eq!(*guard.cleared(), 0);
    drop(guard);

    assert_eq!(released.get(), Some(0xBEEF));
}

#[test]
fn detached_handle_is_not_released() {
    let calls = Cell::new(0);

    let mut guard = ResetGuard::new(9, -1, |_| calls.set(calls.get() + 1));
    assert_eq!(guard.detach(), 9);
    assert!(guard.is_cleared());
    drop(guard);

    assert_eq!(calls.get(), 0);
}

#[test]
fn fallible_guard() {
    let attempts = Cell::new(0);

    let mut guard = ResetGuard::new(4, -1, |fd| -> Result<(), CloseError> {
        attempts.set(attempts.get() + 1);
        Err(CloseError(fd))
    });

    assert_eq!(guard.try_reset(), Err(CloseError(4)));
    assert!(guard.is_cleared());
    assert_eq!(guard.try_reset(), Ok(false));

    assert_eq!(guard.try_set(6), Ok(()));
    assert_eq!(guard.try_set(8), Err(CloseError(6)));
    assert_eq!(*guard.get(), 8);

    // Failures on drop are logged, not propagated.
    drop(guard);
    assert_eq!(attempts.get(), 3);
}

#[test]
fn setting_held_handle_keeps_it_alive() {
    let released = RefCell::new(Vec::new());

    let mut guard = ResetGuard::new(7, -1, |fd| released.borrow_mut().push(fd));
    guard.set(*guard.get());
    assert_eq!(*guard.get(), 7);
    assert!(released.borrow().is_empty());
    drop(guard);

    assert_eq!(*released.borrow(), [7]);
}

#[test]
fn fallible_set_of_held_handle_is_a_no_op() {
    let attempts = Cell::new(0);

    let mut guard = ResetGuard::new(3, -1, |fd| -> Result<(), CloseError> {
        attempts.set(attempts.get() + 1);
        Err(CloseError(fd))
    });

    assert_eq!(guard.try_set(3), Ok(()));
    assert_eq!(attempts.get(), 0);
    assert_eq!(guard.try_reset(), Err(CloseError(3)));
    assert_eq!(guard.try_reset(), Ok(false));
    drop(guard);

    assert_eq!(attempts.get(), 1);
}
