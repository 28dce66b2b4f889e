use std::{any::type_name, convert::Infallible, mem};

/// Releases `handle` unless it already equals `cleared`, then stores
/// `cleared` in it.
///
/// The release operation receives the previous handle by value. Returns
/// whether it was invoked.
#[inline]
pub fn safe_reset<H, F>(handle: &mut H, cleared: H, release: F) -> bool
where
    H: PartialEq,
    F: FnOnce(H),
{
    let result = try_safe_reset(handle, cleared, |h| {
        release(h);
        Ok::<_, Infallible>(())
    });

    match result {
        Ok(released) => released,
        Err(e) => match e {},
    }
}

/// Fallible version of [`safe_reset`].
///
/// The handle is cleared even when `release` fails, so a later reset
/// will not attempt to release it again.
pub fn try_safe_reset<H, F, E>(handle: &mut H, cleared: H, release: F) -> Result<bool, E>
where
    H: PartialEq,
    F: FnOnce(H) -> Result<(), E>,
{
    if *handle == cleared {
        return Ok(false);
    }

    let previous = mem::replace(handle, cleared);
    log::trace!("Releasing handle of type '{}'", type_name::<H>());

    release(previous).map(|()| true)
}

/// Releases the value in `slot`, if any, leaving [`None`] behind.
///
/// Returns whether `release` was invoked.
#[inline]
pub fn safe_reset_option<T, F>(slot: &mut Option<T>, release: F) -> bool
where
    F: FnOnce(T),
{
    match slot.take() {
        Some(value) => {
            log::trace!("Releasing value of type '{}'", type_name::<T>());
            release(value);
            true
        }
        None => false,
    }
}
