use std::{convert::Infallible, fmt, marker::PhantomData, mem};

use crate::try_safe_reset;

/// The result type of a release operation.
///
/// Release operations either cannot fail and return `()`, or report
/// failure through a [`Result`].
pub trait ReleaseOutcome {
    /// The error reported by a failed release.
    type Error: fmt::Display;

    /// Converts the outcome into a [`Result`].
    fn into_result(self) -> Result<(), Self::Error>;
}

impl ReleaseOutcome for () {
    type Error = Infallible;

    #[inline(always)]
    fn into_result(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<E: fmt::Display> ReleaseOutcome for Result<(), E> {
    type Error = E;

    #[inline(always)]
    fn into_result(self) -> Result<(), Self::Error> {
        self
    }
}

/// Owns a resource handle together with the operation that releases it.
///
/// The handle is released at most once: [`ResetGuard::reset`] calls the
/// release operation only while the handle differs from the cleared
/// value, and stores the cleared value afterwards.
///
/// When the guard is dropped, a handle that was not cleared yet is
/// released. Use [`ResetGuard::detach`] to take the handle out without
/// releasing it.
pub struct ResetGuard<H, F, R = ()>
where
    H: PartialEq + Clone,
    F: FnMut(H) -> R,
    R: ReleaseOutcome,
{
    handle: H,
    cleared: H,
    release: F,
    _m: PhantomData<fn() -> R>,
}

impl<H, F, R> ResetGuard<H, F, R>
where
    H: PartialEq + Clone,
    F: FnMut(H) -> R,
    R: ReleaseOutcome,
{
    /// Creates a new guard over `handle`.
    ///
    /// `cleared` is the value the handle holds once released.
    pub fn new(handle: H, cleared: H, release: F) -> Self {
        Self {
            handle,
            cleared,
            release,
            _m: PhantomData,
        }
    }

    /// Creates a guard which does not hold a handle yet.
    pub fn empty(cleared: H, release: F) -> Self {
        Self::new(cleared.clone(), cleared, release)
    }

    /// Gets a reference to the current handle.
    #[inline]
    pub fn get(&self) -> &H {
        &self.handle
    }

    /// Gets a mutable reference to the current handle.
    ///
    /// This is meant for out-parameters of C-style APIs which fill in a
    /// handle. Whatever is stored there will be released by the guard.
    #[inline]
    pub fn get_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// Gets the value the handle holds once released.
    #[inline]
    pub fn cleared(&self) -> &H {
        &self.cleared
    }

    /// Whether the handle currently equals the cleared value.
    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.handle == self.cleared
    }

    /// Releases the handle unless it is already cleared.
    ///
    /// The handle is cleared regardless of whether the release operation
    /// succeeds. Returns whether the release operation was invoked.
    pub fn try_reset(&mut self) -> Result<bool, R::Error> {
        let release = &mut self.release;
        try_safe_reset(&mut self.handle, self.cleared.clone(), |h| {
            release(h).into_result()
        })
    }

    /// Releases the current handle and replaces it with `handle`.
    ///
    /// `handle` is stored even when releasing the old one fails. Setting
    /// the handle the guard already holds does nothing.
    pub fn try_set(&mut self, handle: H) -> Result<(), R::Error> {
        if handle == self.handle {
            return Ok(());
        }

        let result = self.try_reset().map(|_| ());
        self.handle = handle;
        result
    }

    /// Takes the handle out of the guard without releasing it.
    ///
    /// The guard is left cleared.
    pub fn detach(&mut self) -> H {
        mem::replace(&mut self.handle, self.cleared.clone())
    }
}

impl<H, F> ResetGuard<H, F>
where
    H: PartialEq + Clone,
    F: FnMut(H),
{
    /// Releases the handle unless it is already cleared.
    ///
    /// Returns whether the release operation was invoked. Calling this
    /// any number of times has the same effect as calling it once.
    pub fn reset(&mut self) -> bool {
        match self.try_reset() {
            Ok(released) => released,
            Err(e) => match e {},
        }
    }

    /// Releases the current handle and replaces it with `handle`.
    ///
    /// Setting the handle the guard already holds does nothing.
    pub fn set(&mut self, handle: H) {
        match self.try_set(handle) {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }
}

impl<H, F, R> Drop for ResetGuard<H, F, R>
where
    H: PartialEq + Clone,
    F: FnMut(H) -> R,
    R: ReleaseOutcome,
{
    fn drop(&mut self) {
        if let Err(e) = self.try_reset() {
            log::warn!("Failed to release handle on drop: {e}");
        }
    }
}

impl<H, F, R> fmt::Debug for ResetGuard<H, F, R>
where
    H: PartialEq + Clone + fmt::Debug,
    F: FnMut(H) -> R,
    R: ReleaseOutcome,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetGuard")
            .field("handle", &self.handle)
            .field("cleared", &self.cleared)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_omits_release() {
        let guard = ResetGuard::new(3, -1, |_| {});
        assert_eq!(
            format!("{guard:?}"),
            "ResetGuard { handle: 3, cleared: -1, .. }"
        );
    }

    #[test]
    fn empty_guard_is_cleared() {
        let mut calls = 0;
        let mut guard = ResetGuard::empty(0_usize, |_| calls += 1);

        assert!(guard.is_cleared());
        assert!(!guard.reset());
        drop(guard);

        assert_eq!(calls, 0);
    }
}
