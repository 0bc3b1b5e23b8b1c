//! Shared test helpers for tsloc crates.
//!
//! The helpers in this module are intended for use from unit and integration
//! tests so repeated boilerplate (sample resources, translation directories,
//! locale overrides) can live in one place with the necessary safety
//! documentation.

use std::ffi::OsString;

use crate::locale::LOCALE_ENV_VAR;

pub mod fixtures;

/// Guard that overrides `TSLOC_LOCALE` for the lifetime of the instance.
///
/// The guard captures any existing value and restores it when dropped. The
/// mutation itself must be executed under a serialised test harness (for
/// example behind a shared `Mutex`) so the unsafe environment access remains
/// race-free.
///
/// # Examples
///
/// ```ignore
/// use tsloc_common::test_support::LocaleOverride;
///
/// #[test]
/// fn activates_the_german_catalog() {
///     let _lock = ENVIRONMENT_LOCK.lock();
///     let _guard = LocaleOverride::set("de");
///     // Activate the locale here.
/// }
/// ```
pub struct LocaleOverride {
    previous: Option<OsString>,
}

impl LocaleOverride {
    /// Sets `TSLOC_LOCALE` to `locale`, returning a guard that will restore
    /// the prior value (if any) when dropped.
    #[must_use]
    pub fn set(locale: &str) -> Self {
        let previous = std::env::var_os(LOCALE_ENV_VAR);
        // SAFETY: Callers must serialise the surrounding test. The guard is
        // dropped before another serialised test begins, so no two threads
        // mutate the environment concurrently.
        unsafe {
            std::env::set_var(LOCALE_ENV_VAR, locale);
        }
        Self { previous }
    }

    /// Removes `TSLOC_LOCALE`, returning a guard that reinstates the prior
    /// value (if any) when dropped.
    #[must_use]
    pub fn clear() -> Self {
        let previous = std::env::var_os(LOCALE_ENV_VAR);
        // SAFETY: Serialised execution guarantees removal has no concurrent
        // callers.
        unsafe {
            std::env::remove_var(LOCALE_ENV_VAR);
        }
        Self { previous }
    }
}

impl Drop for LocaleOverride {
    fn drop(&mut self) {
        if let Some(value) = &self.previous {
            // SAFETY: By construction the guard only lives within a serialised
            // test, so restoring the prior value cannot race with another
            // thread mutating the environment.
            unsafe {
                std::env::set_var(LOCALE_ENV_VAR, value);
            }
        } else {
            // SAFETY: Serialised execution also guarantees removal has no
            // concurrent callers.
            unsafe {
                std::env::remove_var(LOCALE_ENV_VAR);
            }
        }
    }
}
