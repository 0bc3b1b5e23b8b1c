//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the `locale` helpers (for example `StepLocale`) that parse locale
//! parameters in BDD steps so scenarios can feed consistent values into the
//! configuration and activation flow.
pub mod locale;
