#![doc(test(attr(deny(warnings))))]

//! Switcher Core turns one amount into comparison tables: the same cost under
//! every recurring period, and in every supported currency at static rates.
//!
//! ```
//! use switcher_core::period::{calculate_by_period, AmountWithPeriod, Period};
//!
//! let table = calculate_by_period(AmountWithPeriod::new(100.0, Period::Monthly));
//! assert_eq!(table[Period::Yearly], 1200.0);
//! ```

pub mod config;
pub mod currency;
pub mod errors;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod format;
pub mod numeric;
pub mod period;
pub mod session;
pub mod storage;
pub mod utils;

pub use errors::{Result, SwitcherError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Switcher Core tracing initialized.");
    });
}
