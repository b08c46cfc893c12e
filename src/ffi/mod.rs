//! C ABI for embedding hosts (webviews, mobile shells).
//!
//! Calls are stateless: the host passes the session as JSON and stores the
//! session returned alongside the results.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{
    errors::SwitcherError,
    period::Period,
    session::{recalculate, RawInput, Recalculation, SessionState},
};

/// Semantic version of the Rust core (mirrors `Cargo.toml`).
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Semantic version of the FFI surface. Bumps when ABI/contract changes.
pub const FFI_VERSION: &str = "0.1.0";

/// Error categories surfaced across the FFI boundary.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCategory {
    Ok = 0,
    Validation = 1,
    Persistence = 2,
    Internal = 3,
}

impl From<FfiErrorCategory> for i32 {
    fn from(value: FfiErrorCategory) -> Self {
        value as i32
    }
}

pub fn classify_error(err: &SwitcherError) -> FfiErrorCategory {
    match err {
        SwitcherError::UnknownPeriod(_)
        | SwitcherError::UnknownCurrency(_)
        | SwitcherError::MissingSelection(_)
        | SwitcherError::InvalidConfig(_)
        | SwitcherError::Serde(_) => FfiErrorCategory::Validation,
        SwitcherError::Io(_) | SwitcherError::Storage(_) => FfiErrorCategory::Persistence,
    }
}

thread_local! {
    static LAST_ERROR: RefCell<Option<(FfiErrorCategory, String)>> = const { RefCell::new(None) };
}

fn set_last_error(category: FfiErrorCategory, message: String) {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some((category, message)));
}

fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

#[derive(Debug, Deserialize)]
struct FfiRequest {
    session: SessionState<Period>,
    input: FfiInput,
}

#[derive(Debug, Deserialize)]
struct FfiInput {
    price: String,
    #[serde(default)]
    count: String,
    period: Option<String>,
    currency: Option<String>,
}

#[derive(Debug, Serialize)]
struct FfiResponse {
    session: SessionState<Period>,
    result: Recalculation<Period>,
}

fn handle_request(json: &str) -> Result<String, SwitcherError> {
    let request: FfiRequest = serde_json::from_str(json)?;
    let input = RawInput::parse(
        request.input.price,
        request.input.count,
        request.input.period.as_deref(),
        request.input.currency.as_deref(),
    )?;
    let (session, result) = recalculate(request.session, &input)?;
    Ok(serde_json::to_string(&FfiResponse { session, result })?)
}

/// Returns the core (Rust) semantic version as a C string.
#[no_mangle]
pub extern "C" fn switcher_core_version() -> *const c_char {
    static CORE: OnceLock<CString> = OnceLock::new();
    CORE.get_or_init(|| CString::new(CORE_VERSION).unwrap_or_default())
        .as_ptr()
}

/// Returns the FFI interface semantic version as a C string.
#[no_mangle]
pub extern "C" fn switcher_ffi_version() -> *const c_char {
    static FFI: OnceLock<CString> = OnceLock::new();
    FFI.get_or_init(|| CString::new(FFI_VERSION).unwrap_or_default())
        .as_ptr()
}

/// Runs one recalculation. On success `*out_json` receives a string that must be
/// released with [`switcher_string_free`].
///
/// # Safety
///
/// `input_json` must be a valid NUL-terminated string and `out_json` a valid
/// pointer to writable storage.
#[no_mangle]
pub unsafe extern "C" fn switcher_recalculate_json(
    input_json: *const c_char,
    out_json: *mut *mut c_char,
) -> i32 {
    if input_json.is_null() || out_json.is_null() {
        set_last_error(FfiErrorCategory::Validation, "null pointer argument".into());
        return FfiErrorCategory::Validation.into();
    }
    *out_json = ptr::null_mut();

    let json = match CStr::from_ptr(input_json).to_str() {
        Ok(json) => json,
        Err(err) => {
            set_last_error(FfiErrorCategory::Validation, err.to_string());
            return FfiErrorCategory::Validation.into();
        }
    };

    match handle_request(json).map(CString::new) {
        Ok(Ok(response)) => {
            clear_last_error();
            *out_json = response.into_raw();
            FfiErrorCategory::Ok.into()
        }
        Ok(Err(err)) => {
            set_last_error(FfiErrorCategory::Internal, err.to_string());
            FfiErrorCategory::Internal.into()
        }
        Err(err) => {
            let category = classify_error(&err);
            tracing::warn!(error = %err, "ffi recalculation failed");
            set_last_error(category, err.to_string());
            category.into()
        }
    }
}

/// Category of the last failed call on this thread, or `0` when it succeeded.
#[no_mangle]
pub extern "C" fn switcher_last_error_category() -> i32 {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|(category, _)| *category)
            .unwrap_or(FfiErrorCategory::Ok)
            .into()
    })
}

/// Message of the last failed call on this thread, or null. Free with
/// [`switcher_string_free`].
#[no_mangle]
pub extern "C" fn switcher_last_error_message() -> *mut c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|(_, message)| CString::new(message.as_str()).ok())
            .map(CString::into_raw)
            .unwrap_or(ptr::null_mut())
    })
}

/// # Safety
///
/// `ptr` must come from this library and must not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn switcher_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
