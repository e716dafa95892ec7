//! Required parameter checks
//!
//! Endpoint wrappers run these before building a request, so a missing
//! parameter fails fast without any network I/O.
//!
//! Only strings and absent (`None`) values can fail. Numbers and booleans
//! always pass, zero included, because zero is a legitimate value for
//! several Binance parameters.

use crate::error::{RestError, RestResult};
use crate::params::ParamValue;

/// A value that can be checked as a required parameter
pub trait RequiredParam {
    /// Why the value counts as missing, or `None` if it is present
    fn missing_reason(&self) -> Option<&'static str>;
}

impl RequiredParam for str {
    fn missing_reason(&self) -> Option<&'static str> {
        self.is_empty().then_some("empty")
    }
}

impl RequiredParam for String {
    fn missing_reason(&self) -> Option<&'static str> {
        self.as_str().missing_reason()
    }
}

impl<T: RequiredParam + ?Sized> RequiredParam for &T {
    fn missing_reason(&self) -> Option<&'static str> {
        (**self).missing_reason()
    }
}

impl<T: RequiredParam> RequiredParam for Option<T> {
    fn missing_reason(&self) -> Option<&'static str> {
        match self {
            Some(value) => value.missing_reason(),
            None => Some("nil"),
        }
    }
}

impl RequiredParam for ParamValue {
    fn missing_reason(&self) -> Option<&'static str> {
        self.is_empty_str().then_some("empty")
    }
}

macro_rules! always_present {
    ($($ty:ty),*) => {
        $(
            impl RequiredParam for $ty {
                fn missing_reason(&self) -> Option<&'static str> {
                    None
                }
            }
        )*
    };
}

always_present!(i32, i64, u32, u64, f64, bool, [String]);

impl RequiredParam for Vec<String> {
    fn missing_reason(&self) -> Option<&'static str> {
        None
    }
}

/// Check a single required parameter
///
/// # Errors
/// Returns `RestError::Validation` naming `name` if the value is missing.
pub fn check_required_parameter<T: RequiredParam + ?Sized>(value: &T, name: &str) -> RestResult<()> {
    match value.missing_reason() {
        Some(reason) => Err(RestError::validation(name, reason)),
        None => Ok(()),
    }
}

/// Check several required parameters, reporting the first missing one
pub fn check_required_parameters(params: &[(&str, &dyn RequiredParam)]) -> RestResult<()> {
    params
        .iter()
        .try_for_each(|(name, value)| check_required_parameter(*value, name))
}
