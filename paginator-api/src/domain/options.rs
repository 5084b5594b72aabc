use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// Default upper bound on the number of page numbers offered for display,
/// including the pinned first and last pages.
pub const DEFAULT_MAX_DISPLAY_PAGES: i64 = 13;

/// Smallest window the builder will ever produce when enough pages exist.
pub const MIN_DISPLAY_PAGES: i64 = 3;

pub const ENV_MAX_DISPLAY_PAGES: &str = "PAGINATOR_MAX_DISPLAY_PAGES";
pub const ENV_SHOW_FIRST_LAST_PAGES: &str = "PAGINATOR_SHOW_FIRST_LAST_PAGES";
pub const ENV_FIX_OUT_OF_RANGE_PAGE: &str = "PAGINATOR_FIX_OUT_OF_RANGE_PAGE";

/// # Documentation
/// Display and clamping settings applied to every pagination request.
///
/// Values are plain data: a request copies them in, nothing reads them
/// from shared state afterwards. Partial configurations deserialize with
/// the missing fields taking their defaults.
///
/// # Example
/// ```
/// use paginator_api::PaginationOptions;
///
/// let options: PaginationOptions = serde_json::from_str(r#"{ "max_display_pages": 7 }"#).unwrap();
/// assert_eq!(options.max_display_pages, 7);
/// assert!(options.show_first_last_pages);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    /// Upper bound on how many page numbers are returned (never below 3 in effect)
    pub max_display_pages: i64,

    /// Pin page 1 and the last page at the window edges
    pub show_first_last_pages: bool,

    /// Clamp an out-of-range current page instead of rejecting the request
    pub fix_out_of_range_page: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            max_display_pages: DEFAULT_MAX_DISPLAY_PAGES,
            show_first_last_pages: true,
            fix_out_of_range_page: true,
        }
    }
}

impl PaginationOptions {
    /// Load options from `PAGINATOR_*` environment variables.
    ///
    /// Unset variables keep their default value.
    ///
    /// # Returns
    /// * `Ok(PaginationOptions)` - The resolved options
    /// * `Err(ConfigError::InvalidValue)` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            max_display_pages: read_env(ENV_MAX_DISPLAY_PAGES, defaults.max_display_pages)?,
            show_first_last_pages: read_env(
                ENV_SHOW_FIRST_LAST_PAGES,
                defaults.show_first_last_pages,
            )?,
            fix_out_of_range_page: read_env(
                ENV_FIX_OUT_OF_RANGE_PAGE,
                defaults.fix_out_of_range_page,
            )?,
        })
    }

    /// The window size actually used by the builder before capping to the page count.
    pub fn effective_max_display_pages(&self) -> i64 {
        self.max_display_pages.max(MIN_DISPLAY_PAGES)
    }
}

fn read_env<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
