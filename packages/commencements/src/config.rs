//! Configuration constants and validation functions.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CommencementsError, Result};

/// Country whose TOC rules apply when none is given.
pub const DEFAULT_COUNTRY: &str = "default";

/// Separator between the first and last number of a range (e.g. "section 1–5").
pub const EN_DASH: &str = "–";

/// Suffix for a container that is only partially (un)commenced.
pub const IN_PART: &str = " (in part)";

/// Separator between groups in a commencement description.
pub const GROUP_SEPARATOR: &str = "; ";

/// Component name of the main body of a document.
pub const MAIN_COMPONENT: &str = "main";

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Country pattern: ISO 3166-1 alpha-2, lowercase.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COUNTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}$").expect("valid regex"));

/// Parse a date in YYYY-MM-DD format.
///
/// # Examples
/// ```
/// use akn_commencements::config::parse_date;
///
/// assert!(parse_date("2021-03-01").is_ok());
/// assert!(parse_date("2021-13-01").is_err()); // Invalid month
/// assert!(parse_date("1 March 2021").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(CommencementsError::InvalidDate(date_str.to_string()));
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| CommencementsError::InvalidDate(date_str.to_string()))
}

/// Validate a country code.
///
/// Accepts [`DEFAULT_COUNTRY`] as well as two-letter lowercase codes.
///
/// # Examples
/// ```
/// use akn_commencements::config::validate_country;
///
/// assert!(validate_country("za").is_ok());
/// assert!(validate_country("default").is_ok());
/// assert!(validate_country("ZAF").is_err());
/// ```
pub fn validate_country(country: &str) -> Result<()> {
    if country == DEFAULT_COUNTRY || COUNTRY_PATTERN.is_match(country) {
        Ok(())
    } else {
        Err(CommencementsError::InvalidCountry(country.to_string()))
    }
}

/// Split a comma-separated list of provision ids.
///
/// Whitespace around ids is trimmed and empty entries are dropped.
///
/// # Examples
/// ```
/// use akn_commencements::config::split_ids;
///
/// assert_eq!(split_ids("sec_1, sec_2,,sec_3"), vec!["sec_1", "sec_2", "sec_3"]);
/// ```
pub fn split_ids(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
