//! Polars `AnyValue` conversions.

use polars::prelude::AnyValue;

/// Converts a cell to its display string.
///
/// `Null` becomes an empty string and floats lose trailing zeros, so an
/// integer-typed `1` and a text `"1"` render the same way.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use ici_common::cell_to_string;
///
/// assert_eq!(cell_to_string(AnyValue::Null), "");
/// assert_eq!(cell_to_string(AnyValue::Int64(1)), "1");
/// assert_eq!(cell_to_string(AnyValue::Float64(2.0)), "2");
/// assert_eq!(cell_to_string(AnyValue::String("2+")), "2+");
/// ```
pub fn cell_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Converts a key cell (cancer type, line, regimen) to a comparison string.
///
/// Returns `None` for null or whitespace-only cells; a blank key never
/// matches a filter value.
pub fn cell_to_key(value: AnyValue<'_>) -> Option<String> {
    let s = cell_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Formats a floating-point number without trailing zeros.
///
/// ```
/// use ici_common::format_numeric;
///
/// assert_eq!(format_numeric(0.45), "0.45");
/// assert_eq!(format_numeric(12.0), "12");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Coerces a cell to `f64`.
///
/// Numeric types convert directly, text is parsed, and anything else
/// (null, `N/A`, booleans, dates) is `None`. Non-finite results are treated
/// as missing.
pub fn cell_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// Parses text as `f64`, returning `None` for blank or invalid input.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
