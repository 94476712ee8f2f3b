//! Relative "N hours/days ago" labels for ticket timestamps.
//!
//! DESIGN
//! ======
//! The classification core is pure arithmetic over millisecond timestamps so
//! it tests natively; only the ISO parsing and locale rendering touch
//! `js_sys::Date` and are gated behind `hydrate`.
//!
//! The elapsed difference is taken as an absolute value, so a timestamp ahead
//! of the client clock (skew) labels the same as its past mirror.

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Relative label for a timestamp, or `None` once it is old enough that an
/// absolute date reads better.
///
/// Elapsed hours and days are both rounded up:
/// under 24 hours → "`<hours>` hours ago"; exactly one rounded-up day →
/// "1 day ago"; under 7 rounded-up days → "`<days>` days ago"; else `None`.
pub fn relative_label(ts_ms: i64, now_ms: i64) -> Option<String> {
    let elapsed = (now_ms - ts_ms).unsigned_abs();
    let hours = elapsed.div_ceil(MS_PER_HOUR.unsigned_abs());
    let days = elapsed.div_ceil(MS_PER_DAY.unsigned_abs());

    if hours < 24 {
        return Some(format!("{hours} hours ago"));
    }
    if days == 1 {
        return Some("1 day ago".to_owned());
    }
    if days < 7 {
        return Some(format!("{days} days ago"));
    }
    None
}

/// Render an ISO 8601 timestamp as a relative label, falling back to the
/// browser-locale date for anything a week or more old. Unparseable input
/// renders verbatim.
#[cfg(feature = "hydrate")]
pub fn format_timestamp(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    let ts = date.get_time();
    if ts.is_nan() {
        return iso.to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let label = relative_label(ts as i64, js_sys::Date::now() as i64);
    match label {
        Some(label) => label,
        None => String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)),
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn format_timestamp(iso: &str) -> String {
    iso.to_owned()
}
