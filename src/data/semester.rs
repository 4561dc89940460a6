//! Semester-code decoding.
//!
//! Review records carry a semester code `YYYY-S` where `1` is Spring, `2`
//! Summer and `3` Fall. The decoder is a pure function; an unrecognized
//! season digit passes through unchanged rather than erroring, matching the
//! observed behavior of the source data's consumers.

/// Decode a semester code into a display name: `"2021-3"` → `"Fall 2021"`.
///
/// Codes without a hyphen are returned unchanged.
pub fn semester_name(semester_id: &str) -> String {
    let Some((year, season)) = semester_id.split_once('-') else {
        return semester_id.to_string();
    };
    let season = match season {
        "1" => "Spring",
        "2" => "Summer",
        "3" => "Fall",
        other => other,
    };
    format!("{season} {year}")
}
