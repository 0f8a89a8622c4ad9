//! English ordinal suffixes.

/// Ordinal suffix for an integer. The teens are always "th"; otherwise the
/// last digit decides.
pub fn ordinal(number: i64) -> &'static str {
    let magnitude = number.unsigned_abs();
    match magnitude % 100 {
        11..=13 => "th",
        _ => match magnitude % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// The number with its ordinal suffix appended.
pub fn ordinalize(number: i64) -> String {
    format!("{}{}", number, ordinal(number))
}
