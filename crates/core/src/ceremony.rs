//! Academy Awards ceremony naming and year bounds.

/// Year of the 1st Academy Awards ceremony.
pub const FIRST_CEREMONY_YEAR: i32 = 1929;

/// Latest ceremony year accepted by the API.
pub const LAST_CEREMONY_YEAR: i32 = 2100;

/// Whether `year` is inside the range of ceremony years the API serves.
pub fn is_valid_ceremony_year(year: i32) -> bool {
    (FIRST_CEREMONY_YEAR..=LAST_CEREMONY_YEAR).contains(&year)
}

/// Ordinal ceremony name for the ceremony held in `year`.
///
/// ```
/// use egot_core::ceremony::ceremony_name;
///
/// assert_eq!(ceremony_name(2025), "97th Academy Awards");
/// ```
pub fn ceremony_name(year: i32) -> String {
    let number = year - (FIRST_CEREMONY_YEAR - 1);
    let suffix = match (number % 10, number % 100) {
        (1, n) if n != 11 => "st",
        (2, n) if n != 12 => "nd",
        (3, n) if n != 13 => "rd",
        _ => "th",
    };
    format!("{number}{suffix} Academy Awards")
}
