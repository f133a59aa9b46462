//! Registration-number formatting.
//!
//! Numbers follow `AEM-{year}-{CODE}-{sequence}` where CODE is derived from
//! the event title and the sequence is six digits, zero padded. The year is
//! the calendar year at creation time, not the event's date.

/// Derives the three-letter event code from an event title.
///
/// Takes the first three ASCII alphabetic characters uppercased, padding with
/// `X` when the title contains fewer than three letters.
pub fn event_code(title: &str) -> String {
    let mut code: String = title
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    while code.len() < 3 {
        code.push('X');
    }

    code
}

/// Formats a full registration number.
pub fn registration_number(title: &str, year: i32, sequence: u64) -> String {
    format!("AEM-{}-{}-{:06}", year, event_code(title), sequence)
}
