//! Nearly-sold-out announcement text

use shared::Conference;

/// Lead-in of the process-wide announcement
pub const NEARLY_SOLD_OUT_PREFIX: &str =
    "Last chance to attend! The following conferences are nearly sold out: ";

/// Announcement naming every nearly sold out conference, in input order.
///
/// Returns `None` when no conference qualifies.
pub fn nearly_sold_out_announcement(conferences: &[Conference]) -> Option<String> {
    let names: Vec<&str> = conferences
        .iter()
        .filter(|conference| conference.is_nearly_sold_out())
        .map(|conference| conference.name.as_str())
        .collect();

    if names.is_empty() {
        return None;
    }

    Some(format!("{}{}", NEARLY_SOLD_OUT_PREFIX, names.join(", ")))
}
