//! Structural equality rules used by change detection.

use super::entities::{Contact, Education};

/// Absent scalars compare as `""`.
pub fn scalar_eq(a: Option<&str>, b: Option<&str>) -> bool {
    a.unwrap_or("") == b.unwrap_or("")
}

/// Date part of an ISO-8601 date-time: everything before the first `T`.
pub fn date_part(value: Option<&str>) -> &str {
    let value = value.unwrap_or("");
    value.split('T').next().unwrap_or(value)
}

/// Birthdays match when their calendar dates match; time of day and zone are noise
/// from serialization round trips.
pub fn birthday_eq(a: Option<&str>, b: Option<&str>) -> bool {
    date_part(a) == date_part(b)
}

/// `None` and `Some(false)` are the same visibility.
fn is_public(contact: &Contact) -> bool {
    contact.is_public.unwrap_or(false)
}

fn contact_eq(a: &Contact, b: &Contact) -> bool {
    a.kind == b.kind
        && a.label == b.label
        && a.value == b.value
        && is_public(a) == is_public(b)
}

fn education_eq(a: &Education, b: &Education) -> bool {
    a.institution == b.institution
        && a.degree == b.degree
        && a.specialty == b.specialty
        && a.start_date == b.start_date
        && a.graduation_year == b.graduation_year
        && a.is_currently == b.is_currently
}

/// Positional comparison; order matters, ids are ignored.
pub fn contacts_eq(a: &[Contact], b: &[Contact]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| contact_eq(x, y))
}

/// Positional comparison; order matters, ids are ignored.
pub fn education_list_eq(a: &[Education], b: &[Education]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| education_eq(x, y))
}
