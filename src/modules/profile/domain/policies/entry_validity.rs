use crate::profile::domain::entities::{Contact, Education};

/// A contact can be sent to the backend only when it has a value.
pub fn is_valid_contact(contact: &Contact) -> bool {
    !contact.value.trim().is_empty()
}

/// An education entry can be sent once its required fields are filled in and it
/// is either ongoing or has a graduation year.
pub fn is_valid_education(entry: &Education) -> bool {
    !entry.institution.is_empty()
        && !entry.degree.is_empty()
        && !entry.specialty.is_empty()
        && !entry.start_date.is_empty()
        && (entry.is_currently || entry.graduation_year.is_some())
}
