use serde::Serialize;
use serde_json::{Map, Value};

use crate::profile::application::changed_fields::ChangedFields;
use crate::profile::domain::entities::{Contact, Education};
use crate::profile::domain::fields::ProfileField;
use crate::profile::domain::policies::entry_validity::{is_valid_contact, is_valid_education};
use crate::shared::PatchField;

/// Body of a profile update request: the changed fields minus anything the
/// backend should not receive (empty values, invalid or empty sequences).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

fn non_empty_text(field: &PatchField<String>) -> Option<String> {
    field.as_value().filter(|v| !v.is_empty()).cloned()
}

/// Keep the entries passing `keep`; an empty result is dropped altogether.
fn retain_valid<T: Clone>(field: &PatchField<Vec<T>>, keep: fn(&T) -> bool) -> Option<Vec<T>> {
    let kept: Vec<T> = field
        .as_value()?
        .iter()
        .filter(|entry| keep(entry))
        .cloned()
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept)
    }
}

impl ProfileUpdatePayload {
    pub fn from_changes(changes: &ChangedFields) -> Self {
        Self {
            first_name: non_empty_text(&changes.first_name),
            last_name: non_empty_text(&changes.last_name),
            bio: non_empty_text(&changes.bio),
            place_work: non_empty_text(&changes.place_work),
            location: non_empty_text(&changes.location),
            avatar: non_empty_text(&changes.avatar),
            birthday: non_empty_text(&changes.birthday),
            contacts: retain_valid(&changes.contacts, is_valid_contact),
            education: retain_valid(&changes.education, is_valid_education),
            gpa: changes.gpa.as_value().copied(),
            program_type: non_empty_text(&changes.program_type),
            experience: non_empty_text(&changes.experience),
            specialization: non_empty_text(&changes.specialization),
        }
    }

    /// Fields present in the payload, in declaration order.
    pub fn fields(&self) -> Vec<ProfileField> {
        let present = [
            (ProfileField::FirstName, self.first_name.is_some()),
            (ProfileField::LastName, self.last_name.is_some()),
            (ProfileField::Bio, self.bio.is_some()),
            (ProfileField::PlaceWork, self.place_work.is_some()),
            (ProfileField::Location, self.location.is_some()),
            (ProfileField::Avatar, self.avatar.is_some()),
            (ProfileField::Birthday, self.birthday.is_some()),
            (ProfileField::Contacts, self.contacts.is_some()),
            (ProfileField::Education, self.education.is_some()),
            (ProfileField::Gpa, self.gpa.is_some()),
            (ProfileField::ProgramType, self.program_type.is_some()),
            (ProfileField::Experience, self.experience.is_some()),
            (ProfileField::Specialization, self.specialization.is_some()),
        ];

        present
            .into_iter()
            .filter(|(_, is_present)| *is_present)
            .map(|(field, _)| field)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Plain key/value form of the payload. Keys come out sorted.
    pub fn to_json(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            // a struct always serializes to an object
            _ => Ok(Map::new()),
        }
    }
}
