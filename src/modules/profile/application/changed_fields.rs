use serde::Serialize;

use crate::profile::domain::comparison::{
    birthday_eq, contacts_eq, education_list_eq, scalar_eq,
};
use crate::profile::domain::entities::{Contact, Education, ProfileRecord, RoleDetails};
use crate::profile::domain::fields::ProfileField;
use crate::shared::PatchField;

/// Fields of the working copy that differ from the baseline.
///
/// Unchanged fields stay `Unset` and are left out when serialized. Sequences are
/// reported whole: a changed `contacts` carries the complete current list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedFields {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub first_name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub last_name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub bio: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub place_work: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub location: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub avatar: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub birthday: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub contacts: PatchField<Vec<Contact>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub education: PatchField<Vec<Education>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub gpa: PatchField<f64>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub program_type: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub experience: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub specialization: PatchField<String>,
}

fn diff_scalar(baseline: &Option<String>, current: &Option<String>) -> PatchField<String> {
    if scalar_eq(baseline.as_deref(), current.as_deref()) {
        PatchField::Unset
    } else {
        PatchField::changed_to(current.clone())
    }
}

impl ChangedFields {
    /// Compare `current` against `baseline`.
    ///
    /// Role-specific fields are compared only when both records have the same role.
    pub fn between(baseline: &ProfileRecord, current: &ProfileRecord) -> Self {
        let mut changed = ChangedFields {
            first_name: diff_scalar(&baseline.first_name, &current.first_name),
            last_name: diff_scalar(&baseline.last_name, &current.last_name),
            bio: diff_scalar(&baseline.bio, &current.bio),
            place_work: diff_scalar(&baseline.place_work, &current.place_work),
            location: diff_scalar(&baseline.location, &current.location),
            avatar: diff_scalar(&baseline.avatar, &current.avatar),
            ..Default::default()
        };

        if !birthday_eq(baseline.birthday.as_deref(), current.birthday.as_deref()) {
            changed.birthday = PatchField::changed_to(current.birthday.clone());
        }

        if !contacts_eq(&baseline.contacts, &current.contacts) {
            changed.contacts = PatchField::Value(current.contacts.clone());
        }

        if !education_list_eq(&baseline.education, &current.education) {
            changed.education = PatchField::Value(current.education.clone());
        }

        match (&baseline.role, &current.role) {
            (RoleDetails::Student(before), RoleDetails::Student(after)) => {
                if before.gpa != after.gpa {
                    changed.gpa = PatchField::changed_to(after.gpa);
                }
                changed.program_type = diff_scalar(&before.program_type, &after.program_type);
            }
            (RoleDetails::Doctor(before), RoleDetails::Doctor(after))
            | (RoleDetails::Admin(before), RoleDetails::Admin(after)) => {
                changed.experience = diff_scalar(&before.experience, &after.experience);
                changed.specialization =
                    diff_scalar(&before.specialization, &after.specialization);
            }
            _ => {}
        }

        changed
    }

    /// Names of the changed fields, in declaration order.
    pub fn fields(&self) -> Vec<ProfileField> {
        let flags = [
            (ProfileField::FirstName, self.first_name.is_unset()),
            (ProfileField::LastName, self.last_name.is_unset()),
            (ProfileField::Bio, self.bio.is_unset()),
            (ProfileField::PlaceWork, self.place_work.is_unset()),
            (ProfileField::Location, self.location.is_unset()),
            (ProfileField::Avatar, self.avatar.is_unset()),
            (ProfileField::Birthday, self.birthday.is_unset()),
            (ProfileField::Contacts, self.contacts.is_unset()),
            (ProfileField::Education, self.education.is_unset()),
            (ProfileField::Gpa, self.gpa.is_unset()),
            (ProfileField::ProgramType, self.program_type.is_unset()),
            (ProfileField::Experience, self.experience.is_unset()),
            (ProfileField::Specialization, self.specialization.is_unset()),
        ];

        flags
            .into_iter()
            .filter(|(_, unset)| !unset)
            .map(|(field, _)| field)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}
