use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entities::Role;

/// Every profile field the edit form tracks, named by its wire key.
///
/// Declaration order is the order used when listing changed fields.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FirstName,
    LastName,
    Bio,
    PlaceWork,
    Location,
    Avatar,
    Birthday,
    Contacts,
    Education,
    Gpa,
    ProgramType,
    Experience,
    Specialization,
}

impl ProfileField {
    pub const ALL: [ProfileField; 13] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Bio,
        ProfileField::PlaceWork,
        ProfileField::Location,
        ProfileField::Avatar,
        ProfileField::Birthday,
        ProfileField::Contacts,
        ProfileField::Education,
        ProfileField::Gpa,
        ProfileField::ProgramType,
        ProfileField::Experience,
        ProfileField::Specialization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "firstName",
            ProfileField::LastName => "lastName",
            ProfileField::Bio => "bio",
            ProfileField::PlaceWork => "placeWork",
            ProfileField::Location => "location",
            ProfileField::Avatar => "avatar",
            ProfileField::Birthday => "birthday",
            ProfileField::Contacts => "contacts",
            ProfileField::Education => "education",
            ProfileField::Gpa => "gpa",
            ProfileField::ProgramType => "programType",
            ProfileField::Experience => "experience",
            ProfileField::Specialization => "specialization",
        }
    }

    /// Whether a profile with `role` carries this field.
    pub fn applies_to(&self, role: Role) -> bool {
        match self {
            ProfileField::Gpa | ProfileField::ProgramType => role == Role::Student,
            ProfileField::Experience | ProfileField::Specialization => {
                matches!(role, Role::Doctor | Role::Admin)
            }
            _ => true,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown profile field: {0}")]
pub struct UnknownProfileField(pub String);

impl FromStr for ProfileField {
    type Err = UnknownProfileField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownProfileField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_every_wire_name() {
        for field in ProfileField::ALL {
            assert_eq!(field.as_str().parse::<ProfileField>(), Ok(field));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_and_snake_case() {
        assert_eq!(
            "first_name".parse::<ProfileField>(),
            Err(UnknownProfileField("first_name".to_string()))
        );
        assert!("email".parse::<ProfileField>().is_err());
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        let json = serde_json::to_value(ProfileField::PlaceWork).unwrap();
        assert_eq!(json, "placeWork");
    }

    #[test]
    fn test_applies_to_role_specific_fields() {
        assert!(ProfileField::Gpa.applies_to(Role::Student));
        assert!(!ProfileField::Gpa.applies_to(Role::Doctor));
        assert!(ProfileField::Specialization.applies_to(Role::Admin));
        assert!(!ProfileField::Experience.applies_to(Role::Student));
        assert!(ProfileField::Contacts.applies_to(Role::Doctor));
    }
}
