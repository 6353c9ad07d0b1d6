use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// A user's profile as delivered by the backend.
///
/// The base shape is shared by every role; role-specific fields live in
/// [`RoleDetails`], flattened next to the `role` discriminant on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: Uuid,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub place_work: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// ISO-8601 date-time; only the date part is meaningful.
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contacts: Vec<Contact>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(flatten)]
    pub role: RoleDetails,
}

impl ProfileRecord {
    /// Copy with every defaultable field filled in: `bio` becomes `""` when absent.
    /// Sequences are already empty when absent or `null` on the wire.
    pub fn normalized(&self) -> Self {
        let mut copy = self.clone();
        if copy.bio.is_none() {
            copy.bio = Some(String::new());
        }
        copy
    }

    pub fn role(&self) -> Role {
        self.role.role()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleDetails {
    Student(StudentDetails),
    Doctor(ClinicianDetails),
    Admin(ClinicianDetails),
}

impl RoleDetails {
    pub fn role(&self) -> Role {
        match self {
            RoleDetails::Student(_) => Role::Student,
            RoleDetails::Doctor(_) => Role::Doctor,
            RoleDetails::Admin(_) => Role::Admin,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub program_type: Option<String>,
}

/// Shared by doctors and admins.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClinicianDetails {
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Doctor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// e.g. "email", "phone", "telegram"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub institution: String,
    pub degree: String,
    pub specialty: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_currently: bool,
}

/// Backends send `null` for empty lists and unset flags; treat it like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
