use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::profile::application::changed_fields::ChangedFields;
use crate::profile::application::payload::ProfileUpdatePayload;
use crate::profile::domain::entities::{Contact, Education, ProfileRecord, Role, RoleDetails};
use crate::profile::domain::fields::ProfileField;

/// A single edit coming from the form, one variant per tracked field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    FirstName(Option<String>),
    LastName(Option<String>),
    Bio(Option<String>),
    PlaceWork(Option<String>),
    Location(Option<String>),
    Avatar(Option<String>),
    Birthday(Option<String>),
    Contacts(Vec<Contact>),
    Education(Vec<Education>),
    Gpa(Option<f64>),
    ProgramType(Option<String>),
    Experience(Option<String>),
    Specialization(Option<String>),
}

impl FieldUpdate {
    pub fn field(&self) -> ProfileField {
        match self {
            FieldUpdate::FirstName(_) => ProfileField::FirstName,
            FieldUpdate::LastName(_) => ProfileField::LastName,
            FieldUpdate::Bio(_) => ProfileField::Bio,
            FieldUpdate::PlaceWork(_) => ProfileField::PlaceWork,
            FieldUpdate::Location(_) => ProfileField::Location,
            FieldUpdate::Avatar(_) => ProfileField::Avatar,
            FieldUpdate::Birthday(_) => ProfileField::Birthday,
            FieldUpdate::Contacts(_) => ProfileField::Contacts,
            FieldUpdate::Education(_) => ProfileField::Education,
            FieldUpdate::Gpa(_) => ProfileField::Gpa,
            FieldUpdate::ProgramType(_) => ProfileField::ProgramType,
            FieldUpdate::Experience(_) => ProfileField::Experience,
            FieldUpdate::Specialization(_) => ProfileField::Specialization,
        }
    }

    /// Decode a JSON value coming from the UI into an update for `field`.
    pub fn from_json(field: ProfileField, value: Value) -> Result<Self, FormStateError> {
        Ok(match field {
            ProfileField::FirstName => FieldUpdate::FirstName(decode(field, value)?),
            ProfileField::LastName => FieldUpdate::LastName(decode(field, value)?),
            ProfileField::Bio => FieldUpdate::Bio(decode(field, value)?),
            ProfileField::PlaceWork => FieldUpdate::PlaceWork(decode(field, value)?),
            ProfileField::Location => FieldUpdate::Location(decode(field, value)?),
            ProfileField::Avatar => FieldUpdate::Avatar(decode(field, value)?),
            ProfileField::Birthday => FieldUpdate::Birthday(decode(field, value)?),
            ProfileField::Contacts => FieldUpdate::Contacts(decode(field, value)?),
            ProfileField::Education => FieldUpdate::Education(decode(field, value)?),
            ProfileField::Gpa => FieldUpdate::Gpa(decode(field, value)?),
            ProfileField::ProgramType => FieldUpdate::ProgramType(decode(field, value)?),
            ProfileField::Experience => FieldUpdate::Experience(decode(field, value)?),
            ProfileField::Specialization => FieldUpdate::Specialization(decode(field, value)?),
        })
    }
}

fn decode<T: DeserializeOwned>(field: ProfileField, value: Value) -> Result<T, FormStateError> {
    serde_json::from_value(value).map_err(|e| FormStateError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

/// Misuse of the controller. These are bugs in the calling form, not user errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormStateError {
    #[error("Unknown profile field: {0}")]
    UnknownField(String),

    #[error("Field {field} does not exist on a {role} profile")]
    FieldNotInRole { field: ProfileField, role: Role },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: ProfileField, reason: String },
}

/// Edit state of one profile form.
///
/// Holds the last saved record (baseline) and the record being edited (working
/// copy). Change detection is recomputed from both on every read, so it never
/// lags behind the latest [`update_field`](Self::update_field).
#[derive(Debug, Clone, PartialEq)]
pub struct FormStateController {
    baseline: ProfileRecord,
    working: ProfileRecord,
}

impl FormStateController {
    pub fn new(baseline: ProfileRecord) -> Self {
        let baseline = baseline.normalized();
        debug!(profile_id = %baseline.id, role = %baseline.role(), "Profile form initialized");
        Self {
            working: baseline.clone(),
            baseline,
        }
    }

    pub fn baseline(&self) -> &ProfileRecord {
        &self.baseline
    }

    pub fn working_copy(&self) -> &ProfileRecord {
        &self.working
    }

    pub fn role(&self) -> Role {
        self.baseline.role()
    }

    /// Replace one field of the working copy. The value itself is not validated.
    pub fn update_field(&mut self, update: FieldUpdate) -> Result<(), FormStateError> {
        let field = update.field();
        let role = self.working.role();

        if !field.applies_to(role) {
            error!(%field, %role, "Rejected update for field outside the profile role");
            return Err(FormStateError::FieldNotInRole { field, role });
        }

        let working = &mut self.working;
        match (update, &mut working.role) {
            (FieldUpdate::FirstName(v), _) => working.first_name = v,
            (FieldUpdate::LastName(v), _) => working.last_name = v,
            (FieldUpdate::Bio(v), _) => working.bio = v,
            (FieldUpdate::PlaceWork(v), _) => working.place_work = v,
            (FieldUpdate::Location(v), _) => working.location = v,
            (FieldUpdate::Avatar(v), _) => working.avatar = v,
            (FieldUpdate::Birthday(v), _) => working.birthday = v,
            (FieldUpdate::Contacts(v), _) => working.contacts = v,
            (FieldUpdate::Education(v), _) => working.education = v,
            (FieldUpdate::Gpa(v), RoleDetails::Student(details)) => details.gpa = v,
            (FieldUpdate::ProgramType(v), RoleDetails::Student(details)) => {
                details.program_type = v
            }
            (FieldUpdate::Experience(v), RoleDetails::Doctor(details))
            | (FieldUpdate::Experience(v), RoleDetails::Admin(details)) => details.experience = v,
            (FieldUpdate::Specialization(v), RoleDetails::Doctor(details))
            | (FieldUpdate::Specialization(v), RoleDetails::Admin(details)) => {
                details.specialization = v
            }
            _ => return Err(FormStateError::FieldNotInRole { field, role }),
        }

        debug!(%field, "Profile form field updated");
        Ok(())
    }

    /// String-keyed variant of [`update_field`](Self::update_field) for form inputs
    /// that only know the wire name of their field.
    pub fn update_field_by_name(&mut self, name: &str, value: Value) -> Result<(), FormStateError> {
        let field = name.parse::<ProfileField>().map_err(|e| {
            error!(name, "Rejected update for unknown profile field");
            FormStateError::UnknownField(e.0)
        })?;

        let update = FieldUpdate::from_json(field, value).inspect_err(|e| {
            error!(%field, error = %e, "Rejected undecodable profile field value");
        })?;

        self.update_field(update)
    }

    pub fn changed_fields(&self) -> ChangedFields {
        ChangedFields::between(&self.baseline, &self.working)
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.changed_fields().is_empty()
    }

    pub fn outbound_payload(&self) -> ProfileUpdatePayload {
        ProfileUpdatePayload::from_changes(&self.changed_fields())
    }

    /// Discard every edit. Idempotent.
    pub fn reset_to_baseline(&mut self) {
        self.working = self.baseline.normalized();
        debug!(profile_id = %self.baseline.id, "Profile form reset to baseline");
    }

    /// Adopt `saved` as the new baseline and working copy. Call only after the
    /// backend confirmed the save.
    pub fn commit_baseline(&mut self, saved: ProfileRecord) {
        let saved = saved.normalized();
        debug!(profile_id = %saved.id, "Profile form baseline committed");
        self.working = saved.clone();
        self.baseline = saved;
    }
}
