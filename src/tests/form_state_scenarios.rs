//! End-to-end behavior of the profile edit form.

use maplit::btreeset;
use serde_json::json;
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::profile::application::changed_fields::ChangedFields;
use crate::profile::application::form_state::{FieldUpdate, FormStateController};
use crate::profile::domain::entities::{
    ClinicianDetails, Contact, ProfileRecord, RoleDetails,
};
use crate::profile::domain::fields::ProfileField;
use crate::tests::support::profile_fixtures::{
    doctor_profile, email_contact, finished_education, phone_contact, student_profile,
};

fn minimal_profile(first_name: &str) -> ProfileRecord {
    ProfileRecord {
        id: Uuid::new_v4(),
        first_name: Some(first_name.to_string()),
        last_name: None,
        bio: Some(String::new()),
        place_work: None,
        location: None,
        avatar: None,
        birthday: None,
        contacts: vec![],
        education: vec![],
        role: RoleDetails::Doctor(ClinicianDetails::default()),
    }
}

fn changed_set(form: &FormStateController) -> BTreeSet<ProfileField> {
    form.changed_fields().fields().into_iter().collect()
}

#[test]
fn test_noop_update_has_no_pending_changes() {
    let mut form = FormStateController::new(minimal_profile("Анна"));

    form.update_field(FieldUpdate::FirstName(Some("Анна".to_string())))
        .unwrap();

    assert!(!form.has_pending_changes());
    assert_eq!(form.changed_fields(), ChangedFields::default());
}

#[test]
fn test_edits_reverted_by_hand_leave_no_changes() {
    let baseline = doctor_profile();
    let mut form = FormStateController::new(baseline.clone());

    form.update_field(FieldUpdate::Bio(Some("Something else".to_string())))
        .unwrap();
    form.update_field(FieldUpdate::Contacts(vec![]))
        .unwrap();
    form.update_field(FieldUpdate::Experience(None)).unwrap();
    assert_eq!(
        changed_set(&form),
        btreeset! {ProfileField::Bio, ProfileField::Contacts, ProfileField::Experience}
    );

    form.update_field(FieldUpdate::Bio(baseline.bio.clone()))
        .unwrap();
    form.update_field(FieldUpdate::Contacts(baseline.contacts.clone()))
        .unwrap();
    form.update_field(FieldUpdate::Experience(Some("12 years".to_string())))
        .unwrap();

    assert!(!form.has_pending_changes());
    assert!(form.outbound_payload().is_empty());
}

#[test]
fn test_reset_is_idempotent() {
    let mut form = FormStateController::new(student_profile());
    form.update_field(FieldUpdate::Gpa(Some(3.1))).unwrap();
    form.update_field(FieldUpdate::Avatar(Some("avatars/new.png".to_string())))
        .unwrap();

    form.reset_to_baseline();
    let once = form.working_copy().clone();
    form.reset_to_baseline();

    assert_eq!(form.working_copy(), &once);
    assert_eq!(form.changed_fields(), ChangedFields::default());
}

#[test]
fn test_commit_then_diff_is_empty() {
    let mut form = FormStateController::new(doctor_profile());
    form.update_field(FieldUpdate::LastName(Some("Смирнова".to_string())))
        .unwrap();

    form.commit_baseline(student_profile());

    assert!(form.changed_fields().is_empty());
    assert_eq!(form.working_copy(), form.baseline());
}

#[test]
fn test_reordered_contacts_are_a_change() {
    let baseline = doctor_profile();
    let mut form = FormStateController::new(baseline.clone());

    let mut reordered = baseline.contacts.clone();
    reordered.reverse();
    form.update_field(FieldUpdate::Contacts(reordered.clone()))
        .unwrap();

    assert_eq!(changed_set(&form), btreeset! {ProfileField::Contacts});
    assert_eq!(form.changed_fields().contacts.into_value(), Some(reordered));
}

#[test]
fn test_unfinished_education_without_year_is_not_sent() {
    let mut form = FormStateController::new(doctor_profile());
    let mut unfinished = finished_education();
    unfinished.institution = "Pirogov University".to_string();
    unfinished.graduation_year = None;
    unfinished.is_currently = false;

    form.update_field(FieldUpdate::Education(vec![
        finished_education(),
        unfinished.clone(),
    ]))
    .unwrap();

    let changed = form.changed_fields().education.into_value().unwrap();
    assert!(changed.contains(&unfinished));
    assert_eq!(form.outbound_payload().education, Some(vec![finished_education()]));
}

#[test]
fn test_birthday_time_noise_is_ignored() {
    let mut baseline = minimal_profile("Анна");
    baseline.birthday = Some("1990-05-01T00:00:00.000Z".to_string());
    let mut form = FormStateController::new(baseline);

    form.update_field(FieldUpdate::Birthday(Some(
        "1990-05-01T03:00:00.000Z".to_string(),
    )))
    .unwrap();
    assert!(!form.has_pending_changes());

    form.update_field(FieldUpdate::Birthday(Some(
        "1990-05-02T00:00:00.000Z".to_string(),
    )))
    .unwrap();
    assert_eq!(
        form.outbound_payload().birthday.as_deref(),
        Some("1990-05-02T00:00:00.000Z")
    );
}

#[test]
fn test_is_public_normalization() {
    let mut baseline = minimal_profile("Анна");
    baseline.contacts = vec![Contact {
        is_public: Some(true),
        ..email_contact("a@x.com")
    }];
    let mut form = FormStateController::new(baseline);

    // true -> unset reads as true -> false
    form.update_field(FieldUpdate::Contacts(vec![Contact {
        is_public: None,
        ..email_contact("a@x.com")
    }]))
    .unwrap();
    assert!(form.has_pending_changes());

    // explicit false and unset are the same
    form.commit_baseline(form.working_copy().clone());
    form.update_field(FieldUpdate::Contacts(vec![Contact {
        is_public: Some(false),
        ..email_contact("a@x.com")
    }]))
    .unwrap();
    assert!(!form.has_pending_changes());
}

#[test]
fn test_invalid_contact_kept_in_changes_but_not_sent() {
    let mut form = FormStateController::new(minimal_profile("Анна"));

    form.update_field(FieldUpdate::Contacts(vec![
        email_contact("a@x.com"),
        phone_contact(""),
    ]))
    .unwrap();

    let changed = form.changed_fields().contacts.into_value().unwrap();
    assert_eq!(changed.len(), 2);

    let sent = form.outbound_payload().contacts.unwrap();
    assert_eq!(sent, vec![email_contact("a@x.com")]);
}

#[test]
fn test_payload_json_matches_backend_shape() {
    let mut form = FormStateController::new(doctor_profile());

    form.update_field_by_name("firstName", json!("Мария"))
        .unwrap();
    form.update_field_by_name("location", json!(""))
        .unwrap();
    form.update_field_by_name(
        "contacts",
        json!([
            { "type": "email", "value": "maria@doclearn.test", "isPublic": false },
            { "type": "phone", "value": " " }
        ]),
    )
    .unwrap();

    let body = serde_json::Value::Object(form.outbound_payload().to_json().unwrap());

    assert_eq!(
        body,
        json!({
            "firstName": "Мария",
            "contacts": [{ "type": "email", "value": "maria@doclearn.test", "isPublic": false }]
        })
    );
}
