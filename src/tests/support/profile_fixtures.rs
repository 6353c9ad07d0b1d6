use uuid::Uuid;

use crate::profile::domain::entities::{
    ClinicianDetails, Contact, Education, ProfileRecord, RoleDetails, StudentDetails,
};

pub fn email_contact(value: &str) -> Contact {
    Contact {
        id: None,
        kind: "email".to_string(),
        label: None,
        value: value.to_string(),
        is_public: Some(true),
    }
}

pub fn phone_contact(value: &str) -> Contact {
    Contact {
        id: Some(Uuid::new_v4()),
        kind: "phone".to_string(),
        label: Some("mobile".to_string()),
        value: value.to_string(),
        is_public: None,
    }
}

pub fn finished_education() -> Education {
    Education {
        id: None,
        institution: "Sechenov University".to_string(),
        degree: "Specialist".to_string(),
        specialty: "General Medicine".to_string(),
        start_date: "2012-09-01".to_string(),
        graduation_year: Some(2018),
        is_currently: false,
    }
}

pub fn doctor_profile() -> ProfileRecord {
    ProfileRecord {
        id: Uuid::parse_str("8d7e3c9a-2f4b-4c61-9a0e-3b5f6d7c8e91").unwrap(),
        first_name: Some("Анна".to_string()),
        last_name: Some("Иванова".to_string()),
        bio: Some("Cardiologist".to_string()),
        place_work: Some("City Clinical Hospital №1".to_string()),
        location: Some("Moscow".to_string()),
        avatar: Some("avatars/anna.png".to_string()),
        birthday: Some("1985-07-12T00:00:00.000Z".to_string()),
        contacts: vec![email_contact("anna@doclearn.test"), phone_contact("+7 900 000-00-00")],
        education: vec![finished_education()],
        role: RoleDetails::Doctor(ClinicianDetails {
            experience: Some("12 years".to_string()),
            specialization: Some("Cardiology".to_string()),
        }),
    }
}

pub fn student_profile() -> ProfileRecord {
    ProfileRecord {
        id: Uuid::parse_str("1c2d3e4f-5a6b-4c7d-8e9f-0a1b2c3d4e5f").unwrap(),
        first_name: Some("Иван".to_string()),
        last_name: Some("Петров".to_string()),
        bio: None,
        place_work: None,
        location: Some("Kazan".to_string()),
        avatar: None,
        birthday: Some("2000-03-15T00:00:00.000Z".to_string()),
        contacts: vec![],
        education: vec![],
        role: RoleDetails::Student(StudentDetails {
            gpa: Some(4.2),
            program_type: Some("bachelor".to_string()),
        }),
    }
}
