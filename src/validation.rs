//! Input rules applied by the record operations before anything is written.
//!
//! The forms hand us raw strings. These helpers trim them, check them in a
//! fixed order and return typed values so the persistence functions never see
//! unvalidated input.

use std::num::IntErrorKind;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::models::{BloodGroup, CampId};

pub const MIN_DONOR_AGE: i64 = 18;
pub const MAX_DONOR_AGE: i64 = 65;

/// Trimmed fields for a new camp and its organizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamp {
    pub organizer_name: String,
    pub organizer_contact: String,
    pub camp_name: String,
    pub location: String,
    pub date: String,
}

/// Typed fields for a new donor and the camp they donated at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonor {
    pub donor_name: String,
    pub age: i64,
    pub blood_group: BloodGroup,
    pub contact: String,
    pub camp_id: CampId,
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern compiles"))
}

/// Shape check only. `2024-13-45` is accepted; calendar validity is not
/// checked.
pub fn is_valid_date(date: &str) -> bool {
    date_pattern().is_match(date)
}

pub fn validate_camp(
    organizer_name: &str,
    organizer_contact: &str,
    camp_name: &str,
    location: &str,
    date: &str,
) -> Result<NewCamp, ValidationError> {
    let fields = [organizer_name, organizer_contact, camp_name, location, date].map(str::trim);
    if fields.iter().any(|field| field.is_empty()) {
        return Err(ValidationError::MissingCampFields);
    }

    let [organizer_name, organizer_contact, camp_name, location, date] = fields;
    if !is_valid_date(date) {
        return Err(ValidationError::InvalidDate);
    }

    Ok(NewCamp {
        organizer_name: organizer_name.to_string(),
        organizer_contact: organizer_contact.to_string(),
        camp_name: camp_name.to_string(),
        location: location.to_string(),
        date: date.to_string(),
    })
}

/// Checks run in order: required fields, integer parsing of age then camp id,
/// the age range, and finally the blood group.
pub fn validate_donor(
    donor_name: &str,
    age: &str,
    blood_group: &str,
    contact: &str,
    camp_id: &str,
) -> Result<NewDonor, ValidationError> {
    let donor_name = donor_name.trim();
    let age = age.trim();
    let blood_group = blood_group.trim().to_uppercase();
    let contact = contact.trim();
    let camp_id = camp_id.trim();

    if [donor_name, age, blood_group.as_str(), contact, camp_id]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(ValidationError::MissingDonorFields);
    }

    // An age too large for i64 is still an integer; it fails the range check.
    let age = match age.parse::<i64>() {
        Ok(age) => Some(age),
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            None
        }
        Err(source) => return Err(ValidationError::NotAnInteger { field: "Age", source }),
    };
    let camp_id = parse_integer("Camp ID", camp_id)?;

    let age = match age {
        Some(age) if (MIN_DONOR_AGE..=MAX_DONOR_AGE).contains(&age) => age,
        _ => return Err(ValidationError::AgeOutOfRange),
    };
    let blood_group = blood_group.parse::<BloodGroup>()?;

    Ok(NewDonor {
        donor_name: donor_name.to_string(),
        age,
        blood_group,
        contact: contact.to_string(),
        camp_id: CampId(camp_id),
    })
}

/// Parse the camp id typed into the donor lookup.
pub fn parse_camp_id(raw: &str) -> Result<CampId, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map(CampId)
        .map_err(|_| ValidationError::InvalidCampId)
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    raw.parse::<i64>()
        .map_err(|source| ValidationError::NotAnInteger { field, source })
}
