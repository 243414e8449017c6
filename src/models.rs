//! Domain models that mirror the SQLite schema and get passed between the
//! record operations and the TUI. They stay light-weight data holders so the
//! other layers can focus on persistence and presentation.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub i64);

        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(
    /// Primary key of a row in `Organizers`.
    OrganizerId
);
row_id!(
    /// Primary key of a row in `Camps`.
    CampId
);
row_id!(
    /// Primary key of a row in `Donor_Info`.
    DonorId
);

/// The eight ABO/Rh groups accepted at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodGroup {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    /// Canonical upper-case label, which is also what gets stored.
    pub fn as_str(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl FromStr for BloodGroup {
    type Err = ValidationError;

    /// Accepts any casing and surrounding whitespace: `" o- "` parses as
    /// [`BloodGroup::ONegative`].
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_uppercase();
        BloodGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
            .ok_or(ValidationError::InvalidBloodGroup)
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the camp listing: a camp joined with its organizer's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampSummary {
    pub id: CampId,
    pub camp_name: String,
    pub location: String,
    /// Stored verbatim as `YYYY-MM-DD` text.
    pub date: String,
    pub organizer_name: String,
}

/// One row of the per-camp donor listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorSummary {
    pub id: DonorId,
    pub donor_name: String,
    pub age: i64,
    /// Kept as the stored text so rows written by other tools still load.
    pub blood_group: String,
}
