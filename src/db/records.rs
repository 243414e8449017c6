//! The four record operations the presentation layer calls.
//!
//! Each one takes raw form strings, validates them before touching the
//! database, then runs its statements on a connection that lives only for
//! that call.

use tracing::{error, warn};

use crate::error::{RegistryError, Result, ValidationError};
use crate::models::{CampId, CampSummary, DonorId, DonorSummary};
use crate::validation::{parse_camp_id, validate_camp, validate_donor};

use super::camps::{fetch_camps, insert_camp};
use super::connection::Store;
use super::donors::{fetch_donors_for_camp, insert_donor};

impl Store {
    /// Record a camp and the organizer running it. Returns the new camp id.
    pub fn add_camp(
        &self,
        organizer_name: &str,
        organizer_contact: &str,
        camp_name: &str,
        location: &str,
        date: &str,
    ) -> Result<CampId> {
        let camp = validate_camp(organizer_name, organizer_contact, camp_name, location, date)
            .map_err(rejected)?;
        let mut conn = self.connect()?;
        insert_camp(&mut conn, &camp).map_err(failed("add camp"))
    }

    /// Register a donor and their donation at `camp_id`. Returns the new
    /// donor id.
    pub fn add_donor(
        &self,
        donor_name: &str,
        age: &str,
        blood_group: &str,
        contact: &str,
        camp_id: &str,
    ) -> Result<DonorId> {
        let donor =
            validate_donor(donor_name, age, blood_group, contact, camp_id).map_err(rejected)?;
        let mut conn = self.connect()?;
        insert_donor(&mut conn, &donor).map_err(failed("add donor"))
    }

    pub fn list_camps(&self) -> Result<Vec<CampSummary>> {
        let conn = self.connect()?;
        fetch_camps(&conn).map_err(failed("list camps"))
    }

    /// Donors recorded at the camp whose id is typed in `camp_id`.
    pub fn list_donors_by_camp(&self, camp_id: &str) -> Result<Vec<DonorSummary>> {
        let camp_id = parse_camp_id(camp_id).map_err(rejected)?;
        let conn = self.connect()?;
        fetch_donors_for_camp(&conn, camp_id).map_err(failed("list donors"))
    }
}

fn rejected(err: ValidationError) -> RegistryError {
    warn!(reason = %err, "input rejected");
    err.into()
}

fn failed(operation: &'static str) -> impl Fn(RegistryError) -> RegistryError {
    move |err| {
        error!(operation, error = %err, "store operation failed");
        err
    }
}
