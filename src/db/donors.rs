use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{CampId, DonorId, DonorSummary};
use crate::validation::NewDonor;

/// Insert the donor and their donation at `donor.camp_id` in one transaction.
/// The camp is not looked up first; a dangling id fails on the foreign key
/// and the donor row is rolled back with it.
pub fn insert_donor(conn: &mut Connection, donor: &NewDonor) -> Result<DonorId> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO Donor_Info (donor_name, age, blood_group, contact_number)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            donor.donor_name,
            donor.age,
            donor.blood_group.as_str(),
            donor.contact
        ],
    )?;
    let donor_id = DonorId(tx.last_insert_rowid());

    tx.execute(
        "INSERT INTO Donations (donor_id, camp_id) VALUES (?1, ?2)",
        params![donor_id.get(), donor.camp_id.get()],
    )?;

    tx.commit()?;
    info!(%donor_id, camp_id = %donor.camp_id, blood_group = %donor.blood_group, "donor added");
    Ok(donor_id)
}

/// Donors with a donation recorded at `camp_id`. An unknown camp and a camp
/// without donations both produce an empty list.
pub fn fetch_donors_for_camp(conn: &Connection, camp_id: CampId) -> Result<Vec<DonorSummary>> {
    let mut stmt = conn.prepare(
        "SELECT d.donor_id, d.donor_name, d.age, d.blood_group
         FROM Donor_Info d
         JOIN Donations dn ON d.donor_id = dn.donor_id
         WHERE dn.camp_id = ?1
         ORDER BY d.donor_id",
    )?;

    let donors = stmt
        .query_map([camp_id.get()], |row| {
            Ok(DonorSummary {
                id: DonorId(row.get(0)?),
                donor_name: row.get(1)?,
                age: row.get(2)?,
                blood_group: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!(%camp_id, count = donors.len(), "loaded donors for camp");
    Ok(donors)
}
