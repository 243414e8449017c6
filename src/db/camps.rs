use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{CampId, CampSummary, OrganizerId};
use crate::validation::NewCamp;

/// Insert the organizer and then the camp that references it. Both rows are
/// written in one transaction: a failure on the camp leaves no orphaned
/// organizer behind.
pub fn insert_camp(conn: &mut Connection, camp: &NewCamp) -> Result<CampId> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO Organizers (organizer_name, contact_number) VALUES (?1, ?2)",
        params![camp.organizer_name, camp.organizer_contact],
    )?;
    let organizer_id = OrganizerId(tx.last_insert_rowid());

    tx.execute(
        "INSERT INTO Camps (camp_name, location, date, organizer_id) VALUES (?1, ?2, ?3, ?4)",
        params![camp.camp_name, camp.location, camp.date, organizer_id.get()],
    )?;
    let camp_id = CampId(tx.last_insert_rowid());

    tx.commit()?;
    info!(%camp_id, %organizer_id, camp = %camp.camp_name, "camp added");
    Ok(camp_id)
}

/// Every camp together with its organizer's name, in insertion order.
pub fn fetch_camps(conn: &Connection) -> Result<Vec<CampSummary>> {
    let mut stmt = conn.prepare(
        "SELECT c.camp_id, c.camp_name, c.location, c.date, o.organizer_name
         FROM Camps c
         JOIN Organizers o ON c.organizer_id = o.organizer_id
         ORDER BY c.camp_id",
    )?;

    let camps = stmt
        .query_map([], |row| {
            Ok(CampSummary {
                id: CampId(row.get(0)?),
                camp_name: row.get(1)?,
                location: row.get(2)?,
                date: row.get(3)?,
                organizer_name: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!(count = camps.len(), "loaded camps");
    Ok(camps)
}
