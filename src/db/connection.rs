use std::fs;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::Result;

/// Table definitions, in dependency order. Every statement is idempotent so
/// `initialize` can run on each start-up.
const SCHEMA: &[(&str, &str)] = &[
    (
        "Organizers",
        "CREATE TABLE IF NOT EXISTS Organizers (
            organizer_id INTEGER PRIMARY KEY AUTOINCREMENT,
            organizer_name TEXT NOT NULL,
            contact_number TEXT NOT NULL
        )",
    ),
    (
        "Camps",
        "CREATE TABLE IF NOT EXISTS Camps (
            camp_id INTEGER PRIMARY KEY AUTOINCREMENT,
            camp_name TEXT NOT NULL,
            location TEXT NOT NULL,
            date TEXT NOT NULL,
            organizer_id INTEGER NOT NULL,
            FOREIGN KEY (organizer_id) REFERENCES Organizers(organizer_id)
        )",
    ),
    (
        "Donor_Info",
        "CREATE TABLE IF NOT EXISTS Donor_Info (
            donor_id INTEGER PRIMARY KEY AUTOINCREMENT,
            donor_name TEXT NOT NULL,
            age INTEGER NOT NULL,
            blood_group TEXT NOT NULL,
            contact_number TEXT NOT NULL
        )",
    ),
    (
        "Donations",
        "CREATE TABLE IF NOT EXISTS Donations (
            donation_id INTEGER PRIMARY KEY AUTOINCREMENT,
            donor_id INTEGER NOT NULL,
            camp_id INTEGER NOT NULL,
            FOREIGN KEY (donor_id) REFERENCES Donor_Info(donor_id),
            FOREIGN KEY (camp_id) REFERENCES Camps(camp_id)
        )",
    ),
];

enum Location {
    File(PathBuf),
    /// A private in-memory database. The single connection is the database,
    /// so callers take turns through the mutex.
    Memory(Mutex<Connection>),
}

/// Handle to the blood donation database.
///
/// A `Store` only knows where the data lives. Every record operation calls
/// [`Store::connect`] to get its own [`StoreConnection`], uses it, and drops
/// it before returning, whichever way it returns.
pub struct Store {
    location: Location,
}

impl Store {
    /// Point at an on-disk database, creating parent directories as needed.
    /// Nothing is opened until the first operation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            location: Location::File(path),
        })
    }

    /// Fresh, empty database that lives as long as this `Store`.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            location: Location::Memory(Mutex::new(conn)),
        })
    }

    /// Path of the database file, or `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::Memory(_) => None,
        }
    }

    /// Create the four tables if they are missing. Running it against an
    /// existing database changes nothing.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connect()?;
        for (table, ddl) in SCHEMA {
            conn.execute(ddl, [])?;
            debug!(table, "ensured table exists");
        }
        info!(path = ?self.path(), "database initialized");
        Ok(())
    }

    /// Acquire a connection for one operation. Foreign key enforcement is
    /// switched on for every handle, since SQLite tracks it per connection.
    pub fn connect(&self) -> Result<StoreConnection<'_>> {
        let handle = match &self.location {
            Location::File(path) => StoreConnection::Owned(Connection::open(path)?),
            Location::Memory(shared) => {
                // Uncommitted transactions roll back on unwind; the data is intact.
                let guard = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                StoreConnection::Shared(guard)
            }
        };
        handle.execute("PRAGMA foreign_keys = ON", [])?;
        Ok(handle)
    }
}

/// A connection held for the duration of a single operation. Dropping it closes
/// the file connection or releases the in-memory lock.
pub enum StoreConnection<'a> {
    Owned(Connection),
    Shared(MutexGuard<'a, Connection>),
}

impl Deref for StoreConnection<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        match self {
            StoreConnection::Owned(conn) => conn,
            StoreConnection::Shared(guard) => &**guard,
        }
    }
}

impl DerefMut for StoreConnection<'_> {
    fn deref_mut(&mut self) -> &mut Connection {
        match self {
            StoreConnection::Owned(conn) => conn,
            StoreConnection::Shared(guard) => &mut **guard,
        }
    }
}
