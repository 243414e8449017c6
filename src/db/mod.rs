//! Persistence module split across logical submodules.

mod camps;
mod connection;
mod donors;
mod records;

pub use camps::{fetch_camps, insert_camp};
pub use connection::{Store, StoreConnection};
pub use donors::{fetch_donors_for_camp, insert_donor};
