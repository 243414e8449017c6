//! Core library surface for the Blood Donation Manager.
//!
//! The record operations on [`Store`] are the whole persistence API: the TUI
//! in [`ui`] and the integration tests both go through them.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;
pub mod validation;

pub use config::Config;
pub use db::Store;
pub use error::{RegistryError, ValidationError};
pub use models::{BloodGroup, CampId, CampSummary, DonorId, DonorSummary, OrganizerId};

pub use ui::{run_app, App};
