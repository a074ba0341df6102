//! Eligibility screening for caregiver job applications.
//!
//! The [`workflows::screening`] module holds the pure evaluation engine together with the
//! trait seams used to plug it into applicant-tracking exports, notifications and status
//! updates. [`config`], [`telemetry`] and [`error`] carry the ambient service plumbing.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
