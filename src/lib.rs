//! Terminal client for the HIRESENSE resume and LinkedIn analysis service.
//!
//! Submits a resume file or a LinkedIn profile URL to the analysis API,
//! then renders the returned scores and parsed fields as a dashboard. All
//! parsing and scoring happens service-side; this crate is transport and
//! presentation only.

pub mod cli;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod session;
pub mod types;
pub mod utils;
