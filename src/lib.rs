//! Facility Advisor - self-assessments and price calculators for facility services
//!
//! This crate scores weighted questionnaires (security and hygiene checks) and
//! runs the small calculators of a facility-services site: decluttering price
//! ranges, winter-service cost comparison, de-icing agent ranking and
//! stain-removal advice. All tools are driven by declarative tables under
//! `data/` and exposed through an axum REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
