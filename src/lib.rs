//! TTB COLA label verification decision engine.
//!
//! Compares the field values claimed on a Certificate of Label Approval
//! application against values extracted from the label image, and resolves
//! the per-field verdicts into one label disposition with a correction
//! deadline. The `routes` module exposes the engine over HTTP.

pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
