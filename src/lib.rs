//! Resume Preview - Live HTML preview of JSON Resume documents
//!
//! Watches a resume document, validates it against the JSON Resume schema
//! and renders it through a theme into a preview panel. Validation and
//! parse failures are rendered as error pages in the same panel.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
