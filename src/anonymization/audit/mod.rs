//! Audit logging module
//!
//! Provides an append-only record of anonymization runs.

pub mod logger;

pub use logger::AuditLogger;
