//! Loan approval prediction service library.
//!
//! The heart of the crate is [`scoring`]: a heuristic engine that maps a
//! validated applicant record and a model selector to an approval decision
//! and probability, plus the intake guard and HTTP router around it.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
