//! Gig feed aggregation and ranking.
//!
//! The crate collects job/gig postings from public feeds, filters them with
//! composable predicates, and ranks them with a deterministic heuristic
//! scoring engine driven by either process-wide settings or a per-user
//! preference profile.

pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod fetch;
pub mod listings;
pub mod profiles;
pub mod scoring;
pub mod telemetry;
