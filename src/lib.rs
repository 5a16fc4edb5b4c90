//! AHP Engine - Analytic Hierarchy Process weighting and ranking
//!
//! This crate derives priority weights from pairwise comparison matrices,
//! checks their consistency, and synthesizes per-criterion weights into a
//! final ranking of alternatives.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
