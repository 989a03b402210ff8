#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Report filtering applied before rendering.
//!
//! The dashboard narrows the report set by time of day, decibel range,
//! and audio category before handing it to the heat map and the marker
//! clusterer. Filtering is pure and preserves input order, so cluster
//! output stays stable for a given filter.

pub mod filter;

pub use filter::{filter_reports, matches_filter};
