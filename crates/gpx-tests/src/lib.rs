//! Integration tests for gpx crates.
//!
//! End-to-end scenarios that cross crate boundaries: transforms built in
//! `gpx-math`, inverted, and pushed through texel formats from `gpx-format`.
