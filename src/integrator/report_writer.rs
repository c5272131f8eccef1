//! # Integrator report document
//!
//! The second document handed to `photodynam`: a header line naming the
//! requested output channels, then one evaluation time per line. The
//! integrator has no partial channel selection, so all four channels are
//! always requested:
//!
//! - `t` — times
//! - `F` — fluxes
//! - `x` — light-time corrected positions
//! - `v` — light-time corrected velocities

use itertools::Itertools;

use crate::constants::MJD;

/// Channel header written for every request, trailing space included.
const REPORT_HEADER: &str = "t F x v \n";

/// Render the report document for one evaluation grid.
///
/// The grid is written exactly as given: no resampling, no deduplication,
/// no reordering.
pub fn render_report(times: &[MJD]) -> String {
    let mut doc = String::from(REPORT_HEADER);
    doc.push_str(&times.iter().map(|t| t.to_string()).join("\n"));
    if !times.is_empty() {
        doc.push('\n');
    }
    doc
}
