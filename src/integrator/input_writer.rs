//! # Integrator input document
//!
//! Renders an [`IntegratorInput`] into the exact positional grammar
//! `photodynam` parses:
//!
//! ```text
//! <nbodies> <time0>
//! <step_size> <orbit_error>
//!
//! gm per star, space-separated, star order
//! radius per star
//! pblum/(4π) per star
//! u1 per star
//! u2 per star
//!
//! one line per orbit: sma ecc incl per0 long_an mean_anom
//! ```
//!
//! Blank lines are significant section separators. Lengths are in AU,
//! angles in radians; the luminosity normalization by 4π happens here, not
//! at extraction time.

use itertools::Itertools;

use crate::constants::FOUR_PI;
use crate::extraction::IntegratorInput;

fn join_floats(values: &[f64]) -> String {
    values.iter().map(|v| v.to_string()).join(" ")
}

/// Render the complete input document, newline-terminated.
pub fn render_input(input: &IntegratorInput) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("{} {}\n", input.nbodies, input.time0));
    doc.push_str(&format!("{} {}\n", input.step_size, input.orbit_error));
    doc.push('\n');

    doc.push_str(&join_floats(&input.gms));
    doc.push('\n');
    doc.push_str(&join_floats(&input.radii));
    doc.push('\n');
    doc.push_str(
        &input
            .pblums
            .iter()
            .map(|pblum| (pblum / FOUR_PI).to_string())
            .join(" "),
    );
    doc.push('\n');
    doc.push_str(&join_floats(&input.u1s));
    doc.push('\n');
    doc.push_str(&join_floats(&input.u2s));
    doc.push('\n');
    doc.push('\n');

    for orbit in &input.orbits {
        doc.push_str(&format!(
            "{} {} {} {} {} {}\n",
            orbit.semi_major_axis,
            orbit.eccentricity,
            orbit.inclination,
            orbit.periapsis_argument,
            orbit.ascending_node_longitude,
            orbit.mean_anomaly
        ));
    }

    doc
}
