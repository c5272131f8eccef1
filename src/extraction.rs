//! # Parameter extraction
//!
//! Reads masses, radii, photometric inputs, and orbital elements out of the
//! system model and converts them into the fixed physical units the
//! `photodynam` integrator expects: GM in AU³·day⁻² (mass in solar masses
//! times k²), lengths in AU, angles in radians, times in days.
//!
//! ## Degraded mode
//! -----------------
//! The integrator only accepts a two-coefficient quadratic limb-darkening
//! law. A star configured with any other law is not rejected: its
//! coefficients are substituted with (0, 0) and a
//! [`Diagnostic::LimbDarkeningDegraded`] entry is recorded so callers can
//! detect the substitution programmatically. A missing passband luminosity,
//! by contrast, is a fatal validation error raised before any document is
//! rendered.

use log::warn;

use crate::constants::{AstronomicalUnit, GAUSS_GRAV_SQUARED};
use crate::dataset::{Dataset, DatasetKind, LimbDarkening};
use crate::photodyn_errors::PhotodynError;
use crate::system::{Orbit, System};

/// Non-fatal degradations recorded while extracting parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A star's configured limb-darkening law is not natively supported;
    /// coefficients (0, 0) were substituted
    LimbDarkeningDegraded {
        star: String,
        dataset: String,
        law: &'static str,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::LimbDarkeningDegraded { star, dataset, law } => write!(
                f,
                "ld law for {star} in {dataset} must be quadratic for photodynam, \
                 but is {law}: defaulting to coefficients (0, 0)"
            ),
        }
    }
}

/// The complete set of values needed to render one integrator input
/// document, already in integrator units and star order.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegratorInput {
    pub nbodies: usize,
    pub time0: f64,
    pub step_size: f64,
    pub orbit_error: f64,
    /// GM per star, AU³·day⁻²
    pub gms: Vec<f64>,
    /// Radius per star, AU
    pub radii: Vec<AstronomicalUnit>,
    /// Passband luminosity per star (divided by 4π only at serialization)
    pub pblums: Vec<f64>,
    /// First quadratic limb-darkening coefficient per star
    pub u1s: Vec<f64>,
    /// Second quadratic limb-darkening coefficient per star
    pub u2s: Vec<f64>,
    pub orbits: Vec<Orbit>,
}

/// Extract the integrator input for one dataset.
///
/// For flux datasets every star must carry photometric inputs with a set
/// passband luminosity; for orbit and radial-velocity datasets the
/// photometric fields are filled with inert placeholders (weight 1,
/// coefficients (0, 0)) because the integrator still expects them
/// syntactically.
///
/// Arguments
/// -----------------
/// * `system`: the star/orbit model; star order fixes the body indices.
/// * `step_size`, `orbit_error`, `time0`: integration controls.
/// * `dataset`: the dataset being produced, deciding the photometric path.
///
/// Return
/// ----------
/// * The [`IntegratorInput`] plus any degraded-mode [`Diagnostic`]s, or a
///   fatal [`PhotodynError`] (missing luminosity weight).
pub fn extract_input(
    system: &System,
    step_size: f64,
    orbit_error: f64,
    time0: f64,
    dataset: &Dataset,
) -> Result<(IntegratorInput, Vec<Diagnostic>), PhotodynError> {
    let stars = system.stars();
    let mut diagnostics = Vec::new();

    let gms = stars
        .iter()
        .map(|star| star.mass * GAUSS_GRAV_SQUARED)
        .collect();
    let radii = stars.iter().map(|star| star.radius).collect();

    let (pblums, u1s, u2s) = match &dataset.kind {
        DatasetKind::Flux { photometry } => {
            let mut pblums = Vec::with_capacity(stars.len());
            let mut u1s = Vec::with_capacity(stars.len());
            let mut u2s = Vec::with_capacity(stars.len());

            for star in stars {
                let missing = || PhotodynError::MissingLuminosityWeight {
                    star: star.id.clone(),
                    dataset: dataset.name.clone(),
                };
                // an absent entry and an unset pblum are the same failure
                let inputs = photometry.get(&star.id).ok_or_else(missing)?;
                pblums.push(inputs.pblum.ok_or_else(missing)?);

                match &inputs.limb_darkening {
                    LimbDarkening::Quadratic { u1, u2 } => {
                        u1s.push(*u1);
                        u2s.push(*u2);
                    }
                    other => {
                        let diagnostic = Diagnostic::LimbDarkeningDegraded {
                            star: star.id.clone(),
                            dataset: dataset.name.clone(),
                            law: other.law_name(),
                        };
                        warn!("{diagnostic}");
                        diagnostics.push(diagnostic);
                        u1s.push(0.0);
                        u2s.push(0.0);
                    }
                }
            }
            (pblums, u1s, u2s)
        }
        // dynamics only: the integrator still expects the photometric
        // lines, so pass inert placeholders
        DatasetKind::Orbit { .. } | DatasetKind::RadialVelocity { .. } => (
            vec![1.0; stars.len()],
            vec![0.0; stars.len()],
            vec![0.0; stars.len()],
        ),
    };

    let input = IntegratorInput {
        nbodies: stars.len(),
        time0,
        step_size,
        orbit_error,
        gms,
        radii,
        pblums,
        u1s,
        u2s,
        orbits: system.orbits().to_vec(),
    };

    Ok((input, diagnostics))
}
