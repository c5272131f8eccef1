//! # Datasets and compute options
//!
//! A [`Dataset`] names one requested synthetic product: a photometric light
//! curve ([`DatasetKind::Flux`]), a barycentric position/velocity time series
//! for one star ([`DatasetKind::Orbit`]), or a line-of-sight velocity series
//! for one star ([`DatasetKind::RadialVelocity`]). Each dataset carries
//! exactly one evaluation grid in MJD.
//!
//! Flux datasets additionally carry [`PerStarPhotometricInputs`] for every
//! star: a passband luminosity (explicitly optional, so "unset" is a
//! type-checked state rather than a magic number) and a [`LimbDarkening`]
//! law. The integrator only accepts a two-coefficient quadratic law; other
//! laws are accepted here and degraded at extraction time (see
//! [`crate::extraction`]).
//!
//! [`ComputeOptions`] holds the integration controls shared by all datasets
//! of one run: step size, orbit-solver error tolerance, and the reference
//! epoch `time0`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::MJD;

/// Limb-darkening law configured for one star in one flux dataset.
///
/// Only [`LimbDarkening::Quadratic`] is natively supported by the
/// integrator; any other law is substituted with coefficients (0, 0) and
/// reported as a degraded-mode diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LimbDarkening {
    Quadratic { u1: f64, u2: f64 },
    Linear { u1: f64 },
    Logarithmic { u1: f64, u2: f64 },
    SquareRoot { u1: f64, u2: f64 },
}

impl LimbDarkening {
    /// Human-readable law name, used in diagnostics.
    pub fn law_name(&self) -> &'static str {
        match self {
            LimbDarkening::Quadratic { .. } => "quadratic",
            LimbDarkening::Linear { .. } => "linear",
            LimbDarkening::Logarithmic { .. } => "logarithmic",
            LimbDarkening::SquareRoot { .. } => "square_root",
        }
    }
}

/// Per-star photometric inputs of one flux dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerStarPhotometricInputs {
    /// Passband luminosity weight; `None` means not set, which is a fatal
    /// validation error when a flux dataset is requested
    pub pblum: Option<f64>,
    pub limb_darkening: LimbDarkening,
}

/// The three synthetic products the bridge can request from the integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DatasetKind {
    /// System-wide photometric light curve; photometric inputs keyed by
    /// star identifier, required for every star of the system
    Flux {
        photometry: HashMap<String, PerStarPhotometricInputs>,
    },
    /// Barycentric position/velocity time series for one star
    Orbit { component: String },
    /// Line-of-sight velocity time series for one star
    RadialVelocity { component: String },
}

impl DatasetKind {
    /// The star this dataset is bound to, if it is a single-body product.
    pub fn component(&self) -> Option<&str> {
        match self {
            DatasetKind::Flux { .. } => None,
            DatasetKind::Orbit { component } | DatasetKind::RadialVelocity { component } => {
                Some(component)
            }
        }
    }
}

/// One requested dataset: a name, a kind, and its evaluation grid.
///
/// The grid is used exactly as given: no resampling, no deduplication, no
/// reordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub kind: DatasetKind,
    /// Requested evaluation times, MJD
    pub times: Vec<MJD>,
}

/// Integration controls shared by all datasets of one compute run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeOptions {
    /// Integrator step size, days
    pub step_size: f64,
    /// Orbit-solver error tolerance
    pub orbit_error: f64,
    /// Reference epoch (time zero), MJD
    pub time0: MJD,
}

impl Default for ComputeOptions {
    fn default() -> Self {
        ComputeOptions {
            step_size: 0.01,
            orbit_error: 1e-20,
            time0: 0.0,
        }
    }
}
