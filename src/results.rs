//! # Result containers
//!
//! The final artifact of a compute run: per-dataset physical time series,
//! keyed by dataset name and tagged with the bound component where the kind
//! has one. Units follow the crate conventions — days for time, AU for
//! length, AU/day for velocity, dimensionless flux.

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::constants::{AuPerDay, MJD};

/// Decoded physical time series of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSeries {
    /// Photometric light curve: {time, flux}
    Flux { times: Vec<MJD>, fluxes: Vec<f64> },
    /// Barycentric position/velocity series for one body:
    /// {time, x, y, z, vx, vy, vz}, AU and AU/day
    Orbit {
        times: Vec<MJD>,
        positions: Vec<Vector3<f64>>,
        velocities: Vec<Vector3<f64>>,
    },
    /// Line-of-sight velocity series for one body: {time, rv}, AU/day
    RadialVelocity { times: Vec<MJD>, rvs: Vec<AuPerDay> },
}

impl ResultSeries {
    pub fn times(&self) -> &[MJD] {
        match self {
            ResultSeries::Flux { times, .. }
            | ResultSeries::Orbit { times, .. }
            | ResultSeries::RadialVelocity { times, .. } => times,
        }
    }

    pub fn len(&self) -> usize {
        self.times().len()
    }

    pub fn is_empty(&self) -> bool {
        self.times().is_empty()
    }
}

/// One dataset's result, tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetResult {
    pub dataset: String,
    /// Bound star identifier for orbit/radial-velocity datasets; `None`
    /// for the system-wide flux kind
    pub component: Option<String>,
    pub series: ResultSeries,
}

/// All results of one compute run, keyed by dataset name.
pub type ResultSet = HashMap<String, DatasetResult>;
