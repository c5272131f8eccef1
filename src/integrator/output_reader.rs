//! # Integrator output decoding
//!
//! `photodynam` writes a whitespace-delimited numeric matrix: one row per
//! requested time, `2 + 6N` columns for `N` bodies, laid out as
//! `[time, flux, positions×3×N, velocities×3×N]`.
//!
//! ## Column offsets (0-based)
//! -----------------
//! - column 0: time
//! - column 1: flux
//! - position of body `i`: columns `2+3i, 3+3i, 4+3i` = (x, y, z)
//! - velocity of body `i`: columns `3N+2+3i, 3N+3+3i, 3N+4+3i` = (vx, vy, vz)
//!
//! ## Sign conventions
//! -----------------
//! Orbit series are emitted as (−x, −y, z, −vx, −vy, vz) and radial
//! velocity as −vz: x/y and vx/vy are flipped between the integrator's
//! frame and ours while the z axis is not. This convention is a preserved
//! contract; do not re-derive it.
//!
//! Malformed, ragged, or empty output is a fatal decode error: rows are
//! never fabricated.

use nalgebra::{DMatrix, Vector3};

use crate::dataset::{Dataset, DatasetKind};
use crate::photodyn_errors::PhotodynError;
use crate::results::{DatasetResult, ResultSeries};
use crate::system::System;

/// Columns holding (x, y, z) for one body.
pub fn position_columns(body_index: usize) -> [usize; 3] {
    [
        2 + 3 * body_index,
        3 + 3 * body_index,
        4 + 3 * body_index,
    ]
}

/// Columns holding (vx, vy, vz) for one body among `nbodies`.
pub fn velocity_columns(nbodies: usize, body_index: usize) -> [usize; 3] {
    let base = 3 * nbodies + 2;
    [
        base + 3 * body_index,
        base + 3 * body_index + 1,
        base + 3 * body_index + 2,
    ]
}

/// The parsed integrator output for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputMatrix {
    matrix: DMatrix<f64>,
    nbodies: usize,
}

impl OutputMatrix {
    /// Parse the raw integrator stdout into a dense matrix.
    ///
    /// Every non-empty line must carry exactly `2 + 6·nbodies` numeric
    /// fields; a short or ragged row, an unparsable token, or an entirely
    /// empty document is a fatal error.
    ///
    /// Arguments
    /// -----------------
    /// * `raw`: the captured stdout text.
    /// * `nbodies`: the body count the input document was built with.
    pub fn parse(raw: &str, nbodies: usize) -> Result<Self, PhotodynError> {
        let expected = 2 + 6 * nbodies;
        let mut values: Vec<f64> = Vec::new();
        let mut nrows = 0usize;

        for (row, line) in raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
        {
            let mut got = 0usize;
            for (column, token) in line.split_whitespace().enumerate() {
                let value = token.parse::<f64>().map_err(|_| {
                    PhotodynError::InvalidOutputValue {
                        token: token.to_string(),
                        row,
                        column,
                    }
                })?;
                values.push(value);
                got += 1;
            }
            if got != expected {
                return Err(PhotodynError::ShortOutputRow {
                    row,
                    expected,
                    got,
                });
            }
            nrows += 1;
        }

        if nrows == 0 {
            return Err(PhotodynError::EmptyOutput);
        }

        Ok(OutputMatrix {
            matrix: DMatrix::from_row_iterator(nrows, expected, values),
            nbodies,
        })
    }

    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    fn column(&self, index: usize) -> Vec<f64> {
        self.matrix.column(index).iter().copied().collect()
    }

    fn negated_column(&self, index: usize) -> Vec<f64> {
        self.matrix.column(index).iter().map(|v| -v).collect()
    }

    /// Decode the matrix into the physical series of one dataset.
    ///
    /// The target body index is resolved through the same [`System`] used
    /// to serialize the input, so star ordering cannot diverge between the
    /// two directions.
    pub fn decode(
        &self,
        system: &System,
        dataset: &Dataset,
    ) -> Result<DatasetResult, PhotodynError> {
        let times = self.column(0);

        let series = match &dataset.kind {
            DatasetKind::Flux { .. } => ResultSeries::Flux {
                times,
                fluxes: self.column(1),
            },
            DatasetKind::Orbit { component } => {
                let cind = system.body_index(component)?;
                let [xc, yc, zc] = position_columns(cind);
                let [vxc, vyc, vzc] = velocity_columns(self.nbodies, cind);

                let positions = (0..self.nrows())
                    .map(|r| {
                        Vector3::new(
                            -self.matrix[(r, xc)],
                            -self.matrix[(r, yc)],
                            self.matrix[(r, zc)],
                        )
                    })
                    .collect();
                let velocities = (0..self.nrows())
                    .map(|r| {
                        Vector3::new(
                            -self.matrix[(r, vxc)],
                            -self.matrix[(r, vyc)],
                            self.matrix[(r, vzc)],
                        )
                    })
                    .collect();

                ResultSeries::Orbit {
                    times,
                    positions,
                    velocities,
                }
            }
            DatasetKind::RadialVelocity { component } => {
                let cind = system.body_index(component)?;
                let [_, _, vzc] = velocity_columns(self.nbodies, cind);
                ResultSeries::RadialVelocity {
                    times,
                    rvs: self.negated_column(vzc),
                }
            }
        };

        Ok(DatasetResult {
            dataset: dataset.name.clone(),
            component: dataset.kind.component().map(str::to_string),
            series,
        })
    }
}
