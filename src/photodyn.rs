//! # Photodyn: the bridge façade
//!
//! This module defines the [`Photodyn`] struct, the central façade wiring
//! together the whole pipeline for each requested dataset:
//!
//! 1. **Parameter extraction** ([`crate::extraction`]) — system model to
//!    integrator units, with degraded-mode diagnostics.
//! 2. **Document rendering** ([`crate::integrator::input_writer`],
//!    [`crate::integrator::report_writer`]) — the two positional text
//!    documents.
//! 3. **Invocation** ([`crate::integrator::invoker`]) — one blocking run of
//!    the external executable per dataset, stdout captured.
//! 4. **Decoding & assembly** ([`crate::integrator::output_reader`],
//!    [`crate::results`]) — the raw matrix back into per-dataset physical
//!    series.
//!
//! Datasets are processed **strictly sequentially**; one dataset is fully
//! serialized, integrated, and decoded before the next begins. The completed
//! [`ComputeOutput`] is returned directly once every dataset has been
//! processed — there is no lazy or incremental delivery.
//!
//! ## Typical usage
//!
//! ```rust,no_run
//! use photodyn::dataset::{ComputeOptions, Dataset, DatasetKind};
//! use photodyn::photodyn::Photodyn;
//! use photodyn::system::{Star, System};
//!
//! let mut system = System::new();
//! system
//!     .add_star(Star { id: "primary".into(), mass: 1.0, radius: 0.00465 })
//!     .add_star(Star { id: "secondary".into(), mass: 0.8, radius: 0.00372 });
//!
//! let datasets = vec![Dataset {
//!     name: "rv01".into(),
//!     kind: DatasetKind::RadialVelocity { component: "secondary".into() },
//!     times: vec![0.0, 0.5, 1.0],
//! }];
//!
//! // Fails here already if the executable is unreachable
//! let bridge = Photodyn::new().unwrap();
//! let output = bridge.run_compute(&system, &ComputeOptions::default(), &datasets).unwrap();
//! assert!(output.diagnostics.is_empty());
//! ```

use std::collections::HashSet;

use crate::dataset::{ComputeOptions, Dataset};
use crate::extraction::{extract_input, Diagnostic};
use crate::integrator::input_writer::render_input;
use crate::integrator::report_writer::render_report;
use crate::integrator::{IntegratorExe, OutputMatrix};
use crate::photodyn_errors::PhotodynError;
use crate::results::ResultSet;
use crate::system::System;

/// Completed results of one compute run, together with any degraded-mode
/// diagnostics collected along the way.
///
/// Diagnostics are part of the value, not a log side channel, so callers
/// can detect degradation programmatically.
#[derive(Debug, Clone)]
pub struct ComputeOutput {
    pub results: ResultSet,
    pub diagnostics: Vec<Diagnostic>,
}

/// Handle on a resolved integrator, driving the per-dataset pipeline.
#[derive(Debug, Clone)]
pub struct Photodyn {
    exe: IntegratorExe,
}

impl Photodyn {
    /// Resolve `photodynam` on `PATH` and build the bridge.
    ///
    /// An unreachable integrator fails here, before any compute request is
    /// accepted or any file is written.
    pub fn new() -> Result<Self, PhotodynError> {
        Self::with_executable(crate::integrator::invoker::DEFAULT_EXECUTABLE)
    }

    /// Build the bridge against an explicit executable path or name.
    pub fn with_executable(exe: &str) -> Result<Self, PhotodynError> {
        Ok(Photodyn {
            exe: IntegratorExe::resolve(exe)?,
        })
    }

    pub fn executable(&self) -> &IntegratorExe {
        &self.exe
    }

    /// Run the integrator for every requested dataset and assemble the
    /// results.
    ///
    /// Dataset names must be unique within one request; star order inside
    /// `system` defines the body indices used both to serialize the input
    /// and to decode the output.
    ///
    /// Arguments
    /// -----------------
    /// * `system`: the ordered star/orbit model.
    /// * `options`: step size, orbit error tolerance, reference epoch.
    /// * `datasets`: the requested products, each with its evaluation grid.
    ///
    /// Return
    /// ----------
    /// * A [`ComputeOutput`] holding one [`crate::results::DatasetResult`]
    ///   per requested dataset plus collected diagnostics, or the first
    ///   fatal [`PhotodynError`].
    pub fn run_compute(
        &self,
        system: &System,
        options: &ComputeOptions,
        datasets: &[Dataset],
    ) -> Result<ComputeOutput, PhotodynError> {
        let mut seen = HashSet::new();
        for dataset in datasets {
            if !seen.insert(dataset.name.as_str()) {
                return Err(PhotodynError::DuplicateDataset(dataset.name.clone()));
            }
        }

        let mut results = ResultSet::new();
        let mut diagnostics = Vec::new();

        for dataset in datasets {
            // validate the component binding before rendering anything
            if let Some(component) = dataset.kind.component() {
                system.body_index(component)?;
            }

            let (input, dataset_diagnostics) = extract_input(
                system,
                options.step_size,
                options.orbit_error,
                options.time0,
                dataset,
            )?;
            diagnostics.extend(dataset_diagnostics);

            let input_doc = render_input(&input);
            let report_doc = render_report(&dataset.times);

            let raw = self.exe.run(&input_doc, &report_doc)?;
            let matrix = OutputMatrix::parse(&raw, system.nbodies())?;
            let result = matrix.decode(system, dataset)?;

            results.insert(dataset.name.clone(), result);
        }

        Ok(ComputeOutput {
            results,
            diagnostics,
        })
    }
}
