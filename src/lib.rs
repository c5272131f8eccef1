//! # photodyn
//!
//! Bridge between a structured multi-body stellar-system model and Josh
//! Carter's `photodynam` N-body photometric integrator, which consumes and
//! produces fixed-layout plain-text tables.
//!
//! The crate serializes a unit-tagged system description into the
//! integrator's positional input grammar, invokes the external executable,
//! and decodes its flat numeric output matrix back into per-dataset
//! physical time series — with the exact column-offset arithmetic and
//! sign/coordinate conventions required for an arbitrary number of bodies
//! and three observation kinds (photometric flux, barycentric
//! position/velocity, radial velocity).
//!
//! The integrator itself is external; it must be installed and reachable.
//! It is available at <https://github.com/dfm/photodynam>. Please cite
//!
//! * Science 331, 6017, 562-565, DOI:10.1126/science.1201274
//! * MNRAS 420, 2, 1630-1635, DOI:10.1111/j.1365-2966.2011.20151.x
//!
//! when using it. Entry point: [`photodyn::Photodyn`].

pub mod constants;
pub mod dataset;
pub mod extraction;
pub mod integrator;
pub mod photodyn;
pub mod photodyn_errors;
pub mod results;
pub mod system;
pub mod time;

pub use crate::dataset::{
    ComputeOptions, Dataset, DatasetKind, LimbDarkening, PerStarPhotometricInputs,
};
pub use crate::extraction::Diagnostic;
pub use crate::photodyn::{ComputeOutput, Photodyn};
pub use crate::photodyn_errors::PhotodynError;
pub use crate::results::{DatasetResult, ResultSeries, ResultSet};
pub use crate::system::{Orbit, Star, System};
