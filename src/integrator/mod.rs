//! # Integrator I/O
//!
//! Everything that touches the `photodynam` text interface lives here:
//!
//! - [`input_writer`] — renders the positional input document (system
//!   description and integration controls).
//! - [`report_writer`] — renders the report document (requested channels
//!   and evaluation times).
//! - [`invoker`] — resolves and runs the external executable against the
//!   two documents, capturing its stdout.
//! - [`output_reader`] — parses the whitespace-delimited output matrix and
//!   decodes it into per-dataset physical time series.
//!
//! The input and report grammars are strictly positional: the integrator
//! has no field names, so column order and star order are the entire
//! contract.

pub mod input_writer;
pub mod invoker;
pub mod output_reader;
pub mod report_writer;

pub use invoker::IntegratorExe;
pub use output_reader::OutputMatrix;
