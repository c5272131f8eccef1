//! # Constants and type definitions for photodyn
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `photodyn` crate.
//!
//! ## Overview
//!
//! - The Gauss gravitational constant and its square (the GM conversion factor
//!   expected by the `photodynam` integrator)
//! - Core unit type aliases used across the crate
//! - Container types for storing the ordered stars and orbits of a system
//!
//! All quantities handed to the integrator are expressed in **AU**, **radians**,
//! **days**, and **solar masses**; the aliases below tag those units at API
//! boundaries.

use crate::system::{Orbit, Star};
use smallvec::SmallVec;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// 4π, the passband luminosity normalization divisor in the integrator input
pub const FOUR_PI: f64 = 4. * std::f64::consts::PI;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Gaussian gravitational constant k (used in classical orbit dynamics)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², the gravitational constant in AU³·Msun⁻¹·day⁻²; multiplied by a mass
/// in solar masses this yields the GM value the integrator consumes
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Velocity in astronomical units per day
pub type AuPerDay = f64;
/// Mass in solar masses
pub type SolarMass = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

// -------------------------------------------------------------------------------------------------
// Data containers
// -------------------------------------------------------------------------------------------------

/// A small, inline-optimized container for the stars of a single system.
///
/// The position of a star inside this container is its **body index**, the
/// zero-based offset used for all output-column arithmetic.
pub type Stars = SmallVec<[Star; 4]>;

/// A small, inline-optimized container for the orbits of a single system.
pub type Orbits = SmallVec<[Orbit; 3]>;
