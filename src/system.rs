//! # Stellar system model
//!
//! This module defines the structured, unit-tagged description of a multi-body
//! system handed to the bridge: [`Star`] (mass, radius), [`Orbit`] (the six
//! osculating elements at the reference epoch), and [`System`], the ordered
//! collection of both.
//!
//! ## Units & Conventions
//! -----------------
//! - **Masses:** solar masses.
//! - **Lengths:** astronomical units (star radii, semi-major axes).
//! - **Angles:** radians.
//!
//! ## Body ordering
//! -----------------
//! The order in which stars are added to a [`System`] defines the **body
//! index** used for every column-offset computation when decoding the
//! integrator output. The same `System` value is used to serialize the input
//! document and to decode the output matrix, so input and output ordering
//! cannot diverge.

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Orbits, Radian, SolarMass, Stars};
use crate::photodyn_errors::PhotodynError;

/// A single star of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Stable identifier, referenced by datasets bound to one component
    pub id: String,
    pub mass: SolarMass,
    pub radius: AstronomicalUnit,
}

/// Osculating orbital elements of one orbit at the reference epoch.
///
/// Units:
/// * `semi_major_axis`: AU (Astronomical Units)
/// * `eccentricity`: unitless
/// * `inclination`: radians
/// * `ascending_node_longitude`: radians
/// * `periapsis_argument`: radians
/// * `mean_anomaly`: radians
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Stable identifier of the orbit
    pub id: String,
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub mean_anomaly: Radian,
}

/// Ordered set of stars and orbits describing one system.
///
/// Star order is the contract shared between input serialization and output
/// decoding; see the module documentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct System {
    stars: Stars,
    orbits: Orbits,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a star; its body index is the current star count.
    pub fn add_star(&mut self, star: Star) -> &mut Self {
        self.stars.push(star);
        self
    }

    /// Append an orbit; orbits are serialized in insertion order.
    pub fn add_orbit(&mut self, orbit: Orbit) -> &mut Self {
        self.orbits.push(orbit);
        self
    }

    /// Number of bodies, the `N` of all column-offset arithmetic.
    pub fn nbodies(&self) -> usize {
        self.stars.len()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    /// Resolve a component identifier to its body index.
    ///
    /// Exactly one star must match: an unknown identifier is
    /// [`PhotodynError::UnknownComponent`], more than one match is
    /// [`PhotodynError::DuplicateStar`]. Silent first-match indexing is
    /// deliberately not offered.
    ///
    /// Arguments
    /// -----------------
    /// * `component`: the star identifier a dataset is bound to.
    ///
    /// Return
    /// ----------
    /// * The zero-based body index of the matching star.
    pub fn body_index(&self, component: &str) -> Result<usize, PhotodynError> {
        let mut matches = self
            .stars
            .iter()
            .enumerate()
            .filter(|(_, star)| star.id == component);

        let (index, _) = matches
            .next()
            .ok_or_else(|| PhotodynError::UnknownComponent(component.to_string()))?;

        if matches.next().is_some() {
            return Err(PhotodynError::DuplicateStar(component.to_string()));
        }

        Ok(index)
    }
}

#[cfg(test)]
mod test_system {
    use super::*;

    fn star(id: &str) -> Star {
        Star {
            id: id.to_string(),
            mass: 1.0,
            radius: 0.00465,
        }
    }

    #[test]
    fn body_index_follows_insertion_order() {
        let mut system = System::new();
        system
            .add_star(star("primary"))
            .add_star(star("secondary"))
            .add_star(star("tertiary"));

        assert_eq!(system.nbodies(), 3);
        assert_eq!(system.body_index("primary").unwrap(), 0);
        assert_eq!(system.body_index("secondary").unwrap(), 1);
        assert_eq!(system.body_index("tertiary").unwrap(), 2);
    }

    #[test]
    fn unknown_component_is_an_error() {
        let mut system = System::new();
        system.add_star(star("primary"));

        assert!(matches!(
            system.body_index("planet"),
            Err(PhotodynError::UnknownComponent(_))
        ));
    }

    #[test]
    fn duplicate_identifier_is_an_error() {
        let mut system = System::new();
        system.add_star(star("primary")).add_star(star("primary"));

        assert!(matches!(
            system.body_index("primary"),
            Err(PhotodynError::DuplicateStar(_))
        ));
    }
}
