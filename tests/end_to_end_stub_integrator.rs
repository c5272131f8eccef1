//! End-to-end runs of the bridge against a stub integrator executable.
//!
//! The stub echoes one output row per requested time with fixed position
//! and velocity columns, which pins down the full pipeline: document
//! rendering, invocation, matrix parsing, offset arithmetic, and the sign
//! conventions, without needing `photodynam` installed.

#![cfg(unix)]

mod common;

use std::collections::HashMap;

use approx::assert_relative_eq;
use nalgebra::Vector3;
use photodyn::dataset::{
    ComputeOptions, Dataset, DatasetKind, LimbDarkening, PerStarPhotometricInputs,
};
use photodyn::extraction::Diagnostic;
use photodyn::photodyn::Photodyn;
use photodyn::photodyn_errors::PhotodynError;
use photodyn::results::ResultSeries;

use common::{stub_integrator, two_star_system};

/// One 14-column row per requested time: time from the report file, flux
/// 1.5, body0 pos (1,2,3), body1 pos (4,5,6), body0 vel (.1,.2,.3),
/// body1 vel (.4,.5,.6).
const ECHO_ROWS: &str =
    r#"awk 'NR>1 { print $1, 1.5, 1, 2, 3, 4, 5, 6, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6 }' "$2""#;

fn bridge_with(body: &str) -> (tempfile::TempDir, Photodyn) {
    let dir = tempfile::tempdir().unwrap();
    let exe = stub_integrator(dir.path(), body);
    let bridge = Photodyn::with_executable(exe.to_str().unwrap()).unwrap();
    (dir, bridge)
}

#[test]
fn orbit_dataset_round_trips_with_sign_conventions() {
    let (_dir, bridge) = bridge_with(ECHO_ROWS);
    let system = two_star_system();
    let datasets = vec![Dataset {
        name: "orb01".into(),
        kind: DatasetKind::Orbit {
            component: "secondary".into(),
        },
        times: vec![0.0, 0.5, 1.0],
    }];

    let output = bridge
        .run_compute(&system, &ComputeOptions::default(), &datasets)
        .unwrap();

    assert!(output.diagnostics.is_empty());
    let result = &output.results["orb01"];
    assert_eq!(result.component.as_deref(), Some("secondary"));
    match &result.series {
        ResultSeries::Orbit {
            times,
            positions,
            velocities,
        } => {
            assert_eq!(times.len(), 3);
            assert_relative_eq!(times[1], 0.5, epsilon = 1e-12);
            for position in positions {
                assert_eq!(position, &Vector3::new(-4.0, -5.0, 6.0));
            }
            for velocity in velocities {
                assert_eq!(velocity, &Vector3::new(-0.4, -0.5, 0.6));
            }
        }
        other => panic!("expected an orbit series, got {other:?}"),
    }
}

#[test]
fn radial_velocity_dataset_is_negated_vz() {
    let (_dir, bridge) = bridge_with(ECHO_ROWS);
    let system = two_star_system();
    let datasets = vec![Dataset {
        name: "rv01".into(),
        kind: DatasetKind::RadialVelocity {
            component: "primary".into(),
        },
        times: vec![0.25],
    }];

    let output = bridge
        .run_compute(&system, &ComputeOptions::default(), &datasets)
        .unwrap();

    match &output.results["rv01"].series {
        ResultSeries::RadialVelocity { times, rvs } => {
            assert_relative_eq!(times[0], 0.25, epsilon = 1e-12);
            assert_eq!(rvs, &vec![-0.3]);
        }
        other => panic!("expected an rv series, got {other:?}"),
    }
}

#[test]
fn flux_dataset_with_degraded_limb_darkening() {
    let (_dir, bridge) = bridge_with(ECHO_ROWS);
    let system = two_star_system();

    let mut photometry = HashMap::new();
    photometry.insert(
        "primary".to_string(),
        PerStarPhotometricInputs {
            pblum: Some(4.0),
            limb_darkening: LimbDarkening::Quadratic { u1: 0.3, u2: 0.2 },
        },
    );
    photometry.insert(
        "secondary".to_string(),
        PerStarPhotometricInputs {
            pblum: Some(1.0),
            limb_darkening: LimbDarkening::Linear { u1: 0.6 },
        },
    );
    let datasets = vec![Dataset {
        name: "lc01".into(),
        kind: DatasetKind::Flux { photometry },
        times: vec![0.0, 1.0],
    }];

    let output = bridge
        .run_compute(&system, &ComputeOptions::default(), &datasets)
        .unwrap();

    // integration proceeded, and the degradation is visible in the value
    assert_eq!(
        output.diagnostics,
        vec![Diagnostic::LimbDarkeningDegraded {
            star: "secondary".into(),
            dataset: "lc01".into(),
            law: "linear",
        }]
    );
    match &output.results["lc01"].series {
        ResultSeries::Flux { fluxes, .. } => assert_eq!(fluxes, &vec![1.5, 1.5]),
        other => panic!("expected a flux series, got {other:?}"),
    }
}

#[test]
fn missing_pblum_fails_before_invocation() {
    // a stub that would poison the run if ever executed
    let (_dir, bridge) = bridge_with("echo should-never-run; exit 3");
    let system = two_star_system();

    let mut photometry = HashMap::new();
    photometry.insert(
        "primary".to_string(),
        PerStarPhotometricInputs {
            pblum: None,
            limb_darkening: LimbDarkening::Quadratic { u1: 0.3, u2: 0.2 },
        },
    );
    let datasets = vec![Dataset {
        name: "lc01".into(),
        kind: DatasetKind::Flux { photometry },
        times: vec![0.0],
    }];

    let err = bridge
        .run_compute(&system, &ComputeOptions::default(), &datasets)
        .err()
        .unwrap();
    assert!(matches!(
        err,
        PhotodynError::MissingLuminosityWeight { ref star, .. } if star == "primary"
    ));
}

#[test]
fn integrator_crash_is_fatal_not_fabricated() {
    let (_dir, bridge) = bridge_with("exit 7");
    let system = two_star_system();
    let datasets = vec![Dataset {
        name: "rv01".into(),
        kind: DatasetKind::RadialVelocity {
            component: "primary".into(),
        },
        times: vec![0.0],
    }];

    let err = bridge
        .run_compute(&system, &ComputeOptions::default(), &datasets)
        .err()
        .unwrap();
    assert!(matches!(err, PhotodynError::IntegratorFailed { .. }));
}

#[test]
fn empty_integrator_output_is_fatal() {
    let (_dir, bridge) = bridge_with("exit 0");
    let system = two_star_system();
    let datasets = vec![Dataset {
        name: "orb01".into(),
        kind: DatasetKind::Orbit {
            component: "primary".into(),
        },
        times: vec![0.0],
    }];

    let err = bridge
        .run_compute(&system, &ComputeOptions::default(), &datasets)
        .err()
        .unwrap();
    assert!(matches!(err, PhotodynError::EmptyOutput));
}

#[test]
fn duplicate_dataset_names_are_rejected_up_front() {
    let (_dir, bridge) = bridge_with("echo should-never-run; exit 3");
    let system = two_star_system();
    let dataset = Dataset {
        name: "rv01".into(),
        kind: DatasetKind::RadialVelocity {
            component: "primary".into(),
        },
        times: vec![0.0],
    };
    let datasets = vec![dataset.clone(), dataset];

    let err = bridge
        .run_compute(&system, &ComputeOptions::default(), &datasets)
        .err()
        .unwrap();
    assert!(matches!(err, PhotodynError::DuplicateDataset(_)));
}

#[test]
fn multiple_datasets_are_processed_sequentially() {
    let (_dir, bridge) = bridge_with(ECHO_ROWS);
    let system = two_star_system();
    let datasets = vec![
        Dataset {
            name: "orb01".into(),
            kind: DatasetKind::Orbit {
                component: "primary".into(),
            },
            times: vec![0.0, 1.0],
        },
        Dataset {
            name: "rv01".into(),
            kind: DatasetKind::RadialVelocity {
                component: "secondary".into(),
            },
            times: vec![2.0],
        },
    ];

    let output = bridge
        .run_compute(&system, &ComputeOptions::default(), &datasets)
        .unwrap();

    assert_eq!(output.results.len(), 2);
    assert_eq!(output.results["orb01"].series.len(), 2);
    assert_eq!(output.results["rv01"].series.len(), 1);
    match &output.results["rv01"].series {
        ResultSeries::RadialVelocity { rvs, .. } => assert_eq!(rvs, &vec![-0.6]),
        other => panic!("expected an rv series, got {other:?}"),
    }
}
