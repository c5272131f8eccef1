use photodyn::system::{Orbit, Star, System};

/// A detached eclipsing-binary-like model shared by the integration tests.
pub fn two_star_system() -> System {
    let mut system = System::new();
    system
        .add_star(Star {
            id: "primary".into(),
            mass: 1.0,
            radius: 0.00465,
        })
        .add_star(Star {
            id: "secondary".into(),
            mass: 0.8,
            radius: 0.00372,
        })
        .add_orbit(Orbit {
            id: "binary".into(),
            semi_major_axis: 0.05,
            eccentricity: 0.1,
            inclination: 1.5,
            ascending_node_longitude: 0.0,
            periapsis_argument: 0.3,
            mean_anomaly: 0.0,
        });
    system
}

/// Write an executable shell script standing in for `photodynam`.
///
/// The script receives the input and report paths as positional arguments,
/// exactly like the real integrator.
#[cfg(unix)]
pub fn stub_integrator(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("photodynam");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
