//! Integration tests for the 2D Euler solver.
//!
//! These tests verify:
//! - Conservation on periodic domains for every scheme combination
//! - CFL step size
//! - Steady uniform flow
//! - X/Y symmetry of the split update
//! - Setup validation and fatal-state reporting

use std::f64::consts::PI;

use fv_euler::{
    Axis, BoundaryKind, ConfigError, HydroError, HydroScheme, LimiterKind, Primitive,
    ReconstructionKind, Simulation, StateError, TimeIntegrationKind,
};

const GAMMA: f64 = 1.4;

/// Smooth density wave advected diagonally through a periodic box.
fn density_wave(x: f64, y: f64) -> Primitive {
    let rho = 1.0 + 0.2 * (2.0 * PI * x).sin() * (2.0 * PI * y).cos();
    Primitive::new(rho, 0.5, -0.3, 1.0)
}

fn setup(
    scheme: HydroScheme,
    n: usize,
    boundary: BoundaryKind,
    init: impl FnMut(f64, f64) -> Primitive,
) -> Simulation {
    let mut sim = Simulation::new(scheme).unwrap();
    sim.set_domain(n, n, 0.0, 1.0, 0.0, boundary).unwrap();
    sim.set_fluid_properties(GAMMA).unwrap();
    sim.set_primitive_from_fn(init).unwrap();
    sim.sync_conserved().unwrap();
    sim
}

fn all_schemes() -> Vec<HydroScheme> {
    let mut schemes = vec![HydroScheme::first_order(0.8)];
    for limiter in LimiterKind::ALL {
        for ti in [
            TimeIntegrationKind::Euler,
            TimeIntegrationKind::Hancock,
            TimeIntegrationKind::HancockCons,
        ] {
            schemes.push(
                HydroScheme::new(0.8)
                    .with_limiter(limiter)
                    .with_time_integration(ti),
            );
        }
    }
    schemes
}

#[test]
fn test_periodic_conservation_all_schemes() {
    for scheme in all_schemes() {
        let mut sim = setup(scheme, 16, BoundaryKind::Periodic, density_wave);
        let before = sim.diagnostics().unwrap();

        for _ in 0..10 {
            sim.timestep().unwrap();
        }
        let after = sim.diagnostics().unwrap();

        let rel = |a: f64, b: f64| (a - b).abs() / b.abs().max(1.0);
        assert!(
            rel(after.total_mass, before.total_mass) < 1e-12,
            "mass drift with {scheme}"
        );
        assert!(
            rel(after.momentum_x, before.momentum_x) < 1e-12,
            "x-momentum drift with {scheme}"
        );
        assert!(
            rel(after.momentum_y, before.momentum_y) < 1e-12,
            "y-momentum drift with {scheme}"
        );
        assert!(
            rel(after.total_energy, before.total_energy) < 1e-12,
            "energy drift with {scheme}"
        );
        assert!(after.min_density > 0.0 && after.min_pressure > 0.0);
    }
}

#[test]
fn test_timestep_saturates_cfl() {
    let scheme = HydroScheme::new(0.6);
    let mut sim = setup(scheme, 20, BoundaryKind::Periodic, density_wave);
    let dx = sim.grid().unwrap().dx;

    for _ in 0..5 {
        // max(|vx|, |vy|) + sqrt(γP/ρ) over every cell of the pre-step state
        let u_max = sim
            .primitive()
            .unwrap()
            .data
            .iter()
            .map(|v| v.vx.abs().max(v.vy.abs()) + (GAMMA * v.p / v.rho).sqrt())
            .fold(0.0_f64, f64::max);
        let dt = sim.timestep().unwrap();
        assert!(dt * u_max / dx <= 0.6 * (1.0 + 1e-14));
        assert!((dt * u_max / dx - 0.6).abs() < 1e-14);
    }
}

#[test]
fn test_time_is_sum_of_steps() {
    let mut sim = setup(HydroScheme::default(), 12, BoundaryKind::Periodic, density_wave);
    let mut total = 0.0;
    for _ in 0..7 {
        total += sim.timestep().unwrap();
    }
    assert_eq!(sim.time(), total);
    assert_eq!(sim.step(), 7);
}

#[test]
fn test_sweep_order_alternates() {
    let mut sim = setup(HydroScheme::default(), 8, BoundaryKind::Periodic, density_wave);
    assert_eq!(sim.clock().sweep_order(), [Axis::X, Axis::Y]);
    sim.timestep().unwrap();
    assert_eq!(sim.clock().sweep_order(), [Axis::Y, Axis::X]);
    sim.timestep().unwrap();
    assert_eq!(sim.clock().sweep_order(), [Axis::X, Axis::Y]);
}

#[test]
fn test_uniform_flow_stays_uniform() {
    let v0 = Primitive::new(1.3, 0.4, 0.7, 2.0);
    for scheme in all_schemes() {
        for boundary in [BoundaryKind::Periodic, BoundaryKind::Outflow] {
            let mut sim = setup(scheme, 8, boundary, |_, _| v0);
            for _ in 0..4 {
                sim.timestep().unwrap();
            }
            let v = sim.primitive().unwrap();
            for cell in &v.data {
                for (a, b) in cell.to_array().iter().zip(v0.to_array()) {
                    assert!((a - b).abs() < 1e-13, "{scheme} {boundary}");
                }
            }
        }
    }
}

#[test]
fn test_transposed_problem_gives_transposed_result() {
    let n = 24;
    let left = Primitive::new(1.0, 0.2, 0.0, 1.0);
    let right = Primitive::new(0.125, 0.0, 0.0, 0.1);

    let mut along_x = setup(HydroScheme::default(), n, BoundaryKind::Outflow, |x, _| {
        if x < 0.5 { left } else { right }
    });
    let swap = |v: Primitive| Primitive::new(v.rho, v.vy, v.vx, v.p);
    let mut along_y = setup(HydroScheme::default(), n, BoundaryKind::Outflow, |_, y| {
        if y < 0.5 { swap(left) } else { swap(right) }
    });

    for _ in 0..6 {
        let dt_x = along_x.timestep().unwrap();
        let dt_y = along_y.timestep().unwrap();
        assert!((dt_x - dt_y).abs() < 1e-15);
    }

    let vx = along_x.primitive().unwrap();
    let vy = along_y.primitive().unwrap();
    let res = along_x.grid().unwrap().resolution;
    for j in res.physical(Axis::Y) {
        for i in res.physical(Axis::X) {
            let a = vx.get(i, j);
            let b = swap(vy.get(j, i));
            for (p, q) in a.to_array().iter().zip(b.to_array()) {
                assert!((p - q).abs() < 1e-12, "mismatch at ({i}, {j})");
            }
        }
    }
}

#[test]
fn test_scheme_names_are_validated() {
    let err = HydroScheme::from_names("linear", "superbee", "hll", "hancock", 0.8).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownKind { what: "limiter", .. }));

    let err = HydroScheme::from_names("linear", "minmod", "roe", "hancock", 0.8).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownKind { .. }));

    let err = HydroScheme::from_names("const", "none", "hll", "hancock", 0.8).unwrap_err();
    assert!(matches!(err, ConfigError::IncompatibleScheme { .. }));

    let scheme = HydroScheme::from_names("const", "none", "hll", "euler", 0.5).unwrap();
    assert_eq!(scheme.reconstruction, ReconstructionKind::Constant);
    assert_eq!(scheme.ghost_cells(), 1);
}

#[test]
fn test_invalid_setup_is_rejected() {
    assert!(matches!(
        Simulation::new(HydroScheme::new(1.5)),
        Err(HydroError::Config(ConfigError::InvalidCfl(_)))
    ));

    let mut sim = Simulation::new(HydroScheme::default()).unwrap();
    assert!(matches!(
        sim.set_domain(0, 4, 0.0, 1.0, 0.0, BoundaryKind::Outflow),
        Err(HydroError::Config(ConfigError::EmptyGrid { nx: 0, ny: 4 }))
    ));
    assert!(matches!(
        sim.set_domain(4, 4, 1.0, 0.0, 0.0, BoundaryKind::Outflow),
        Err(HydroError::Config(ConfigError::InvalidCellSize(_)))
    ));

    sim.set_domain(4, 4, 0.0, 1.0, 0.0, BoundaryKind::Outflow)
        .unwrap();
    assert!(matches!(
        sim.set_fluid_properties(1.0),
        Err(HydroError::Config(ConfigError::InvalidGamma(_)))
    ));
}

#[test]
fn test_non_physical_initial_condition_is_rejected() {
    let mut sim = Simulation::new(HydroScheme::default()).unwrap();
    sim.set_domain(8, 8, 0.0, 1.0, 0.0, BoundaryKind::Periodic)
        .unwrap();
    sim.set_fluid_properties(GAMMA).unwrap();
    sim.set_primitive_from_fn(|x, y| {
        if x > 0.5 && y > 0.5 {
            Primitive::at_rest(1.0, -1.0)
        } else {
            Primitive::at_rest(1.0, 1.0)
        }
    })
    .unwrap();

    let err = sim.sync_conserved().unwrap_err();
    assert!(matches!(
        err,
        HydroError::State(StateError::NonPositivePressure { .. })
    ));
    assert!(matches!(sim.timestep(), Err(HydroError::Precondition(_))));
}

#[test]
fn test_ghost_cells_follow_boundary_policy() {
    let mut sim = setup(HydroScheme::default(), 6, BoundaryKind::Periodic, density_wave);
    sim.timestep().unwrap();
    let v = sim.primitive().unwrap();
    let res = sim.grid().unwrap().resolution;
    let (ng, n) = (res.ng(), res.nx());

    for j in 0..res.extent(Axis::Y) {
        for g in 0..ng {
            assert_eq!(v.get(g, j).to_array(), v.get(g + n, j).to_array());
            assert_eq!(v.get(ng + n + g, j).to_array(), v.get(ng + g, j).to_array());
        }
    }
}

#[test]
fn test_periodic_single_row_domain() {
    let mut sim = Simulation::new(HydroScheme::default()).unwrap();
    sim.set_domain(4, 1, 0.0, 1.0, 0.0, BoundaryKind::Periodic)
        .unwrap();
    sim.set_fluid_properties(GAMMA).unwrap();

    // Write physical cells only; ghosts must come from the boundary fill
    let res = sim.grid().unwrap().resolution;
    let v = sim.primitive_mut().unwrap();
    for j in res.physical(Axis::Y) {
        for i in res.physical(Axis::X) {
            v.set(i, j, Primitive::new(1.0 + 0.1 * i as f64, 0.3, 0.0, 1.0));
        }
    }
    sim.sync_conserved().unwrap();

    let v = sim.primitive().unwrap();
    for j in [0, 1, 3, 4] {
        for i in 0..res.extent(Axis::X) {
            assert_eq!(v.get(i, j), v.get(i, 2), "ghost ({i}, {j})");
        }
    }

    let before = sim.diagnostics().unwrap();
    for _ in 0..5 {
        sim.timestep().unwrap();
    }
    let after = sim.diagnostics().unwrap();
    assert!((after.total_mass - before.total_mass).abs() < 1e-13);
    assert!(after.min_pressure > 0.0);
}
