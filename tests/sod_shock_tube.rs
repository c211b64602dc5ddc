//! Sod shock tube validation.
//!
//! Left state (ρ, v, P) = (1, 0, 1), right state (0.125, 0, 0.1), γ = 1.4,
//! diaphragm at x = 0.5. The exact star region has P* ≈ 0.30313 and
//! v* ≈ 0.92745, bounded by the rarefaction tail (speed ≈ -0.0703) and the
//! shock (speed ≈ 1.7522).

use fv_euler::{Axis, BoundaryKind, HydroScheme, Primitive, Simulation};

const P_STAR: f64 = 0.30313;
const V_STAR: f64 = 0.92745;
const RHO_RIGHT: f64 = 0.125;

fn sod(scheme: HydroScheme) -> Simulation {
    let mut sim = Simulation::new(scheme).unwrap();
    sim.set_domain(100, 4, 0.0, 1.0, 0.0, BoundaryKind::Outflow)
        .unwrap();
    sim.set_fluid_properties(1.4).unwrap();
    sim.set_primitive_from_fn(|x, _| {
        if x < 0.5 {
            Primitive::at_rest(1.0, 1.0)
        } else {
            Primitive::at_rest(RHO_RIGHT, 0.1)
        }
    })
    .unwrap();
    sim.sync_conserved().unwrap();
    sim
}

/// Physical-cell values along x on one row, with the cell centers.
fn profile(sim: &Simulation) -> Vec<(f64, Primitive)> {
    let grid = sim.grid().unwrap();
    let v = sim.primitive().unwrap();
    let res = grid.resolution;
    let j = res.ng() + 1;
    res.physical(Axis::X)
        .map(|i| (grid.cell_center(Axis::X, i), v.get(i, j)))
        .collect()
}

#[test]
fn test_sod_time_accounting() {
    let mut sim = sod(HydroScheme::new(0.8));
    let mut t = 0.0;
    for _ in 0..25 {
        let dt = sim.timestep().unwrap();
        assert!(dt > 0.0);
        t += dt;
    }
    assert_eq!(sim.time(), t);
    assert_eq!(sim.step(), 25);
}

#[test]
fn test_sod_undisturbed_far_field() {
    let mut sim = sod(HydroScheme::new(0.8));
    for _ in 0..25 {
        sim.timestep().unwrap();
    }

    // One x-sweep per step moves information by at most one cell
    for (k, (_, v)) in profile(&sim).into_iter().enumerate() {
        if k < 20 {
            assert!((v.rho - 1.0).abs() < 1e-12);
            assert!(v.vx.abs() < 1e-12);
            assert!((v.p - 1.0).abs() < 1e-12);
        } else if k >= 80 {
            assert!((v.rho - RHO_RIGHT).abs() < 1e-12);
            assert!(v.vx.abs() < 1e-12);
            assert!((v.p - 0.1).abs() < 1e-12);
        }
    }
}

#[test]
fn test_sod_profile() {
    let mut sim = sod(HydroScheme::new(0.8));
    let summary = sim.run_until(0.1, 1000).unwrap();
    assert!(summary.reached_end);
    assert!(summary.steps <= 30);

    let cells = profile(&sim);

    // Density decreases from left to right up to small oscillations
    for pair in cells.windows(2) {
        assert!(
            pair[1].1.rho <= pair[0].1.rho + 5e-3,
            "density rises at x={}",
            pair[1].0
        );
    }

    // Star region plateau, away from the smeared contact and shock
    for (x, v) in &cells {
        if (0.55..0.59).contains(x) {
            assert!((v.p - P_STAR).abs() < 0.02, "p={} at x={x}", v.p);
            assert!((v.vx - V_STAR).abs() < 0.05, "vx={} at x={x}", v.vx);
        }
    }

    // Shock has left the diaphragm; 30 steps cannot reach x = 0.81
    let t = sim.time();
    let shock_x = 0.5 + 1.7522 * t;
    assert!(cells.iter().any(|(x, v)| *x > 0.55 && *x < shock_x && v.rho > 0.2));
    assert!(
        cells
            .iter()
            .filter(|(x, _)| *x > 0.81)
            .all(|(_, v)| (v.rho - RHO_RIGHT).abs() < 1e-6)
    );
}

#[test]
fn test_sod_conserves_mass_and_energy() {
    // Walls see zero velocity, so only momentum enters through the
    // outflow boundaries while the waves stay inside the tube
    for scheme in [HydroScheme::new(0.8), HydroScheme::first_order(0.8)] {
        let mut sim = sod(scheme);
        let before = sim.diagnostics().unwrap();
        for _ in 0..20 {
            sim.timestep().unwrap();
        }
        let after = sim.diagnostics().unwrap();

        assert!((after.total_mass - before.total_mass).abs() < 1e-12);
        assert!((after.total_energy - before.total_energy).abs() < 1e-12);
        assert!(after.momentum_y.abs() < 1e-12);
        assert!(after.momentum_x > 0.0);
    }
}

#[test]
fn test_sod_rows_stay_identical() {
    let mut sim = sod(HydroScheme::new(0.8));
    for _ in 0..10 {
        sim.timestep().unwrap();
    }
    let v = sim.primitive().unwrap();
    let res = sim.grid().unwrap().resolution;
    let first = res.ng();
    for j in res.physical(Axis::Y) {
        for i in res.physical(Axis::X) {
            assert_eq!(v.get(i, j).to_array(), v.get(i, first).to_array());
        }
    }
}
