//! Shared benchmark profiles for the eddy fluid engine.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use eddy_engine::{FluidField, SolverConfig};
use eddy_grid::ObstacleShape;

/// A 64x64 engine with viscosity and a pillar: the interactive profile.
pub fn reference_profile() -> FluidField {
    let mut cfg = SolverConfig::new(64, 64);
    cfg.viscosity = 0.0001;
    cfg.iterations = 20;
    let mut field = FluidField::new(cfg).expect("reference profile is valid");
    field.rasterize_obstacle(&ObstacleShape::Disk {
        cx: 32,
        cy: 32,
        radius: 5,
    });
    seed_inputs(&mut field);
    field
}

/// A 192x192 engine: the stress profile.
pub fn stress_profile() -> FluidField {
    let mut cfg = SolverConfig::new(192, 192);
    cfg.viscosity = 0.0001;
    cfg.iterations = 20;
    let mut field = FluidField::new(cfg).expect("stress profile is valid");
    seed_inputs(&mut field);
    field
}

/// Inject a plume so the benched ticks push real data around.
fn seed_inputs(field: &mut FluidField) {
    let h = field.config().height as i32;
    for y in (h / 2 - 2)..=(h / 2 + 2) {
        field.add_density_source(1, y, 150.0);
        field.add_velocity_x_source(1, y, 50.0);
    }
}
