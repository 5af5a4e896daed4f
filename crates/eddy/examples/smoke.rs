//! Smoke plume in a crosswind, rendered as ASCII.
//!
//! Run with: `cargo run --example smoke`

use eddy::prelude::*;

const WIDTH: u32 = 48;
const HEIGHT: u32 = 20;
const FRAMES: u32 = 120;

fn main() {
    let mut cfg = SolverConfig::new(WIDTH, HEIGHT);
    cfg.viscosity = 0.0001;
    cfg.iterations = 20;
    let mut field = FluidField::new(cfg).expect("static config is valid");

    // A solid pillar for the plume to curl around.
    field.rasterize_obstacle(&ObstacleShape::Disk {
        cx: 22,
        cy: 10,
        radius: 3,
    });

    for _ in 0..FRAMES {
        // Smoke and a steady rightward gust from the left wall.
        for y in 8..=12 {
            field.add_density_source(1, y, 160.0);
            field.add_velocity_x_source(1, y, 60.0);
        }
        field.update_with(16.0);
        field.reset_sources();
    }

    render(&field);
    let m = field.metrics();
    println!(
        "tick {} | last step {} us (density {} us, velocity {} us)",
        field.tick(),
        m.total_us,
        m.density_step_us,
        m.velocity_step_us,
    );
}

fn render(field: &FluidField) {
    const RAMP: &[u8] = b" .:-=+*#%@";
    let peak = field.grid().max_density().max(1e-6);
    for y in 0..HEIGHT as i32 {
        let mut line = String::with_capacity(WIDTH as usize);
        for x in 0..WIDTH as i32 {
            if field.obstacle(x, y).expect("in range") {
                line.push('O');
                continue;
            }
            let d = field.density(x, y).expect("in range");
            let level = (d / peak * (RAMP.len() - 1) as f32).round() as usize;
            line.push(RAMP[level.min(RAMP.len() - 1)] as char);
        }
        println!("{line}");
    }
}
