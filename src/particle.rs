// Simple particle struct to keep track of individual position, velocity,
// radius, and translucency. Velocity, radius, and translucency are fixed
// for the particle's lifetime; only position changes.

pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, alpha: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            alpha,
        }
    }
}
