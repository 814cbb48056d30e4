// Drifting particle field. Owns the fixed-size particle sequence and the
// current surface bounds; knows nothing about the DOM or the canvas so the
// simulation can be driven from plain unit tests.

use crate::particle::Particle;
use rand::Rng;
use vecmath;

pub const PARTICLE_COUNT: usize = 80;
pub const LINK_DISTANCE: f64 = 150.0;
pub const LINK_BASE_ALPHA: f64 = 0.2;

pub struct Field {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
    count: usize,
}

impl Field {
    pub fn new(width: f64, height: f64) -> Field {
        Field {
            width,
            height,
            particles: Vec::new(),
            count: 0,
        }
    }

    // Discards the current sequence and samples a fresh one over the
    // current bounds. The swap is a single reassignment, so a resize
    // arriving between frames can never observe a half-built sequence.
    pub fn populate(&mut self, count: usize) {
        let mut rng = rand::thread_rng();
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let pos_x = rng.gen::<f64>() * self.width;
            let pos_y = rng.gen::<f64>() * self.height;
            let vel_x = rng.gen::<f64>() * 0.5 - 0.25;
            let vel_y = rng.gen::<f64>() * 0.5 - 0.25;
            let radius = rng.gen::<f64>() * 2.0 + 1.0;
            let alpha = rng.gen::<f64>() * 0.5 + 0.2;
            particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, radius, alpha));
        }
        self.particles = particles;
        self.count = count;
    }

    // A reset, not a reflow: old particles are discarded wholesale and the
    // sequence is redrawn at its configured length over the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate(self.count);
    }

    // One Euler step with an implicit unit timestep (no delta-time
    // compensation; perceived speed follows the host refresh rate).
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.pos[0] += particle.vel[0];
            particle.pos[1] += particle.vel[1];
            particle.pos[0] = wrap(particle.pos[0], self.width);
            particle.pos[1] = wrap(particle.pos[1], self.height);
        }
    }

    // Opacity of a connecting line at the given pairwise distance, fading
    // linearly from the base value at distance 0 to exactly 0 at the
    // threshold. None means no line at all.
    pub fn link_alpha(distance: f64) -> Option<f64> {
        if distance < LINK_DISTANCE {
            Some(LINK_BASE_ALPHA * (1.0 - distance / LINK_DISTANCE))
        } else {
            None
        }
    }

    // Visits every unordered particle pair exactly once (j > i) and calls
    // `f` for the pairs close enough to link. O(n^2); acceptable only
    // because the count stays small.
    pub fn for_each_link<F>(&self, mut f: F)
    where
        F: FnMut(&Particle, &Particle, f64),
    {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
                if let Some(alpha) = Field::link_alpha(distance) {
                    f(a, b, alpha);
                }
            }
        }
    }
}

// Toroidal wrap on one axis: meeting or exceeding the upper bound resets
// to 0, falling below 0 resets to the upper bound.
fn wrap(coord: f64, bound: f64) -> f64 {
    if coord < 0.0 {
        bound
    } else if coord >= bound {
        0.0
    } else {
        coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;

    fn field_with(width: f64, height: f64, particles: Vec<Particle>) -> Field {
        let mut field = Field::new(width, height);
        let count = particles.len();
        field.particles = particles;
        field.count = count;
        field
    }

    #[test]
    fn populate_fills_configured_count_within_bounds() {
        let mut field = Field::new(800.0, 600.0);
        field.populate(PARTICLE_COUNT);
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        for p in &field.particles {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 600.0);
            assert!(p.vel[0] >= -0.25 && p.vel[0] <= 0.25);
            assert!(p.vel[1] >= -0.25 && p.vel[1] <= 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
            assert!(p.alpha >= 0.2 && p.alpha < 0.7);
        }
    }

    #[test]
    fn count_is_stable_across_steps() {
        let mut field = Field::new(400.0, 300.0);
        field.populate(PARTICLE_COUNT);
        for _ in 0..1000 {
            field.step();
        }
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn step_keeps_positions_wrapped() {
        let mut field = Field::new(400.0, 300.0);
        field.populate(PARTICLE_COUNT);
        for _ in 0..1000 {
            field.step();
            for p in &field.particles {
                assert!(p.pos[0] >= 0.0 && p.pos[0] <= field.width);
                assert!(p.pos[1] >= 0.0 && p.pos[1] <= field.height);
            }
        }
    }

    #[test]
    fn step_wraps_right_edge_to_zero() {
        // 800x600, one particle at (799.7, 300) drifting right at 0.5:
        // 800.2 meets the bound and resets to 0.
        let mut field = field_with(
            800.0,
            600.0,
            vec![Particle::new(799.7, 300.0, 0.5, 0.0, 2.0, 0.5)],
        );
        field.step();
        assert_eq!(field.particles[0].pos, [0.0, 300.0]);
    }

    #[test]
    fn step_wraps_left_edge_to_bound() {
        let mut field = field_with(
            800.0,
            600.0,
            vec![Particle::new(0.1, 300.0, -0.5, 0.0, 2.0, 0.5)],
        );
        field.step();
        assert_eq!(field.particles[0].pos, [800.0, 300.0]);
    }

    #[test]
    fn resize_regenerates_at_same_length_within_new_bounds() {
        let mut field = Field::new(800.0, 600.0);
        field.populate(PARTICLE_COUNT);
        field.resize(1024.0, 768.0);
        assert_eq!(field.width, 1024.0);
        assert_eq!(field.height, 768.0);
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
        for p in &field.particles {
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 1024.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 768.0);
        }
    }

    #[test]
    fn link_alpha_fades_linearly() {
        assert_eq!(Field::link_alpha(0.0), Some(LINK_BASE_ALPHA));
        assert_eq!(Field::link_alpha(75.0), Some(LINK_BASE_ALPHA / 2.0));
        assert_eq!(Field::link_alpha(150.0), None);
        assert_eq!(Field::link_alpha(200.0), None);
    }

    #[test]
    fn link_alpha_is_strictly_decreasing_and_positive_below_threshold() {
        let mut previous = f64::INFINITY;
        let mut d = 0.0;
        while d < LINK_DISTANCE {
            let alpha = Field::link_alpha(d).unwrap();
            assert!(alpha > 0.0);
            assert!(alpha < previous);
            previous = alpha;
            d += 1.0;
        }
    }

    #[test]
    fn links_visit_each_close_pair_once() {
        let particles = vec![
            Particle::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.5),
            Particle::new(75.0, 0.0, 0.0, 0.0, 1.0, 0.5),
            Particle::new(500.0, 0.0, 0.0, 0.0, 1.0, 0.5),
        ];
        let field = field_with(800.0, 600.0, particles);
        let mut seen = Vec::new();
        field.for_each_link(|a, b, alpha| seen.push((a.pos, b.pos, alpha)));
        // Only the first two are within range of each other.
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, [0.0, 0.0]);
        assert_eq!(seen[0].1, [75.0, 0.0]);
        assert!((seen[0].2 - LINK_BASE_ALPHA / 2.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_particles_link_at_base_opacity() {
        let particles = vec![
            Particle::new(10.0, 10.0, 0.0, 0.0, 1.0, 0.5),
            Particle::new(10.0, 10.0, 0.0, 0.0, 1.0, 0.5),
        ];
        let field = field_with(800.0, 600.0, particles);
        let mut alphas = Vec::new();
        field.for_each_link(|_, _, alpha| alphas.push(alpha));
        assert_eq!(alphas, vec![LINK_BASE_ALPHA]);
    }

    #[test]
    fn pairs_at_threshold_draw_nothing() {
        let particles = vec![
            Particle::new(0.0, 0.0, 0.0, 0.0, 1.0, 0.5),
            Particle::new(LINK_DISTANCE, 0.0, 0.0, 0.0, 1.0, 0.5),
        ];
        let field = field_with(800.0, 600.0, particles);
        let mut linked = 0;
        field.for_each_link(|_, _, _| linked += 1);
        assert_eq!(linked, 0);
    }
}
