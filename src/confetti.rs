//! Confetti Burst
//!
//! Particle model for the celebration effect. Rendering lives in
//! `components::confetti_canvas`; this module is plain math so it can be tested.

/// Palette of confetti colours (CSS)
pub const PALETTE: &[&str] = &[
    "#ff0a54", "#ff477e", "#ff85a1", "#fbb1bd", "#3f18ac", "#4f23ca", "#ffd60a", "#06d6a0",
];

/// Downward acceleration in px/s²
const GRAVITY: f64 = 900.0;
/// Fraction of velocity lost per second
const DRAG: f64 = 0.9;
const MIN_SPEED: f64 = 650.0;
const MAX_SPEED: f64 = 1100.0;
const MIN_LIFETIME: f64 = 2.0;
const MAX_LIFETIME: f64 = 3.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub rotation: f64,
    pub spin: f64,
    pub color: &'static str,
    age: f64,
    lifetime: f64,
}

impl Particle {
    fn is_alive(&self, height: f64) -> bool {
        self.age < self.lifetime && self.y < height + self.size
    }

    /// Opacity fading out over the last half second of life
    pub fn alpha(&self) -> f64 {
        ((self.lifetime - self.age) / 0.5).clamp(0.0, 1.0)
    }
}

/// A single burst of confetti launched from the bottom corners
#[derive(Debug, Clone)]
pub struct Burst {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl Burst {
    /// Spawn `count` particles. `rng` yields values in `[0, 1)`.
    pub fn new(width: f64, height: f64, count: usize, mut rng: impl FnMut() -> f64) -> Self {
        let mut lerp = move |lo: f64, hi: f64| lo + (hi - lo) * rng();
        let particles = (0..count)
            .map(|i| {
                // Alternate corners; left shoots up-right, right shoots up-left
                let from_left = i % 2 == 0;
                let angle = lerp(50.0, 80.0).to_radians();
                let speed = lerp(MIN_SPEED, MAX_SPEED);
                let direction = if from_left { 1.0 } else { -1.0 };
                let color_index = (lerp(0.0, PALETTE.len() as f64) as usize).min(PALETTE.len() - 1);
                Particle {
                    x: if from_left { 0.0 } else { width },
                    y: height,
                    vx: direction * speed * angle.cos(),
                    vy: -speed * angle.sin(),
                    size: lerp(6.0, 12.0),
                    rotation: lerp(0.0, std::f64::consts::TAU),
                    spin: lerp(-8.0, 8.0),
                    color: PALETTE[color_index],
                    age: 0.0,
                    lifetime: lerp(MIN_LIFETIME, MAX_LIFETIME),
                }
            })
            .collect();
        Self { width, height, particles }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Live particles only
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        let height = self.height;
        self.particles.iter().filter(move |p| p.is_alive(height))
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f64) {
        let decay = (1.0 - DRAG * dt).max(0.0);
        let height = self.height;
        for p in self.particles.iter_mut().filter(|p| p.is_alive(height)) {
            p.vy += GRAVITY * dt;
            p.vx *= decay;
            p.vy *= decay;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.rotation += p.spin * dt;
            p.age += dt;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.particles().next().is_none()
    }
}
