//! Particle effects queue
//!
//! Ephemeral visual feedback spawned by combat and mining. Particles never
//! affect gameplay; the tick only advances and expires them.

use glam::Vec2;
use rand::Rng;

/// Downward acceleration applied to every particle per tick
pub const PARTICLE_GRAVITY: f32 = 0.15;
/// Ticks a floating pickup label lives
const LABEL_LIFE: i32 = 45;

/// One ephemeral effect: a debris fleck or a floating text label
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining ticks before the particle is dropped
    pub life: i32,
    pub color: (u8, u8, u8),
    pub label: Option<String>,
}

impl Particle {
    /// A single debris fleck with randomized velocity and lifetime
    pub fn debris(position: Vec2, color: (u8, u8, u8), rng: &mut impl Rng) -> Self {
        Self {
            position,
            velocity: Vec2::new(rng.gen_range(-1.5..=1.5), rng.gen_range(-2.5..=-0.5)),
            life: rng.gen_range(12..=24),
            color,
            label: None,
        }
    }

    /// A floating text label drifting upward
    pub fn label(position: Vec2, text: impl Into<String>, color: (u8, u8, u8)) -> Self {
        Self {
            position,
            velocity: Vec2::new(0.0, -0.6),
            life: LABEL_LIFE,
            color,
            label: Some(text.into()),
        }
    }

    /// Advance one tick: integrate velocity, apply gravity, age
    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.velocity.y += PARTICLE_GRAVITY;
        self.life -= 1;
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0
    }
}

/// Spawn a burst of debris flecks at a position
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    position: Vec2,
    color: (u8, u8, u8),
    count: usize,
    rng: &mut impl Rng,
) {
    for _ in 0..count {
        particles.push(Particle::debris(position, color, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_advance_applies_gravity_and_ages() {
        let mut p = Particle::label(Vec2::ZERO, "+1 SHARD", (120, 210, 220));
        let v0 = p.velocity;
        let life0 = p.life;
        p.advance();
        assert_eq!(p.position, v0);
        assert_eq!(p.velocity.y, v0.y + PARTICLE_GRAVITY);
        assert_eq!(p.life, life0 - 1);
    }

    #[test]
    fn test_expiry() {
        let mut p = Particle::label(Vec2::ZERO, "+1 GOLD", (230, 190, 70));
        p.life = 1;
        assert!(!p.is_expired());
        p.advance();
        assert!(p.is_expired());
    }

    #[test]
    fn test_burst_spawns_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, Vec2::new(5.0, 5.0), (90, 90, 95), 6, &mut rng);
        assert_eq!(particles.len(), 6);
        for p in &particles {
            assert!(p.label.is_none());
            assert!(p.velocity.y < 0.0);
            assert!(p.life > 0);
        }
    }
}
