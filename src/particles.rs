//! Particles live in a 100×100 field and are emitted a few at a time on a
//! fixed cadence, so the live set turns over continuously. It never grows
//! past [`MAX_LIVE_PARTICLES`], whatever the theme asks for.

use eframe::egui::{Color32, Pos2, Vec2, pos2, vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::theme::{ParticlePattern, ParticleSettings, ThemeColors};

pub const MAX_LIVE_PARTICLES: usize = 30;
pub const SPAWN_INTERVAL_SECS: f64 = 0.5;
pub const PARTICLE_LIFETIME_SECS: f64 = 2.0;
pub const FALLBACK_SPEED: f32 = 1.0;
pub const FIELD_EXTENT: f32 = 100.0;

// field units travelled per second per unit of speed
const DRIFT_PER_SECOND: f32 = 2.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub position: Pos2,
    /// Degrees, 0° pointing along +x.
    pub velocity_angle: f32,
    pub speed: f32,
    pub color: Color32,
    pub spawn_time: f64,
    pub lifetime: f64,
}

impl Particle {
    pub fn age(&self, now: f64) -> f64 {
        (now - self.spawn_time).max(0.0)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now - self.spawn_time >= self.lifetime
    }

    pub fn direction(&self) -> Vec2 {
        let radians = self.velocity_angle.to_radians();
        vec2(radians.cos(), radians.sin())
    }

    pub fn position_at(&self, now: f64) -> Pos2 {
        let age = self.age(now).min(self.lifetime) as f32;
        self.position + self.direction() * (self.speed * DRIFT_PER_SECOND * age)
    }

    pub fn opacity_at(&self, now: f64) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        let progress = (self.age(now) / self.lifetime).clamp(0.0, 1.0) as f32;
        1.0 - (progress * 2.0 - 1.0).abs()
    }
}

impl ParticlePattern {
    pub fn direction_degrees(self, spawn_index: u64, rng: &mut impl Rng) -> f32 {
        match self {
            Self::Layered | Self::Bidirectional => {
                if rng.random_bool(0.5) {
                    0.0
                } else {
                    180.0
                }
            }
            Self::Temporal => 180.0 + rng.random_range(-15.0_f32..15.0_f32),
            Self::Opposing => {
                if spawn_index % 2 == 0 {
                    45.0
                } else {
                    225.0
                }
            }
            Self::Random => rng.random_range(0.0_f32..360.0_f32),
        }
    }
}

pub fn effective_settings(settings: Option<&ParticleSettings>) -> ParticleSettings {
    match settings {
        Some(settings) if settings.is_valid() => *settings,
        _ => ParticleSettings {
            count: MAX_LIVE_PARTICLES,
            speed: FALLBACK_SPEED,
            pattern: ParticlePattern::Random,
        },
    }
}

// one lifetime's worth of batches refills the target
fn batch_size(target: usize) -> usize {
    let per_lifetime = (PARTICLE_LIFETIME_SECS / SPAWN_INTERVAL_SECS).max(1.0);
    ((target as f64 / per_lifetime).ceil() as usize).max(1)
}

pub struct ParticleGenerator {
    rng: StdRng,
    particles: Vec<Particle>,
    next_id: u64,
    last_spawn: Option<f64>,
}

impl ParticleGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            rng,
            particles: Vec::with_capacity(MAX_LIVE_PARTICLES),
            next_id: 0,
            last_spawn: None,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.last_spawn = None;
    }

    pub fn prune(&mut self, now: f64) {
        self.particles.retain(|particle| !particle.is_expired(now));
    }

    pub fn tick(
        &mut self,
        settings: Option<&ParticleSettings>,
        palette: &ThemeColors,
        now: f64,
    ) -> &[Particle] {
        self.prune(now);

        let due = self
            .last_spawn
            .is_none_or(|last| now - last >= SPAWN_INTERVAL_SECS);
        if due {
            self.spawn_batch(settings, palette, now);
            self.last_spawn = Some(now);
        }

        &self.particles
    }

    fn spawn_batch(
        &mut self,
        settings: Option<&ParticleSettings>,
        palette: &ThemeColors,
        now: f64,
    ) {
        if settings.is_none_or(|settings| !settings.is_valid()) {
            debug!("particle settings missing or malformed; using fallback");
        }
        let settings = effective_settings(settings);
        let target = settings.count.min(MAX_LIVE_PARTICLES);
        let domains = palette.domains();

        for _ in 0..batch_size(target) {
            if self.particles.len() >= target {
                break;
            }
            let spawn_index = self.next_id;
            self.next_id = self.next_id.wrapping_add(1);

            let position = pos2(
                self.rng.random_range(0.0..FIELD_EXTENT),
                self.rng.random_range(0.0..FIELD_EXTENT),
            );
            let velocity_angle = settings
                .pattern
                .direction_degrees(spawn_index, &mut self.rng);
            let speed = settings.speed * self.rng.random_range(2.0_f32..4.0_f32);

            self.particles.push(Particle {
                id: spawn_index,
                position,
                velocity_angle,
                speed,
                color: domains[(spawn_index % domains.len() as u64) as usize],
                spawn_time: now,
                lifetime: PARTICLE_LIFETIME_SECS,
            });
        }
    }
}
