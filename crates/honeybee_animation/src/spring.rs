//! Spring physics animation
//!
//! RK4-integrated spring physics for pointer-follow effects. Every preset used
//! for positional effects is critically damped or overdamped, so a spring with
//! a fixed target approaches it without overshooting.

/// Largest integration step; longer frames are split into sub-steps so stiff,
/// light springs stay stable when frames arrive late.
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Stiffness, damping and mass of a spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// A critically damped spring for the given stiffness and mass
    pub fn critical(stiffness: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
        }
    }

    /// Magnetic buttons: light and heavily damped, trails the pointer closely
    pub fn magnetic() -> Self {
        Self {
            stiffness: 150.0,
            damping: 15.0,
            mass: 0.1,
        }
    }

    /// Custom cursor ring following the pointer
    pub fn cursor() -> Self {
        Self::critical(400.0, 1.0)
    }

    /// Ring diameter change when hovering interactive elements
    pub fn hover_size() -> Self {
        Self::critical(300.0, 1.0)
    }

    /// Card lift and glow on hover
    pub fn lift() -> Self {
        Self::critical(400.0, 1.0)
    }

    /// Damping at which this stiffness and mass stop oscillating
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping() - 0.01
    }

    /// Within 0.01 of critical damping
    pub fn is_critically_damped(&self) -> bool {
        (self.damping - self.critical_damping()).abs() < 0.01
    }

    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping() + 0.01
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::cursor()
    }
}

/// Distance and speed under which a spring counts as at rest
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestThreshold {
    pub distance: f32,
    pub velocity: f32,
}

impl RestThreshold {
    /// Half a pixel, 5 px/s: imperceptible for positions
    pub const PIXELS: RestThreshold = RestThreshold {
        distance: 0.5,
        velocity: 5.0,
    };

    /// For unit-range values such as opacity and scale
    pub const UNIT: RestThreshold = RestThreshold {
        distance: 0.001,
        velocity: 0.01,
    };
}

/// One spring-driven scalar
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    rest: RestThreshold,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            rest: RestThreshold::PIXELS,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Override the rest threshold (defaults to [`RestThreshold::PIXELS`])
    pub fn with_rest_threshold(mut self, rest: RestThreshold) -> Self {
        self.rest = rest;
        self
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Within the rest threshold of the target in both position and velocity
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.rest.distance
            && self.velocity.abs() < self.rest.velocity
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }

        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;

        for _ in 0..substeps {
            if self.is_settled() {
                self.value = self.target;
                self.velocity = 0.0;
                return;
            }
            self.integrate(h);
        }
    }

    /// One RK4 step
    fn integrate(&mut self, dt: f32) {
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}
