use bevy::prelude::*;
use std::f32::consts::PI;

/// Closed-form interpolation of one scalar over a stage's progress `p ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Constant(f32),
    /// `from + (to - from) * p`
    Linear { from: f32, to: f32 },
    /// `base + sin(p * π * half_turns) * amplitude`
    SineArc {
        base: f32,
        amplitude: f32,
        half_turns: f32,
    },
    /// `base + cos(p * π * half_turns) * amplitude`
    CosineArc {
        base: f32,
        amplitude: f32,
        half_turns: f32,
    },
}

impl Curve {
    pub const fn linear(from: f32, to: f32) -> Self {
        Self::Linear { from, to }
    }

    pub fn sample(&self, progress: f32) -> f32 {
        match *self {
            Self::Constant(value) => value,
            Self::Linear { from, to } => from + (to - from) * progress,
            Self::SineArc {
                base,
                amplitude,
                half_turns,
            } => base + (progress * PI * half_turns).sin() * amplitude,
            Self::CosineArc {
                base,
                amplitude,
                half_turns,
            } => base + (progress * PI * half_turns).cos() * amplitude,
        }
    }
}

/// Per-axis curves for a vector. Axes left as `None` keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisCurves {
    pub x: Option<Curve>,
    pub y: Option<Curve>,
    pub z: Option<Curve>,
}

impl AxisCurves {
    pub const NONE: Self = Self {
        x: None,
        y: None,
        z: None,
    };

    pub const fn new(x: Option<Curve>, y: Option<Curve>, z: Option<Curve>) -> Self {
        Self { x, y, z }
    }

    /// Horizontal orbit arc in the XZ plane around `centre`, sweeping
    /// `half_turns * π` radians from the +X side, at the centre's height.
    pub const fn orbit_arc(centre: Vec3, radius: f32, half_turns: f32) -> Self {
        Self {
            x: Some(Curve::CosineArc {
                base: centre.x,
                amplitude: radius,
                half_turns,
            }),
            y: Some(Curve::Constant(centre.y)),
            z: Some(Curve::SineArc {
                base: centre.z,
                amplitude: radius,
                half_turns,
            }),
        }
    }

    /// Same as [`AxisCurves::orbit_arc`] but leaves the height untouched.
    pub const fn flat_orbit_arc(centre: Vec3, radius: f32, half_turns: f32) -> Self {
        let arc = Self::orbit_arc(centre, radius, half_turns);
        Self { y: None, ..arc }
    }

    pub fn apply(&self, target: &mut Vec3, progress: f32) {
        if let Some(curve) = self.x {
            target.x = curve.sample(progress);
        }
        if let Some(curve) = self.y {
            target.y = curve.sample(progress);
        }
        if let Some(curve) = self.z {
            target.z = curve.sample(progress);
        }
    }
}

/// Position and Euler rotation curves for one scene object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Track {
    pub position: AxisCurves,
    pub rotation: AxisCurves,
}

impl Track {
    pub const HOLD: Self = Self {
        position: AxisCurves::NONE,
        rotation: AxisCurves::NONE,
    };

    pub const fn moving(position: AxisCurves) -> Self {
        Self {
            position,
            rotation: AxisCurves::NONE,
        }
    }

    pub const fn with_rotation(self, rotation: AxisCurves) -> Self {
        Self {
            position: self.position,
            rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_blend_hits_both_ends() {
        let curve = Curve::linear(100.0, 150.0);
        assert_eq!(curve.sample(0.0), 100.0);
        assert_eq!(curve.sample(0.5), 125.0);
        assert_eq!(curve.sample(1.0), 150.0);
    }

    #[test]
    fn sine_arc_peaks_mid_stage() {
        let curve = Curve::SineArc {
            base: 200.0,
            amplitude: 100.0,
            half_turns: 1.0,
        };
        assert_eq!(curve.sample(0.0), 200.0);
        assert!((curve.sample(0.5) - 300.0).abs() < 1e-3);
        assert!((curve.sample(1.0) - 200.0).abs() < 1e-3);
    }

    #[test]
    fn orbit_arc_keeps_radius() {
        let centre = Vec3::new(2000.0, 0.0, 0.0);
        let arc = AxisCurves::orbit_arc(centre, 80.0, 1.0);
        for step in 0..=10 {
            let mut point = Vec3::splat(f32::NAN);
            arc.apply(&mut point, step as f32 / 10.0);
            assert!((point.distance(centre) - 80.0).abs() < 1e-2);
        }
    }

    #[test]
    fn unset_axes_are_left_alone() {
        let curves = AxisCurves::new(None, Some(Curve::Constant(4.0)), None);
        let mut point = Vec3::new(1.0, 2.0, 3.0);
        curves.apply(&mut point, 0.7);
        assert_eq!(point, Vec3::new(1.0, 4.0, 3.0));
    }

    #[test]
    fn flat_orbit_leaves_height() {
        let arc = AxisCurves::flat_orbit_arc(Vec3::new(2000.0, 0.0, 0.0), 80.0, 0.5);
        let mut point = Vec3::new(0.0, 42.0, 0.0);
        arc.apply(&mut point, 1.0);
        assert_eq!(point.y, 42.0);
        assert!((point.x - 2000.0).abs() < 1e-3);
        assert!((point.z - 80.0).abs() < 1e-3);
    }
}
