use super::curve::{AxisCurves, Curve, Track};
use bevy::prelude::*;
use constants::mission::STAGE_COUNT;
use constants::render_settings::CAMERA_START;
use constants::scene_layout::{
    EARTH_POSITION, LUNAR_SURFACE_HEIGHT, MOON_POSITION, MOON_RADIUS, SPACECRAFT_START,
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Position plus XYZ Euler rotation of one movable object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObjectPose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl ObjectPose {
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    fn follow(&mut self, track: &Track, progress: f32) {
        track.position.apply(&mut self.position, progress);
        track.rotation.apply(&mut self.rotation, progress);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Everything the renderer needs to draw one frame of the mission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub spacecraft: ObjectPose,
    pub lunar_module: ObjectPose,
    pub lunar_module_visible: bool,
    pub trajectory_visible: bool,
    pub camera: CameraPose,
}

impl Placement {
    /// Scene layout before any stage has run.
    pub const fn initial() -> Self {
        Self {
            spacecraft: ObjectPose::at(SPACECRAFT_START),
            lunar_module: ObjectPose::at(SPACECRAFT_START),
            lunar_module_visible: false,
            trajectory_visible: false,
            camera: CameraPose {
                position: Vec3::from_array(CAMERA_START),
                look_at: EARTH_POSITION,
            },
        }
    }

    fn subject_position(&self, subject: Subject) -> Vec3 {
        match subject {
            Subject::Spacecraft => self.spacecraft.position,
            Subject::LunarModule => self.lunar_module.position,
            Subject::Earth => EARTH_POSITION,
            Subject::Moon => MOON_POSITION,
        }
    }
}

/// Scene object a camera axis can track or look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Spacecraft,
    LunarModule,
    Earth,
    Moon,
}

/// One camera coordinate: pinned, or offset from a subject's same coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraAxis {
    Fixed(f32),
    Follow { subject: Subject, offset: f32 },
}

impl CameraAxis {
    const fn csm(offset: f32) -> Self {
        Self::Follow {
            subject: Subject::Spacecraft,
            offset,
        }
    }

    const fn lm(offset: f32) -> Self {
        Self::Follow {
            subject: Subject::LunarModule,
            offset,
        }
    }

    fn resolve(&self, placement: &Placement, pick: fn(Vec3) -> f32) -> f32 {
        match *self {
            Self::Fixed(value) => value,
            Self::Follow { subject, offset } => pick(placement.subject_position(subject)) + offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: [CameraAxis; 3],
    pub look_at: Subject,
}

impl CameraRig {
    fn pose(&self, placement: &Placement) -> CameraPose {
        let [x, y, z] = &self.position;
        CameraPose {
            position: Vec3::new(
                x.resolve(placement, |v| v.x),
                y.resolve(placement, |v| v.y),
                z.resolve(placement, |v| v.z),
            ),
            look_at: placement.subject_position(self.look_at),
        }
    }
}

/// How the scene moves while one stage is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagePlan {
    pub spacecraft: Track,
    pub lunar_module: Track,
    pub lunar_module_visible: Option<bool>,
    pub trajectory_visible: Option<bool>,
    pub camera: CameraRig,
}

impl StagePlan {
    const fn new(spacecraft: Track, camera: CameraRig) -> Self {
        Self {
            spacecraft,
            lunar_module: Track::HOLD,
            lunar_module_visible: None,
            trajectory_visible: None,
            camera,
        }
    }

    const fn with_lunar_module(self, track: Track, visible: Option<bool>) -> Self {
        Self {
            lunar_module: track,
            lunar_module_visible: visible,
            ..self
        }
    }

    const fn showing_trajectory(self) -> Self {
        Self {
            trajectory_visible: Some(true),
            ..self
        }
    }

    /// Move objects to `progress` through this stage. Camera is resolved separately.
    fn advance(&self, placement: &mut Placement, progress: f32) {
        placement.spacecraft.follow(&self.spacecraft, progress);
        placement.lunar_module.follow(&self.lunar_module, progress);
        if let Some(visible) = self.lunar_module_visible {
            placement.lunar_module_visible = visible;
        }
        if let Some(visible) = self.trajectory_visible {
            placement.trajectory_visible = visible;
        }
    }
}

const fn some(curve: Curve) -> Option<Curve> {
    Some(curve)
}

const fn fixed(value: f32) -> Option<Curve> {
    Some(Curve::Constant(value))
}

const fn lerp(from: f32, to: f32) -> Option<Curve> {
    Some(Curve::linear(from, to))
}

const MOON_X: f32 = MOON_POSITION.x;
const LUNAR_ORBIT_RADIUS: f32 = 80.0;
const PARKING_ORBIT_RADIUS: f32 = 150.0;

/// Stage plans in mission order.
pub const STAGE_PLANS: [StagePlan; STAGE_COUNT] = [
    // Launch
    StagePlan::new(
        Track::moving(AxisCurves::new(fixed(0.0), lerp(100.0, 150.0), None))
            .with_rotation(AxisCurves::new(None, None, fixed(0.0))),
        CameraRig {
            position: [CameraAxis::Fixed(50.0), CameraAxis::csm(30.0), CameraAxis::Fixed(150.0)],
            look_at: Subject::Spacecraft,
        },
    ),
    // Stage separation
    StagePlan::new(
        Track::moving(AxisCurves::new(None, lerp(150.0, 250.0), None))
            .with_rotation(AxisCurves::new(None, None, lerp(0.0, 0.1))),
        CameraRig {
            position: [CameraAxis::Fixed(30.0), CameraAxis::csm(20.0), CameraAxis::Fixed(100.0)],
            look_at: Subject::Spacecraft,
        },
    ),
    // Earth parking orbit
    StagePlan::new(
        Track::moving(AxisCurves::orbit_arc(EARTH_POSITION, PARKING_ORBIT_RADIUS, 1.0))
            .with_rotation(AxisCurves::new(None, lerp(FRAC_PI_2, PI + FRAC_PI_2), None)),
        CameraRig {
            position: [CameraAxis::csm(50.0), CameraAxis::Fixed(50.0), CameraAxis::csm(100.0)],
            look_at: Subject::Earth,
        },
    ),
    // Trans-lunar injection
    StagePlan::new(
        Track::moving(AxisCurves::new(lerp(150.0, 350.0), lerp(0.0, 150.0), fixed(0.0))),
        CameraRig {
            position: [CameraAxis::csm(-50.0), CameraAxis::csm(30.0), CameraAxis::Fixed(100.0)],
            look_at: Subject::Spacecraft,
        },
    )
    .showing_trajectory(),
    // Transposition and docking
    StagePlan::new(
        Track::moving(AxisCurves::new(lerp(350.0, 450.0), lerp(150.0, 200.0), None))
            .with_rotation(AxisCurves::new(None, lerp(0.0, TAU), None)),
        CameraRig {
            position: [CameraAxis::csm(30.0), CameraAxis::csm(10.0), CameraAxis::Fixed(50.0)],
            look_at: Subject::Spacecraft,
        },
    ),
    // Lunar transit
    StagePlan::new(
        Track::moving(AxisCurves::new(
            lerp(450.0, 1450.0),
            some(Curve::SineArc {
                base: 200.0,
                amplitude: 100.0,
                half_turns: 1.0,
            }),
            some(Curve::SineArc {
                base: 0.0,
                amplitude: 50.0,
                half_turns: 0.5,
            }),
        )),
        CameraRig {
            position: [CameraAxis::csm(-100.0), CameraAxis::csm(50.0), CameraAxis::Fixed(200.0)],
            look_at: Subject::Spacecraft,
        },
    ),
    // Lunar orbit insertion
    StagePlan::new(
        Track::moving(AxisCurves::orbit_arc(MOON_POSITION, LUNAR_ORBIT_RADIUS, 1.0)),
        CameraRig {
            position: [
                CameraAxis::Fixed(MOON_X + 150.0),
                CameraAxis::Fixed(50.0),
                CameraAxis::Fixed(150.0),
            ],
            look_at: Subject::Moon,
        },
    ),
    // LM descent
    StagePlan::new(
        Track::moving(AxisCurves::flat_orbit_arc(MOON_POSITION, LUNAR_ORBIT_RADIUS, 0.5)),
        CameraRig {
            position: [CameraAxis::lm(30.0), CameraAxis::lm(20.0), CameraAxis::Fixed(60.0)],
            look_at: Subject::LunarModule,
        },
    )
    .with_lunar_module(
        Track::moving(AxisCurves::new(
            lerp(MOON_X + 30.0, MOON_X + 27.0),
            lerp(50.0, 0.0),
            fixed(0.0),
        )),
        Some(true),
    ),
    // Landing
    StagePlan::new(
        Track::HOLD,
        CameraRig {
            position: [CameraAxis::lm(20.0), CameraAxis::lm(10.0), CameraAxis::Fixed(40.0)],
            look_at: Subject::LunarModule,
        },
    )
    .with_lunar_module(
        Track::moving(AxisCurves::new(
            fixed(MOON_X + MOON_RADIUS),
            fixed(LUNAR_SURFACE_HEIGHT),
            fixed(0.0),
        )),
        Some(true),
    ),
    // LM ascent
    StagePlan::new(
        Track::moving(AxisCurves::flat_orbit_arc(MOON_POSITION, LUNAR_ORBIT_RADIUS, 1.0)),
        CameraRig {
            position: [
                CameraAxis::Fixed(MOON_X + 100.0),
                CameraAxis::Fixed(50.0),
                CameraAxis::Fixed(100.0),
            ],
            look_at: Subject::LunarModule,
        },
    )
    .with_lunar_module(
        Track::moving(AxisCurves::new(
            None,
            lerp(LUNAR_SURFACE_HEIGHT, LUNAR_SURFACE_HEIGHT + 50.0),
            None,
        )),
        None,
    ),
    // Trans-Earth injection
    StagePlan::new(
        Track::moving(AxisCurves::new(lerp(MOON_X, MOON_X - 500.0), lerp(0.0, 100.0), None)),
        CameraRig {
            position: [CameraAxis::csm(100.0), CameraAxis::csm(50.0), CameraAxis::Fixed(200.0)],
            look_at: Subject::Spacecraft,
        },
    )
    .with_lunar_module(Track::HOLD, Some(false)),
    // Reentry and splashdown
    StagePlan::new(
        Track::moving(AxisCurves::new(lerp(1500.0, 0.0), lerp(100.0, 0.0), None))
            .with_rotation(AxisCurves::new(lerp(0.0, FRAC_PI_2), None, None)),
        CameraRig {
            position: [CameraAxis::csm(50.0), CameraAxis::csm(30.0), CameraAxis::Fixed(100.0)],
            look_at: Subject::Spacecraft,
        },
    ),
];

/// Scene placement for `stage_progress` through stage `stage_index`.
///
/// Axes a stage leaves unset keep the value they had when the previous
/// stage finished, so every earlier stage is replayed at full progress
/// before the current one is applied. Indices past the final stage are
/// clamped to it.
pub fn place_for(stage_index: usize, stage_progress: f32) -> Placement {
    let stage_index = stage_index.min(STAGE_COUNT - 1);
    let mut placement = Placement::initial();

    for plan in &STAGE_PLANS[..stage_index] {
        plan.advance(&mut placement, 1.0);
    }

    let plan = &STAGE_PLANS[stage_index];
    plan.advance(&mut placement, stage_progress);
    placement.camera = plan.camera.pose(&placement);
    placement
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-2, "{a} != {b}");
    }

    #[test]
    fn launch_starts_above_the_pad() {
        let placement = place_for(0, 0.0);
        assert_close(placement.spacecraft.position, Vec3::new(0.0, 100.0, 0.0));
        assert_close(placement.camera.position, Vec3::new(50.0, 130.0, 150.0));
        assert_close(placement.camera.look_at, placement.spacecraft.position);
    }

    #[test]
    fn launch_flows_into_stage_separation() {
        let end = place_for(0, 1.0);
        let start = place_for(1, 0.0);
        assert_close(end.spacecraft.position, start.spacecraft.position);
        assert_close(end.spacecraft.rotation, start.spacecraft.rotation);
    }

    #[test]
    fn tli_flows_through_docking_into_transit() {
        assert_close(place_for(3, 1.0).spacecraft.position, place_for(4, 0.0).spacecraft.position);
        assert_close(place_for(4, 1.0).spacecraft.position, place_for(5, 0.0).spacecraft.position);
    }

    #[test]
    fn spacecraft_boundaries_are_continuous_or_jump_as_planned() {
        // (stage ending, continuous into the next stage)
        let boundaries = [
            (0, true),
            (1, false),
            (2, false),
            (3, true),
            (4, true),
            (5, false),
            (6, false),
            (7, true),
            (8, false),
            (9, false),
            (10, true),
        ];
        assert_eq!(boundaries.len(), STAGE_COUNT - 1);

        for (stage, continuous) in boundaries {
            let end = place_for(stage, 1.0).spacecraft.position;
            let start = place_for(stage + 1, 0.0).spacecraft.position;
            assert_eq!(end.distance(start) < 1e-2, continuous, "{stage} -> {}", stage + 1);
        }
    }

    #[test]
    fn orbit_insertion_to_descent_jump_is_kept() {
        assert_close(place_for(6, 1.0).spacecraft.position, Vec3::new(MOON_X - 80.0, 0.0, 0.0));
        assert_close(place_for(7, 0.0).spacecraft.position, Vec3::new(MOON_X + 80.0, 0.0, 0.0));
    }

    #[test]
    fn tei_flows_into_reentry() {
        let expected = Vec3::new(1500.0, 100.0, 0.0);
        assert_close(place_for(10, 1.0).spacecraft.position, expected);
        assert_close(place_for(11, 0.0).spacecraft.position, expected);
    }

    #[test]
    fn lunar_module_lifts_off_from_landing_site() {
        let expected = Vec3::new(MOON_X + MOON_RADIUS, LUNAR_SURFACE_HEIGHT, 0.0);
        assert_close(place_for(8, 1.0).lunar_module.position, expected);
        assert_close(place_for(9, 0.0).lunar_module.position, expected);
        assert_close(expected, Vec3::new(2027.0, 33.0, 0.0));
    }

    #[test]
    fn ascent_to_tei_jump_is_kept() {
        let end = place_for(9, 1.0);
        let start = place_for(10, 0.0);
        assert_close(end.spacecraft.position, Vec3::new(MOON_X - 80.0, 0.0, 0.0));
        assert_close(start.spacecraft.position, Vec3::new(MOON_X, 0.0, 0.0));
    }

    #[test]
    fn placement_is_deterministic() {
        for stage in 0..STAGE_COUNT {
            assert_eq!(place_for(stage, 0.37), place_for(stage, 0.37));
        }
    }

    #[test]
    fn lunar_module_only_flies_on_lunar_stages() {
        for stage in 0..STAGE_COUNT {
            let visible = place_for(stage, 0.5).lunar_module_visible;
            assert_eq!(visible, (7..=9).contains(&stage), "stage {stage}");
        }
    }

    #[test]
    fn trajectory_appears_at_tli() {
        for stage in 0..STAGE_COUNT {
            assert_eq!(place_for(stage, 0.5).trajectory_visible, stage >= 3);
        }
    }

    #[test]
    fn lunar_module_lands_on_surface() {
        let placement = place_for(8, 0.5);
        assert_close(
            placement.lunar_module.position,
            Vec3::new(MOON_X + MOON_RADIUS, LUNAR_SURFACE_HEIGHT, 0.0),
        );
        assert_close(placement.camera.look_at, placement.lunar_module.position);
    }

    #[test]
    fn ascent_keeps_landing_site_longitude() {
        let placement = place_for(9, 1.0);
        assert_close(
            placement.lunar_module.position,
            Vec3::new(MOON_X + MOON_RADIUS, LUNAR_SURFACE_HEIGHT + 50.0, 0.0),
        );
    }

    #[test]
    fn splashdown_returns_home() {
        let placement = place_for(11, 1.0);
        assert_close(placement.spacecraft.position, Vec3::ZERO);
        assert!((placement.spacecraft.rotation.x - FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn out_of_range_stage_is_clamped() {
        assert_eq!(place_for(40, 0.2), place_for(11, 0.2));
    }
}
