use serde::Serialize;

/// Number of mission stages the scroll range is divided into
pub const STAGE_COUNT: usize = 12;

/// One phase of the depicted mission.
///
/// `altitude` and `distance` are in kilometres, `velocity` in km/s. The
/// stage's position in [`MISSION_STAGES`] is its stage index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissionStage {
    pub id: u32,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub altitude: f64,
    pub velocity: f64,
    pub distance: f64,
}

pub const MISSION_STAGES: &[MissionStage; STAGE_COUNT] = &[
    MissionStage {
        id: 1,
        name: "LAUNCH",
        title: "Saturn V Launch",
        description: "The Saturn V rocket stands 363 feet tall, generating 7.6 million pounds of thrust at liftoff from Kennedy Space Center, Florida.",
        altitude: 0.0,
        velocity: 0.0,
        distance: 0.0,
    },
    MissionStage {
        id: 2,
        name: "STAGE SEPARATION",
        title: "First Stage Separation",
        description: "At 42 miles altitude, the S-IC first stage separates after burning 203,000 gallons of fuel in just 2.5 minutes. The S-II second stage ignites.",
        altitude: 67.0,
        velocity: 2.7,
        distance: 93.0,
    },
    MissionStage {
        id: 3,
        name: "EARTH ORBIT",
        title: "Parking Orbit",
        description: "The spacecraft enters a 185 km circular orbit around Earth. The crew performs system checks before committing to the lunar journey.",
        altitude: 185.0,
        velocity: 7.8,
        distance: 185.0,
    },
    MissionStage {
        id: 4,
        name: "TLI BURN",
        title: "Trans-Lunar Injection",
        description: "The S-IVB third stage reignites for 6 minutes, accelerating the spacecraft to 24,500 mph, fast enough to escape Earth's gravity.",
        altitude: 334.0,
        velocity: 10.8,
        distance: 1850.0,
    },
    MissionStage {
        id: 5,
        name: "DOCKING",
        title: "CSM/LM Docking",
        description: "The Command/Service Module separates, rotates 180°, and docks with the Lunar Module. This maneuver is called transposition and docking.",
        altitude: 5000.0,
        velocity: 10.4,
        distance: 25000.0,
    },
    MissionStage {
        id: 6,
        name: "LUNAR TRANSIT",
        title: "Coast to the Moon",
        description: "For three days, the spacecraft coasts toward the Moon, covering 240,000 miles. The crew monitors systems and makes minor course corrections.",
        altitude: 180000.0,
        velocity: 3.5,
        distance: 200000.0,
    },
    MissionStage {
        id: 7,
        name: "LOI",
        title: "Lunar Orbit Insertion",
        description: "The Service Module engine fires to slow the spacecraft, allowing the Moon's gravity to capture it into a 110 km lunar orbit.",
        altitude: 110.0,
        velocity: 1.6,
        distance: 384400.0,
    },
    MissionStage {
        id: 8,
        name: "LM DESCENT",
        title: "Lunar Module Descent",
        description: "Two astronauts transfer to the Lunar Module and undock. The descent engine fires, beginning the 12-minute journey to the surface.",
        altitude: 15.0,
        velocity: 0.5,
        distance: 384400.0,
    },
    MissionStage {
        id: 9,
        name: "MOON LANDING",
        title: "Lunar Surface",
        description: "\"The Eagle has landed.\" Astronauts spend up to 3 days on the Moon, conducting experiments and collecting samples.",
        altitude: 0.0,
        velocity: 0.0,
        distance: 384400.0,
    },
    MissionStage {
        id: 10,
        name: "LM ASCENT",
        title: "Lunar Module Ascent",
        description: "The ascent stage launches from the Moon using the descent stage as a launchpad. It rendezvous and docks with the orbiting Command Module.",
        altitude: 110.0,
        velocity: 1.6,
        distance: 384400.0,
    },
    MissionStage {
        id: 11,
        name: "TEI",
        title: "Trans-Earth Injection",
        description: "The Service Module engine fires behind the Moon, sending the spacecraft on a trajectory back to Earth. The journey home takes about 3 days.",
        altitude: 180000.0,
        velocity: 2.5,
        distance: 200000.0,
    },
    MissionStage {
        id: 12,
        name: "SPLASHDOWN",
        title: "Reentry & Splashdown",
        description: "The Command Module hits the atmosphere at 25,000 mph. Parachutes deploy, and the capsule splashes down in the Pacific Ocean.",
        altitude: 0.0,
        velocity: 0.0,
        distance: 0.0,
    },
];

/// Look up a stage by index, clamping past-the-end indices to the final stage.
pub fn stage_at(index: usize) -> &'static MissionStage {
    &MISSION_STAGES[index.min(STAGE_COUNT - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_mission_order() {
        for (index, stage) in MISSION_STAGES.iter().enumerate() {
            assert_eq!(stage.id as usize, index + 1);
        }
    }

    #[test]
    fn stage_lookup_clamps_to_splashdown() {
        assert_eq!(stage_at(0).name, "LAUNCH");
        assert_eq!(stage_at(11).name, "SPLASHDOWN");
        assert_eq!(stage_at(40).name, "SPLASHDOWN");
    }

    #[test]
    fn lunar_stages_report_earth_moon_distance() {
        for stage in &MISSION_STAGES[6..10] {
            assert_eq!(stage.distance, 384400.0);
        }
    }
}
