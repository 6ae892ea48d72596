use bevy::prelude::*;
use constants::mission::MissionStage;
use constants::render_settings::COUNTER_ANIMATION_SECONDS;

/// Ease-out cubic on `t ∈ [0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Format a counter value, picking precision from the value it is heading to:
/// whole numbers with thousands separators from 1000 up, one decimal from 1,
/// two decimals below that.
pub fn format_counter(value: f64, target: f64) -> String {
    if target >= 1000.0 {
        group_thousands(value.round() as i64)
    } else if target >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Format a settled value.
pub fn format_value(value: f64) -> String {
    format_counter(value, value)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Time-based ease from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub start: f64,
    pub target: f64,
    pub started_at: f64,
    pub duration: f64,
}

impl CounterAnimation {
    pub fn new(start: f64, target: f64, started_at: f64) -> Self {
        Self {
            start,
            target,
            started_at,
            duration: COUNTER_ANIMATION_SECONDS,
        }
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    /// Value at wall-clock `now`; exactly `target` once the window has elapsed.
    pub fn value_at(&self, now: f64) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target;
        }
        self.start + (self.target - self.start) * ease_out_cubic(t)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// One animated stat readout.
#[derive(Debug, Clone, Default)]
pub struct StatCounter {
    displayed: f64,
    animation: Option<CounterAnimation>,
    text: String,
}

impl StatCounter {
    /// Start easing from whatever is on screen right now towards `target`.
    pub fn retarget(&mut self, target: f64, now: f64) {
        self.sample(now);
        self.animation = Some(CounterAnimation::new(self.displayed, target, now));
    }

    /// Advance to `now`. Returns true while the counter is still moving
    /// (including the frame on which it lands).
    pub fn sample(&mut self, now: f64) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };

        self.displayed = animation.value_at(now);
        self.text = format_counter(self.displayed, animation.target);

        if animation.is_finished(now) {
            self.animation = None;
        }
        true
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }
}

/// The altitude, velocity and distance readouts of the info panel.
#[derive(Resource, Debug, Clone, Default)]
pub struct StatCounters {
    pub altitude: StatCounter,
    pub velocity: StatCounter,
    pub distance: StatCounter,
}

impl StatCounters {
    pub fn retarget(&mut self, stage: &MissionStage, now: f64) {
        self.altitude.retarget(stage.altitude, now);
        self.velocity.retarget(stage.velocity, now);
        self.distance.retarget(stage.distance, now);
    }

    /// Advance all three counters; true if any of them changed this frame.
    pub fn sample(&mut self, now: f64) -> bool {
        let altitude = self.altitude.sample(now);
        let velocity = self.velocity.sample(now);
        let distance = self.distance.sample(now);
        altitude || velocity || distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::mission::stage_at;

    #[test]
    fn formats_follow_magnitude() {
        assert_eq!(format_value(384400.0), "384,400");
        assert_eq!(format_value(10.8), "10.8");
        assert_eq!(format_value(0.5), "0.50");
        assert_eq!(format_value(0.0), "0.00");
        assert_eq!(format_value(1000.0), "1,000");
        assert_eq!(format_value(999.96), "1000.0");
    }

    #[test]
    fn intermediate_values_use_target_precision() {
        assert_eq!(format_counter(12.345, 25000.0), "12");
        assert_eq!(format_counter(1234567.4, 200000.0), "1,234,567");
        assert_eq!(format_counter(0.123, 1.6), "0.1");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_counter(-1234.0, 5000.0), "-1,234");
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn animation_lands_exactly_on_target() {
        let animation = CounterAnimation::new(0.0, 384400.0, 2.0);
        assert_eq!(animation.value_at(2.0), 0.0);
        assert_eq!(animation.value_at(3.0), 384400.0);
        assert_eq!(animation.value_at(9.0), 384400.0);
        assert_eq!(format_counter(animation.value_at(3.0), 384400.0), "384,400");
    }

    #[test]
    fn animation_is_monotonic_towards_target() {
        let animation = CounterAnimation::new(185.0, 1850.0, 0.0);
        let mut previous = animation.value_at(0.0);
        for step in 1..=20 {
            let value = animation.value_at(step as f64 * 0.05);
            assert!(value >= previous);
            previous = value;
        }
        assert!(animation.is_finished(1.0));
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut counter = StatCounter::default();
        counter.retarget(1000.0, 0.0);
        counter.sample(0.5);
        let midway = counter.displayed();
        assert!(midway > 0.0 && midway < 1000.0);

        counter.retarget(0.0, 0.5);
        assert_eq!(counter.displayed(), midway);
        assert!(counter.sample(1.5));
        assert_eq!(counter.displayed(), 0.0);
        assert_eq!(counter.text(), "0.00");
        assert!(!counter.sample(2.0));
    }

    #[test]
    fn counters_track_stage_stats() {
        let mut counters = StatCounters::default();
        counters.retarget(stage_at(6), 0.0);
        assert!(counters.sample(1.0));
        assert_eq!(counters.altitude.text(), "110.0");
        assert_eq!(counters.velocity.text(), "1.6");
        assert_eq!(counters.distance.text(), "384,400");
        assert!(!counters.altitude.is_animating());
    }
}
