use serde::Serialize;
use std::fmt;

/// Computed figures for one workout. Values keep full precision; rounding
/// happens only when rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    #[serde(rename = "workout")]
    pub label: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

impl WorkoutSummary {
    pub fn message(&self) -> String {
        render(
            &self.label,
            self.duration_h,
            self.distance_km,
            self.speed_kmh,
            self.calories_kcal,
        )
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

pub fn render(
    label: &str,
    duration_h: f64,
    distance_km: f64,
    speed_kmh: f64,
    calories_kcal: f64,
) -> String {
    format!(
        "Workout: {label}; Duration: {duration_h:.3} h.; Distance: {distance_km:.3} km; \
         Average speed: {speed_kmh:.3} km/h; Kcal spent: {calories_kcal:.3}."
    )
}
