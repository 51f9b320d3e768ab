//! Distance, speed and energy formulas for the supported activity kinds.
//!
//! Every kind shares the step-based distance and the default mean speed;
//! swimming swaps in its own stroke length and derives speed from the pool
//! geometry instead.

use crate::error::WorkoutError;
use crate::summary::WorkoutSummary;
use crate::types::ActivityKind;

pub const METERS_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Step length in meters for running and race-walking.
pub const STEP_LENGTH: f64 = 0.65;
/// Stroke length in meters for swimming.
pub const STROKE_LENGTH: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Measurements every activity kind carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
}

impl Measurements {
    /// Fails when `duration_hours` is not strictly positive.
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        ensure_positive("duration_hours", duration_hours)?;
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }

    pub const fn action_count(&self) -> u64 {
        self.action_count
    }

    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Kind-specific part of a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detail {
    Running,
    RaceWalking {
        height_cm: f64,
    },
    Swimming {
        pool_length_m: f64,
        pool_lengths_count: f64,
    },
}

/// A single finished workout, immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    base: Measurements,
    detail: Detail,
}

impl Workout {
    pub const fn running(base: Measurements) -> Self {
        Self {
            base,
            detail: Detail::Running,
        }
    }

    pub fn race_walking(base: Measurements, height_cm: f64) -> Result<Self, WorkoutError> {
        ensure_positive("height_cm", height_cm)?;
        Ok(Self {
            base,
            detail: Detail::RaceWalking { height_cm },
        })
    }

    pub const fn swimming(base: Measurements, pool_length_m: f64, pool_lengths_count: f64) -> Self {
        Self {
            base,
            detail: Detail::Swimming {
                pool_length_m,
                pool_lengths_count,
            },
        }
    }

    pub const fn kind(&self) -> ActivityKind {
        match self.detail {
            Detail::Running => ActivityKind::Running,
            Detail::RaceWalking { .. } => ActivityKind::RaceWalking,
            Detail::Swimming { .. } => ActivityKind::Swimming,
        }
    }

    pub const fn measurements(&self) -> &Measurements {
        &self.base
    }

    pub const fn detail(&self) -> &Detail {
        &self.detail
    }

    /// Length of one step or stroke, in meters.
    pub const fn step_length(&self) -> f64 {
        match self.detail {
            Detail::Swimming { .. } => STROKE_LENGTH,
            Detail::Running | Detail::RaceWalking { .. } => STEP_LENGTH,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn distance_km(&self) -> f64 {
        self.base.action_count as f64 * self.step_length() / METERS_PER_KM
    }

    /// Average speed over the whole workout in km/h.
    ///
    /// Swimming ignores the stroke count here and uses the pool lengths swum.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.detail {
            Detail::Swimming {
                pool_length_m,
                pool_lengths_count,
            } => pool_length_m * pool_lengths_count / METERS_PER_KM / self.base.duration_hours,
            Detail::Running | Detail::RaceWalking { .. } => {
                self.distance_km() / self.base.duration_hours
            }
        }
    }

    pub fn calories_kcal(&self) -> f64 {
        let Measurements {
            duration_hours,
            weight_kg,
            ..
        } = self.base;
        let speed = self.mean_speed_kmh();

        match self.detail {
            Detail::Running => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * weight_kg / METERS_PER_KM
                    * duration_hours
                    * MINUTES_PER_HOUR
            }
            Detail::RaceWalking { height_cm } => {
                (WALK_WEIGHT_MULTIPLIER * weight_kg
                    + floor_div(speed.powi(2), height_cm) * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_hours
                    * MINUTES_PER_HOUR
            }
            Detail::Swimming { .. } => (speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg,
        }
    }

    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            label: self.kind().label().to_string(),
            duration_h: self.base.duration_hours,
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// Floor of `a / b`, rounded toward negative infinity.
///
/// Computed from the float remainder rather than `(a / b).floor()` so that a
/// quotient which rounds up to an integer is not pushed past the true floor.
#[allow(clippy::float_cmp)]
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), WorkoutError> {
    // NaN fails this comparison too.
    if value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::InvalidDivisor { field, value })
    }
}
