use crate::error::WorkoutError;
use crate::types::{ActivityKind, Package};
use crate::workout::{Measurements, Workout};

/// Build a workout from an activity code and its positional fields.
///
/// Field order follows the record layout:
/// - `RUN`: action count, duration (h), weight (kg)
/// - `WLK`: the above plus height (cm)
/// - `SWM`: the above plus pool length (m) and number of pool lengths
pub fn build_workout(code: &str, fields: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: ActivityKind = code.parse()?;

    let expected = kind.field_count();
    if fields.len() != expected {
        return Err(WorkoutError::malformed(
            code,
            format!("expected {expected} fields, got {}", fields.len()),
        ));
    }
    if let Some((i, v)) = fields.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(WorkoutError::malformed(code, format!("field {i} is not finite: {v}")));
    }

    let base = Measurements::new(action_count(code, fields[0])?, fields[1], fields[2])?;

    match kind {
        ActivityKind::Running => Ok(Workout::running(base)),
        ActivityKind::RaceWalking => Workout::race_walking(base, fields[3]),
        ActivityKind::Swimming => Ok(Workout::swimming(base, fields[3], fields[4])),
    }
}

/// Dispatch a raw package, checking its fields are numbers first.
pub fn build_from_package(pkg: &Package) -> Result<Workout, WorkoutError> {
    // Unknown codes are reported before field problems.
    pkg.code.parse::<ActivityKind>()?;
    build_workout(&pkg.code, &pkg.numeric_fields()?)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn action_count(code: &str, value: f64) -> Result<u64, WorkoutError> {
    if value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(WorkoutError::malformed(
            code,
            format!("action count must be a non-negative integer, got {value}"),
        ));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_known_kind() {
        let swim = build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swim.kind(), ActivityKind::Swimming);

        let run = build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(run.kind(), ActivityKind::Running);
        assert_eq!(run.measurements().action_count(), 15000);

        let walk = build_workout("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walk.kind(), ActivityKind::RaceWalking);
        assert_eq!(walk.detail(), &crate::workout::Detail::RaceWalking { height_cm: 180.0 });
    }

    #[test]
    fn binds_fields_positionally() {
        let swim = build_workout("SWM", &[720.0, 2.0, 80.0, 25.0, 40.0]).unwrap();
        let m = swim.measurements();
        assert_eq!(m.action_count(), 720);
        assert!((m.duration_hours() - 2.0).abs() < f64::EPSILON);
        assert!((m.weight_kg() - 80.0).abs() < f64::EPSILON);
        assert_eq!(
            swim.detail(),
            &crate::workout::Detail::Swimming {
                pool_length_m: 25.0,
                pool_lengths_count: 40.0
            }
        );
    }

    #[test]
    fn rejects_unknown_codes() {
        for code in ["XYZ", "", "run", "SWIM", "RUN "] {
            let err = build_workout(code, &[1.0, 1.0, 1.0]).unwrap_err();
            assert_eq!(
                err,
                WorkoutError::UnrecognizedActivity {
                    code: code.to_string()
                }
            );
        }
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = build_workout("RUN", &[15000.0, 1.0]).unwrap_err();
        assert_eq!(err, WorkoutError::malformed("RUN", "expected 3 fields, got 2"));

        let err = build_workout("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::MalformedInput { .. }));
    }

    #[test]
    fn rejects_fractional_or_negative_action_count() {
        assert!(matches!(
            build_workout("RUN", &[100.5, 1.0, 75.0]),
            Err(WorkoutError::MalformedInput { .. })
        ));
        assert!(matches!(
            build_workout("RUN", &[-1.0, 1.0, 75.0]),
            Err(WorkoutError::MalformedInput { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_fields() {
        assert!(matches!(
            build_workout("SWM", &[720.0, 1.0, f64::INFINITY, 25.0, 40.0]),
            Err(WorkoutError::MalformedInput { .. })
        ));
    }

    #[test]
    fn divisor_checks_surface_from_dispatch() {
        assert!(matches!(
            build_workout("RUN", &[15000.0, 0.0, 75.0]),
            Err(WorkoutError::InvalidDivisor {
                field: "duration_hours",
                ..
            })
        ));
        assert!(matches!(
            build_workout("WLK", &[9000.0, 1.0, 75.0, 0.0]),
            Err(WorkoutError::InvalidDivisor {
                field: "height_cm",
                ..
            })
        ));
    }

    #[test]
    fn package_with_unknown_code_and_bad_fields_reports_code() {
        let pkg: Package = serde_json::from_str(r#"["XYZ", ["a"]]"#).unwrap();
        assert!(matches!(
            build_from_package(&pkg),
            Err(WorkoutError::UnrecognizedActivity { .. })
        ));
    }

    #[test]
    fn package_with_string_field_is_malformed() {
        let pkg: Package = serde_json::from_str(r#"["RUN", [15000, 1, "75"]]"#).unwrap();
        assert!(matches!(
            build_from_package(&pkg),
            Err(WorkoutError::MalformedInput { .. })
        ));
    }
}
