use crate::error::WorkoutError;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Running,
    RaceWalking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::RaceWalking];

    /// Three-letter code used by the sensor packages.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::RaceWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Label shown in the rendered summary.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::RaceWalking => "RaceWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional fields a package of this kind carries.
    pub const fn field_count(self) -> usize {
        match self {
            Self::Running => 3,
            Self::RaceWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::RaceWalking),
            "SWM" => Ok(Self::Swimming),
            other => Err(WorkoutError::UnrecognizedActivity {
                code: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One raw (activity code, fields) pair as delivered by the sensor.
///
/// Fields stay as JSON values until dispatch so that a non-numeric field is
/// reported against its own package instead of failing the whole input file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawPackage")]
pub struct Package {
    pub code: String,
    pub fields: Vec<JsonValue>,
}

impl Package {
    pub fn new(code: &str, fields: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            fields: fields.iter().copied().map(JsonValue::from).collect(),
        }
    }

    /// Fields as floats; anything that is not a JSON number is malformed.
    pub fn numeric_fields(&self) -> Result<Vec<f64>, WorkoutError> {
        self.fields
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_f64().ok_or_else(|| {
                    WorkoutError::malformed(&self.code, format!("field {i} is not a number: {v}"))
                })
            })
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPackage {
    Pair(String, Vec<JsonValue>),
    Object { code: String, fields: Vec<JsonValue> },
}

impl From<RawPackage> for Package {
    fn from(raw: RawPackage) -> Self {
        match raw {
            RawPackage::Pair(code, fields) | RawPackage::Object { code, fields } => {
                Self { code, fields }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for kind in ActivityKind::ALL {
            assert_eq!(kind.code().parse::<ActivityKind>(), Ok(kind));
        }
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(matches!(
            "run".parse::<ActivityKind>(),
            Err(WorkoutError::UnrecognizedActivity { code }) if code == "run"
        ));
    }

    #[test]
    fn package_accepts_pair_and_object_forms() {
        let pkgs: Vec<Package> = serde_json::from_str(
            r#"[["RUN", [15000, 1, 75]], {"code": "WLK", "fields": [9000, 1, 75, 180]}]"#,
        )
        .unwrap();
        assert_eq!(pkgs[0].code, "RUN");
        assert_eq!(pkgs[0].numeric_fields().unwrap(), vec![15000.0, 1.0, 75.0]);
        assert_eq!(pkgs[1].code, "WLK");
        assert_eq!(pkgs[1].fields.len(), 4);
    }

    #[test]
    fn non_numeric_field_is_malformed() {
        let pkg: Package = serde_json::from_str(r#"["RUN", [15000, "one", 75]]"#).unwrap();
        let err = pkg.numeric_fields().unwrap_err();
        assert!(matches!(err, WorkoutError::MalformedInput { ref code, .. } if code == "RUN"));
    }
}
