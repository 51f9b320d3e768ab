use crate::dlog;
use crate::types::Package;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Readings used when no input file is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Accepts either:
/// - a path to a JSON file
/// - `-` to read the same JSON from stdin
///
/// The JSON is an array whose items are `["RUN", [15000, 1, 75]]` pairs or
/// `{"code": "RUN", "fields": [15000, 1, 75]}` objects.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading packages from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading packages: {}", path.display()))?
    };

    let packages =
        parse_packages(&text).with_context(|| format!("parsing packages: {}", path.display()))?;
    dlog!("loaded packages={} from={}", packages.len(), path.display());
    Ok(packages)
}

pub fn parse_packages(text: &str) -> Result<Vec<Package>> {
    Ok(serde_json::from_str(text)?)
}
