//! Sweep manifest export.
//!
//! Before a sweep runs, its full extent can be written out as JSON: every
//! planned invocation with its tag, flags, and rendered command line, plus
//! the shared results-table path and timeout. The manifest makes a finished
//! sweep inspectable without re-deriving the product from the configuration.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::invocation::InvocationSpec;
use crate::parameters::SweepConfig;

/// One planned invocation as it appears in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub tag: String,
    pub flags: String,
    pub command_line: String,
}

/// The manifest document: sweep-wide settings plus one entry per combination,
/// in invocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepManifest {
    pub results_table: String,
    pub timeout_secs: u64,
    pub invocations: Vec<ManifestEntry>,
}

impl SweepManifest {
    /// Build the manifest for a configuration, enumerating the product in the
    /// same odometer order the driver uses.
    pub fn from_config(config: &SweepConfig, runner: &str) -> Self {
        let invocations = config
            .table
            .combinations()
            .iter()
            .map(|combination| {
                let spec =
                    InvocationSpec::new(combination, &config.results_table, config.timeout_secs);
                ManifestEntry {
                    tag: spec.tag().to_string(),
                    flags: spec.flag_string(),
                    command_line: spec.command_line(runner),
                }
            })
            .collect();

        Self {
            results_table: config.results_table.clone(),
            timeout_secs: config.timeout_secs,
            invocations,
        }
    }
}

/// Write the sweep manifest for `config` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn write_sweep_manifest(
    path: impl AsRef<Path>,
    config: &SweepConfig,
    runner: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = SweepManifest::from_config(config, runner);
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &manifest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn standard_config() -> SweepConfig {
        SweepConfig::new()
            .parameter("vrpSearchDist", ["1", "2", "3"])
            .parameter("tspSearchDist", ["1", "2", "3"])
            .results_table("../table.csv")
            .timeout_secs(60)
    }

    #[test]
    fn test_manifest_lists_one_entry_per_combination() {
        let manifest = SweepManifest::from_config(&standard_config(), "./runAll2.sh");
        assert_eq!(manifest.invocations.len(), 9);
        assert_eq!(manifest.invocations[0].tag, ",vrpSearchDist:1,tspSearchDist:1");
        assert_eq!(
            manifest.invocations[8].flags,
            "-vrpSearchDist 3 -tspSearchDist 3"
        );
    }

    #[test]
    fn test_manifest_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep_manifest.json");

        write_sweep_manifest(&path, &standard_config(), "./runAll2.sh").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let restored: SweepManifest = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            restored,
            SweepManifest::from_config(&standard_config(), "./runAll2.sh")
        );
        assert_eq!(restored.timeout_secs, 60);
    }
}
