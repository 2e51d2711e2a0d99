//! Entry point for the routing-benchmark parameter sweep.
//!
//! The whole sweep configuration is compiled in: the parameter table, the
//! shared results-table path, the per-invocation timeout, and the two
//! collaborator scripts. There is no runtime flag parsing; change the
//! constants below and rebuild to change the sweep.

use bench_sweep_core::{run_sweep, write_sweep_manifest, ProcessPipeline, SweepConfig};

const COMPILE_CMD: &str = "./compile.sh";
const RUN_CMD: &str = "./runAll2.sh";
const MANIFEST_PATH: &str = "sweep_manifest.json";

fn sweep_config() -> SweepConfig {
    SweepConfig::new()
        .parameter("vrpSearchDist", ["1", "2", "3"])
        .parameter("tspSearchDist", ["1", "2", "3"])
        .results_table("../table.csv")
        .timeout_secs(60)
}

fn main() {
    let config = sweep_config();
    println!(
        "Starting parameter sweep: {} combinations",
        config.table.combination_count()
    );

    let mut pipeline = ProcessPipeline::new(COMPILE_CMD, RUN_CMD);

    // Best-effort, like the sweep itself: a manifest failure is not fatal.
    if let Err(err) = write_sweep_manifest(MANIFEST_PATH, &config, pipeline.run_cmd()) {
        eprintln!("failed to write {MANIFEST_PATH}: {err}");
    }
    let summary = run_sweep(&config, &mut pipeline, true);

    println!(
        "Sweep finished: {} invocations issued, {} reported failure (compile ok: {})",
        summary.invocations, summary.run_failures, summary.compile_ok
    );
}
