//! Sweep driver for the routing benchmark pipeline.
//!
//! This crate enumerates the Cartesian product of a fixed parameter table and
//! invokes an external benchmarking pipeline once per combination: a compile
//! step first, then one run per combination with the combination encoded as
//! CLI flags and a tag string. All real work (compiling, running searches,
//! appending to the results table) lives in the external programs.
//!
//! # Quick Start
//!
//! ```no_run
//! use bench_sweep_core::{ProcessPipeline, SweepConfig, run_sweep};
//!
//! // Define the sweep (grid over every listed value)
//! let config = SweepConfig::new()
//!     .parameter("vrpSearchDist", ["1", "2", "3"])
//!     .parameter("tspSearchDist", ["1", "2", "3"])
//!     .results_table("../table.csv")
//!     .timeout_secs(60);
//!
//! // Shell out once per combination, compile step first
//! let mut pipeline = ProcessPipeline::new("./compile.sh", "./runAll2.sh");
//! let summary = run_sweep(&config, &mut pipeline, true);
//! println!("{} invocations issued", summary.invocations);
//! ```
//!
//! # Architecture
//!
//! - [`parameters`]: parameter table and Cartesian-product generation
//! - [`invocation`]: combination-to-command-line formatting
//! - [`pipeline`]: the external collaborator seam (compile + run)
//! - [`driver`]: the sequential sweep loop
//! - [`export`]: sweep manifest export to JSON

pub mod driver;
pub mod export;
pub mod invocation;
pub mod parameters;
pub mod pipeline;

pub use driver::{run_sweep, SweepSummary};
pub use export::{write_sweep_manifest, SweepManifest};
pub use invocation::InvocationSpec;
pub use parameters::{Combination, Parameter, ParameterTable, SweepConfig};
pub use pipeline::{BenchPipeline, ProcessPipeline};
