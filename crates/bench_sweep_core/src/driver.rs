//! Sequential sweep execution.
//!
//! A single linear pass: compile once, then one blocking run invocation per
//! combination in odometer order. No retries, no aborts, no overlap between
//! invocations. The timeout in the configuration is forwarded to the runner
//! as data; the driver never enforces it.

use indicatif::{ProgressBar, ProgressStyle};

use crate::invocation::InvocationSpec;
use crate::parameters::SweepConfig;
use crate::pipeline::BenchPipeline;

/// What a finished sweep looked like.
///
/// Purely observational: the sweep is best-effort, so failures are counted
/// here and surfaced in logs but never acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    /// Run invocations issued (the size of the Cartesian product).
    pub invocations: usize,
    /// Run invocations that reported failure (non-zero exit or spawn error).
    pub run_failures: usize,
    /// Whether the compile step reported success.
    pub compile_ok: bool,
}

/// Run the full sweep against the given pipeline.
///
/// Invokes `pipeline.compile()` exactly once before any combination, then
/// iterates the Cartesian product of `config.table` in odometer order (table
/// order, last parameter varying fastest), issuing one blocking run
/// invocation per combination. An empty product issues zero run invocations;
/// the compile step still happens.
///
/// Collaborator failures never stop the loop; they are logged and tallied in
/// the returned [`SweepSummary`].
pub fn run_sweep<P: BenchPipeline>(
    config: &SweepConfig,
    pipeline: &mut P,
    show_progress: bool,
) -> SweepSummary {
    let compile_ok = pipeline.compile();
    if !compile_ok {
        eprintln!("compile step reported failure, continuing with sweep");
    }

    let combinations = config.table.combinations();
    let total = combinations.len();

    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let mut run_failures = 0;
    for combination in &combinations {
        let spec = InvocationSpec::new(combination, &config.results_table, config.timeout_secs);
        if !pipeline.run(&spec) {
            run_failures += 1;
        }
        if let Some(ref bar) = pb {
            bar.inc(1);
        }
    }

    if let Some(ref bar) = pb {
        bar.finish_with_message("Completed");
    }

    SweepSummary {
        invocations: total,
        run_failures,
        compile_ok,
    }
}
