//! The external collaborator seam.
//!
//! The driver delegates all real work to two external executables: a compile
//! step invoked once with no arguments, and a run step invoked once per
//! combination. The seam is deliberately narrow (success flag only) so tests
//! can substitute a recording fake instead of spawning processes.

use std::process::Command;

use crate::invocation::InvocationSpec;

/// Collaborator interface for the benchmark pipeline.
///
/// Implementations report bare success; the driver never inspects more and
/// never retries or aborts on failure.
pub trait BenchPipeline {
    /// Invoke the compile collaborator, with no arguments.
    fn compile(&mut self) -> bool;

    /// Invoke the run collaborator for one combination, blocking until it
    /// finishes.
    fn run(&mut self, spec: &InvocationSpec) -> bool;
}

/// Production pipeline that spawns the external executables.
///
/// Each invocation is echoed to stderr as `+ <command line>` before spawning.
/// A missing executable or non-zero exit is logged and reported as `false`;
/// nothing propagates.
#[derive(Debug, Clone)]
pub struct ProcessPipeline {
    compile_cmd: String,
    run_cmd: String,
}

impl ProcessPipeline {
    pub fn new(compile_cmd: impl Into<String>, run_cmd: impl Into<String>) -> Self {
        Self {
            compile_cmd: compile_cmd.into(),
            run_cmd: run_cmd.into(),
        }
    }

    pub fn run_cmd(&self) -> &str {
        &self.run_cmd
    }
}

impl BenchPipeline for ProcessPipeline {
    fn compile(&mut self) -> bool {
        eprintln!("+ {}", self.compile_cmd);
        match Command::new(&self.compile_cmd).status() {
            Ok(status) => status.success(),
            Err(err) => {
                eprintln!("failed to execute {}: {err}", self.compile_cmd);
                false
            }
        }
    }

    fn run(&mut self, spec: &InvocationSpec) -> bool {
        eprintln!("+ {}", spec.command_line(&self.run_cmd));
        match Command::new(&self.run_cmd).args(spec.run_args()).status() {
            Ok(status) => status.success(),
            Err(err) => {
                eprintln!("failed to execute {}: {err}", self.run_cmd);
                false
            }
        }
    }
}
