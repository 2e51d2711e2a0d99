//! Combination-to-command-line formatting.
//!
//! The run collaborator takes a flat positional argument list: results-table
//! path, tag, timeout, then one `-<name> <value>` flag pair per parameter.
//! Everything here is pure string construction so it can be tested without
//! spawning anything.

use serde::{Deserialize, Serialize};

use crate::parameters::Combination;

/// Fully formatted arguments for one run invocation.
///
/// Derived from a [`Combination`] plus the sweep-wide results-table path and
/// timeout. Flag order and tag order both follow table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationSpec {
    results_table: String,
    tag: String,
    timeout_secs: u64,
    flag_tokens: Vec<String>,
}

impl InvocationSpec {
    pub fn new(combination: &Combination, results_table: &str, timeout_secs: u64) -> Self {
        let tag = format_tag(combination);
        let flag_tokens = format_flag_tokens(combination);
        Self {
            results_table: results_table.to_string(),
            tag,
            timeout_secs,
            flag_tokens,
        }
    }

    /// The tag column value: a leading comma, then `,`-separated `name:value`
    /// entries in table order (e.g. `,vrpSearchDist:2,tspSearchDist:1`).
    ///
    /// The leading comma lets downstream tooling append the tag directly
    /// after an existing results-table field.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Flag tokens as separate argv elements: `-<name>` then `<value>`, one
    /// pair per parameter in table order.
    pub fn flag_tokens(&self) -> &[String] {
        &self.flag_tokens
    }

    /// Flags space-joined, e.g. `-vrpSearchDist 2 -tspSearchDist 1`.
    pub fn flag_string(&self) -> String {
        self.flag_tokens.join(" ")
    }

    /// Positional argv for the run collaborator, in contract order:
    /// results-table path, tag, timeout, flags. The tag is delivered as a
    /// single element, so no shell quoting is involved.
    pub fn run_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(3 + self.flag_tokens.len());
        args.push(self.results_table.clone());
        args.push(self.tag.clone());
        args.push(self.timeout_secs.to_string());
        args.extend(self.flag_tokens.iter().cloned());
        args
    }

    /// The equivalent one-line shell rendering, with the tag wrapped in
    /// double quotes so it would survive shell word-splitting as one token.
    /// Used for command echo and the sweep manifest.
    pub fn command_line(&self, runner: &str) -> String {
        let mut line = format!(
            "{} {} \"{}\" {}",
            runner, self.results_table, self.tag, self.timeout_secs
        );
        if !self.flag_tokens.is_empty() {
            line.push(' ');
            line.push_str(&self.flag_string());
        }
        line
    }
}

fn format_tag(combination: &Combination) -> String {
    let entries = combination
        .pairs()
        .iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>()
        .join(",");
    format!(",{entries}")
}

fn format_flag_tokens(combination: &Combination) -> Vec<String> {
    combination
        .pairs()
        .iter()
        .flat_map(|(name, value)| [format!("-{name}"), value.clone()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterTable;

    fn combo(vrp: &str, tsp: &str) -> Combination {
        let table = ParameterTable::new()
            .parameter("vrpSearchDist", [vrp])
            .parameter("tspSearchDist", [tsp]);
        table.combinations().remove(0)
    }

    #[test]
    fn test_tag_format() {
        let spec = InvocationSpec::new(&combo("2", "1"), "../table.csv", 60);
        assert_eq!(spec.tag(), ",vrpSearchDist:2,tspSearchDist:1");
    }

    #[test]
    fn test_flag_format() {
        let spec = InvocationSpec::new(&combo("2", "1"), "../table.csv", 60);
        assert_eq!(spec.flag_string(), "-vrpSearchDist 2 -tspSearchDist 1");
        assert_eq!(
            spec.flag_tokens(),
            ["-vrpSearchDist", "2", "-tspSearchDist", "1"]
        );
    }

    #[test]
    fn test_run_args_positional_order() {
        let spec = InvocationSpec::new(&combo("2", "1"), "../table.csv", 60);
        assert_eq!(
            spec.run_args(),
            [
                "../table.csv",
                ",vrpSearchDist:2,tspSearchDist:1",
                "60",
                "-vrpSearchDist",
                "2",
                "-tspSearchDist",
                "1",
            ]
        );
    }

    #[test]
    fn test_command_line_quotes_tag() {
        let spec = InvocationSpec::new(&combo("2", "1"), "../table.csv", 60);
        assert_eq!(
            spec.command_line("./runAll2.sh"),
            "./runAll2.sh ../table.csv \",vrpSearchDist:2,tspSearchDist:1\" 60 -vrpSearchDist 2 -tspSearchDist 1"
        );
    }

    #[test]
    fn test_single_pair_tag() {
        let table = ParameterTable::new().parameter("vrpSearchDist", ["3"]);
        let combos = table.combinations();
        let spec = InvocationSpec::new(&combos[0], "table.csv", 10);
        assert_eq!(spec.tag(), ",vrpSearchDist:3");
        assert_eq!(spec.flag_string(), "-vrpSearchDist 3");
    }
}
