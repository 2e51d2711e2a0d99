//! Parameter table and Cartesian-product generation.
//!
//! A sweep is defined by an ordered table of named parameters, each with an
//! ordered list of candidate values. Table order is significant: it fixes the
//! order of flags and tag entries in every invocation, and the enumeration
//! order of the product itself.

use serde::{Deserialize, Serialize};

/// A single named parameter and its candidate values, in sweep order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub values: Vec<String>,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// One assignment of a single value to every configured parameter.
///
/// Pairs appear in table order. Ephemeral: built, formatted into an
/// invocation, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pairs: Vec<(String, String)>,
}

impl Combination {
    /// The `(name, value)` pairs in table order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Look up the value assigned to a parameter name, if present.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// An ordered table of parameters, fixed at configuration time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterTable {
    parameters: Vec<Parameter>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter to the table (order of calls fixes sweep order).
    pub fn parameter(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.parameters.push(Parameter::new(name, values));
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Number of combinations the table produces: the product of candidate
    /// counts. Zero if any parameter has no candidates.
    pub fn combination_count(&self) -> usize {
        self.parameters.iter().map(|p| p.values.len()).product()
    }

    /// Generate the full Cartesian product in odometer order: parameters in
    /// table order, each parameter's values in listed order, the last
    /// parameter varying fastest.
    ///
    /// Built by iteratively expanding partial combinations, one parameter at
    /// a time. A parameter with an empty candidate list collapses the product
    /// to nothing.
    pub fn combinations(&self) -> Vec<Combination> {
        let mut partial: Vec<Vec<(String, String)>> = vec![Vec::new()];

        for param in &self.parameters {
            partial = partial
                .iter()
                .flat_map(|prefix| {
                    param.values.iter().map(move |value| {
                        let mut pairs = prefix.clone();
                        pairs.push((param.name.clone(), value.clone()));
                        pairs
                    })
                })
                .collect();
        }

        partial
            .into_iter()
            .map(|pairs| Combination { pairs })
            .collect()
    }
}

/// Immutable configuration for one sweep.
///
/// The parameter table, results-table path, and timeout are all fixed before
/// the sweep starts and passed explicitly into the driver; nothing is read
/// from flags, the environment, or config files at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub table: ParameterTable,
    /// Path of the shared results table, forwarded verbatim to the runner.
    pub results_table: String,
    /// Per-invocation timeout in seconds, forwarded as data to the runner.
    /// The driver itself never enforces it.
    pub timeout_secs: u64,
}

impl SweepConfig {
    pub fn new() -> Self {
        Self {
            table: ParameterTable::new(),
            results_table: "table.csv".to_string(),
            timeout_secs: 60,
        }
    }

    /// Append a parameter to the sweep's table.
    pub fn parameter(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.table = self.table.parameter(name, values);
        self
    }

    pub fn results_table(mut self, path: impl Into<String>) -> Self {
        self.results_table = path.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new()
    }
}
