use crate::lua::classify::{classify, split_args, LineKind};
use crate::lua::resolve::resolve;
use crate::lua::table::OrderedTable;
use crate::params::ParameterRecord;
use crate::prelude::Value;
use crate::telemetry::log::LogManager;
use serde::Serialize;

/// Argument list of a single method invocation.
pub type CallArgs = Vec<Value>;

/// Variables and method invocations extracted from an mmWave Studio Lua script.
///
/// The store is built in one pass, line by line; each line only sees variables
/// bound on earlier lines. Once constructed it is read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigStore {
    variables: OrderedTable<Value>,
    calls: OrderedTable<Vec<CallArgs>>,
}

impl ConfigStore {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::default();
        let mut line_count = 0usize;
        for line in lines {
            store.ingest(line.as_ref());
            line_count += 1;
        }

        LogManager::new("xwrcore::lua").trace_detail(&format!(
            "parsed {} lines: {} variables, {} distinct calls",
            line_count,
            store.variables.len(),
            store.calls.len()
        ));
        store
    }

    pub fn from_script(script: &str) -> Self {
        Self::from_lines(script.lines())
    }

    fn ingest(&mut self, raw: &str) {
        match classify(raw) {
            LineKind::Ignored => {}
            LineKind::Variable { name, expr } => {
                let value = resolve(expr, &self.variables);
                self.define_variable(name, value);
            }
            LineKind::Call {
                object,
                method,
                args,
            } => {
                let resolved = split_args(args)
                    .into_iter()
                    .map(|arg| resolve(arg, &self.variables))
                    .collect();
                self.record_call(&format!("{}.{}", object, method), resolved);
            }
        }
    }

    pub(crate) fn define_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name, value);
    }

    pub(crate) fn record_call(&mut self, qualified_name: &str, args: CallArgs) {
        self.calls.entry_or_default(qualified_name).push(args);
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> &OrderedTable<Value> {
        &self.variables
    }

    pub fn calls(&self) -> &OrderedTable<Vec<CallArgs>> {
        &self.calls
    }

    pub fn has_call(&self, qualified_name: &str) -> bool {
        self.calls.contains_key(qualified_name)
    }

    /// Every recorded invocation of `qualified_name`, in script order.
    pub fn invocations(&self, qualified_name: &str) -> &[CallArgs] {
        self.calls
            .get(qualified_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn call_count(&self, qualified_name: &str) -> usize {
        self.invocations(qualified_name).len()
    }

    pub fn first_call_arg(&self, qualified_name: &str, position: usize) -> Option<&Value> {
        self.invocations(qualified_name).first()?.get(position)
    }

    pub fn last_call_arg(&self, qualified_name: &str, position: usize) -> Option<&Value> {
        self.invocations(qualified_name).last()?.get(position)
    }

    /// Derives the capture parameters described by this script.
    pub fn params(&self) -> ParameterRecord {
        ParameterRecord::derive(self)
    }
}
