use crate::inspect::config::{InspectConfig, OutputFormat};
use anyhow::Context;
use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::path::Path;
use xwrcore::capture::CaptureSizing;
use xwrcore::lua::{CallArgs, OrderedTable};
use xwrcore::{ConfigStore, ParameterRecord, Value};

/// Everything the inspector prints for one script.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub script: String,
    pub params: ParameterRecord,
    pub sizing: Option<CaptureSizing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<OrderedTable<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calls: Option<OrderedTable<Vec<CallArgs>>>,
}

#[derive(Clone)]
pub struct Inspector {
    config: InspectConfig,
}

impl Inspector {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn inspect<P: AsRef<Path>>(&self, script_path: P) -> anyhow::Result<InspectReport> {
        let path_ref = script_path.as_ref();
        let script = fs::read_to_string(path_ref)
            .with_context(|| format!("reading Lua script {}", path_ref.display()))?;
        info!("inspecting {}", path_ref.display());
        Ok(self.inspect_script(&path_ref.display().to_string(), &script))
    }

    pub fn inspect_script(&self, name: &str, script: &str) -> InspectReport {
        let store = ConfigStore::from_script(script);
        let params = store.params();

        let (sizing, sizing_error) =
            match CaptureSizing::from_params(&params, self.config.buffer_frames) {
                Ok(sizing) => (Some(sizing), None),
                Err(err) => {
                    warn!("{}: capture buffer cannot be sized: {}", name, err);
                    (None, Some(err.to_string()))
                }
            };

        let (variables, calls) = if self.config.raw {
            (Some(store.variables().clone()), Some(store.calls().clone()))
        } else {
            (None, None)
        };

        InspectReport {
            script: name.to_string(),
            params,
            sizing,
            sizing_error,
            variables,
            calls,
        }
    }

    pub fn render(&self, report: &InspectReport) -> anyhow::Result<String> {
        match self.config.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("rendering report as JSON")
            }
            OutputFormat::Yaml => serde_yaml::to_string(report).context("rendering report as YAML"),
        }
    }
}
