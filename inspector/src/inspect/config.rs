use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use xwrcore::capture::DEFAULT_BUFFERED_FRAMES;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    pub format: OutputFormat,
    /// Include the extracted variable and call tables in the report.
    pub raw: bool,
    pub buffer_frames: usize,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            raw: false,
            buffer_frames: DEFAULT_BUFFERED_FRAMES,
        }
    }
}

impl InspectConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading inspect config {}", path_ref.display()))?;
        let config: InspectConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing inspect config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Applies command-line flags on top of the loaded values.
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        raw: bool,
        buffer_frames: Option<usize>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self.raw |= raw;
        if let Some(frames) = buffer_frames {
            self.buffer_frames = frames;
        }
        self
    }
}
