//! Capture parameters derived from a parsed Lua configuration.

pub mod formulas;
pub mod platform;

pub use formulas::{CHANNEL_ADC_CONFIG, CHIP_SELECT, DATA_PATH_CONFIG};
pub use platform::platform_for_chip;

use crate::prelude::Value;
use serde::{Deserialize, Serialize};

/// Fixed parameter schema for one capture session.
///
/// Every field is optional: a field is `None` when the script does not carry
/// what its formula needs. Units follow the formulas in [`formulas`]: times in
/// microseconds, `chirp_slope` and `sample_rate` scaled from MHz/us and ksps,
/// velocities in m/s, ranges in metres, `frame_size` in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub sdk: Option<String>,
    pub platform: Option<String>,
    pub adc_output_fmt: Option<Value>,
    pub range_bias: Option<f64>,
    pub rx_phase_bias: Option<Vec<f64>>,
    pub n_chirps: Option<Value>,
    pub rx: Option<[i64; 4]>,
    pub n_rx: Option<i64>,
    pub n_tx: Option<Value>,
    pub tx: Option<Vec<i64>>,
    pub n_samples: Option<Value>,
    pub frame_time: Option<Value>,
    pub frame_size: Option<Value>,
    pub chirp_time: Option<Value>,
    pub chirp_slope: Option<f64>,
    pub sample_rate: Option<f64>,
    pub velocity_max: Option<f64>,
    pub velocity_res: Option<f64>,
    pub range_max: Option<f64>,
    pub range_res: Option<f64>,
}
