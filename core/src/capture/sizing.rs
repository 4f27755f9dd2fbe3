use crate::params::ParameterRecord;
use crate::prelude::{CaptureError, CaptureResult, Value};
use crate::telemetry::log::LogManager;
use serde::Serialize;

/// Frames of headroom the reassembly buffer holds by default.
pub const DEFAULT_BUFFERED_FRAMES: usize = 2;

/// Constructor arguments for a frame reassembly buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptureSizing {
    pub buffer_capacity_bytes: usize,
    pub frame_size_bytes: usize,
    pub n_samples: usize,
    pub n_rx: usize,
    pub n_chirps: usize,
}

impl CaptureSizing {
    /// Sizes a buffer holding `frames` whole frames.
    ///
    /// Unlike derivation this is strict: every input has to be a positive
    /// integer.
    pub fn from_params(params: &ParameterRecord, frames: usize) -> CaptureResult<Self> {
        if frames == 0 {
            return Err(CaptureError::InvalidParameter {
                name: "buffer_frames",
                value: frames.to_string(),
            });
        }

        let frame_size_bytes = positive("frame_size", params.frame_size.as_ref())?;
        let n_samples = positive("n_samples", params.n_samples.as_ref())?;
        let n_rx = positive("n_rx", params.n_rx.map(Value::Int).as_ref())?;
        let n_chirps = positive("n_chirps", params.n_chirps.as_ref())?;
        let buffer_capacity_bytes = frame_size_bytes.checked_mul(frames).ok_or_else(|| {
            CaptureError::InvalidParameter {
                name: "buffer_frames",
                value: frames.to_string(),
            }
        })?;

        LogManager::new("xwrcore::capture").record(&format!(
            "capture sizing: frame {} bytes, buffer {} bytes ({} frames)",
            frame_size_bytes, buffer_capacity_bytes, frames
        ));

        Ok(Self {
            buffer_capacity_bytes,
            frame_size_bytes,
            n_samples,
            n_rx,
            n_chirps,
        })
    }
}

fn positive(name: &'static str, value: Option<&Value>) -> CaptureResult<usize> {
    let value = value.ok_or(CaptureError::MissingParameter(name))?;
    let count = match value {
        Value::Int(n) => usize::try_from(*n).ok(),
        Value::Float(x) if x.is_finite() && x.fract() == 0.0 && *x >= 0.0 => {
            usize::try_from(*x as u64).ok()
        }
        _ => None,
    };
    count
        .filter(|&count| count > 0)
        .ok_or_else(|| CaptureError::InvalidParameter {
            name,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ParameterRecord {
        ParameterRecord {
            n_samples: Some(Value::Int(256)),
            n_rx: Some(2),
            n_chirps: Some(Value::Int(12)),
            frame_size: Some(Value::Int(24576)),
            ..Default::default()
        }
    }

    #[test]
    fn default_buffer_holds_two_frames() {
        let sizing = CaptureSizing::from_params(&record(), DEFAULT_BUFFERED_FRAMES).unwrap();
        assert_eq!(sizing.frame_size_bytes, 24576);
        assert_eq!(sizing.buffer_capacity_bytes, 49152);
        assert_eq!((sizing.n_samples, sizing.n_rx, sizing.n_chirps), (256, 2, 12));
    }

    #[test]
    fn integral_float_sizes_are_accepted() {
        let params = ParameterRecord {
            frame_size: Some(Value::Float(24576.0)),
            ..record()
        };
        let sizing = CaptureSizing::from_params(&params, 1).unwrap();
        assert_eq!(sizing.buffer_capacity_bytes, 24576);
    }

    #[test]
    fn missing_frame_size_is_an_error() {
        let params = ParameterRecord {
            frame_size: None,
            ..record()
        };
        assert_eq!(
            CaptureSizing::from_params(&params, 2),
            Err(CaptureError::MissingParameter("frame_size"))
        );
    }

    #[test]
    fn fractional_or_zero_values_are_rejected() {
        let params = ParameterRecord {
            n_samples: Some(Value::Float(255.5)),
            ..record()
        };
        assert!(matches!(
            CaptureSizing::from_params(&params, 2),
            Err(CaptureError::InvalidParameter {
                name: "n_samples",
                ..
            })
        ));

        let params = ParameterRecord {
            n_rx: Some(0),
            ..record()
        };
        assert!(CaptureSizing::from_params(&params, 2).is_err());
    }

    #[test]
    fn zero_frames_is_rejected() {
        assert!(CaptureSizing::from_params(&record(), 0).is_err());
    }
}
