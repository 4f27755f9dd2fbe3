use crate::lua::ConfigStore;
use crate::params::platform::platform_for_chip;
use crate::params::ParameterRecord;
use crate::prelude::Value;

pub const CHIP_SELECT: &str = "ar1.SelectChipVersion";
pub const DATA_PATH_CONFIG: &str = "ar1.DataPathConfig";
pub const CHANNEL_ADC_CONFIG: &str = "ar1.ChanNAdcConfig";

const SPEED_OF_LIGHT: f64 = 3e8;

/// Bytes per ADC sample for complex (I/Q) and real output.
const COMPLEX_SAMPLE_BYTES: i64 = 4;
const REAL_SAMPLE_BYTES: i64 = 2;

impl ParameterRecord {
    /// Derives every field from `store`. Pure and total: a field whose inputs
    /// are missing, non-numeric, or produce a non-finite result is `None`.
    pub fn derive(store: &ConfigStore) -> Self {
        let adc_output_fmt = passthrough(store.first_call_arg(DATA_PATH_CONFIG, 1));
        let n_chirps = n_chirps(store);
        let (rx, n_rx) = match rx_enables(store) {
            Some((rx, n_rx)) => (Some(rx), Some(n_rx)),
            None => (None, None),
        };
        let n_tx = passthrough(store.variable("NUM_TX"));
        let n_samples = passthrough(store.variable("ADC_SAMPLES"));
        let frame_time = passthrough(store.variable("PERIODICITY"));

        let frame_size = frame_size(
            n_samples.as_ref(),
            n_rx,
            n_chirps.as_ref(),
            adc_output_fmt.as_ref(),
        );
        let chirp_time = store
            .variable("IDLE_TIME")
            .zip(store.variable("RAMP_END_TIME"))
            .and_then(|(idle, ramp_end)| idle.checked_add(ramp_end));
        let chirp_slope = scaled(store.variable("FREQ_SLOPE"), 1e6);
        let sample_rate = scaled(store.variable("SAMPLE_RATE"), 1e3);

        let (velocity_max, velocity_res) = unzip(velocity(
            store.variable("START_FREQ"),
            chirp_time.as_ref(),
            n_chirps.as_ref(),
            n_tx.as_ref(),
        ));
        let (range_max, range_res) = unzip(range(sample_rate, chirp_slope, n_samples.as_ref()));

        Self {
            sdk: None,
            platform: platform(store),
            adc_output_fmt,
            range_bias: None,
            rx_phase_bias: None,
            n_chirps,
            rx,
            n_rx,
            n_tx,
            // TX enables are not written as a bitmask in the script.
            tx: None,
            n_samples,
            frame_time,
            frame_size,
            chirp_time,
            chirp_slope,
            sample_rate,
            velocity_max,
            velocity_res,
            range_max,
            range_res,
        }
    }
}

fn platform(store: &ConfigStore) -> Option<String> {
    let chip = store.last_call_arg(CHIP_SELECT, 0)?.as_str()?;
    platform_for_chip(chip).map(str::to_string)
}

/// `(END_CHIRP_TX - START_CHIRP_TX + 1) * CHIRP_LOOPS`
fn n_chirps(store: &ConfigStore) -> Option<Value> {
    let start = store.variable("START_CHIRP_TX")?;
    let end = store.variable("END_CHIRP_TX")?;
    let loops = store.variable("CHIRP_LOOPS")?;
    end.checked_sub(start)?
        .checked_add(&Value::Int(1))?
        .checked_mul(loops)
}

/// RX0..RX3 enable flags sit at argument positions 3..=6 of the first
/// `ChanNAdcConfig` call.
fn rx_enables(store: &ConfigStore) -> Option<([i64; 4], i64)> {
    let args = store.invocations(CHANNEL_ADC_CONFIG).first()?;
    let flags = args.get(3..7)?;

    let mut rx = [0i64; 4];
    for (slot, flag) in rx.iter_mut().zip(flags) {
        *slot = flag.to_int()?;
    }
    let n_rx = rx.iter().try_fold(0i64, |acc, &bit| acc.checked_add(bit))?;
    Some((rx, n_rx))
}

fn frame_size(
    n_samples: Option<&Value>,
    n_rx: Option<i64>,
    n_chirps: Option<&Value>,
    adc_output_fmt: Option<&Value>,
) -> Option<Value> {
    let sample_bytes = if adc_output_fmt?.as_f64()? > 0.0 {
        COMPLEX_SAMPLE_BYTES
    } else {
        REAL_SAMPLE_BYTES
    };
    n_samples?
        .checked_mul(&Value::Int(n_rx?))?
        .checked_mul(n_chirps?)?
        .checked_mul(&Value::Int(sample_bytes))
}

/// Copies a script value into the record, dropping infinite floats.
fn passthrough(value: Option<&Value>) -> Option<Value> {
    match value? {
        Value::Float(x) if !x.is_finite() => None,
        other => Some(other.clone()),
    }
}

fn scaled(value: Option<&Value>, factor: f64) -> Option<f64> {
    finite(value?.as_f64()? * factor)
}

fn velocity(
    start_freq: Option<&Value>,
    chirp_time: Option<&Value>,
    n_chirps: Option<&Value>,
    n_tx: Option<&Value>,
) -> Option<(f64, f64)> {
    // NUM_TX gates these figures but never enters the formula. With TDM-MIMO
    // the effective chirp period is NUM_TX times longer than chirp_time.
    n_tx?;

    let start_freq_ghz = start_freq?.as_f64()?;
    let chirp_period = chirp_time?.as_f64()? * 1e-6;
    let wavelength = SPEED_OF_LIGHT / (start_freq_ghz * 1e9);
    let velocity_max = finite(wavelength / (4.0 * chirp_period))?;
    let velocity_res = finite(velocity_max / n_chirps?.as_f64()?)?;
    Some((velocity_max, velocity_res))
}

fn range(
    sample_rate: Option<f64>,
    chirp_slope: Option<f64>,
    n_samples: Option<&Value>,
) -> Option<(f64, f64)> {
    let sample_rate = sample_rate.filter(|&rate| rate != 0.0)?;
    let chirp_slope = chirp_slope.filter(|&slope| slope != 0.0)?;
    let n_samples = n_samples?.as_f64().filter(|&count| count != 0.0)?;

    let range_max = finite((sample_rate * SPEED_OF_LIGHT) / (2.0 * chirp_slope))?;
    let range_res = finite(range_max / n_samples)?;
    Some((range_max, range_res))
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn unzip<T>(pair: Option<(T, T)>) -> (Option<T>, Option<T>) {
    match pair {
        Some((a, b)) => (Some(a), Some(b)),
        None => (None, None),
    }
}
