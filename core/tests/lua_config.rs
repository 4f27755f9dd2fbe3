use proptest::prelude::*;
use xwrcore::capture::{CaptureSizing, DEFAULT_BUFFERED_FRAMES};
use xwrcore::{ConfigStore, Value};

/// Trimmed mmWave Studio capture script for an xWR1843 with a DCA1000.
const XWR1843_SCRIPT: &str = r#"
--[[
    Sequence being followed

    A. CONFIGURE RADAR
    B. CONFIGURE DATA CAPTURE
    C. START RADAR / DCA
--]]

-------- VERY IMPORTANT AND SERIOUS RADAR PARAMETERS -------- --
ADC_SAMPLES    = 256          -- per chirp
SAMPLE_RATE    = 10000        -- ksps
FREQ_SLOPE     = 29.982       -- MHz/us
START_FREQ     = 77           -- GHz
IDLE_TIME      = 100          -- us
RAMP_END_TIME  = 60           -- us
ADC_START_TIME = 6            -- us

NUM_TX         = 3
START_CHIRP_TX = 0
END_CHIRP_TX   = 2
CHIRP_LOOPS    = 128
NUM_FRAMES     = 0            -- 0 = infinite
PERIODICITY    = 100          -- ms
-------------------------------------------------------------- --

COM_PORT = 4
RADARSS_PATH = "C:\\ti\\mmwave_studio\\rf_eval_firmware\\radarss\\xwr18xx_radarss.bin"

ar1.FullReset()
ar1.SOPControl(2)
ar1.Connect(COM_PORT, 921600, 1000)

ar1.SelectChipVersion("AR1642")
ar1.SelectChipVersion("XWR1843")
ar1.DownloadBSSFw(RADARSS_PATH)

ar1.ChanNAdcConfig(1, 1, 1, 1, 1, 1, 1, 2, 1, 0)
ar1.LPModConfig(0, 0)
ar1.RfInit()
RSTD.Sleep(1000)

ar1.DataPathConfig(1, 1, 0)
ar1.LvdsClkConfig(1, 1)
ar1.LVDSLaneConfig(0, 1, 1, 0, 0, 1, 0, 0)

ar1.ProfileConfig(0, START_FREQ, IDLE_TIME, ADC_START_TIME, RAMP_END_TIME, 0, 0, 0, 0, 0, 0, FREQ_SLOPE, 0, ADC_SAMPLES, SAMPLE_RATE, 0, 0, 30)
ar1.ChirpConfig(0, 0, 0, 0, 0, 0, 0, 1, 0, 0)
ar1.ChirpConfig(1, 1, 0, 0, 0, 0, 0, 0, 1, 0)
ar1.ChirpConfig(2, 2, 0, 0, 0, 0, 0, 0, 0, 1)
ar1.FrameConfig(START_CHIRP_TX, END_CHIRP_TX, NUM_FRAMES, CHIRP_LOOPS, PERIODICITY, 0, 0, 1)

if (ar1.SelectCaptureDevice("DCA1000") == 0) then
    WriteToLog("SelectCaptureDevice Success\n", "green")
end

ar1.CaptureCardConfig_EthInit("192.168.33.30", "192.168.33.180", "12:34:56:78:90:12", 4096, 4098)
ar1.StartFrame();
"#;

#[test]
fn extracts_variables_in_script_order() {
    let store = ConfigStore::from_script(XWR1843_SCRIPT);
    let names: Vec<_> = store.variables().keys().collect();
    assert_eq!(names.first(), Some(&"ADC_SAMPLES"));
    assert_eq!(names.last(), Some(&"RADARSS_PATH"));
    assert_eq!(store.variable("FREQ_SLOPE"), Some(&Value::Float(29.982)));
    assert_eq!(
        store.variable("RADARSS_PATH"),
        Some(&Value::from(
            "C:\\\\ti\\\\mmwave_studio\\\\rf_eval_firmware\\\\radarss\\\\xwr18xx_radarss.bin"
        ))
    );
}

#[test]
fn call_arguments_resolve_against_earlier_variables() {
    let store = ConfigStore::from_script(XWR1843_SCRIPT);
    assert_eq!(store.call_count("ar1.ChirpConfig"), 3);
    assert_eq!(
        store.invocations("ar1.FrameConfig")[0][..5],
        [
            Value::Int(0),
            Value::Int(2),
            Value::Int(0),
            Value::Int(128),
            Value::Int(100)
        ]
    );
    assert_eq!(store.first_call_arg("ar1.Connect", 0), Some(&Value::Int(4)));
    assert_eq!(
        store.first_call_arg("ar1.CaptureCardConfig_EthInit", 0),
        Some(&Value::from("192.168.33.30"))
    );
}

#[test]
fn control_flow_and_trailing_semicolons_are_skipped() {
    let store = ConfigStore::from_script(XWR1843_SCRIPT);
    assert!(!store.has_call("ar1.SelectCaptureDevice"));
    assert!(!store.has_call("ar1.StartFrame"));
    assert!(store.has_call("RSTD.Sleep"));
}

#[test]
fn derives_capture_parameters() {
    let params = ConfigStore::from_script(XWR1843_SCRIPT).params();
    assert_eq!(params.platform.as_deref(), Some("xWR18xx"));
    assert_eq!(params.rx, Some([1, 1, 1, 1]));
    assert_eq!(params.n_rx, Some(4));
    assert_eq!(params.n_chirps, Some(Value::Int(384)));
    assert_eq!(params.frame_size, Some(Value::Int(256 * 4 * 384 * 4)));
    assert_eq!(params.chirp_time, Some(Value::Int(160)));
    assert!(params.velocity_max.is_some());
    assert!(params.range_res.is_some());

    let sizing = CaptureSizing::from_params(&params, DEFAULT_BUFFERED_FRAMES).unwrap();
    assert_eq!(sizing.buffer_capacity_bytes, 2 * 256 * 4 * 384 * 4);
}

#[test]
fn record_serializes_with_explicit_nulls() {
    let params = ConfigStore::from_script(XWR1843_SCRIPT).params();
    let json = serde_json::to_value(&params).unwrap();
    assert!(json["sdk"].is_null());
    assert!(json["tx"].is_null());
    assert_eq!(json["n_chirps"], serde_json::json!(384));
    assert_eq!(json["rx"], serde_json::json!([1, 1, 1, 1]));
}

proptest! {
    #[test]
    fn arbitrary_scripts_never_panic(lines in proptest::collection::vec("\\PC*", 0..32)) {
        let store = ConfigStore::from_lines(&lines);
        let first = store.params();
        prop_assert_eq!(first, store.params());
    }

    #[test]
    fn integer_assignment_round_trips(name in "[A-Z_][A-Z0-9_]{0,8}", value in any::<i64>()) {
        let store = ConfigStore::from_lines([format!("{} = {}", name, value)]);
        prop_assert_eq!(store.variable(&name), Some(&Value::Int(value)));
    }

    #[test]
    fn comment_lines_leave_store_empty(body in "\\PC*") {
        let store = ConfigStore::from_lines([format!("--{}", body)]);
        prop_assert!(store.variables().is_empty());
        prop_assert!(store.calls().is_empty());
    }
}
