//! Configuration extraction for TI xWR radar captures.
//!
//! An mmWave Studio Lua script is reduced to its variable bindings and method
//! invocations ([`lua::ConfigStore`]), from which a fixed set of capture
//! parameters is derived ([`params::ParameterRecord`]). The derived frame size
//! feeds the buffer sizing of the capture pipeline ([`capture`]).

pub mod capture;
pub mod lua;
pub mod params;
pub mod prelude;
pub mod telemetry;

pub use lua::ConfigStore;
pub use params::ParameterRecord;
pub use prelude::{CaptureError, CaptureResult, Value};
