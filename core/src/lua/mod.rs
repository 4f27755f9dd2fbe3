//! Extraction of variables and method calls from mmWave Studio Lua scripts.
//!
//! Only two statement shapes are understood: upper-case variable assignments
//! and `object.method(args)` invocations. Anything else is skipped.

pub mod classify;
pub mod resolve;
pub mod store;
pub mod table;

pub use classify::{classify, LineKind};
pub use resolve::resolve;
pub use store::{CallArgs, ConfigStore};
pub use table::OrderedTable;
