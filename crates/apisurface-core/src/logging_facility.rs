//! Structured logging facility for apisurface
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Only operation boundaries (snapshot writer, CLI commands) emit start/end
//! events. Extraction logs at `debug` and `trace` only.
//!
//! # Usage
//!
//! ```rust
//! use apisurface_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
