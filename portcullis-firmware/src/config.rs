//! Build-time gate configuration
//!
//! `build.rs` parses and validates `gate.toml` and generates
//! `GATE_CONFIG`. An invalid file fails the build, so there is no runtime
//! configuration error path.

use portcullis_core::config::{GateConfig, ServoCalibration, TimingConfig};
use portcullis_core::motion::MotionProfile;

include!(concat!(env!("OUT_DIR"), "/gate_config.rs"));
