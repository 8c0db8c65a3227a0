//! Gate motion
//!
//! A move is a fixed three-waypoint profile (closed, intermediate, target)
//! with a pause between waypoints. The actuator drives the servo through
//! the waypoints while it holds the servo lock.

pub mod profile;

pub use profile::{MotionProfile, MAX_TRAVEL_DEG};
