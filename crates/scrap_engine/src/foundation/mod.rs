//! Foundation utilities shared by all engine systems

pub mod math;
pub mod time;
