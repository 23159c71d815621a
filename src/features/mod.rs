//! Feature implementations for flowtime.
//!
//! - Flowtime sessions: timing work and breaks
//! - Noise: colored background noise playback

pub mod flowtime;
pub mod noise;
