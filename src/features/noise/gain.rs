//! The shared volume stage.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::error::FlowtimeError;

/// Volume applied to every noise source.
///
/// Clones share the level, so the audio callback sees changes immediately.
/// The level is stored as `f32` bits in an atomic because device callbacks
/// run on the audio backend's own thread.
#[derive(Debug, Clone)]
pub struct GainStage {
    level: Arc<AtomicU32>,
}

impl GainStage {
    /// Create a gain stage at `level`, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(level: f32) -> Self {
        let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
        Self {
            level: Arc::new(AtomicU32::new(level.to_bits())),
        }
    }

    /// Current level in `[0, 1]`.
    #[must_use]
    pub fn level(&self) -> f32 {
        f32::from_bits(self.level.load(Ordering::Relaxed))
    }

    /// Set the level.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `level` is NaN or outside `[0, 1]`; the
    /// level is left unchanged.
    pub fn set_level(&self, level: f32) -> Result<(), FlowtimeError> {
        if !(0.0..=1.0).contains(&level) {
            return Err(FlowtimeError::InvalidInput(format!(
                "volume must be between 0 and 1, got {level}"
            )));
        }
        self.level.store(level.to_bits(), Ordering::Relaxed);
        Ok(())
    }

    /// Scale one sample by the current level.
    #[must_use]
    pub fn apply(&self, sample: f32) -> f32 {
        sample * self.level()
    }
}

impl Default for GainStage {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_level() {
        let gain = GainStage::new(0.5);
        let callback_side = gain.clone();
        gain.set_level(0.25).unwrap();
        assert!((callback_side.level() - 0.25).abs() < f32::EPSILON);
        assert!((callback_side.apply(0.8) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let gain = GainStage::new(0.3);
        assert!(gain.set_level(1.5).is_err());
        assert!(gain.set_level(-0.1).is_err());
        assert!(gain.set_level(f32::NAN).is_err());
        assert!((gain.level() - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_new_clamps() {
        assert!((GainStage::new(3.0).level() - 1.0).abs() < f32::EPSILON);
        assert!(GainStage::new(f32::NAN).level().abs() < f32::EPSILON);
    }
}
