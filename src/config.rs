use crate::constants::{
    DEFAULT_INITIAL_QUALITY, DEFAULT_MAX_SIZE_KIB, DEFAULT_MIN_QUALITY, DEFAULT_QUALITY_STEP,
    MAX_QUALITY, MIN_QUALITY,
};
use crate::error::{CompressionError, Result};

/// Tuning for one compression call. Passed explicitly everywhere so
/// per-call overrides and tests never depend on process-wide state.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Inclusive ceiling for the encoded output, in binary kilobytes.
    pub max_size_kib: u32,
    /// Floor of the quality search.
    pub min_quality: u8,
    /// Starting quality of the search.
    pub initial_quality: u8,
    /// Decrement applied after each pass that misses the ceiling.
    pub quality_step: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_size_kib: DEFAULT_MAX_SIZE_KIB,
            min_quality: DEFAULT_MIN_QUALITY,
            initial_quality: DEFAULT_INITIAL_QUALITY,
            quality_step: DEFAULT_QUALITY_STEP,
        }
    }
}

impl Settings {
    pub fn new(
        max_size_kib: Option<u32>,
        min_quality: Option<u8>,
        initial_quality: Option<u8>,
        quality_step: Option<u8>,
    ) -> Result<Self> {
        let settings = Settings {
            max_size_kib: max_size_kib.unwrap_or(DEFAULT_MAX_SIZE_KIB),
            min_quality: min_quality.unwrap_or(DEFAULT_MIN_QUALITY),
            initial_quality: initial_quality.unwrap_or(DEFAULT_INITIAL_QUALITY),
            quality_step: quality_step.unwrap_or(DEFAULT_QUALITY_STEP),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        for quality in [self.min_quality, self.initial_quality] {
            if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
                return Err(CompressionError::InvalidQuality(quality));
            }
        }
        if self.min_quality > self.initial_quality {
            return Err(CompressionError::QualityRangeInverted {
                floor: self.min_quality,
                initial: self.initial_quality,
            });
        }
        if self.quality_step == 0 {
            return Err(CompressionError::ZeroQualityStep);
        }
        Ok(())
    }

    /// Upper bound on encode passes the search can make: the schedule is
    /// `initial, initial - step, ...` truncated at the floor.
    pub fn max_passes(&self) -> u32 {
        u32::from((self.initial_quality - self.min_quality) / self.quality_step) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::new(None, None, None, None).unwrap();
        assert_eq!(settings.max_size_kib, 480);
        assert_eq!(settings.min_quality, 10);
        assert_eq!(settings.initial_quality, 100);
        assert_eq!(settings.quality_step, 5);
    }

    #[test]
    fn test_settings_overrides() {
        let settings = Settings::new(Some(64), Some(20), Some(90), Some(10)).unwrap();
        assert_eq!(settings.max_size_kib, 64);
        assert_eq!(settings.min_quality, 20);
        assert_eq!(settings.initial_quality, 90);
        assert_eq!(settings.quality_step, 10);
    }

    #[test]
    fn test_settings_invalid_quality() {
        let result = Settings::new(None, Some(0), None, None);
        assert!(matches!(result, Err(CompressionError::InvalidQuality(0))));

        let result = Settings::new(None, None, Some(101), None);
        assert!(matches!(result, Err(CompressionError::InvalidQuality(101))));
    }

    #[test]
    fn test_settings_inverted_range() {
        let result = Settings::new(None, Some(90), Some(50), None);
        assert!(matches!(
            result,
            Err(CompressionError::QualityRangeInverted {
                floor: 90,
                initial: 50
            })
        ));
    }

    #[test]
    fn test_settings_zero_step() {
        let result = Settings::new(None, None, None, Some(0));
        assert!(matches!(result, Err(CompressionError::ZeroQualityStep)));
    }

    #[test]
    fn test_max_passes_default_schedule() {
        // 100, 95, ..., 10 is 19 levels.
        assert_eq!(Settings::default().max_passes(), 19);
    }

    #[test]
    fn test_max_passes_single_level() {
        let settings = Settings::new(None, Some(80), Some(80), Some(5)).unwrap();
        assert_eq!(settings.max_passes(), 1);
    }

    #[test]
    fn test_max_passes_step_overshoots_floor() {
        // 90, 50; the next step would land below the floor of 30.
        let settings = Settings::new(None, Some(30), Some(90), Some(40)).unwrap();
        assert_eq!(settings.max_passes(), 2);
    }
}
