//! Fixed linear scales from raw ADC counts to engineering units.
//!
//! All arithmetic is unsigned integer with truncating division, in the exact
//! order shown on each function. Threshold decisions downstream depend on
//! where the truncation happens, so none of this may move to floating point.

/// Truncating mean of a sample burst. `count` must be non-zero.
pub const fn average(sum: u32, count: u32) -> u32 {
    sum / count
}

/// LM35 pipeline: averaged raw counts → millivolts → whole °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureScale {
    pub adc_full_scale: u32,
    pub reference_mv: u32,
    pub mv_per_celsius: u32,
}

impl Default for TemperatureScale {
    fn default() -> Self {
        Self {
            adc_full_scale: 4095,
            reference_mv: 3300,
            mv_per_celsius: 10,
        }
    }
}

impl TemperatureScale {
    /// `(avg_raw * reference_mv) / adc_full_scale`
    pub const fn to_millivolts(&self, avg_raw: u32) -> u32 {
        (avg_raw * self.reference_mv) / self.adc_full_scale
    }

    /// `to_millivolts(avg_raw) / mv_per_celsius`
    pub const fn to_celsius(&self, avg_raw: u32) -> i32 {
        (self.to_millivolts(avg_raw) / self.mv_per_celsius) as i32
    }
}

/// Potentiometer raw counts → LEDC duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyScale {
    pub adc_full_scale: u32,
    pub duty_full_scale: u32,
}

impl Default for DutyScale {
    fn default() -> Self {
        Self {
            adc_full_scale: 4095,
            duty_full_scale: 8191,
        }
    }
}

impl DutyScale {
    /// `(raw * duty_full_scale) / adc_full_scale`. Not clamped: the 12-bit
    /// ADC cannot produce a raw value above full scale.
    pub const fn to_duty(&self, raw: u16) -> u32 {
        (raw as u32 * self.duty_full_scale) / self.adc_full_scale
    }
}
