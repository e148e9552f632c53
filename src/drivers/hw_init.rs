//! One-shot peripheral configuration and raw register access.
//!
//! Wraps the ESP-IDF `gpio`, `adc_oneshot` and `ledc` C APIs. Configuration
//! runs once from `main()` before the control loop; the read/write helpers
//! are only called from the loop afterwards, so every `static mut` below
//! has a single writer and no concurrent reader.
//!
//! On host targets each function is a simulation stub backed by atomics,
//! so the hardware adapter can be exercised in tests.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::config::ClockSource;
use crate::config::{Attenuation, PwmChannelConfig, PwmTimerConfig, SpeedMode};
use crate::error::ConfigError;

// ── GPIO outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn configure_outputs(pins: &[i32]) -> Result<(), ConfigError> {
    let mut mask = 0u64;
    for &pin in pins {
        // SAFETY: init path only; pin numbers come from a validated config.
        let ret = unsafe { gpio_reset_pin(pin) };
        if ret != ESP_OK as i32 { return Err(ConfigError::Gpio(ret)); }
        mask |= 1u64 << pin;
    }

    let cfg = gpio_config_t {
        pin_bit_mask: mask,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: cfg outlives the call; single-threaded init.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(ConfigError::Gpio(ret)); }

    for &pin in pins {
        unsafe { gpio_set_level(pin, 0) };
    }
    info!("hw_init: GPIO outputs configured (mask=0x{:x})", mask);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_outputs(pins: &[i32]) -> Result<(), ConfigError> {
    for &pin in pins {
        sim::write_gpio(pin, false);
    }
    log::info!("hw_init(sim): GPIO outputs {:?}", pins);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: pin was configured as an output in configure_outputs();
    // main-loop only.
    unsafe { gpio_set_level(pin, u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) {
    sim::write_gpio(pin, high);
}

// ── ADC1 (oneshot) ────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

/// Create the ADC1 unit on first use; later channels reuse it.
#[cfg(target_os = "espidf")]
unsafe fn ensure_adc1_unit() -> Result<(), ConfigError> {
    if !unsafe { adc1_handle() }.is_null() {
        return Ok(());
    }
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(ConfigError::Adc(ret)); }
    info!("hw_init: ADC1 unit created");
    Ok(())
}

#[cfg(target_os = "espidf")]
fn atten_bits(attenuation: Attenuation) -> adc_atten_t {
    match attenuation {
        Attenuation::Db0 => adc_atten_t_ADC_ATTEN_DB_0,
        Attenuation::Db2_5 => adc_atten_t_ADC_ATTEN_DB_2_5,
        Attenuation::Db6 => adc_atten_t_ADC_ATTEN_DB_6,
        Attenuation::Db12 => adc_atten_t_ADC_ATTEN_DB_12,
    }
}

#[cfg(target_os = "espidf")]
pub fn configure_adc_channel(
    channel: u32,
    resolution_bits: u8,
    attenuation: Attenuation,
) -> Result<(), ConfigError> {
    // SAFETY: init path only.
    unsafe { ensure_adc1_unit()?; }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: atten_bits(attenuation),
        // adc_bitwidth_t values 9..=13 are the bit counts themselves.
        bitwidth: adc_bitwidth_t::from(resolution_bits),
    };
    let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel as adc_channel_t, &chan_cfg) };
    if ret != ESP_OK as i32 { return Err(ConfigError::Adc(ret)); }

    info!("hw_init: ADC1 CH{} configured ({}-bit, {:?})", channel, resolution_bits, attenuation);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_adc_channel(
    channel: u32,
    resolution_bits: u8,
    attenuation: Attenuation,
) -> Result<(), ConfigError> {
    log::info!(
        "hw_init(sim): ADC1 CH{} ({}-bit, {:?})",
        channel, resolution_bits, attenuation
    );
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel as adc_channel_t, &mut raw) };
    if ret != ESP_OK as i32 {
        return 0;
    }
    raw.max(0) as u16
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(channel: u32) -> u16 {
    sim::read_adc(channel)
}

// ── LEDC PWM ─────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn ledc_mode(mode: SpeedMode) -> ledc_mode_t {
    match mode {
        #[cfg(esp32)]
        SpeedMode::High => ledc_mode_t_LEDC_HIGH_SPEED_MODE,
        #[cfg(not(esp32))]
        SpeedMode::High => ledc_mode_t_LEDC_LOW_SPEED_MODE,
        SpeedMode::Low => ledc_mode_t_LEDC_LOW_SPEED_MODE,
    }
}

#[cfg(target_os = "espidf")]
pub fn configure_ledc_timer(timer: &PwmTimerConfig) -> Result<(), ConfigError> {
    let clk_cfg = match timer.clock_source {
        ClockSource::Auto => soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ClockSource::Apb => soc_periph_ledc_clk_src_legacy_t_LEDC_USE_APB_CLK,
    };
    let cfg = ledc_timer_config_t {
        speed_mode: ledc_mode(timer.speed_mode),
        timer_num: timer.timer_id as ledc_timer_t,
        // ledc_timer_bit_t values are the bit counts themselves.
        duty_resolution: ledc_timer_bit_t::from(timer.resolution_bits),
        freq_hz: timer.frequency_hz,
        clk_cfg,
        ..Default::default()
    };
    // SAFETY: Called from single main-task context before the loop.
    let ret = unsafe { ledc_timer_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(ConfigError::PwmTimer(ret)); }

    info!(
        "hw_init: LEDC timer {} configured ({} Hz, {}-bit)",
        timer.timer_id, timer.frequency_hz, timer.resolution_bits
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_ledc_timer(timer: &PwmTimerConfig) -> Result<(), ConfigError> {
    log::info!(
        "hw_init(sim): LEDC timer {} ({} Hz, {}-bit, {:?}, {:?} clock)",
        timer.timer_id, timer.frequency_hz, timer.resolution_bits, timer.speed_mode, timer.clock_source
    );
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn configure_ledc_channel(channel: &PwmChannelConfig) -> Result<(), ConfigError> {
    let cfg = ledc_channel_config_t {
        speed_mode: ledc_mode(channel.speed_mode),
        channel: channel.channel_id as ledc_channel_t,
        timer_sel: channel.timer_id as ledc_timer_t,
        intr_type: ledc_intr_type_t_LEDC_INTR_DISABLE,
        gpio_num: channel.pin,
        duty: channel.initial_duty,
        hpoint: 0,
        ..Default::default()
    };
    // SAFETY: Called from single main-task context before the loop.
    let ret = unsafe { ledc_channel_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(ConfigError::PwmChannel(ret)); }

    info!(
        "hw_init: LEDC CH{} -> GPIO{} (timer {})",
        channel.channel_id, channel.pin, channel.timer_id
    );
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_ledc_channel(channel: &PwmChannelConfig) -> Result<(), ConfigError> {
    sim::write_duty(channel.initial_duty);
    log::info!(
        "hw_init(sim): LEDC CH{} -> GPIO{} (timer {})",
        channel.channel_id, channel.pin, channel.timer_id
    );
    Ok(())
}

/// Set and commit a duty value on a configured channel.
#[cfg(target_os = "espidf")]
pub fn ledc_set(mode: SpeedMode, channel: u32, duty: u32) {
    // SAFETY: the channel was configured in configure_ledc_channel();
    // duty register writes are race-free since only main loop calls this.
    unsafe {
        ledc_set_duty(ledc_mode(mode), channel as ledc_channel_t, duty);
        ledc_update_duty(ledc_mode(mode), channel as ledc_channel_t);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_mode: SpeedMode, _channel: u32, duty: u32) {
    sim::write_duty(duty);
}

// ── Host simulation state ─────────────────────────────────────

/// In-memory peripheral state used on non-ESP targets.
#[cfg(not(target_os = "espidf"))]
pub mod sim {
    use core::sync::atomic::{AtomicU16, AtomicU32, AtomicU64, Ordering};

    const ADC1_CHANNELS: usize = 10;

    static ADC: [AtomicU16; ADC1_CHANNELS] = [const { AtomicU16::new(0) }; ADC1_CHANNELS];
    static GPIO_LEVELS: AtomicU64 = AtomicU64::new(0);
    static DUTY: AtomicU32 = AtomicU32::new(0);

    /// Inject the value every subsequent read of `channel` returns.
    pub fn set_adc(channel: u32, raw: u16) {
        if let Some(slot) = ADC.get(channel as usize) {
            slot.store(raw, Ordering::Relaxed);
        }
    }

    pub(super) fn read_adc(channel: u32) -> u16 {
        ADC.get(channel as usize)
            .map_or(0, |slot| slot.load(Ordering::Relaxed))
    }

    pub(super) fn write_gpio(pin: i32, high: bool) {
        let bit = 1u64 << pin;
        if high {
            GPIO_LEVELS.fetch_or(bit, Ordering::Relaxed);
        } else {
            GPIO_LEVELS.fetch_and(!bit, Ordering::Relaxed);
        }
    }

    pub fn gpio_level(pin: i32) -> bool {
        GPIO_LEVELS.load(Ordering::Relaxed) & (1u64 << pin) != 0
    }

    pub(super) fn write_duty(duty: u32) {
        DUTY.store(duty, Ordering::Relaxed);
    }

    /// Last duty committed to the buzzer channel.
    pub fn duty() -> u32 {
        DUTY.load(Ordering::Relaxed)
    }
}
