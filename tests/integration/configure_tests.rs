//! Startup configuration: order, parameters, and fatal-stop behaviour.

use thermobuzz::app::events::{AppEvent, ConfigStep};
use thermobuzz::app::service::Controller;
use thermobuzz::config::{Attenuation, ClockSource, ControllerConfig, SpeedMode};
use thermobuzz::error::ConfigError;

use super::mock_hw::{ConfigCall, MockHardware, RecordingSink};

fn controller() -> Controller {
    Controller::new(ControllerConfig::default()).expect("default config is valid")
}

#[test]
fn configures_all_four_subsystems_in_order() {
    let ctl = controller();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();

    ctl.configure(&mut hw, &mut sink).unwrap();

    assert_eq!(hw.config_calls.len(), 5);
    assert_eq!(hw.config_calls[0], ConfigCall::DigitalOutputs(vec![4, 2]));
    assert_eq!(
        hw.config_calls[1],
        ConfigCall::AnalogInput {
            channel: 0,
            resolution_bits: 12,
            attenuation: Attenuation::Db12,
        }
    );
    assert_eq!(
        hw.config_calls[2],
        ConfigCall::AnalogInput {
            channel: 6,
            resolution_bits: 12,
            attenuation: Attenuation::Db12,
        }
    );

    let ConfigCall::PwmTimer(timer) = &hw.config_calls[3] else {
        panic!("expected PWM timer, got {:?}", hw.config_calls[3]);
    };
    assert_eq!(timer.speed_mode, SpeedMode::High);
    assert_eq!(timer.resolution_bits, 13);
    assert_eq!(timer.frequency_hz, 2000);
    assert_eq!(timer.timer_id, 0);
    assert_eq!(timer.clock_source, ClockSource::Auto);

    let ConfigCall::PwmChannel(channel) = &hw.config_calls[4] else {
        panic!("expected PWM channel, got {:?}", hw.config_calls[4]);
    };
    assert_eq!(channel.channel_id, 0);
    assert_eq!(channel.pin, 23);
    assert_eq!(channel.timer_id, 0);
    assert_eq!(channel.initial_duty, 0);
}

#[test]
fn emits_one_event_per_successful_step() {
    let ctl = controller();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();

    ctl.configure(&mut hw, &mut sink).unwrap();

    let steps: Vec<&str> = sink
        .events
        .iter()
        .map(|e| match e {
            AppEvent::Configured(step) => step.tag(),
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(steps, ["LED", "ADC_POT", "ADC_LM35", "TIMER_BUZ", "CHANNEL_BUZ"]);
}

#[test]
fn first_failure_stops_configuration() {
    let ctl = controller();
    let mut hw = MockHardware::new();
    hw.fail_at = Some((3, ConfigError::PwmTimer(259)));
    let mut sink = RecordingSink::default();

    let err = ctl.configure(&mut hw, &mut sink).unwrap_err();

    assert_eq!(err, ConfigError::PwmTimer(259));
    // Timer attempted, channel never touched.
    assert_eq!(hw.config_calls.len(), 4);
    assert!(!sink
        .events
        .contains(&AppEvent::Configured(ConfigStep::BuzzerTimer)));
    assert_eq!(sink.events.len(), 3);
}

#[test]
fn gpio_failure_is_reported_before_any_adc_setup() {
    let ctl = controller();
    let mut hw = MockHardware::new();
    hw.fail_at = Some((0, ConfigError::Gpio(-1)));
    let mut sink = RecordingSink::default();

    assert_eq!(ctl.configure(&mut hw, &mut sink), Err(ConfigError::Gpio(-1)));
    assert_eq!(hw.config_calls.len(), 1);
    assert!(sink.events.is_empty());
}

#[test]
fn invalid_config_never_reaches_hardware() {
    let config = ControllerConfig {
        sample_count: 0,
        ..ControllerConfig::default()
    };
    assert!(matches!(
        Controller::new(config),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn start_with_invalid_config_touches_no_peripheral() {
    let config = ControllerConfig {
        adc_resolution_bits: 9,
        ..ControllerConfig::default()
    };
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();

    let err = Controller::start(config, &mut hw, &mut sink).err();

    assert!(matches!(err, Some(ConfigError::Invalid(_))));
    assert!(hw.config_calls.is_empty());
    assert!(sink.events.is_empty());
}

#[test]
fn start_reports_peripheral_failure_like_invalid_config() {
    let mut hw = MockHardware::new();
    hw.fail_at = Some((1, ConfigError::Adc(263)));
    let mut sink = RecordingSink::default();

    let err = Controller::start(ControllerConfig::default(), &mut hw, &mut sink).err();

    assert_eq!(err, Some(ConfigError::Adc(263)));
    assert_eq!(hw.config_calls.len(), 2);
}

#[test]
fn start_returns_configured_controller() {
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();

    let ctl = Controller::start(ControllerConfig::default(), &mut hw, &mut sink).unwrap();

    assert_eq!(hw.config_calls.len(), 5);
    assert_eq!(ctl.cycle_count(), 0);
}
