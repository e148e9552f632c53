//! Control loop: temperature → indicators → potentiometer → duty → delay.

use thermobuzz::app::events::AppEvent;
use thermobuzz::app::ports::Indicator;
use thermobuzz::app::service::Controller;
use thermobuzz::config::ControllerConfig;
use thermobuzz::control::policy::IndicatorState;

use super::mock_hw::{ActuatorCall, MockDelay, MockHardware, RecordingSink};

const TEMP_CH: u32 = 6;
const POT_CH: u32 = 0;

/// Smallest averaged raw value per whole °C around the threshold.
const RAW_16C: u16 = 199;
const RAW_17C: u16 = 211;
const RAW_18C: u16 = 224;

fn setup() -> (Controller, MockHardware, RecordingSink) {
    let ctl = Controller::new(ControllerConfig::default()).unwrap();
    (ctl, MockHardware::new(), RecordingSink::default())
}

#[test]
fn end_to_end_hot_scenario() {
    let (mut ctl, mut hw, mut sink) = setup();
    hw.set_constant(TEMP_CH, 1500);
    hw.set_constant(POT_CH, 2048);

    let report = ctl.tick(&mut hw, &mut sink);

    assert_eq!(report.temperature.avg_raw, 1500);
    assert_eq!(report.temperature.millivolts, 1208);
    assert_eq!(report.temperature.celsius, 120);
    assert_eq!(report.indicators, Some(IndicatorState::HOT));
    assert_eq!(report.duty, 4096);

    assert_eq!(hw.indicator(Indicator::Hot), Some(true));
    assert_eq!(hw.indicator(Indicator::Cold), Some(false));
    assert_eq!(hw.last_duty(), Some(4096));
    assert!(ctl.indicators().unwrap().buzzer);
}

#[test]
fn iteration_order_and_sample_counts() {
    let (mut ctl, mut hw, mut sink) = setup();
    hw.set_constant(TEMP_CH, 100);
    hw.set_constant(POT_CH, 4095);

    ctl.tick(&mut hw, &mut sink);

    assert_eq!(hw.reads_on(TEMP_CH), 80);
    assert_eq!(hw.reads_on(POT_CH), 1);
    assert_eq!(
        hw.calls,
        vec![
            ActuatorCall::Indicator { indicator: Indicator::Cold, on: true },
            ActuatorCall::Indicator { indicator: Indicator::Hot, on: false },
            ActuatorCall::Duty(8191),
        ]
    );
    assert_eq!(
        sink.events,
        vec![
            AppEvent::Temperature(8),
            AppEvent::IndicatorsChanged(IndicatorState::COLD),
            AppEvent::DutyWritten(8191),
        ]
    );
}

#[test]
fn above_threshold_turns_hot_on() {
    let (mut ctl, mut hw, mut sink) = setup();
    hw.set_constant(TEMP_CH, RAW_18C);

    let report = ctl.tick(&mut hw, &mut sink);

    assert_eq!(report.temperature.celsius, 18);
    assert_eq!(
        ctl.indicators(),
        Some(IndicatorState { cold: false, hot: true, buzzer: true })
    );
}

#[test]
fn below_threshold_turns_cold_on() {
    let (mut ctl, mut hw, mut sink) = setup();
    hw.set_constant(TEMP_CH, RAW_16C);

    let report = ctl.tick(&mut hw, &mut sink);

    assert_eq!(report.temperature.celsius, 16);
    assert_eq!(
        ctl.indicators(),
        Some(IndicatorState { cold: true, hot: false, buzzer: false })
    );
}

#[test]
fn equal_threshold_leaves_outputs_untouched() {
    let (mut ctl, mut hw, mut sink) = setup();

    // Known gap: exactly 17 °C writes nothing, whatever came before.
    hw.set_constant(TEMP_CH, RAW_17C);
    let report = ctl.tick(&mut hw, &mut sink);
    assert_eq!(report.temperature.celsius, 17);
    assert_eq!(report.indicators, None);
    assert_eq!(ctl.indicators(), None);
    assert_eq!(hw.indicator(Indicator::Hot), None);
    assert_eq!(hw.indicator(Indicator::Cold), None);

    hw.set_constant(TEMP_CH, RAW_18C);
    ctl.tick(&mut hw, &mut sink);
    hw.clear_calls();

    hw.set_constant(TEMP_CH, RAW_17C);
    ctl.tick(&mut hw, &mut sink);
    assert_eq!(ctl.indicators(), Some(IndicatorState::HOT));
    assert!(hw
        .calls
        .iter()
        .all(|c| matches!(c, ActuatorCall::Duty(_))));
}

#[test]
fn duty_written_every_iteration_even_on_threshold() {
    let (mut ctl, mut hw, mut sink) = setup();
    hw.set_constant(TEMP_CH, RAW_17C);
    hw.script(POT_CH, [0, 4095, 1]);

    let duties: Vec<u32> = (0..3).map(|_| ctl.tick(&mut hw, &mut sink).duty).collect();

    assert_eq!(duties, [0, 8191, 2]);
    assert_eq!(ctl.cycle_count(), 3);
}

#[test]
fn indicator_change_event_only_on_transition() {
    let (mut ctl, mut hw, mut sink) = setup();
    hw.set_constant(TEMP_CH, RAW_18C);
    ctl.tick(&mut hw, &mut sink);
    ctl.tick(&mut hw, &mut sink);
    hw.set_constant(TEMP_CH, RAW_16C);
    ctl.tick(&mut hw, &mut sink);

    let changes: Vec<IndicatorState> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::IndicatorsChanged(s) => Some(*s),
            _ => None,
        })
        .collect();
    assert_eq!(changes, [IndicatorState::HOT, IndicatorState::COLD]);
    assert_eq!(sink.temperatures(), [18, 18, 16]);
}

#[test]
fn burst_average_truncates() {
    let (mut ctl, mut hw, mut sink) = setup();
    // 79 samples of 225 and one of 224: sum = 17_999 -> 224 (18 °C)
    hw.script(TEMP_CH, std::iter::repeat_n(225, 79));
    hw.script(TEMP_CH, [224]);

    let report = ctl.tick(&mut hw, &mut sink);

    assert_eq!(report.temperature.avg_raw, 224);
    assert_eq!(report.temperature.celsius, 18);
}

#[test]
fn step_sleeps_fixed_interval_after_tick() {
    let (mut ctl, mut hw, mut sink) = setup();
    let mut delay = MockDelay::default();

    for _ in 0..3 {
        ctl.step(&mut hw, &mut sink, &mut delay);
    }

    assert_eq!(delay.delays_ms, [800, 800, 800]);
    assert_eq!(ctl.cycle_count(), 3);
}

#[test]
fn custom_threshold_and_interval() {
    let config = ControllerConfig {
        threshold_celsius: 100,
        loop_interval_ms: 50,
        ..ControllerConfig::default()
    };
    let mut ctl = Controller::new(config).unwrap();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::default();
    let mut delay = MockDelay::default();
    hw.set_constant(TEMP_CH, 1500);

    let report = ctl.step(&mut hw, &mut sink, &mut delay);

    assert_eq!(report.indicators, Some(IndicatorState::HOT));
    assert_eq!(delay.delays_ms, [50]);
}
