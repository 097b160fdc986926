use conversor::core::action::{Action, Effect, update};
use conversor::core::state::App;
use conversor::{
    Conversion, Mode, SpeedUnit, TempUnit, Unit, convert_speed, convert_temp, format_value,
    sanitize,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Types `text` into the source field one keystroke at a time, the way the
/// TUI does: append the character, hand the raw text to the reducer.
fn type_keys(app: &mut App, text: &str) {
    for c in text.chars() {
        let mut next = app.input().to_string();
        next.push(c);
        update(app, Action::EditInput(next));
    }
}

const SPEED_UNITS: [SpeedUnit; 2] = [SpeedUnit::Kmh, SpeedUnit::Mph];
const TEMP_UNITS: [TempUnit; 2] = [TempUnit::Celsius, TempUnit::Fahrenheit];

// ============================================================================
// Conversion Engine
// ============================================================================

#[test]
fn test_reference_values() {
    assert_eq!(convert_speed("80", SpeedUnit::Kmh, SpeedUnit::Mph), Some(50.0));
    assert_eq!(convert_speed("50", SpeedUnit::Mph, SpeedUnit::Kmh), Some(80.0));
    assert_eq!(convert_temp("25", TempUnit::Celsius, TempUnit::Fahrenheit), Some(77.0));
    assert_eq!(convert_temp("77", TempUnit::Fahrenheit, TempUnit::Celsius), Some(25.0));
}

#[test]
fn test_identity_speed_conversion_rounds_the_input() {
    for input in ["0", "7.5", "42.49", "999.99", ".5", "3."] {
        let expected = (input.parse::<f64>().unwrap() + 0.5).floor();
        for unit in SPEED_UNITS {
            assert_eq!(convert_speed(input, unit, unit), Some(expected), "{input}");
        }
    }
}

#[test]
fn test_unparseable_inputs_are_empty_for_every_pair() {
    for input in ["", ".", "abc", "1.2.3", "4..", "inf"] {
        for from in SPEED_UNITS {
            for to in SPEED_UNITS {
                assert_eq!(convert_speed(input, from, to), None, "{input}");
            }
        }
        for from in TEMP_UNITS {
            for to in TEMP_UNITS {
                assert_eq!(convert_temp(input, from, to), None, "{input}");
            }
        }
    }
}

#[test]
fn test_temperature_has_at_most_two_decimals() {
    for input in ["1", "33.3", "98.6", "451", "0.01", "12.345"] {
        for from in TEMP_UNITS {
            for to in TEMP_UNITS {
                let text = format_value(convert_temp(input, from, to).unwrap());
                let decimals = text.split('.').nth(1).map_or(0, str::len);
                assert!(decimals <= 2, "{input} {from:?}->{to:?} = {text}");
            }
        }
    }
}

#[test]
fn test_speed_results_are_whole_numbers() {
    for input in ["1", "33.3", "98.6", "451", "0.01"] {
        let text = format_value(convert_speed(input, SpeedUnit::Kmh, SpeedUnit::Mph).unwrap());
        assert!(!text.contains('.'), "{input} = {text}");
    }
}

#[test]
fn test_cli_unit_pairs() {
    let conversion = Conversion::from_units(
        Unit::Speed(SpeedUnit::Mph),
        Unit::Speed(SpeedUnit::Kmh),
    )
    .unwrap();
    assert_eq!(conversion.apply(&sanitize("50 mph")).map(format_value), Some("80".into()));

    assert!(
        Conversion::from_units(
            Unit::Temperature(TempUnit::Celsius),
            Unit::Speed(SpeedUnit::Mph)
        )
        .is_err()
    );
}

// ============================================================================
// Sanitizer
// ============================================================================

#[test]
fn test_sanitized_text_is_numeric_and_short() {
    let samples = [
        "hello",
        "12,5",
        "1e10",
        "-273.15",
        "3.14159265",
        "  88  ",
        "½ cup",
        "000000000",
    ];
    for raw in samples {
        let clean = sanitize(raw);
        assert!(clean.chars().count() <= 6, "{raw:?} -> {clean:?}");
        assert!(clean.chars().all(|c| c.is_ascii_digit() || c == '.'), "{raw:?} -> {clean:?}");
    }
}

// ============================================================================
// Controller
// ============================================================================

#[test]
fn test_typing_flow_speed() {
    let mut app = App::default();
    type_keys(&mut app, "8");
    assert_eq!(app.output(), "5");
    type_keys(&mut app, "0");
    assert_eq!(app.output(), "50");
    type_keys(&mut app, ".");
    assert_eq!(app.input(), "80.");
    assert_eq!(app.output(), "50");
    type_keys(&mut app, ".");
    assert_eq!(app.input(), "80..");
    assert_eq!(app.output(), "");
}

#[test]
fn test_typing_is_capped() {
    let mut app = App::new(Mode::Temperature);
    type_keys(&mut app, "12345678");
    assert_eq!(app.input(), "123456");
}

#[test]
fn test_swap_keeps_value_and_reconverts() {
    let mut app = App::new(Mode::Temperature);
    type_keys(&mut app, "77");
    assert_eq!(app.output(), "170.6");

    let effect = update(&mut app, Action::ToggleDirection);
    assert_eq!(effect, Effect::Rotate { reversed: true });
    assert_eq!(app.input(), "77");
    assert_eq!(app.output(), "25");
    assert_eq!(app.conversion().source_label(), "Fahrenheit");
}

#[test]
fn test_direction_round_trip_for_both_modes() {
    for mode in [Mode::Speed, Mode::Temperature] {
        let mut app = App::new(mode);
        let original = app.conversion();
        update(&mut app, Action::ToggleDirection);
        assert_ne!(app.conversion(), original);
        update(&mut app, Action::ToggleDirection);
        assert_eq!(app.conversion(), original);
    }
}

#[test]
fn test_mode_switch_always_resets() {
    let mut app = App::default();
    for (text, mode) in [
        ("120", Mode::Temperature),
        ("36.6", Mode::Speed),
        ("abc", Mode::Temperature),
    ] {
        type_keys(&mut app, text);
        update(&mut app, Action::SelectMode(mode));
        assert_eq!(app.mode, mode);
        assert_eq!(app.input(), "");
        assert_eq!(app.output(), "");
    }
}

#[test]
fn test_output_is_a_function_of_visible_state() {
    let mut first = App::default();
    type_keys(&mut first, "65");
    update(&mut first, Action::ToggleDirection);

    let mut second = App::default();
    update(&mut second, Action::ToggleDirection);
    type_keys(&mut second, "65");

    assert_eq!(first.conversion(), second.conversion());
    assert_eq!(first.input(), second.input());
    assert_eq!(first.output(), second.output());
    assert_eq!(first.output(), "105");
}
