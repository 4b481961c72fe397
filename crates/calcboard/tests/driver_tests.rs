//! Scenario tests run against every front-end
//!
//! The direct calculator and the terminal app must agree on every display
//! line for the same input.

use calcboard::driver::{
    run_all_scenarios, verify_division_by_zero, verify_left_to_right_chaining,
};
use calcboard::prelude::*;

#[test]
fn test_all_scenarios_direct() {
    run_all_scenarios(&mut Calculator::new());
}

#[cfg(feature = "tui")]
mod tui {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_scenarios_tui() {
        run_all_scenarios(&mut TuiDriver::new());
    }

    #[test]
    fn test_scenarios_survive_resize() {
        let mut driver = TuiDriver::new();
        driver.app_mut().resize(32, 14);
        verify_left_to_right_chaining(&mut driver);
        verify_division_by_zero(&mut driver);
    }

    #[test]
    fn test_click_and_keyboard_agree() {
        let mut typed = TuiDriver::new();
        typed.press_keys("12.5*4=").unwrap();

        let mut clicked = CalculatorApp::new();
        for event in parse_key_sequence(["12.5*4="]).unwrap() {
            let index = clicked.keypad().find_by_event(event).unwrap();
            let rect = clicked
                .keypad()
                .button_rect(clicked.layout().keypad, index)
                .unwrap();
            assert_eq!(clicked.handle_click(rect.x + 1, rect.y), Some(event));
        }

        assert_eq!(clicked.display().current, "50");
        assert_eq!(typed.current_line(), "50");
    }

    fn event_strategy() -> impl Strategy<Value = InputEvent> {
        prop_oneof![
            prop::sample::select("0123456789.".chars().collect::<Vec<_>>())
                .prop_map(InputEvent::Append),
            prop::sample::select(Operation::ALL.to_vec()).prop_map(InputEvent::Choose),
            Just(InputEvent::Compute),
            Just(InputEvent::Delete),
            Just(InputEvent::Clear),
        ]
    }

    proptest! {
        /// Keyboard-driven app and direct calculator show the same lines
        #[test]
        fn prop_front_ends_agree(events in prop::collection::vec(event_strategy(), 0..40)) {
            let mut direct = Calculator::new();
            let mut tui = TuiDriver::new();
            for event in events {
                direct.press(event);
                tui.press(event);
                prop_assert_eq!(direct.previous_line(), tui.previous_line());
                prop_assert_eq!(direct.current_line(), tui.current_line());
            }
        }
    }
}
