use base::Vec2;
use gesture::{
    Action, FrameInput, Gesture, GestureConfig, GestureKind, Indicator, InteractionState,
    KeypointFrame, Mode, ScreenMapping, ScrollDirection, step,
};

const BASE_Y: f32 = 400.0;
const UP: f32 = 300.0;
const DOWN: f32 = 450.0;

// power-of-two sizes keep the mapping exact: screen = (512 - kx, ky)
fn mapping() -> ScreenMapping {
    ScreenMapping::new(Vec2::new(512.0, 512.0), Vec2::new(512.0, 512.0)).unwrap()
}

// other tips in order thumb, middle, ring, pinky
fn hand(index_tip: Vec2<f32>, others: [f32; 4]) -> KeypointFrame {
    let mut points = [Vec2::new(320.0f32, BASE_Y); 21];
    for (tip, y) in [4, 12, 16, 20].into_iter().zip(others) {
        points[tip] = Vec2::new(320.0, y);
    }
    points[8] = index_tip;
    KeypointFrame::new(points)
}

// index tip placed so that it lands on `screen`; screen.y must stay above BASE_Y
fn pointing_at(screen: Vec2<f32>) -> KeypointFrame {
    hand(Vec2::new(512.0 - screen.x, screen.y), [DOWN, DOWN, DOWN, DOWN])
}

fn grabbing_at(screen: Vec2<f32>) -> KeypointFrame {
    hand(Vec2::new(512.0 - screen.x, screen.y), [UP, UP, DOWN, DOWN])
}

fn open_hand() -> KeypointFrame {
    hand(Vec2::new(320.0, 100.0), [UP, UP, UP, UP])
}

fn run(
    config: &GestureConfig,
    state: InteractionState,
    frame: Option<&KeypointFrame>,
    now_ms: u64,
) -> (InteractionState, gesture::FrameOutcome) {
    step(
        config,
        state,
        FrameInput {
            hand: frame,
            now_ms,
            mapping: mapping(),
        },
    )
}

#[test]
fn test_no_hand_leaves_state_untouched() {
    let config = GestureConfig::default();
    let state = InteractionState {
        mode: Mode::Scroll,
        last_position: Vec2::new(10.0, 20.0),
        last_action_ms: Some(5),
    };
    let (next, outcome) = run(&config, state, None, 10_000);
    assert_eq!(next, state);
    assert_eq!(outcome.pointer, None);
    assert_eq!(outcome.action, None);
    assert_eq!(outcome.gesture, Gesture::None);
    assert_eq!(outcome.indicator, Indicator::Idle);
    assert_eq!(outcome.mode, Mode::Scroll);
}

#[test]
fn test_full_hand_toggles_mode_with_cooldown() {
    let config = GestureConfig::default();
    let frame = open_hand();

    let (state, outcome) = run(&config, InteractionState::new(), Some(&frame), 10_000);
    assert_eq!(outcome.action, Some(Action::ModeSwitch { to: Mode::Scroll }));
    assert_eq!(state.mode, Mode::Scroll);
    assert_eq!(state.last_action_ms, Some(10_000));

    // exactly 1000 ms later is still inside the cooldown
    let (state, outcome) = run(&config, state, Some(&frame), 11_000);
    assert_eq!(outcome.action, None);
    assert_eq!(outcome.gesture, Gesture::FullHand);
    assert_eq!(state.mode, Mode::Scroll);

    let (state, outcome) = run(&config, state, Some(&frame), 11_001);
    assert_eq!(outcome.action, Some(Action::ModeSwitch { to: Mode::Cursor }));
    assert_eq!(state.mode, Mode::Cursor);
}

#[test]
fn test_mode_toggles_at_most_once_per_window() {
    let config = GestureConfig::default();
    let frame = open_hand();
    let mut state = InteractionState::new();
    let mut toggles = 0;
    for now in (10_000..11_000).step_by(16) {
        let (next, outcome) = run(&config, state, Some(&frame), now);
        if matches!(outcome.action, Some(Action::ModeSwitch { .. })) {
            toggles += 1;
        }
        state = next;
    }
    assert_eq!(toggles, 1);
    assert_eq!(state.mode, Mode::Scroll);
}

#[test]
fn test_point_move_beyond_threshold_clicks() {
    let config = GestureConfig::default();
    let frame = pointing_at(Vec2::new(51.0, 0.0));
    let (state, outcome) = run(&config, InteractionState::new(), Some(&frame), 10_000);

    assert_eq!(outcome.gesture, Gesture::Point);
    assert_eq!(outcome.action, Some(Action::Click { at: Vec2::new(51.0, 0.0) }));
    assert_eq!(state.last_action_ms, Some(10_000));
    assert_eq!(state.last_position, Vec2::new(51.0, 0.0));
    assert_eq!(outcome.indicator, Indicator::Pointing);

    let action = outcome.action.unwrap();
    assert_eq!(action.kind(), GestureKind::Click);
    assert_eq!(action.description(), "clicked_at_51,0");
}

#[test]
fn test_two_clicks_51px_apart_and_over_500ms() {
    let config = GestureConfig::default();
    let first = pointing_at(Vec2::new(51.0, 0.0));
    let second = pointing_at(Vec2::new(102.0, 0.0));

    let (state, outcome) = run(&config, InteractionState::new(), Some(&first), 10_000);
    assert!(matches!(outcome.action, Some(Action::Click { .. })));

    let (state, outcome) = run(&config, state, Some(&second), 10_501);
    assert_eq!(outcome.action, Some(Action::Click { at: Vec2::new(102.0, 0.0) }));
    assert_eq!(state.last_action_ms, Some(10_501));
}

#[test]
fn test_displacement_at_threshold_does_not_click() {
    let config = GestureConfig::default();
    let frame = pointing_at(Vec2::new(30.0, 40.0));
    let (state, outcome) = run(&config, InteractionState::new(), Some(&frame), 10_000);
    assert_eq!(outcome.action, None);
    assert_eq!(outcome.pointer, Some(Vec2::new(30.0, 40.0)));
    assert_eq!(state.last_position, Vec2::new(30.0, 40.0));
    assert_eq!(state.last_action_ms, None);
}

#[test]
fn test_click_cooldown() {
    let config = GestureConfig::default();
    let (state, outcome) = run(
        &config,
        InteractionState::new(),
        Some(&pointing_at(Vec2::new(100.0, 0.0))),
        10_000,
    );
    assert!(outcome.action.is_some());

    let (state, outcome) = run(&config, state, Some(&pointing_at(Vec2::new(300.0, 0.0))), 10_400);
    assert_eq!(outcome.action, None);
    // position still tracked while cooling down
    assert_eq!(state.last_position, Vec2::new(300.0, 0.0));
    assert_eq!(state.last_action_ms, Some(10_000));
}

#[test]
fn test_mode_switch_delays_next_click() {
    let config = GestureConfig::default();
    let (state, _) = run(&config, InteractionState::new(), Some(&open_hand()), 10_000);
    let (state, _) = run(&config, state, Some(&open_hand()), 11_500);
    assert_eq!(state.mode, Mode::Cursor);

    // 300 ms after the switch: shared cooldown blocks the click
    let (_, outcome) = run(&config, state, Some(&pointing_at(Vec2::new(450.0, 350.0))), 11_800);
    assert_eq!(outcome.action, None);
}

#[test]
fn test_grab_scrolls_in_scroll_mode() {
    let config = GestureConfig::default();
    let state = InteractionState {
        mode: Mode::Scroll,
        last_position: Vec2::new(200.0, 100.0),
        last_action_ms: Some(0),
    };

    let (state, outcome) = run(&config, state, Some(&grabbing_at(Vec2::new(200.0, 150.0))), 10_000);
    assert_eq!(outcome.gesture, Gesture::Grab);
    assert_eq!(outcome.indicator, Indicator::Grabbing);
    assert_eq!(
        outcome.action,
        Some(Action::Scroll {
            dy: 50.0,
            direction: ScrollDirection::Down
        })
    );
    assert_eq!(outcome.action.unwrap().description(), "scrolled_down");

    // next frame, no cooldown, moving back up
    let (_, outcome) = run(&config, state, Some(&grabbing_at(Vec2::new(200.0, 120.0))), 10_001);
    assert_eq!(
        outcome.action,
        Some(Action::Scroll {
            dy: -30.0,
            direction: ScrollDirection::Up
        })
    );
}

#[test]
fn test_zero_scroll_is_labelled_up() {
    assert_eq!(ScrollDirection::from_dy(0.0), ScrollDirection::Up);
    assert_eq!(ScrollDirection::from_dy(-0.5), ScrollDirection::Up);
    assert_eq!(ScrollDirection::from_dy(0.5), ScrollDirection::Down);
}

#[test]
fn test_grab_in_cursor_mode_does_nothing() {
    let config = GestureConfig::default();
    let (state, outcome) = run(
        &config,
        InteractionState::new(),
        Some(&grabbing_at(Vec2::new(200.0, 250.0))),
        10_000,
    );
    assert_eq!(outcome.action, None);
    assert_eq!(outcome.gesture, Gesture::None);
    assert_eq!(outcome.indicator, Indicator::Grabbing);
    assert_eq!(state.last_position, Vec2::new(200.0, 250.0));
}

#[test]
fn test_point_in_scroll_mode_only_moves_pointer() {
    let config = GestureConfig::default();
    let state = InteractionState {
        mode: Mode::Scroll,
        ..InteractionState::new()
    };
    let (state, outcome) = run(&config, state, Some(&pointing_at(Vec2::new(400.0, 200.0))), 10_000);
    assert_eq!(outcome.action, None);
    assert_eq!(outcome.pointer, Some(Vec2::new(400.0, 200.0)));
    assert_eq!(state.last_position, Vec2::new(400.0, 200.0));
}

#[test]
fn test_descriptions() {
    assert_eq!(
        Action::ModeSwitch { to: Mode::Scroll }.description(),
        "switched_to_scroll_mode"
    );
    assert_eq!(
        Action::ModeSwitch { to: Mode::Cursor }.description(),
        "switched_to_cursor_mode"
    );
    assert_eq!(
        Action::Click {
            at: Vec2::new(10.5, 3.4)
        }
        .description(),
        "clicked_at_11,3"
    );
    assert_eq!(GestureKind::ModeSwitch.as_str(), "mode_switch");
    assert_eq!(GestureKind::Scroll.to_string(), "scroll");
}

#[test]
fn test_state_reset() {
    let mut state = InteractionState {
        mode: Mode::Scroll,
        last_position: Vec2::new(1.0, 2.0),
        last_action_ms: Some(99),
    };
    state.reset();
    assert_eq!(state, InteractionState::new());
    assert_eq!(state.mode, Mode::Cursor);
}

#[test]
fn test_first_mode_switch_ignores_clock_origin() {
    let config = GestureConfig::default();
    let (state, outcome) = run(&config, InteractionState::new(), Some(&open_hand()), 800);
    assert_eq!(outcome.action, Some(Action::ModeSwitch { to: Mode::Scroll }));
    assert_eq!(state.last_action_ms, Some(800));

    // later switches still wait out the cooldown
    let (state, outcome) = run(&config, state, Some(&open_hand()), 1_500);
    assert_eq!(outcome.action, None);
    assert_eq!(state.mode, Mode::Scroll);
}

#[test]
fn test_first_click_ignores_clock_origin() {
    let config = GestureConfig::default();
    let frame = pointing_at(Vec2::new(200.0, 200.0));
    let (state, outcome) = run(&config, InteractionState::new(), Some(&frame), 300);
    assert_eq!(
        outcome.action,
        Some(Action::Click {
            at: Vec2::new(200.0, 200.0)
        })
    );
    assert_eq!(state.last_action_ms, Some(300));
}

#[test]
fn test_cooled_down() {
    let fresh = InteractionState::new();
    assert!(fresh.cooled_down(0, 1_000));

    let state = InteractionState {
        last_action_ms: Some(2_000),
        ..InteractionState::new()
    };
    assert!(!state.cooled_down(2_500, 500));
    assert!(state.cooled_down(2_501, 500));
    // a clock that went backwards never passes
    assert!(!state.cooled_down(1_000, 500));
}
