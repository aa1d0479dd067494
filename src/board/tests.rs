use cairo::{Format, ImageSurface};

use super::*;
use crate::draw::color::{RED, YELLOW};
use crate::input::TapEvent;

fn create_test_board(width: i32, height: i32) -> Board {
    let target = ImageSurface::create(Format::ARgb32, width, height).unwrap();
    Board::create(target).unwrap()
}

#[test]
fn create_applies_original_defaults() {
    let board = create_test_board(64, 64);

    assert_eq!(board.line_width(), 10.0);
    assert_eq!(board.stroke_style(), YELLOW);
    assert_eq!(board.mode(), StrokeMode::Normal);
    assert!(!board.is_drawing());
    assert!(!board.has_background());
    assert!(board.current_gesture().is_empty());
    assert!(board.history().is_empty());
    assert_eq!(board.render_count(), 0);
}

#[test]
fn create_rejects_zero_sized_surface() {
    let target = ImageSurface::create(Format::ARgb32, 0, 0).unwrap();
    assert!(matches!(
        Board::create(target),
        Err(BoardError::EmptySurface { .. })
    ));
}

#[test]
fn create_rejects_surface_without_alpha() {
    let target = ImageSurface::create(Format::Rgb24, 64, 64).unwrap();
    assert!(matches!(
        Board::create(target),
        Err(BoardError::UnsupportedFormat(Format::Rgb24))
    ));
}

#[test]
fn buffer_shares_target_dimensions() {
    let board = create_test_board(48, 32);
    assert_eq!(board.buffer.width(), 48);
    assert_eq!(board.buffer.height(), 32);
}

#[test]
fn with_config_applies_drawing_section() {
    let mut config = Config::default();
    config.drawing.default_width = 4.0;
    config.drawing.default_style = crate::config::ColorSpec::Name("red".to_string());
    config.drawing.default_mode = "eraser".to_string();

    let target = ImageSurface::create(Format::ARgb32, 64, 64).unwrap();
    let board = Board::with_config(target, &config).unwrap();

    assert_eq!(board.line_width(), 4.0);
    assert_eq!(board.stroke_style(), RED);
    assert_eq!(board.mode(), StrokeMode::Eraser);
}

#[test]
fn tap_start_resets_gesture_and_records_point() {
    let mut board = create_test_board(64, 64);

    board.on_tap_start(10.0, 10.0);
    board.on_tap_move(30.0, 30.0);
    assert_eq!(board.current_gesture().len(), 1);

    // A new press clears the previous gesture's segments
    board.on_tap_start(5.0, 5.0);
    assert!(board.is_drawing());
    assert!(board.current_gesture().is_empty());
    assert_eq!(board.last_x, 5.0);
    assert_eq!(board.last_y, 5.0);
}

#[test]
fn moves_while_idle_are_dropped() {
    let mut board = create_test_board(64, 64);

    board.on_tap_move(30.0, 30.0);

    assert!(board.current_gesture().is_empty());
    assert_eq!(board.render_count(), 0);
}

#[test]
fn jitter_filter_rejects_at_threshold_and_accepts_above() {
    let mut board = create_test_board(64, 64);
    board.on_tap_start(10.0, 10.0);

    // Summed delta of exactly 3 is rejected (strictly-greater threshold)
    board.on_tap_move(11.0, 12.0);
    assert!(board.current_gesture().is_empty());
    assert_eq!(board.render_count(), 0);

    // Summed delta of 4 is accepted
    board.on_tap_move(12.0, 12.0);
    assert_eq!(board.current_gesture().len(), 1);
    assert_eq!(board.render_count(), 1);

    let segment = board.current_gesture().segments[0];
    assert_eq!((segment.start_x, segment.start_y), (10.0, 10.0));
    assert_eq!((segment.end_x, segment.end_y), (12.0, 12.0));
}

#[test]
fn jitter_filter_uses_summed_deltas_not_distance() {
    let mut board = create_test_board(64, 64);
    board.on_tap_start(10.0, 10.0);

    // A long diagonal move whose deltas cancel is still rejected
    board.on_tap_move(20.0, 0.0);
    assert!(board.current_gesture().is_empty());

    // Negative summed deltas count by magnitude
    board.on_tap_move(6.0, 9.0);
    assert_eq!(board.current_gesture().len(), 1);
}

#[test]
fn rejected_move_does_not_advance_last_point() {
    let mut board = create_test_board(64, 64);
    board.on_tap_start(10.0, 10.0);

    board.on_tap_move(11.0, 11.0);
    assert_eq!((board.last_x, board.last_y), (10.0, 10.0));

    // Small steps accumulate against the original point until one passes
    board.on_tap_move(12.0, 12.0);
    assert_eq!(board.current_gesture().len(), 1);
    assert_eq!((board.last_x, board.last_y), (12.0, 12.0));
}

#[test]
fn mode_change_mid_gesture_produces_mixed_segments() {
    let mut board = create_test_board(64, 64);
    board.on_tap_start(10.0, 10.0);

    board.on_tap_move(20.0, 20.0);
    board.set_mode(StrokeMode::Eraser);
    board.on_tap_move(30.0, 30.0);
    board.on_tap_end();

    let gesture = &board.history().gestures()[0];
    assert_eq!(gesture.len(), 2);
    assert_eq!(gesture.segments[0].mode, StrokeMode::Normal);
    assert_eq!(gesture.segments[1].mode, StrokeMode::Eraser);
}

#[test]
fn empty_gesture_still_recorded_in_history() {
    let mut board = create_test_board(64, 64);

    board.on_tap_start(10.0, 10.0);
    board.on_tap_end();

    assert!(!board.is_drawing());
    assert_eq!(board.history().len(), 1);
    assert!(board.history().gestures()[0].is_empty());
}

#[test]
fn history_entries_untouched_by_later_gestures() {
    let mut board = create_test_board(64, 64);

    board.on_tap_start(0.0, 0.0);
    board.on_tap_move(10.0, 10.0);
    board.on_tap_move(20.0, 20.0);
    board.on_tap_end();

    board.on_tap_start(40.0, 40.0);
    board.on_tap_move(50.0, 50.0);
    board.on_tap_end();

    assert_eq!(board.history().len(), 2);
    let first = &board.history().gestures()[0];
    assert_eq!(first.len(), 2);
    assert_eq!((first.segments[0].start_x, first.segments[0].start_y), (0.0, 0.0));
    assert_eq!((first.segments[1].end_x, first.segments[1].end_y), (20.0, 20.0));
    assert_eq!(board.history().gestures()[1].len(), 1);
}

#[test]
fn end_to_end_gesture_capture() {
    let mut board = create_test_board(64, 64);

    board.on_tap_start(10.0, 10.0);
    board.on_tap_move(20.0, 20.0); // summed delta 20, accepted
    board.on_tap_move(21.0, 21.0); // summed delta 2, rejected
    board.on_tap_end();

    assert_eq!(board.render_count(), 1);
    assert_eq!(board.history().len(), 1);

    let gesture = &board.history().gestures()[0];
    assert_eq!(gesture.len(), 1);
    let segment = gesture.segments[0];
    assert_eq!(segment.mode, StrokeMode::Normal);
    assert_eq!((segment.start_x, segment.start_y), (10.0, 10.0));
    assert_eq!((segment.end_x, segment.end_y), (20.0, 20.0));
}

#[test]
fn dispatch_honors_mouse_binding() {
    let mut board = create_test_board(64, 64);

    // Touch events are not bound on a mouse board
    board.dispatch(&TapEvent::new("touchstart", 10.0, 10.0));
    assert!(!board.is_drawing());

    board.dispatch(&TapEvent::new("mousedown", 10.0, 10.0));
    assert!(board.is_drawing());
    board.dispatch(&TapEvent::new("mousemove", 20.0, 20.0));
    board.dispatch(&TapEvent::new("mouseup", 20.0, 20.0));

    assert!(!board.is_drawing());
    assert_eq!(board.history().len(), 1);
    assert_eq!(board.history().gestures()[0].len(), 1);
}

#[test]
fn dispatch_honors_touch_binding() {
    let mut config = Config::default();
    config.input.touch = Some(true);
    let target = ImageSurface::create(Format::ARgb32, 64, 64).unwrap();
    let mut board = Board::with_config(target, &config).unwrap();

    assert!(board.event_binding().is_touch());

    board.dispatch(&TapEvent::new("mousedown", 10.0, 10.0));
    assert!(!board.is_drawing());

    board.dispatch(&TapEvent::new("touchstart", 10.0, 10.0));
    assert!(board.is_drawing());
    board.dispatch(&TapEvent::new("touchend", 10.0, 10.0));
    assert_eq!(board.history().len(), 1);
}

#[test]
fn setters_do_not_rewrite_existing_segments() {
    let mut board = create_test_board(64, 64);
    board.on_tap_start(10.0, 10.0);
    board.on_tap_move(20.0, 20.0);

    board.set_line_width(2.0);
    board.set_stroke_style(RED);
    board.set_mode(StrokeMode::Eraser);

    // The captured segment keeps the mode it was stamped with; width and
    // style are live render state, not segment data
    assert_eq!(board.current_gesture().segments[0].mode, StrokeMode::Normal);
    assert_eq!(board.line_width(), 2.0);
    assert_eq!(board.stroke_style(), RED);
}
