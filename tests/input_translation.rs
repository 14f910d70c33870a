use drawing_pad::{
    DrawingController, InputEvent, InputHandler, InputLocation, PadAction, PadConfig,
    PixelSurface,
};
use egui::{
    Color32, Event, Key, Modifiers, PointerButton, Rect, TouchDeviceId, TouchId, TouchPhase,
    pos2, vec2,
};

fn canvas_rect() -> Rect {
    Rect::from_min_size(pos2(10.0, 10.0), vec2(100.0, 100.0))
}

fn at(x: f32, y: f32) -> InputLocation {
    InputLocation::new(pos2(x, y))
}

fn button(x: f32, y: f32, pressed: bool) -> Event {
    Event::PointerButton {
        pos: pos2(x, y),
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> Event {
    Event::Touch {
        device_id: TouchDeviceId(0),
        id: TouchId(id),
        phase,
        pos: pos2(x, y),
        force: None,
    }
}

fn key(key: Key, modifiers: Modifiers, repeat: bool) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat,
        modifiers,
    }
}

#[test]
fn test_pointer_gesture_inside_canvas() {
    let mut handler = InputHandler::new();
    let events = vec![
        Event::PointerMoved(pos2(20.0, 20.0)),
        button(20.0, 20.0, true),
        Event::PointerMoved(pos2(30.0, 30.0)),
        button(30.0, 30.0, false),
    ];

    let translated = handler.translate(&events, canvas_rect());
    assert_eq!(
        translated,
        vec![
            InputEvent::PointerMove { location: at(20.0, 20.0) },
            InputEvent::PointerDown { location: at(20.0, 20.0) },
            InputEvent::PointerMove { location: at(30.0, 30.0) },
            InputEvent::PointerUp,
        ]
    );
}

#[test]
fn test_leaving_canvas_emits_leave_once() {
    let mut handler = InputHandler::new();
    handler.translate(&[Event::PointerMoved(pos2(50.0, 50.0))], canvas_rect());

    let translated = handler.translate(
        &[
            Event::PointerMoved(pos2(200.0, 50.0)),
            Event::PointerMoved(pos2(210.0, 50.0)),
        ],
        canvas_rect(),
    );
    assert_eq!(translated, vec![InputEvent::PointerLeave]);

    // Window exit after already leaving produces nothing
    assert!(handler.translate(&[Event::PointerGone], canvas_rect()).is_empty());
}

#[test]
fn test_pointer_gone_while_inside_leaves() {
    let mut handler = InputHandler::new();
    handler.translate(&[Event::PointerMoved(pos2(50.0, 50.0))], canvas_rect());
    assert_eq!(
        handler.translate(&[Event::PointerGone], canvas_rect()),
        vec![InputEvent::PointerLeave]
    );
}

#[test]
fn test_press_outside_canvas_is_ignored() {
    let mut handler = InputHandler::new();
    assert!(handler.translate(&[button(300.0, 300.0, true)], canvas_rect()).is_empty());
}

#[test]
fn test_touch_frames_drop_synthetic_pointer_events() {
    let mut handler = InputHandler::new();
    let events = vec![
        Event::PointerMoved(pos2(20.0, 20.0)),
        button(20.0, 20.0, true),
        touch(1, TouchPhase::Start, 20.0, 20.0),
    ];

    let translated = handler.translate(&events, canvas_rect());
    assert_eq!(translated, vec![InputEvent::TouchStart { location: at(20.0, 20.0) }]);
}

#[test]
fn test_touch_follows_primary_finger_outside_canvas() {
    let mut handler = InputHandler::new();
    handler.translate(&[touch(1, TouchPhase::Start, 20.0, 20.0)], canvas_rect());

    let translated = handler.translate(
        &[
            touch(2, TouchPhase::Start, 40.0, 40.0),
            touch(1, TouchPhase::Move, 500.0, 20.0),
            touch(2, TouchPhase::End, 40.0, 40.0),
            touch(1, TouchPhase::End, 500.0, 20.0),
        ],
        canvas_rect(),
    );
    assert_eq!(
        translated,
        vec![
            InputEvent::TouchMove { location: at(500.0, 20.0) },
            InputEvent::TouchEnd,
        ]
    );
}

#[test]
fn test_keyboard_shortcuts() {
    let events = vec![
        key(Key::Z, Modifiers::COMMAND, false),
        key(Key::E, Modifiers::NONE, false),
        key(Key::Delete, Modifiers::NONE, false),
        key(Key::S, Modifiers::COMMAND, false),
        key(Key::A, Modifiers::NONE, false),
    ];
    assert_eq!(
        InputHandler::shortcuts(&events),
        vec![
            PadAction::Undo,
            PadAction::ToggleTool,
            PadAction::Clear,
            PadAction::Download,
        ]
    );
}

#[test]
fn test_held_keys_fire_once_except_undo() {
    let events = vec![
        key(Key::Delete, Modifiers::NONE, false),
        key(Key::Delete, Modifiers::NONE, true),
        key(Key::Delete, Modifiers::NONE, true),
        key(Key::E, Modifiers::NONE, false),
        key(Key::E, Modifiers::NONE, true),
        key(Key::Z, Modifiers::COMMAND, false),
        key(Key::Z, Modifiers::COMMAND, true),
    ];
    assert_eq!(
        InputHandler::shortcuts(&events),
        vec![
            PadAction::Clear,
            PadAction::ToggleTool,
            PadAction::Undo,
            PadAction::Undo,
        ]
    );
}

#[test]
fn test_held_delete_then_undo_restores_drawing() {
    let mut controller = DrawingController::new(PadConfig::default());
    controller.mount(PixelSurface::new(40, 20, Color32::WHITE).unwrap());
    controller.set_display_rect(Rect::from_min_size(pos2(0.0, 0.0), vec2(40.0, 20.0)));

    controller.begin_stroke(&InputEvent::PointerDown { location: at(5.0, 5.0) });
    controller.continue_stroke(&InputEvent::PointerMove { location: at(35.0, 5.0) });
    controller.end_stroke();
    assert_eq!(controller.surface().unwrap().pixel(20, 5), Some(Color32::BLACK));

    let held = [
        key(Key::Delete, Modifiers::NONE, false),
        key(Key::Delete, Modifiers::NONE, true),
        key(Key::Delete, Modifiers::NONE, true),
    ];
    for action in InputHandler::shortcuts(&held) {
        match action {
            PadAction::Clear => controller.clear(),
            PadAction::Undo => controller.undo(),
            _ => {}
        }
    }
    assert_eq!(controller.surface().unwrap().pixel(20, 5), Some(Color32::WHITE));

    controller.undo();
    assert_eq!(controller.surface().unwrap().pixel(20, 5), Some(Color32::BLACK));
}
