use egui::{Event, Key, Modifiers, PointerButton, Pos2, Rect, TouchId, TouchPhase};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in viewport coordinates
    pub position: Pos2,
}

impl InputLocation {
    pub fn new(position: Pos2) -> Self {
        Self { position }
    }
}

/// Pointer and touch input addressed to the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp,
    /// Pointer moved off the canvas or out of the window
    PointerLeave,
    /// Touch events follow the first finger of the gesture
    TouchStart { location: InputLocation },
    TouchMove { location: InputLocation },
    TouchEnd,
}

impl InputEvent {
    /// Viewport position carried by the event, if any
    pub fn position(&self) -> Option<Pos2> {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerMove { location }
            | InputEvent::TouchStart { location }
            | InputEvent::TouchMove { location } => Some(location.position),
            InputEvent::PointerUp | InputEvent::PointerLeave | InputEvent::TouchEnd => None,
        }
    }
}

/// Maps viewport positions onto the surface buffer.
///
/// The buffer keeps the size it was mounted with while the displayed rect
/// follows the layout, so positions are scaled by `buffer / displayed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMapping {
    pub display: Rect,
    pub buffer: [u32; 2],
}

impl SurfaceMapping {
    pub fn new(display: Rect, buffer: [u32; 2]) -> Self {
        Self { display, buffer }
    }

    pub fn resolve(&self, position: Pos2) -> Option<Pos2> {
        let width = self.display.width();
        let height = self.display.height();
        if !(width > 0.0 && height > 0.0) || !position.is_finite() {
            return None;
        }
        let scale_x = self.buffer[0] as f32 / width;
        let scale_y = self.buffer[1] as f32 / height;
        Some(Pos2::new(
            (position.x - self.display.min.x) * scale_x,
            (position.y - self.display.min.y) * scale_y,
        ))
    }

    /// Resolve an event's position into surface space
    pub fn resolve_event(&self, event: &InputEvent) -> Option<Pos2> {
        event.position().and_then(|pos| self.resolve(pos))
    }
}

/// Toolbar and keyboard actions on the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadAction {
    ToggleTool,
    Undo,
    Clear,
    Download,
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    pointer_inside: bool,
    /// The finger that owns the current touch gesture
    primary_touch: Option<TouchId>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one frame of raw events for a canvas occupying `canvas_rect`.
    ///
    /// Backends synthesize pointer events from touches, so pointer events are
    /// dropped for frames that carry touch events.
    pub fn translate(&mut self, events: &[Event], canvas_rect: Rect) -> Vec<InputEvent> {
        let has_touch = events.iter().any(|e| matches!(e, Event::Touch { .. }));
        let mut out = Vec::new();

        for event in events {
            match event {
                Event::Touch { id, phase, pos, .. } => {
                    self.translate_touch(*id, *phase, *pos, canvas_rect, &mut out);
                }
                _ if has_touch => {}
                Event::PointerMoved(pos) => {
                    let inside = canvas_rect.contains(*pos);
                    if inside {
                        out.push(InputEvent::PointerMove {
                            location: InputLocation::new(*pos),
                        });
                    } else if self.pointer_inside {
                        out.push(InputEvent::PointerLeave);
                    }
                    self.pointer_inside = inside;
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if !canvas_rect.contains(*pos) {
                        continue;
                    }
                    self.pointer_inside = true;
                    out.push(if *pressed {
                        InputEvent::PointerDown {
                            location: InputLocation::new(*pos),
                        }
                    } else {
                        InputEvent::PointerUp
                    });
                }
                Event::PointerGone => {
                    if self.pointer_inside {
                        out.push(InputEvent::PointerLeave);
                    }
                    self.pointer_inside = false;
                }
                _ => {}
            }
        }

        out
    }

    fn translate_touch(
        &mut self,
        id: TouchId,
        phase: TouchPhase,
        pos: Pos2,
        canvas_rect: Rect,
        out: &mut Vec<InputEvent>,
    ) {
        match phase {
            TouchPhase::Start => {
                // Extra fingers do not restart the gesture
                if self.primary_touch.is_none() && canvas_rect.contains(pos) {
                    self.primary_touch = Some(id);
                    out.push(InputEvent::TouchStart {
                        location: InputLocation::new(pos),
                    });
                }
            }
            TouchPhase::Move => {
                // Touches keep reporting to the canvas after leaving it
                if self.primary_touch == Some(id) {
                    out.push(InputEvent::TouchMove {
                        location: InputLocation::new(pos),
                    });
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                if self.primary_touch == Some(id) {
                    self.primary_touch = None;
                    out.push(InputEvent::TouchEnd);
                }
            }
        }
    }

    /// Keyboard shortcuts pressed this frame
    pub fn shortcuts(events: &[Event]) -> Vec<PadAction> {
        events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key,
                    pressed: true,
                    repeat,
                    modifiers,
                    ..
                } => shortcut_action(*key, *modifiers, *repeat),
                _ => None,
            })
            .collect()
    }
}

/// Only undo follows key auto-repeat; the other actions fire once per press.
fn shortcut_action(key: Key, modifiers: Modifiers, repeat: bool) -> Option<PadAction> {
    match key {
        Key::Z if modifiers.command && !modifiers.shift => Some(PadAction::Undo),
        _ if repeat => None,
        Key::S if modifiers.command => Some(PadAction::Download),
        Key::E if modifiers.is_none() => Some(PadAction::ToggleTool),
        Key::Delete | Key::Backspace if modifiers.is_none() => Some(PadAction::Clear),
        _ => None,
    }
}
