//! Pointer-driven scene manipulation.
//!
//! Horizontal drag turns the scene group about the vertical axis, vertical
//! drag raises or lowers the camera. A double-click toggles the orbit
//! animation regardless of drag state.

use bevy_math::Vec2;

use crate::config::ControlsConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at an absolute position (logical pixels).
    Down(Vec2),
    Move(Vec2),
    Up,
    DoubleClick,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last: Vec2,
    },
}

/// What a pointer event asks the scene to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEffect {
    /// Add `yaw` radians to the group rotation and `lift` to the camera height.
    Orbit { yaw: f32, lift: f32 },
    ToggleAnimation,
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    drag: DragState,
    yaw_per_pixel: f32,
    lift_per_pixel: f32,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&ControlsConfig::default())
    }
}

impl InteractionController {
    pub fn new(config: &ControlsConfig) -> Self {
        Self {
            drag: DragState::Idle,
            yaw_per_pixel: config.yaw_per_pixel,
            lift_per_pixel: config.lift_per_pixel,
        }
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn handle(&mut self, event: PointerEvent) -> Option<ControlEffect> {
        match (event, self.drag) {
            (PointerEvent::Down(at), _) => {
                self.drag = DragState::Dragging { last: at };
                None
            }
            (PointerEvent::Move(at), DragState::Dragging { last }) => {
                let delta = at - last;
                self.drag = DragState::Dragging { last: at };
                Some(ControlEffect::Orbit {
                    yaw: delta.x * self.yaw_per_pixel,
                    lift: delta.y * self.lift_per_pixel,
                })
            }
            (PointerEvent::Move(_), DragState::Idle) => None,
            (PointerEvent::Up, _) => {
                self.drag = DragState::Idle;
                None
            }
            (PointerEvent::DoubleClick, _) => Some(ControlEffect::ToggleAnimation),
        }
    }
}

/// Turns primary-button presses into double-clicks.
#[derive(Clone, Debug)]
pub struct DoubleClickDetector {
    window_secs: f64,
    last_press: Option<f64>,
}

impl DoubleClickDetector {
    pub fn new(window_secs: f64) -> Self {
        Self {
            window_secs,
            last_press: None,
        }
    }

    /// Record a press at `now` seconds; true when it completes a double-click.
    pub fn press(&mut self, now: f64) -> bool {
        match self.last_press.take() {
            Some(prev) if now - prev <= self.window_secs => true,
            _ => {
                self.last_press = Some(now);
                false
            }
        }
    }
}

/// Primary-button transition as delivered by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

/// Order one frame of button and cursor input into pointer events.
///
/// Buttons replay in delivery order: every press asks `on_press` whether it
/// completes a double-click and then goes down at `press_at`, every release
/// goes up. Cursor moves follow the buttons, except that a trailing release
/// is held back until after them so a drag within one frame still lands.
/// The last button edge therefore decides the drag state the frame ends in.
pub fn frame_pointer_events(
    buttons: &[ButtonEdge],
    press_at: Option<Vec2>,
    moves: &[Vec2],
    mut on_press: impl FnMut() -> bool,
) -> Vec<PointerEvent> {
    let (replayed, trailing_up) = match buttons.split_last() {
        Some((ButtonEdge::Released, head)) => (head, true),
        _ => (buttons, false),
    };

    let mut events = Vec::with_capacity(buttons.len() * 2 + moves.len());
    for edge in replayed {
        match edge {
            ButtonEdge::Pressed => {
                if on_press() {
                    events.push(PointerEvent::DoubleClick);
                }
                if let Some(at) = press_at {
                    events.push(PointerEvent::Down(at));
                }
            }
            ButtonEdge::Released => events.push(PointerEvent::Up),
        }
    }
    events.extend(moves.iter().copied().map(PointerEvent::Move));
    if trailing_up {
        events.push(PointerEvent::Up);
    }
    events
}
