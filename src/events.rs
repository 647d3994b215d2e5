//! Pointer event batch handed to the core once per frame.
//!
//! The host collects all pointer input since the last frame into an
//! ordered batch; the core processes the whole batch before producing the
//! frame's output. The core keeps no event state between batches other
//! than the persisted control parameters.

use egui::Pos2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Up,
    Move,
}

/// One pointer event in window pixel coordinates (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pos: Pos2,
    /// Whether the primary button is held at the time of the event.
    pub primary_down: bool,
}

impl PointerEvent {
    pub fn down(pos: Pos2) -> Self {
        Self {
            kind: PointerEventKind::Down,
            pos,
            primary_down: true,
        }
    }

    pub fn up(pos: Pos2) -> Self {
        Self {
            kind: PointerEventKind::Up,
            pos,
            primary_down: false,
        }
    }

    pub fn moved(pos: Pos2, primary_down: bool) -> Self {
        Self {
            kind: PointerEventKind::Move,
            pos,
            primary_down,
        }
    }
}

/// Translate this frame's raw egui events into the core batch, preserving
/// their order. Only primary-button presses/releases and moves matter.
pub fn collect_pointer_events(input: &egui::InputState) -> Vec<PointerEvent> {
    let primary_down = input.pointer.primary_down();
    input
        .events
        .iter()
        .filter_map(|ev| match ev {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => Some(if *pressed {
                PointerEvent::down(*pos)
            } else {
                PointerEvent::up(*pos)
            }),
            egui::Event::PointerMoved(pos) => Some(PointerEvent::moved(*pos, primary_down)),
            _ => None,
        })
        .collect()
}
