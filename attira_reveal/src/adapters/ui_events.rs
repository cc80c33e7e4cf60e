// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route [`ui_events`] pointer events into a [`RevealControl`].
//!
//! [`PointerBinding`] remembers which pointer owns the current gesture so that
//! a second finger neither restarts nor ends it. Register it for pointer-up and
//! pointer-cancel at document scope so drags released outside the viewport
//! still end.

use kurbo::Rect;
use ui_events::pointer::{PointerEvent, PointerId, PointerInfo, PointerType};

use crate::{InputSource, RevealControl, RevealPhase};

/// What the host should do with the event it just routed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventDisposition {
    /// The control did not use the event; let it propagate normally.
    Ignored,
    /// The control used the event; native handling may continue.
    Handled,
    /// The control used the event and native scrolling must be cancelled.
    PreventDefault,
}

/// Tracks the pointer that owns the current reveal gesture.
#[derive(Clone, Debug, Default)]
pub struct PointerBinding {
    bound: bool,
    pointer_id: Option<PointerId>,
}

impl PointerBinding {
    /// Create an unbound binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a pointer owns the gesture.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Route one event into `control`.
    ///
    /// `container` is the viewport rectangle in the same logical coordinates as
    /// the event, and `time_ms` is a monotonic timestamp.
    pub fn route(
        &mut self,
        control: &mut RevealControl,
        event: &PointerEvent,
        container: Rect,
        time_ms: u64,
    ) -> EventDisposition {
        match event {
            PointerEvent::Down(e) => {
                if self.bound {
                    return EventDisposition::Ignored;
                }
                let source = source_for(e.pointer.pointer_type);
                let state =
                    control.on_gesture_start(source, e.state.logical_point(), container, time_ms);
                if !state.phase.is_active() {
                    return EventDisposition::Ignored;
                }
                self.bound = true;
                self.pointer_id = e.pointer.pointer_id;
                disposition(control)
            }
            PointerEvent::Move(e) => {
                if !self.owns(&e.pointer) {
                    return EventDisposition::Ignored;
                }
                control.on_gesture_move(e.current.logical_point(), container);
                disposition(control)
            }
            PointerEvent::Up(e) => self.release(control, &e.pointer, time_ms),
            PointerEvent::Cancel(info) => self.release(control, info, time_ms),
            _ => EventDisposition::Ignored,
        }
    }

    /// End the bound gesture regardless of which pointer reported it (window blur).
    pub fn cancel(&mut self, control: &mut RevealControl) {
        control.on_gesture_cancel();
        self.bound = false;
        self.pointer_id = None;
    }

    fn owns(&self, pointer: &PointerInfo) -> bool {
        self.bound && pointer.pointer_id == self.pointer_id
    }

    fn release(
        &mut self,
        control: &mut RevealControl,
        pointer: &PointerInfo,
        time_ms: u64,
    ) -> EventDisposition {
        if !self.owns(pointer) {
            return EventDisposition::Ignored;
        }
        let was_dragging = control.suppresses_native_scroll();
        control.on_gesture_end_at(time_ms);
        self.bound = false;
        self.pointer_id = None;
        if was_dragging {
            EventDisposition::PreventDefault
        } else {
            EventDisposition::Handled
        }
    }
}

fn source_for(pointer_type: PointerType) -> InputSource {
    match pointer_type {
        PointerType::Touch | PointerType::Pen => InputSource::Touch,
        _ => InputSource::Mouse,
    }
}

fn disposition(control: &RevealControl) -> EventDisposition {
    if control.suppresses_native_scroll() {
        EventDisposition::PreventDefault
    } else if control.phase() == RevealPhase::PassthroughVertical {
        EventDisposition::Ignored
    } else {
        EventDisposition::Handled
    }
}

#[cfg(test)]
mod tests {
    use ui_events::pointer::{PointerButtonEvent, PointerState, PointerUpdate};

    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 200.0)
    }

    fn finger(id: u64) -> PointerInfo {
        PointerInfo {
            pointer_id: PointerId::new(id),
            persistent_device_id: None,
            pointer_type: PointerType::Touch,
        }
    }

    fn at(x: f64, y: f64) -> PointerState {
        let mut state = PointerState::default();
        state.position.x = x;
        state.position.y = y;
        state
    }

    fn down(pointer: PointerInfo, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down(PointerButtonEvent {
            button: None,
            pointer,
            state: at(x, y),
        })
    }

    fn up(pointer: PointerInfo, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up(PointerButtonEvent {
            button: None,
            pointer,
            state: at(x, y),
        })
    }

    fn moved(pointer: PointerInfo, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move(PointerUpdate {
            pointer,
            current: at(x, y),
            coalesced: Default::default(),
            predicted: Default::default(),
        })
    }

    #[test]
    fn pens_drag_like_fingers() {
        assert_eq!(source_for(PointerType::Touch), InputSource::Touch);
        assert_eq!(source_for(PointerType::Pen), InputSource::Touch);
        assert_eq!(source_for(PointerType::Mouse), InputSource::Mouse);
    }

    #[test]
    fn new_binding_is_unbound() {
        let mut binding = PointerBinding::new();
        assert!(!binding.is_bound());
        let mut control = RevealControl::default();
        binding.cancel(&mut control);
        assert_eq!(control.phase(), RevealPhase::Idle);
    }

    #[test]
    fn second_finger_neither_restarts_nor_ends_the_drag() {
        let mut binding = PointerBinding::new();
        let mut control = RevealControl::default();

        assert_eq!(
            binding.route(&mut control, &down(finger(1), 150.0, 100.0), viewport(), 0),
            EventDisposition::Handled
        );
        assert_eq!(
            binding.route(&mut control, &down(finger(2), 20.0, 100.0), viewport(), 10),
            EventDisposition::Ignored
        );
        assert_eq!(control.anchor(), Some(kurbo::Point::new(150.0, 100.0)));

        assert_eq!(
            binding.route(&mut control, &moved(finger(1), 210.0, 101.0), viewport(), 20),
            EventDisposition::PreventDefault
        );
        assert!((control.position() - 0.7).abs() < 1e-12);

        assert_eq!(
            binding.route(&mut control, &up(finger(2), 20.0, 100.0), viewport(), 30),
            EventDisposition::Ignored
        );
        assert_eq!(control.phase(), RevealPhase::DraggingHorizontal);

        assert_eq!(
            binding.route(&mut control, &up(finger(1), 210.0, 101.0), viewport(), 40),
            EventDisposition::PreventDefault
        );
        assert_eq!(control.phase(), RevealPhase::Idle);
        assert!(!binding.is_bound());
        assert!((control.position() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn vertical_swipe_is_left_to_the_page() {
        let mut binding = PointerBinding::new();
        let mut control = RevealControl::default();

        binding.route(&mut control, &down(finger(1), 150.0, 100.0), viewport(), 0);
        let d = binding.route(&mut control, &moved(finger(1), 151.0, 160.0), viewport(), 16);
        assert_eq!(d, EventDisposition::Ignored);
        assert_eq!(control.phase(), RevealPhase::PassthroughVertical);
        assert_eq!(control.position(), 0.5);

        let d = binding.route(&mut control, &up(finger(1), 151.0, 160.0), viewport(), 32);
        assert_eq!(d, EventDisposition::Handled);
        assert!(!binding.is_bound());
    }

    #[test]
    fn owner_cancel_unbinds() {
        let mut binding = PointerBinding::new();
        let mut control = RevealControl::default();

        binding.route(&mut control, &down(finger(3), 150.0, 100.0), viewport(), 0);
        assert!(binding.is_bound());

        let d = binding.route(&mut control, &PointerEvent::Cancel(finger(4)), viewport(), 5);
        assert_eq!(d, EventDisposition::Ignored);
        assert!(binding.is_bound());

        let d = binding.route(&mut control, &PointerEvent::Cancel(finger(3)), viewport(), 10);
        assert_eq!(d, EventDisposition::Handled);
        assert_eq!(control.phase(), RevealPhase::Idle);
        assert!(!binding.is_bound());
    }
}
