// Copyright 2025 the Attira Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reveal state machine.

use attira_event_state::coalesce::FrameCoalescer;
use attira_event_state::drag::{AxisIntent, DragState};
use kurbo::{Point, Rect};

use crate::config::{ConfigError, RevealConfig};
use crate::state::{InputSource, RevealPhase, RevealState};

/// A move sample waiting for the next animation frame.
#[derive(Copy, Clone, Debug, PartialEq)]
struct PendingMove {
    x: f64,
    container: Rect,
}

/// Last touch contact, used to recognize compatibility mouse events.
#[derive(Copy, Clone, Debug, PartialEq)]
struct TouchMark {
    point: Point,
    time_ms: u64,
}

/// Drag-to-reveal state machine for a before/after image comparison.
///
/// The control turns pointer input over a rectangular viewport into a reveal
/// fraction. Mouse gestures drive the fraction immediately. Touch gestures are
/// held in [`RevealPhase::ArmedUnresolved`] until they travel far enough to
/// tell a horizontal drag from a vertical page scroll; vertical gestures are
/// passed through untouched for the rest of their lifetime.
///
/// All handlers are synchronous, never fail, and return the resulting
/// [`RevealState`]. Malformed geometry or coordinates leave the position where
/// it was.
#[derive(Clone, Debug)]
pub struct RevealControl {
    config: RevealConfig,
    position: f64,
    phase: RevealPhase,
    source: Option<InputSource>,
    drag: DragState,
    pending: FrameCoalescer<PendingMove>,
    last_touch: Option<TouchMark>,
}

impl Default for RevealControl {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

impl RevealControl {
    /// Create a control, replacing any invalid option with a usable value.
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        let config = config.sanitized();
        Self {
            position: config.default_position,
            config,
            phase: RevealPhase::Idle,
            source: None,
            drag: DragState::default(),
            pending: FrameCoalescer::new(),
            last_touch: None,
        }
    }

    /// Create a control, rejecting an invalid configuration.
    pub fn try_new(config: RevealConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Current position and phase.
    #[must_use]
    pub fn state(&self) -> RevealState {
        RevealState {
            position: self.position,
            phase: self.phase,
        }
    }

    /// Current reveal fraction.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Device class of the gesture in progress.
    #[must_use]
    pub fn active_source(&self) -> Option<InputSource> {
        self.source
    }

    /// Anchor of the gesture in progress.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.drag.start_pos
    }

    /// Horizontal coordinate of the divider inside `container`.
    #[must_use]
    pub fn handle_x(&self, container: Rect) -> f64 {
        crate::clip::handle_x(self.position, container)
    }

    /// Returns `true` when the host should cancel native scrolling for the current event.
    ///
    /// Only a resolved horizontal drag suppresses scrolling. Armed and
    /// passthrough touches must reach the page untouched.
    #[must_use]
    pub fn suppresses_native_scroll(&self) -> bool {
        self.config.suppress_native_scroll_while_dragging
            && self.phase == RevealPhase::DraggingHorizontal
    }

    /// Returns `true` if the control owns the current gesture.
    #[must_use]
    pub fn claims_gesture(&self) -> bool {
        matches!(
            self.phase,
            RevealPhase::ArmedUnresolved | RevealPhase::DraggingHorizontal
        )
    }

    /// Begin a gesture at `point`.
    ///
    /// The gesture is ignored (and the state returned unchanged) when another
    /// gesture is in progress, when `point` is not finite, when a handle-only
    /// radius is configured and `point` is too far from the handle, or when a
    /// mouse press looks like the compatibility echo of a recent touch.
    ///
    /// A claimed mouse gesture starts dragging immediately; a claimed touch
    /// gesture is armed until its axis resolves. The position never changes here.
    pub fn on_gesture_start(
        &mut self,
        source: InputSource,
        point: Point,
        container: Rect,
        time_ms: u64,
    ) -> RevealState {
        if self.phase.is_active() {
            log::debug!("reveal: ignoring {source:?} start during {:?}", self.phase);
            return self.state();
        }
        if !point.is_finite() {
            return self.state();
        }
        if let Some(radius) = self.config.thresholds.handle_hit_radius_px {
            let distance = (point.x - self.handle_x(container)).abs();
            if !(distance < radius) {
                log::debug!("reveal: start {distance}px from handle is outside {radius}px");
                return self.state();
            }
        }
        if source == InputSource::Mouse && self.is_emulated_mouse(point, time_ms) {
            log::debug!("reveal: ignoring compatibility mouse press at {point:?}");
            return self.state();
        }

        self.drag.start(point);
        self.source = Some(source);
        self.phase = match source {
            InputSource::Mouse => {
                self.drag.lock_axis(AxisIntent::Horizontal);
                RevealPhase::DraggingHorizontal
            }
            InputSource::Touch => {
                self.last_touch = Some(TouchMark { point, time_ms });
                RevealPhase::ArmedUnresolved
            }
        };
        log::trace!("reveal: {source:?} gesture started -> {:?}", self.phase);
        self.state()
    }

    /// Feed a move of the current gesture and apply it immediately.
    ///
    /// A move queued by [`queue_gesture_move`](Self::queue_gesture_move) and
    /// not yet applied is older than this one, so it is dropped.
    pub fn on_gesture_move(&mut self, point: Point, container: Rect) -> RevealState {
        if self.track_move(point) {
            self.pending.discard();
            self.apply_x(point.x, container);
        }
        self.state()
    }

    /// Feed a move of the current gesture, deferring the position update to
    /// [`on_animation_frame`](Self::on_animation_frame).
    ///
    /// The phase still resolves synchronously, so the host can decide on scroll
    /// suppression for this very event. Returns `true` when the host should
    /// request an animation frame.
    pub fn queue_gesture_move(&mut self, point: Point, container: Rect) -> bool {
        if self.track_move(point) {
            return self.pending.push(PendingMove {
                x: point.x,
                container,
            });
        }
        false
    }

    /// Apply the move queued since the last frame, if any.
    pub fn on_animation_frame(&mut self) -> RevealState {
        if let Some(m) = self.pending.take_for_frame() {
            self.apply_pending(m);
        }
        self.state()
    }

    /// Finish the current gesture.
    ///
    /// Any queued move is applied first. The position is kept, the phase returns
    /// to [`RevealPhase::Idle`], and the anchor is cleared. Calling this with no
    /// gesture in progress changes nothing.
    pub fn on_gesture_end(&mut self) -> RevealState {
        self.finish(None)
    }

    /// Finish the current gesture at `time_ms`.
    ///
    /// Same as [`on_gesture_end`](Self::on_gesture_end), but a touch gesture
    /// also restarts the compatibility mouse guard from its release time, so a
    /// long press does not outlive the guard window.
    pub fn on_gesture_end_at(&mut self, time_ms: u64) -> RevealState {
        self.finish(Some(time_ms))
    }

    /// Cancel the current gesture (blur, lost capture, multi-touch conflict).
    ///
    /// Identical to [`on_gesture_end`](Self::on_gesture_end).
    pub fn on_gesture_cancel(&mut self) -> RevealState {
        self.finish(None)
    }

    /// Reset for a new image pair: default position, idle, no pending move.
    pub fn on_active_image_pair_changed(&mut self) -> RevealState {
        self.pending.discard();
        self.drag.end();
        self.source = None;
        self.phase = RevealPhase::Idle;
        self.position = self.config.default_position;
        log::trace!("reveal: image pair changed, reset to {}", self.position);
        self.state()
    }

    /// Record a move and update the phase; returns `true` if the move should drive the position.
    fn track_move(&mut self, point: Point) -> bool {
        match self.phase {
            RevealPhase::Idle | RevealPhase::PassthroughVertical => false,
            RevealPhase::DraggingHorizontal => {
                self.drag.update(point);
                true
            }
            RevealPhase::ArmedUnresolved => {
                let intent = self.drag.resolve_axis(point, self.config.thresholds.axis());
                self.phase = RevealPhase::from_intent(intent);
                if self.phase.is_resolved() {
                    log::trace!("reveal: touch resolved -> {:?}", self.phase);
                }
                self.phase == RevealPhase::DraggingHorizontal
            }
        }
    }

    fn finish(&mut self, ended_at: Option<u64>) -> RevealState {
        if let Some(m) = self.pending.flush() {
            self.apply_pending(m);
        }
        if !self.phase.is_active() {
            return self.state();
        }
        if self.source == Some(InputSource::Touch) {
            if let Some(mark) = self.last_touch.as_mut() {
                if let Some(last) = self.drag.last_pos {
                    mark.point = last;
                }
                if let Some(t) = ended_at {
                    mark.time_ms = mark.time_ms.max(t);
                }
            }
        }
        log::trace!("reveal: gesture ended in {:?}", self.phase);
        self.drag.end();
        self.source = None;
        self.phase = RevealPhase::Idle;
        self.state()
    }

    fn apply_pending(&mut self, m: PendingMove) {
        if self.phase == RevealPhase::DraggingHorizontal {
            self.apply_x(m.x, m.container);
        }
    }

    fn apply_x(&mut self, x: f64, container: Rect) {
        if let Some(position) = fraction_in(x, container) {
            self.position = position;
        }
    }

    fn is_emulated_mouse(&self, point: Point, time_ms: u64) -> bool {
        let Some(mark) = self.last_touch else {
            return false;
        };
        let guard_px = self.config.emulated_mouse_guard_px;
        time_ms.saturating_sub(mark.time_ms) < self.config.emulated_mouse_guard_ms
            && (point - mark.point).hypot2() <= guard_px * guard_px
    }
}

/// Map `x` to a clamped fraction of `container`'s width.
///
/// Returns `None` for degenerate containers and NaN coordinates; infinite
/// coordinates saturate.
#[must_use]
pub fn fraction_in(x: f64, container: Rect) -> Option<f64> {
    let width = container.width();
    if !(width.is_finite() && width > 0.0) || x.is_nan() {
        return None;
    }
    let fraction = (x - container.x0) / width;
    if fraction.is_nan() {
        return None;
    }
    Some(fraction.clamp(0.0, 1.0))
}
