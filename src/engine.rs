//! Per-frame simulation engine.
//!
//! [`FourierScope`] owns the control parameters, the harmonic terms, the
//! epicycle state, the trace buffer and the captured user wave, and drives
//! one frame per [`tick`](FourierScope::tick) call: event batch in,
//! primitive list out. Every tick is a deterministic function of
//! (previous state, event batch, viewport); there is no hidden state, no
//! blocking and no cross-frame queuing.

use crate::controls::{ControlEffects, ControlParameters, ControlRegions};
use crate::data::epicycles::EpicycleState;
use crate::data::harmonics::{generate_terms, HarmonicTerm};
use crate::data::trace::TraceBuffer;
use crate::events::{PointerEvent, PointerEventKind};
use crate::layout::{Layout, Viewport};
use crate::render::{render_frame, DrawPrimitive};

pub struct FourierScope {
    params: ControlParameters,
    terms: Vec<HarmonicTerm>,
    state: EpicycleState,
    trace: TraceBuffer,
    user_wave: Vec<f32>,
    layout: Layout,
    viewport: Viewport,
}

impl FourierScope {
    pub fn new(params: ControlParameters, viewport: Viewport) -> Self {
        let terms = generate_terms(params.active_preset(), params.circle_count);
        let layout = Layout::compute(&terms, viewport);
        let trace = TraceBuffer::new(layout.trace_capacity());
        Self {
            params,
            terms,
            state: EpicycleState::new(),
            trace,
            user_wave: Vec::new(),
            layout,
            viewport,
        }
    }

    /// Run one frame: process the event batch, advance the simulation and
    /// produce the frame's draw primitives.
    pub fn tick(&mut self, events: &[PointerEvent], viewport: Viewport) -> Vec<DrawPrimitive> {
        if viewport != self.viewport {
            // Host-triggered resize: layout and trace capacity are stale.
            self.viewport = viewport;
            self.relayout();
        }
        let regions = ControlRegions::compute(viewport);

        let mut fx = ControlEffects::default();
        for event in events {
            fx.merge(self.params.apply_event(event, &regions));
            self.capture_user_wave(event);
        }
        if fx.drawing_toggled {
            self.user_wave.clear();
            if !self.params.drawing_mode {
                // Leaving drawing mode discards the frozen wave history;
                // the resumed simulation starts a fresh trace.
                self.trace.clear();
            }
        }
        if fx.geometry_invalidated {
            self.invalidate_geometry();
        }

        // Drawing mode suspends the simulation so the captured wave can be
        // inspected against a frozen trace.
        if !self.params.drawing_mode {
            let tip = self.state.advance(
                &self.terms,
                self.params.angular_speed,
                self.params.animation_speed,
                self.layout.center,
                self.layout.max_radius,
            );
            self.trace.push(tip.y);
        }

        render_frame(
            &self.params,
            &self.terms,
            &self.state,
            &self.trace,
            &self.user_wave,
            &self.layout,
            &regions,
            viewport,
        )
    }

    /// While drawing mode is on, pointer drags inside the trace lane feed
    /// the user wave, one y-sample per move event.
    fn capture_user_wave(&mut self, event: &PointerEvent) {
        if self.params.drawing_mode
            && event.kind == PointerEventKind::Move
            && event.primary_down
            && self.layout.in_trace_lane(event.pos.x)
        {
            self.user_wave.push(event.pos.y);
        }
    }

    /// The harmonic count or preset changed: regenerate terms, recompute
    /// the layout (the anchor shifts with the chain extent) and drop the
    /// now-meaningless trace history and phase.
    fn invalidate_geometry(&mut self) {
        self.terms = generate_terms(self.params.active_preset(), self.params.circle_count);
        self.state.reset();
        self.trace.clear();
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = Layout::compute(&self.terms, self.viewport);
        self.trace.set_capacity(self.layout.trace_capacity());
    }

    // ── Read-only accessors (also used by the integration tests) ─────────

    pub fn params(&self) -> &ControlParameters {
        &self.params
    }

    pub fn terms(&self) -> &[HarmonicTerm] {
        &self.terms
    }

    pub fn state(&self) -> &EpicycleState {
        &self.state
    }

    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    pub fn user_wave(&self) -> &[f32] {
        &self.user_wave
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
