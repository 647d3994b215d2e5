//! FourierScope crate root: re-exports and module wiring.
//!
//! This crate provides an interactive, realtime visualisation of Fourier
//! epicycles built on egui/eframe: a chain of rotating circles whose tip
//! traces a scrolling waveform, with adjustable circle count, rotation
//! speed, theme and output quality.
//!
//! The implementation is split into cohesive modules:
//! - `data`: pure simulation pieces (harmonic terms, epicycle chain,
//!   trace ring buffer, Catmull-Rom reconstruction)
//! - `controls`: control parameters, hit regions and transition rules
//! - `layout`: viewport helpers and derived layout constants
//! - `render`: the stateless frame-to-primitives projection
//! - `engine`: the per-frame tick tying everything together
//! - `app`: the eframe shell (window, event collection, painting)

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod controls;
pub mod data;
pub mod engine;
pub mod events;
pub mod layout;
pub mod render;

// Public re-exports for a compact external API
pub use app::run::run_fourierscope;
pub use color_scheme::{ColorScheme, Palette};
pub use config::FourierScopeConfig;
pub use controls::ControlParameters;
pub use engine::FourierScope;
