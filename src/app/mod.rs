//! The eframe shell: window creation, event collection and painting.

mod fourier_app;
pub mod run;

pub use fourier_app::FourierApp;
