//! Configuration for the FourierScope shell.

use crate::color_scheme::ColorScheme;
use crate::controls::ControlParameters;

/// Top-level configuration applied once at startup.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `title`          | Native window title |
/// | `fps`            | Target frame rate for the repaint pump |
/// | `color_scheme`   | Initial visual theme |
/// | `initial_params` | Starting control parameters |
/// | `native_options` | Optional eframe native-window options |
pub struct FourierScopeConfig {
    pub title: String,
    /// Target frames per second (the host clock throttles the frame pump;
    /// the core itself never manages time).
    pub fps: u32,
    pub color_scheme: ColorScheme,
    pub initial_params: ControlParameters,
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for FourierScopeConfig {
    fn default() -> Self {
        Self {
            title: "Fourier Series Visualisation".to_string(),
            fps: 60,
            color_scheme: ColorScheme::default(),
            initial_params: ControlParameters::default(),
            native_options: None,
        }
    }
}
