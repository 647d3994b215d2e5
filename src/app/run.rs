//! Top-level entry point for running FourierScope as a native window.

use eframe::egui;

use crate::config::FourierScopeConfig;

use super::FourierApp;

/// Launch the visualiser in a native window.
///
/// Builds a [`FourierApp`] from the configuration, applies the initial
/// color scheme, opens a native window and enters the eframe event loop.
/// The call blocks until the window is closed.
pub fn run_fourierscope(mut cfg: FourierScopeConfig) -> eframe::Result<()> {
    let app = FourierApp::new(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a bigger default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1280.0, 800.0));
    }

    let scheme = cfg.color_scheme;
    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            // Install Phosphor icon font before creating the app; the
            // drawing-mode button label uses its glyphs.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            scheme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
