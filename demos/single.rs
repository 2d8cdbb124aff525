//! Example: One easing, close up
//!
//! What it demonstrates
//! - Running a single catalogue entry on a larger surface via
//!   [`EaseScopeApp::with_catalogue`].
//! - Picking the easing and theme from command-line arguments.
//!
//! How to run
//! ```bash
//! cargo run --example single                        # easeInOutCubic, dark
//! cargo run --example single -- easeOutBounce
//! cargo run --example single -- easeOutElastic light
//! ```

use eframe::egui;

use easescope::{EaseScopeApp, Easing, EasescopeConfig, ThemeKind};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "easeInOutCubic".to_string());
    let easing = Easing::by_name(&name).unwrap_or_else(|| {
        eprintln!("Unknown easing '{name}', falling back to easeInOutCubic.");
        Easing::ALL[6]
    });
    let theme = match args.next().as_deref() {
        Some("light") => ThemeKind::Light,
        _ => ThemeKind::Dark,
    };

    let config = EasescopeConfig {
        title: format!("EaseScope - {}", easing.name),
        graph_width: 640,
        graph_height: 420,
        margin: 32.0,
        theme,
        ..EasescopeConfig::default()
    };

    let title = config.title.clone();
    let app = EaseScopeApp::with_catalogue(&[easing], config);
    eframe::run_native(
        &title,
        eframe::NativeOptions::default(),
        Box::new(move |cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
