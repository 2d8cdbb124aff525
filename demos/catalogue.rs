//! Example: Full easing catalogue
//!
//! What it demonstrates
//! - Launching the viewer with every easing function in the catalogue.
//! - The shared controls: duration slider, layer toggles, restart buttons.
//!
//! How to run
//! ```bash
//! cargo run --example catalogue
//! ```
//!
//! Hover a graph to highlight the produced point nearest to the pointer
//! together with its "(ms, value)" readout.

fn main() -> eframe::Result<()> {
    env_logger::init();
    easescope::run()
}
