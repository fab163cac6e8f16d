//! Terminal pathfinding visualiser using crossterm.
//!
//! Run: cargo run --bin pathviz

use pathviz_core::{
    VisualiserConfig,
    app::{App, AppConfig},
};
use pathviz_crossterm::CrosstermDriver;
use pathviz_lib::Visualiser;

fn main() {
    let config = VisualiserConfig::default();
    let visualiser = match Visualiser::new(&config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let size = visualiser.screen_size();
    let mut app = App::new(AppConfig {
        model: visualiser,
        driver: CrosstermDriver::new(),
        width: size.x,
        height: size.y,
    });

    if let Err(e) = app.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
