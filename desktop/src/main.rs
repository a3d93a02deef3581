use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use argh::FromArgs;
use log::{error, info};
use scoreboard_core::{AssetStore, ConfigUpdate, Scoreboard, compose};

use crate::dir_store::DirStore;
use crate::minifb_display::MinifbDisplay;

mod dir_store;
mod minifb_display;

/// Re-render often enough for the clock to stay current.
const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

#[derive(FromArgs)]
/// Preview the scoreboard in a window
struct Args {
    /// directory holding the bitfile assets
    #[argh(option, short = 'a', default = "PathBuf::from(\"assets/bitfiles\")")]
    assets: PathBuf,

    /// configuration JSON file, reloaded with R
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// show the whole canvas instead of the transmitted frame
    #[argh(switch, short = 'f')]
    full: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    log::info!("Scoreboard preview started");

    let scoreboard = Scoreboard::new(DirStore::new_with_base_path(args.assets));
    if let Some(path) = &args.config {
        load_config(&scoreboard, path);
    }

    let mut display = MinifbDisplay::default();
    let mut last_render: Option<Instant> = None;

    while display.is_open() {
        if display.reload_requested() {
            if let Some(path) = &args.config {
                load_config(&scoreboard, path);
                last_render = None;
            }
        }

        if last_render.is_none_or(|at| at.elapsed() >= REFRESH_INTERVAL) {
            if args.full {
                let canvas = compose::render_now(scoreboard.catalog(), &scoreboard.config());
                display.show_canvas(&canvas);
            } else {
                display.show_frame(&scoreboard.generate_binary());
            }
            last_render = Some(Instant::now());
        } else {
            display.update();
        }
    }
}

fn load_config<S: AssetStore>(scoreboard: &Scoreboard<S>, path: &Path) {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read {:?}: {}", path, e);
            return;
        }
    };
    match ConfigUpdate::from_json(&data) {
        Ok(update) => {
            info!("Loaded configuration from {:?}", path);
            scoreboard.update_config(update);
        }
        Err(e) => error!("Failed to parse {:?}: {}", path, e),
    }
}
