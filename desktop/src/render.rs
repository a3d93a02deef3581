use std::path::PathBuf;

use argh::FromArgs;
use chrono::NaiveTime;
use log::info;
use scoreboard_core::{ConfigUpdate, Scoreboard};

use crate::dir_store::DirStore;

mod dir_store;

#[derive(FromArgs)]
/// Render one scoreboard frame to a file
struct Args {
    /// directory holding the bitfile assets
    #[argh(option, short = 'a', default = "PathBuf::from(\"assets/bitfiles\")")]
    assets: PathBuf,

    /// configuration JSON file
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// output frame path
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// clock time as HH:MM instead of the local time
    #[argh(option, short = 't', from_str_fn(parse_time))]
    time: Option<NaiveTime>,
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| format!("invalid time {value}: {e}"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let update = match &args.config {
        Some(path) => {
            let data = std::fs::read(path).expect("Failed to read configuration");
            ConfigUpdate::from_json(&data).expect("Failed to parse configuration")
        }
        None => ConfigUpdate::default(),
    };

    let scoreboard = Scoreboard::new(DirStore::new_with_base_path(args.assets));
    let config = scoreboard.update_config(update);
    info!("Rendering {:?}", config);

    let frame = match args.time {
        Some(time) => scoreboard.generate_binary_at(time),
        None => scoreboard.generate_binary(),
    };
    std::fs::write(&args.output, frame).expect("Failed to write frame");
    info!("Wrote {} bytes to {:?}", frame.len(), args.output);
}
