pub mod assets;
pub mod bitmap;
pub mod canvas;
pub mod compose;
pub mod config;
pub mod encoder;
pub mod error;
pub mod scoreboard;

pub use assets::{AssetStore, Catalog, MemoryStore};
pub use canvas::Canvas;
pub use config::{ConfigUpdate, Configuration};
pub use encoder::{FRAME_SIZE, Frame};
pub use scoreboard::Scoreboard;
