use std::path::PathBuf;

use log::{info, trace, warn};
use scoreboard_core::{assets::glyph_asset_name, bitmap::Bitmap, compose::GLYPH_CELL};

use crate::dir_store::DirStore;

mod dir_store;

/// CLI Arguments
#[derive(argh::FromArgs)]
struct Args {
    /// input font file
    #[argh(option, short = 'i')]
    input: String,

    /// output directory
    #[argh(positional)]
    output: PathBuf,

    /// characters to generate
    #[argh(option, default = "String::from(\"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789:-.\")")]
    chars: String,

    /// font size
    #[argh(option, default = "8.0", short = 's')]
    font_size: f32,

    /// coverage from which a pixel is lit
    #[argh(option, default = "128")]
    threshold: u8,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let font_file = std::fs::read(&args.input).expect("Failed to read input font file");
    let font = fontdue::Font::from_bytes(font_file.as_slice(), fontdue::FontSettings::default())
        .expect("Failed to parse font file");

    std::fs::create_dir_all(&args.output).expect("Failed to create output directory");
    let store = DirStore::new_with_base_path(args.output);

    let mut written = 0;
    for ch in args.chars.chars() {
        if !font.has_glyph(ch) {
            warn!("Font does not have glyph for character: '{}'", ch);
            continue;
        }
        let glyph = rasterize(&font, ch, args.font_size, args.threshold);
        match store.write(&glyph_asset_name(ch), &glyph) {
            Ok(()) => written += 1,
            Err(e) => warn!("Failed to write glyph '{}': {}", ch, e),
        }
    }
    info!("Glyphs: {}", written);
}

/// Rasterizes `ch` into a cell of `GLYPH_CELL` rows with the baseline on the
/// last row. Rows are as wide as the glyph, capped to the cell.
fn rasterize(font: &fontdue::Font, ch: char, font_size: f32, threshold: u8) -> Bitmap {
    let (metrics, coverage) = font.rasterize(ch, font_size);
    trace!(
        "Character: '{}', Width: {}, Height: {}, xmin: {}, ymin: {}",
        ch, metrics.width, metrics.height, metrics.xmin, metrics.ymin
    );

    let width = metrics.width.min(GLYPH_CELL);
    let mut rows = vec![vec![false; width]; GLYPH_CELL];
    let top = GLYPH_CELL as i32 - metrics.height as i32 - metrics.ymin;
    for gy in 0..metrics.height {
        let y = top + gy as i32;
        if y < 0 || y >= GLYPH_CELL as i32 {
            continue;
        }
        for gx in 0..width {
            if coverage[gy * metrics.width + gx] >= threshold {
                rows[y as usize][gx] = true;
            }
        }
    }
    Bitmap::from_rows(rows)
}
