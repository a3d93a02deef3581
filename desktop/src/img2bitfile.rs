use argh::FromArgs;
use log::{info, warn};
use scoreboard_core::{
    bitmap::Bitmap,
    canvas::{HEIGHT, WIDTH},
};

#[derive(FromArgs)]
/// Conversion options
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input_path: String,

    /// output bitfile path
    #[argh(option, short = 'o')]
    output_path: String,

    /// luma from which a pixel is lit
    #[argh(option, default = "128")]
    threshold: u8,

    /// light up dark pixels instead
    #[argh(switch)]
    invert: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let image = image::open(&args.input_path)
        .expect("Failed to open input image")
        .into_luma8();

    let (width, height) = image.dimensions();
    if width as usize > WIDTH || height as usize > HEIGHT {
        warn!(
            "Input image is {}x{}, only {}x{} will be visible",
            width, height, WIDTH, HEIGHT
        );
    }

    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| (image.get_pixel(x, y)[0] >= args.threshold) != args.invert)
                .collect()
        })
        .collect();
    let bitmap = Bitmap::from_rows(rows);

    let json =
        serde_json::to_string_pretty(&bitmap.to_bitfile()).expect("Failed to encode bitfile");
    std::fs::write(&args.output_path, json).expect("Failed to write bitfile");
    info!("Wrote {}x{} bitfile to {}", width, height, args.output_path);
}
