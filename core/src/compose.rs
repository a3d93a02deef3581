use chrono::{Local, NaiveTime, Timelike};
use embedded_graphics::prelude::Point;
use log::trace;

use crate::{
    assets::{AssetStore, Catalog},
    bitmap::Bitmap,
    canvas::{Canvas, WIDTH},
    config::Configuration,
};

pub const CHAR_SPACING: i32 = 1;
/// Glyphs are clipped to a square cell of this size.
pub const GLYPH_CELL: usize = 7;
/// Fixed advance of the clock font, before spacing.
pub const CLOCK_PITCH: i32 = 4;
pub const SCORE_MARGIN: i32 = 20;

pub const CLOCK_ORIGIN: Point = Point::new(100, 28);
pub const BACKGROUND_ORIGIN: Point = Point::new(0, 20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn name_origin(self) -> Point {
        match self {
            Side::Home => Point::new(150, 21),
            Side::Away => Point::new(150, 36),
        }
    }

    pub fn logo_origin(self) -> Point {
        match self {
            Side::Home => Point::new(120, 0),
            Side::Away => Point::new(120, 32),
        }
    }

    pub fn score_origin(self) -> Point {
        Point::new(WIDTH as i32 - SCORE_MARGIN, self.name_origin().y)
    }
}

/// `HH:MM`, 24 hour clock.
pub fn clock_text(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Renders `config` using the current local time for the clock.
pub fn render_now<S: AssetStore>(catalog: &Catalog<S>, config: &Configuration) -> Canvas {
    render(catalog, config, Local::now().time())
}

/// Composes a full scoreboard frame.
///
/// Missing glyphs and images never fail the render: a missing glyph leaves
/// an empty cell, a missing image is skipped.
pub fn render<S: AssetStore>(
    catalog: &Catalog<S>,
    config: &Configuration,
    time: NaiveTime,
) -> Canvas {
    let mut canvas = Canvas::new();

    draw_clock(&mut canvas, catalog, &clock_text(time), CLOCK_ORIGIN);

    if !config.image.is_empty() {
        if let Some(image) = catalog.load_image(&config.image) {
            canvas.draw_bitmap(&image, BACKGROUND_ORIGIN.x, BACKGROUND_ORIGIN.y);
        }
    }

    draw_side(&mut canvas, catalog, Side::Home, &config.home_team, &config.home_score);
    draw_side(&mut canvas, catalog, Side::Away, &config.away_team, &config.away_score);

    canvas
}

fn draw_side<S: AssetStore>(
    canvas: &mut Canvas,
    catalog: &Catalog<S>,
    side: Side,
    team: &str,
    score: &str,
) {
    if !team.is_empty() {
        draw_text(canvas, catalog, team, side.name_origin());
        // Team logos are stored under the team name.
        if let Some(logo) = catalog.load_image(team) {
            let origin = side.logo_origin();
            canvas.draw_bitmap(&logo, origin.x, origin.y);
        }
    }

    if !score.is_empty() {
        draw_text(canvas, catalog, score, side.score_origin());
    }
}

/// Draws `text` with a fixed pitch of `CLOCK_PITCH + CHAR_SPACING`.
pub fn draw_clock<S: AssetStore>(
    canvas: &mut Canvas,
    catalog: &Catalog<S>,
    text: &str,
    origin: Point,
) -> i32 {
    let mut x = origin.x;
    for ch in text.to_uppercase().chars() {
        let glyph = catalog.load_char(ch);
        draw_glyph(canvas, glyph.as_deref(), x, origin.y);
        x += CLOCK_PITCH + CHAR_SPACING;
    }
    x
}

/// Draws `text` with every glyph advancing by its own width (at most one
/// cell) plus `CHAR_SPACING`. Returns the cursor position after the text.
pub fn draw_text<S: AssetStore>(
    canvas: &mut Canvas,
    catalog: &Catalog<S>,
    text: &str,
    origin: Point,
) -> i32 {
    let mut x = origin.x;
    for ch in text.to_uppercase().chars() {
        let glyph = catalog.load_char(ch);
        let width = draw_glyph(canvas, glyph.as_deref(), x, origin.y);
        x += width as i32 + CHAR_SPACING;
    }
    x
}

/// Draws a glyph clipped to its cell and returns its advance width.
/// A missing glyph occupies a full blank cell.
pub fn draw_glyph(canvas: &mut Canvas, glyph: Option<&Bitmap>, x: i32, y: i32) -> usize {
    let Some(glyph) = glyph else {
        return GLYPH_CELL;
    };
    trace!("Drawing {}x{} glyph at ({}, {})", glyph.width(), glyph.height(), x, y);
    canvas.draw_bitmap_clipped(glyph, x, y, GLYPH_CELL, GLYPH_CELL);
    glyph.width().min(GLYPH_CELL)
}
