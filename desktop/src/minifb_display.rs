use log::{info, warn};
use scoreboard_core::{
    Canvas,
    canvas::{HEIGHT, PIXEL_COUNT, WIDTH},
    encoder,
};

const LIT: u32 = 0xFFFFB000;
const UNLIT: u32 = 0xFF101010;

/// Window simulating the LED matrix.
pub struct MinifbDisplay {
    display_buffer: Box<[u32; PIXEL_COUNT]>,
    window: minifb::Window,
    scale: minifb::Scale,
}

impl Default for MinifbDisplay {
    fn default() -> Self {
        let mut ret = Self {
            display_buffer: Box::new([0; PIXEL_COUNT]),
            window: Self::create_window(minifb::Scale::X4),
            scale: minifb::Scale::X4,
        };

        ret.display_buffer.fill(UNLIT);

        ret
    }
}

impl MinifbDisplay {
    fn create_window(scale: minifb::Scale) -> minifb::Window {
        let options = minifb::WindowOptions {
            borderless: false,
            title: true,
            resize: true,
            scale,
            ..minifb::WindowOptions::default()
        };
        let mut window = minifb::Window::new("Scoreboard Preview", WIDTH, HEIGHT, options)
            .unwrap_or_else(|e| {
                panic!("Unable to open window: {}", e);
            });

        window.set_target_fps(10);
        window
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    pub fn reload_requested(&self) -> bool {
        self.window.is_key_pressed(minifb::Key::R, minifb::KeyRepeat::No)
    }

    pub fn update(&mut self) {
        if self.window.is_key_pressed(minifb::Key::S, minifb::KeyRepeat::No) {
            info!("Toggling scale");
            self.scale = match self.scale {
                minifb::Scale::X2 => minifb::Scale::X4,
                minifb::Scale::X4 => minifb::Scale::X8,
                _ => minifb::Scale::X2,
            };
            self.window = Self::create_window(self.scale);
        }
        self.update_display();
    }

    fn update_display(&mut self) {
        if let Err(e) = self
            .window
            .update_with_buffer(&*self.display_buffer, WIDTH, HEIGHT)
        {
            warn!("Failed to update window: {}", e);
        }
    }

    /// Shows a frame the way the controller would receive it.
    pub fn show_frame(&mut self, frame: &[u8]) {
        match encoder::decode(frame) {
            Ok(canvas) => self.show_canvas(&canvas),
            Err(e) => warn!("Not showing frame: {}", e),
        }
    }

    pub fn show_canvas(&mut self, canvas: &Canvas) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                self.display_buffer[y * WIDTH + x] = if canvas.get_pixel(x as i32, y as i32) {
                    LIT
                } else {
                    UNLIT
                };
            }
        }
        self.update_display();
    }
}
