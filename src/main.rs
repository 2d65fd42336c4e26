use std::fs::File;
use std::time::Instant;

use anyhow::Context;
use log::{error, info, LevelFilter};
use pixels::{Pixels, SurfaceTexture};
use simplelog::{Config, SimpleLogger, WriteLogger};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

mod audio;
mod draw;
mod game;
mod menu;
mod pos;
mod screens;
mod state;

use audio::Audio;
use state::{App, Key};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const CELL: u32 = 20;
const BORDER: u32 = 40;
const PLAY_W: u32 = WIDTH - 2 * BORDER;
const PLAY_H: u32 = HEIGHT - 2 * BORDER;
const GRID_W: i32 = (PLAY_W / CELL) as i32;
const GRID_H: i32 = (PLAY_H / CELL) as i32;

const BINDINGS: [(VirtualKeyCode, Key); 13] = [
    (VirtualKeyCode::Up, Key::Up),
    (VirtualKeyCode::W, Key::Up),
    (VirtualKeyCode::Down, Key::Down),
    (VirtualKeyCode::S, Key::Down),
    (VirtualKeyCode::Left, Key::Left),
    (VirtualKeyCode::A, Key::Left),
    (VirtualKeyCode::Right, Key::Right),
    (VirtualKeyCode::D, Key::Right),
    (VirtualKeyCode::Space, Key::Space),
    (VirtualKeyCode::Return, Key::Enter),
    (VirtualKeyCode::P, Key::P),
    (VirtualKeyCode::R, Key::R),
    (VirtualKeyCode::M, Key::M),
];

fn init_logging() {
    match File::create("neon-snake.log") {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
        }
        Err(_) => {
            let _ = SimpleLogger::init(LevelFilter::Info, Config::default());
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = WindowBuilder::new()
        .with_title("Neon Snake")
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to open the window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(WIDTH, HEIGHT, surface_texture).context("failed to create the framebuffer")?
    };

    let mut app = App::new(Audio::new());
    let mut mouse = (0u32, 0u32);
    let mut last_update = Instant::now();

    info!("neon snake started");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if let Event::RedrawRequested(_) = event {
            screens::draw(&app, pixels.frame_mut(), mouse, input.mouse_held(0));
            if let Err(err) = pixels.render() {
                error!("render failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            // Handle quit
            if input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() || input.destroyed() {
                info!("quit");
                *control_flow = ControlFlow::Exit;
                return;
            }

            for (code, key) in BINDINGS {
                if input.key_pressed(code) {
                    app.handle_key(key);
                }
            }

            // Track the cursor in framebuffer coordinates so hover works on hidpi
            if let Some(pos) = input.mouse() {
                let (mx, my) = pixels
                    .window_pos_to_pixel(pos)
                    .unwrap_or_else(|clipped| pixels.clamp_pixel_pos(clipped));
                mouse = (mx as u32, my as u32);
            }

            if input.mouse_pressed(0) && app.handle_click(mouse.0, mouse.1) {
                info!("quit");
                *control_flow = ControlFlow::Exit;
                return;
            }

            if last_update.elapsed() >= app.tick_len() {
                last_update = Instant::now();
                app.tick();
            }

            window.request_redraw();
        }
    });
}
