//! SDL2 window, keyboard sampling and frame pacing.

use log::debug;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::{Error, Result};
use crate::input::InputState;
use crate::render::FrameBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_ms: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, target_fps: u32) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_ms: 1000 / u64::from(target_fps.max(1)),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in seconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> f32 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        if delta_time < self.frame_target_ms {
            let time_to_wait = self.frame_target_ms - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time as f32 / 1000.0
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: `texture` borrows from `texture_creator` and must drop first.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    print_requested: bool,
    width: u32,
    height: u32,
}

fn sdl_error(e: impl ToString) -> Error {
    Error::Window(e.to_string())
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(sdl_error)?;
        let video_subsystem = sdl_context.video().map_err(sdl_error)?;
        let timer_subsystem = sdl_context.timer().map_err(sdl_error)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(sdl_error)?;

        let canvas = window.into_canvas().build().map_err(sdl_error)?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(sdl_error)?;
        let texture = Self::create_texture(&texture_creator, width, height)?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            print_requested: false,
            width,
            height,
        })
    }

    fn create_texture(
        texture_creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<sdl2::render::Texture<'static>> {
        // SAFETY: the creator is heap-allocated and owned by the Window, which
        // drops the texture before the creator (struct field order).
        let texture_creator: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator as *const _) };
        texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(sdl_error)
    }

    /// Drains pending events. Escape or closing the window quits; a press of
    /// P is remembered for the next [`Window::input_state`].
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    repeat: false,
                    ..
                } => self.print_requested = true,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } if w > 0 && h > 0 => result = WindowEvent::Resize(w as u32, h as u32),
                _ => {}
            }
        }
        result
    }

    /// Samples which controls are held right now.
    pub fn input_state(&mut self) -> InputState {
        let keys = self.event_pump.keyboard_state();
        let held = |code| keys.is_scancode_pressed(code);

        let input = InputState {
            forward: held(Scancode::W),
            back: held(Scancode::S),
            left: held(Scancode::Q),
            right: held(Scancode::E),
            up: held(Scancode::Space),
            down: held(Scancode::LShift) || held(Scancode::RShift),
            roll_right: held(Scancode::Right),
            roll_left: held(Scancode::Left),
            pitch_down: held(Scancode::Up),
            pitch_up: held(Scancode::Down),
            yaw_left: held(Scancode::A),
            yaw_right: held(Scancode::D),
            print_camera: self.print_requested,
        };
        self.print_requested = false;
        input
    }

    pub fn present(&mut self, frame_buffer: &FrameBuffer) -> Result<()> {
        self.texture
            .update(None, frame_buffer.as_bytes(), frame_buffer.pitch())
            .map_err(sdl_error)?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        debug!("recreating {width}x{height} streaming texture");
        self.texture = Self::create_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
