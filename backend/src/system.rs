use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::render::WindowCanvas;

use crate::error::{sdl_error, SdlError};

/// Input the lessons care about, already translated from raw SDL events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    // 0-based sprite sheet quadrant, from the 1-4 number keys
    SelectClip(usize),
}

impl Input {
    pub fn from_event(event: &Event) -> Option<Input> {
        match event {
            Event::Quit { .. } => Some(Input::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => Input::from_key(*key),
            _ => None,
        }
    }

    pub fn from_key(key: Keycode) -> Option<Input> {
        match key {
            Keycode::Escape => Some(Input::Quit),
            Keycode::Num1 => Some(Input::SelectClip(0)),
            Keycode::Num2 => Some(Input::SelectClip(1)),
            Keycode::Num3 => Some(Input::SelectClip(2)),
            Keycode::Num4 => Some(Input::SelectClip(3)),
            _ => None,
        }
    }
}

/// Loop-local state the event-driven lessons mutate per event and read when
/// drawing. The quit flag is sticky: once set it is never cleared, so a quit
/// request takes effect at the top of the next iteration, never mid-frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoopState {
    pub active_clip: usize,
    pub quit: bool,
}

impl LoopState {
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Quit => self.quit = true,
            Input::SelectClip(index) => self.active_clip = index,
        }
    }
}

/// The live SDL context: window, accelerated vsync renderer, event pump.
///
/// Field order matters: `canvas` drops before `_video` and `_sdl`, and any
/// texture created from the canvas borrows its `TextureCreator`, so the
/// compiler enforces the release order (textures, then renderer/window, then
/// the library itself).
pub struct System {
    pub width: u32,
    pub height: u32,
    pub canvas: WindowCanvas,
    event_pump: sdl2::EventPump,
    events: Vec<Input>,
    _video: sdl2::VideoSubsystem,
    _sdl: sdl2::Sdl,
}

impl System {
    pub fn new(title: &str, width: u32, height: u32) -> Result<System, SdlError> {
        let sdl = sdl2::init().map_err(sdl_error("SDL_Init"))?;
        let video = sdl.video().map_err(sdl_error("VideoSubsystem"))?;

        let window = match video
            .window(title, width, height)
            .position(100, 100)
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(SdlError::new("CreateWindow", e.to_string())),
        };

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| SdlError::new("CreateRenderer", e.to_string()))?;

        let event_pump = sdl.event_pump().map_err(sdl_error("EventPump"))?;

        log::debug!("renderer ready, window {}x{} \"{}\"", width, height, title);

        Ok(System {
            width,
            height,
            canvas,
            event_pump,
            events: Vec::new(),
            _video: video,
            _sdl: sdl,
        })
    }

    /// Drains all pending events without blocking and returns the ones that
    /// translate to lesson input, in arrival order.
    pub fn poll_input(&mut self) -> &[Input] {
        self.events.clear();
        for event in self.event_pump.poll_iter() {
            if let Some(input) = Input::from_event(&event) {
                self.events.push(input);
            }
        }
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_select_clips() {
        assert_eq!(Input::from_key(Keycode::Num1), Some(Input::SelectClip(0)));
        assert_eq!(Input::from_key(Keycode::Num3), Some(Input::SelectClip(2)));
        assert_eq!(Input::from_key(Keycode::Num4), Some(Input::SelectClip(3)));
    }

    #[test]
    fn escape_requests_quit() {
        assert_eq!(Input::from_key(Keycode::Escape), Some(Input::Quit));
    }

    #[test]
    fn unbound_keys_are_discarded() {
        assert_eq!(Input::from_key(Keycode::Space), None);
        assert_eq!(Input::from_key(Keycode::Num5), None);
    }

    #[test]
    fn window_close_requests_quit() {
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(Input::from_event(&event), Some(Input::Quit));
    }

    #[test]
    fn key_three_activates_third_clip() {
        let mut state = LoopState::default();
        state.apply(Input::from_key(Keycode::Num3).unwrap());
        assert_eq!(state.active_clip, 2);
        assert!(!state.quit);
    }

    #[test]
    fn quit_flag_is_sticky() {
        let mut state = LoopState::default();
        state.apply(Input::Quit);
        state.apply(Input::SelectClip(1));
        assert!(state.quit);
        assert_eq!(state.active_clip, 1);
    }
}
