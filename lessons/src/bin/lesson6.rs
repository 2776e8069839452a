//! Lesson 6: render a string with a TTF font and show it centered until the
//! user quits.

use std::process::ExitCode;

use backend::{render, resources, texture, DrawOpts, LoopState, SdlError, System};
use sdl2::pixels::Color;

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;

fn run() -> Result<(), SdlError> {
    let mut system = System::new("jhare-sdl-lesson2", SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let ttf = sdl2::ttf::init().map_err(|e| SdlError::new("TTF_Init", e.to_string()))?;
    let creator = system.canvas.texture_creator();

    let res = resources::resource_path("lesson6")?;
    let color = Color::RGBA(255, 255, 255, 255);
    let text = texture::render_text(
        "TTF fonts are cool!",
        &res.join("sample.ttf"),
        color,
        64,
        &ttf,
        &creator,
    )?;

    let q = text.query();
    let (x, y) = render::centered((SCREEN_WIDTH, SCREEN_HEIGHT), (q.width, q.height));

    let mut state = LoopState::default();
    while !state.quit {
        for &input in system.poll_input() {
            state.apply(input);
        }

        system.canvas.clear();
        render::draw(&mut system.canvas, &text, &DrawOpts::at(x, y))?;
        system.canvas.present();
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
