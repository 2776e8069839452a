//! Lesson 2: load a BMP and stretch it over the whole window for three
//! one-second frames.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use backend::{resources, sdl_error, texture, SdlError, System};

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;

fn run() -> Result<(), SdlError> {
    let mut system = System::new("jhare-sdl-lesson2", SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let creator = system.canvas.texture_creator();

    let res = resources::resource_path("lesson2")?;
    let hello = texture::load_bmp(&res.join("hello.bmp"), &creator)?;

    // A sleepy rendering loop: render and present, then take a quick break.
    for _ in 0..3 {
        system.canvas.clear();
        // no destination rect: fill the whole window
        system
            .canvas
            .copy(&hello, None, None)
            .map_err(sdl_error("RenderCopy"))?;
        system.canvas.present();
        thread::sleep(Duration::from_secs(1));
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
