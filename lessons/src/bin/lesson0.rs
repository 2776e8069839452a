//! Lesson 0: make sure SDL is set up properly.

use std::process::ExitCode;

use backend::{resources, sdl_error, SdlError};

fn run() -> Result<(), SdlError> {
    let _sdl = sdl2::init().map_err(sdl_error("SDL_Init"))?;
    println!("Resource path is {}", resources::resource_path("")?.display());
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
