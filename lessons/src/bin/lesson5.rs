//! Lesson 5: sprite sheet clipping. The 200x200 sheet holds four 100x100
//! quadrants; keys 1-4 pick which one is drawn centered.

use std::process::ExitCode;

use backend::{render, resources, sdl_error, texture, DrawOpts, LoopState, SdlError, System};
use sdl2::image::InitFlag;

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;

const CLIP_WIDTH: u32 = 100;
const CLIP_HEIGHT: u32 = 100;

fn run() -> Result<(), SdlError> {
    let mut system = System::new("jhare-sdl-lesson2", SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let _image_ctx = sdl2::image::init(InitFlag::PNG).map_err(sdl_error("IMG_Init"))?;
    let creator = system.canvas.texture_creator();

    let res = resources::resource_path("lesson5")?;
    let image = texture::load_image(&res.join("image.png"), &creator)?;

    let clips = render::sheet_clips(CLIP_WIDTH, CLIP_HEIGHT);
    let (x, y) = render::centered((SCREEN_WIDTH, SCREEN_HEIGHT), (CLIP_WIDTH, CLIP_HEIGHT));

    let mut state = LoopState::default();
    while !state.quit {
        for &input in system.poll_input() {
            state.apply(input);
        }

        system.canvas.clear();
        // destination size comes from the active clip
        let opts = DrawOpts::clipped(x, y, clips[state.active_clip]);
        render::draw(&mut system.canvas, &image, &opts)?;
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
