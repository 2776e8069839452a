//! Lesson 4: PNG loading via SDL_image, a 40px-tiled background covering the
//! window, a centered foreground, and an event loop that quits on Escape or
//! window close.

use std::process::ExitCode;

use backend::{render, resources, sdl_error, texture, DrawOpts, LoopState, SdlError, System};
use sdl2::image::InitFlag;

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;

const TILE_SIZE: u32 = 40;

fn run() -> Result<(), SdlError> {
    let mut system = System::new("jhare-sdl-lesson2", SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let _image_ctx = sdl2::image::init(InitFlag::PNG).map_err(sdl_error("IMG_Init"))?;
    let creator = system.canvas.texture_creator();

    let res = resources::resource_path("lesson4")?;
    let background = texture::load_image(&res.join("background.png"), &creator)?;
    let image = texture::load_image(&res.join("image.png"), &creator)?;

    let fg = image.query();
    let (x, y) = render::centered((SCREEN_WIDTH, SCREEN_HEIGHT), (fg.width, fg.height));

    let mut state = LoopState::default();
    while !state.quit {
        for &input in system.poll_input() {
            state.apply(input);
        }

        system.canvas.clear();

        for i in 0..render::tile_count((SCREEN_WIDTH, SCREEN_HEIGHT), TILE_SIZE) {
            let (tx, ty) = render::tile_position(i, SCREEN_WIDTH, TILE_SIZE);
            let tile = DrawOpts {
                x: tx,
                y: ty,
                size: Some((TILE_SIZE, TILE_SIZE)),
                ..DrawOpts::default()
            };
            render::draw(&mut system.canvas, &background, &tile)?;
        }
        render::draw(&mut system.canvas, &image, &DrawOpts::at(x, y))?;

        // vsync paces the loop, not an explicit delay
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
