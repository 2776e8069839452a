//! Lesson 3: tile a background over the four quadrants around the origin and
//! center a foreground image on top of it.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use backend::{render, resources, texture, DrawOpts, SdlError, System};

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 480;

fn run() -> Result<(), SdlError> {
    let mut system = System::new("jhare-sdl-lesson2", SCREEN_WIDTH, SCREEN_HEIGHT)?;
    let creator = system.canvas.texture_creator();

    let res = resources::resource_path("lesson3")?;
    let background = texture::load_bmp(&res.join("background.bmp"), &creator)?;
    let image = texture::load_bmp(&res.join("image.bmp"), &creator)?;

    for _ in 0..3 {
        system.canvas.clear();

        // cover the window with the background, one copy per quadrant
        let bg = background.query();
        let (bw, bh) = (bg.width as i32, bg.height as i32);
        for (x, y) in [(0, 0), (bw, 0), (0, bh), (bw, bh)] {
            render::draw(&mut system.canvas, &background, &DrawOpts::at(x, y))?;
        }

        let fg = image.query();
        let (x, y) = render::centered((SCREEN_WIDTH, SCREEN_HEIGHT), (fg.width, fg.height));
        render::draw(&mut system.canvas, &image, &DrawOpts::at(x, y))?;

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
