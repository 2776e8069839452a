use std::fmt::Display;
use std::path::Path;

use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::ttf::Sdl2TtfContext;

use crate::error::{sdl_error, SdlError};

/// Loads a BMP image into a texture on the rendering device.
///
/// The staging surface lives only inside this call; on both paths it is
/// released before the result reaches the caller.
pub fn load_bmp<'r, C>(
    path: &Path,
    creator: &'r TextureCreator<C>,
) -> Result<Texture<'r>, SdlError> {
    let surface = Surface::load_bmp(path).map_err(sdl_error("LoadBMP"))?;
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        surface.width(),
        surface.height()
    );
    upload(
        surface,
        |s| creator.create_texture_from_surface(s),
        "CreateTextureFromSurface",
    )
}

/// Loads an image (PNG or BMP) straight into a texture via SDL_image.
pub fn load_image<'r, C>(
    path: &Path,
    creator: &'r TextureCreator<C>,
) -> Result<Texture<'r>, SdlError> {
    let texture = creator
        .load_texture(path)
        .map_err(sdl_error("LoadTexture"))?;
    let query = texture.query();
    log::debug!("loaded {} ({}x{})", path.display(), query.width, query.height);
    Ok(texture)
}

/// Renders a string with a TTF font into a texture.
///
/// The font is opened for this call only and closed again on every path,
/// failure included.
pub fn render_text<'r, C>(
    text: &str,
    font_path: &Path,
    color: Color,
    point_size: u16,
    ttf: &Sdl2TtfContext,
    creator: &'r TextureCreator<C>,
) -> Result<Texture<'r>, SdlError> {
    let font = ttf
        .load_font(font_path, point_size)
        .map_err(sdl_error("TTF_OpenFont"))?;
    let surface = font
        .render(text)
        .blended(color)
        .map_err(|e| SdlError::new("TTF_RenderText", e.to_string()))?;
    upload(
        surface,
        |s| creator.create_texture_from_surface(s),
        "CreateTextureFromSurface",
    )
}

/// Second half of every two-phase load: hand the staging value to the
/// rendering device, then drop it. A failed upload must not leak the staging
/// surface, and a leaked one would outlive an early return, so the drop is
/// explicit and happens before either result is returned.
fn upload<S, T, E: Display>(
    staging: S,
    create: impl FnOnce(&S) -> Result<T, E>,
    operation: &'static str,
) -> Result<T, SdlError> {
    let result = create(&staging).map_err(|e| SdlError::new(operation, e.to_string()));
    drop(staging);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingStaging<'a> {
        releases: &'a Cell<u32>,
    }

    impl Drop for CountingStaging<'_> {
        fn drop(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    #[test]
    fn failed_upload_releases_staging_and_builds_nothing() {
        let releases = Cell::new(0);
        let created = Cell::new(0);

        let result = upload(
            CountingStaging {
                releases: &releases,
            },
            |_| -> Result<(), String> {
                created.set(created.get() + 1);
                Err("out of memory".to_string())
            },
            "CreateTextureFromSurface",
        );

        let err = result.unwrap_err();
        assert_eq!(err.operation, "CreateTextureFromSurface");
        assert_eq!(err.message, "out of memory");
        assert_eq!(releases.get(), 1);
        assert_eq!(created.get(), 1);
    }

    #[test]
    fn successful_upload_releases_staging_exactly_once() {
        let releases = Cell::new(0);

        let texture = upload(
            CountingStaging {
                releases: &releases,
            },
            |_| -> Result<u32, String> { Ok(7) },
            "CreateTextureFromSurface",
        )
        .unwrap();

        assert_eq!(texture, 7);
        assert_eq!(releases.get(), 1);
    }
}
