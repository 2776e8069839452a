use sdl2::rect::Rect;
use sdl2::render::{Texture, WindowCanvas};

use crate::error::{sdl_error, SdlError};

/// One draw call, with the optional parts named.
///
/// `size` wins when given; otherwise the destination takes the clip's size,
/// or the texture's intrinsic size when there is no clip either.
#[derive(Debug, Default, Clone, Copy)]
pub struct DrawOpts {
    pub x: i32,
    pub y: i32,
    pub size: Option<(u32, u32)>,
    pub clip: Option<Rect>,
}

impl DrawOpts {
    pub fn at(x: i32, y: i32) -> DrawOpts {
        DrawOpts {
            x,
            y,
            ..DrawOpts::default()
        }
    }

    pub fn clipped(x: i32, y: i32, clip: Rect) -> DrawOpts {
        DrawOpts {
            x,
            y,
            clip: Some(clip),
            ..DrawOpts::default()
        }
    }
}

/// Resolves the destination rectangle for a draw against a texture of the
/// given intrinsic size.
pub fn dest_rect(opts: &DrawOpts, texture_size: (u32, u32)) -> Rect {
    let (w, h) = opts
        .size
        .or_else(|| opts.clip.map(|c| (c.width(), c.height())))
        .unwrap_or(texture_size);
    Rect::new(opts.x, opts.y, w, h)
}

/// Copies `texture` (or its clip region) into the current frame buffer.
/// Does not present.
pub fn draw(canvas: &mut WindowCanvas, texture: &Texture, opts: &DrawOpts) -> Result<(), SdlError> {
    let query = texture.query();
    let dest = dest_rect(opts, (query.width, query.height));
    canvas
        .copy(texture, opts.clip, dest)
        .map_err(sdl_error("RenderCopy"))
}

/// Top-left position that centers an image on the screen, using integer
/// (floor) division on both axes.
pub fn centered(screen: (u32, u32), image: (u32, u32)) -> (i32, i32) {
    (
        screen.0 as i32 / 2 - image.0 as i32 / 2,
        screen.1 as i32 / 2 - image.1 as i32 / 2,
    )
}

/// Number of whole tiles of `tile_size` that fit on the screen. A partial
/// trailing row or column is simply not drawn.
pub fn tile_count(screen: (u32, u32), tile_size: u32) -> u32 {
    (screen.0 / tile_size) * (screen.1 / tile_size)
}

/// Pixel position of tile `index` on a row-major grid of `tile_size` tiles.
pub fn tile_position(index: u32, screen_width: u32, tile_size: u32) -> (i32, i32) {
    let x_tiles = screen_width / tile_size;
    let x = index % x_tiles;
    let y = index / x_tiles;
    ((x * tile_size) as i32, (y * tile_size) as i32)
}

/// The four quadrant clips of a 2x2 sprite sheet, column-major: index 0 and 1
/// share the left column, 2 and 3 the right.
pub fn sheet_clips(clip_width: u32, clip_height: u32) -> [Rect; 4] {
    let mut clips = [Rect::new(0, 0, clip_width, clip_height); 4];
    for (i, clip) in clips.iter_mut().enumerate() {
        clip.set_x((i as i32 / 2) * clip_width as i32);
        clip.set_y((i as i32 % 2) * clip_height as i32);
    }
    clips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_uses_floor_division() {
        assert_eq!(centered((640, 480), (100, 100)), (270, 190));
        // odd sizes floor on both axes
        assert_eq!(centered((641, 481), (101, 101)), (270, 190));
    }

    #[test]
    fn centered_goes_negative_for_oversized_images() {
        assert_eq!(centered((100, 100), (300, 300)), (-100, -100));
    }

    #[test]
    fn tile_count_covers_exact_grid() {
        assert_eq!(tile_count((640, 480), 40), 192);
    }

    #[test]
    fn tile_index_maps_row_major() {
        assert_eq!(tile_position(0, 640, 40), (0, 0));
        assert_eq!(tile_position(15, 640, 40), (600, 0));
        assert_eq!(tile_position(17, 640, 40), (40, 40));
    }

    #[test]
    fn dest_defaults_to_intrinsic_size() {
        let d = dest_rect(&DrawOpts::at(10, 20), (300, 200));
        assert_eq!(d, Rect::new(10, 20, 300, 200));
    }

    #[test]
    fn dest_defaults_to_clip_size() {
        let opts = DrawOpts::clipped(5, 5, Rect::new(100, 0, 100, 100));
        assert_eq!(dest_rect(&opts, (200, 200)), Rect::new(5, 5, 100, 100));
    }

    #[test]
    fn explicit_size_overrides_clip_size() {
        let opts = DrawOpts {
            size: Some((50, 60)),
            ..DrawOpts::clipped(0, 0, Rect::new(0, 0, 100, 100))
        };
        assert_eq!(dest_rect(&opts, (200, 200)), Rect::new(0, 0, 50, 60));
    }

    #[test]
    fn sheet_clips_are_column_major_quadrants() {
        let clips = sheet_clips(100, 100);
        assert_eq!(clips[0], Rect::new(0, 0, 100, 100));
        assert_eq!(clips[1], Rect::new(0, 100, 100, 100));
        assert_eq!(clips[2], Rect::new(100, 0, 100, 100));
        assert_eq!(clips[3], Rect::new(100, 100, 100, 100));
    }
}
