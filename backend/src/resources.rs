use std::path::PathBuf;

use crate::error::{sdl_error, SdlError};

/// Resolves the asset directory for a lesson: `<base>/res/<lesson>/`, where
/// base is SDL's notion of the application directory (next to the binary).
pub fn resource_path(lesson: &str) -> Result<PathBuf, SdlError> {
    let base = sdl2::filesystem::base_path().map_err(sdl_error("GetBasePath"))?;
    let mut path = PathBuf::from(base);
    path.push("res");
    if !lesson.is_empty() {
        path.push(lesson);
    }
    Ok(path)
}
