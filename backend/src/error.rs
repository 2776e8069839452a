use thiserror::Error;

/// A failed SDL call: which operation failed plus the library's error string.
///
/// The `Display` form is the diagnostic line the lessons print on stdout
/// before exiting, e.g. `LoadBMP error: Couldn't open hello.bmp`.
#[derive(Debug, Error)]
#[error("{operation} error: {message}")]
pub struct SdlError {
    pub operation: &'static str,
    pub message: String,
}

impl SdlError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> SdlError {
        SdlError {
            operation,
            message: message.into(),
        }
    }
}

/// Adapter for the `Result<_, String>` results most sdl2 calls return.
///
/// Usage: `sdl2::init().map_err(sdl_error("SDL_Init"))?`
pub fn sdl_error(operation: &'static str) -> impl FnOnce(String) -> SdlError {
    move |message| SdlError { operation, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_operation_then_library_message() {
        let err = SdlError::new("LoadBMP", "boom");
        assert_eq!(err.to_string(), "LoadBMP error: boom");
    }

    #[test]
    fn sdl_error_captures_operation_name() {
        let err: Result<(), String> = Err("no video device".to_string());
        let err = err.map_err(sdl_error("CreateWindow")).unwrap_err();
        assert_eq!(err.operation, "CreateWindow");
        assert_eq!(err.to_string(), "CreateWindow error: no video device");
    }
}
