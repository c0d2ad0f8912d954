use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("no screens available")]
    NoScreens,

    #[error("Carbon call {call} failed with status {status}")]
    Carbon { call: &'static str, status: i32 },

    #[error("could not install {0} event monitor")]
    Monitor(&'static str),

    #[error("could not register Objective-C class {0}")]
    ClassRegistration(&'static str),

    #[error("event bus already initialized")]
    EventBusInitialized,

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(&'static str),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Carbon {
            call: "RegisterEventHotKey",
            status: -9878,
        };
        assert_eq!(
            err.to_string(),
            "Carbon call RegisterEventHotKey failed with status -9878"
        );

        let err = AppError::Monitor("global key");
        assert_eq!(err.to_string(), "could not install global key event monitor");

        assert_eq!(AppError::NoScreens.to_string(), "no screens available");
        assert_eq!(
            AppError::ClassRegistration("KeyshowView").to_string(),
            "could not register Objective-C class KeyshowView"
        );
    }

    #[test]
    fn test_unsupported_platform_names_the_os() {
        let err = AppError::UnsupportedPlatform("linux");
        assert!(err.to_string().contains("linux"));
    }
}
