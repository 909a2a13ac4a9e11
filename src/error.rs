use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WinmanError {
    #[error("minimum window size must be at least 1x1, got {width}x{height}")]
    InvalidMinimumSize { width: i32, height: i32 },
}
