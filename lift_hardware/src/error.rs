use thiserror::Error;

#[derive(Debug, Error)]
pub enum HwError {
    #[error("persistence io: {0}")]
    Io(#[from] std::io::Error),
    #[error("gpio: {0}")]
    Gpio(String),
}
