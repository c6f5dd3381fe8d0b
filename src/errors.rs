use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TelloError>;

#[derive(Error, Debug)]
pub enum TelloError {
    #[error("failed to open UDP socket: {0}")]
    SocketInit(#[source] std::io::Error),

    #[error("failed to send command: {0}")]
    Send(#[source] std::io::Error),

    #[error("failed to receive response: {0}")]
    Receive(#[source] std::io::Error),

    #[error("response was not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}
