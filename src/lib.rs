//! A minimal client for controlling a Tello drone with text commands over
//! UDP.
//!
//! Each method on [`Tello`] formats one ASCII command, clamps its parameters
//! to the ranges the drone accepts and transmits it as a single datagram.
//! The drone's replies are read separately with [`Tello::recv_response`] -
//! the protocol has no request/response pairing, so none is invented here.
//!
//! ```no_run
//! use tello_udp::{Tello, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let drone = Tello::new().await?;
//!     drone.connect().await?;
//!     drone.take_off().await?;
//!     drone.land().await?;
//!     Ok(())
//! }
//! ```

mod command;
mod errors;
mod tello;

pub use command::{Command, FlipDirection};
pub use errors::{Result, TelloError};
pub use tello::{Tello, CONTROL_UDP_PORT, DEFAULT_DRONE_HOST};
