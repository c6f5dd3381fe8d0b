use tokio::net::UdpSocket;

use crate::command::{Command, FlipDirection};
use crate::errors::{Result, TelloError};

pub const DEFAULT_DRONE_HOST: &str = "192.168.10.1";
pub const CONTROL_UDP_PORT: u16 = 8889;

const RESPONSE_BUFFER_LEN: usize = 512;

/// A connection to the drone's command port.
///
/// The client owns a single UDP socket, bound to an ephemeral local port and
/// connected to the drone, for its whole lifetime; dropping the client closes
/// the socket. Every method resolves after exactly one datagram send - there
/// are no retries, timeouts or background tasks.
#[derive(Debug)]
pub struct Tello {
    sock: UdpSocket,
}

impl Tello {
    /// Opens a socket to the drone at the default address,
    /// `192.168.10.1:8889`.
    pub async fn new() -> Result<Self> {
        Self::with_peer(DEFAULT_DRONE_HOST, CONTROL_UDP_PORT).await
    }

    /// Opens a socket to a drone at a non-default address.
    pub async fn with_peer(host: &str, port: u16) -> Result<Self> {
        let drone_address = format!("{host}:{port}");
        println!("[Tello] CONNECT {drone_address}");

        let sock = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(TelloError::SocketInit)?;
        sock.connect(&drone_address)
            .await
            .map_err(TelloError::SocketInit)?;

        Ok(Self { sock })
    }

    /// Puts the drone in command mode. Must be sent before any control
    /// command; the drone answers `ok` (read it with [`Tello::recv_response`]
    /// if wanted).
    pub async fn connect(&self) -> Result<()> {
        self.send_command(Command::EnterSdkMode).await
    }

    pub async fn take_off(&self) -> Result<()> {
        self.send_command(Command::TakeOff).await
    }

    pub async fn land(&self) -> Result<()> {
        self.send_command(Command::Land).await
    }

    /// Stops and hovers in place.
    pub async fn stop(&self) -> Result<()> {
        self.send_command(Command::Stop).await
    }

    pub async fn stream_on(&self) -> Result<()> {
        self.send_command(Command::StreamOn).await
    }

    pub async fn stream_off(&self) -> Result<()> {
        self.send_command(Command::StreamOff).await
    }

    /// Cuts the motors immediately.
    pub async fn emergency(&self) -> Result<()> {
        self.send_command(Command::Emergency).await
    }

    /// Ascends `distance` centimeters, clamped to 20..=500.
    pub async fn up(&self, distance: i32) -> Result<()> {
        self.send_command(Command::Up(distance)).await
    }

    /// Descends `distance` centimeters, clamped to 20..=500.
    pub async fn down(&self, distance: i32) -> Result<()> {
        self.send_command(Command::Down(distance)).await
    }

    pub async fn left(&self, distance: i32) -> Result<()> {
        self.send_command(Command::Left(distance)).await
    }

    pub async fn right(&self, distance: i32) -> Result<()> {
        self.send_command(Command::Right(distance)).await
    }

    pub async fn forward(&self, distance: i32) -> Result<()> {
        self.send_command(Command::Forward(distance)).await
    }

    pub async fn back(&self, distance: i32) -> Result<()> {
        self.send_command(Command::Back(distance)).await
    }

    /// Rotates clockwise by `degrees`, clamped to 1..=360.
    pub async fn rotate_clockwise(&self, degrees: i32) -> Result<()> {
        self.send_command(Command::RotateClockwise(degrees)).await
    }

    /// Rotates counter-clockwise by `degrees`, clamped to 1..=360.
    pub async fn rotate_counter_clockwise(&self, degrees: i32) -> Result<()> {
        self.send_command(Command::RotateCounterClockwise(degrees))
            .await
    }

    /// Flips in the given direction, one of `l`, `r`, `f`, `b`. Any other
    /// letter is dropped without sending anything, matching how the drone
    /// itself ignores malformed commands.
    pub async fn flip(&self, direction: char) -> Result<()> {
        match FlipDirection::from_char(direction) {
            Some(d) => self.send_command(Command::Flip(d)).await,
            None => Ok(()),
        }
    }

    /// Flies to `(x, y, z)` centimeters relative to the current position at
    /// `speed` cm/s. Each axis is clamped to -500..=500 and the speed to
    /// 10..=100, independently of one another.
    pub async fn fly_to(&self, x: i32, y: i32, z: i32, speed: i32) -> Result<()> {
        self.send_command(Command::Go { x, y, z, speed }).await
    }

    /// Transmits a command as one datagram.
    pub async fn send_command(&self, command: Command) -> Result<()> {
        let msg = command.to_string();
        println!("[Tello] SEND {msg}");

        self.sock
            .send(msg.as_bytes())
            .await
            .map_err(TelloError::Send)?;

        Ok(())
    }

    /// Reads one datagram from the drone, up to 512 bytes, and returns it as
    /// text.
    ///
    /// Blocks until a datagram arrives - the drone acknowledges commands but
    /// the protocol carries nothing to match a reply to the command that
    /// caused it, so callers pair them by ordering if they care.
    pub async fn recv_response(&self) -> Result<String> {
        let mut buf = vec![0; RESPONSE_BUFFER_LEN];
        let n = self
            .sock
            .recv(&mut buf)
            .await
            .map_err(TelloError::Receive)?;

        buf.truncate(n);
        let response = String::from_utf8(buf)?;
        println!("[Tello] RECEIVED {response}");

        Ok(response)
    }
}
