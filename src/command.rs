use std::fmt;

// ranges accepted by the drone's text SDK
const MOVE_MIN: i32 = 20;
const MOVE_MAX: i32 = 500;
const ROTATE_MIN: i32 = 1;
const ROTATE_MAX: i32 = 360;
const GO_MIN: i32 = -500;
const GO_MAX: i32 = 500;
const SPEED_MIN: i32 = 10;
const SPEED_MAX: i32 = 100;

/// One of the four flip directions the drone accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Left,
    Right,
    Forward,
    Back,
}

impl FlipDirection {
    /// Maps a protocol direction letter to a direction, `None` for anything
    /// outside `l`, `r`, `f`, `b`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            'f' => Some(Self::Forward),
            'b' => Some(Self::Back),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Left => 'l',
            Self::Right => 'r',
            Self::Forward => 'f',
            Self::Back => 'b',
        }
    }
}

/// A single drone control command.
///
/// Parameters are carried raw; clamping to the drone's accepted ranges
/// happens when the command is rendered to wire text, so displaying a
/// command always yields something the drone will take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterSdkMode,
    TakeOff,
    Land,
    Stop,
    StreamOn,
    StreamOff,
    Emergency,
    Up(i32),
    Down(i32),
    Left(i32),
    Right(i32),
    Forward(i32),
    Back(i32),
    RotateClockwise(i32),
    RotateCounterClockwise(i32),
    Flip(FlipDirection),
    Go { x: i32, y: i32, z: i32, speed: i32 },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::EnterSdkMode => write!(f, "command"),
            Command::TakeOff => write!(f, "takeoff"),
            Command::Land => write!(f, "land"),
            Command::Stop => write!(f, "stop"),
            Command::StreamOn => write!(f, "streamon"),
            Command::StreamOff => write!(f, "streamoff"),
            Command::Emergency => write!(f, "emergency"),
            Command::Up(v) => write!(f, "up {}", v.clamp(MOVE_MIN, MOVE_MAX)),
            Command::Down(v) => write!(f, "down {}", v.clamp(MOVE_MIN, MOVE_MAX)),
            Command::Left(v) => write!(f, "left {}", v.clamp(MOVE_MIN, MOVE_MAX)),
            Command::Right(v) => write!(f, "right {}", v.clamp(MOVE_MIN, MOVE_MAX)),
            Command::Forward(v) => write!(f, "forward {}", v.clamp(MOVE_MIN, MOVE_MAX)),
            Command::Back(v) => write!(f, "back {}", v.clamp(MOVE_MIN, MOVE_MAX)),
            Command::RotateClockwise(deg) => {
                write!(f, "cw {}", deg.clamp(ROTATE_MIN, ROTATE_MAX))
            }
            Command::RotateCounterClockwise(deg) => {
                write!(f, "ccw {}", deg.clamp(ROTATE_MIN, ROTATE_MAX))
            }
            Command::Flip(direction) => write!(f, "flip {}", direction.as_char()),
            Command::Go { x, y, z, speed } => write!(
                f,
                "go {} {} {} {}",
                x.clamp(GO_MIN, GO_MAX),
                y.clamp(GO_MIN, GO_MAX),
                z.clamp(GO_MIN, GO_MAX),
                speed.clamp(SPEED_MIN, SPEED_MAX)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_commands_render_verbatim() {
        assert_eq!(Command::EnterSdkMode.to_string(), "command");
        assert_eq!(Command::TakeOff.to_string(), "takeoff");
        assert_eq!(Command::Land.to_string(), "land");
        assert_eq!(Command::Stop.to_string(), "stop");
        assert_eq!(Command::StreamOn.to_string(), "streamon");
        assert_eq!(Command::StreamOff.to_string(), "streamoff");
        assert_eq!(Command::Emergency.to_string(), "emergency");
    }

    #[test]
    fn moves_saturate_at_device_limits() {
        assert_eq!(Command::Up(1000).to_string(), "up 500");
        assert_eq!(Command::Up(5).to_string(), "up 20");
        assert_eq!(Command::Up(75).to_string(), "up 75");
        assert_eq!(Command::Down(0).to_string(), "down 20");
        assert_eq!(Command::Left(501).to_string(), "left 500");
        assert_eq!(Command::Right(20).to_string(), "right 20");
        assert_eq!(Command::Forward(500).to_string(), "forward 500");
        assert_eq!(Command::Back(-30).to_string(), "back 20");
    }

    #[test]
    fn rotation_saturates_at_device_limits() {
        assert_eq!(Command::RotateClockwise(400).to_string(), "cw 360");
        assert_eq!(Command::RotateClockwise(0).to_string(), "cw 1");
        assert_eq!(Command::RotateCounterClockwise(90).to_string(), "ccw 90");
        assert_eq!(Command::RotateCounterClockwise(-10).to_string(), "ccw 1");
    }

    #[test]
    fn flip_uses_direction_letter() {
        assert_eq!(Command::Flip(FlipDirection::Left).to_string(), "flip l");
        assert_eq!(Command::Flip(FlipDirection::Right).to_string(), "flip r");
        assert_eq!(Command::Flip(FlipDirection::Forward).to_string(), "flip f");
        assert_eq!(Command::Flip(FlipDirection::Back).to_string(), "flip b");
    }

    #[test]
    fn flip_direction_rejects_unknown_letters() {
        assert_eq!(FlipDirection::from_char('l'), Some(FlipDirection::Left));
        assert_eq!(FlipDirection::from_char('x'), None);
        assert_eq!(FlipDirection::from_char('L'), None);
    }

    #[test]
    fn go_clamps_each_parameter_independently() {
        let c = Command::Go { x: 600, y: -600, z: 50, speed: 5 };
        assert_eq!(c.to_string(), "go 500 -500 50 10");

        let c = Command::Go { x: 0, y: 0, z: 0, speed: 200 };
        assert_eq!(c.to_string(), "go 0 0 0 100");
    }
}
