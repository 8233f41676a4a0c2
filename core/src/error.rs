use core::fmt;

/// Which axis of a text scale was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// Errors produced by the clock core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Text scale outside `1..=4`
    InvalidScale { axis: Axis, value: u8 },
    /// Reading or writing the real time clock failed
    TimeSource,
    /// Committing the framebuffer to the panel failed
    Display,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidScale { axis, value } => {
                let axis = match axis {
                    Axis::X => 'x',
                    Axis::Y => 'y',
                };
                write!(f, "{axis} scale {value} is outside 1..=4")
            }
            Error::TimeSource => f.write_str("real time clock access failed"),
            Error::Display => f.write_str("display commit failed"),
        }
    }
}
