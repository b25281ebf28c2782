use core::fmt;

/// Errors from the host-side setup paths.
///
/// Nothing that runs inside a kernel returns these; the string functions
/// and the memory mover have no error channel at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A global logger was installed before `console::init` ran.
    LoggerAlreadySet,
    /// A group needs at least one participant.
    EmptyGroup,
    /// The SIMD width must be non-zero and divide the group size.
    InvalidSimdWidth { group_size: usize, simd_width: usize },
    /// A lane was requested past the end of its group.
    LaneOutOfRange { lane: usize, group_size: usize },
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LoggerAlreadySet => write!(f, "a logger is already installed"),
            Error::EmptyGroup => write!(f, "group size must be at least 1"),
            Error::InvalidSimdWidth {
                group_size,
                simd_width,
            } => write!(
                f,
                "simd width {} does not evenly divide group size {}",
                simd_width, group_size
            ),
            Error::LaneOutOfRange { lane, group_size } => {
                write!(f, "lane {} is outside a group of {}", lane, group_size)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = Error::InvalidSimdWidth {
            group_size: 12,
            simd_width: 5,
        };
        assert_eq!(
            err.to_string(),
            "simd width 5 does not evenly divide group size 12"
        );
        assert_eq!(
            Error::LaneOutOfRange {
                lane: 9,
                group_size: 8
            }
            .to_string(),
            "lane 9 is outside a group of 8"
        );
    }
}
