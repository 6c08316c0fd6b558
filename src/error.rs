use std::fmt;

/// Reasons a move is rejected. A rejected move never changes game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    PositionOccupied,
    KoViolation,
    Suicide,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::PositionOccupied => write!(f, "position occupied"),
            IllegalMove::KoViolation => write!(f, "ko violation"),
            IllegalMove::Suicide => write!(f, "suicide"),
        }
    }
}

impl std::error::Error for IllegalMove {}
