use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    /// Strict conversion: only the exact board signs map to a stone, so
    /// scratch markers used during scoring never read back as one.
    pub fn from_int(v: i8) -> Option<Self> {
        match v {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}
