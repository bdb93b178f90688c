use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceError {
    OutOfRange { row: usize, col: usize },
    CellOccupied { row: usize, col: usize },
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            PlaceError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already marked", row, col)
            }
        }
    }
}

impl std::error::Error for PlaceError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    Place(PlaceError),
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Place(error) => write!(f, "{}", error),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(error: PlaceError) -> Self {
        MoveError::Place(error)
    }
}
