use crate::error::MazeError;

/// State of a single grid position.
///
/// On the wire a cell is a single marker: `0` for open, `1` for wall.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Traversable cell.
    Open = 0,
    /// Blocked cell. Every grid starts out as walls before carving.
    #[default]
    Wall = 1,
}

impl Cell {
    /// The wire marker for this cell.
    pub fn marker(self) -> u8 {
        self as u8
    }

    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

impl TryFrom<u8> for Cell {
    type Error = MazeError;

    fn try_from(marker: u8) -> Result<Self, Self::Error> {
        match marker {
            0 => Ok(Cell::Open),
            1 => Ok(Cell::Wall),
            other => Err(MazeError::InvalidGrid(format!(
                "cell marker must be 0 or 1, got {other}"
            ))),
        }
    }
}
