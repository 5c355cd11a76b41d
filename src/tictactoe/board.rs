//! Board position representation and basic operations

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::lines;

/// A square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    Empty,
    X,
    O,
}

impl Square {
    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::X => 'X',
            Square::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Square> {
        match c {
            '.' | ' ' => Some(Square::Empty),
            'X' | 'x' => Some(Square::X),
            'O' | 'o' | '0' => Some(Square::O),
            _ => None,
        }
    }
}

/// A player in the game; X always moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to the square it places
    pub fn to_square(self) -> Square {
        match self {
            Player::X => Square::X,
            Player::O => Square::O,
        }
    }
}

/// Classification of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A move is still expected
    InPlay,
    /// The first player completed a line
    XWon,
    /// The second player completed a line
    OWon,
    /// Board full, no completed line
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::InPlay
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameResult::InPlay => "in play",
            GameResult::XWon => "X won",
            GameResult::OWon => "O won",
            GameResult::Draw => "draw",
        };
        write!(f, "{label}")
    }
}

/// A complete snapshot of the 9-square board.
///
/// This type implements `Copy` since it's only 9 bytes, and serves as the key
/// space for table strategies (`Eq + Hash` over the full square array). The
/// player to move is not stored; it is derived from the turn count, which is
/// well-defined because X always moves on even turn counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Square; 9],
}

impl Position {
    /// The start position: all squares empty, X to move
    pub fn start() -> Self {
        Position {
            squares: [Square::Empty; 9],
        }
    }

    /// Get the square at an index (0-8)
    pub fn get(&self, index: usize) -> Square {
        self.squares[index]
    }

    /// Check whether a square is blank
    pub fn is_blank(&self, index: usize) -> bool {
        self.squares[index] == Square::Empty
    }

    /// Get the ordered indices of all blank squares; empty when the board is full
    pub fn blanks(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|&(_, &sq)| sq == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the occupied squares (0-9); the ply number of this position
    pub fn turn_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|&&sq| sq != Square::Empty)
            .count()
    }

    /// The player expected to move: X on even turn counts, O on odd
    pub fn to_move(&self) -> Player {
        if self.turn_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Place the mark of the player to move and return the new position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMoveIndex`] when the index is out of
    /// bounds and [`crate::Error::SquareOccupied`] when the square is not
    /// blank. The original position is unchanged.
    #[must_use = "with_move returns a new position; the original is unchanged"]
    pub fn with_move(&self, index: usize) -> Result<Position, crate::Error> {
        if index >= 9 {
            return Err(crate::Error::InvalidMoveIndex {
                index,
                position: self.encode(),
            });
        }
        if !self.is_blank(index) {
            return Err(crate::Error::SquareOccupied {
                index,
                position: self.encode(),
            });
        }

        let mut next = *self;
        next.squares[index] = self.to_move().to_square();
        Ok(next)
    }

    /// Classify the position against the 8 winning lines.
    ///
    /// A completed line decides the game; otherwise a full board is a draw
    /// and anything else is still in play.
    pub fn classify(&self) -> GameResult {
        match lines::winner(&self.squares) {
            Some(Player::X) => GameResult::XWon,
            Some(Player::O) => GameResult::OWon,
            None if self.turn_count() == 9 => GameResult::Draw,
            None => GameResult::InPlay,
        }
    }

    /// Encode the position as 9 ASCII characters ('.', 'X', 'O')
    pub fn encode(&self) -> String {
        self.squares.iter().map(|&sq| sq.to_char()).collect()
    }

    /// Parse a position from its 9-character encoding.
    ///
    /// Whitespace inside the string is accepted as a blank square, matching
    /// the encoding's historical use of spaces. The piece counts are
    /// validated: X must have placed the same number of marks as O or exactly
    /// one more.
    ///
    /// # Errors
    ///
    /// Returns a recoverable error when the string has the wrong length,
    /// contains an invalid character, or encodes impossible piece counts.
    pub fn from_string(s: &str) -> Result<Position, crate::Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut squares = [Square::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            squares[i] =
                Square::from_char(c).ok_or_else(|| crate::Error::InvalidSquareCharacter {
                    character: c,
                    index: i,
                    context: s.to_string(),
                })?;
        }

        let x_count = squares.iter().filter(|&&sq| sq == Square::X).count();
        let o_count = squares.iter().filter(|&&sq| sq == Square::O).count();
        if x_count != o_count && x_count != o_count + 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        Ok(Position { squares })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            write!(
                f,
                " {} │ {} │ {} ",
                self.squares[row * 3].to_char(),
                self.squares[row * 3 + 1].to_char(),
                self.squares[row * 3 + 2].to_char()
            )?;
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "───┼───┼───")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Position::from_string(&s).map_err(de::Error::custom)
    }
}
