//! Maze parsing functionality for converting raw digit layouts into a wall bitmap.

use crate::error::ParseError;

/// An enum representing the different types of cells in the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// A walkable cell.
    Open,
    /// A wall cell.
    Wall,
}

impl MapTile {
    /// Returns `true` if the tile can be walked on.
    pub fn is_open(self) -> bool {
        matches!(self, MapTile::Open)
    }
}

/// Represents the parsed data from a raw maze layout.
#[derive(Debug, Clone)]
pub struct ParsedMaze {
    pub rows: usize,
    pub columns: usize,
    /// Row-major tiles, exactly `rows * columns` long.
    pub tiles: Vec<MapTile>,
}

/// Parser for converting raw maze layouts into structured data.
pub struct MazeParser;

impl MazeParser {
    /// Parses a single character into a map tile.
    ///
    /// # Returns
    ///
    /// The parsed map tile, or an error if the character is unknown.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '1' => Ok(MapTile::Open),
            '0' => Ok(MapTile::Wall),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw maze layout into a row-major tile sequence.
    ///
    /// Whitespace anywhere in the layout is ignored, so rows may be split over lines and indented.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, the layout contains a character other than
    /// `0`, `1` or whitespace, or the number of cells does not equal `rows * columns`.
    pub fn parse_maze(rows: usize, columns: usize, raw: &str) -> Result<ParsedMaze, ParseError> {
        if rows == 0 || columns == 0 {
            return Err(ParseError::InvalidDimensions { rows, columns });
        }

        let tiles = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::parse_character)
            .collect::<Result<Vec<_>, _>>()?;

        let expected = rows * columns;
        if tiles.len() != expected {
            return Err(ParseError::InvalidLength {
                expected,
                found: tiles.len(),
            });
        }

        Ok(ParsedMaze { rows, columns, tiles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_character() {
        assert_eq!(MazeParser::parse_character('1'), Ok(MapTile::Open));
        assert_eq!(MazeParser::parse_character('0'), Ok(MapTile::Wall));
        assert_eq!(MazeParser::parse_character('2'), Err(ParseError::UnknownCharacter('2')));
    }

    #[test]
    fn test_parse_maze_ignores_whitespace() {
        let parsed = MazeParser::parse_maze(2, 3, " 101\n\t 010 ").unwrap();
        assert_eq!(parsed.tiles.len(), 6);
        assert!(parsed.tiles[0].is_open());
        assert!(!parsed.tiles[1].is_open());
        assert!(parsed.tiles[4].is_open());
    }
}
