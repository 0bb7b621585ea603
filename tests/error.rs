use pacman_pursuit::error::{ConfigError, GameError, GameResult, MapError, ParseError};
use pacman_pursuit::map::parser::MazeParser;

#[test]
fn test_game_error_from_parse_error() {
    let parse_error = ParseError::UnknownCharacter('Z');
    let game_error: GameError = parse_error.into();
    assert!(matches!(game_error, GameError::MazeParse(_)));
}

#[test]
fn test_game_error_from_map_error() {
    let map_error = MapError::NoOpenCells;
    let game_error: GameError = map_error.into();
    assert!(matches!(game_error, GameError::Map(_)));
}

#[test]
fn test_game_error_from_config_error() {
    let config_error = ConfigError::InvalidValue {
        field: "search_depth",
        reason: "must be at least 1".to_string(),
    };
    let game_error: GameError = config_error.into();
    assert!(matches!(game_error, GameError::Config(_)));
}

#[test]
fn test_game_error_display() {
    let error: GameError = MapError::NotEnoughOpenCells { agents: 3, open: 2 }.into();
    assert_eq!(
        error.to_string(),
        "Map error: Cannot place 3 agents in a maze with 2 open cells"
    );

    let error: GameError = ParseError::InvalidLength { expected: 9, found: 8 }.into();
    assert_eq!(
        error.to_string(),
        "Maze parsing error: Maze must contain exactly 9 cells, found 8"
    );
}

#[test]
fn test_placement_errors() {
    let error: GameError = MapError::CellOutOfBounds(99).into();
    assert!(matches!(error, GameError::Map(MapError::CellOutOfBounds(99))));
    assert_eq!(error.to_string(), "Map error: Cell 99 is outside of the maze");

    let error: GameError = MapError::UnknownGhost(2).into();
    assert_eq!(error.to_string(), "Map error: No ghost with index 2");
}

#[test]
fn test_question_mark_conversion() {
    fn parse() -> GameResult<()> {
        MazeParser::parse_character('x')?;
        Ok(())
    }

    assert!(matches!(parse(), Err(GameError::MazeParse(ParseError::UnknownCharacter('x')))));
}
