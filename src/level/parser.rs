use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use crate::core::{BoundedGrid, BoundsOriginRoot, Cell, Vec2, DEFAULT_LEVEL_NAME, UNKNOWN_LEVEL_NAME};
use crate::level::{Level, LevelError};

/// Playable without any level file on disk.
pub const BUILTIN_LEVEL: &str = r#"
#######
#.  $ #
#  @  #
# $  .#
#######
"#;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Occupant {
    Nothing,
    Player,
    Box,
}

/// Splits a level symbol into the terrain underneath and whatever starts on top of it.
fn decode_symbol(ch: char) -> Option<(Cell, Occupant)> {
    Some(match ch {
        '#' => (Cell::Wall, Occupant::Nothing),
        ' ' | '_' => (Cell::Floor, Occupant::Nothing),
        '.' => (Cell::Goal, Occupant::Nothing),
        '@' => (Cell::Floor, Occupant::Player),
        '+' => (Cell::Goal, Occupant::Player),
        '$' => (Cell::Floor, Occupant::Box),
        '*' => (Cell::Goal, Occupant::Box),
        _ => return None,
    })
}

pub fn parse_level(s: &str, name: Option<&str>) -> Result<Level, LevelError> {
    let lines: Vec<&str> = s.lines().collect();
    let Some(first) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return Err(LevelError::Empty);
    };
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(first);
    let rows = &lines[first..=last];

    let height = rows.len() as i32;
    let width = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0) as i32;

    // rows shorter than the widest one stay padded with floor
    let mut grid = BoundedGrid::new(BoundsOriginRoot::new(height, width), Cell::Floor);
    let mut player: Option<Vec2> = None;
    let mut boxes = HashSet::new();
    let mut goals = HashSet::new();

    for (i, line) in rows.iter().enumerate() {
        let line_number = first + i + 1;
        for (j, ch) in line.chars().enumerate() {
            let Some((cell, occupant)) = decode_symbol(ch) else {
                return Err(LevelError::InvalidCharacter {
                    character: ch,
                    line: line_number,
                    column: j + 1,
                });
            };
            let pos = Vec2 {
                i: i as i32,
                j: j as i32,
            };

            match occupant {
                Occupant::Player => {
                    if let Some(existing) = player {
                        return Err(LevelError::MultiplePlayers {
                            first_line: first + existing.i as usize + 1,
                            first_column: existing.j as usize + 1,
                            line: line_number,
                            column: j + 1,
                        });
                    }
                    player = Some(pos);
                }
                Occupant::Box => {
                    boxes.insert(pos);
                }
                Occupant::Nothing => {}
            }
            if cell == Cell::Goal {
                goals.insert(pos);
            }
            grid[&pos] = cell;
        }
    }

    let Some(player_start) = player else {
        return Err(LevelError::NoPlayer);
    };

    let name = name.unwrap_or(DEFAULT_LEVEL_NAME).to_string();
    debug!(
        level = %name,
        width,
        height,
        boxes = boxes.len(),
        goals = goals.len(),
        "parsed level"
    );

    Ok(Level {
        grid: Arc::new(grid),
        player_start,
        boxes,
        goals,
        name,
    })
}

/// Reads and parses a level file. Without an explicit name the file stem is used.
pub fn parse_level_file(path: impl AsRef<Path>, name: Option<&str>) -> Result<Level, LevelError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let derived_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| UNKNOWN_LEVEL_NAME.to_string());
    let level = parse_level(&content, Some(name.unwrap_or(derived_name.as_str())))?;

    info!(path = %path.display(), level = %level.name(), "loaded level file");
    Ok(level)
}
