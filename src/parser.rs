use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::data::{MapCell, Pos};
use crate::map::MazeMap;
use crate::maze::MazeProblem;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    LineLength(usize),
    MultiplePacmen,
    NoPacman,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty layout"),
            ParserErr::LineLength(r) => write!(f, "Wrong line length on row {}", r),
            ParserErr::MultiplePacmen => write!(f, "More than one pacman"),
            ParserErr::NoPacman => write!(f, "No pacman"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for MazeProblem {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn is_pacman(c: char) -> bool {
    match c {
        'P' | '<' | '^' | '>' | 'v' => true,
        _ => false,
    }
}

/// Parses the pacman layout format.
///
/// Blank lines and score lines from game state dumps are skipped.
/// `%` is wall, `.` food, `P` or a directional glyph pacman,
/// anything else is open floor.
pub(crate) fn parse(layout: &str) -> Result<MazeProblem, ParserErr> {
    let lines: Vec<&str> = layout
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.contains("Score:"))
        .collect();
    if lines.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut grid: Vec<Vec<MapCell>> = Vec::new();
    let mut food = Vec::new();
    let mut pacman = None;

    for (r, line) in lines.iter().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let pos = Pos::new(r, c);
            let cell = match cur_char {
                '%' => MapCell::Wall,
                '.' => {
                    food.push(pos);
                    MapCell::Empty
                }
                ch if is_pacman(ch) => {
                    if pacman.is_some() {
                        return Err(ParserErr::MultiplePacmen);
                    }
                    pacman = Some(pos);
                    MapCell::Empty
                }
                _ => MapCell::Empty,
            };
            row.push(cell);
        }
        if r > 0 && row.len() != grid[0].len() {
            return Err(ParserErr::LineLength(r));
        }
        grid.push(row);
    }

    let pacman = pacman.ok_or(ParserErr::NoPacman)?;
    debug!("Parsed {}x{} layout with {} food", grid.len(), grid[0].len(), food.len());

    let map = MazeMap::new(Vec2d::new(&grid), food);
    Ok(MazeProblem::new(map, pacman))
}
