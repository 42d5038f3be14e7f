use std::fmt::{self, Display, Formatter};
use std::ops::Add;

use crate::problem::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Wall,
    Empty,
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Wall => write!(f, "%"),
            MapCell::Empty => write!(f, " "),
        }
    }
}

// i32 so stepping off the grid can be detected instead of wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos {
            r: r as i32,
            c: c as i32,
        }
    }

    pub fn manhattan(self, other: Pos) -> i32 {
        (self.r - other.r).abs() + (self.c - other.c).abs()
    }

    pub fn euclidean(self, other: Pos) -> f64 {
        let dr = f64::from(self.r - other.r);
        let dc = f64::from(self.c - other.c);
        (dr * dr + dc * dc).sqrt()
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

/// Compass moves of the maze.
///
/// The order of `DIRECTIONS` is the order in which actions are offered
/// and therefore decides which of several equally good paths is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    West,
    East,
    North,
    South,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::West, Dir::East, Dir::North, Dir::South];

impl Dir {
    pub fn inverse(self) -> Dir {
        match self {
            Dir::West => Dir::East,
            Dir::East => Dir::West,
            Dir::North => Dir::South,
            Dir::South => Dir::North,
        }
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Dir::West => (0, -1),
            Dir::East => (0, 1),
            Dir::North => (-1, 0),
            Dir::South => (1, 0),
        }
    }
}

impl Action for Dir {
    fn inverse(self) -> Self {
        Dir::inverse(self)
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::West => write!(f, "West"),
            Dir::East => write!(f, "East"),
            Dir::North => write!(f, "North"),
            Dir::South => write!(f, "South"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}
