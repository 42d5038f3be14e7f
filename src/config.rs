use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Bfs,
    Ucs,
    AStar,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Bfs => write!(f, "BFS"),
            Method::Ucs => write!(f, "UCS"),
            Method::AStar => write!(f, "A*"),
        }
    }
}

impl FromStr for Method {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Method::Bfs),
            "ucs" => Ok(Method::Ucs),
            "astar" | "a*" => Ok(Method::AStar),
            _ => Err(ConfigErr::UnknownMethod(s.to_string())),
        }
    }
}

/// Distance estimate used by A* in the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeHeuristic {
    Euclidean,
    Manhattan,
}

impl Display for MazeHeuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MazeHeuristic::Euclidean => write!(f, "euclidean"),
            MazeHeuristic::Manhattan => write!(f, "manhattan"),
        }
    }
}

impl FromStr for MazeHeuristic {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(MazeHeuristic::Euclidean),
            "manhattan" => Ok(MazeHeuristic::Manhattan),
            _ => Err(ConfigErr::UnknownHeuristic(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    UnknownMethod(String),
    UnknownHeuristic(String),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::UnknownMethod(s) => {
                write!(f, "Unknown method '{}', expected one of bfs, ucs, astar", s)
            }
            ConfigErr::UnknownHeuristic(s) => {
                write!(f, "Unknown heuristic '{}', expected euclidean or manhattan", s)
            }
        }
    }
}

impl Error for ConfigErr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_methods() {
        assert_eq!("bfs".parse(), Ok(Method::Bfs));
        assert_eq!("UCS".parse(), Ok(Method::Ucs));
        assert_eq!("astar".parse(), Ok(Method::AStar));
        assert_eq!("A*".parse(), Ok(Method::AStar));
        assert_eq!(
            "dfs".parse::<Method>(),
            Err(ConfigErr::UnknownMethod("dfs".to_string()))
        );
    }

    #[test]
    fn parsing_heuristics() {
        assert_eq!("euclidean".parse(), Ok(MazeHeuristic::Euclidean));
        assert_eq!("Manhattan".parse(), Ok(MazeHeuristic::Manhattan));
        assert!("chebyshev".parse::<MazeHeuristic>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for &h in &[MazeHeuristic::Euclidean, MazeHeuristic::Manhattan] {
            assert_eq!(h.to_string().parse(), Ok(h));
        }
        assert_eq!(Method::AStar.to_string(), "A*");
    }
}
