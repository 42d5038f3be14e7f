use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::maze::MazeProblem;
use crate::puzzle::PuzzleProblem;
use crate::{LoadLayout, LoadPuzzle};

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadLayout for str {
    fn load_layout(&self) -> Result<MazeProblem, Box<dyn Error>> {
        let text = read_file(self)?;
        debug!("Loaded layout {}", self);
        Ok(text.parse::<MazeProblem>()?)
    }
}

impl LoadPuzzle for str {
    fn load_puzzle(&self) -> Result<PuzzleProblem, Box<dyn Error>> {
        let text = read_file(self)?;
        debug!("Loaded puzzle {}", self);
        Ok(text.parse::<PuzzleProblem>()?)
    }
}
