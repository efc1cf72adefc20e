//! Terrain - dense tile grid for one level
//!
//! One byte per cell, row-major, y grows upward (row 0 is the bottom of the level).
//! Cell (x, y) covers [x, x+1) × [y, y+1) in entity coordinates.
//!
//! The grid is sized once per level and only ever mutated in place.

use crate::domain::blocks::BlockType;

mod indexing;
mod accessors;
mod generate;

pub struct Terrain {
    width: u32,
    height: u32,
    cells: Vec<BlockType>,
}

impl Terrain {
    /// All-air terrain of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BlockType::Air; size],
        }
    }
}
