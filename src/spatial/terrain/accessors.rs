use super::*;

/// What `at` reports for cells outside the grid: solid, so the level edge is a wall.
pub const OUT_OF_BOUNDS_BLOCK: BlockType = BlockType::Placeholder;

impl Terrain {
    /// Block at integer cell coordinates.
    ///
    /// Reads outside the grid return [`OUT_OF_BOUNDS_BLOCK`].
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> BlockType {
        if !self.in_bounds(x, y) {
            return OUT_OF_BOUNDS_BLOCK;
        }
        // SAFETY: in_bounds just checked both coordinates.
        unsafe { self.at_unchecked(x as u32, y as u32) }
    }

    /// Raw read for coordinates the caller already bounds-checked.
    ///
    /// # Safety
    /// `x < width` and `y < height` must hold.
    #[inline(always)]
    pub unsafe fn at_unchecked(&self, x: u32, y: u32) -> BlockType {
        debug_assert!(
            x < self.width && y < self.height,
            "at_unchecked: out of bounds ({}, {}) for {}x{} terrain",
            x,
            y,
            self.width,
            self.height
        );
        *self.cells.get_unchecked(self.index(x, y))
    }

    /// Overwrite one cell. Returns `false` (and writes nothing) outside the grid.
    ///
    /// No notification happens here; whoever destroys blocks tells the renderer.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, block: BlockType) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x as u32, y as u32);
        self.cells[idx] = block;
        true
    }

    #[inline]
    pub fn is_solid_at(&self, x: i32, y: i32) -> bool {
        self.at(x, y).is_solid()
    }

    /// Raw cells for the renderer (row-major, bottom row first).
    pub fn cells(&self) -> &[BlockType] {
        &self.cells
    }
}
