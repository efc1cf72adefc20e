use super::*;

impl Terrain {
    /// Fill the inclusive cell rectangle, clipped to the grid.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, block: BlockType) {
        let (lx, hx) = (x0.min(x1).max(0), x0.max(x1).min(self.width as i32 - 1));
        let (ly, hy) = (y0.min(y1).max(0), y0.max(y1).min(self.height as i32 - 1));
        for y in ly..=hy {
            for x in lx..=hx {
                let idx = self.index(x as u32, y as u32);
                self.cells[idx] = block;
            }
        }
    }

    /// Flat test level: rows `0..ground` are solid with stone bedrock, two rows of soil
    /// and a grass surface; decorative grasses sit on every other surface cell.
    pub fn flat(width: u32, height: u32, ground: u32) -> Self {
        let mut terrain = Self::new(width, height);
        let ground = ground.min(height) as i32;
        if ground == 0 {
            return terrain;
        }
        let top = ground - 1;
        let w = width as i32 - 1;

        terrain.fill_rect(0, 0, w, top, BlockType::Stone);
        terrain.fill_rect(0, (top - 2).max(0), w, top, BlockType::Soil);
        terrain.fill_rect(0, top, w, top, BlockType::Grass);
        for x in (0..width as i32).step_by(2) {
            terrain.set(x, ground, BlockType::Grasses);
        }
        terrain
    }
}
