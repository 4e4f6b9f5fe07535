use ggez::glam::{vec2, Vec2};

pub const BOARD_SIZE: usize = 8;
pub const CHESS_TILE_SIZE: f32 = 100.0;
pub const EDGE_OFFSET: f32 = 20.0;
pub const SCREEN_WIDTH: f32 = 2.0 * EDGE_OFFSET + BOARD_SIZE as f32 * CHESS_TILE_SIZE;
pub const SCREEN_HEIGHT: f32 = SCREEN_WIDTH;

/// Pixel geometry of the board: how big each tile is and where cell (0, 0)
/// starts. Cell coordinates grow rightward and downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub tile_size: f32,
    pub edge_offset: f32,
}

impl Default for BoardLayout {
    fn default() -> BoardLayout {
        BoardLayout {
            tile_size: CHESS_TILE_SIZE,
            edge_offset: EDGE_OFFSET,
        }
    }
}

impl BoardLayout {
    /// Top-left window pixel of a cell. Only meaningful for cells in
    /// `0..BOARD_SIZE` on both axes.
    pub fn to_pixel(&self, col: usize, row: usize) -> Vec2 {
        vec2(
            self.edge_offset + col as f32 * self.tile_size,
            self.edge_offset + row as f32 * self.tile_size,
        )
    }

    /// Inverse of `to_pixel`: the cell under a window pixel, if any.
    pub fn cell_at(&self, pos: Vec2) -> Option<(usize, usize)> {
        let cell = (pos - Vec2::splat(self.edge_offset)) / self.tile_size;
        if cell.x < 0.0 || cell.y < 0.0 {
            return None;
        }
        let (col, row) = (cell.x as usize, cell.y as usize);
        (col < BOARD_SIZE && row < BOARD_SIZE).then_some((col, row))
    }
}
