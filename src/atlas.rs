use ggez::graphics::Rect;

use crate::{
    board::{PieceColor, PieceType},
    error::GraphicsError,
};

#[cfg(test)]
mod test;

pub const SPRITE_COLS: usize = 6;
pub const SPRITE_ROWS: usize = 2;
pub const SPRITE_COUNT: usize = SPRITE_COLS * SPRITE_ROWS;

/// Index of a piece's tile in the sprite sheet. Sprites 0-5 are the black
/// rook, knight, bishop, queen, king and pawn; 6-11 their white
/// counterparts in the same order. This order is a contract with the sheet
/// image itself: reordering either side transposes pieces on screen.
pub fn sprite_index(color: PieceColor, piece_type: PieceType) -> usize {
    let band = match color {
        PieceColor::Black => 0,
        PieceColor::White => 1,
    };
    let slot = match piece_type {
        PieceType::Rook => 0,
        PieceType::Knight => 1,
        PieceType::Bishop => 2,
        PieceType::Queen => 3,
        PieceType::King => 4,
        PieceType::Pawn => 5,
    };
    band * SPRITE_COLS + slot
}

/// Pixel bounds of every sprite in the sheet, indexed by `sprite_index`.
pub fn sprite_bounds(tile_size: f32) -> [Rect; SPRITE_COUNT] {
    std::array::from_fn(|i| {
        Rect::new(
            (i % SPRITE_COLS) as f32 * tile_size,
            if i < SPRITE_COLS { 0.0 } else { tile_size },
            tile_size,
            tile_size,
        )
    })
}

/// Checks that a loaded sprite sheet is exactly the 6x2 grid of tiles the
/// index contract assumes.
pub fn validate_sheet(width: f32, height: f32, tile_size: f32) -> Result<(), GraphicsError> {
    let expected = (SPRITE_COLS as f32 * tile_size, SPRITE_ROWS as f32 * tile_size);
    if (width, height) != expected {
        return Err(GraphicsError::RenderPrecondition {
            detail: format!(
                "piece sprite sheet is {width}x{height}, expected {}x{}",
                expected.0, expected.1
            ),
        });
    }
    Ok(())
}
