use ggez::{
    glam::Vec2,
    graphics::{Canvas, Rect},
    Context,
};

use crate::{
    atlas::{self, SPRITE_COUNT},
    board::BoardSnapshot,
    error::GraphicsError,
    layout::{BoardLayout, BOARD_SIZE},
    texture::Texture,
};

#[cfg(test)]
mod test;

pub const CHESS_BOARD_FILEPATH: &str = "/board.png";
pub const CHESS_PIECES_FILEPATH: &str = "/pieces.png";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Board { dest: Vec2 },
    Piece { sprite: usize, dest: Vec2 },
}

/// Draw plan for one frame: the board background first, then every occupied
/// cell in column-major order. Cells never overlap, so the traversal order
/// is fixed only to keep frames reproducible.
pub fn plan_frame(board: &impl BoardSnapshot, layout: &BoardLayout) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Board { dest: Vec2::ZERO }];
    for col in 0..BOARD_SIZE {
        for row in 0..BOARD_SIZE {
            if let Some(piece) = board.piece_at(col, row) {
                commands.push(DrawCommand::Piece {
                    sprite: atlas::sprite_index(piece.color, piece.piece_type),
                    dest: layout.to_pixel(col, row),
                });
            }
        }
    }
    commands
}

pub struct BoardRenderer {
    board_texture: Texture,
    pieces_texture: Texture,
    sprite_bounds: [Rect; SPRITE_COUNT],
    layout: BoardLayout,
}

impl BoardRenderer {
    /// Loads both textures and checks the sprite sheet against the atlas
    /// grid, so a renderer that constructs can draw any board.
    pub fn new(ctx: &Context, layout: BoardLayout) -> Result<BoardRenderer, GraphicsError> {
        let board_texture = Texture::load(ctx, CHESS_BOARD_FILEPATH)?;
        let pieces_texture = Texture::load(ctx, CHESS_PIECES_FILEPATH)?;
        atlas::validate_sheet(
            pieces_texture.width(),
            pieces_texture.height(),
            layout.tile_size,
        )?;
        Ok(BoardRenderer {
            board_texture,
            pieces_texture,
            sprite_bounds: atlas::sprite_bounds(layout.tile_size),
            layout,
        })
    }

    pub fn draw(
        &self,
        canvas: &mut Canvas,
        board: &impl BoardSnapshot,
    ) -> Result<(), GraphicsError> {
        for command in plan_frame(board, &self.layout) {
            match command {
                DrawCommand::Board { dest } => self.board_texture.draw(canvas, dest, None),
                DrawCommand::Piece { sprite, dest } => {
                    let bounds = self.sprite_bounds.get(sprite).copied().ok_or_else(|| {
                        GraphicsError::RenderPrecondition {
                            detail: format!("sprite index {sprite} is outside the atlas"),
                        }
                    })?;
                    self.pieces_texture.draw(canvas, dest, Some(bounds));
                }
            }
        }
        Ok(())
    }
}
