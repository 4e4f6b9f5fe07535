use ggez::glam::vec2;

use crate::{
    atlas,
    board::{ArrayBoard, Piece, PieceColor, PieceType},
};

use super::*;

#[test]
fn empty_board_draws_the_background_only() {
    let plan = plan_frame(&ArrayBoard::empty(), &BoardLayout::default());
    assert_eq!(plan, vec![DrawCommand::Board { dest: Vec2::ZERO }]);
}

#[test]
fn single_piece_draws_one_sprite_at_its_cell() {
    let mut board = ArrayBoard::empty();
    let piece = Piece {
        color: PieceColor::Black,
        piece_type: PieceType::Rook,
    };
    board.place(0, 0, piece);
    let layout = BoardLayout::default();

    let plan = plan_frame(&board, &layout);

    assert_eq!(
        plan,
        vec![
            DrawCommand::Board { dest: Vec2::ZERO },
            DrawCommand::Piece {
                sprite: atlas::sprite_index(piece.color, piece.piece_type),
                dest: vec2(layout.edge_offset, layout.edge_offset),
            },
        ]
    );
}

#[test]
fn starting_position_draws_every_piece_after_the_background() {
    let plan = plan_frame(&ArrayBoard::starting_position(), &BoardLayout::default());
    assert_eq!(plan.len(), 33);
    assert_eq!(plan[0], DrawCommand::Board { dest: Vec2::ZERO });
    assert!(plan[1..]
        .iter()
        .all(|command| matches!(command, DrawCommand::Piece { .. })));
}

#[test]
fn pieces_land_on_distinct_cells() {
    let plan = plan_frame(&ArrayBoard::starting_position(), &BoardLayout::default());
    let mut dests: Vec<Vec2> = plan
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Piece { dest, .. } => Some(*dest),
            _ => None,
        })
        .collect();
    dests.sort_by(|a, b| (a.x, a.y).partial_cmp(&(b.x, b.y)).unwrap());
    dests.dedup();
    assert_eq!(dests.len(), 32);
}

#[test]
fn planning_is_deterministic() {
    let board = ArrayBoard::starting_position();
    let layout = BoardLayout::default();
    assert_eq!(plan_frame(&board, &layout), plan_frame(&board, &layout));
}
