use std::collections::HashSet;

use crate::{
    board::{
        PieceColor::{self, *},
        PieceType::{self, *},
    },
    error::GraphicsError,
};

use super::*;

const TYPE_ORDER: [PieceType; 6] = [Rook, Knight, Bishop, Queen, King, Pawn];
const COLORS: [PieceColor; 2] = [Black, White];

#[test]
fn black_band_precedes_white_band() {
    assert_eq!(sprite_index(Black, Rook), 0);
    assert_eq!(sprite_index(Black, Pawn), 5);
    assert_eq!(sprite_index(White, Rook), 6);
    assert_eq!(sprite_index(White, Pawn), 11);
}

#[test]
fn indices_cover_the_sheet_exactly_once() {
    let indices: HashSet<usize> = COLORS
        .iter()
        .flat_map(|&color| TYPE_ORDER.iter().map(move |&t| sprite_index(color, t)))
        .collect();
    assert_eq!(indices.len(), SPRITE_COUNT);
    assert!(indices.iter().all(|&i| i < SPRITE_COUNT));
}

#[test]
fn type_order_does_not_depend_on_color() {
    for (slot, &piece_type) in TYPE_ORDER.iter().enumerate() {
        assert_eq!(sprite_index(Black, piece_type), slot);
        assert_eq!(sprite_index(White, piece_type), SPRITE_COLS + slot);
    }
}

#[test]
fn bounds_tile_the_two_row_sheet() {
    let bounds = sprite_bounds(100.0);
    for (i, rect) in bounds.iter().enumerate() {
        assert_eq!(rect.x, (i % SPRITE_COLS) as f32 * 100.0);
        assert_eq!(rect.y, if i < SPRITE_COLS { 0.0 } else { 100.0 });
        assert_eq!(rect.w, 100.0);
        assert_eq!(rect.h, 100.0);
    }
}

#[test]
fn sheet_dimensions_must_match_the_grid() {
    assert!(validate_sheet(600.0, 200.0, 100.0).is_ok());
    for (w, h) in [(601.0, 200.0), (600.0, 100.0), (200.0, 600.0)] {
        assert!(matches!(
            validate_sheet(w, h, 100.0),
            Err(GraphicsError::RenderPrecondition { .. })
        ));
    }
}
