use crate::layout::BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceColor {
    Black,
    White,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceType {
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    Pawn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

/// Read-only view of a board position, implemented by the rules engine.
/// `col` runs left to right and `row` top to bottom, both in
/// `0..BOARD_SIZE`; black's back rank is row 0.
pub trait BoardSnapshot {
    fn piece_at(&self, col: usize, row: usize) -> Option<Piece>;
}

/// Plain 8x8 grid, indexed `[col][row]`. Stands in for the rules engine in
/// the demo binary and in tests.
pub struct ArrayBoard {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

const BACK_RANK: [PieceType; BOARD_SIZE] = {
    use PieceType::*;
    [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
};

impl ArrayBoard {
    pub fn empty() -> ArrayBoard {
        ArrayBoard {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn starting_position() -> ArrayBoard {
        let mut board = ArrayBoard::empty();
        for col in 0..BOARD_SIZE {
            for (row, color) in [(0, PieceColor::Black), (7, PieceColor::White)] {
                board.place(
                    col,
                    row,
                    Piece {
                        color,
                        piece_type: BACK_RANK[col],
                    },
                );
            }
            for (row, color) in [(1, PieceColor::Black), (6, PieceColor::White)] {
                board.place(
                    col,
                    row,
                    Piece {
                        color,
                        piece_type: PieceType::Pawn,
                    },
                );
            }
        }
        board
    }

    pub fn place(&mut self, col: usize, row: usize, piece: Piece) {
        self.squares[col][row] = Some(piece);
    }
}

impl BoardSnapshot for ArrayBoard {
    fn piece_at(&self, col: usize, row: usize) -> Option<Piece> {
        self.squares[col][row]
    }
}
