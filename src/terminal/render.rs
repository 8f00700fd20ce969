//! Text rendering of a board for the terminal.

use crate::game_repr::{Board, Color, Square};

/// Board diagram with rank and file labels. `pov` is the side drawn at the
/// bottom: White sees a1 bottom-left, Black sees h8 bottom-left.
pub fn render_board(board: &Board, pov: Color) -> String {
    let order: Vec<u8> = match pov {
        Color::White => (0..8).collect(),
        Color::Black => (0..8).rev().collect(),
    };

    let files: String = order
        .iter()
        .map(|&col| format!(" {}", (b'a' + col) as char))
        .collect();
    let header = format!(" {}\n", files);

    let mut out = header.clone();
    for &row in &order {
        let rank = (b'8' - row) as char;
        out.push(rank);
        for &col in &order {
            let c = board
                .get(Square::at(row, col))
                .map_or('.', |p| p.to_char());
            out.push(' ');
            out.push(c);
        }
        out.push(' ');
        out.push(rank);
        out.push('\n');
    }
    out.push_str(&header);
    out
}
