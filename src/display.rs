use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::board::{Board, Cell, Player};
use connect4_minimax::{COLS, ROWS};

/// Draws the board below the cursor, marking the last column played with `^`
pub fn draw(board: &Board, last_move: Option<usize>) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=COLS).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..ROWS {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the line for the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..ROWS {
        for column in 0..COLS {
            let (pos_x, pos_y) = (
                origin_x + column as u16,
                origin_y - (ROWS - 1 - row) as u16,
            );

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.cell(row, column) {
                            Cell::Occupied(Player::One) => Color::Red,
                            Cell::Occupied(Player::Two) => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + COLS as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;

    if let Some(column) = last_move {
        let marker = format!("{:>width$}\n", "^", width = column + 1);
        stdout.queue(PrintStyledContent(style(marker)))?;
    }
    stdout.flush()?;
    Ok(())
}
