//! ASCII rendering of a board.

use pencilmark_board::Board;

/// Renders the grid with `_` for blank cells, `|` between box columns, and
/// underscore rules between box rows.
///
/// Cells are one character wide on grids up to 9×9 and two characters wide
/// beyond that (values reach 64 on the largest grid).
pub(crate) fn render(board: &Board) -> String {
    let size = board.size();
    let b = board.box_size().get();
    let width = if size > 9 { 2 } else { 1 };

    let cells: Vec<_> = board.cells().collect();
    let mut lines = Vec::new();
    for row in 0..size {
        if row % b == 0 && row != 0 {
            lines.push(rule_line(b, width, '_'));
            lines.push(rule_line(b, width, ' '));
        }
        let mut line = String::new();
        for col in 0..size {
            if col % b == 0 && col != 0 {
                line.push('|');
            }
            let index = usize::from(row) * usize::from(size) + usize::from(col);
            match cells[index].value() {
                Some(value) => line.push_str(&format!(" {value:>width$} ")),
                None => line.push_str(&format!(" {:>width$} ", "_")),
            }
        }
        line.truncate(line.trim_end().len());
        lines.push(line);
    }
    lines.join("\n") + "\n"
}

/// One horizontal rule: `b` segments of `fill`, separated by `|`.
fn rule_line(b: u8, width: usize, fill: char) -> String {
    let segment: String = std::iter::repeat_n(fill, usize::from(b) * (width + 2)).collect();
    let mut line = vec![segment; usize::from(b)].join("|");
    line.truncate(line.trim_end().len());
    line
}
