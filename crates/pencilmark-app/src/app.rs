//! Interactive editor session.
//!
//! The editor owns a [`Board`] and maps line-oriented commands onto the
//! engine API, printing engine errors in their display form. It reads from
//! and writes to generic handles so sessions can be driven by in-memory
//! buffers in tests.

use std::io::{self, BufRead, Write};

use pencilmark_board::Board;
use pencilmark_core::Coord;

use crate::render;

const HELP: &str = "\
commands:
  show                    render the grid
  set <row> <col> <v>     assign a value (zero-based row and column)
  clear <row> <col>       retract a cell's value
  change <row> <col> <v>  replace a cell's value
  candidates <row> <col>  list the legal values for a cell
  load                    replace the board with a freshly entered grid
  check                   report validity and completeness
  help                    show this message
  quit                    leave the editor";

enum Flow {
    Continue,
    Quit,
}

/// An interactive editing session over one board.
pub struct Editor {
    board: Board,
}

impl Editor {
    /// Creates a session editing `board`.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Runs the prompt loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the input or output handle.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        writeln!(
            output,
            "pencilmark editor, {0}x{0} grid; type 'help' for commands",
            self.board.size()
        )?;
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            match self.dispatch(line.trim(), &mut input, &mut output)? {
                Flow::Continue => {}
                Flow::Quit => break,
            }
        }
        Ok(())
    }

    fn dispatch(
        &mut self,
        line: &str,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<Flow> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };
        log::debug!("command: {line}");

        match command {
            "help" => writeln!(output, "{HELP}")?,
            "show" => write!(output, "{}", render::render(&self.board))?,
            "check" => {
                let status = if self.board.is_complete() {
                    "board is complete"
                } else if self.board.is_valid() {
                    "board is valid but incomplete"
                } else {
                    "board contains conflicts"
                };
                writeln!(output, "{status}")?;
            }
            "load" => self.load(input, output)?,
            "set" => match coord_value_args(args) {
                Ok((coord, value)) => match self.board.assign(coord, value) {
                    Ok(()) => {
                        writeln!(output, "set {coord} to {value}")?;
                        self.report_completion(output)?;
                    }
                    Err(err) => writeln!(output, "{err}")?,
                },
                Err(message) => writeln!(output, "{message}")?,
            },
            "clear" => match coord_args(args) {
                Ok(coord) => match self.board.retract(coord) {
                    Ok(Some(value)) => writeln!(output, "cleared {coord} (was {value})")?,
                    Ok(None) => writeln!(output, "cell {coord} was already blank")?,
                    Err(err) => writeln!(output, "{err}")?,
                },
                Err(message) => writeln!(output, "{message}")?,
            },
            "change" => match coord_value_args(args) {
                Ok((coord, value)) => match self.board.change_value(coord, value) {
                    Ok(Some(prior)) => {
                        writeln!(output, "changed {coord} from {prior} to {value}")?;
                        self.report_completion(output)?;
                    }
                    Ok(None) => {
                        writeln!(output, "set {coord} to {value}")?;
                        self.report_completion(output)?;
                    }
                    Err(err) => writeln!(output, "{err}")?,
                },
                Err(message) => writeln!(output, "{message}")?,
            },
            "candidates" => match coord_args(args) {
                Ok(coord) => match self.board.cell(coord) {
                    Ok(cell) => {
                        if let Some(value) = cell.value() {
                            writeln!(output, "cell {coord} holds {value}")?;
                        } else {
                            let candidates = self
                                .board
                                .candidates(coord)
                                .expect("coordinate was just validated");
                            let list: Vec<_> =
                                candidates.iter().map(|v| v.to_string()).collect();
                            writeln!(output, "candidates at {coord}: {}", list.join(" "))?;
                        }
                    }
                    Err(err) => writeln!(output, "{err}")?,
                },
                Err(message) => writeln!(output, "{message}")?,
            },
            "quit" | "exit" => return Ok(Flow::Quit),
            other => writeln!(output, "unknown command '{other}'; type 'help' for the list")?,
        }
        Ok(Flow::Continue)
    }

    fn report_completion(&self, output: &mut impl Write) -> io::Result<()> {
        if self.board.is_complete() {
            writeln!(output, "board is complete!")?;
        }
        Ok(())
    }

    /// Reads N grid lines and replaces the board if every placement is legal.
    ///
    /// A line that cannot be parsed is re-prompted; an illegal placement
    /// aborts the load and discards the entered values, leaving the current
    /// board untouched.
    fn load(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
        let size = self.board.size();
        let mut fresh = Board::new(self.board.box_size());

        for row in 0..size {
            loop {
                write!(output, "line {}: ", row + 1)?;
                output.flush()?;
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    writeln!(output, "input ended; values discarded")?;
                    return Ok(());
                }
                match parse_grid_line(&line, size) {
                    Ok(values) => {
                        for (col, value) in (0..).zip(values) {
                            let Some(value) = value else { continue };
                            if let Err(err) = fresh.assign(Coord::new(row, col), value) {
                                writeln!(output, "not a valid grid: {err}; values discarded")?;
                                return Ok(());
                            }
                        }
                        break;
                    }
                    Err(message) => writeln!(output, "invalid input: {message}")?,
                }
            }
        }

        self.board = fresh;
        writeln!(output, "grid loaded")?;
        self.report_completion(output)?;
        Ok(())
    }
}

fn parse_number(token: &str) -> Result<u8, String> {
    token
        .parse()
        .map_err(|_| format!("'{token}' is not a number"))
}

fn coord_args(args: &[&str]) -> Result<Coord, String> {
    match *args {
        [row, col] => Ok(Coord::new(parse_number(row)?, parse_number(col)?)),
        _ => Err("expected: <row> <col>".to_owned()),
    }
}

fn coord_value_args(args: &[&str]) -> Result<(Coord, u8), String> {
    match *args {
        [row, col, value] => Ok((
            Coord::new(parse_number(row)?, parse_number(col)?),
            parse_number(value)?,
        )),
        _ => Err("expected: <row> <col> <value>".to_owned()),
    }
}

/// Parses one grid line into per-cell values, `None` for blanks.
///
/// Grids up to 9×9 use one character per cell with `0`, `.`, or space as
/// blank markers; larger grids use whitespace-separated tokens with `0` or
/// `.` as blanks. Short lines are padded with blanks.
fn parse_grid_line(line: &str, size: u8) -> Result<Vec<Option<u8>>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut values = if size <= 9 {
        line.chars()
            .map(|c| match c {
                ' ' | '0' | '.' => Ok(None),
                _ => match c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                    Some(value) if (1..=size).contains(&value) => Ok(Some(value)),
                    _ => Err(format!("unexpected character '{c}'")),
                },
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        line.split_whitespace()
            .map(|token| match token {
                "0" | "." => Ok(None),
                _ => match parse_number(token) {
                    Ok(value) if (1..=size).contains(&value) => Ok(Some(value)),
                    Ok(value) => Err(format!("value {value} is out of range 1-{size}")),
                    Err(message) => Err(message),
                },
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    if values.len() > usize::from(size) {
        return Err(format!("line has more than {size} cells"));
    }
    values.resize(usize::from(size), None);
    Ok(values)
}
