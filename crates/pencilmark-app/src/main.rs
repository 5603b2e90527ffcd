//! Pencilmark interactive terminal editor.
//!
//! This is the main entry point for the `pencilmark` command-line
//! application: an interactive Sudoku board editor with live candidate
//! tracking.

use std::io;

use clap::Parser;
use pencilmark_board::Board;
use pencilmark_core::BoxSize;

use crate::app::Editor;

mod app;
mod render;

/// Interactive Sudoku board editor with live candidate tracking.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Box side length; the grid measures box size squared cells per side.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=8))]
    box_size: u8,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let box_size = BoxSize::new(args.box_size).expect("clap keeps box size in 2-8");
    log::info!("starting editor with box size {box_size}");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Editor::new(Board::new(box_size)).run(stdin, stdout)
}
