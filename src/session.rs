#![cfg(feature = "std")]

//! Line-oriented terminal front end for [`StepperPanel`].

use std::io::{BufRead, Write};

use crate::board::render_path;
use crate::clipboard::ClipboardSink;
use crate::panel::{FormFields, Hotkey, PanelError, PanelEvent, StepperPanel, CLOSE_HOTKEY, OPEN_HOTKEY};
use crate::stepper::format_sequence;

/// Reads commands from `input`, writes prompts and messages to `output`.
pub struct Session<R, W, S>
where
    R: BufRead,
    W: Write,
    S: ClipboardSink,
{
    input: R,
    output: W,
    panel: StepperPanel<S>,
    show_board: bool,
    copied: usize,
}

impl<R, W, S> Session<R, W, S>
where
    R: BufRead,
    W: Write,
    S: ClipboardSink,
{
    pub fn new(input: R, output: W, sink: S) -> Self {
        Self {
            input,
            output,
            panel: StepperPanel::new(sink),
            show_board: false,
            copied: 0,
        }
    }

    /// Start with the board preview switched on.
    pub fn with_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }

    pub fn panel(&self) -> &StepperPanel<S> {
        &self.panel
    }

    pub fn into_panel(self) -> StepperPanel<S> {
        self.panel
    }

    /// Run until `quit` or end of input. Returns how many results were copied.
    pub fn run(&mut self) -> anyhow::Result<usize> {
        writeln!(
            self.output,
            "Gomoku stepper - {} opens the panel, {} closes it, 'help' for more.",
            OPEN_HOTKEY, CLOSE_HOTKEY
        )?;
        loop {
            let prompt = if self.panel.is_open() { "panel> " } else { "> " };
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                break;
            }
            self.dispatch(line)?;
        }
        Ok(self.copied)
    }

    fn dispatch(&mut self, line: &str) -> anyhow::Result<()> {
        if line.eq_ignore_ascii_case("help") {
            self.print_help()?;
            return Ok(());
        }
        if line.eq_ignore_ascii_case("board") {
            self.show_board = !self.show_board;
            let state = if self.show_board { "on" } else { "off" };
            writeln!(self.output, "Board preview {}.", state)?;
            return Ok(());
        }
        let hotkey = if line.eq_ignore_ascii_case("open") {
            Some(Hotkey::Open)
        } else if line.eq_ignore_ascii_case("close") {
            Some(Hotkey::Close)
        } else {
            line.parse::<Hotkey>().ok()
        };
        if let Some(key) = hotkey {
            let msg = match self.panel.handle_hotkey(key) {
                PanelEvent::Opened => "Panel open. Enter: <start> <direction> <steps>",
                PanelEvent::Closed => "Panel closed.",
                PanelEvent::AlreadyOpen => "Panel is already open.",
                PanelEvent::AlreadyClosed => "Panel is already closed.",
            };
            writeln!(self.output, "{}", msg)?;
            return Ok(());
        }
        self.submit_line(line)
    }

    fn submit_line(&mut self, line: &str) -> anyhow::Result<()> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let fields = match words.as_slice() {
            [start, middle @ .., steps] if !middle.is_empty() => {
                FormFields::new(start, &middle.join("-"), steps)
            }
            [start, direction] => FormFields::new(start, direction, ""),
            [start] => FormFields::new(start, "", ""),
            _ => FormFields::default(),
        };
        let result = self.panel.fill(fields).and_then(|()| self.panel.submit());
        match result {
            Ok(path) => {
                self.copied += 1;
                writeln!(self.output, "✓ Copied: {}", format_sequence(&path))?;
                if self.show_board {
                    write!(self.output, "{}", render_path(&path))?;
                }
            }
            Err(PanelError::Copy(e)) => return Err(e),
            Err(e) => writeln!(self.output, "✗ Error: {}", e)?,
        }
        Ok(())
    }

    fn print_help(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  {} | open      open the input panel", OPEN_HOTKEY)?;
        writeln!(self.output, "  {} | close     close the input panel", CLOSE_HOTKEY)?;
        writeln!(self.output, "  <start> <direction> <steps>")?;
        writeln!(self.output, "                    e.g. H3 RU 5 -> H3, I4, J5, K6, L7")?;
        writeln!(self.output, "  board             toggle the board preview")?;
        writeln!(self.output, "  quit              leave")?;
        writeln!(self.output, "Columns A-O, rows 1-15 (row 1 at the bottom).")?;
        writeln!(self.output, "Directions: U, D, L, R, LU, RU, LD, RD or up, down-left, ...")?;
        Ok(())
    }
}
