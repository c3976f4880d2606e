use std::path::Path;

use tracing::{debug, warn};

use crate::canvas::Board;
use crate::command::{COMMANDS_HELP, Command, SHAPES_HELP};
use crate::config::Config;
use crate::document::{Document, ShapeId};
use crate::error::BoardError;
use crate::file_io;
use crate::render::{draw_shape, render_all};

/// What a command has to say back to the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Status lines, printed in order
    pub lines: Vec<String>,
    /// Print the board after the status lines
    pub show_board: bool,
}

impl Response {
    pub fn message(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            show_board: false,
        }
    }

    pub fn board() -> Self {
        Self {
            lines: Vec::new(),
            show_board: true,
        }
    }

    fn with_board(mut self) -> Self {
        self.show_board = true;
        self
    }
}

/// Main session state: the board, the shape registry, and settings.
/// Exclusively owned by the command loop.
pub struct App {
    pub board: Board,
    pub doc: Document,
    pub config: Config,
    pub running: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            board: Board::new(config.width, config.height),
            doc: Document::new(config.width, config.height),
            config,
            running: true,
        }
    }

    /// Parse and run one input line
    pub fn handle_line(&mut self, line: &str) -> Response {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Response::default(),
            Err(e) => {
                warn!(line, error = %e, "rejected command");
                Response::message(e.to_string())
            }
        }
    }

    /// Run a parsed command. Failures become messages; state is unchanged.
    pub fn execute(&mut self, command: Command) -> Response {
        debug!(?command, "executing");
        match self.apply(command) {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "command failed");
                Response::message(e.to_string())
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<Response, BoardError> {
        match command {
            Command::Add(shape) => {
                let id = self.doc.add(shape)?;
                draw_shape(&mut self.board, &shape);
                Ok(Response::message(format!("Added shape {}: {}", id, shape.describe())).with_board())
            }
            Command::Draw => {
                self.redraw();
                Ok(Response::board())
            }
            Command::List => Ok(self.list()),
            Command::Shapes => Ok(lines(SHAPES_HELP)),
            Command::Help => Ok(lines(COMMANDS_HELP)),
            Command::SelectId(id) => {
                self.doc.select_id(id)?;
                Ok(self.selected_message(id))
            }
            Command::SelectAt(pos) => {
                let id = self.doc.select_at(pos)?;
                Ok(self.selected_message(id))
            }
            Command::Move(pos) => {
                let id = self.doc.move_selected(pos)?;
                self.redraw();
                Ok(Response::message(format!("Moved shape {} to ({}, {})", id, pos.x, pos.y)))
            }
            Command::Edit(params) => {
                let id = self.doc.edit_selected(&params)?;
                self.redraw();
                Ok(self.shape_message("Edited", id))
            }
            Command::Paint(color) => {
                let id = self.doc.paint_selected(color)?;
                self.redraw();
                Ok(self.shape_message("Painted", id))
            }
            Command::Remove => {
                let (id, shape) = self.doc.remove_selected()?;
                self.redraw();
                Ok(Response::message(format!("Removed shape {}: {}", id, shape.describe())))
            }
            Command::Undo => {
                let (id, shape) = self.doc.undo()?;
                self.redraw();
                Ok(Response::message(format!("Undid shape {}: {}", id, shape.describe())).with_board())
            }
            Command::Save(path) => self.save_file(&path),
            Command::Load(path) => self.load_file(&path),
            Command::Clear => {
                self.doc.clear();
                self.board.clear();
                Ok(Response::message("Board cleared.").with_board())
            }
            Command::Exit => {
                self.running = false;
                Ok(Response::default())
            }
        }
    }

    /// Recompute the whole board from the registry
    pub fn redraw(&mut self) {
        render_all(&mut self.board, &self.doc);
    }

    /// Board rows as they should be printed
    pub fn board_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.board.rows(self.config.color)
    }

    pub fn save_file(&self, path: &Path) -> Result<Response, BoardError> {
        let count = file_io::save_shapes(&self.doc, path)?;
        Ok(Response::message(format!("Saved {} shapes to {}", count, path.display())))
    }

    /// Replace the registry with the shapes stored in `path`. An unreadable
    /// file leaves the session untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<Response, BoardError> {
        let report = file_io::load_shapes(path, self.config.width, self.config.height)?;
        let mut response = Response::default();
        for skipped in &report.skipped {
            response
                .lines
                .push(format!("Skipping line {}: {}", skipped.line, skipped.reason));
        }
        for (shape, reason) in self.doc.replace_all(report.shapes) {
            response.lines.push(format!("Skipping {}: {}", shape, reason));
        }
        self.redraw();
        response.lines.push(format!(
            "Loaded {} shapes from {}",
            self.doc.len(),
            path.display()
        ));
        Ok(response.with_board())
    }

    fn list(&self) -> Response {
        if self.doc.is_empty() {
            return Response::message("No shapes added.");
        }
        let mut response = Response::message("List of shapes:");
        response
            .lines
            .extend(self.doc.list().map(|(id, desc)| format!("ID: {} - {}", id, desc)));
        response
    }

    fn selected_message(&self, id: ShapeId) -> Response {
        self.shape_message("Selected", id)
    }

    fn shape_message(&self, verb: &str, id: ShapeId) -> Response {
        match self.doc.get(id) {
            Some(shape) => Response::message(format!("{} shape {}: {}", verb, id, shape.describe())),
            None => Response::message(format!("{} shape {}", verb, id)),
        }
    }
}

fn lines(text: &str) -> Response {
    Response {
        lines: text.lines().map(str::to_string).collect(),
        show_board: false,
    }
}
