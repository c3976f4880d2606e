//! Command-line vocabulary of the drawing session.

use std::path::PathBuf;

use crate::canvas::Position;
use crate::document::ShapeId;
use crate::error::BoardError;
use crate::shapes::{Shape, ShapeColor, ShapeKind};

/// Catalogue printed by `shapes`
pub const SHAPES_HELP: &str = "\
Available shapes and parameters:
1. Circle: add circle <centerX> <centerY> <radius>
2. Rectangle: add rectangle <leftX> <topY> <width> <height>
3. Triangle (Right): add triangle right <leftX> <topY> <length>
4. Triangle (Equilateral): add triangle equal <centerX> <topY> <length>
Prefix the shape with `fill <color>` to place a filled, colored shape.";

/// Vocabulary printed by `help`
pub const COMMANDS_HELP: &str = "\
Commands:
  add [fill <color>] <shape> <params...>  place a shape (see `shapes`)
  draw                                    redraw and print the board
  list                                    list placed shapes
  shapes                                  list available shapes
  select <id> | select <x> <y>            select a shape
  move <x> <y>                            move the selection
  edit <params...>                        resize the selection
  paint <color>                           recolor the selection
  remove                                  delete the selection
  undo                                    delete the most recent shape
  save <file> | load <file>               persist or restore the board
  clear                                   remove every shape
  exit                                    quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Shape),
    Draw,
    List,
    Shapes,
    Help,
    SelectId(ShapeId),
    SelectAt(Position),
    Move(Position),
    Edit(Vec<i32>),
    Paint(Option<ShapeColor>),
    Remove,
    Undo,
    Save(PathBuf),
    Load(PathBuf),
    Clear,
    Exit,
}

fn int(token: &str) -> Result<i32, BoardError> {
    token
        .parse()
        .map_err(|_| BoardError::InvalidNumber(token.to_string()))
}

fn no_args(verb: &str, args: &[&str], command: Command) -> Result<Command, BoardError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(BoardError::arity(verb, 0, args.len()))
    }
}

fn position(verb: &str, args: &[&str]) -> Result<Position, BoardError> {
    match args {
        [x, y] => Ok(Position::new(int(x)?, int(y)?)),
        _ => Err(BoardError::arity(verb, 2, args.len())),
    }
}

/// Everything after the verb, verbatim apart from the surrounding
/// whitespace, so file names keep their inner spacing
fn path(rest: &str, what: &'static str) -> Result<PathBuf, BoardError> {
    match rest.trim() {
        "" => Err(BoardError::MissingArgument(what)),
        name => Ok(PathBuf::from(name)),
    }
}

/// Parse the arguments of `add`: `[fill <color>] <shape> <params...>`
pub fn parse_add(args: &[&str]) -> Result<Shape, BoardError> {
    match args {
        ["fill", color, rest @ ..] => {
            let color = ShapeColor::parse_tag(color)?;
            Ok(Shape::filled(ShapeKind::parse(rest)?, color))
        }
        ["fill"] => Err(BoardError::MissingArgument("fill color")),
        _ => Ok(Shape::new(ShapeKind::parse(args)?)),
    }
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, BoardError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let rest = &line.trim_start()[verb.len()..];

        let command = match verb {
            "add" => Command::Add(parse_add(args)?),
            "draw" => no_args(verb, args, Command::Draw)?,
            "list" => no_args(verb, args, Command::List)?,
            "shapes" => no_args(verb, args, Command::Shapes)?,
            "help" => no_args(verb, args, Command::Help)?,
            "select" => match args {
                [id] => {
                    let id = int(id)?;
                    let id = u64::try_from(id)
                        .map_err(|_| BoardError::NonPositive { name: "id", value: id })?;
                    Command::SelectId(ShapeId(id))
                }
                [_, _] => Command::SelectAt(position(verb, args)?),
                [] => return Err(BoardError::MissingArgument("shape id or coordinates")),
                _ => return Err(BoardError::arity(verb, 2, args.len())),
            },
            "move" => Command::Move(position(verb, args)?),
            "edit" => {
                if args.is_empty() {
                    return Err(BoardError::MissingArgument("size parameters"));
                }
                Command::Edit(args.iter().map(|t| int(t)).collect::<Result<_, _>>()?)
            }
            "paint" => match args {
                [color] => Command::Paint(ShapeColor::parse_tag(color)?),
                [] => return Err(BoardError::MissingArgument("color")),
                _ => return Err(BoardError::arity(verb, 1, args.len())),
            },
            "remove" => no_args(verb, args, Command::Remove)?,
            "undo" => no_args(verb, args, Command::Undo)?,
            "save" => Command::Save(path(rest, "file name")?),
            "load" => Command::Load(path(rest, "file name")?),
            "clear" => no_args(verb, args, Command::Clear)?,
            "exit" => no_args(verb, args, Command::Exit)?,
            // Unknown verbs land in the shape parser's namespace
            other => return Err(BoardError::UnknownShape(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Option<Command>, BoardError> {
        Command::parse(line)
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \t"), Ok(None));
    }

    #[test]
    fn add_outline_shapes() {
        assert_eq!(
            parse("add circle 10 10 3"),
            Ok(Some(Command::Add(Shape::new(ShapeKind::Circle {
                center: Position::new(10, 10),
                radius: 3
            }))))
        );
        assert_eq!(
            parse("add triangle right 1 2 3"),
            Ok(Some(Command::Add(Shape::new(ShapeKind::RightTriangle {
                origin: Position::new(1, 2),
                length: 3
            }))))
        );
    }

    #[test]
    fn add_filled_shape() {
        assert_eq!(
            parse("add fill red rectangle 1 2 3 4"),
            Ok(Some(Command::Add(Shape::filled(
                ShapeKind::Rectangle {
                    origin: Position::new(1, 2),
                    width: 3,
                    height: 4
                },
                Some(ShapeColor::Red)
            ))))
        );
        assert_eq!(
            parse("add fill mauve circle 1 1 1"),
            Err(BoardError::UnknownColor("mauve".into()))
        );
        assert_eq!(
            parse("add fill"),
            Err(BoardError::MissingArgument("fill color"))
        );
    }

    #[test]
    fn unknown_verbs_report_unknown_shape() {
        assert_eq!(
            parse("hexagon 1 2 3"),
            Err(BoardError::UnknownShape("hexagon".into()))
        );
        // A bare shape name is not a verb
        assert_eq!(
            parse("circle 1 2 3"),
            Err(BoardError::UnknownShape("circle".into()))
        );
        assert_eq!(
            parse("add blob 1 2"),
            Err(BoardError::UnknownShape("blob".into()))
        );
    }

    #[test]
    fn select_forms() {
        assert_eq!(parse("select 3"), Ok(Some(Command::SelectId(ShapeId(3)))));
        assert_eq!(
            parse("select 6 5"),
            Ok(Some(Command::SelectAt(Position::new(6, 5))))
        );
        assert!(parse("select").is_err());
        assert!(parse("select -1").is_err());
        assert!(parse("select a").is_err());
    }

    #[test]
    fn selection_commands() {
        assert_eq!(
            parse("move 4 5"),
            Ok(Some(Command::Move(Position::new(4, 5))))
        );
        assert_eq!(parse("move 4"), Err(BoardError::arity("move", 2, 1)));
        assert_eq!(parse("edit 4 5"), Ok(Some(Command::Edit(vec![4, 5]))));
        assert_eq!(parse("edit -1"), Ok(Some(Command::Edit(vec![-1]))));
        assert!(parse("edit").is_err());
        assert_eq!(
            parse("paint blue"),
            Ok(Some(Command::Paint(Some(ShapeColor::Blue))))
        );
        assert_eq!(parse("paint none"), Ok(Some(Command::Paint(None))));
        assert_eq!(parse("remove"), Ok(Some(Command::Remove)));
    }

    #[test]
    fn simple_verbs() {
        assert_eq!(parse("draw"), Ok(Some(Command::Draw)));
        assert_eq!(parse("list"), Ok(Some(Command::List)));
        assert_eq!(parse("undo"), Ok(Some(Command::Undo)));
        assert_eq!(parse("clear"), Ok(Some(Command::Clear)));
        assert_eq!(parse("exit"), Ok(Some(Command::Exit)));
        assert_eq!(parse("draw now"), Err(BoardError::arity("draw", 0, 1)));
    }

    #[test]
    fn file_commands() {
        assert_eq!(
            parse("save my board.txt"),
            Ok(Some(Command::Save(PathBuf::from("my board.txt"))))
        );
        assert_eq!(
            parse("load board.txt"),
            Ok(Some(Command::Load(PathBuf::from("board.txt"))))
        );
        assert_eq!(parse("load"), Err(BoardError::MissingArgument("file name")));
        assert_eq!(parse("save   "), Err(BoardError::MissingArgument("file name")));
    }

    #[test]
    fn file_names_keep_inner_whitespace() {
        assert_eq!(
            parse("  save  my  board\t1.txt  "),
            Ok(Some(Command::Save(PathBuf::from("my  board\t1.txt"))))
        );
    }
}
