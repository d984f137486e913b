use std::str::FromStr;

use wordsearch_core::Cell;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    Press(Cell),
    Hover(Cell),
    Release(Cell),
    Select { start: Cell, end: Cell },
    Cancel,
    NewPuzzle,
    Show,
    Words,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ActionParseError {
    #[display("empty command")]
    Empty,
    #[display("unknown command `{name}` (try `help`)")]
    UnknownCommand { name: String },
    #[display("`{command}` takes {expected} argument(s), got {found}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[display("invalid coordinate `{value}`")]
    InvalidCoordinate { value: String },
}

pub const HELP: &str = "\
commands:
  press R C               start a selection at row R, column C
  hover R C               extend the selection preview to R C
  release R C             finish the selection at R C
  select R1 C1 R2 C2      select the line from R1 C1 to R2 C2
  cancel                  discard the selection in progress
  new                     start a new puzzle
  show                    print the board
  words                   list the target words
  help                    print this help
  quit                    exit";

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let name = tokens.next().ok_or(ActionParseError::Empty)?;
        let args = tokens.collect::<Vec<_>>();
        let name = name.to_ascii_lowercase();

        let action = match name.as_str() {
            "press" => Action::Press(cell_arg("press", &args)?),
            "hover" => Action::Hover(cell_arg("hover", &args)?),
            "release" => Action::Release(cell_arg("release", &args)?),
            "select" => {
                let [r1, c1, r2, c2] = coords::<4>("select", &args)?;
                Action::Select {
                    start: Cell::new(r1, c1),
                    end: Cell::new(r2, c2),
                }
            }
            "cancel" => nullary("cancel", &args, Action::Cancel)?,
            "new" => nullary("new", &args, Action::NewPuzzle)?,
            "show" => nullary("show", &args, Action::Show)?,
            "words" => nullary("words", &args, Action::Words)?,
            "help" | "?" => nullary("help", &args, Action::Help)?,
            "quit" | "exit" => nullary("quit", &args, Action::Quit)?,
            _ => return Err(ActionParseError::UnknownCommand { name }),
        };
        Ok(action)
    }
}

fn nullary(
    command: &'static str,
    args: &[&str],
    action: Action,
) -> Result<Action, ActionParseError> {
    coords::<0>(command, args)?;
    Ok(action)
}

fn cell_arg(command: &'static str, args: &[&str]) -> Result<Cell, ActionParseError> {
    let [row, col] = coords::<2>(command, args)?;
    Ok(Cell::new(row, col))
}

fn coords<const N: usize>(
    command: &'static str,
    args: &[&str],
) -> Result<[u8; N], ActionParseError> {
    if args.len() != N {
        return Err(ActionParseError::WrongArity {
            command,
            expected: N,
            found: args.len(),
        });
    }
    let mut values = [0; N];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = arg
            .parse()
            .map_err(|_| ActionParseError::InvalidCoordinate {
                value: (*arg).to_owned(),
            })?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_commands() {
        assert_eq!("press 1 2".parse(), Ok(Action::Press(Cell::new(1, 2))));
        assert_eq!("  HOVER 0  9 ".parse(), Ok(Action::Hover(Cell::new(0, 9))));
        assert_eq!("release 3 3".parse(), Ok(Action::Release(Cell::new(3, 3))));
        assert_eq!(
            "select 0 0 4 4".parse(),
            Ok(Action::Select {
                start: Cell::new(0, 0),
                end: Cell::new(4, 4),
            })
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("cancel".parse(), Ok(Action::Cancel));
        assert_eq!("new".parse(), Ok(Action::NewPuzzle));
        assert_eq!("show".parse(), Ok(Action::Show));
        assert_eq!("words".parse(), Ok(Action::Words));
        assert_eq!("?".parse(), Ok(Action::Help));
        assert_eq!("exit".parse(), Ok(Action::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("   ".parse::<Action>(), Err(ActionParseError::Empty));
        assert_eq!(
            "jump 1 1".parse::<Action>(),
            Err(ActionParseError::UnknownCommand {
                name: "jump".to_owned()
            })
        );
        assert_eq!(
            "press 1".parse::<Action>(),
            Err(ActionParseError::WrongArity {
                command: "press",
                expected: 2,
                found: 1,
            })
        );
        assert_eq!(
            "quit now".parse::<Action>(),
            Err(ActionParseError::WrongArity {
                command: "quit",
                expected: 0,
                found: 1,
            })
        );
        assert_eq!(
            "press -1 2".parse::<Action>(),
            Err(ActionParseError::InvalidCoordinate {
                value: "-1".to_owned()
            })
        );
        assert_eq!(
            "press 300 2".parse::<Action>(),
            Err(ActionParseError::InvalidCoordinate {
                value: "300".to_owned()
            })
        );
    }
}
