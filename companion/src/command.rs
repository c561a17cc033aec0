use std::str::FromStr;

use pitfall::{Attribute, DeducedState, Location, NeighborSensed, ParseLocationError, SquareStep};
use thiserror::Error;

pub(crate) const HELP: &str = "\
commands:
  left|right|up|down, h|l|k|j   move the selection one room
  p, a, d                       toggle the pit, arrow or dragon clue
  explore, e                    enter the selected room with the current clues
  found, f                      the selected room holds a pit
  goto <room>                   select a room, e.g. `goto C:4` or `goto 4,2`
  show                          draw the dungeon
  room, i                       details of the selected room
  set visited <true|false>      correct the selected room by hand
  set sensed <attribute> <unknown|no|yes>
  set deduced <attribute> <unknown|maybe|yes|no>
  update                        re-run deduction after corrections
  reset                         forget everything
  help, ?                       this text
  quit, q";

/// A manual correction of the selected room.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Correction {
    Visited(bool),
    Sensed(Attribute, NeighborSensed),
    Deduced(Attribute, DeducedState),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Move(SquareStep),
    Toggle(Attribute),
    Explore,
    FoundAPit,
    Goto(Location),
    Show,
    Room,
    Set(Correction),
    Update,
    Reset,
    Help,
    Quit,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub(crate) enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("{value:?} is not a valid {what}")]
    BadValue { what: &'static str, value: String },
    #[error(transparent)]
    Location(#[from] ParseLocationError),
}

fn parse_value<T: FromStr>(what: &'static str, value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::BadValue { what, value: value.to_owned() })
}

fn parse_correction(args: &[&str]) -> Result<Correction, CommandError> {
    const USAGE: &str = "set visited <true|false> | set sensed <attribute> <state> | set deduced <attribute> <state>";

    match args {
        ["visited", value] => Ok(Correction::Visited(parse_value("flag", value)?)),
        ["sensed", attribute, state] => Ok(Correction::Sensed(parse_value("attribute", attribute)?, parse_value("sensed state", state)?)),
        ["deduced", attribute, state] => Ok(Correction::Deduced(parse_value("attribute", attribute)?, parse_value("deduced state", state)?)),
        _ => Err(CommandError::Usage(USAGE)),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Err(CommandError::Empty);
        };
        let head = head.to_ascii_lowercase();

        if let Ok(step) = head.parse::<SquareStep>() {
            return match args {
                [] => Ok(Self::Move(step)),
                _ => Err(CommandError::Usage("left|right|up|down")),
            };
        }

        let command = match head.as_str() {
            "p" => Self::Toggle(Attribute::Pit),
            "a" => Self::Toggle(Attribute::Arrow),
            "d" => Self::Toggle(Attribute::Dragon),
            "explore" | "e" => Self::Explore,
            "found" | "f" => Self::FoundAPit,
            "goto" => {
                if args.is_empty() {
                    return Err(CommandError::Usage("goto <room>"));
                }
                return Ok(Self::Goto(args.join(" ").parse()?));
            }
            "show" => Self::Show,
            "room" | "i" => Self::Room,
            "set" => return Ok(Self::Set(parse_correction(args)?)),
            "update" => Self::Update,
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(head)),
        };

        match args {
            [] => Ok(command),
            _ => Err(CommandError::Unknown(s.trim().to_owned())),
        }
    }
}
