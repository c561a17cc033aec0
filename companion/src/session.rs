use pitfall::{Attribute, Dimension, Dungeon, PerAttribute};
use strum::VariantArray;
use tracing::debug;

use crate::command::{Command, Correction, HELP};

/// What the driver should do after a command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Redraw,
    Print(String),
    Quit,
}

/// The dungeon plus the clue toggles the player sets before exploring. Toggles survive exploring and resetting.
pub(crate) struct Companion {
    dungeon: Dungeon,
    clues: PerAttribute<bool>,
}

impl Companion {
    pub(crate) fn new(size: Dimension) -> Self {
        Self {
            dungeon: Dungeon::new(size),
            clues: PerAttribute::splat(false),
        }
    }

    pub(crate) fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub(crate) fn apply(&mut self, command: Command) -> Outcome {
        debug!(?command, "applying");

        match command {
            Command::Move(step) => self.dungeon.move_selection(step),
            Command::Toggle(attribute) => {
                self.clues[attribute] = !self.clues[attribute];
                return Outcome::Print(self.status());
            }
            Command::Explore => self.dungeon.explore_with(self.clues),
            Command::FoundAPit => self.dungeon.found_a_pit(),
            Command::Goto(location) => self.dungeon.select(location),
            Command::Show => {}
            Command::Room => return Outcome::Print(self.room_details()),
            Command::Set(correction) => {
                match correction {
                    Correction::Visited(visited) => self.dungeon.set_visited(visited),
                    Correction::Sensed(attribute, sensed) => self.dungeon.set_sensed(attribute, sensed),
                    Correction::Deduced(attribute, deduced) => self.dungeon.set_deduced(attribute, deduced),
                }
                return Outcome::Print(self.room_details());
            }
            Command::Update => self.dungeon.update_room_states(),
            Command::Reset => self.dungeon.reset(),
            Command::Help => return Outcome::Print(HELP.to_owned()),
            Command::Quit => return Outcome::Quit,
        }

        Outcome::Redraw
    }

    /// The dungeon followed by the status line.
    pub(crate) fn render(&self) -> String {
        format!("{}{}\n", self.dungeon, self.status())
    }

    /// The selected room and the clue toggles, e.g. `A:0  clues: [x] Pit [ ] Arrow [ ] Dragon`.
    pub(crate) fn status(&self) -> String {
        let clues: Vec<String> = self.clues.iter()
            .map(|(attribute, set)| format!("[{}] {}", if *set { 'x' } else { ' ' }, attribute))
            .collect();
        format!("{}  clues: {}", self.dungeon.selected(), clues.join(" "))
    }

    pub(crate) fn room_details(&self) -> String {
        let room = self.dungeon.selected_room();
        let states = |f: &dyn Fn(Attribute) -> String| -> String {
            Attribute::VARIANTS.iter().map(|&attribute| format!("{}: {}", attribute, f(attribute))).collect::<Vec<_>>().join("  ")
        };
        let hints: Vec<String> = room.hints().map(|(attribute, severity)| format!("{attribute} ({severity})")).collect();

        format!(
            "position: {}\nvisited: {}\nneighbor  {}\nroom      {}\nhints: {}",
            room.location(),
            room.visited(),
            states(&|attribute| room.sensed(attribute).to_string()),
            states(&|attribute| room.deduced(attribute).to_string()),
            if hints.is_empty() { "none".to_owned() } else { hints.join(", ") },
        )
    }
}
