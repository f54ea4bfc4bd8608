use std::fmt::Display;

use colored::Colorize;

/// Colored prefix for console output, e.g. `println!("{} Blanked", log::POWER)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    State,
    Screen,
    Power,
    Input,
    Thread,
    Hal,
    Error,
}

pub const STATE: Tag = Tag::State;
pub const SCREEN: Tag = Tag::Screen;
pub const POWER: Tag = Tag::Power;
pub const INPUT: Tag = Tag::Input;
pub const THREAD: Tag = Tag::Thread;
pub const HAL: Tag = Tag::Hal;
pub const ERROR: Tag = Tag::Error;

impl Tag {
    fn label(&self) -> &'static str {
        match self {
            Tag::State => "[STATE] ",
            Tag::Screen => "[SCREEN]",
            Tag::Power => "[POWER] ",
            Tag::Input => "[INPUT] ",
            Tag::Thread => "[THREAD]",
            Tag::Hal => "[HAL]   ",
            Tag::Error => "[ERROR] ",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.label();
        let colored = match self {
            Tag::State => label.green(),
            Tag::Screen => label.blue(),
            Tag::Power => label.yellow(),
            Tag::Input => label.cyan(),
            Tag::Thread => label.magenta(),
            Tag::Hal => label.white(),
            Tag::Error => label.red().bold(),
        };
        write!(f, "{}", colored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_keep_their_label() {
        colored::control::set_override(false);
        assert_eq!(format!("{}", STATE), "[STATE] ");
        assert_eq!(format!("{}", ERROR), "[ERROR] ");
        assert_eq!(format!("{}", SCREEN).len(), format!("{}", HAL).len());
    }
}
