//! Media commands and queryable fields understood by the status tool.
//!
//! The external binary is driven with one argument per action:
//!
//! ```text
//! nowplaying-cli get-raw             full dictionary dump
//! nowplaying-cli get elapsedTime     a single live field
//! nowplaying-cli togglePlayPause     a transport command
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a route segment names no known command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown media command: {0}")]
pub struct CommandParseError(pub String);

/// Transport commands accepted by `GET /command/:command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    Pause,
    /// Exposed on the route as `toggle`.
    TogglePlayPause,
    Next,
    Previous,
}

impl MediaCommand {
    /// The argument passed to the status binary.
    pub fn as_cli_arg(self) -> &'static str {
        match self {
            MediaCommand::Play => "play",
            MediaCommand::Pause => "pause",
            MediaCommand::TogglePlayPause => "togglePlayPause",
            MediaCommand::Next => "next",
            MediaCommand::Previous => "previous",
        }
    }
}

impl FromStr for MediaCommand {
    type Err = CommandParseError;

    /// Parses the public route name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(MediaCommand::Play),
            "pause" => Ok(MediaCommand::Pause),
            "toggle" => Ok(MediaCommand::TogglePlayPause),
            "next" => Ok(MediaCommand::Next),
            "previous" => Ok(MediaCommand::Previous),
            other => Err(CommandParseError(other.to_string())),
        }
    }
}

impl fmt::Display for MediaCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cli_arg())
    }
}

/// Fields fetched one at a time with `get <field>`.
///
/// The dump may carry a stale elapsed time and never includes artwork bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaField {
    ArtworkData,
    ElapsedTime,
    Duration,
}

impl MediaField {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaField::ArtworkData => "artworkData",
            MediaField::ElapsedTime => "elapsedTime",
            MediaField::Duration => "duration",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names_parse() {
        let cases = [
            ("play", MediaCommand::Play),
            ("pause", MediaCommand::Pause),
            ("toggle", MediaCommand::TogglePlayPause),
            ("next", MediaCommand::Next),
            ("previous", MediaCommand::Previous),
        ];

        for (name, expected) in cases {
            assert_eq!(name.parse::<MediaCommand>(), Ok(expected));
        }
    }

    #[test]
    fn test_toggle_maps_to_toggle_play_pause_argument() {
        let cmd: MediaCommand = "toggle".parse().unwrap();
        assert_eq!(cmd.as_cli_arg(), "togglePlayPause");
    }

    #[test]
    fn test_cli_argument_name_is_not_a_route_name() {
        assert!("togglePlayPause".parse::<MediaCommand>().is_err());
    }

    #[test]
    fn test_unknown_and_mis_cased_names_are_rejected() {
        assert_eq!(
            "stop".parse::<MediaCommand>(),
            Err(CommandParseError("stop".to_string()))
        );
        assert!("Play".parse::<MediaCommand>().is_err());
        assert!("".parse::<MediaCommand>().is_err());
    }

    #[test]
    fn test_field_names_match_cli_keys() {
        assert_eq!(MediaField::ArtworkData.as_str(), "artworkData");
        assert_eq!(MediaField::ElapsedTime.as_str(), "elapsedTime");
        assert_eq!(MediaField::Duration.as_str(), "duration");
    }
}
