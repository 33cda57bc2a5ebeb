/// Commands typed into the session shell.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Print a reference of available commands.
    ///
    /// Usage: `help`
    Help,

    /// Re-fetch the record collection.
    ///
    /// Usage: `refresh`
    Refresh,

    /// Narrow the map list down with a search text;
    /// `search` on its own clears the filter.
    ///
    /// Usage: `search <text>`
    Search { text: String },

    /// Open the leaderboard of a map.
    ///
    /// Usage: `open <map name>`
    Open { map_name: String },

    /// Close the open leaderboard, and go back to the map list.
    ///
    /// Usage: `back`
    Back,

    /// Stage a screenshot for the next upload.
    ///
    /// Usage: `file <path>`
    File { path: String },

    /// Submit the staged screenshot to the backend.
    ///
    /// Usage: `upload`
    Upload,

    /// End the session.
    ///
    /// Usage: `quit`
    Quit,
}

impl SessionCommand {
    /// Parse a session command.
    pub fn from(line: &str) -> Option<SessionCommand> {
        use SessionCommand::*;

        let parts: Vec<&str> = line.split_whitespace().collect();

        match &parts[..] {
            ["help"] => Some(Help),
            ["refresh"] => Some(Refresh),
            ["search", rest @ ..] => Some(Search {
                text: rest.join(" "),
            }),
            ["open", rest @ ..] if !rest.is_empty() => Some(Open {
                map_name: rest.join(" "),
            }),
            ["back"] => Some(Back),
            ["file", rest @ ..] if !rest.is_empty() => Some(File {
                path: rest.join(" "),
            }),
            ["upload"] => Some(Upload),
            ["quit"] | ["exit"] => Some(Quit),
            _ => None,
        }
    }
}

/// Session command reference that can be printed in the shell.
pub const SESSION_COMMAND_REFERENCE: &str = "
help             Display this list.
refresh          Re-fetch all lap records.
search <text>    Filter the map list; 'search' alone clears the filter.
open <map>       Open a map's leaderboard.
back             Return to the map list.
file <path>      Stage a screenshot (PNG or JPEG) for upload.
upload           Submit the staged screenshot.
quit             End the session.
";
