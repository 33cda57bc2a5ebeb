use serde::Deserialize;

/// Actions are triggered within widgets, f.e. by the map list's
/// buttons, and allow the user to interact with the client.
///
/// Each of the variants can be parsed from JSON objects, f.e.:
/// `{ "action": "SelectMap", "map_name": "MapA" }`
#[derive(Deserialize, Debug)]
#[serde(tag = "action")]
pub enum Action<'a> {
    /// Open the leaderboard of the given map.
    SelectMap { map_name: &'a str },

    /// Close the open leaderboard, and go back to the map list.
    LeaveLeaderboard,

    /// Narrow the map list down to names containing this text.
    SetSearch { text: &'a str },

    /// Stage a screenshot for the next upload.
    ChooseFile { path: &'a str },

    /// Submit the staged screenshot to the backend.
    SubmitRun,

    /// Re-fetch the record collection.
    RefreshRecords,
}

impl Action<'_> {
    /// Parse an action.
    ///
    /// # Panics
    /// Panics if the given string is not a valid JSON representation of any action.
    pub fn from_json(json_str: &str) -> Action {
        serde_json::from_str(json_str).expect("failed to deserialize action")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_select_map() {
        let action = Action::from_json(r#"{ "action": "SelectMap", "map_name": "MapA" }"#);
        match action {
            Action::SelectMap { map_name } => assert_eq!("MapA", map_name),
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn test_parse_submit() {
        let action = Action::from_json(r#"{ "action": "SubmitRun" }"#);
        assert!(matches!(action, Action::SubmitRun));
    }
}
