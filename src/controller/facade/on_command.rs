use crate::action::Action;
use crate::command::SessionCommand;
use crate::controller::Controller;

impl Controller {
    /// Translate a shell command into the action it stands for.
    pub async fn on_command(&self, cmd: SessionCommand) {
        use SessionCommand::*;

        match cmd {
            // Handled by the shell itself.
            Help | Quit => {}

            Refresh => self.on_action(Action::RefreshRecords).await,

            Search { text } => self.on_action(Action::SetSearch { text: &text }).await,

            Open { map_name } => {
                self.on_action(Action::SelectMap {
                    map_name: &map_name,
                })
                .await
            }

            Back => self.on_action(Action::LeaveLeaderboard).await,

            File { path } => self.on_action(Action::ChooseFile { path: &path }).await,

            Upload => self.on_action(Action::SubmitRun).await,
        }
    }
}
