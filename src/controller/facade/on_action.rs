use std::path::Path;

use crate::action::Action;
use crate::controller::Controller;
use crate::event::ControllerEvent;

impl Controller {
    /// Dispatch user input to the controller that owns the
    /// affected state.
    pub async fn on_action(&self, action: Action<'_>) {
        use Action::*;

        log::debug!("{:?}", &action);

        match action {
            SelectMap { map_name } => {
                self.screen.select_map(map_name).await;
            }

            LeaveLeaderboard => {
                self.screen.leave_leaderboard().await;
            }

            SetSearch { text } => {
                self.screen.set_search(text).await;
            }

            ChooseFile { path } => {
                self.upload.choose_file(Path::new(path)).await;
            }

            SubmitRun => {
                // The upload controller settles the attempt; whether
                // the record set must be re-fetched is decided here.
                if let Some(outcome) = self.upload.submit().await {
                    let ev = ControllerEvent::UploadEnded { outcome };
                    self.on_controller_event(ev).await;
                }
            }

            RefreshRecords => {
                if let Some(nb_records) = self.records.refresh().await {
                    let ev = ControllerEvent::NewRecords { nb_records };
                    self.on_controller_event(ev).await;
                }
            }
        }
    }
}
