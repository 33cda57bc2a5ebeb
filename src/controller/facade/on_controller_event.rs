use async_recursion::async_recursion;

use crate::controller::Controller;
use crate::event::{ControllerEvent, UploadOutcome};

impl Controller {
    #[async_recursion]
    pub(super) async fn on_controller_event(&self, event: ControllerEvent) {
        use ControllerEvent::*;

        log::debug!("{:?}", &event);

        match event {
            UploadEnded { outcome } => match outcome {
                UploadOutcome::Stored { username, map_name } => {
                    log::info!("stored a {} lap for {}", map_name, username);

                    // The collection no longer contains everything the
                    // backend knows; fetch the new record set once.
                    if let Some(nb_records) = self.records.refresh().await {
                        let ev = ControllerEvent::NewRecords { nb_records };
                        self.on_controller_event(ev).await;
                    }
                }
                UploadOutcome::Rejected { reason } => {
                    log::info!("upload rejected: {}", reason);
                }
            },

            NewRecords { nb_records } => {
                log::debug!("record collection replaced, now {} records", nb_records);
            }
        }
    }
}
