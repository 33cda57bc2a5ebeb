use std::sync::Arc;

use crate::controller::*;
use crate::event::ControllerEvent;
use crate::network::Backend;
use crate::widget::{MapListWidget, MapRankingWidget, UploadFormWidget, Widget};

mod on_action;
mod on_command;
mod on_controller_event;

/// This facade hides all specific controllers behind one interface
/// that can react to user input.
#[derive(Clone)]
pub struct Controller {
    screen: ScreenController,
    records: RecordController,
    upload: UploadController,
}

impl Controller {
    pub async fn init(api: Arc<dyn Backend>) -> Controller {
        // Each controller owns disjoint state; they never call into
        // each other. Everything that crosses component boundaries
        // goes through this facade as a ControllerEvent.

        let screen = ScreenController::init();
        let records = RecordController::init(&api);
        let upload = UploadController::init(&api);

        let controller = Controller {
            screen,
            records,
            upload,
        };

        // The initial load. All records are fetched once per session
        // and filtered locally; selecting a map never refetches.
        if let Some(nb_records) = controller.records.refresh().await {
            let ev = ControllerEvent::NewRecords { nb_records };
            controller.on_controller_event(ev).await;
        }

        controller
    }

    /// Render the widgets of the active screen: the upload form is
    /// always visible, together with either the map list or the
    /// selected map's ranking.
    pub async fn current_view(&self) -> String {
        let screen = self.screen.lock().await;
        let records = self.records.lock().await;
        let upload = self.upload.lock().await;

        let upload_form = UploadFormWidget::new(&upload).render();

        match screen.screen() {
            Screen::MapList => {
                let map_list = MapListWidget::new(&records, screen.search()).render();
                format!("{}\n{}", upload_form, map_list)
            }
            Screen::Leaderboard(map_name) => {
                let ranking = MapRankingWidget::new(&records, map_name).render();
                format!("{}\n{}", upload_form, ranking)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::action::Action;
    use crate::network::mock::{record, MockBackend};
    use crate::network::{ApiError, UploadReceipt};

    async fn controller_with(api: Arc<MockBackend>) -> Controller {
        let api = api as Arc<dyn Backend>;
        Controller::init(api).await
    }

    fn screenshot_on_disk() -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .expect("failed to create screenshot file");
        std::fs::write(file.path(), b"screenshot").expect("failed to write screenshot file");
        file
    }

    #[tokio::test]
    async fn test_init_fetches_once() {
        let api = Arc::new(MockBackend::new());
        let _controller = controller_with(api.clone()).await;
        assert_eq!(1, api.nb_fetches());
    }

    #[tokio::test]
    async fn test_successful_upload_triggers_exactly_one_refresh() {
        let api = Arc::new(MockBackend::new());
        api.push_upload(Ok(UploadReceipt {
            username: "dave".to_string(),
            map_name: "MapC".to_string(),
            lap_time: None,
        }));
        let controller = controller_with(api.clone()).await;
        let nb_fetches_after_init = api.nb_fetches();

        let file = screenshot_on_disk();
        let path = file.path().to_string_lossy().to_string();
        controller.on_action(Action::ChooseFile { path: &path }).await;
        controller.on_action(Action::SubmitRun).await;

        assert_eq!(nb_fetches_after_init + 1, api.nb_fetches());
        assert_eq!(UploadStatus::Succeeded, controller.upload.status().await);
    }

    #[tokio::test]
    async fn test_failed_upload_triggers_no_refresh() {
        let api = Arc::new(MockBackend::new());
        api.push_upload(Err(ApiError::Rejected {
            reason: "no lap time detected".to_string(),
        }));
        let controller = controller_with(api.clone()).await;
        let nb_fetches_after_init = api.nb_fetches();

        let file = screenshot_on_disk();
        let path = file.path().to_string_lossy().to_string();
        controller.on_action(Action::ChooseFile { path: &path }).await;
        controller.on_action(Action::SubmitRun).await;

        assert_eq!(nb_fetches_after_init, api.nb_fetches());
        assert_eq!(UploadStatus::Failed, controller.upload.status().await);
        assert_eq!(
            Some("no lap time detected".to_string()),
            controller.upload.message().await
        );
    }

    #[tokio::test]
    async fn test_submitting_without_file_triggers_no_refresh() {
        let api = Arc::new(MockBackend::new());
        let controller = controller_with(api.clone()).await;
        let nb_fetches_after_init = api.nb_fetches();

        controller.on_action(Action::SubmitRun).await;

        assert_eq!(nb_fetches_after_init, api.nb_fetches());
        assert_eq!(0, api.nb_uploads());
        let message = controller.upload.message().await.unwrap();
        assert!(message.contains("Choose a screenshot"));
    }

    #[tokio::test]
    async fn test_browsing_view_lists_searched_maps() {
        let api = Arc::new(MockBackend::new());
        api.push_laptimes(Ok(vec![
            record("alice", "MapA", "01:23.456"),
            record("carol", "MapB", "00:10.000"),
        ]));
        let controller = controller_with(api).await;

        let view = controller.current_view().await;
        assert!(view.contains("MapA") && view.contains("MapB"));

        controller.on_action(Action::SetSearch { text: "mapb" }).await;
        let view = controller.current_view().await;
        assert!(!view.contains("MapA") && view.contains("MapB"));
    }

    #[tokio::test]
    async fn test_leaderboard_view_links_each_time_to_its_screenshot() {
        let api = Arc::new(MockBackend::new());
        api.push_laptimes(Ok(vec![
            record("alice", "MapA", "01:23.456"),
            record("bob", "MapA", "00:59.999"),
        ]));
        let controller = controller_with(api).await;

        controller.on_action(Action::SelectMap { map_name: "MapA" }).await;
        let view = controller.current_view().await;

        assert!(view.contains("https://screenshots.test/MapA/bob.png"));
        // bob's faster lap is ranked above alice's
        let bob = view.find("bob").unwrap();
        let alice = view.find("alice").unwrap();
        assert!(bob < alice);

        controller.on_action(Action::LeaveLeaderboard).await;
        let view = controller.current_view().await;
        assert!(view.contains("Search maps"));
    }

    #[tokio::test]
    async fn test_explicit_refresh_replaces_the_collection() {
        let api = Arc::new(MockBackend::new());
        api.push_laptimes(Ok(vec![record("alice", "MapA", "01:23.456")]));
        api.push_laptimes(Ok(vec![
            record("alice", "MapA", "01:23.456"),
            record("eve", "MapD", "00:45.000"),
        ]));
        let controller = controller_with(api).await;

        controller.on_action(Action::RefreshRecords).await;

        assert_eq!(2, controller.records.nb_records().await);
        assert!(controller.current_view().await.contains("MapD"));
    }
}
