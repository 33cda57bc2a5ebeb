/// This data type makes the controller flow explicit: components do not
/// call back into each other directly, but hand one of these to the
/// facade, which reacts on behalf of the whole client.
#[derive(Debug)]
pub enum ControllerEvent {
    /// Signals that a fetch succeeded, and the record collection
    /// was replaced wholesale.
    NewRecords {
        /// Size of the new collection.
        nb_records: usize,
    },

    /// Signals that an upload attempt has settled, one way or
    /// the other. Emitted once per submission that reached the
    /// backend; guarded submissions (no file chosen) never produce
    /// this event.
    UploadEnded { outcome: UploadOutcome },
}

/// How an upload attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The backend extracted a record from the screenshot and
    /// stored it. The record set is now out of date.
    Stored { username: String, map_name: String },

    /// Nothing was stored: the backend refused the screenshot,
    /// or it never got there.
    Rejected { reason: String },
}
