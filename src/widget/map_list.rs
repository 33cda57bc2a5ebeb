use serde::Serialize;

use crate::controller::RecordsState;
use crate::widget::Widget;

/// The browsing screen: a search box plus one button per known map.
///
/// # Sending
/// - Show while no map is selected.
/// - Re-render after every search change and records refresh.
#[derive(Serialize, Debug)]
pub struct MapListWidget<'a> {
    /// Distinct map names matching the search, in first-seen order.
    pub maps: Vec<&'a str>,

    /// The search text shown in the input.
    pub search: &'a str,

    /// `True` if the catalog is derived from a stale collection
    /// because the last fetch failed.
    pub stale: bool,
}

impl<'a> MapListWidget<'a> {
    pub fn new(records: &'a RecordsState, search: &'a str) -> Self {
        MapListWidget {
            maps: records.map_catalog(search),
            search,
            stale: records.fetch_failed(),
        }
    }
}

impl Widget for MapListWidget<'_> {
    const FILE: &'static str = "map_list.j2";
}
