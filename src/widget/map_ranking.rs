use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::controller::RecordsState;
use crate::widget::formatters::format_kst;
use crate::widget::Widget;

/// A widget that displays one map's ranked records.
///
/// # Sending
/// - Show while the map is selected.
/// - Re-render after every records refresh.
#[derive(Serialize, Debug)]
pub struct MapRankingWidget<'a> {
    /// The selected map.
    pub map_name: &'a str,

    /// All of the map's records, ranked fastest-first. May be empty,
    /// which renders an empty table.
    pub entries: Vec<MapRankingEntry<'a>>,

    /// `True` if the ranking is derived from a stale collection
    /// because the last fetch failed.
    pub stale: bool,
}

#[derive(Serialize, Debug)]
pub struct MapRankingEntry<'a> {
    /// The record's rank on this map.
    pub pos: usize,

    pub username: &'a str,

    /// The formatted lap time; rendered as a link to the screenshot
    /// it was extracted from.
    pub lap_time: &'a str,

    pub screenshot_url: &'a str,

    /// The moment the screenshot was uploaded.
    #[serde(serialize_with = "format_kst")]
    pub uploaded_at: DateTime<Utc>,
}

impl<'a> MapRankingWidget<'a> {
    pub fn new(records: &'a RecordsState, map_name: &'a str) -> Self {
        let entries = records
            .leaderboard(map_name)
            .into_iter()
            .map(|row| MapRankingEntry {
                pos: row.rank,
                username: &row.record.username,
                lap_time: &row.record.lap_time,
                screenshot_url: &row.record.screenshot_url,
                uploaded_at: row.record.uploaded_at,
            })
            .collect();

        MapRankingWidget {
            map_name,
            entries,
            stale: records.fetch_failed(),
        }
    }
}

impl Widget for MapRankingWidget<'_> {
    const FILE: &'static str = "map_ranking.j2";
}
