use crate::network::LapRecord;

/// One row of a map's leaderboard.
#[derive(Debug, PartialEq)]
pub struct RankedRecord<'a> {
    /// 1-based position in the ranking.
    pub rank: usize,

    pub record: &'a LapRecord,
}

/// The leaderboard of one map: all records whose `map_name` equals the
/// given name exactly (case-sensitive, unlike the catalog search),
/// ranked fastest-first.
///
/// Times are compared as strings; the backend keeps them zero-padded
/// per map so that this coincides with duration order. The sort is
/// stable, so records with equal times keep their collection order.
/// An unknown map name yields an empty leaderboard, not an error.
pub fn map_leaderboard<'a>(records: &'a [LapRecord], map_name: &str) -> Vec<RankedRecord<'a>> {
    let mut rows: Vec<&LapRecord> = records
        .iter()
        .filter(|record| record.map_name == map_name)
        .collect();
    rows.sort_by(|a, b| a.lap_time.cmp(&b.lap_time));

    rows.into_iter()
        .enumerate()
        .map(|(idx, record)| RankedRecord {
            rank: idx + 1,
            record,
        })
        .collect()
}
