use indexmap::IndexSet;

use crate::network::LapRecord;

/// The distinct map names present in the given records, filtered to
/// those containing the search text case-insensitively. Substring
/// matching, not prefix: searching "apb" finds "MapB".
///
/// Names keep the order in which their map first appears in the
/// collection, which is the order the backend returned. An empty
/// search text yields the unfiltered catalog.
pub fn map_catalog<'a>(records: &'a [LapRecord], search: &str) -> Vec<&'a str> {
    let needle = search.to_lowercase();

    let mut names: IndexSet<&str> = IndexSet::new();
    for record in records {
        names.insert(record.map_name.as_str());
    }

    names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}
