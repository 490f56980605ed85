use super::model::ListingTable;

// ---------------------------------------------------------------------------
// Focus-area subset: keyword match on the neighbourhood column
// ---------------------------------------------------------------------------

/// Return indices of listings whose `column` value contains any of the
/// keywords, case-insensitively. Missing values never match, so a dataset
/// with no matching rows yields an empty subset rather than an error.
pub fn keyword_indices(table: &ListingTable, column: &str, keywords: &[String]) -> Vec<usize> {
    let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    table
        .column(column)
        .enumerate()
        .filter(|(_, value)| !value.is_null())
        .filter(|(_, value)| {
            let haystack = value.to_string().to_lowercase();
            needles.iter().any(|n| haystack.contains(n.as_str()))
        })
        .map(|(idx, _)| idx)
        .collect()
}
