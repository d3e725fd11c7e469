//! Checkbox sets and multiselects stored as comma-joined label lists.

/// Stored when nothing in a set was ticked.
pub const NOTHING_SELECTED: &str = "Nada";

const SEPARATOR: &str = ", ";

/// Labels of the ticked boxes, in declaration order, joined with ", ".
/// An empty selection yields [`NOTHING_SELECTED`].
pub fn serialize_checkboxes<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    serialize_labels(
        items
            .into_iter()
            .filter_map(|(label, ticked)| ticked.then_some(label)),
    )
}

/// Same rule for an already filtered list of labels (multiselects).
pub fn serialize_labels<'a, I>(labels: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let selected: Vec<&str> = labels.into_iter().collect();
    if selected.is_empty() {
        NOTHING_SELECTED.to_string()
    } else {
        selected.join(SEPARATOR)
    }
}

/// Read a stored selection back into its labels.
/// The sentinel, "-" and blank cells give an empty list.
pub fn parse_selection(text: &str) -> Vec<String> {
    let t = text.trim();
    if t.is_empty() || t == NOTHING_SELECTED || t == "-" {
        return Vec::new();
    }

    t.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
