//! Sortable-list state reconciliation.
//!
//! A sortable field persists only the active subset of its choices, in the
//! user's order. The full display list is re-derived on every render by
//! merging that order with the widget's choice catalog.

/// One reconciled sortable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableEntry {
    /// Choice key.
    pub key: String,
    /// Display label from the catalog.
    pub label: String,
    /// Whether the row is part of the active (persisted) set.
    pub visible: bool,
}

/// Merges a persisted active order with the full choice catalog.
///
/// Active keys come first, in persisted order; catalog keys not yet active
/// follow in catalog order, hidden. Keys that left the catalog disappear,
/// so every returned key exists in `choices` exactly once and newly added
/// choices surface at the end as hidden-by-default.
pub fn reconcile(persisted: &[String], choices: &[(String, String)]) -> Vec<SortableEntry> {
    let mut entries = Vec::with_capacity(choices.len());

    for key in persisted {
        if let Some((_, label)) = choices.iter().find(|(k, _)| k == key) {
            entries.push(SortableEntry {
                key: key.clone(),
                label: label.clone(),
                visible: true,
            });
        }
    }

    for (key, label) in choices {
        if !persisted.contains(key) {
            entries.push(SortableEntry {
                key: key.clone(),
                label: label.clone(),
                visible: false,
            });
        }
    }

    entries
}

/// Returns the keys of the visible rows, in order.
pub fn active_keys(entries: &[SortableEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| e.visible)
        .map(|e| e.key.clone())
        .collect()
}

/// Serializes the visible rows to the comma-joined persistable value.
///
/// This is the value the hidden form input carries and the sortable
/// sanitizer parses back.
pub fn active_value(entries: &[SortableEntry]) -> String {
    active_keys(entries).join(",")
}
