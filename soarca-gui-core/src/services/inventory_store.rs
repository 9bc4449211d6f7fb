//! Selectable, filterable playbook inventory

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::{Playbook, PlaybookStatus, PlaybookUpdate, StatusCounts};

/// Playbook inventory state
///
/// Owns the records, the filter term and the selection. The selection is kept
/// independently of the filter: hiding a record does not deselect it.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    records: Vec<Playbook>,
    filter: String,
    /// Lowercased `filter`, cached for matching
    needle: String,
    selection: HashSet<String>,
}

fn ensure_unique_ids(records: &[Playbook]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(CoreError::ValidationError(format!(
                "Duplicate playbook id: '{}'",
                record.id
            )));
        }
    }
    Ok(())
}

impl InventoryStore {
    /// Create a store over `records`, rejecting duplicate ids
    pub fn new(records: Vec<Playbook>) -> CoreResult<Self> {
        ensure_unique_ids(&records)?;
        Ok(Self {
            records,
            ..Self::default()
        })
    }

    /// Replace the records (reload), keeping the filter
    ///
    /// Selected ids that no longer exist are dropped from the selection.
    pub fn replace_records(&mut self, records: Vec<Playbook>) -> CoreResult<()> {
        ensure_unique_ids(&records)?;
        self.records = records;
        let records = &self.records;
        self.selection
            .retain(|id| records.iter().any(|record| &record.id == id));
        Ok(())
    }

    // ===== Queries =====

    #[must_use]
    pub fn records(&self) -> &[Playbook] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Playbook> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Records matching the filter, in collection order
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&Playbook> {
        self.records
            .iter()
            .filter(|record| record.matches(&self.needle))
            .collect()
    }

    #[must_use]
    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Selected ids, in collection order
    #[must_use]
    pub fn selected_ids(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| self.selection.contains(&record.id))
            .map(|record| record.id.clone())
            .collect()
    }

    /// Every filtered record is selected (false when nothing matches)
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        let mut filtered = self.filtered_records().into_iter().peekable();
        filtered.peek().is_some() && filtered.all(|record| self.selection.contains(&record.id))
    }

    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        self.records
            .iter()
            .fold(StatusCounts::default(), |mut counts, record| {
                match record.status {
                    PlaybookStatus::Draft => counts.draft += 1,
                    PlaybookStatus::Active => counts.active += 1,
                    PlaybookStatus::Inactive => counts.inactive += 1,
                }
                counts
            })
    }

    // ===== Filter & selection =====

    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.filter = term.into();
        self.needle = self.filter.to_lowercase();
    }

    /// Add or remove `id` from the selection
    pub fn toggle_selection(&mut self, id: &str) -> CoreResult<()> {
        if self.get(id).is_none() {
            return Err(CoreError::PlaybookNotFound(id.to_string()));
        }
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
        Ok(())
    }

    /// `true`: select exactly the filtered records. `false`: clear the selection.
    pub fn select_all(&mut self, checked: bool) {
        if checked {
            let ids: HashSet<String> = self
                .filtered_records()
                .into_iter()
                .map(|record| record.id.clone())
                .collect();
            self.selection = ids;
        } else {
            self.selection.clear();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ===== Mutations =====

    /// Set `status` on every selected record and clear the selection
    ///
    /// Returns the ids that were changed, in collection order.
    pub fn apply_bulk_status(&mut self, status: PlaybookStatus) -> Vec<String> {
        let mut changed = Vec::with_capacity(self.selection.len());
        for record in &mut self.records {
            if self.selection.contains(&record.id) {
                record.status = status;
                record.touch();
                changed.push(record.id.clone());
            }
        }
        self.selection.clear();
        changed
    }

    /// Remove every selected record and clear the selection
    ///
    /// Returns the removed records, in collection order.
    pub fn delete_selected(&mut self) -> Vec<Playbook> {
        let selection = std::mem::take(&mut self.selection);
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| selection.contains(&record.id));
        self.records = kept;
        removed
    }

    /// Merge `update` into the record with `update.id`
    pub fn save_playbook(&mut self, update: &PlaybookUpdate) -> CoreResult<&Playbook> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == update.id)
            .ok_or_else(|| CoreError::PlaybookNotFound(update.id.clone()))?;
        update.apply_to(record);
        Ok(&*record)
    }

    /// Roll `ids` back to their state in `snapshot`
    ///
    /// Records missing from the store are reinserted at their snapshot position;
    /// records missing from the snapshot are removed. Untouched records keep their
    /// current state.
    pub fn restore_from(&mut self, snapshot: &[Playbook], ids: &[String]) {
        if ids.is_empty() {
            return;
        }
        let restoring = |id: &str| ids.iter().any(|target| target == id);

        let mut current = std::mem::take(&mut self.records);
        let mut rebuilt = Vec::with_capacity(snapshot.len().max(current.len()));

        for original in snapshot {
            if restoring(&original.id) {
                current.retain(|record| record.id != original.id);
                rebuilt.push(original.clone());
            } else if let Some(pos) = current.iter().position(|record| record.id == original.id) {
                rebuilt.push(current.remove(pos));
            }
        }
        // Records created after the snapshot stay, unless rolled back
        rebuilt.extend(current.into_iter().filter(|record| !restoring(&record.id)));

        self.records = rebuilt;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::sample_playbooks;

    fn sample_store() -> InventoryStore {
        InventoryStore::new(sample_playbooks()).unwrap()
    }

    fn draft(id: &str) -> Playbook {
        Playbook::new(id, id, "", PlaybookStatus::Draft, "tester")
    }

    fn ids(records: &[&Playbook]) -> Vec<String> {
        records.iter().map(|record| record.id.clone()).collect()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = InventoryStore::new(vec![draft("pb-1"), draft("pb-1")]);
        assert!(matches!(result, Err(CoreError::ValidationError(_))));

        let mut store = sample_store();
        assert!(store.replace_records(vec![draft("a"), draft("a")]).is_err());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let store = sample_store();
        let all: Vec<String> = sample_playbooks().into_iter().map(|p| p.id).collect();
        assert_eq!(ids(&store.filtered_records()), all);
    }

    #[test]
    fn filter_malware_matches_single_record() {
        let mut store = sample_store();
        store.set_filter("MALWARE");
        let filtered = store.filtered_records();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Malware Containment");
    }

    #[test]
    fn filtered_records_all_contain_term() {
        let mut store = sample_store();
        for term in ["admin", "Cloud", "pb-00", "ticket", "zzz", "s"] {
            store.set_filter(term);
            let needle = term.to_lowercase();
            for record in store.filtered_records() {
                assert!(
                    [&record.name, &record.description, &record.id, &record.created_by]
                        .iter()
                        .any(|f| f.to_lowercase().contains(&needle)),
                    "{} does not match {term}",
                    record.id
                );
                assert!(store.get(&record.id).is_some());
            }
        }
    }

    #[test]
    fn filter_does_not_touch_selection() {
        let mut store = sample_store();
        store.toggle_selection("pb-001").unwrap();
        store.set_filter("malware");
        assert!(store.is_selected("pb-001"));
        assert_eq!(store.selection_count(), 1);
    }

    #[test]
    fn toggle_selection_round_trip() {
        let mut store = sample_store();
        store.toggle_selection("pb-002").unwrap();
        assert!(store.is_selected("pb-002"));
        store.toggle_selection("pb-002").unwrap();
        assert!(!store.is_selected("pb-002"));
    }

    #[test]
    fn toggle_unknown_id_is_not_found() {
        let mut store = sample_store();
        assert_eq!(
            store.toggle_selection("pb-999"),
            Err(CoreError::PlaybookNotFound("pb-999".to_string()))
        );
        assert_eq!(store.selection_count(), 0);
    }

    #[test]
    fn select_all_uses_filtered_records() {
        let mut store = sample_store();
        store.set_filter("admin");
        store.select_all(true);
        assert_eq!(store.selected_ids(), vec!["pb-001", "pb-003"]);
        assert!(store.is_all_selected());

        store.set_filter("");
        assert!(!store.is_all_selected());
    }

    #[test]
    fn select_all_then_clear_is_empty_across_filter_changes() {
        let mut store = sample_store();
        store.select_all(true);
        store.set_filter("cloud");
        store.select_all(false);
        assert_eq!(store.selection_count(), 0);
    }

    #[test]
    fn is_all_selected_false_when_nothing_matches() {
        let mut store = sample_store();
        store.select_all(true);
        store.set_filter("no such playbook");
        assert!(store.filtered_records().is_empty());
        assert!(!store.is_all_selected());

        let empty = InventoryStore::default();
        assert!(!empty.is_all_selected());
    }

    #[test]
    fn bulk_status_on_two_drafts() {
        let mut store = InventoryStore::new(vec![draft("pb-1"), draft("pb-2")]).unwrap();
        store.select_all(true);
        let changed = store.apply_bulk_status(PlaybookStatus::Active);

        assert_eq!(changed, vec!["pb-1", "pb-2"]);
        assert!(store
            .records()
            .iter()
            .all(|record| record.status == PlaybookStatus::Active));
        assert_eq!(store.selection_count(), 0);
    }

    #[test]
    fn bulk_status_leaves_unselected_untouched() {
        let mut store = sample_store();
        let before = store.records().to_vec();
        store.toggle_selection("pb-004").unwrap();
        let stamped_after = Utc::now();
        store.apply_bulk_status(PlaybookStatus::Inactive);

        for (old, new) in before.iter().zip(store.records()) {
            if new.id == "pb-004" {
                assert_eq!(new.status, PlaybookStatus::Inactive);
                assert!(new.last_modified >= stamped_after);
                assert!(new.last_modified > old.last_modified);
            } else {
                assert_eq!(old, new);
            }
        }
        assert_eq!(store.selection_count(), 0);
    }

    #[test]
    fn delete_removes_exactly_selection() {
        let mut store = sample_store();
        store.toggle_selection("pb-002").unwrap();
        store.toggle_selection("pb-005").unwrap();
        let removed = store.delete_selected();

        assert_eq!(removed.len(), 2);
        assert_eq!(store.len(), 3);
        assert!(store.get("pb-002").is_none());
        assert!(store.get("pb-005").is_none());
        assert_eq!(store.selection_count(), 0);
    }

    #[test]
    fn delete_hidden_selection_still_applies() {
        let mut store = sample_store();
        store.toggle_selection("pb-001").unwrap();
        store.set_filter("malware");
        store.delete_selected();
        assert!(store.get("pb-001").is_none());
    }

    #[test]
    fn save_playbook_merges_fields() {
        let mut store = sample_store();
        let update = PlaybookUpdate::new("pb-003")
            .with_name("Suspicious Login Response")
            .with_status(PlaybookStatus::Active);
        let saved = store.save_playbook(&update).unwrap();
        assert_eq!(saved.name, "Suspicious Login Response");
        assert_eq!(saved.status, PlaybookStatus::Active);
        assert_eq!(saved.created_by, "admin");
    }

    #[test]
    fn save_unknown_playbook_is_not_found() {
        let mut store = sample_store();
        let result = store.save_playbook(&PlaybookUpdate::new("pb-404"));
        assert_eq!(
            result.err(),
            Some(CoreError::PlaybookNotFound("pb-404".to_string()))
        );
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn replace_records_prunes_vanished_selection() {
        let mut store = sample_store();
        store.set_filter("pb");
        store.select_all(true);
        let mut reloaded = sample_playbooks();
        reloaded.retain(|p| p.id != "pb-003");
        store.replace_records(reloaded).unwrap();

        assert_eq!(store.selection_count(), 4);
        assert!(!store.is_selected("pb-003"));
        assert_eq!(store.filter(), "pb");
    }

    #[test]
    fn restore_from_rolls_back_only_listed_ids() {
        let mut store = sample_store();
        let snapshot = store.records().to_vec();
        store.select_all(true);
        store.apply_bulk_status(PlaybookStatus::Draft);

        store.restore_from(&snapshot, &["pb-002".to_string()]);
        assert_eq!(store.get("pb-002"), snapshot.iter().find(|p| p.id == "pb-002"));
        assert_eq!(store.get("pb-001").unwrap().status, PlaybookStatus::Draft);
    }

    #[test]
    fn restore_from_reinserts_deleted_in_place() {
        let mut store = sample_store();
        let snapshot = store.records().to_vec();
        store.toggle_selection("pb-002").unwrap();
        store.toggle_selection("pb-004").unwrap();
        store.delete_selected();

        store.restore_from(&snapshot, &["pb-004".to_string()]);
        let order: Vec<&str> = store.records().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["pb-001", "pb-003", "pb-004", "pb-005"]);
    }

    #[test]
    fn status_counts_sample() {
        let counts = sample_store().status_counts();
        assert_eq!(counts.active, 3);
        assert_eq!(counts.inactive, 1);
        assert_eq!(counts.draft, 1);
        assert_eq!(counts.total(), 5);
    }
}
