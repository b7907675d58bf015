//! In-memory project store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::observability::metrics;
use crate::projects::id::ProjectId;
use crate::projects::model::{Project, ProjectPayload};

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("project {0} not found")]
    NotFound(ProjectId),
}

/// Ordered, thread-safe collection of projects.
///
/// Every operation takes the lock once, so each is atomic with respect to
/// the others. Iteration order is insertion order; updates keep the
/// position of the record they replace.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl ProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects whose title contains `title_filter`, or all of them when the
    /// filter is absent or empty.
    pub fn list(&self, title_filter: Option<&str>) -> Vec<Project> {
        let projects = self.read();
        match title_filter.filter(|needle| !needle.is_empty()) {
            Some(needle) => projects
                .iter()
                .filter(|p| p.title_contains(needle))
                .cloned()
                .collect(),
            None => projects.clone(),
        }
    }

    /// Append a new project with a freshly generated id.
    pub fn create(&self, payload: ProjectPayload) -> Project {
        let project = Project {
            id: ProjectId::generate(),
            title: payload.title,
            owner: payload.owner,
        };

        let mut projects = self.write();
        projects.push(project.clone());
        metrics::record_store_operation("create");
        metrics::record_store_size(projects.len());

        tracing::debug!(id = %project.id, "Project created");
        project
    }

    /// Replace title and owner of an existing project wholesale.
    pub fn update(&self, id: ProjectId, payload: ProjectPayload) -> Result<Project, StoreError> {
        let mut projects = self.write();
        let slot = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;

        *slot = Project {
            id,
            title: payload.title,
            owner: payload.owner,
        };
        metrics::record_store_operation("update");

        tracing::debug!(id = %id, "Project updated");
        Ok(slot.clone())
    }

    /// Remove a project.
    pub fn delete(&self, id: ProjectId) -> Result<(), StoreError> {
        let mut projects = self.write();
        let index = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;

        projects.remove(index);
        metrics::record_store_operation("delete");
        metrics::record_store_size(projects.len());

        tracing::debug!(id = %id, "Project deleted");
        Ok(())
    }

    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-mutated,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Project>> {
        self.projects.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Project>> {
        self.projects.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn titles(projects: &[Project]) -> Vec<&str> {
        projects.iter().filter_map(|p| p.title.as_deref()).collect()
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let store = ProjectStore::new();
        let mut seen = HashSet::new();
        for i in 0..50 {
            let project = store.create(ProjectPayload::new(format!("p{}", i), "me"));
            assert!(seen.insert(project.id), "duplicate id {}", project.id);
        }
        assert_eq!(store.len(), 50);
    }

    #[test]
    fn test_list_filters_in_insertion_order() {
        let store = ProjectStore::new();
        store.create(ProjectPayload::new("Node backend", "a"));
        store.create(ProjectPayload::new("React frontend", "b"));
        store.create(ProjectPayload::new("Node CLI", "c"));
        store.create(ProjectPayload::default());

        assert_eq!(titles(&store.list(Some("Node"))), vec!["Node backend", "Node CLI"]);
        assert_eq!(titles(&store.list(Some("node"))), Vec::<&str>::new());
        assert_eq!(store.list(None).len(), 4);
        // An empty filter means no filter.
        assert_eq!(store.list(Some("")).len(), 4);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = ProjectStore::new();
        let first = store.create(ProjectPayload::new("first", "a"));
        let second = store.create(ProjectPayload::new("second", "b"));

        let updated = store
            .update(first.id, ProjectPayload { title: Some("renamed".into()), owner: None })
            .unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.title.as_deref(), Some("renamed"));
        // Full replacement, no merge with the old owner.
        assert_eq!(updated.owner, None);

        let all = store.list(None);
        assert_eq!(all[0], updated);
        assert_eq!(all[1], second);
    }

    #[test]
    fn test_update_is_not_cumulative() {
        let store = ProjectStore::new();
        let project = store.create(ProjectPayload::new("x", "y"));
        let payload = ProjectPayload::new("same", "owner");

        let once = store.update(project.id, payload.clone()).unwrap();
        let twice = store.update(project.id, payload).unwrap();
        assert_eq!(once, twice);
        assert_eq!(store.get(project.id), Some(twice));
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let store = ProjectStore::new();
        store.create(ProjectPayload::new("keep", "me"));
        let missing = ProjectId::generate();

        assert_eq!(
            store.update(missing, ProjectPayload::default()),
            Err(StoreError::NotFound(missing))
        );
        assert_eq!(store.delete(missing), Err(StoreError::NotFound(missing)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_removes_once() {
        let store = ProjectStore::new();
        let a = store.create(ProjectPayload::new("a", "1"));
        let b = store.create(ProjectPayload::new("b", "2"));

        store.delete(a.id).unwrap();
        assert_eq!(store.list(None), vec![b]);
        assert!(store.get(a.id).is_none());
        assert_eq!(store.delete(a.id), Err(StoreError::NotFound(a.id)));
    }
}
