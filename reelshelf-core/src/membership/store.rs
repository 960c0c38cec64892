use reelshelf_model::{ListKind, Title, TitleId};
use thiserror::Error;
use tracing::{info, warn};

use super::storage::{StorageError, StoragePort};

#[derive(Error, Debug)]
pub enum MembershipError {
    #[error("Failed to persist {list}: {source}")]
    Persist {
        list: ListKind,
        #[source]
        source: StorageError,
    },
}

/// Favorites and watchlist, each an insertion-ordered list of full title
/// records unique by id.
///
/// Every mutation re-serializes the affected list and writes it before
/// returning. If the write fails the in-memory list is restored and the
/// error is returned, so memory and storage never disagree.
#[derive(Debug)]
pub struct MembershipStore<S: StoragePort> {
    storage: S,
    favorites: Vec<Title>,
    watchlist: Vec<Title>,
}

impl<S: StoragePort> MembershipStore<S> {
    /// Load both lists. Missing or unreadable data yields an empty list.
    pub fn load(storage: S) -> Self {
        let favorites = Self::load_list(&storage, ListKind::Favorites);
        let watchlist = Self::load_list(&storage, ListKind::Watchlist);
        info!(
            favorites = favorites.len(),
            watchlist = watchlist.len(),
            "Loaded membership lists"
        );
        Self {
            storage,
            favorites,
            watchlist,
        }
    }

    fn load_list(storage: &S, kind: ListKind) -> Vec<Title> {
        let raw = match storage.read(kind.storage_key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(list = %kind, error = %err, "Unable to read stored list");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Title>>(&raw) {
            Ok(mut titles) => {
                let mut seen = std::collections::HashSet::new();
                titles.retain(|title| seen.insert(title.id.clone()));
                titles
            }
            Err(err) => {
                warn!(list = %kind, error = %err, "Discarding corrupt stored list");
                Vec::new()
            }
        }
    }

    fn entries(&self, kind: ListKind) -> &Vec<Title> {
        match kind {
            ListKind::Favorites => &self.favorites,
            ListKind::Watchlist => &self.watchlist,
        }
    }

    fn entries_mut(&mut self, kind: ListKind) -> &mut Vec<Title> {
        match kind {
            ListKind::Favorites => &mut self.favorites,
            ListKind::Watchlist => &mut self.watchlist,
        }
    }

    fn persist(&self, kind: ListKind) -> Result<(), MembershipError> {
        let to_error = |source| MembershipError::Persist { list: kind, source };
        let json = serde_json::to_string(self.entries(kind))
            .map_err(|err| to_error(StorageError::from(err)))?;
        self.storage
            .write(kind.storage_key(), &json)
            .map_err(to_error)
    }

    /// Apply `mutate`, persist, and restore the previous list on failure.
    fn commit(
        &mut self,
        kind: ListKind,
        mutate: impl FnOnce(&mut Vec<Title>),
    ) -> Result<(), MembershipError> {
        let snapshot = self.entries(kind).clone();
        mutate(self.entries_mut(kind));

        if let Err(err) = self.persist(kind) {
            warn!(list = %kind, error = %err, "Rolling back membership change");
            *self.entries_mut(kind) = snapshot;
            return Err(err);
        }
        Ok(())
    }

    /// Remove `title` if its id is present, insert it otherwise.
    ///
    /// Returns the membership after the toggle.
    pub fn toggle(
        &mut self,
        kind: ListKind,
        title: Title,
    ) -> Result<bool, MembershipError> {
        let position = self
            .entries(kind)
            .iter()
            .position(|entry| entry.id == title.id);

        let id = title.id.clone();
        let now_member = match position {
            Some(index) => {
                self.commit(kind, |entries| {
                    entries.remove(index);
                })?;
                false
            }
            None => {
                self.commit(kind, |entries| entries.push(title))?;
                true
            }
        };

        info!(list = %kind, id = %id, member = now_member, "Toggled membership");
        Ok(now_member)
    }

    pub fn contains(&self, kind: ListKind, id: &TitleId) -> bool {
        self.entries(kind).iter().any(|entry| &entry.id == id)
    }

    /// Records in insertion order.
    pub fn list(&self, kind: ListKind) -> &[Title] {
        self.entries(kind)
    }

    pub fn len(&self, kind: ListKind) -> usize {
        self.entries(kind).len()
    }

    pub fn is_empty(&self, kind: ListKind) -> bool {
        self.entries(kind).is_empty()
    }

    pub fn clear(&mut self, kind: ListKind) -> Result<(), MembershipError> {
        if self.is_empty(kind) {
            return Ok(());
        }
        self.commit(kind, Vec::clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::MemoryStorage;

    #[test]
    fn toggle_flips_membership() {
        let mut store = MembershipStore::load(MemoryStorage::new());
        let title = Title::new("tt1", "One");

        assert!(store.toggle(ListKind::Favorites, title.clone()).unwrap());
        assert!(store.contains(ListKind::Favorites, &title.id));
        assert!(!store.contains(ListKind::Watchlist, &title.id));

        assert!(!store.toggle(ListKind::Favorites, title.clone()).unwrap());
        assert!(!store.contains(ListKind::Favorites, &title.id));
    }

    #[test]
    fn clear_empties_one_list() {
        let storage = MemoryStorage::new();
        let mut store = MembershipStore::load(storage.clone());
        store
            .toggle(ListKind::Watchlist, Title::new("tt1", "One"))
            .unwrap();
        store
            .toggle(ListKind::Favorites, Title::new("tt2", "Two"))
            .unwrap();

        store.clear(ListKind::Watchlist).unwrap();
        assert!(store.is_empty(ListKind::Watchlist));
        assert_eq!(store.len(ListKind::Favorites), 1);
        assert_eq!(
            storage.get(ListKind::Watchlist.storage_key()).as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn persisted_lists_match_memory_after_each_change() {
        let storage = MemoryStorage::new();
        let mut store = MembershipStore::load(storage.clone());
        let stored_ids = |kind: ListKind| -> Vec<TitleId> {
            let raw = storage.get(kind.storage_key()).unwrap_or_default();
            serde_json::from_str::<Vec<Title>>(&raw)
                .unwrap_or_default()
                .into_iter()
                .map(|title| title.id)
                .collect()
        };

        store
            .toggle(ListKind::Favorites, Title::new("tt1", "One"))
            .unwrap();
        store
            .toggle(ListKind::Favorites, Title::new("tt2", "Two"))
            .unwrap();
        let in_memory: Vec<TitleId> = store
            .list(ListKind::Favorites)
            .iter()
            .map(|title| title.id.clone())
            .collect();
        assert_eq!(stored_ids(ListKind::Favorites), in_memory);

        store
            .toggle(ListKind::Favorites, Title::new("tt1", "One"))
            .unwrap();
        assert!(!store.contains(ListKind::Favorites, &TitleId::new("tt1")));
        assert_eq!(stored_ids(ListKind::Favorites), vec![TitleId::new("tt2")]);
    }
}
