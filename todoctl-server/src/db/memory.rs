//! In-memory store with the same contract as `PgStore`
//!
//! Used by the router tests and by `todoctl serve --memory`. One mutex
//! guards both tables, so every operation is atomic.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{DbError, TodoStore};
use crate::models::{ItemDescription, ItemId, ListId, ListName, Todo, TodoList};

#[derive(Default)]
struct Tables {
    lists: BTreeMap<ListId, TodoList>,
    items: BTreeMap<ItemId, Todo>,
    next_list_id: ListId,
    next_item_id: ItemId,
}

impl Tables {
    fn alloc_list_id(&mut self) -> ListId {
        self.next_list_id += 1;
        self.next_list_id
    }

    fn alloc_item_id(&mut self) -> ItemId {
        self.next_item_id += 1;
        self.next_item_id
    }
}

/// Volatile store; ids start at 1 like a fresh SERIAL column.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn create_list(&self, name: ListName) -> Result<TodoList, DbError> {
        let mut tables = self.tables.lock().await;
        let list = TodoList {
            id: tables.alloc_list_id(),
            name: name.into_string(),
        };
        tables.lists.insert(list.id, list.clone());
        Ok(list)
    }

    async fn create_item(
        &self,
        list_id: ListId,
        description: ItemDescription,
    ) -> Result<Todo, DbError> {
        let mut tables = self.tables.lock().await;
        if !tables.lists.contains_key(&list_id) {
            return Err(DbError::Integrity(format!(
                "insert on table \"todo\" violates foreign key constraint: \
                 key (todolist_id)=({list_id}) is not present in table \"todolist\""
            )));
        }

        let item = Todo {
            id: tables.alloc_item_id(),
            description: description.into_string(),
            completed: false,
            todolist_id: list_id,
        };
        tables.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get_list(&self, list_id: ListId) -> Result<TodoList, DbError> {
        self.tables
            .lock()
            .await
            .lists
            .get(&list_id)
            .cloned()
            .ok_or_else(|| DbError::not_found("todo list", list_id))
    }

    async fn get_item(&self, item_id: ItemId) -> Result<Todo, DbError> {
        self.tables
            .lock()
            .await
            .items
            .get(&item_id)
            .cloned()
            .ok_or_else(|| DbError::not_found("todo", item_id))
    }

    async fn list_items(&self, list_id: ListId) -> Result<Vec<Todo>, DbError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .items
            .values()
            .filter(|item| item.todolist_id == list_id)
            .cloned()
            .collect())
    }

    async fn set_item_completed(
        &self,
        item_id: ItemId,
        completed: bool,
    ) -> Result<Todo, DbError> {
        let mut tables = self.tables.lock().await;
        let item = tables
            .items
            .get_mut(&item_id)
            .ok_or_else(|| DbError::not_found("todo", item_id))?;
        item.completed = completed;
        Ok(item.clone())
    }

    async fn complete_all(&self, list_id: ListId) -> Result<u64, DbError> {
        let mut tables = self.tables.lock().await;
        let mut count = 0;
        for item in tables.items.values_mut().filter(|i| i.todolist_id == list_id) {
            item.completed = true;
            count += 1;
        }
        Ok(count)
    }

    async fn delete_item(&self, item_id: ItemId) -> Result<(), DbError> {
        self.tables
            .lock()
            .await
            .items
            .remove(&item_id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("todo", item_id))
    }

    async fn delete_list(&self, list_id: ListId) -> Result<(), DbError> {
        let mut tables = self.tables.lock().await;
        if tables.lists.remove(&list_id).is_none() {
            return Err(DbError::not_found("todo list", list_id));
        }
        tables.items.retain(|_, item| item.todolist_id != list_id);
        Ok(())
    }

    async fn all_lists(&self) -> Result<Vec<TodoList>, DbError> {
        Ok(self.tables.lock().await.lists.values().cloned().collect())
    }

    async fn first_list(&self) -> Result<Option<TodoList>, DbError> {
        Ok(self.tables.lock().await.lists.values().next().cloned())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ListName {
        ListName::new(s).unwrap()
    }

    fn desc(s: &str) -> ItemDescription {
        ItemDescription::new(s).unwrap()
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = MemoryStore::new();
        let groceries = store.create_list(name("Groceries")).await.unwrap();
        let chores = store.create_list(name("Chores")).await.unwrap();
        assert_eq!(groceries.id, 1);
        assert_eq!(chores.id, 2);

        let milk = store.create_item(groceries.id, desc("Milk")).await.unwrap();
        assert_eq!(milk.id, 1);
        assert!(!milk.completed);
        assert_eq!(milk.todolist_id, groceries.id);
    }

    #[tokio::test]
    async fn created_lists_appear_once_in_id_order() {
        let store = MemoryStore::new();
        assert!(store.all_lists().await.unwrap().is_empty());

        let work = store.create_list(name("Work")).await.unwrap();
        let home = store.create_list(name("Home")).await.unwrap();
        let dup = store.create_list(name("Work")).await.unwrap();
        assert_ne!(work.id, dup.id);

        let lists = store.all_lists().await.unwrap();
        assert_eq!(lists, vec![work.clone(), home.clone(), dup.clone()]);
        assert!(lists.windows(2).all(|w| w[0].id < w[1].id));

        let before = lists.len();
        let errands = store.create_list(name("Errands")).await.unwrap();
        let lists = store.all_lists().await.unwrap();
        assert_eq!(lists.len(), before + 1);
        assert_eq!(lists.iter().filter(|l| l.id == errands.id).count(), 1);
        assert_eq!(lists.last().map(|l| l.name.as_str()), Some("Errands"));
    }

    #[tokio::test]
    async fn new_item_is_last_in_list_order() {
        let store = MemoryStore::new();
        let list = store.create_list(name("L")).await.unwrap();
        let other = store.create_list(name("Other")).await.unwrap();
        store.create_item(list.id, desc("a")).await.unwrap();
        store.create_item(other.id, desc("x")).await.unwrap();
        let last = store.create_item(list.id, desc("b")).await.unwrap();

        let items = store.list_items(list.id).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.last(), Some(&last));
        assert!(items.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn dangling_list_is_integrity_error() {
        let store = MemoryStore::new();
        let err = store.create_item(999, desc("X")).await.unwrap_err();
        assert!(matches!(err, DbError::Integrity(_)));
        assert!(store.list_items(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn set_completed_is_idempotent() {
        let store = MemoryStore::new();
        let list = store.create_list(name("L")).await.unwrap();
        let item = store.create_item(list.id, desc("a")).await.unwrap();

        let first = store.set_item_completed(item.id, true).await.unwrap();
        let second = store.set_item_completed(item.id, true).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.get_item(item.id).await.unwrap(), second);

        let err = store.set_item_completed(42, true).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "todo", .. }));
    }

    #[tokio::test]
    async fn complete_all_is_permissive() {
        let store = MemoryStore::new();
        let list = store.create_list(name("L")).await.unwrap();
        let a = store.create_item(list.id, desc("a")).await.unwrap();
        let b = store.create_item(list.id, desc("b")).await.unwrap();
        store.set_item_completed(b.id, true).await.unwrap();

        assert_eq!(store.complete_all(list.id).await.unwrap(), 2);
        assert!(store.get_item(a.id).await.unwrap().completed);
        assert!(store.get_item(b.id).await.unwrap().completed);

        let empty = store.create_list(name("Empty")).await.unwrap();
        assert_eq!(store.complete_all(empty.id).await.unwrap(), 0);
        assert_eq!(store.complete_all(12345).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_list_cascades() {
        let store = MemoryStore::new();
        let list = store.create_list(name("L")).await.unwrap();
        let keep = store.create_list(name("Keep")).await.unwrap();
        let doomed = store.create_item(list.id, desc("a")).await.unwrap();
        store.create_item(list.id, desc("b")).await.unwrap();
        let kept = store.create_item(keep.id, desc("c")).await.unwrap();

        store.delete_list(list.id).await.unwrap();

        assert!(store.list_items(list.id).await.unwrap().is_empty());
        assert!(matches!(
            store.get_list(list.id).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(
            store.get_item(doomed.id).await,
            Err(DbError::NotFound { .. })
        ));
        assert_eq!(store.list_items(keep.id).await.unwrap(), vec![kept]);

        assert!(matches!(
            store.delete_list(list.id).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn delete_item_and_first_list() {
        let store = MemoryStore::new();
        assert_eq!(store.first_list().await.unwrap(), None);

        let list = store.create_list(name("L")).await.unwrap();
        store.create_list(name("M")).await.unwrap();
        assert_eq!(store.first_list().await.unwrap(), Some(list.clone()));

        let item = store.create_item(list.id, desc("a")).await.unwrap();
        store.delete_item(item.id).await.unwrap();
        assert!(matches!(
            store.delete_item(item.id).await,
            Err(DbError::NotFound { .. })
        ));
        assert_eq!(store.all_lists().await.unwrap().len(), 2);
    }
}
