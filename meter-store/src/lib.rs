//! libSQL document store for story content.
//!
//! One table, `story_items`, holding the ordered slide list. Insertion order
//! is the narrative order: rows get an autoincrement id and every read sorts
//! by it. Items are written once at seed time and never mutated or deleted
//! at runtime.

pub mod error;

use libsql::Builder;

use meter_core::StoryItem;

pub use error::StoreError;

/// Handle to the story document store.
///
/// Wraps a libSQL database and a single connection; the server drives it
/// one request at a time.
pub struct StoryStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl StoryStore {
    /// Open (creating if absent) the store at the given path and run
    /// migrations. `:memory:` opens an in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let store = Self { db, conn };
        store.run_migrations().await?;
        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS story_items (
                    id      INTEGER PRIMARY KEY AUTOINCREMENT,
                    kind    TEXT NOT NULL CHECK (kind IN ('story', 'exercise', 'demo')),
                    text    TEXT NOT NULL,
                    options TEXT,
                    answer  TEXT
                )",
                (),
            )
            .await
            .map_err(|e| StoreError::Migration(format!("create story_items: {e}")))?;
        Ok(())
    }

    /// Access the underlying connection for direct queries.
    pub fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Number of stored items.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn count(&self) -> Result<u64, StoreError> {
        let mut rows = self
            .conn
            .query("SELECT COUNT(*) FROM story_items", ())
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        let count = row.get::<i64>(0)?;
        Ok(count.max(0) as u64)
    }

    /// Append items in slice order. Seed path only; runtime never writes.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any INSERT fails.
    pub async fn insert_items(&self, items: &[StoryItem]) -> Result<(), StoreError> {
        use libsql::Value;

        for item in items {
            let (kind, text, options, answer) = match item {
                StoryItem::Story { text } => ("story", text.as_str(), Value::Null, Value::Null),
                StoryItem::Exercise {
                    text,
                    options,
                    answer,
                } => {
                    let encoded = serde_json::to_string(options)?;
                    (
                        "exercise",
                        text.as_str(),
                        Value::Text(encoded),
                        Value::Text(answer.clone()),
                    )
                }
                StoryItem::Demo { text } => ("demo", text.as_str(), Value::Null, Value::Null),
            };

            self.conn
                .execute(
                    "INSERT INTO story_items (kind, text, options, answer)
                     VALUES (?1, ?2, ?3, ?4)",
                    libsql::params![kind, text, options, answer],
                )
                .await?;
        }
        Ok(())
    }

    /// Insert the given items only when the store holds nothing yet.
    ///
    /// Never deletes existing rows. Returns whether seeding happened.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the count or any INSERT fails.
    pub async fn seed_if_empty(&self, items: &[StoryItem]) -> Result<bool, StoreError> {
        if self.count().await? > 0 {
            return Ok(false);
        }
        self.insert_items(items).await?;
        Ok(true)
    }

    /// All items in stable insertion order. No filtering, no pagination.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or a row cannot be decoded.
    pub async fn fetch_all(&self) -> Result<Vec<StoryItem>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, kind, text, options, answer FROM story_items ORDER BY id",
                (),
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }
}

fn row_to_item(row: &libsql::Row) -> Result<StoryItem, StoreError> {
    let id = row.get::<i64>(0)?;
    let kind = row.get::<String>(1)?;
    let text = row.get::<String>(2)?;

    match kind.as_str() {
        "story" => Ok(StoryItem::Story { text }),
        "demo" => Ok(StoryItem::Demo { text }),
        "exercise" => {
            let options_json =
                row.get::<Option<String>>(3)?
                    .ok_or_else(|| StoreError::Malformed {
                        id,
                        reason: "exercise has no options".to_string(),
                    })?;
            let options: Vec<String> =
                serde_json::from_str(&options_json).map_err(|e| StoreError::Malformed {
                    id,
                    reason: format!("options are not a JSON string list: {e}"),
                })?;
            let answer = row
                .get::<Option<String>>(4)?
                .ok_or_else(|| StoreError::Malformed {
                    id,
                    reason: "exercise has no answer".to_string(),
                })?;
            Ok(StoryItem::Exercise {
                text,
                options,
                answer,
            })
        }
        other => Err(StoreError::Malformed {
            id,
            reason: format!("unknown kind '{other}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meter_core::seed_story;

    /// Helper to create an in-memory store for testing.
    async fn test_store() -> StoryStore {
        StoryStore::open(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_creates_schema() {
        let store = test_store().await;
        let mut rows = store
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name='story_items'",
                (),
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn fetch_preserves_insertion_order() {
        let store = test_store().await;
        let items = seed_story();
        store.insert_items(&items).await.unwrap();

        let fetched = store.fetch_all().await.unwrap();
        assert_eq!(fetched, items);
    }

    #[tokio::test]
    async fn repeated_reads_are_idempotent() {
        let store = test_store().await;
        store.insert_items(&seed_story()).await.unwrap();

        let first = store.fetch_all().await.unwrap();
        let second = store.fetch_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn exercise_round_trips_options_and_answer() {
        let store = test_store().await;
        let item = StoryItem::Exercise {
            text: "<p>Pick one.</p>".to_string(),
            options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            answer: "B".to_string(),
        };
        store.insert_items(std::slice::from_ref(&item)).await.unwrap();

        let fetched = store.fetch_all().await.unwrap();
        assert_eq!(fetched, vec![item]);
    }

    #[tokio::test]
    async fn seed_if_empty_populates_once() {
        let store = test_store().await;
        let items = seed_story();

        assert!(store.seed_if_empty(&items).await.unwrap());
        assert_eq!(store.count().await.unwrap(), items.len() as u64);

        // A second boot must not duplicate anything.
        assert!(!store.seed_if_empty(&items).await.unwrap());
        assert_eq!(store.count().await.unwrap(), items.len() as u64);
    }

    #[tokio::test]
    async fn seed_if_empty_never_clears_existing_data() {
        let store = test_store().await;
        let existing = vec![StoryItem::Story {
            text: "<p>hand-edited slide</p>".to_string(),
        }];
        store.insert_items(&existing).await.unwrap();

        assert!(!store.seed_if_empty(&seed_story()).await.unwrap());
        assert_eq!(store.fetch_all().await.unwrap(), existing);
    }

    #[tokio::test]
    async fn malformed_exercise_row_is_an_error() {
        let store = test_store().await;
        store
            .conn()
            .execute(
                "INSERT INTO story_items (kind, text) VALUES ('exercise', '<p>broken</p>')",
                (),
            )
            .await
            .unwrap();

        let err = store.fetch_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn reopen_sees_seeded_data() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("story.db");
        let path = path.to_str().unwrap();

        {
            let store = StoryStore::open(path).await.unwrap();
            store.seed_if_empty(&seed_story()).await.unwrap();
        }

        let store = StoryStore::open(path).await.unwrap();
        assert_eq!(store.fetch_all().await.unwrap(), seed_story());
    }
}
