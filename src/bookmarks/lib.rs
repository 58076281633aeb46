use libsql::Connection;
use uuid::Uuid;

use crate::error::BookmarkError;
use crate::model::{BookmarkRecord, BookmarkVideo};

/// A bookmark record together with its store-generated key. The key is
/// internal to the store and distinct from the domain video id.
#[derive(Debug, Clone)]
pub struct StoredBookmark {
    pub key: String,
    pub record: BookmarkRecord,
}

pub struct Bookmarks<'a> {
    conn: &'a Connection,
}

impl<'a> Bookmarks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Fetches the full bookmark collection for one session, in insertion
    /// order. An absent collection is an empty vec, not an error.
    pub async fn fetch_collection(
        &self,
        session_id: &str,
    ) -> Result<Vec<StoredBookmark>, BookmarkError> {
        let query = r#"
            SELECT key, video_id, title, channel_title, channel_id, channel_thumbnail,
                   thumbnail_url, published_at, duration, view_count
            FROM bookmarks
            WHERE session_id = ?
            ORDER BY created_at ASC
        "#;

        let mut rows = self.conn.query(query, libsql::params![session_id]).await?;
        let mut bookmarks = Vec::new();

        while let Some(row) = rows.next().await? {
            bookmarks.push(Self::row_to_stored(&row)?);
        }

        Ok(bookmarks)
    }

    /// Inserts a record under a freshly generated store key and returns
    /// the key. Performs no duplicate checking; that is `add`'s job.
    async fn push(
        &self,
        session_id: &str,
        record: &BookmarkRecord,
    ) -> Result<String, BookmarkError> {
        let key = Uuid::new_v4().to_string();
        let query = r#"
            INSERT INTO bookmarks (
                key, session_id, video_id, title, channel_title, channel_id,
                channel_thumbnail, thumbnail_url, published_at, duration, view_count
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        self.conn
            .execute(
                query,
                libsql::params![
                    key.clone(),
                    session_id,
                    record.video_id.clone(),
                    record.title.clone(),
                    record.channel_title.clone(),
                    record.channel_id.clone(),
                    record.channel_thumbnail.clone(),
                    record.thumbnail_url.clone(),
                    record.published_at.clone(),
                    record.duration.clone(),
                    record.view_count
                ],
            )
            .await?;

        Ok(key)
    }

    /// Deletes a single record by its store key, scoped to the session.
    async fn delete(&self, session_id: &str, key: &str) -> Result<(), BookmarkError> {
        self.conn
            .execute(
                "DELETE FROM bookmarks WHERE session_id = ? AND key = ?",
                libsql::params![session_id, key],
            )
            .await?;
        Ok(())
    }

    /// Adds a bookmark for the session. The duplicate check is a read-then-
    /// write scan over the full collection; two concurrent adds for the same
    /// video can race. Accepted at single-user-per-session scale.
    pub async fn add(
        &self,
        session_id: &str,
        record: &BookmarkRecord,
    ) -> Result<String, BookmarkError> {
        if record.video_id.is_empty() {
            return Err(BookmarkError::MissingVideoId);
        }

        let existing = self.fetch_collection(session_id).await?;
        if existing
            .iter()
            .any(|stored| stored.record.video_id == record.video_id)
        {
            return Err(BookmarkError::Duplicate(record.video_id.clone()));
        }

        self.push(session_id, record).await
    }

    /// Removes the first bookmark whose video id matches. Fails with
    /// `NoBookmarks` when the session has no collection at all and
    /// `NotFound` when the collection has no matching entry.
    pub async fn remove(&self, session_id: &str, video_id: &str) -> Result<(), BookmarkError> {
        if video_id.is_empty() {
            return Err(BookmarkError::MissingVideoId);
        }

        let existing = self.fetch_collection(session_id).await?;
        if existing.is_empty() {
            return Err(BookmarkError::NoBookmarks);
        }

        let matched = existing
            .iter()
            .find(|stored| stored.record.video_id == video_id)
            .ok_or_else(|| BookmarkError::NotFound(video_id.to_string()))?;

        self.delete(session_id, &matched.key).await
    }

    /// Lists the session's bookmarks in client-facing shape, deriving the
    /// display `id` from the video id. An empty collection is not an error.
    pub async fn list(&self, session_id: &str) -> Result<Vec<BookmarkVideo>, BookmarkError> {
        let collection = self.fetch_collection(session_id).await?;
        Ok(collection
            .into_iter()
            .map(|stored| BookmarkVideo::from(stored.record))
            .collect())
    }

    fn row_to_stored(row: &libsql::Row) -> Result<StoredBookmark, BookmarkError> {
        Ok(StoredBookmark {
            key: row.get(0)?,
            record: BookmarkRecord {
                video_id: row.get(1)?,
                title: row.get(2)?,
                channel_title: row.get(3)?,
                channel_id: row.get(4)?,
                channel_thumbnail: row.get(5)?,
                thumbnail_url: row.get(6)?,
                published_at: row.get(7)?,
                duration: row.get(8)?,
                view_count: row.get(9)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libsql::Builder;

    // An in-memory database exists per connection, so the migrated
    // connection must be the one the tests use.
    async fn setup() -> (libsql::Database, Connection) {
        let db = Builder::new_local(":memory:").build().await.unwrap();
        let conn = db.connect().unwrap();
        for (_, sql) in crate::bookmarks::migrations() {
            conn.execute_batch(sql).await.unwrap();
        }
        (db, conn)
    }

    fn record(video_id: &str) -> BookmarkRecord {
        BookmarkRecord {
            video_id: video_id.to_string(),
            title: "Demo".to_string(),
            channel_title: "Demo Channel".to_string(),
            view_count: 100,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn add_then_list_contains_exactly_one_record() {
        let (_db, conn) = setup().await;
        let store = Bookmarks::new(&conn);

        store.add("abc", &record("xyz123")).await.unwrap();

        let listed = store.list("abc").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].record.video_id, "xyz123");
        assert_eq!(listed[0].id, "xyz123");
    }

    #[tokio::test]
    async fn duplicate_add_fails_and_leaves_collection_unchanged() {
        let (_db, conn) = setup().await;
        let store = Bookmarks::new(&conn);

        store.add("abc", &record("xyz123")).await.unwrap();
        let err = store.add("abc", &record("xyz123")).await.unwrap_err();
        assert!(matches!(err, BookmarkError::Duplicate(id) if id == "xyz123"));

        assert_eq!(store.list("abc").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_video_in_different_sessions_is_allowed() {
        let (_db, conn) = setup().await;
        let store = Bookmarks::new(&conn);

        store.add("session-a", &record("xyz123")).await.unwrap();
        store.add("session-b", &record("xyz123")).await.unwrap();

        assert_eq!(store.list("session-a").await.unwrap().len(), 1);
        assert_eq!(store.list("session-b").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_after_add_empties_the_collection() {
        let (_db, conn) = setup().await;
        let store = Bookmarks::new(&conn);

        store.add("abc", &record("xyz123")).await.unwrap();
        store.remove("abc", "xyz123").await.unwrap();

        assert!(store.list("abc").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_unmatched_video_is_not_found_and_changes_nothing() {
        let (_db, conn) = setup().await;
        let store = Bookmarks::new(&conn);

        store.add("abc", &record("xyz123")).await.unwrap();
        let err = store.remove("abc", "nonexistent").await.unwrap_err();
        assert!(matches!(err, BookmarkError::NotFound(_)));

        assert_eq!(store.list("abc").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_from_empty_session_reports_no_bookmarks() {
        let (_db, conn) = setup().await;
        let store = Bookmarks::new(&conn);

        let err = store.remove("abc", "xyz123").await.unwrap_err();
        assert!(matches!(err, BookmarkError::NoBookmarks));
    }

    #[tokio::test]
    async fn list_for_fresh_session_is_empty_not_an_error() {
        let (_db, conn) = setup().await;
        let store = Bookmarks::new(&conn);

        assert!(store.list("never-seen").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_keys_are_distinct_from_video_ids() {
        let (_db, conn) = setup().await;
        let store = Bookmarks::new(&conn);

        let key = store.add("abc", &record("xyz123")).await.unwrap();
        assert_ne!(key, "xyz123");

        let collection = store.fetch_collection("abc").await.unwrap();
        assert_eq!(collection[0].key, key);
    }
}
