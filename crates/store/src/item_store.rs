use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::debug;

use pantry_core::{Item, ItemDraft};

use crate::error::StoreResult;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity REAL NOT NULL DEFAULT 0,
    unit TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL DEFAULT 'Other'
)
"#;

/// Handle on the `items` table, cheap to clone and share across handlers.
#[derive(Clone)]
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    /// Opens (creating if missing) the database file at `path`.
    pub async fn open(path: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Opens a private in-memory database, used by tests.
    ///
    /// The pool is pinned to one connection that never expires: every
    /// SQLite `:memory:` connection is its own database, so a second
    /// connection (or a reopened one) would see empty tables.
    pub async fn open_in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    /// Creates the `items` table if it does not exist. Safe to re-run.
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        debug!("items table ready");
        Ok(())
    }

    /// All items, ordered by category then name for stable display.
    pub async fn list(&self) -> StoreResult<Vec<Item>> {
        let rows = sqlx::query(
            "SELECT id, name, quantity, unit, category FROM items ORDER BY category, name",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|row| item_from_row(row).map_err(Into::into))
            .collect()
    }

    pub async fn get(&self, id: i64) -> StoreResult<Option<Item>> {
        let row = sqlx::query("SELECT id, name, quantity, unit, category FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(item_from_row).transpose()?)
    }

    /// Inserts a validated draft and returns the stored item with its
    /// assigned rowid.
    pub async fn insert(&self, draft: &ItemDraft) -> StoreResult<Item> {
        let result =
            sqlx::query("INSERT INTO items (name, quantity, unit, category) VALUES (?, ?, ?, ?)")
                .bind(&draft.name)
                .bind(draft.quantity)
                .bind(&draft.unit)
                .bind(&draft.category)
                .execute(&self.pool)
                .await?;
        let id = result.last_insert_rowid();
        debug!(id, name = %draft.name, "inserted item");
        Ok(Item {
            id,
            name: draft.name.clone(),
            quantity: draft.quantity,
            unit: draft.unit.clone(),
            category: draft.category.clone(),
        })
    }

    /// Overwrites every field of the row with `id`. Updating an id that is
    /// not present matches zero rows and succeeds silently; callers that
    /// care check existence first.
    pub async fn update(&self, id: i64, draft: &ItemDraft) -> StoreResult<()> {
        sqlx::query("UPDATE items SET name = ?, quantity = ?, unit = ?, category = ? WHERE id = ?")
            .bind(&draft.name)
            .bind(draft.quantity)
            .bind(&draft.unit)
            .bind(&draft.category)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Deletes the row with `id`, returning its name, or `None` if no such
    /// row existed. The lookup and the delete are separate statements; an
    /// interleaved writer is tolerated, not guarded against.
    pub async fn delete(&self, id: i64) -> StoreResult<Option<String>> {
        let row = sqlx::query("SELECT name FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let name: String = row.try_get("name")?;

        sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        debug!(id, name = %name, "deleted item");
        Ok(Some(name))
    }
}

fn item_from_row(row: &SqliteRow) -> Result<Item, sqlx::Error> {
    Ok(Item {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        quantity: row.try_get("quantity")?,
        unit: row.try_get("unit")?,
        category: row.try_get("category")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn fresh_store() -> ItemStore {
        let store = ItemStore::open_in_memory()
            .await
            .expect("open in-memory store");
        store.migrate().await.expect("run migration");
        store
    }

    fn draft(name: &str, quantity: f64, unit: &str, category: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn fresh_store_lists_nothing() {
        let store = fresh_store().await;
        assert!(store.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let store = fresh_store().await;
        store.migrate().await.expect("second migration");
        store
            .insert(&draft("Milk", 1.0, "l", "Dairy"))
            .await
            .expect("insert after re-migration");
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids() {
        let store = fresh_store().await;
        let first = store
            .insert(&draft("Milk", 1.0, "l", "Dairy"))
            .await
            .expect("insert first");
        let second = store
            .insert(&draft("Eggs", 12.0, "pcs", "Dairy"))
            .await
            .expect("insert second");
        assert!(first.id > 0);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = fresh_store().await;
        let stored = store
            .insert(&draft("Flour", 2.5, "kg", "Baking"))
            .await
            .expect("insert");
        let fetched = store
            .get(stored.id)
            .await
            .expect("get")
            .expect("item present");
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = fresh_store().await;
        assert_eq!(store.get(417).await.expect("get"), None);
    }

    #[tokio::test]
    async fn list_orders_by_category_then_name() {
        let store = fresh_store().await;
        for d in [
            draft("Eggs", 12.0, "pcs", "Dairy"),
            draft("Bread", 1.0, "loaf", "Bakery"),
            draft("Apples", 6.0, "pcs", "Produce"),
            draft("Cheddar", 0.3, "kg", "Dairy"),
        ] {
            store.insert(&d).await.expect("insert");
        }

        let names: Vec<String> = store
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["Bread", "Cheddar", "Eggs", "Apples"]);
    }

    #[tokio::test]
    async fn update_overwrites_all_fields_in_place() {
        let store = fresh_store().await;
        let stored = store
            .insert(&draft("Milk", 1.0, "l", "Dairy"))
            .await
            .expect("insert");

        store
            .update(stored.id, &draft("Oat milk", 2.0, "l", "Pantry"))
            .await
            .expect("update");

        let fetched = store
            .get(stored.id)
            .await
            .expect("get")
            .expect("item present");
        assert_eq!(fetched.id, stored.id);
        assert_eq!(fetched.name, "Oat milk");
        assert_eq!(fetched.quantity, 2.0);
        assert_eq!(fetched.unit, "l");
        assert_eq!(fetched.category, "Pantry");
    }

    #[tokio::test]
    async fn update_of_missing_id_is_a_silent_no_op() {
        let store = fresh_store().await;
        store
            .insert(&draft("Milk", 1.0, "l", "Dairy"))
            .await
            .expect("insert");

        store
            .update(999, &draft("Ghost", 1.0, "", "Other"))
            .await
            .expect("update missing id");

        let items = store.list().await.expect("list");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
    }

    #[tokio::test]
    async fn delete_returns_name_and_removes_row() {
        let store = fresh_store().await;
        let stored = store
            .insert(&draft("Bananas", 5.0, "pcs", "Produce"))
            .await
            .expect("insert");

        let name = store.delete(stored.id).await.expect("delete");
        assert_eq!(name.as_deref(), Some("Bananas"));
        assert_eq!(store.get(stored.id).await.expect("get"), None);
    }

    #[tokio::test]
    async fn delete_of_missing_id_returns_none() {
        let store = fresh_store().await;
        assert_eq!(store.delete(123).await.expect("delete"), None);
    }
}
