//! Storage gateway for the books catalog.

use estante_db::{Database, StorageError};

use super::models::{Book, NewBook};

/// Gateway mediating all access to the `books` table on behalf of the router.
///
/// Every operation opens its own connection and releases it on drop; no
/// transaction spans more than one statement.
#[derive(Clone)]
pub struct BookStore {
    db: Database,
}

impl BookStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Append a new row and return the identifier generated by the store.
    pub async fn insert(&self, book: &NewBook) -> Result<i64, StorageError> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query(
            "INSERT INTO books (title, category, author, image_url) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&book.titulo)
        .bind(&book.categoria)
        .bind(&book.autor)
        .bind(&book.imagem_url)
        .execute(&mut conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Return every row as a fully materialized collection, insertion order.
    pub async fn list_all(&self) -> Result<Vec<Book>, StorageError> {
        let mut conn = self.db.connect().await?;

        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title AS titulo, category AS categoria, author AS autor, \
             image_url AS imagem_url FROM books",
        )
        .fetch_all(&mut conn)
        .await?;

        Ok(books)
    }

    /// Delete the row matching `id`; returns the count of rows removed (0 or 1).
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, StorageError> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(&mut conn)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estante_kernel::Module;

    async fn temp_store() -> (tempfile::TempDir, BookStore) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("books.db"));
        db.run_migrations(&crate::modules::books::BooksModule::new().migrations())
            .await
            .unwrap();
        (dir, BookStore::new(db))
    }

    fn dune() -> NewBook {
        NewBook {
            titulo: "Dune".to_string(),
            categoria: "Ficção".to_string(),
            autor: "Frank Herbert".to_string(),
            imagem_url: "http://x/1.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_monotonic_ids() {
        let (_dir, store) = temp_store().await;

        let first = store.insert(&dune()).await.unwrap();
        let second = store.insert(&dune()).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn list_all_returns_inserted_rows() {
        let (_dir, store) = temp_store().await;
        store.insert(&dune()).await.unwrap();

        let books = store.list_all().await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[0].titulo, "Dune");
        assert_eq!(books[0].categoria, "Ficção");
        assert_eq!(books[0].autor, "Frank Herbert");
        assert_eq!(books[0].imagem_url, "http://x/1.jpg");
    }

    #[tokio::test]
    async fn delete_reports_rows_affected() {
        let (_dir, store) = temp_store().await;
        let id = store.insert(&dune()).await.unwrap();

        assert_eq!(store.delete_by_id(id).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(id).await.unwrap(), 0);
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
