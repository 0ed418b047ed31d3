use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Схема каталога. Категорию с товарами удалить нельзя (ON DELETE RESTRICT).
const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS a001_category (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL UNIQUE,
        slug TEXT NOT NULL UNIQUE,
        kind TEXT NOT NULL CHECK(kind IN ('goods', 'services', 'meta')),
        created_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a002_product (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        price TEXT NOT NULL,
        image_url TEXT NOT NULL,
        category_id TEXT NOT NULL,
        created_at TEXT,
        FOREIGN KEY (category_id) REFERENCES a001_category (id)
            ON DELETE RESTRICT
            ON UPDATE CASCADE
    );
    "#,
];

/// `sqlite://` URL for a database file, created on first open.
pub fn database_url(db_path: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

/// Открывает БД и применяет схему. Существующие таблицы не трогает.
pub async fn connect(db_path: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = database_url(db_path)?;

    tracing::info!("Opening catalog database at {}", db_path.display());
    let conn = Database::connect(&db_url).await?;

    for ddl in SCHEMA {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl.to_string()))
            .await?;
    }
    Ok(conn)
}

pub async fn initialize_database(db_path: &Path) -> anyhow::Result<()> {
    let conn = connect(db_path).await?;
    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Отдельная БД во временном каталоге для тестов
#[cfg(test)]
pub async fn open_test_database() -> DatabaseConnection {
    let path = test_database_path();
    connect(&path).await.expect("test database")
}

#[cfg(test)]
pub fn test_database_path() -> std::path::PathBuf {
    std::env::temp_dir()
        .join("catalog-tests")
        .join(format!("{}.db", uuid::Uuid::new_v4()))
}
