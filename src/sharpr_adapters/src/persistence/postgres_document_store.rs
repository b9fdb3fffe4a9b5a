use chrono::{DateTime, Utc};
use sharpr_core::{DocumentStore, DocumentStoreError, Role, UserId, UserRecord};
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Relational stand-in for the `users` collection, one row per record.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresDocumentStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    role: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord::new(
            UserId::new(row.id),
            Role::from(row.role.as_str()),
            row.name,
            row.created_at,
        )
    }
}

#[async_trait::async_trait]
impl DocumentStore for PostgresDocumentStore {
    #[tracing::instrument(name = "Retrieving user record from PostgreSQL", skip_all)]
    async fn get_user(&self, id: &UserId) -> Result<UserRecord, DocumentStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, role, name, created_at
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DocumentStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRecord::from).ok_or(DocumentStoreError::NotFound)
    }

    #[tracing::instrument(name = "Writing user record to PostgreSQL", skip_all)]
    async fn set_user(&self, record: UserRecord) -> Result<(), DocumentStoreError> {
        sqlx::query(
            r#"
                INSERT INTO users (id, role, name, created_at)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO UPDATE
                SET role = EXCLUDED.role, name = EXCLUDED.name, created_at = EXCLUDED.created_at
            "#,
        )
        .bind(record.id().as_str())
        .bind(record.role().as_str())
        .bind(record.name())
        .bind(record.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DocumentStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }
}

/// Connect to PostgreSQL and apply pending migrations.
pub async fn configure_postgresql(url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = get_postgres_pool(url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
