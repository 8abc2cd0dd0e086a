use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::{ContactForm, ContactSubmission},
        value_objects::SubmissionId,
    },
    ports::repositories::ContactRepository,
};

/// SQL-based implementation of ContactRepository using PostgreSQL
#[derive(Clone)]
pub struct SqlContactRepository {
    pool: PgPool,
}

impl SqlContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Initialize database tables
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS contact_submissions (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL CHECK (name <> ''),
                email TEXT NOT NULL,
                company TEXT,
                message TEXT NOT NULL CHECK (char_length(message) >= 10),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );

            CREATE INDEX IF NOT EXISTS idx_contact_submissions_created_at
                ON contact_submissions(created_at);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn from_row(row: &PgRow) -> ContactSubmission {
        ContactSubmission::builder()
            .id(SubmissionId::from_uuid(row.get::<Uuid, _>("id")))
            .name(row.get("name"))
            .email(row.get("email"))
            .maybe_company(row.get("company"))
            .message(row.get("message"))
            .created_at(row.get::<DateTime<Utc>, _>("created_at"))
            .build()
    }

    fn convert_error(context: &str, err: sqlx::Error) -> StorageError {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StorageError::unavailable("postgres", format!("{}: {}", context, err))
            }
            err => StorageError::infrastructure(format!("Database error {}", context), err),
        }
    }
}

#[async_trait]
impl ContactRepository for SqlContactRepository {
    async fn save(&self, form: &ContactForm) -> StorageResult<ContactSubmission> {
        let submission = ContactSubmission::accept(form);

        sqlx::query(
            r#"
            INSERT INTO contact_submissions (id, name, email, company, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(submission.id.as_uuid())
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.company)
        .bind(&submission.message)
        .bind(submission.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::convert_error("storing submission", e))?;

        Ok(submission)
    }

    async fn get(&self, id: &SubmissionId) -> StorageResult<Option<ContactSubmission>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, company, message, created_at
            FROM contact_submissions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::convert_error("retrieving submission", e))?;

        Ok(row.as_ref().map(Self::from_row))
    }

    async fn count(&self) -> StorageResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Self::convert_error("counting submissions", e))?;

        Ok(count as usize)
    }
}
