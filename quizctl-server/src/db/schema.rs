//! Schema creation for the quiz tables
//!
//! Runs on startup and is idempotent: every statement is
//! `CREATE ... IF NOT EXISTS`. Concurrent callers are serialized by a
//! transaction-scoped advisory lock, since `IF NOT EXISTS` alone still races
//! on the catalog when two sessions create the same table.

use sqlx::PgPool;

/// Advisory lock key held while the schema is created ("quizctl" in ASCII).
const SCHEMA_LOCK_KEY: i64 = 0x0071_7569_7a63_746c;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS questions (
        id BIGSERIAL PRIMARY KEY,
        question_text TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_questions_question_text ON questions (question_text)",
    r#"
    CREATE TABLE IF NOT EXISTS choices (
        id BIGSERIAL PRIMARY KEY,
        choice_text TEXT NOT NULL,
        is_correct BOOLEAN NOT NULL,
        question_id BIGINT NOT NULL REFERENCES questions (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_choices_choice_text ON choices (choice_text)",
    "CREATE INDEX IF NOT EXISTS idx_choices_question_id ON choices (question_id)",
];

/// Create the `questions` and `choices` tables if they are absent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring quiz schema...");

    let mut tx = pool.begin().await?;

    // Released on commit or rollback
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    // Statements run one at a time; the extended query protocol rejects
    // multiple commands in one string.
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    tracing::info!("Quiz schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_created_before_choices() {
        let questions = STATEMENTS
            .iter()
            .position(|s| s.contains("CREATE TABLE IF NOT EXISTS questions"))
            .unwrap();
        let choices = STATEMENTS
            .iter()
            .position(|s| s.contains("CREATE TABLE IF NOT EXISTS choices"))
            .unwrap();
        assert!(questions < choices, "choices references questions");
    }

    #[test]
    fn every_statement_is_idempotent() {
        for statement in STATEMENTS {
            assert!(statement.contains("IF NOT EXISTS"), "{statement}");
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_twice() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        ensure_schema(&pool).await.expect("first run");
        ensure_schema(&pool).await.expect("second run");

        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM information_schema.tables WHERE table_name = 'choices')",
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");
        assert!(exists);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_ensure_schema_on_fresh_tables() {
        use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
        use std::str::FromStr;

        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let admin = crate::db::create_pool(&url).await.expect("pool creation failed");

        // Private namespace so dropping tables cannot disturb other tests
        let namespace = format!("quizctl_schema_race_{}", std::process::id());
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {namespace} CASCADE"))
            .execute(&admin)
            .await
            .expect("drop schema failed");
        sqlx::query(&format!("CREATE SCHEMA {namespace}"))
            .execute(&admin)
            .await
            .expect("create schema failed");

        let options = PgConnectOptions::from_str(&url)
            .expect("invalid DATABASE_URL")
            .options([("search_path", namespace.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .expect("pool creation failed");

        for round in 0..10 {
            sqlx::query("DROP TABLE IF EXISTS choices, questions")
                .execute(&pool)
                .await
                .expect("drop tables failed");

            let (first, second) = tokio::join!(ensure_schema(&pool), ensure_schema(&pool));
            assert!(first.is_ok(), "round {round}: {first:?}");
            assert!(second.is_ok(), "round {round}: {second:?}");
        }

        let (tables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = $1",
        )
        .bind(&namespace)
        .fetch_one(&pool)
        .await
        .expect("query failed");
        assert_eq!(tables, 2);

        pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {namespace} CASCADE"))
            .execute(&admin)
            .await
            .expect("cleanup failed");
    }
}
