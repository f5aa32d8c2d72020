//! SQLite-backed entity store: schema bootstrap and single-statement
//! reads/writes for heroes, powers, and hero-power links.

use crate::error::AppError;
use crate::models::{validate_description, Hero, HeroPower, Power, Strength};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Table DDL, parents first. hero_powers deliberately carries no
/// UNIQUE(hero_id, power_id): pair uniqueness is probed at the handler level
/// before insert, so the check is best-effort under concurrent writers.
const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS heroes (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        super_name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS powers (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS hero_powers (
        id INTEGER PRIMARY KEY,
        strength TEXT NOT NULL,
        hero_id INTEGER NOT NULL REFERENCES heroes(id) ON DELETE CASCADE,
        power_id INTEGER NOT NULL REFERENCES powers(id) ON DELETE CASCADE
    )
    "#,
];

/// Store handle over the connection pool. Constructed once at startup and
/// cloned into handlers through [`AppState`](crate::state::AppState);
/// individual statements check a connection out per call.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open a pool for `url` (e.g. `sqlite:superheroes.db`), creating the
    /// database file if missing. Foreign keys are switched on so cascade
    /// deletes apply. In-memory databases get a single-connection pool that
    /// is never recycled, so every statement sees the same database.
    pub async fn connect(url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let max_connections = if is_in_memory(url) { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Store { pool })
    }

    /// Single-connection in-memory store; used by the test suites.
    pub async fn in_memory() -> Result<Self, AppError> {
        Self::connect("sqlite::memory:").await
    }

    /// Create the three tables if they do not exist. Bootstrap only; schema
    /// evolution stays outside this crate.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        for ddl in SCHEMA_DDL {
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Cheap probe used by the readiness route.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// All heroes, id order.
    pub async fn list_heroes(&self) -> Result<Vec<Hero>, AppError> {
        let heroes =
            sqlx::query_as::<_, Hero>("SELECT id, name, super_name FROM heroes ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(heroes)
    }

    /// One hero by primary key.
    pub async fn hero(&self, id: i64) -> Result<Option<Hero>, AppError> {
        let hero =
            sqlx::query_as::<_, Hero>("SELECT id, name, super_name FROM heroes WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(hero)
    }

    pub async fn insert_hero(&self, name: &str, super_name: &str) -> Result<Hero, AppError> {
        let hero = sqlx::query_as::<_, Hero>(
            "INSERT INTO heroes (name, super_name) VALUES (?, ?) RETURNING id, name, super_name",
        )
        .bind(name)
        .bind(super_name)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(hero_id = hero.id, "hero created");
        Ok(hero)
    }

    /// Delete a hero; dependent links go with it (ON DELETE CASCADE).
    /// Returns whether a row existed. Not routed over HTTP.
    pub async fn delete_hero(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All powers, id order.
    pub async fn list_powers(&self) -> Result<Vec<Power>, AppError> {
        let powers =
            sqlx::query_as::<_, Power>("SELECT id, name, description FROM powers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(powers)
    }

    /// One power by primary key.
    pub async fn power(&self, id: i64) -> Result<Option<Power>, AppError> {
        let power =
            sqlx::query_as::<_, Power>("SELECT id, name, description FROM powers WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(power)
    }

    /// Insert a power. The description rule runs before any SQL, so a failing
    /// value leaves the table untouched.
    pub async fn insert_power(&self, name: &str, description: &str) -> Result<Power, AppError> {
        validate_description(description)?;
        let power = sqlx::query_as::<_, Power>(
            "INSERT INTO powers (name, description) VALUES (?, ?) RETURNING id, name, description",
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(power_id = power.id, "power created");
        Ok(power)
    }

    /// Update one power's description. Validates first; returns the updated
    /// row, or None when the id has no row.
    pub async fn update_power_description(
        &self,
        id: i64,
        description: &str,
    ) -> Result<Option<Power>, AppError> {
        validate_description(description)?;
        let power = sqlx::query_as::<_, Power>(
            "UPDATE powers SET description = ? WHERE id = ? RETURNING id, name, description",
        )
        .bind(description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        if let Some(ref power) = power {
            tracing::debug!(power_id = power.id, "power description updated");
        }
        Ok(power)
    }

    /// Delete a power; dependent links go with it. Not routed over HTTP.
    pub async fn delete_power(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM powers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Links owned by one hero, id order.
    pub async fn links_for_hero(&self, hero_id: i64) -> Result<Vec<HeroPower>, AppError> {
        let links = sqlx::query_as::<_, HeroPower>(
            "SELECT id, strength, hero_id, power_id FROM hero_powers WHERE hero_id = ? ORDER BY id",
        )
        .bind(hero_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    /// Links referencing one power, id order.
    pub async fn links_for_power(&self, power_id: i64) -> Result<Vec<HeroPower>, AppError> {
        let links = sqlx::query_as::<_, HeroPower>(
            "SELECT id, strength, hero_id, power_id FROM hero_powers WHERE power_id = ? ORDER BY id",
        )
        .bind(power_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(links)
    }

    /// Existence probe for a (hero_id, power_id) pair. Nothing stops two
    /// concurrent writers from both seeing None here; no unique index backs
    /// this check.
    pub async fn find_link(
        &self,
        hero_id: i64,
        power_id: i64,
    ) -> Result<Option<HeroPower>, AppError> {
        let link = sqlx::query_as::<_, HeroPower>(
            "SELECT id, strength, hero_id, power_id FROM hero_powers \
             WHERE hero_id = ? AND power_id = ? LIMIT 1",
        )
        .bind(hero_id)
        .bind(power_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(link)
    }

    /// Insert a link inside its own unit of work. On failure the transaction
    /// is rolled back before the error is surfaced; no retry.
    pub async fn insert_link(
        &self,
        strength: Strength,
        hero_id: i64,
        power_id: i64,
    ) -> Result<HeroPower, AppError> {
        let mut tx = self.pool.begin().await?;
        let inserted = sqlx::query_as::<_, HeroPower>(
            "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?, ?, ?) \
             RETURNING id, strength, hero_id, power_id",
        )
        .bind(strength.as_str())
        .bind(hero_id)
        .bind(power_id)
        .fetch_one(&mut *tx)
        .await;
        match inserted {
            Ok(link) => {
                tx.commit().await.map_err(AppError::CommitFailed)?;
                tracing::debug!(link_id = link.id, hero_id, power_id, "hero power created");
                Ok(link)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback after failed link insert also failed");
                }
                Err(AppError::CommitFailed(e))
            }
        }
    }

    /// Empty all three tables, children first. Used by the seed binary.
    pub async fn clear(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM hero_powers")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM powers")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM heroes")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
