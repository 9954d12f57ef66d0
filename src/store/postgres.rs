//! PostgreSQL store and schema bootstrap.

use super::ManagementStore;
use crate::error::StoreError;
use crate::model::{Breed, BreedInsert, Pet, PetInsert};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Table DDL, applied in order. Constraint names are stable so violations can be reported.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS breeds (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        CONSTRAINT breeds_name_key UNIQUE (name)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pets (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        age INTEGER NOT NULL,
        breed_id INTEGER NOT NULL,
        CONSTRAINT pets_age_check CHECK (age >= 0),
        CONSTRAINT pets_breed_id_fkey FOREIGN KEY (breed_id) REFERENCES breeds (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS pets_breed_id_idx ON pets (breed_id)",
];

const PET_COLUMNS: &str = "p.id, p.name, p.age, p.breed_id, b.name AS breed_name";

/// Create `breeds` and `pets` if they do not exist. Existing tables are left untouched.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), StoreError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Create the database named in `database_url` if missing, connecting through the `postgres`
/// database with every other connection parameter (TLS mode, host, options) kept as given.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin, target) = admin_options(database_url)?;
    let Some(db_name) = target.filter(|name| name != "postgres") else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` maintenance database plus the database `database_url` names, if any.
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), StoreError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| StoreError::Unavailable(format!("invalid DATABASE_URL: {}", e)))?;
    let target = opts
        .get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);
    Ok((opts.database("postgres"), target))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[derive(sqlx::FromRow)]
struct PetRow {
    id: i32,
    name: String,
    age: i32,
    breed_id: i32,
    breed_name: String,
}

impl From<PetRow> for Pet {
    fn from(r: PetRow) -> Self {
        Pet {
            id: r.id,
            name: r.name,
            age: r.age,
            breed_id: r.breed_id,
            breed: Breed {
                id: r.breed_id,
                name: r.breed_name,
            },
        }
    }
}

/// Store backed by a connection pool. Every call holds a pooled connection only for
/// its own statement, so no connection is shared between concurrent requests.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ManagementStore for PgStore {
    async fn list_breeds(&self) -> Result<Vec<Breed>, StoreError> {
        let rows: Vec<(i32, String)> = sqlx::query_as("SELECT id, name FROM breeds ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|(id, name)| Breed { id, name }).collect())
    }

    async fn find_breed(&self, id: i32) -> Result<Option<Breed>, StoreError> {
        let row: Option<(i32, String)> = sqlx::query_as("SELECT id, name FROM breeds WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(id, name)| Breed { id, name }))
    }

    async fn insert_breed(&self, breed: &BreedInsert) -> Result<Breed, StoreError> {
        tracing::debug!(name = %breed.name, "insert breed");
        let (id, name): (i32, String) =
            sqlx::query_as("INSERT INTO breeds (name) VALUES ($1) RETURNING id, name")
                .bind(&breed.name)
                .fetch_one(&self.pool)
                .await?;
        Ok(Breed { id, name })
    }

    async fn list_pets(&self) -> Result<Vec<Pet>, StoreError> {
        let sql = format!(
            "SELECT {} FROM pets p JOIN breeds b ON b.id = p.breed_id ORDER BY p.id",
            PET_COLUMNS
        );
        let rows: Vec<PetRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Pet::from).collect())
    }

    async fn find_pet(&self, id: i32) -> Result<Option<Pet>, StoreError> {
        let sql = format!(
            "SELECT {} FROM pets p JOIN breeds b ON b.id = p.breed_id WHERE p.id = $1",
            PET_COLUMNS
        );
        let row: Option<PetRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Pet::from))
    }

    async fn insert_pet(&self, pet: &PetInsert) -> Result<Pet, StoreError> {
        tracing::debug!(name = %pet.name, breed_id = pet.breed_id, "insert pet");
        let sql = format!(
            r#"
            WITH p AS (
                INSERT INTO pets (name, age, breed_id) VALUES ($1, $2, $3)
                RETURNING id, name, age, breed_id
            )
            SELECT {} FROM p JOIN breeds b ON b.id = p.breed_id
            "#,
            PET_COLUMNS
        );
        let row: PetRow = sqlx::query_as(&sql)
            .bind(&pet.name)
            .bind(pet.age)
            .bind(pet.breed_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
