use crate::db::models::{Center, NewCenter, NewUser, NewVaccination, User, Vaccination};
use crate::db::schema::MYSQL_INIT;
use crate::error::AppError;
use sqlx::{MySql, Pool};

pub type MySqlPool = Pool<MySql>;

/// Typed wrapper over the shared connection pool. One instance is built at
/// startup and injected into the router; handlers hold no other state.
#[derive(Clone)]
pub struct VaccineStore {
    pool: MySqlPool,
}

impl VaccineStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    /// Idempotent (CREATE TABLE IF NOT EXISTS) and safe to repeat.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        // execute one statement at a time; sqlx::query rejects multi-commands
        for stmt in MYSQL_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a registered user. Returns the generated user_id.
    /// A duplicate email surfaces as a constraint-violation error.
    pub async fn insert_user(&self, user: NewUser) -> Result<u64, AppError> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, contact_info) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(user.username)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.contact_info)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id())
    }

    /// All users with the given username, ordered by user_id. Usernames are
    /// not unique; login takes the first match.
    pub async fn find_users_by_username(&self, username: &str) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT user_id, username, email, password_hash, contact_info \
             FROM users WHERE username = ? ORDER BY user_id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert an administered-dose record. user_id is left NULL.
    pub async fn insert_vaccination(&self, vac: NewVaccination) -> Result<u64, AppError> {
        let result = sqlx::query(
            "INSERT INTO vaccinations (vaccine_name, date_administered, provider, next_due_date) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(vac.vaccine_name)
        .bind(vac.date_administered)
        .bind(vac.provider)
        .bind(vac.next_due_date)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id())
    }

    pub async fn find_vaccinations_by_name(&self, name: &str) -> Result<Vec<Vaccination>, AppError> {
        let rows = sqlx::query_as::<_, Vaccination>(
            "SELECT vaccination_id, user_id, vaccine_name, date_administered, provider, \
             next_due_date FROM vaccinations WHERE vaccine_name = ? ORDER BY vaccination_id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a provider location. Coordinates are never supplied by the form.
    pub async fn insert_center(&self, center: NewCenter) -> Result<u64, AppError> {
        let result = sqlx::query(
            "INSERT INTO centers (centername, address, contact_info, services_offered) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(center.centername)
        .bind(center.address)
        .bind(center.contact_info)
        .bind(center.services_offered)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_id())
    }

    pub async fn find_centers_by_name(&self, name: &str) -> Result<Vec<Center>, AppError> {
        let rows = sqlx::query_as::<_, Center>(
            "SELECT center_id, centername, address, contact_info, services_offered \
             FROM centers WHERE centername = ? ORDER BY center_id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
