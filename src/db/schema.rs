//! SQL DDL for initializing the vaccine-record store.
//! MySQL dialect, mirroring the deployed `vaccine_records` database.

/// Bundled schema:
/// - `users`: identity records, `email` UNIQUE
/// - `vaccinations`: administered doses, `user_id` FK to `users` with
///   ON DELETE CASCADE (nullable; the submission path never supplies it)
/// - `centers`: provider locations, optional DECIMAL(9,6) coordinates
///
/// Table order matters: `vaccinations` references `users`.
pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id INT AUTO_INCREMENT PRIMARY KEY,
    username VARCHAR(100) NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL,
    password_hash VARCHAR(255) NOT NULL,
    contact_info VARCHAR(255)
);

CREATE TABLE IF NOT EXISTS vaccinations (
    vaccination_id INT AUTO_INCREMENT PRIMARY KEY,
    user_id INT,
    vaccine_name VARCHAR(100) NOT NULL,
    date_administered DATE,
    provider VARCHAR(100),
    next_due_date DATE,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS centers (
    center_id INT AUTO_INCREMENT PRIMARY KEY,
    centername VARCHAR(100) NOT NULL,
    address VARCHAR(255) NOT NULL,
    contact_info VARCHAR(100),
    services_offered TEXT,
    latitude DECIMAL(9,6),
    longitude DECIMAL(9,6)
);
"#;
