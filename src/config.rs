
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub port: u16,
}

impl Config {
    /// The database settings are optional: the server still starts without
    /// them and every data endpoint reports the store as not configured.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").ok();
        let database_name = std::env::var("DATABASE_NAME").ok();
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .expect("PORT must be a valid u16");

        Config {
            database_url,
            database_name,
            port,
        }
    }
}
