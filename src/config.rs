use dotenvy;

#[derive(Debug)]
pub struct AppConfig {
    pub db_namespace: String,
    pub db_database: String,
    pub db_password: Option<String>,
    pub db_username: Option<String>,
    pub db_url: String,
    pub jwt_secret: String,
    pub jwt_duration_hours: i64,
    pub init_server_password: Option<String>,
    pub is_development: bool,
    pub sentry_project_link: Option<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let db_namespace = std::env::var("DB_NAMESPACE").unwrap_or("namespace".to_string());
        let db_database = std::env::var("DB_DATABASE").unwrap_or("database".to_string());
        let db_password = std::env::var("DB_PASSWORD").ok();
        let db_username = std::env::var("DB_USERNAME").ok();
        let db_url = std::env::var("DB_URL").expect("Missing DB_URL in env");

        let jwt_secret = std::env::var("JWT_SECRET").expect("Missing JWT_SECRET in env");
        let jwt_duration_hours = std::env::var("JWT_DURATION_HOURS").map_or(24, |t| {
            t.parse::<i64>()
                .expect("JWT_DURATION_HOURS must be number")
        });

        let init_server_password = std::env::var("START_PASSWORD").ok();
        let is_development = std::env::var("DEVELOPMENT")
            .map(|v| v.eq("true"))
            .unwrap_or(false);

        let sentry_project_link = std::env::var("SENTRY_PROJECT_LINK").ok();

        let port = std::env::var("PORT").map_or(8080, |t| {
            t.parse::<u16>().expect("PORT must be number")
        });

        Self {
            db_namespace,
            db_database,
            db_password,
            db_username,
            db_url,
            jwt_secret,
            jwt_duration_hours,
            init_server_password,
            is_development,
            sentry_project_link,
            port,
        }
    }
}
