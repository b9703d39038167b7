use std::env;
use secrecy::SecretString;

use crate::services::quiz_selector::DrawMode;

pub const DEFAULT_QUESTIONS_PER_PAGE: usize = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub categories_collection: String,
    pub questions_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub questions_per_page: usize,
    pub cors_allowed_origin: String,
    pub seed_categories: bool,
    pub quiz_draw_mode: DrawMode,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "trivia".to_string()),
            categories_collection: env::var("CATEGORIES_COLLECTION")
                .unwrap_or_else(|_| "categories".to_string()),
            questions_collection: env::var("QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "questions".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            questions_per_page: env::var("QUESTIONS_PER_PAGE")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(DEFAULT_QUESTIONS_PER_PAGE),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "*".to_string()),
            seed_categories: env_flag("SEED_CATEGORIES").unwrap_or(true),
            quiz_draw_mode: draw_mode(env_flag("QUIZ_LEGACY_DRAW")),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "trivia-test".to_string(),
            categories_collection: "categories".to_string(),
            questions_collection: "questions".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            questions_per_page: DEFAULT_QUESTIONS_PER_PAGE,
            cors_allowed_origin: "*".to_string(),
            seed_categories: false,
            quiz_draw_mode: DrawMode::Uniform,
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|value| parse_flag(&value))
}

fn draw_mode(legacy: Option<bool>) -> DrawMode {
    if legacy.unwrap_or(false) {
        DrawMode::Legacy
    } else {
        DrawMode::Uniform
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
