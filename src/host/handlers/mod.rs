pub mod config;
pub use self::config::config_script;

pub mod health;
pub use self::health::health;
