pub mod auth;
pub mod db;
pub mod reset;
pub mod settings;
