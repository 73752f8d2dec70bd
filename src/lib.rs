pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod mail;
pub mod models;
pub mod realtime;
pub mod services;
pub mod store;

use std::sync::Arc;

use crate::services::Services;

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}
