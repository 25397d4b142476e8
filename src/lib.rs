pub mod common;
pub mod config;
pub mod db;
pub mod elements;
pub mod landing;
pub mod models;
pub mod services;
