pub mod api;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod notice;
pub mod services;
pub mod shell;
pub mod state;
pub mod storage;
pub mod views;
