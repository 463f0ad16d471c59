// ABOUTME: Library crate for rolo exposing the ordering engine, editor and tmux glue for the binary and tests

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
pub mod session;
pub mod tmux;
