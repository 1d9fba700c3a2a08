mod button;
mod config;
