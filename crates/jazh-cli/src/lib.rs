pub mod commands;
pub mod trace_init;
pub mod unihan;
