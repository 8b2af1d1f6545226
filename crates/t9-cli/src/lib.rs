pub mod commands;
pub mod trace_init;
pub mod word_source;
