pub mod launcher;
pub mod platform;
pub mod runtime;
pub mod table;
