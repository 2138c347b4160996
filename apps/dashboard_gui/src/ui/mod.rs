pub mod app;
pub mod cards;
pub mod tables;
