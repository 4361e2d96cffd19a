//! Doable library - core to-do list management behind the `doable` CLI

pub mod cli;
pub mod migrations;
pub mod todo;
