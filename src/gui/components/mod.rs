// src/gui/components/mod.rs
pub mod action_buttons;
pub mod records_table;
