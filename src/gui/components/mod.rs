// src/gui/components/mod.rs
pub mod export_bar;
pub mod fixture_table;
pub mod input_panel;
