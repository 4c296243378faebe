// src/gui/components/mod.rs
pub mod data_table;
pub mod favorites_panel;
pub mod match_card;
pub mod nav;
pub mod status_bar;
pub mod toasts;
