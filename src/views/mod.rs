// src/views/mod.rs
//
// Toolkit-independent presentation models: the filtering, grouping and
// formatting both front ends share. Nothing here does I/O.

pub mod favorites;
pub mod home;
pub mod matches;
pub mod schedule;
pub mod standings;
pub mod team;
pub mod teams;
