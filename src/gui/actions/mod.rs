// src/gui/actions/mod.rs
//
// Folder module facade. Actions mutate `App` in response to UI events;
// components and pages call them instead of reaching into the store or
// the worker channel themselves.

pub mod copy;       // src/gui/actions/copy.rs
pub mod favorites;  // src/gui/actions/favorites.rs
pub mod load;       // src/gui/actions/load.rs

pub use copy::copy;
