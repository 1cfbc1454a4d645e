//! Desktop explorer for the CRAQUE football player ratings.
//!
//! The crate splits into a data layer (`data`) that loads and filters
//! player-season records, and an egui front end (`ui`, `app`, `state`)
//! that renders them. The data layer never touches the UI toolkit, so
//! the filtering and loading logic is unit testable on its own.

pub mod app;
pub mod color;
pub mod data;
pub mod labels;
pub mod state;
pub mod ui;
