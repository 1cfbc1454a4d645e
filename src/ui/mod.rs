//! egui front end: navigation/filter panels and the four pages.

pub mod compare;
pub mod panels;
pub mod plot;
pub mod table;
