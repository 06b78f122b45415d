pub mod controller;
pub mod events;
pub mod io;
pub mod state;
pub mod tray;
pub mod ui;

#[cfg(test)]
mod tests;
