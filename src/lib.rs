pub mod app;
pub mod frame;
pub mod input;
pub mod layout;
pub mod narrative;
pub mod resolve;
pub mod ui;
