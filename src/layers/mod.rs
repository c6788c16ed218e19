pub mod base;
pub mod icon;
pub mod macros;
pub mod manager;
pub mod marker;
pub mod tile;
