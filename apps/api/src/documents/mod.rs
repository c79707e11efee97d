// Document layer: template catalog, subscription gate, and the unified
// renderer shared by every visual variant.

pub mod catalog;
pub mod gate;
pub mod handlers;
pub mod render;
pub mod resolve;
