pub mod adjust;
pub mod menu;
