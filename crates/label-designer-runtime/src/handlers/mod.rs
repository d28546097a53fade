pub mod preview;
pub mod print;
pub mod styles;
pub mod upload;
