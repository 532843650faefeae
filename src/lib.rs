pub mod catalog;
pub mod signals;
pub mod template;
pub mod utils;
