mod product;
mod snackbar;

pub use product::*;
pub use snackbar::*;
