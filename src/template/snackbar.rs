use askama::Template;

#[derive(Template)]
#[template(path = "snackbar.html")]
pub struct Snackbar<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub color: &'a str,
}

impl Snackbar<'_> {
    /// Notice shown above the views when the catalog could not be loaded.
    pub fn fetch_failed() -> Self {
        Snackbar {
            title: "Error",
            message: "Could not load products",
            color: "red",
        }
    }
}
