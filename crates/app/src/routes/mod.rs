pub mod dashboard;
pub mod landing;
pub mod not_found;

use dioxus::prelude::*;

use dashboard::Dashboard;
use landing::Landing;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard/:user")]
    Dashboard { user: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
