use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

/// Landing route, where unauthenticated visitors arrive.
///
/// Signing in happens in the separate enrollment flow, which persists the
/// session marker this app reads; this page only explains the product.
#[component]
pub fn Landing() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing-page",
            Card { class: "landing-card",
                CardHeader {
                    CardTitle { "Studia" }
                    CardDescription { "Track assessments, activity, and progress in one place." }
                }
                CardContent {
                    p { "Sign in from your enrollment portal to open your dashboard." }
                }
                CardFooter {
                    Badge { variant: BadgeVariant::Secondary, "Beta" }
                }
            }
        }
    }
}
