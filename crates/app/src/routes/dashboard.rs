use backend::BackendClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdMessageSquare, LdTarget, LdTrendingUp, LdUser,
};
use dioxus_free_icons::Icon;
use shared_types::{AssessmentScores, ProfileInfo, TrendPoint};
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardHeader, CardTitle, CardTone, ChartSeries,
    LineChart, Separator, Skeleton, ToastOptions,
};

use crate::loader::{self, LoadOutcome, FETCH_FAILED_NOTICE, TOAST_AUTO_DISMISS};
use crate::session::use_session_guard;

/// Placeholder shown for profile fields the backend did not provide.
const FIELD_PLACEHOLDER: &str = "Not available";

/// Fixed assessment figures for the current program cycle.
const ASSESSMENT: AssessmentScores = AssessmentScores {
    initial: 70,
    current: 85,
    target: 90,
};

const RECENT_ACTIVITIES: &[&str] = &["Completed Module 1", "Attended Workshop"];
const MENTOR_FEEDBACK: &[&str] = &["Great progress!", "Keep up the good work!"];

/// Monthly sample series behind the two charts.
fn trend_points() -> Vec<TrendPoint> {
    vec![
        TrendPoint::new("Jan", 2400.0, 400.0, 2400.0),
        TrendPoint::new("Feb", 2210.0, 300.0, 2290.0),
        TrendPoint::new("Mar", 2290.0, 200.0, 2000.0),
        TrendPoint::new("Apr", 2000.0, 278.0, 2181.0),
        TrendPoint::new("May", 2181.0, 189.0, 2500.0),
    ]
}

/// Student progress dashboard: profile, assessment, activities, feedback,
/// and the two progress charts.
///
/// The session guard runs on mount; the loader only fires once the guard
/// confirms a session marker, and re-fires when the `user` route segment
/// changes. The fetch future is owned by the resource, so navigating away
/// drops it before any state write can land.
#[component]
pub fn Dashboard(user: ReadOnlySignal<String>) -> Element {
    let confirmed = use_session_guard();
    let toast = use_toast();
    let mut profile = use_signal(|| Option::<ProfileInfo>::None);

    let _load = use_resource(move || async move {
        if *confirmed.read() != Some(true) {
            return;
        }
        let user = user();
        profile.set(None);

        let result = BackendClient::from_env().get_dashboard_info(&user).await;
        match loader::resolve(result) {
            LoadOutcome::Apply {
                profile: fetched,
                notify,
            } => {
                profile.set(Some(fetched));
                if notify {
                    toast.error(
                        FETCH_FAILED_NOTICE.to_string(),
                        ToastOptions::new().duration(TOAST_AUTO_DISMISS),
                    );
                }
            }
            LoadOutcome::Discard => {
                toast.error(
                    FETCH_FAILED_NOTICE.to_string(),
                    ToastOptions::new().duration(TOAST_AUTO_DISMISS),
                );
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Student Progress" }

            div { class: "dashboard-grid",
                ProfileCard { profile: profile() }
                AssessmentCard {}
                ListCard {
                    title: "Recent Activities",
                    tone: CardTone::Emerald,
                    icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 22, height: 22 } },
                    items: RECENT_ACTIVITIES,
                }
                ListCard {
                    title: "Mentor Feedback",
                    tone: CardTone::Amber,
                    icon: rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 22, height: 22 } },
                    items: MENTOR_FEEDBACK,
                }
            }

            Separator {}

            div { class: "dashboard-charts",
                PerformanceChartCard {}
                ProjectionChartCard {}
            }
        }
    }
}

/// Profile card: skeleton lines while pending, explicit placeholders for
/// fields the backend left out.
#[component]
fn ProfileCard(profile: Option<ProfileInfo>) -> Element {
    rsx! {
        Card { tone: CardTone::Violet,
            CardHeader {
                Icon::<LdUser> { icon: LdUser, width: 22, height: 22 }
                CardTitle { "Profile" }
            }
            CardContent {
                match profile {
                    None => rsx! {
                        Skeleton { style: "height: 1rem; width: 70%;" }
                        Skeleton { style: "height: 1rem; width: 50%;" }
                    },
                    Some(p) => {
                        let name = p.name.as_deref().unwrap_or(FIELD_PLACEHOLDER).to_string();
                        let subject = p.subject.as_deref().unwrap_or(FIELD_PLACEHOLDER).to_string();
                        rsx! {
                            p { "Name: {name}" }
                            p { "Subject: {subject}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AssessmentCard() -> Element {
    rsx! {
        Card { tone: CardTone::Rose,
            CardHeader {
                Icon::<LdTarget> { icon: LdTarget, width: 22, height: 22 }
                CardTitle { "Initial Assessment" }
            }
            CardContent {
                p { "Initial Score: {ASSESSMENT.initial}" }
                p { "Current Score: {ASSESSMENT.current}" }
                p { "Target Score: {ASSESSMENT.target}" }
            }
        }
    }
}

/// A card rendering an ordered list of short lines, keyed by position.
#[component]
fn ListCard(title: String, tone: CardTone, icon: Element, items: &'static [&'static str]) -> Element {
    rsx! {
        Card { tone: tone,
            CardHeader {
                {icon}
                CardTitle { "{title}" }
            }
            CardContent {
                ul { class: "dashboard-list",
                    for item in items.iter() {
                        li { "{item}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PerformanceChartCard() -> Element {
    let points = trend_points();
    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
    let series = vec![
        ChartSeries::new("Score", "#ffffff", points.iter().map(|p| p.score).collect()),
        ChartSeries::new("Effort", "#82ca9d", points.iter().map(|p| p.effort).collect()),
    ];

    rsx! {
        Card { tone: CardTone::Sky,
            CardHeader {
                Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 22, height: 22 }
                CardTitle { "Performance Chart" }
                CardDescription { "Monthly score against practice effort." }
            }
            CardContent {
                LineChart { labels, series }
            }
        }
    }
}

#[component]
fn ProjectionChartCard() -> Element {
    let points = trend_points();
    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
    let series = vec![ChartSeries::new(
        "Projected",
        "#fbbf24",
        points.iter().map(|p| p.projected).collect(),
    )];

    rsx! {
        Card { tone: CardTone::Slate,
            CardHeader {
                Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 22, height: 22 }
                CardTitle { "Projection" }
                CardDescription { "Where the current pace lands by cycle end." }
            }
            CardContent {
                LineChart { labels, series }
            }
        }
    }
}
