//! Admin analytics dashboard: sentiment charts over course feedback.

use leptos::prelude::*;

use crate::auth::context::Auth;
use crate::components::charts::{FeedbackBarChart, SentimentPieChart, SentimentTotals};
use crate::components::shell::AppShell;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::CourseFeedbackSummary;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let summary = LocalResource::new(move || {
        let auth = auth.clone();
        async move { api::course_feedback_summary(&ApiClient::new(&auth)).await }
    });

    view! {
        <AppShell>
            <h1>"Feedback Analytics"</h1>
            <Suspense fallback=|| view! { <p class="page__loading">"Loading analytics..."</p> }>
                {move || {
                    summary
                        .get()
                        .map(|result| match result {
                            Ok(rows) => view! { <Analytics rows=rows/> }.into_any(),
                            Err(err) => {
                                let retry = summary.clone();
                                view! {
                                    <div class="error-card">
                                        <p>"Unable to load analytics."</p>
                                        <p class="error-card__detail">{err.to_string()}</p>
                                        <button class="btn" on:click=move |_| retry.refetch()>
                                            "Try Again"
                                        </button>
                                    </div>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>
        </AppShell>
    }
}

#[component]
fn Analytics(rows: Vec<CourseFeedbackSummary>) -> impl IntoView {
    let totals = SentimentTotals::from_rows(&rows);
    let table_rows = rows.clone();

    view! {
        <div class="analytics">
            <section class="analytics__panel">
                <h2>"Overall Sentiment"</h2>
                <SentimentPieChart totals=totals/>
            </section>
            <section class="analytics__panel">
                <h2>"Feedback per Course"</h2>
                <FeedbackBarChart rows=rows/>
            </section>
            <section class="analytics__panel analytics__panel--wide">
                <h2>"Course Summary"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Code"</th>
                            <th>"Course"</th>
                            <th>"Feedback"</th>
                            <th>"Positive"</th>
                            <th>"Negative"</th>
                            <th>"Neutral"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {table_rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.course_code}</td>
                                        <td>{row.course_name}</td>
                                        <td>{row.feedback_count}</td>
                                        <td>{row.positive}</td>
                                        <td>{row.negative}</td>
                                        <td>{row.neutral}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
