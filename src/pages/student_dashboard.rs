//! Student dashboard: profile, enrolled courses, and the course feedback
//! questionnaire.
//!
//! Feedback is submitted as free text so the backend's sentiment model can
//! score it. The questionnaire answers are folded into one block of text
//! per submission, see [`format_feedback`].

#[cfg(test)]
#[path = "student_dashboard_test.rs"]
mod student_dashboard_test;

use leptos::prelude::*;

use crate::auth::context::Auth;
use crate::components::shell::AppShell;
use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::types::{CourseWithTeachers, UserDetails};

pub(crate) struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 5],
}

pub(crate) const QUESTIONS: [Question; 6] = [
    Question {
        prompt: "How relevant is the course content to your academic goals?",
        options: [
            "Excellent - Highly relevant and valuable",
            "Good - Mostly relevant with clear benefits",
            "Average - Somewhat relevant to my goals",
            "Poor - Limited relevance to my studies",
            "Very Poor - Completely irrelevant and useless",
        ],
    },
    Question {
        prompt: "How would you rate the course difficulty level?",
        options: [
            "Perfect - Challenging but manageable",
            "Good - Appropriate difficulty level",
            "Average - Acceptable challenge level",
            "Poor - Too difficult or too easy",
            "Very Poor - Extremely inappropriate difficulty",
        ],
    },
    Question {
        prompt: "How well organized is the course structure?",
        options: [
            "Excellent - Very well structured and logical",
            "Good - Well organized with clear flow",
            "Average - Adequately structured overall",
            "Poor - Poorly organized and confusing",
            "Very Poor - Completely disorganized and chaotic",
        ],
    },
    Question {
        prompt: "How helpful are the course materials and resources?",
        options: [
            "Excellent - Very comprehensive and useful",
            "Good - Helpful with adequate coverage",
            "Average - Sufficient for basic understanding",
            "Poor - Limited and not very helpful",
            "Very Poor - Inadequate and completely unhelpful",
        ],
    },
    Question {
        prompt: "How fair and appropriate are the assignments and exams?",
        options: [
            "Excellent - Very fair and well-designed",
            "Good - Generally fair with good assessment",
            "Average - Adequately fair most of the time",
            "Poor - Often unfair or poorly designed",
            "Very Poor - Consistently unfair and terrible",
        ],
    },
    Question {
        prompt: "Overall, how satisfied are you with this course?",
        options: [
            "Extremely Satisfied - Outstanding course",
            "Very Satisfied - Great learning experience",
            "Satisfied - Good overall course",
            "Dissatisfied - Poor course experience",
            "Very Dissatisfied - Terrible course",
        ],
    },
];

/// Assembles the submitted text: a course header, every answered
/// question/answer pair, and the trailing comments block when non-empty.
pub(crate) fn format_feedback(
    course: &CourseWithTeachers,
    answers: &[Option<String>],
    comments: &str,
) -> String {
    let mut text = format!(
        "Course Feedback for {} ({})\n\n",
        course.course_name, course.course_code
    );
    for (question, answer) in QUESTIONS.iter().zip(answers) {
        if let Some(answer) = answer {
            text.push_str(question.prompt);
            text.push_str("\nAnswer: ");
            text.push_str(answer);
            text.push_str("\n\n");
        }
    }
    let comments = comments.trim();
    if !comments.is_empty() {
        text.push_str("Additional Comments:\n");
        text.push_str(comments);
    }
    text
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = expect_context::<Auth>();
    let profile = LocalResource::new(move || {
        let auth = auth.clone();
        async move { api::current_user(&ApiClient::new(&auth)).await }
    });

    view! {
        <AppShell>
            <h1>"My Dashboard"</h1>
            <Suspense fallback=|| view! { <p class="page__loading">"Loading your dashboard..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(user) => {
                                let courses = user.enrolled_courses.clone();
                                view! {
                                    <StudentProfile user=user/>
                                    <FeedbackForm courses=courses/>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                let retry = profile.clone();
                                view! {
                                    <div class="error-card">
                                        <p>"Unable to load your dashboard."</p>
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
fn StudentProfile(user: UserDetails) -> impl IntoView {
    let name = user.full_name();
    let email = user.email.clone().unwrap_or_default();
    let student_id = user.student_id.clone().unwrap_or_else(|| "N/A".to_owned());
    let programme = user.programme.clone().unwrap_or_else(|| "N/A".to_owned());
    let intake_year = user.intake_year.clone().unwrap_or_else(|| "N/A".to_owned());

    view! {
        <section class="profile-card">
            <h2>{name}</h2>
            <dl class="profile-card__facts">
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Student ID"</dt>
                <dd>{student_id}</dd>
                <dt>"Programme"</dt>
                <dd>{programme}</dd>
                <dt>"Intake Year"</dt>
                <dd>{intake_year}</dd>
            </dl>
        </section>

        <section class="course-list">
            <h2>"Enrolled Courses"</h2>
            {if user.enrolled_courses.is_empty() {
                view! { <p class="course-list__empty">"You are not enrolled in any courses."</p> }
                    .into_any()
            } else {
                view! {
                    <ul class="course-list__items">
                        {user
                            .enrolled_courses
                            .into_iter()
                            .map(|course| {
                                let teachers = course
                                    .teachers
                                    .iter()
                                    .map(|t| {
                                        let first = t.first_name.as_deref().unwrap_or("");
                                        let last = t.last_name.as_deref().unwrap_or("");
                                        format!("{first} {last}").trim().to_owned()
                                    })
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                view! {
                                    <li class="course-list__item">
                                        <span class="course-list__code">{course.course_code}</span>
                                        <span class="course-list__name">{course.course_name}</span>
                                        <span class="course-list__teachers">{teachers}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}

/// The six-question course feedback form. All questions must be answered
/// before submission; comments are optional.
#[component]
fn FeedbackForm(courses: Vec<CourseWithTeachers>) -> impl IntoView {
    let auth = expect_context::<Auth>();

    let selected = RwSignal::new(None::<i64>);
    let answers = RwSignal::new(vec![None::<String>; QUESTIONS.len()]);
    let comments = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let courses_for_submit = courses.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let Some(course_id) = selected.get_untracked() else {
            error.set(Some("Please select a course".to_owned()));
            return;
        };
        let current = answers.get_untracked();
        if current.iter().any(Option::is_none) {
            error.set(Some("Please answer all questions".to_owned()));
            return;
        }
        let Some(course) = courses_for_submit.iter().find(|c| c.id == course_id) else {
            error.set(Some("Please select a course".to_owned()));
            return;
        };

        let text = format_feedback(course, &current, &comments.get_untracked());
        submitting.set(true);
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            let outcome =
                api::submit_course_feedback(&ApiClient::new(&auth), course_id, text).await;
            match outcome {
                Ok(_) => {
                    success.set(Some("Course feedback submitted successfully!".to_owned()));
                    selected.set(None);
                    answers.set(vec![None; QUESTIONS.len()]);
                    comments.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    view! {
        <section class="feedback-form">
            <h2>"Course Feedback"</h2>
            <p class="feedback-form__hint">
                "Share your thoughts about the course to help us improve"
            </p>

            <form on:submit=on_submit>
                <label class="feedback-form__label">
                    "Choose the course you want to provide feedback for:"
                    <select on:change=move |ev| {
                        selected.set(event_target_value(&ev).parse::<i64>().ok());
                    }>
                        <option value="" selected=move || selected.get().is_none()>
                            "Select a course"
                        </option>
                        {courses
                            .iter()
                            .map(|course| {
                                let id = course.id;
                                let label =
                                    format!("{} - {}", course.course_code, course.course_name);
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || selected.get() == Some(id)
                                    >
                                        {label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                {move || {
                    selected
                        .get()
                        .map(|_| {
                            QUESTIONS
                                .iter()
                                .enumerate()
                                .map(|(index, question)| {
                                    view! {
                                        <fieldset class="feedback-form__question">
                                            <legend>
                                                {format!("{}. {}", index + 1, question.prompt)}
                                            </legend>
                                            {question
                                                .options
                                                .iter()
                                                .map(|option| {
                                                    let option = *option;
                                                    view! {
                                                        <label class="feedback-form__option">
                                                            <input
                                                                type="radio"
                                                                name=format!("question-{index}")
                                                                checked=move || {
                                                                    answers
                                                                        .with(|a| a[index].as_deref() == Some(option))
                                                                }
                                                                on:change=move |_| {
                                                                    answers
                                                                        .update(|a| a[index] = Some(option.to_owned()));
                                                                }
                                                            />
                                                            {option}
                                                        </label>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </fieldset>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                }}

                <label class="feedback-form__label">
                    "Additional Comments (Optional)"
                    <textarea
                        placeholder="Share any additional thoughts about the course..."
                        prop:value=move || comments.get()
                        on:input=move |ev| comments.set(event_target_value(&ev))
                    ></textarea>
                </label>

                {move || error.get().map(|msg| view! { <p class="feedback-form__error">{msg}</p> })}
                {move || {
                    success.get().map(|msg| view! { <p class="feedback-form__success">{msg}</p> })
                }}

                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Feedback" }}
                </button>
            </form>
        </section>
    }
}
