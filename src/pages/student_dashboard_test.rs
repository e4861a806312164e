use super::{QUESTIONS, format_feedback};
use crate::net::types::CourseWithTeachers;

fn course() -> CourseWithTeachers {
    CourseWithTeachers {
        id: 7,
        course_code: "CS101".to_owned(),
        course_name: "Intro to Computing".to_owned(),
        teachers: Vec::new(),
    }
}

fn all_answered() -> Vec<Option<String>> {
    QUESTIONS
        .iter()
        .map(|q| Some(q.options[0].to_owned()))
        .collect()
}

#[test]
fn feedback_starts_with_course_header() {
    let text = format_feedback(&course(), &all_answered(), "");
    assert!(text.starts_with("Course Feedback for Intro to Computing (CS101)\n\n"));
}

#[test]
fn feedback_contains_every_question_and_answer() {
    let text = format_feedback(&course(), &all_answered(), "");
    for question in &QUESTIONS {
        assert!(text.contains(question.prompt));
        assert!(text.contains(&format!("Answer: {}", question.options[0])));
    }
}

#[test]
fn unanswered_questions_are_skipped() {
    let mut answers = all_answered();
    answers[2] = None;
    let text = format_feedback(&course(), &answers, "");
    assert!(!text.contains(QUESTIONS[2].prompt));
    assert!(text.contains(QUESTIONS[3].prompt));
}

#[test]
fn comments_are_trimmed_and_appended() {
    let text = format_feedback(&course(), &all_answered(), "  great course  ");
    assert!(text.ends_with("Additional Comments:\ngreat course"));
}

#[test]
fn blank_comments_are_omitted() {
    let text = format_feedback(&course(), &all_answered(), "   ");
    assert!(!text.contains("Additional Comments"));
    assert!(text.ends_with("\n\n"));
}

#[test]
fn every_question_offers_five_options() {
    assert_eq!(QUESTIONS.len(), 6);
    for question in &QUESTIONS {
        assert_eq!(question.options.len(), 5);
    }
}
