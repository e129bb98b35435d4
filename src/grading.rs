// src/grading.rs

use crate::models::answer::{CheckedAnswer, GuessSubmission, ScoreReport};

/// Points awarded per correctly guessed component.
pub const POINTS_PER_COMPONENT: i64 = 2;

/// Grades one component: exact, case-sensitive string equality.
/// No trimming or normalization is applied.
fn check_answer(correct_answer: &str, guess: &str) -> CheckedAnswer {
    CheckedAnswer {
        is_correct: guess == correct_answer,
        correct_answer: correct_answer.to_owned(),
    }
}

/// Grades a submission against the answer-key entries.
///
/// Pure fold over `(component name, correct value)` pairs: each recognized
/// component contributes a `CheckedAnswer` and, if correct, 2 points.
///
/// An unrecognized component name aborts the fold and returns the default
/// zero report, discarding anything accumulated so far. Clients depend on
/// this exact degradation; see DESIGN.md before changing it.
pub fn grade<'a, I>(entries: I, submission: &GuessSubmission) -> ScoreReport
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut report = ScoreReport::default();

    for (component, correct_answer) in entries {
        let checked = match component {
            "keyboard_id" => report
                .keyboard_id
                .insert(check_answer(correct_answer, &submission.keyboard)),
            "plate_material_id" => report
                .plate_material_id
                .insert(check_answer(correct_answer, &submission.plate_material)),
            "keycap_material_id" => report
                .keycap_material_id
                .insert(check_answer(correct_answer, &submission.keycap_material)),
            "keyswitch_id" => report
                .keyswitch_id
                .insert(check_answer(correct_answer, &submission.keyswitch)),
            other => {
                tracing::error!("unhandled component type: {}", other);
                return ScoreReport::default();
            }
        };

        if checked.is_correct {
            report.total_points += POINTS_PER_COMPONENT;
        }
    }

    report
}
