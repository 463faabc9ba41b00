use crate::models::Question;

/// Grades a submission against a question list. Answers align with questions
/// by position, never by question id. An absent entry (shorter answer array
/// or an explicit null) and an index that matches no option simply score
/// zero for that position; this is a deliberate contract, not tolerance of
/// out-of-bounds access.
///
/// Grading is a pure function of the question list and the answer array.
pub fn grade(questions: &[Question], answers: &[Option<i32>]) -> i32 {
    questions
        .iter()
        .enumerate()
        .filter(|(i, question)| answers.get(*i).copied().flatten() == Some(question.correct_index))
        .count() as i32
}
