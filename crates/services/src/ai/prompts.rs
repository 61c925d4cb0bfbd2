//! Prompt templates sent to the generation service.

use tutor_core::model::{INSUFFICIENT_ANSWER, LessonSignature, MAX_QUIZ_QUESTIONS};

#[must_use]
pub fn lesson(signature: &LessonSignature) -> String {
    format!(
        "Create a clear, structured, and engaging tutorial for {grade} {subject} on '{concept}'. \
         Make it suitable for a student at that level, use simple language and bullet points if needed.",
        grade = signature.grade(),
        subject = signature.subject(),
        concept = signature.concept(),
    )
}

#[must_use]
pub fn simpler_lesson(signature: &LessonSignature, previous: &str) -> String {
    format!(
        "Re-explain this {grade} {subject} tutorial on '{concept}' in a simpler and easier manner, \
         keeping it accurate and suitable for the same student:\n\n{previous}",
        grade = signature.grade(),
        subject = signature.subject(),
        concept = signature.concept(),
    )
}

#[must_use]
pub fn quiz_questions(lesson: &str) -> String {
    format!(
        "Generate {MAX_QUIZ_QUESTIONS} quiz questions (only questions) based strictly on the following tutorial:\n\n\
         {lesson}\n\n\
         Provide them as a numbered list, one question per line, without answers."
    )
}

#[must_use]
pub fn quiz_answers(lesson: &str, questions: &str) -> String {
    format!(
        "Using only the tutorial below, give the correct answer to each quiz question. \
         Reply with a numbered list in the same order, one short answer per line. \
         If a question cannot be answered from the tutorial, write '{INSUFFICIENT_ANSWER}' for it.\n\n\
         Tutorial:\n{lesson}\n\n\
         Questions:\n{questions}"
    )
}

#[must_use]
pub fn grading(question: &str, student_answer: &str, lesson: &str) -> String {
    format!(
        "You are grading a student's quiz answer. The tutorial below is the only knowledge \
         you may use.\n\n\
         Tutorial:\n{lesson}\n\n\
         Question: {question}\n\
         Student answer: {student_answer}\n\n\
         Start your reply with a single line containing exactly CORRECT or INCORRECT. \
         Then give one or two sentences of encouraging feedback. \
         If the answer is incorrect, do not reveal the correct answer."
    )
}

#[must_use]
pub fn hint(question: &str, reference_answer: &str, lesson: &str) -> String {
    let mut prompt = String::from(
        "Provide a helpful hint for the following quiz question without giving the full answer.\n\n",
    );
    if !lesson.trim().is_empty() {
        prompt.push_str("Tutorial the question is based on:\n");
        prompt.push_str(lesson);
        prompt.push_str("\n\n");
    }
    prompt.push_str("Question: ");
    prompt.push_str(question);
    if !reference_answer.trim().is_empty() {
        prompt.push_str("\nCorrect answer (do not reveal it): ");
        prompt.push_str(reference_answer);
    }
    prompt
}
