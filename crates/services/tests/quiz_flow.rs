use std::sync::Arc;

use services::ai::ScriptedGenerator;
use services::{Clock, HintOutcome, QuizScreen, SessionLoopService, SessionScreen, SubmitOutcome};
use storage::repository::InMemoryRepository;
use tutor_core::model::{DifficultyGrade, Page, SessionId, Subject};
use tutor_core::time::fixed_now;

fn loop_service(generator: &ScriptedGenerator) -> SessionLoopService {
    SessionLoopService::new(
        Clock::fixed(fixed_now()),
        Arc::new(generator.clone()),
        Arc::new(InMemoryRepository::new()),
    )
}

async fn quiz_ready(
    svc: &SessionLoopService,
    generator: &ScriptedGenerator,
    questions: &str,
    answers: &str,
) -> SessionId {
    generator.push_reply("Adding numbers combines amounts.");
    generator.push_reply(questions);
    generator.push_reply(answers);

    let id = svc.create_session().await.unwrap();
    svc.start_tutorial(
        id,
        Subject::Mathematics,
        "Addition",
        DifficultyGrade::new(2).unwrap(),
    )
    .await
    .unwrap();
    svc.start_quiz(id).await.unwrap();
    id
}

#[tokio::test]
async fn single_question_quiz_ends_with_full_score() {
    let generator = ScriptedGenerator::new();
    let svc = loop_service(&generator);
    let id = quiz_ready(&svc, &generator, "1. What is 2+2?", "1. 4").await;

    generator.push_reply("CORRECT\nTwo plus two is four.");
    let outcome = svc.submit_answer(id, "4").await.unwrap();
    let SubmitOutcome::Graded(feedback) = outcome else {
        panic!("answer was not graded");
    };
    assert!(feedback.is_correct());

    match svc.screen(id).await.unwrap() {
        SessionScreen::Quiz(QuizScreen::Feedback { body, score, .. }) => {
            assert_eq!(body, "Two plus two is four.");
            assert_eq!(score, 1);
        }
        other => panic!("expected feedback, got {other:?}"),
    }

    svc.next_question(id).await.unwrap();
    match svc.screen(id).await.unwrap() {
        SessionScreen::Quiz(QuizScreen::Completed(final_score)) => {
            assert_eq!(final_score.to_string(), "Final Score: 1/1");
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[tokio::test]
async fn every_correct_verdict_counts_once() {
    let generator = ScriptedGenerator::new();
    let svc = loop_service(&generator);
    let questions = "1) One?\n2) Two?\n3) Three?\n4) Four?";
    let answers = "1) 1\n2) 2\n3) 3\n4) 4";
    let id = quiz_ready(&svc, &generator, questions, answers).await;

    let verdicts = ["CORRECT", "incorrect, close", "Correct!", "INCORRECT"];
    for verdict in verdicts {
        generator.push_reply(verdict);
        svc.submit_answer(id, "guess").await.unwrap();
        // a second submit while feedback is showing is rejected
        assert!(svc.submit_answer(id, "again").await.is_err());
        svc.next_question(id).await.unwrap();
    }

    let session = svc.session(id).await.unwrap();
    assert!(session.is_complete());
    assert_eq!(session.score(), 2);
    assert_eq!(session.quiz().len(), 4);
}

#[tokio::test]
async fn quiz_is_capped_and_skips_insufficient_answers() {
    let generator = ScriptedGenerator::new();
    let svc = loop_service(&generator);
    let questions: Vec<String> = (1..=12).map(|n| format!("{n}. Question {n}?")).collect();
    let answers: Vec<String> = (1..=12)
        .map(|n| {
            if n == 2 {
                format!("{n}. Insufficient")
            } else {
                format!("{n}. Answer {n}")
            }
        })
        .collect();
    let id = quiz_ready(&svc, &generator, &questions.join("\n"), &answers.join("\n")).await;

    let session = svc.session(id).await.unwrap();
    assert_eq!(session.quiz().len(), 10);
    assert_eq!(session.quiz()[1].question(), "Question 3?");
    assert!(
        session
            .quiz()
            .iter()
            .all(|pair| !pair.answer().eq_ignore_ascii_case("insufficient"))
    );
}

#[tokio::test]
async fn blank_answers_change_nothing() {
    let generator = ScriptedGenerator::new();
    let svc = loop_service(&generator);
    let id = quiz_ready(&svc, &generator, "1. Q?", "1. A").await;
    let before = svc.session(id).await.unwrap();

    for blank in ["", "   ", "\n\t"] {
        assert_eq!(
            svc.submit_answer(id, blank).await.unwrap(),
            SubmitOutcome::BlankAnswer
        );
    }
    assert_eq!(svc.session(id).await.unwrap(), before);
    assert_eq!(generator.calls(), 3);
}

#[tokio::test]
async fn hints_are_limited_per_question() {
    let generator = ScriptedGenerator::new().with_fallback("a hint");
    let svc = loop_service(&generator);
    let id = quiz_ready(&svc, &generator, "1. Q1?\n2. Q2?", "1. A1\n2. A2").await;

    for _ in 0..3 {
        assert!(matches!(
            svc.request_hint(id).await.unwrap(),
            HintOutcome::Hint { .. }
        ));
    }
    let calls = generator.calls();
    assert_eq!(svc.request_hint(id).await.unwrap(), HintOutcome::LimitReached);
    assert_eq!(generator.calls(), calls);

    // the next question has a fresh budget
    svc.submit_answer(id, "A1").await.unwrap();
    svc.next_question(id).await.unwrap();
    match svc.request_hint(id).await.unwrap() {
        HintOutcome::Hint { number, remaining, .. } => {
            assert_eq!(number, 1);
            assert_eq!(remaining, 2);
        }
        HintOutcome::LimitReached => panic!("second question should allow hints"),
    }
}

#[tokio::test]
async fn restart_returns_home_with_defaults() {
    let generator = ScriptedGenerator::new();
    let svc = loop_service(&generator);
    let id = quiz_ready(&svc, &generator, "1. Q?", "1. A").await;

    assert!(svc.restart(id).await.is_err());
    generator.push_reply("INCORRECT");
    svc.submit_answer(id, "B").await.unwrap();
    svc.next_question(id).await.unwrap();
    svc.restart(id).await.unwrap();

    let session = svc.session(id).await.unwrap();
    assert_eq!(session.page(), Page::Home);
    assert_eq!(session.grade(), DifficultyGrade::default());
    assert!(session.quiz().is_empty());
    assert_eq!(session.lesson(), "");
    assert_eq!(svc.screen(id).await.unwrap(), SessionScreen::Home);
}
