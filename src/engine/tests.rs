use super::*;
use crate::question::Difficulty;

fn chunker() -> ExamChunker {
    ExamChunker::new(ChunkerConfig::default())
}

const MIXED_DOC: &str = "1. What is TCP? ①UDP ②TCP ③IP ④HTTP 정답: ② 해설: TCP is reliable. \
                         2. Name a DB. 1)MySQL 2)Postgres 정답: 1";

#[test]
fn test_two_record_mixed_convention_document() {
    let outcome = chunker().chunk(MIXED_DOC);
    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.questions.len(), 2);

    let first = &outcome.questions[0];
    assert_eq!(first.question_number, 1);
    assert_eq!(first.question_text, "What is TCP?");
    assert_eq!(first.options, vec!["UDP", "TCP", "IP", "HTTP"]);
    assert_eq!(first.answer.as_deref(), Some("②"));
    assert_eq!(first.explanation.as_deref(), Some("TCP is reliable."));
    assert_eq!(first.category, "네트워크");
    assert_eq!(first.difficulty, Difficulty::Low);

    let second = &outcome.questions[1];
    assert_eq!(second.question_number, 2);
    assert_eq!(second.question_text, "Name a DB.");
    assert_eq!(second.options, vec!["MySQL", "Postgres"]);
    assert_eq!(second.answer.as_deref(), Some("1"));
    assert_eq!(second.category, "데이터베이스");
}

#[test]
fn test_one_record_per_boundary_in_document_order() {
    let text = "1. 첫째 ①a ②b 2. 둘째 ①c ②d 3. 셋째 ①e ②f";
    let outcome = chunker().chunk(text);
    assert!(outcome.skipped.is_empty());
    let numbers: Vec<u32> = outcome.questions.iter().map(|q| q.question_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_empty_input_yields_empty_outcome() {
    let outcome = chunker().chunk("");
    assert!(outcome.questions.is_empty());
    assert!(outcome.skipped.is_empty());

    let outcome = chunker().chunk("   \n\t  ");
    assert!(outcome.questions.is_empty());
    assert!(outcome.skipped.is_empty());
}

#[test]
fn test_rerun_is_byte_identical() {
    let engine = chunker();
    let first = engine.chunk(MIXED_DOC);
    let second = engine.chunk(MIXED_DOC);
    assert_eq!(first.questions, second.questions);
}

#[test]
fn test_no_convention_below_evidence_threshold() {
    // A single digit-paren occurrence is not enough evidence.
    let outcome = chunker().chunk("1. 하나를 고르면 1)뿐");
    assert_eq!(outcome.questions.len(), 1);
    assert!(outcome.questions[0].options.is_empty());
}

#[test]
fn test_five_options_rate_high_without_keywords() {
    let outcome = chunker().chunk("1. 다음 중 옳은 것은? ①a ②b ③c ④d ⑤e");
    assert_eq!(outcome.questions.len(), 1);
    let question = &outcome.questions[0];
    assert_eq!(question.options.len(), 5);
    assert_eq!(question.difficulty, Difficulty::High);
}

#[test]
fn test_complexity_keyword_rates_medium() {
    let outcome = chunker().chunk("1. 스택 구현 방식은? ①배열 ②연결리스트");
    assert_eq!(outcome.questions[0].difficulty, Difficulty::Medium);
}

#[test]
fn test_category_table_order_breaks_ties() {
    // Stem carries both a database trigger (SQL) and a security trigger
    // (보안); the database rule is declared earlier.
    let outcome = chunker().chunk("1. SQL 주입은 보안 위협인가? ①예 ②아니오");
    assert_eq!(outcome.questions[0].category, "데이터베이스");
}

#[test]
fn test_malformed_block_is_isolated() {
    let text = "1. 가 ①a ②b 99999999999999999999. 나 ①c ②d 3. 다 ①e ②f \
                4. 라 ①g ②h 5. 마 ①i ②j";
    let outcome = chunker().chunk(text);
    let numbers: Vec<u32> = outcome.questions.iter().map(|q| q.question_number).collect();
    assert_eq!(numbers, vec![1, 3, 4, 5]);
    assert_eq!(outcome.skipped.len(), 1);
    assert!(matches!(outcome.skipped[0], BlockSkip::BadNumber { .. }));
}

#[test]
fn test_preamble_and_artifacts_are_stripped() {
    let text = "제12회 정보처리기사 기출문제\n안내: 모든 문항에 답하시오\n\
                1. 라우터의 역할은? ①경로 설정 ②암호화\n페이지 1";
    let outcome = chunker().chunk(text);
    assert_eq!(outcome.questions.len(), 1);
    let question = &outcome.questions[0];
    assert_eq!(question.question_number, 1);
    assert_eq!(question.question_text, "라우터의 역할은?");
    assert!(!question.options.iter().any(|o| o.contains("페이지")));
}

#[test]
fn test_keep_line_breaks_restores_first_line_stems() {
    let config = ChunkerConfig {
        keep_line_breaks: true,
        ..ChunkerConfig::default()
    };
    let engine = ExamChunker::new(config);

    let text = "1. 프로세스와 스레드의 차이는?\n①주소 공간 ②명령어 집합\n2. 다음은?\n①가 ②나";
    let outcome = engine.chunk(text);
    assert_eq!(outcome.questions.len(), 2);
    assert_eq!(outcome.questions[0].question_text, "프로세스와 스레드의 차이는?");
    assert_eq!(outcome.questions[0].options, vec!["주소 공간", "명령어 집합"]);
    assert_eq!(outcome.questions[1].question_text, "다음은?");
}

#[test]
fn test_trailing_boundary_emits_degenerate_record() {
    let outcome = chunker().chunk("1. 본문 ①a ②b 2.");
    assert_eq!(outcome.questions.len(), 2);
    let last = &outcome.questions[1];
    assert_eq!(last.question_number, 2);
    assert_eq!(last.question_text, "");
    assert!(last.options.is_empty());
    assert_eq!(last.category, FALLBACK_CATEGORY);
}
