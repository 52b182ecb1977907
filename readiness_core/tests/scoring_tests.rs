//! Integration tests for overall, pillar and gap scoring.

use readiness_core::*;

fn questions(n: usize) -> Vec<Question> {
    (1..=n)
        .map(|i| Question::new(format!("q{}", i), format!("Statement {}", i)))
        .collect()
}

fn responses(pairs: &[(&str, Likert)]) -> Responses {
    pairs.iter().map(|(id, v)| (*id, *v)).collect()
}

#[test]
fn test_forty_questions_first_pillar_answered() {
    let qs = questions(40);
    let answers = responses(&[
        ("q1", Likert::StronglyAgree),
        ("q2", Likert::StronglyAgree),
        ("q3", Likert::StronglyAgree),
        ("q4", Likert::StronglyAgree),
        ("q5", Likert::StronglyAgree),
    ]);

    let pillars = compute_pillar_scores(&qs, &answers, &DEFAULT_PILLARS);
    let values: Vec<u8> = pillars.iter().map(|p| p.score).collect();
    assert_eq!(values, vec![100, 0, 0, 0, 0, 0, 0, 0]);

    // only answered questions count towards the overall score
    assert_eq!(compute_overall_score(&answers), 100);
}

#[test]
fn test_pillar_count_is_always_eight() {
    for n in [0, 1, 7, 8, 9, 23, 40, 41, 64, 100] {
        let qs = questions(n);
        let all_neutral: Responses = qs.iter().map(|q| (q.id.clone(), Likert::Neutral)).collect();
        let pillars = compute_pillar_scores(&qs, &all_neutral, &DEFAULT_PILLARS);
        assert_eq!(pillars.len(), 8, "n = {}", n);

        let covered: usize = pillars.iter().map(|p| p.total).sum();
        assert_eq!(covered, n);
    }
}

#[test]
fn test_every_score_in_range() {
    let qs = questions(24);
    let levels = [
        Likert::StronglyDisagree,
        Likert::Disagree,
        Likert::Neutral,
        Likert::Agree,
        Likert::StronglyAgree,
    ];
    let answers: Responses = qs
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 != 0)
        .map(|(i, q)| (q.id.clone(), levels[i % 5]))
        .collect();

    let overall = compute_overall_score(&answers);
    assert!((20..=100).contains(&overall));

    for pillar in compute_pillar_scores(&qs, &answers, &DEFAULT_PILLARS) {
        assert!(pillar.score <= 100);
        if pillar.answered == 0 {
            assert_eq!(pillar.score, 0);
        } else {
            assert!(pillar.score >= 20);
        }
    }
}

#[test]
fn test_gap_analysis_from_pillar_scores() {
    // 8 questions, one per pillar
    let qs = questions(8);
    let answers = responses(&[
        ("q1", Likert::StronglyAgree),    // 100 -> no gap
        ("q2", Likert::Agree),            // 80 -> no gap
        ("q3", Likert::Neutral),          // 60 -> 20 High
        ("q4", Likert::Disagree),         // 40 -> 40 Critical
        ("q5", Likert::StronglyDisagree), // 20 -> 60 Critical
    ]);
    // q6..q8 unanswered -> 0 -> 80 Critical

    let pillars = compute_pillar_scores(&qs, &answers, &DEFAULT_PILLARS);
    let gaps = compute_gap_analysis(&pillars, BEST_PRACTICE_BENCHMARK);

    let summary: Vec<(&str, u8, GapSeverity)> =
        gaps.iter().map(|g| (g.pillar.as_str(), g.gap, g.severity)).collect();
    assert_eq!(
        summary,
        vec![
            ("Capability", 80, GapSeverity::Critical),
            ("Governance", 80, GapSeverity::Critical),
            ("Performance", 80, GapSeverity::Critical),
            ("Culture", 60, GapSeverity::Critical),
            ("Ethics", 40, GapSeverity::Critical),
            ("Foundation", 20, GapSeverity::High),
        ]
    );
}

#[test]
fn test_no_gaps_when_everything_meets_benchmark() {
    let qs = questions(16);
    let answers: Responses = qs.iter().map(|q| (q.id.clone(), Likert::Agree)).collect();
    let pillars = compute_pillar_scores(&qs, &answers, &DEFAULT_PILLARS);
    assert!(pillars.iter().all(|p| p.score == 80));
    assert!(compute_gap_analysis(&pillars, BEST_PRACTICE_BENCHMARK).is_empty());
}

#[test]
fn test_live_score_equals_overall_throughout() {
    let qs = questions(12);
    let mut live = LiveScore::new();
    let levels = [Likert::Agree, Likert::Disagree, Likert::StronglyAgree];

    for (i, q) in qs.iter().enumerate() {
        let score = live.set(q.id.clone(), levels[i % 3]);
        assert_eq!(score, live_score(live.responses()));
        assert_eq!(score, compute_overall_score(live.responses()));
    }
}

#[test]
fn test_custom_pillar_set() {
    let qs = questions(9);
    let answers = responses(&[("q9", Likert::StronglyAgree)]);
    let pillars = compute_pillar_scores(&qs, &answers, &["People", "Process", "Technology"]);
    assert_eq!(pillars.len(), 3);
    assert_eq!(pillars[2].pillar_name, "Technology");
    assert_eq!(pillars[2].score, 100);
}
