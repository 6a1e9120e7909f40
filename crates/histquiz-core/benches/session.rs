use criterion::{black_box, criterion_group, criterion_main, Criterion};

use histquiz_core::model::Question;
use histquiz_core::session::QuizSession;

fn make_questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| Question {
            id: Some(format!("q{i}")),
            text: format!("Question number {i}?"),
            kind: "MULTIPLE_CHOICE".into(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_option_index: i % 4,
            points: 10,
            hint: String::new(),
            explanation: "Because.".into(),
        })
        .collect()
}

fn bench_full_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_session");

    for &count in &[10usize, 100, 1000] {
        let questions = make_questions(count);
        group.bench_function(format!("answer_all_n={count}"), |b| {
            b.iter(|| {
                let mut session = QuizSession::new(questions.clone());
                for i in 0..count {
                    session.answer(black_box(i), black_box(i % 4));
                }
                session.score()
            })
        });
    }

    group.finish();
}

fn bench_appearance(c: &mut Criterion) {
    let questions = make_questions(100);
    let mut session = QuizSession::new(questions);
    for i in 0..100 {
        session.answer(i, (i + 1) % 4);
    }

    c.bench_function("appearance_grid_100x4", |b| {
        b.iter(|| {
            let mut dimmed = 0usize;
            for q in 0..100 {
                for o in 0..4 {
                    if session.option_appearance(black_box(q), black_box(o))
                        == histquiz_core::session::OptionAppearance::Dimmed
                    {
                        dimmed += 1;
                    }
                }
            }
            dimmed
        })
    });
}

criterion_group!(benches, bench_full_session, bench_appearance);
criterion_main!(benches);
