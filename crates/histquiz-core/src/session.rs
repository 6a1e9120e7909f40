//! Quiz session state machine.
//!
//! A `QuizSession` owns every piece of mutable quiz state for one lesson
//! viewing session: one answer slot per question, explanation visibility,
//! and the running score. The session is created fresh when a lesson is
//! opened and discarded when the user leaves it; nothing persists.

use crate::model::Question;

/// Answer state for a single question.
///
/// A question transitions `Unanswered` → `Answered` exactly once. The
/// selection is never overwritten; re-answering is ignored, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Answered { selected: usize },
}

impl AnswerState {
    /// Returns `true` once a selection has been recorded.
    pub fn is_answered(&self) -> bool {
        matches!(self, AnswerState::Answered { .. })
    }
}

/// What an `answer` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// First selection for this question; state advanced.
    Recorded { correct: bool, points_awarded: u32 },
    /// The question already had an answer; nothing changed.
    AlreadyAnswered,
}

/// How a single option should be rendered, given its question's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAppearance {
    /// Question unanswered: neutral and selectable.
    Neutral,
    /// The user's pick, and it was right.
    SelectedCorrect,
    /// The user's pick, and it was wrong.
    SelectedIncorrect,
    /// The correct option, shown once any answer has been given.
    RevealedCorrect,
    /// Every other option of an answered question.
    Dimmed,
}

/// Mutable state for one quiz session over a fixed question list.
///
/// Per-question transitions are independent: answering one question never
/// touches another's state. Indices are the stable question positions
/// within the lesson.
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<AnswerState>,
    score: u32,
}

impl QuizSession {
    /// Start a fresh session: every question unanswered, score zero.
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![AnswerState::Unanswered; questions.len()];
        Self {
            questions,
            answers,
            score: 0,
        }
    }

    /// Record the first selection for a question.
    ///
    /// The first call for `question` stores the selection, reveals the
    /// explanation for the rest of the session, and awards the question's
    /// points when the selection matches the correct index. Later calls
    /// for the same question change nothing. Indices out of range are a
    /// caller bug, not a handled condition.
    pub fn answer(&mut self, question: usize, option: usize) -> SelectionOutcome {
        if self.answers[question].is_answered() {
            return SelectionOutcome::AlreadyAnswered;
        }

        self.answers[question] = AnswerState::Answered { selected: option };

        let q = &self.questions[question];
        let correct = option == q.correct_option_index;
        let points_awarded = if correct { q.points } else { 0 };
        self.score += points_awarded;

        SelectionOutcome::Recorded {
            correct,
            points_awarded,
        }
    }

    /// The questions this session runs over.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Answer state of one question.
    pub fn state(&self, question: usize) -> AnswerState {
        self.answers[question]
    }

    /// Whether a question's explanation is visible. Flips to `true` with
    /// the first answer and stays there.
    pub fn explanation_visible(&self, question: usize) -> bool {
        self.answers[question].is_answered()
    }

    /// Running score: the sum of points over correctly answered questions.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions answered so far.
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }

    /// Total number of questions in the session.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Whether every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.total()
    }

    /// Rendering rule for one option of one question.
    ///
    /// Unanswered questions render every option neutral. Once answered,
    /// the pick is marked correct or incorrect, the correct option is
    /// always revealed, and the rest are dimmed.
    pub fn option_appearance(&self, question: usize, option: usize) -> OptionAppearance {
        let q = &self.questions[question];
        match self.answers[question] {
            AnswerState::Unanswered => OptionAppearance::Neutral,
            AnswerState::Answered { selected } => {
                if option == selected {
                    if selected == q.correct_option_index {
                        OptionAppearance::SelectedCorrect
                    } else {
                        OptionAppearance::SelectedIncorrect
                    }
                } else if option == q.correct_option_index {
                    OptionAppearance::RevealedCorrect
                } else {
                    OptionAppearance::Dimmed
                }
            }
        }
    }
}
