use std::collections::VecDeque;

use crate::Question;

/// Source of yes/no answers for the decision points of a run.
///
/// Implementations may block; a run asks one question at a time.
pub trait Confirmer {
    fn confirm(&mut self, question: &Question) -> bool;
}

/// Answers from a fixed script, recording every question asked.
/// Once the script runs out every answer is "no".
#[derive(Debug, Default, Clone)]
pub struct ScriptedConfirmer {
    answers: VecDeque<bool>,
    asked: Vec<Question>,
}

impl ScriptedConfirmer {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[Question] {
        &self.asked
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, question: &Question) -> bool {
        self.asked.push(question.clone());
        self.answers.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{Confirmer, ScriptedConfirmer};
    use crate::Question;

    #[test]
    fn exhausted_script_answers_no() {
        let mut confirmer = ScriptedConfirmer::new([true]);
        let q = Question::DownloadNew { count: 1 };
        assert!(confirmer.confirm(&q));
        assert!(!confirmer.confirm(&q));
        assert_eq!(confirmer.asked().len(), 2);
    }
}
