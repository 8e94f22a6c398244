use std::collections::VecDeque;

use crate::error::{AutomatorError, Result};
use crate::ui::Confirm;

/// Prompt that answers from a fixed script, for testing without a terminal
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    fallback: Option<bool>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Answer the questions in order with `answers`.
    ///
    /// Running out of answers is an error unless a fallback is set.
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        ScriptedPrompt {
            answers: answers.into_iter().collect(),
            fallback: None,
            asked: Vec::new(),
        }
    }

    /// Answer every question with `answer`.
    pub fn always(answer: bool) -> Self {
        ScriptedPrompt::new([]).then_always(answer)
    }

    /// Once the script is exhausted, answer with `answer`.
    pub fn then_always(mut self, answer: bool) -> Self {
        self.fallback = Some(answer);
        self
    }

    /// Every question asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Confirm for ScriptedPrompt {
    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .or(self.fallback)
            .ok_or_else(|| AutomatorError::input(format!("no scripted answer for '{}'", message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_in_order() {
        let mut prompt = ScriptedPrompt::new([true, false]);
        assert!(prompt.confirm("first?", true).unwrap());
        assert!(!prompt.confirm("second?", true).unwrap());
        assert!(prompt.confirm("third?", true).is_err());
        assert_eq!(prompt.asked(), ["first?", "second?", "third?"]);
    }

    #[test]
    fn test_fallback_after_script() {
        let mut prompt = ScriptedPrompt::new([false]).then_always(true);
        assert!(!prompt.confirm("a", true).unwrap());
        assert!(prompt.confirm("b", true).unwrap());
        assert!(prompt.confirm("c", true).unwrap());
    }
}
