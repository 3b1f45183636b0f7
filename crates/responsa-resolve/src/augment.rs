//! Prompt construction for the generative augmenter.
//!
//! The backend is strictly additive polish: it rewrites an already
//! accepted answer grounded on retrieved pairs, and is never a hard
//! dependency for correctness. The prompt pins the model to the
//! supplied context and to a fixed refusal phrase that the engine
//! checks on the way back.

use responsa_core::models::Candidate;

/// Phrase the model is instructed to emit when the context cannot
/// answer the question.
pub const NO_ANSWER_PHRASE: &str = "NO_ANSWER";

/// Build the fixed-structure grounding prompt from the raw user
/// question and up to `max_context` ranked candidates.
pub fn build_prompt(question: &str, context: &[Candidate], max_context: usize) -> String {
    let mut prompt = String::from(
        "You are a FAQ assistant. Answer the user's question using only the \
         reference questions and answers below. Reply in the same language \
         as the references, in one or two sentences. If the references do \
         not contain the answer, reply exactly with ",
    );
    prompt.push_str(NO_ANSWER_PHRASE);
    prompt.push_str(".\n\nReferences:\n");
    for (i, candidate) in context.iter().take(max_context).enumerate() {
        prompt.push_str(&format!(
            "{}. Q: {}\n   A: {}\n",
            i + 1,
            candidate.entry.question,
            candidate.entry.answer
        ));
    }
    prompt.push_str(&format!("\nUser question: {question}\nAnswer:"));
    prompt
}

/// Whether a completion counts as a usable rewrite.
pub fn is_usable(completion: &str) -> bool {
    let trimmed = completion.trim();
    !trimmed.is_empty() && !trimmed.contains(NO_ANSWER_PHRASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use responsa_core::catalog::FaqEntry;

    fn candidate(question: &str, answer: &str) -> Candidate {
        Candidate::unscored(
            FaqEntry {
                question: question.to_string(),
                answer: answer.to_string(),
            },
            true,
            0.8,
        )
    }

    #[test]
    fn prompt_carries_question_and_context() {
        let context = vec![
            candidate("What is margin?", "Borrowed funds."),
            candidate("What is leverage?", "Amplified exposure."),
        ];
        let prompt = build_prompt("how does margin work", &context, 5);
        assert!(prompt.contains("User question: how does margin work"));
        assert!(prompt.contains("1. Q: What is margin?"));
        assert!(prompt.contains("2. Q: What is leverage?"));
        assert!(prompt.contains(NO_ANSWER_PHRASE));
    }

    #[test]
    fn context_is_capped() {
        let context: Vec<Candidate> = (0..8)
            .map(|i| candidate(&format!("question {i}"), "answer"))
            .collect();
        let prompt = build_prompt("anything", &context, 5);
        assert!(prompt.contains("5. Q: question 4"));
        assert!(!prompt.contains("6. Q: question 5"));
    }

    #[test]
    fn refusals_and_blanks_are_unusable() {
        assert!(!is_usable(""));
        assert!(!is_usable("   \n"));
        assert!(!is_usable("NO_ANSWER"));
        assert!(!is_usable("I am sorry: NO_ANSWER."));
        assert!(is_usable("Margin is borrowed money from your broker."));
    }
}
