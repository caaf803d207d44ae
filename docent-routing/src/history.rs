//! History fusion.
//!
//! Caller-supplied history serves two distinct purposes: a selection text
//! used only for room routing, and a history block included in the
//! generation prompt for pronoun resolution. Assistant turns never enter
//! either; only what the visitor actually asked matters for routing.

use docent_core::models::{Role, Turn};

/// The most recent user turns, capped at `max_turns`, in chronological
/// order. Scans backward from the end of the history.
fn recent_user_turns(history: &[Turn], max_turns: usize) -> Vec<&str> {
    let mut turns: Vec<&str> = history
        .iter()
        .rev()
        .filter(|t| t.role == Role::User)
        .map(|t| t.content.trim())
        .filter(|c| !c.is_empty())
        .take(max_turns)
        .collect();
    turns.reverse();
    turns
}

/// Fuse the current question with recent user questions so room selection
/// resolves follow-ups like "and how thick were its walls?".
///
/// Used only for routing, never as answer content.
pub fn build_selection_text(question: &str, history: &[Turn], max_turns: usize) -> String {
    let question = question.trim();
    let prior = recent_user_turns(history, max_turns);
    if prior.is_empty() {
        return question.to_string();
    }
    format!(
        "{question}\n\nPrevious related user questions: {}",
        prior.join(" ")
    )
}

/// Compact `Q:` block of recent user questions for the generation prompt.
///
/// Explicitly context for pronoun/topic resolution, not a factual source.
/// Capped at `max_chars` characters, trimmed from the start so the most
/// recent questions survive.
pub fn build_history_block(history: &[Turn], max_turns: usize, max_chars: usize) -> String {
    let lines: Vec<String> = recent_user_turns(history, max_turns)
        .into_iter()
        .map(|q| format!("Q: {q}"))
        .collect();
    let block = lines.join("\n");

    let total = block.chars().count();
    if total <= max_chars {
        return block;
    }
    block.chars().skip(total - max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docent_core::models::Turn;

    #[test]
    fn bare_question_without_history() {
        assert_eq!(build_selection_text("dove?", &[], 10), "dove?");
        assert_eq!(build_history_block(&[], 10, 100), "");
    }

    #[test]
    fn assistant_turns_are_excluded() {
        let history = vec![
            Turn::user("Cosa sono gli stazzi?"),
            Turn::assistant("Gli stazzi sono recinti mobili."),
        ];
        let text = build_selection_text("How thick were the walls?", &history, 10);
        assert!(text.contains("Cosa sono gli stazzi?"));
        assert!(!text.contains("recinti mobili"));

        let block = build_history_block(&history, 10, 1000);
        assert_eq!(block, "Q: Cosa sono gli stazzi?");
    }

    #[test]
    fn turns_return_to_chronological_order() {
        let history = vec![Turn::user("prima"), Turn::user("seconda"), Turn::user("terza")];
        let text = build_selection_text("quarta", &history, 10);
        assert!(text.ends_with("Previous related user questions: prima seconda terza"));
    }

    #[test]
    fn turn_cap_keeps_most_recent() {
        let history = vec![Turn::user("prima"), Turn::user("seconda"), Turn::user("terza")];
        let text = build_selection_text("quarta", &history, 2);
        assert!(text.contains("seconda terza"));
        assert!(!text.contains("prima"));
    }

    #[test]
    fn char_cap_trims_from_start() {
        let history = vec![Turn::user("aaaa"), Turn::user("bbbb")];
        let block = build_history_block(&history, 10, 8);
        // Full block is "Q: aaaa\nQ: bbbb" (15 chars); the tail survives.
        assert_eq!(block, "\nQ: bbbb");
    }

    #[test]
    fn empty_user_turns_are_skipped() {
        let history = vec![Turn::user("   "), Turn::user("valida")];
        let block = build_history_block(&history, 10, 1000);
        assert_eq!(block, "Q: valida");
    }
}
