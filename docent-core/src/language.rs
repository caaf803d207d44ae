//! Answer language handling.
//!
//! The service is bilingual (Italian primary, English secondary). All
//! language-dependent fixed strings live here in one table per language so
//! no other crate string-matches on a language tag.

use serde::{Deserialize, Serialize};

/// Supported answer languages. Italian is the primary language and the
/// detection fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Italian,
    English,
}

/// Fixed strings for one language.
struct LanguagePack {
    tag: &'static str,
    /// Exact refusal string the generator must emit when the room text does
    /// not support an answer.
    refusal: &'static str,
    /// Contact/referral suffix appended after a refusal.
    contact_suffix: &'static str,
    /// Terminal response for an empty question.
    empty_question: &'static str,
    /// Terminal response when no room can be determined.
    unresolved_room: &'static str,
}

const ITALIAN: LanguagePack = LanguagePack {
    tag: "it",
    refusal: "Non lo so, puoi mandare un email a museo@gentidabruzzo.it per informazioni",
    contact_suffix: " Per queste informazioni chiedi al personale oppure contatta il museo al \
         +39 085 451 0026 o via email a museo@gentidabruzzo.it, oppure consulta il sito ufficiale.",
    empty_question: "Domanda vuota.",
    unresolved_room: "Non lo so. Non riesco a capire a quale sala si riferisce la domanda.",
};

const ENGLISH: LanguagePack = LanguagePack {
    tag: "en",
    refusal: "I don't quite know how to answer this question. For more info, please check \
         the website or email a member of staff at museo@gentidabruzzo.it",
    contact_suffix: " For this information, please ask a member of staff or contact the museum at \
         +39 085 451 0026 or museo@gentidabruzzo.it, or check the official website.",
    empty_question: "Empty question.",
    unresolved_room: "I don't know. I couldn't determine which room this question refers to.",
};

impl Language {
    fn pack(self) -> &'static LanguagePack {
        match self {
            Language::Italian => &ITALIAN,
            Language::English => &ENGLISH,
        }
    }

    /// Short language tag used on the wire ("it" / "en").
    pub fn tag(self) -> &'static str {
        self.pack().tag
    }

    /// Parse a caller-supplied tag. Accepts anything starting with a known
    /// tag ("en-GB", "it-IT", ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_lowercase();
        if tag.starts_with("it") {
            Some(Language::Italian)
        } else if tag.starts_with("en") {
            Some(Language::English)
        } else {
            None
        }
    }

    pub fn refusal(self) -> &'static str {
        self.pack().refusal
    }

    pub fn contact_suffix(self) -> &'static str {
        self.pack().contact_suffix
    }

    pub fn empty_question_message(self) -> &'static str {
        self.pack().empty_question
    }

    pub fn unresolved_room_message(self) -> &'static str {
        self.pack().unresolved_room
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Italian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        assert_eq!(Language::from_tag("it"), Some(Language::Italian));
        assert_eq!(Language::from_tag("en-GB"), Some(Language::English));
        assert_eq!(Language::from_tag("IT-it"), Some(Language::Italian));
        assert_eq!(Language::from_tag("de"), None);
    }

    #[test]
    fn refusal_strings_are_distinct_per_language() {
        assert_ne!(Language::Italian.refusal(), Language::English.refusal());
        assert!(Language::Italian.refusal().contains("museo@gentidabruzzo.it"));
        assert!(Language::English.refusal().contains("museo@gentidabruzzo.it"));
    }
}
