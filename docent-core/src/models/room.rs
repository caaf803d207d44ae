use crate::language::Language;

/// One room of the museum: a bounded knowledge scope with its own grounding
/// text. Built once at startup, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Room {
    pub room_id: String,
    pub heading: String,
    /// Canonical source URL; empty for the synthetic info room.
    pub url: String,
    /// Aggregated Italian text.
    pub text_it: String,
    /// Aggregated English text; may be empty for corpus rooms.
    pub text_en: String,
    /// Short descriptor presented to the room classifier.
    pub descriptor: String,
}

impl Room {
    /// Grounding text for the given language. English answers use the
    /// curated English text when present, Italian text otherwise.
    pub fn context_text(&self, lang: Language) -> &str {
        match lang {
            Language::English if !self.text_en.is_empty() => &self.text_en,
            _ => &self.text_it,
        }
    }

    /// Text embedded for room selection: heading plus the best available
    /// room text (English preferred, as the encoder is multilingual).
    pub fn embedding_text(&self, max_chars: usize) -> String {
        let body = if self.text_en.is_empty() {
            &self.text_it
        } else {
            &self.text_en
        };
        let base = format!("{}\n{}", self.heading, body);
        truncate_chars(&base, max_chars)
    }
}

/// Truncate to at most `max_chars` characters, keeping the start.
/// Char-based so multibyte text never splits inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room {
            room_id: "GDA-Sala-1".to_string(),
            heading: "Prehistory".to_string(),
            url: String::new(),
            text_it: "testo italiano".to_string(),
            text_en: String::new(),
            descriptor: String::new(),
        }
    }

    #[test]
    fn english_context_falls_back_to_italian() {
        let r = room();
        assert_eq!(r.context_text(Language::English), "testo italiano");
        let mut r = room();
        r.text_en = "english text".to_string();
        assert_eq!(r.context_text(Language::English), "english text");
        assert_eq!(r.context_text(Language::Italian), "testo italiano");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("perché", 5), "perch");
        assert_eq!(truncate_chars("ab", 5), "ab");
    }
}
