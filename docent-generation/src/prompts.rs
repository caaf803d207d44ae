//! Prompt construction for grounded generation.
//!
//! The grounding contract lives entirely in these strings: answer only from
//! the supplied room text, reply in the target language, at most three
//! short sentences, and emit the exact refusal string when the text does
//! not support an answer.

use docent_core::Language;

/// System instruction binding the model to the room text.
pub fn system_prompt(lang: Language) -> String {
    let refusal = lang.refusal();
    match lang {
        Language::English => format!(
            "You are a museum guide at the Genti d'Abruzzo museum.\n\
             You will receive the full official text for one room (the room context) and a visitor question.\n\
             Use ONLY the information in the room context to answer the question.\n\
             If the room context really does not contain the answer, reply exactly: {refusal}\n\
             Always answer in ENGLISH, in at most 3 short sentences."
        ),
        Language::Italian => format!(
            "Sei una guida del Museo delle Genti d'Abruzzo.\n\
             Riceverai il testo ufficiale di una sala (contesto della sala) e una domanda del visitatore.\n\
             Usa SOLO le informazioni presenti nel contesto della sala per rispondere.\n\
             Se il contesto davvero non contiene la risposta, rispondi esattamente: {refusal}\n\
             Rispondi sempre in ITALIANO, in massimo 3 frasi brevi."
        ),
    }
}

/// User message: room context, optional history block (labeled as
/// non-authoritative), the question, and the closing constraints.
pub fn user_message(
    context: &str,
    history_block: Option<&str>,
    question: &str,
    lang: Language,
) -> String {
    let mut parts: Vec<String> = vec!["Room context:".to_string(), context.to_string(), String::new()];

    if let Some(block) = history_block.filter(|b| !b.is_empty()) {
        parts.push(
            "Recent visitor questions (for pronouns/topic only; do NOT contradict or extend the room context):"
                .to_string(),
        );
        parts.push(block.to_string());
        parts.push(String::new());
    }

    let closing = match lang {
        Language::English => {
            "Answer in ENGLISH ONLY in 2-3 short sentences, quoting the key facts \
             (names, numbers, dates) from the room context. Do NOT reply in Italian. \
             Do not add any facts."
        }
        Language::Italian => {
            "Rispondi SOLO IN ITALIANO in 2-3 frasi brevi, riportando i fatti principali \
             (nomi, numeri, date) dal testo di contesto. Non rispondere in inglese. \
             Non aggiungere fatti."
        }
    };

    parts.push("New question:".to_string());
    parts.push(question.to_string());
    parts.push(String::new());
    parts.push(closing.to_string());

    parts.join("\n")
}

/// System + user prompts for the critic pass: audit the candidate against
/// the room context, rewrite or replace with the refusal string.
pub fn critic_prompts(
    context: &str,
    question: &str,
    candidate: &str,
    lang: Language,
) -> (String, String) {
    let refusal = lang.refusal();
    match lang {
        Language::English => (
            "You are a strict fact-checker for a museum guide.\n\
             You receive a room context (official museum text), a visitor question and a candidate answer.\n\
             Your job is to ensure the final answer is fully supported by the room context."
                .to_string(),
            format!(
                "Room context:\n{context}\n\n\
                 Visitor question:\n{question}\n\n\
                 Candidate answer from the guide:\n{candidate}\n\n\
                 Tasks:\n\
                 1. Check whether the candidate answer is fully supported by the room context. \
                 If any part is not stated or directly implied, consider it unsupported.\n\
                 2. If the candidate is fully supported but could be clearer or slightly more detailed, \
                 rewrite it using only information from the room context.\n\
                 3. If the candidate includes unsupported information, ignore it and answer again from scratch \
                 using only the room context. If the context does not contain the answer, say exactly: {refusal}\n\n\
                 Return only the final answer, not your reasoning."
            ),
        ),
        Language::Italian => (
            "Sei un rigoroso verificatore di fatti per una guida museale.\n\
             Ricevi un testo di contesto della sala, una domanda del visitatore e una risposta candidata.\n\
             Il tuo compito è assicurarti che la risposta finale sia completamente supportata dal contesto."
                .to_string(),
            format!(
                "Testo di contesto della sala:\n{context}\n\n\
                 Domanda del visitatore:\n{question}\n\n\
                 Risposta candidata della guida:\n{candidate}\n\n\
                 Compiti:\n\
                 1. Verifica se la risposta candidata è pienamente supportata dal testo di contesto. \
                 Se qualche parte non è affermata o chiaramente implicata, considerala non supportata.\n\
                 2. Se la risposta è supportata ma può essere più chiara o leggermente più dettagliata, \
                 riscrivila usando solo informazioni presenti nel testo di contesto.\n\
                 3. Se la risposta contiene informazioni non supportate, ignorale e rispondi da zero usando solo il testo. \
                 Se il contesto non contiene la risposta, dì esattamente: {refusal}\n\n\
                 Restituisci solo la risposta finale, non il ragionamento."
            ),
        ),
    }
}
