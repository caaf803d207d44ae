//! Operational-question routing.
//!
//! A fixed bilingual pattern catches hours/prices/tickets/parking/
//! directions/contacts/shop/library/photography questions. Matches are
//! force-routed to the synthetic info room, bypassing both the classifier
//! and any caller-supplied room pin.

use once_cell::sync::Lazy;
use regex::Regex;

static OFFTOPIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:orari?|apertur[ae]|chiusur[ae]|prezz[oi]|costi?|bigliett[io]|ticket|parchegg|come\s+arrivare|indirizz|telefono|email|contatti?|prenotaz|booking|shop|negozio|caff[eè]|bar|ristorante|toilett|bagni|opening\s+hours?|opening\s+times?|closing\s+time|schedule|timetable|admission|entrance|entry|price|prices|cost|costs|fee|fees|library|biblioteca|bookshop|book\s*store|foto|fotograf|photo|pictures?|selfie|video|filmare|riprendere|camera)\b",
    )
    .expect("off-topic pattern is valid")
});

/// True when the question is about museum logistics rather than exhibits.
pub fn is_operational_query(question: &str) -> bool {
    OFFTOPIC_RE.is_match(question)
}
