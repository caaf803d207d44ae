//! The synthetic museum-info room.
//!
//! Not derived from the corpus: fixed operational content (hours, tickets,
//! contacts, directions) in both languages. This room always exists, so the
//! service can answer logistics questions even with an empty corpus.

/// Reserved identifier of the synthetic room.
pub const INFO_ROOM_ID: &str = "GDA-Info-Museo";

pub const INFO_HEADING: &str = "Informazioni Museo / Museum info";

pub const INFO_TEXT_IT: &str = "\
Museo delle Genti d'Abruzzo – Informazioni per la visita

INDIRIZZO E CONTATTI
- Museo delle Genti d'Abruzzo, Via delle Caserme 24, 65127 Pescara (PE), Italia
- Telefono centralino: +39 085 451 0026
- Email generale: museo@gentidabruzzo.it
- Email didattica / scuole: didattica@gentidabruzzo.it

ORARI DI APERTURA (dal 22/09/2025)
- Lunedì–Venerdì: 09:00–13:00
- Sabato–Domenica: 16:00–20:00
- Chiusure: 1 gennaio, Pasqua, 1 novembre, 25 e 26 dicembre.
(L'orario può variare: controlla sempre il sito ufficiale.)

MUSEO BASILIO CASCELLA (stessa fondazione)
- Lunedì–Giovedì: 09:00–13:00 (solo su prenotazione entro 3 giorni)
- Venerdì: 09:00–13:00; Sabato–Domenica: 16:00–20:00
- Prenotazioni: +39 085 451 0026 int. 1 – museo@gentidabruzzo.it / info@museocascella.it

ORARI BIBLIOTECA
- Lunedì: 09:00–13:00 e 15:30–18:30; Martedì: 09:00–13:00
- Mercoledì: 15:30–18:30; Giovedì: 15:30–20:30 (dalle 18:30 solo sala lettura)
- Venerdì: 09:00–13:00
- Info e prenotazioni: tel. +39 085 451 1562 (int. 5) – biblioteca@gentidabruzzo.it

BIGLIETTI – MUSEO DELLE GENTI D'ABRUZZO
- Intero adulti: 8 €
- Ridotto over 65: 5 €
- Ridotto under 18: 5 €

BIGLIETTO CUMULATIVO (Genti d'Abruzzo + Museo Civico \"B. Cascella\")
- Intero adulti: 12 €
- Ridotto (under 18 e over 65): 8 €

INGRESSO GRATUITO
- Bambini fino a 3 anni, persone con disabilità, soci ASTRA, Archeoclub e ICOM,
  donatori AVIS e FIDAS (mostra permanente sul Risorgimento in Abruzzo).

RIDUZIONI
- Convenzioni (Abruzzo B&B, FAI, Questura di Pescara, Amministrazione Penitenziaria),
  studenti universitari, soci VIVIPARCHI, gruppi di almeno 15 persone,
  soci Touring Club (sconto 50%), Card Consorzio Turistico Montesilvano.

COME ARRIVARE
- Indirizzo: Via delle Caserme 24, Pescara.
- Autobus urbani: linee 3, 10, 21, 38 (fermate in zona Porta Nuova).
- Treno: stazione Pescara Porta Nuova a breve distanza.
- Auto: parcheggio nei pressi del museo; monopattini in sharing nella zona.

SERVIZI AL PUBBLICO
- Ristorante / Caffè Letterario: pranzi, cene, catering, banchetti.
- Biblioteca: consultazione aperta a tutti su prenotazione.
- Negozio / bookshop: aperto negli orari del museo; pubblicazioni, libri per
  bambini, cartoline, gadget, giochi, cancelleria.
- Visite guidate per gruppi su prenotazione.
- Si possono fare foto e video nel museo.

NOTE
- Tariffe, orari e convenzioni possono subire modifiche: fai sempre riferimento
  alle informazioni pubblicate sul sito ufficiale del museo.";

pub const INFO_TEXT_EN: &str = "\
Genti d'Abruzzo Museum – Visitor information

ADDRESS AND CONTACTS
- Genti d'Abruzzo Museum, Via delle Caserme 24, 65127 Pescara (PE), Italy
- Main phone: +39 085 451 0026
- General email: museo@gentidabruzzo.it
- Education / schools: didattica@gentidabruzzo.it

OPENING HOURS (from 22 Sept 2025)
- Monday–Friday: 09:00–13:00
- Saturday–Sunday: 16:00–20:00
- Closed on: 1 January, Easter Sunday, 1 November, 25 and 26 December.
(Times may change; always check the official website before your visit.)

BASILIO CASCELLA MUSEUM (same foundation)
- Monday–Thursday: 09:00–13:00 (only by reservation at least 3 days in advance)
- Friday: 09:00–13:00; Saturday–Sunday: 16:00–20:00
- Bookings: +39 085 451 0026 ext. 1 – museo@gentidabruzzo.it / info@museocascella.it

LIBRARY HOURS
- Monday: 09:00–13:00 and 15:30–18:30; Tuesday: 09:00–13:00
- Wednesday: 15:30–18:30; Thursday: 15:30–20:30 (reading room only after 18:30)
- Friday: 09:00–13:00
- Info and bookings: +39 085 451 1562 (ext. 5) – biblioteca@gentidabruzzo.it

TICKETS – GENTI D'ABRUZZO MUSEUM
- Adult: 8 €
- Reduced 65+: 5 €
- Reduced under 18: 5 €

COMBINED TICKET (Genti d'Abruzzo + \"B. Cascella\" Civic Museum)
- Adult: 12 €
- Reduced (under 18 and over 65): 8 €

FREE ADMISSION
- Children up to 3 years, visitors with disabilities, members of ASTRA,
  Archeoclub and ICOM, AVIS and FIDAS blood donors (permanent exhibition on
  the Risorgimento in Abruzzo).

DISCOUNTS
- Partner rates (Abruzzo B&B, FAI, Pescara Police HQ, Prison Administration),
  university students, VIVIPARCHI members, groups of at least 15 people,
  Touring Club members (50% discount), Consorzio Turistico Montesilvano card.

HOW TO GET THERE
- Address: Via delle Caserme 24, Pescara.
- City buses: lines 3, 10, 21, 38 (stops around Porta Nuova).
- Train: Pescara Porta Nuova station within walking distance.
- Car: parking in the streets near the museum; shared e-scooters in the area.

VISITOR SERVICES
- Restaurant / Literary Café: lunches, dinners, catering and banquets.
- Library: open to the public by reservation.
- Shop / bookshop: open during museum hours; museum publications, children's
  books, postcards, gadgets, stationery, board games.
- Guided tours for groups available on reservation.
- Photos and videos are allowed in the museum.

NOTES
- Opening hours, prices and discounts can change; rely on the latest
  information published on the museum's official website.";

/// Bilingual descriptor shown to the room classifier.
pub const INFO_DESCRIPTOR: &str = "\
Sala dedicata alle informazioni pratiche sul Museo delle Genti d'Abruzzo e sul \
Museo Basilio Cascella: orari di apertura, prezzi dei biglietti, riduzioni e \
ingressi gratuiti, come arrivare, contatti, orari della biblioteca e del \
bookshop, servizi al pubblico e note su mostre ed eventi. \
Room dedicated to practical information about the Genti d'Abruzzo Museum and \
the Basilio Cascella Museum: opening hours, ticket prices, discounts and free \
admission, how to get there, contact details, library and bookshop hours, \
visitor services, and notes on exhibitions and events.";
