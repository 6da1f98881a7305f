//! Compiled-in system-prompt templates, keyed by challenge type.
//!
//! The table is immutable data: a shared persona preamble with explicit
//! interpolation points for the user profile, plus one structural block per
//! challenge type describing the required output shape. Unknown tags get the
//! preamble alone, with no specialization.

use crate::domain::{ChallengeType, UserProfile};
use crate::util::fill_template;

/// Persona preamble shared by every challenge.
/// Profile values are inserted verbatim; no escaping is applied.
const BASE_SYSTEM: &str = "\
Sei il coach AI di LearningBites, esperto di produttività e comunicazione professionale.
Stai aiutando {name}, che lavora come {role}.
La sua sfida attuale è: {current_challenge}.
Rispondi sempre in italiano, con tono pratico, concreto e incoraggiante.
Lavora sul testo che l'utente ti fornisce, senza inventare dati che non ha scritto.";

const EMAIL_STRUCTURE: &str = "\
Struttura la risposta come una email professionale pronta da inviare.
Prima riga: [OGGETTO: oggetto sintetico e specifico].
Poi: saluto appropriato, corpo in 2-3 paragrafi brevi, chiusura con una
richiesta o un prossimo passo chiaro, firma.
Registro cortese e diretto, senza giri di parole.";

const ANALYSIS_STRUCTURE: &str = "\
Struttura la risposta come un'analisi sintetica in tre sezioni:
- 3 insight chiave, uno per riga, ciascuno in una sola frase;
- 2 rischi da tenere d'occhio, con una mitigazione ciascuno;
- 1 prossimo step concreto, realizzabile entro una settimana.
Non aggiungere altre sezioni.";

const BRAINSTORMING_STRUCTURE: &str = "\
Genera una lista numerata di 6 idee distinte tra loro.
Per ogni idea: un titolo di massimo 5 parole e una riga di spiegazione.
Alterna idee prudenti e idee ambiziose; chiudi indicando quale proveresti
per prima e perché.";

const PROBLEM_SOLVING_STRUCTURE: &str = "\
Guida l'utente con un framework in 4 passi:
1) Riformula il problema in una frase;
2) Elenca le 2-3 cause più probabili;
3) Proponi un'opzione di soluzione per ogni causa;
4) Consiglia l'opzione migliore con il primo passo operativo.
Numera i passi esattamente così.";

const PRESENTATION_STRUCTURE: &str = "\
Struttura la risposta come un pitch per una presentazione:
- un'apertura a effetto di una sola frase;
- 3 punti chiave, ognuno con un dato o un esempio;
- una chiusura con invito all'azione.
Indica tra parentesi il tempo suggerito per ogni parte.";

/// Structural block for a known challenge type. Exhaustive on purpose:
/// adding a variant to `ChallengeType` forces a template here.
pub fn structure_block(kind: ChallengeType) -> &'static str {
  match kind {
    ChallengeType::Email => EMAIL_STRUCTURE,
    ChallengeType::Analysis => ANALYSIS_STRUCTURE,
    ChallengeType::Brainstorming => BRAINSTORMING_STRUCTURE,
    ChallengeType::ProblemSolving => PROBLEM_SOLVING_STRUCTURE,
    ChallengeType::Presentation => PRESENTATION_STRUCTURE,
  }
}

/// Build the full system prompt: interpolated preamble, plus the structural
/// block when the challenge type is known. `None` (unrecognized tag) yields
/// the preamble alone.
pub fn system_prompt(kind: Option<ChallengeType>, profile: &UserProfile) -> String {
  let preamble = fill_template(
    BASE_SYSTEM,
    &[
      ("name", &profile.name),
      ("role", &profile.role),
      ("current_challenge", &profile.current_challenge),
    ],
  );
  match kind {
    Some(k) => format!("{}\n\n{}", preamble, structure_block(k)),
    None => preamble,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn profile() -> UserProfile {
    UserProfile {
      name: "Giulia".into(),
      role: "Product Manager".into(),
      current_challenge: "scrivere email più chiare".into(),
    }
  }

  #[test]
  fn each_type_gets_its_structural_instructions() {
    let p = profile();
    let markers: [(ChallengeType, &[&str]); 5] = [
      (ChallengeType::Email, &["[OGGETTO:"]),
      (ChallengeType::Analysis, &["3 insight", "2 rischi", "1 prossimo step"]),
      (ChallengeType::Brainstorming, &["lista numerata", "6 idee"]),
      (ChallengeType::ProblemSolving, &["framework in 4 passi"]),
      (ChallengeType::Presentation, &["pitch", "invito all'azione"]),
    ];
    for (kind, needles) in markers {
      let prompt = system_prompt(Some(kind), &p);
      for needle in needles {
        assert!(prompt.contains(needle), "{:?} prompt missing {:?}", kind, needle);
      }
    }
  }

  #[test]
  fn structural_blocks_are_unique_per_type() {
    let p = profile();
    for a in ChallengeType::ALL {
      for b in ChallengeType::ALL {
        if a != b {
          assert_ne!(system_prompt(Some(a), &p), system_prompt(Some(b), &p));
        }
      }
    }
  }

  #[test]
  fn unknown_type_yields_base_instructions_only() {
    let p = profile();
    let base = system_prompt(None, &p);
    assert!(base.contains("coach AI di LearningBites"));
    for kind in ChallengeType::ALL {
      let specialized = system_prompt(Some(kind), &p);
      assert!(specialized.starts_with(&base));
      assert!(!base.contains(structure_block(kind)));
    }
  }

  #[test]
  fn profile_fields_are_interpolated_verbatim() {
    let p = UserProfile {
      name: "O'Brien {x}".into(),
      role: "Dev \"senior\"".into(),
      current_challenge: "analisi & sintesi".into(),
    };
    let prompt = system_prompt(None, &p);
    assert!(prompt.contains("O'Brien {x}"));
    assert!(prompt.contains("Dev \"senior\""));
    assert!(prompt.contains("analisi & sintesi"));
  }

  #[test]
  fn empty_profile_still_builds_a_prompt() {
    let prompt = system_prompt(Some(ChallengeType::Email), &UserProfile::default());
    assert!(prompt.contains("[OGGETTO:"));
    assert!(!prompt.contains("{name}"));
  }
}
