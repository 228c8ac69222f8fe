//! Step-piece association heuristic.
//!
//! Given an assembly-step description and the full cut list, select the 1..=3
//! pieces the step most likely concerns. This is a best-effort illustrative
//! pairing for the step diagrams, not ground truth: a piece qualifies when a
//! structural keyword appears in both the step text and the piece name.
//!
//! When nothing matches, a rotating window over the cut list keyed on the
//! step number guarantees every step still shows some pieces.

use planokit_core::model::{AssemblyStep, Piece};
use smallvec::SmallVec;

/// Structural vocabulary tested against step text and piece names. Spanish
/// tokens first (the design agent answers in Spanish), English equivalents
/// after.
pub const STEP_KEYWORDS: &[&str] = &[
    "cajon",
    "cajón",
    "lateral",
    "base",
    "panel",
    "frente",
    "trasero",
    "superior",
    "inferior",
    "divisor",
    "estante",
    "vidrio",
    "puerta",
    "estructura",
    "riel",
    "soporte",
    "drawer",
    "side",
    "front",
    "back",
    "top",
    "bottom",
    "divider",
    "shelf",
    "glass",
    "door",
    "structure",
    "rail",
    "support",
];

/// At most this many pieces are associated with one step.
pub const MAX_MATCHES: usize = 3;

/// Pieces relevant to `step`, in cut-list order, capped at [`MAX_MATCHES`].
///
/// Fallback: zero keyword matches pick up to 2 pieces starting at
/// `(step.number - 1) % pieces.len()`. The window does not wrap, so a step
/// landing on the last piece shows just that one. An empty cut list yields an
/// empty result.
pub fn associate<'a>(step: &AssemblyStep, pieces: &'a [Piece]) -> SmallVec<[&'a Piece; 3]> {
    let text = format!("{} {}", step.operation, step.description).to_lowercase();

    let mut matched: SmallVec<[&Piece; 3]> = SmallVec::new();
    for piece in pieces {
        let name = piece.name.to_lowercase();
        if STEP_KEYWORDS
            .iter()
            .any(|k| text.contains(k) && name.contains(k))
        {
            matched.push(piece);
            if matched.len() == MAX_MATCHES {
                break;
            }
        }
    }

    if matched.is_empty() && !pieces.is_empty() {
        let start = (step.number.saturating_sub(1) as usize) % pieces.len();
        matched.extend(pieces.iter().skip(start).take(2));
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(name: &str) -> Piece {
        Piece {
            name: name.to_string(),
            quantity: 1,
            length: 600.0,
            width: 400.0,
            thickness: 18.0,
            material: "MDF 18mm".to_string(),
            note: None,
        }
    }

    fn step(number: u32, operation: &str, description: &str) -> AssemblyStep {
        AssemblyStep {
            number,
            operation: operation.to_string(),
            description: description.to_string(),
            tools: Vec::new(),
            minutes: None,
        }
    }

    #[test]
    fn matches_keywords_present_in_both_text_and_name() {
        let pieces = vec![
            piece("Panel lateral izq"),
            piece("Base inferior"),
            piece("Cajón frontal"),
        ];
        let matched = associate(&step(1, "Ensamblar panel lateral con la base", ""), &pieces);
        let names: Vec<&str> = matched.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Panel lateral izq", "Base inferior"]);
    }

    #[test]
    fn caps_at_three_matches() {
        let pieces = vec![
            piece("Panel a"),
            piece("Panel b"),
            piece("Panel c"),
            piece("Panel d"),
        ];
        let matched = associate(&step(1, "Unir panel con panel", ""), &pieces);
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn fallback_rotates_with_step_number() {
        let pieces = vec![piece("Uno"), piece("Dos"), piece("Tres")];
        let matched = associate(&step(2, "Aplicar acabado", "Lijar y sellar"), &pieces);
        let names: Vec<&str> = matched.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Dos", "Tres"]);
    }

    #[test]
    fn fallback_window_does_not_wrap() {
        let pieces = vec![piece("Uno"), piece("Dos"), piece("Tres")];
        let matched = associate(&step(3, "Aplicar acabado", ""), &pieces);
        let names: Vec<&str> = matched.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Tres"]);
    }

    #[test]
    fn empty_cut_list_yields_nothing() {
        let matched = associate(&step(1, "Ensamblar base", ""), &[]);
        assert!(matched.is_empty());
    }
}
