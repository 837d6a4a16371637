//! Stage 4: final confirmation.
//!
//! A sanity check that the decision agrees with its own reasons. Any
//! disagreement is a validator bug and is returned as an error, never
//! patched over.

use scout_core::errors::ValidationError;
use scout_core::models::{Classification, Criterion, Decision};

pub fn run(decision: &Decision) -> Result<(), ValidationError> {
    let inconsistent = |details: String| ValidationError::InconsistentDecision {
        classification: decision.classification().to_string(),
        details,
    };

    let rejection_note = decision
        .reasons()
        .iter()
        .find(|r| r.criterion.is_rejection_note() && !r.passed);

    for criterion in Criterion::RUBRIC {
        let count = decision
            .reasons()
            .iter()
            .filter(|r| r.criterion == criterion)
            .count();
        if count > 1 {
            return Err(inconsistent(format!("{criterion:?} recorded {count} times")));
        }
        // A decision that stopped before the rubric carries no rubric lines.
        if count == 0 && rejection_note.is_none() {
            return Err(inconsistent(format!("{criterion:?} missing")));
        }
    }

    let new = decision.passed(Criterion::New);
    let others = [
        Criterion::EntitySpecific,
        Criterion::FutureAction,
        Criterion::CredibleSource,
    ]
    .iter()
    .filter(|c| decision.passed(**c))
    .count();
    let downgraded = decision.reason(Criterion::VerificationDowngrade).is_some();

    match decision.classification() {
        Classification::Accept => {
            if !decision.verified() {
                return Err(inconsistent("ACCEPT on unverified evidence".to_string()));
            }
            if downgraded {
                return Err(inconsistent("ACCEPT carries a downgrade note".to_string()));
            }
            if let Some(note) = rejection_note {
                return Err(inconsistent(format!(
                    "ACCEPT with failed {:?}",
                    note.criterion
                )));
            }
            if !new || others != 3 {
                return Err(inconsistent(format!(
                    "ACCEPT needs all criteria, new={new} others={others}/3"
                )));
            }
        }
        Classification::WeakAccept => {
            if let Some(note) = rejection_note {
                return Err(inconsistent(format!(
                    "WEAK_ACCEPT with failed {:?}",
                    note.criterion
                )));
            }
            if !new || others == 0 {
                return Err(inconsistent(format!(
                    "WEAK_ACCEPT needs new plus one criterion, new={new} others={others}"
                )));
            }
            if others == 3 && decision.verified() {
                return Err(inconsistent(
                    "verified evidence meeting every criterion must be ACCEPT".to_string(),
                ));
            }
        }
        Classification::Reject => {
            if rejection_note.is_none() && new && others > 0 {
                return Err(inconsistent(format!(
                    "REJECT without a rejection note despite new and {others} criteria"
                )));
            }
        }
    }
    Ok(())
}
