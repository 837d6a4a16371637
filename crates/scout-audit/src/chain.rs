//! Hash-chain primitives.

use scout_core::errors::AuditError;
use scout_core::models::{AuditDraft, AuditLogEntry};

/// Chain hash of one entry: blake3 over the canonical JSON of
/// `(sequence_number, draft, previous_hash)`.
pub fn entry_hash(
    sequence_number: u64,
    draft: &AuditDraft,
    previous_hash: &str,
) -> Result<String, AuditError> {
    let bytes = serde_json::to_vec(&(sequence_number, draft, previous_hash))?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

/// Where and why a chain failed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainBreak {
    Sequence { expected: u64, found: u64 },
    PreviousHash { sequence_number: u64 },
    ContentHash { sequence_number: u64 },
    Head { expected: String, found: String },
}

/// Walk `entries` from the first and recompute every link.
pub fn verify_chain(entries: &[AuditLogEntry], head: &str) -> Result<(), ChainBreak> {
    let mut previous_hash = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let expected = i as u64 + 1;
        if entry.sequence_number != expected {
            return Err(ChainBreak::Sequence {
                expected,
                found: entry.sequence_number,
            });
        }
        if entry.previous_hash != previous_hash {
            return Err(ChainBreak::PreviousHash {
                sequence_number: entry.sequence_number,
            });
        }
        let recomputed = entry_hash(entry.sequence_number, &entry.draft, &entry.previous_hash)
            .map_err(|_| ChainBreak::ContentHash {
                sequence_number: entry.sequence_number,
            })?;
        if recomputed != entry.content_hash {
            return Err(ChainBreak::ContentHash {
                sequence_number: entry.sequence_number,
            });
        }
        previous_hash = entry.content_hash.clone();
    }
    if previous_hash != head {
        return Err(ChainBreak::Head {
            expected: previous_hash,
            found: head.to_string(),
        });
    }
    Ok(())
}
