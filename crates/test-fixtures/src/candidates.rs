//! Candidate builders. Each takes a discriminator `n` so repeated calls
//! produce distinct content hashes.

use chrono::Duration;
use scout_core::models::{EvidenceCandidate, SourceKind};

use crate::base_time;

/// Official-site procurement notice that satisfies every rubric criterion.
pub fn accept(n: u32) -> EvidenceCandidate {
    EvidenceCandidate::new(
        format!("https://riversiderovers.com/news/tender-{n}"),
        SourceKind::OfficialSite,
        format!(
            "Riverside Rovers has issued an RFP (reference {n}) to replace its ticketing platform ahead of next season."
        ),
        base_time() + Duration::minutes(n as i64),
    )
}

/// The same as [`accept`], but hosted on a domain that can never resolve.
pub fn unreachable_accept(n: u32) -> EvidenceCandidate {
    EvidenceCandidate::new(
        format!("https://riversiderovers.invalid/news/tender-{n}"),
        SourceKind::OfficialSite,
        format!(
            "Riverside Rovers has issued an RFP (reference {n}) to replace its ticketing platform ahead of next season."
        ),
        base_time() + Duration::minutes(n as i64),
    )
}

/// Generic roundup that never names the entity and signals nothing.
pub fn reject(n: u32) -> EvidenceCandidate {
    EvidenceCandidate::new(
        format!("https://blog.example-sports.net/roundup/{n}"),
        SourceKind::Other,
        format!("Weekend roundup number {n}: results, highlights and standings across the league."),
        base_time() + Duration::minutes(n as i64),
    )
}

/// Job-board posting that names the entity but only via an alias.
pub fn alias_hiring(n: u32) -> EvidenceCandidate {
    EvidenceCandidate::new(
        format!("https://jobs.sportsjobs.net/posting/{n}"),
        SourceKind::JobBoard,
        format!("RRFC is hiring a data engineer, posting {n}."),
        base_time() + Duration::minutes(n as i64),
    )
}
