//! Stage 2: evidence verification, independent of any model opinion.

use chrono::TimeDelta;
use scout_core::config::ValidationConfig;
use scout_core::models::{Criterion, EntityProfile, EvidenceCandidate, RubricReason};
use scout_core::traits::IReachabilityProbe;

use crate::signals::{self, MentionScan};

/// Outcome of the verification stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// All three checks passed. When false, an ACCEPT is downgraded.
    pub verified: bool,
    pub mention: MentionScan,
}

pub fn run(
    candidate: &EvidenceCandidate,
    entity: &EntityProfile,
    probe: &dyn IReachabilityProbe,
    config: &ValidationConfig,
    reasons: &mut Vec<RubricReason>,
) -> Verification {
    let outcome = probe.probe(candidate.source_url());
    let reachable = outcome.reachable;
    reasons.push(RubricReason {
        criterion: Criterion::Reachable,
        passed: reachable,
        detail: outcome.detail,
    });

    let mention = signals::mentions(entity, candidate.raw_excerpt());
    let referenced = mention.any();
    reasons.push(if mention.canonical {
        RubricReason::pass(Criterion::NameReference, format!("names {}", entity.name))
    } else if let Some(alias) = &mention.alias {
        RubricReason::pass(Criterion::NameReference, format!("alias {alias}"))
    } else {
        RubricReason::fail(
            Criterion::NameReference,
            format!("no reference to {} or its aliases", entity.name),
        )
    });

    let recent = check_recency(candidate, config, reasons);

    Verification {
        verified: reachable && referenced && recent,
        mention,
    }
}

fn check_recency(
    candidate: &EvidenceCandidate,
    config: &ValidationConfig,
    reasons: &mut Vec<RubricReason>,
) -> bool {
    let Some(published) = candidate.published_at() else {
        reasons.push(RubricReason::pass(Criterion::Recency, "undated"));
        return true;
    };
    let retrieved = candidate.retrieved_at();

    let Some(latest) = TimeDelta::try_hours(config.future_tolerance_hours)
        .and_then(|tolerance| retrieved.checked_add_signed(tolerance))
    else {
        reasons.push(RubricReason::fail(
            Criterion::Recency,
            format!("retrieval time {retrieved} plus tolerance is out of range"),
        ));
        return false;
    };

    if published > latest {
        reasons.push(RubricReason::fail(
            Criterion::Recency,
            format!("published {published} after retrieval"),
        ));
        return false;
    }

    let age_days = (retrieved - published).num_days();
    if age_days > config.recency_days {
        reasons.push(RubricReason::fail(
            Criterion::Recency,
            format!("{age_days} days old, limit {}", config.recency_days),
        ));
        return false;
    }

    reasons.push(RubricReason::pass(
        Criterion::Recency,
        format!("{} days old", age_days.max(0)),
    ));
    true
}
