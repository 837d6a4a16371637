//! Future-action rubric and entity mention matching.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use scout_core::models::EntityProfile;

use crate::normalize::{contains_phrase, tokens};

/// Kinds of forward-looking action an excerpt can signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionSignal {
    Budgeting,
    Hiring,
    Procurement,
    TechnologyChange,
}

impl ActionSignal {
    pub const ALL: [ActionSignal; 4] = [
        ActionSignal::Budgeting,
        ActionSignal::Hiring,
        ActionSignal::Procurement,
        ActionSignal::TechnologyChange,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionSignal::Budgeting => "budgeting",
            ActionSignal::Hiring => "hiring",
            ActionSignal::Procurement => "procurement",
            ActionSignal::TechnologyChange => "technology_change",
        }
    }

    fn regex(self) -> &'static LazyLock<Option<Regex>> {
        match self {
            ActionSignal::Budgeting => &BUDGETING_RE,
            ActionSignal::Hiring => &HIRING_RE,
            ActionSignal::Procurement => &PROCUREMENT_RE,
            ActionSignal::TechnologyChange => &TECHNOLOGY_RE,
        }
    }
}

macro_rules! signal_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// Patterns run against normalized text: lowercase, punctuation as spaces.
signal_pattern!(
    BUDGETING_RE,
    r"\b(budget(s|ed|ing)?|capital (plan|programme|program|expenditure|investment)|funding (approved|allocated|secured)|allocat(e|ed|ion)|appropriation|fiscal (year|plan))\b"
);
signal_pattern!(
    HIRING_RE,
    r"\b(hiring|we re hiring|job (opening|posting|vacancy)s?|recruit(ing|ment)?|vacanc(y|ies)|open (role|position)s?|now accepting applications)\b"
);
signal_pattern!(
    PROCUREMENT_RE,
    r"\b(rfp|rfq|rfi|request for (proposal|proposals|quotation|quotations|information)|tender(s|ing)?|invitation to tender|procure(ment)?|solicitation|bids?|bidding|vendor selection|supplier selection)\b"
);
signal_pattern!(
    TECHNOLOGY_RE,
    r"\b(migrat(e|ing|ion)|replac(e|ing|ement)|upgrad(e|ing)|implement(ing|ation)?|moderni[sz](e|ing|ation)|digital transformation|new (platform|system|crm|erp|website|app|ticketing)|re ?platform(ing)?|roll(ing)? out|deploy(ing|ment)?)\b"
);

/// Result of scanning an excerpt for forward-looking signals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalScan {
    pub signals: BTreeSet<ActionSignal>,
    /// The matched phrases themselves, normalized and deduplicated.
    pub terms: BTreeSet<String>,
}

impl SignalScan {
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

/// Scan already-normalized text for action signals.
pub fn scan(normalized: &str) -> SignalScan {
    let mut out = SignalScan::default();
    for signal in ActionSignal::ALL {
        // A pattern that failed to compile simply contributes no matches.
        let Some(re) = signal.regex().as_ref() else {
            continue;
        };
        for m in re.find_iter(normalized) {
            out.signals.insert(signal);
            out.terms.insert(m.as_str().to_string());
        }
    }
    out
}

/// Which of the entity's names an excerpt mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionScan {
    /// The canonical name appears verbatim (as whole words).
    pub canonical: bool,
    /// First alias found, when the canonical name is absent.
    pub alias: Option<String>,
}

impl MentionScan {
    pub fn any(&self) -> bool {
        self.canonical || self.alias.is_some()
    }
}

/// Look for the entity's canonical name, then its aliases.
pub fn mentions(entity: &EntityProfile, excerpt: &str) -> MentionScan {
    let haystack = tokens(excerpt);
    let canonical = contains_phrase(&haystack, &tokens(&entity.name));
    let alias = if canonical {
        None
    } else {
        entity
            .aliases
            .iter()
            .find(|a| contains_phrase(&haystack, &tokens(a)))
            .cloned()
    };
    MentionScan { canonical, alias }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn procurement_and_technology_terms_are_found() {
        let scan = scan(&normalize(
            "The club issued an RFP to replace its ticketing platform.",
        ));
        assert!(scan.signals.contains(&ActionSignal::Procurement));
        assert!(scan.signals.contains(&ActionSignal::TechnologyChange));
        assert!(scan.terms.contains("rfp"));
    }

    #[test]
    fn past_tense_completion_is_not_a_future_action() {
        let scan = scan(&normalize("The stadium implemented a CRM in 2019."));
        assert!(scan.is_empty(), "unexpected signals: {:?}", scan.signals);
    }

    #[test]
    fn alias_only_mention_is_not_canonical() {
        let entity = EntityProfile::new("e", "Riverside Rovers").with_aliases(["RRFC"]);
        let m = mentions(&entity, "RRFC is hiring a CTO");
        assert!(!m.canonical);
        assert_eq!(m.alias.as_deref(), Some("RRFC"));
        assert!(mentions(&entity, "Riverside Rovers, today").canonical);
        assert!(!mentions(&entity, "Riverside Rangers").any());
    }
}
