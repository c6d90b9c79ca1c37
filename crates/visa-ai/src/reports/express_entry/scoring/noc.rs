//! National Occupational Classification code sets for the category-based
//! selection streams, plus the trade occupation-group prefixes used by the
//! Federal Skilled Trades Program.
//!
//! Each list mirrors a government-published table and is expected to change
//! between draw rounds; keeping them as named constants means an update
//! never touches eligibility control flow.

use once_cell::sync::Lazy;
use std::collections::HashSet;

fn set(codes: &'static [&'static str]) -> HashSet<&'static str> {
    codes.iter().copied().collect()
}

/// Healthcare and social services occupations.
pub(crate) static HEALTHCARE_SOCIAL_NOC: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "31112", "31201", "31110", "31121", "31102", "32101", "32201", "32120", "32121", "32122",
        "31302", "31300", "31203", "31111", "31209", "32102", "31120", "32124", "31303", "31202",
        "31200", "31301", "32103", "41300", "41301", "31100", "31101", "31103",
    ])
});

/// Science, technology, engineering, and math occupations.
pub(crate) static STEM_NOC: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "20011", "21300", "22300", "21220", "21310", "22310", "21331", "21321", "21301", "22301",
        "63100",
    ])
});

/// Trade occupations.
pub(crate) static TRADE_NOC: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "82021", "73113", "73112", "73110", "73100", "72999", "72501", "72422", "72402", "72401",
        "72400", "72320", "72311", "72310", "72302", "72300", "72201", "72200", "72106", "72102",
        "72100", "70011", "70010", "63200", "22303",
    ])
});

/// Agriculture and agri-food occupations.
pub(crate) static AGRI_FOOD_NOC: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "63201", "65202", "94141", "82030", "84120", "85100", "85101", "95106",
    ])
});

/// Education occupations.
pub(crate) static EDUCATION_NOC: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&["43100", "42203", "42202", "41221", "41220"])
});

/// Occupation-group prefixes whose TEER 2-3 entries qualify as trade
/// experience for the Federal Skilled Trades Program.
pub(crate) const TRADE_GROUP_PREFIXES: &[&str] =
    &["72", "73", "82", "83", "92", "93", "632", "633"];
