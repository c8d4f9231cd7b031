use std::sync::OnceLock;

use regex::Regex;

const QUANTIFIED_PATTERN: &str =
    r"(?i)\$\d|\d+[%$kmb]|\d+\+|\d+x|increased|improved|reduced|saved";

const LEADERSHIP_KEYWORDS: [&str; 5] = ["led", "managed", "directed", "coordinated", "team"];

fn quantified_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(QUANTIFIED_PATTERN).expect("quantified pattern compiles"))
}

/// Achievement statement carrying a metric or an outcome verb.
pub(crate) fn is_quantified(bullet: &str) -> bool {
    quantified_regex().is_match(bullet)
}

pub(crate) fn mentions_leadership(bullet: &str) -> bool {
    let lowered = bullet.to_lowercase();
    LEADERSHIP_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

pub(crate) fn count_quantified<'a>(bullets: impl IntoIterator<Item = &'a str>) -> usize {
    bullets
        .into_iter()
        .filter(|bullet| is_quantified(bullet))
        .count()
}
