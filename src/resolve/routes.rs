/// Highlight display text → destination route. A hit makes the span
/// clickable; matching is case-insensitive on the resolved display text.
static HIGHLIGHT_ROUTES: &[(&str, &str)] = &[
    ("CHAOS", "/chaos"),
    ("CO-PILOT", "/chaos"),
    ("FIGHTS GODS IN HIS HEAD", "/mind"),
    ("STOLEN FROM ALTERNATE TIMELINES", "/projects"),
    ("TECH NECROMANCER", "/code"),
    ("VIOLENTLY ALIVE", "/alive"),
    ("UNIVERSE", "/universe"),
    ("BLACK HOLES", "/universe"),
    ("FAILURES", "/learn"),
    ("MAGIC", "/magic"),
];

pub fn route_for(display_text: &str) -> Option<&'static str> {
    HIGHLIGHT_ROUTES
        .iter()
        .find(|(text, _)| text.eq_ignore_ascii_case(display_text))
        .map(|&(_, route)| route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(route_for("UNIVERSE"), Some("/universe"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(route_for("universe"), Some("/universe"));
        assert_eq!(route_for("Black Holes"), Some("/universe"));
    }

    #[test]
    fn test_multi_word_key() {
        assert_eq!(route_for("FIGHTS GODS IN HIS HEAD"), Some("/mind"));
    }

    #[test]
    fn test_unlinked_text() {
        assert_eq!(route_for("ALIVE"), None);
        assert_eq!(route_for(""), None);
    }
}
