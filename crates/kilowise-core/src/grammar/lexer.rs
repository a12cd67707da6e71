/// Prefix shared by every conditional rule.
pub const IF_PREFIX: &str = "If ";

/// Split the body of an `If ...` rule into whitespace-separated tokens.
///
/// Returns `None` when the rule does not start with `If `.
pub fn tokenize(rule: &str) -> Option<Vec<&str>> {
    rule.trim()
        .strip_prefix(IF_PREFIX)
        .map(|body| body.split_whitespace().collect())
}

/// Rejoin tokens with single spaces.
pub fn join(tokens: &[&str]) -> String {
    tokens.join(" ")
}

/// Strip one layer of surrounding double quotes, if both ends carry one.
pub fn strip_quotes(literal: &str) -> &str {
    if literal.len() >= 2 && literal.starts_with('"') && literal.ends_with('"') {
        &literal[1..literal.len() - 1]
    } else {
        literal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let tokens = tokenize("  If Pool   Heater Greater than\t0 ").unwrap();
        assert_eq!(tokens, vec!["Pool", "Heater", "Greater", "than", "0"]);
    }

    #[test]
    fn test_tokenize_requires_if_prefix() {
        assert!(tokenize("Always").is_none());
        assert!(tokenize("IfFreezer = Yes").is_none());
        assert!(tokenize("If ").is_none());
        assert_eq!(tokenize("If x").unwrap(), vec!["x"]);
    }

    #[test]
    fn test_strip_quotes_one_layer() {
        assert_eq!(strip_quotes("\"Yes\""), "Yes");
        assert_eq!(strip_quotes("\"\"Yes\"\""), "\"Yes\"");
        assert_eq!(strip_quotes("\"Yes"), "\"Yes");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("TOU"), "TOU");
    }
}
