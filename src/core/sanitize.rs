// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Vote counts come wrapped like "(12)"; peel the parens, keep the digits.
pub fn strip_parens(s: &str) -> String {
    s.trim().trim_matches(|c| c == '(' || c == ')').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squeezes_runs_of_whitespace() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }

    #[test]
    fn strips_surrounding_parens_only() {
        assert_eq!(strip_parens("(12)"), "12");
        assert_eq!(strip_parens(" (3) "), "3");
        assert_eq!(strip_parens("7"), "7");
    }
}
