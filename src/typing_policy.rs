// Keystrokes edit a copy of the typed text; the app then submits the whole
// text to the controller, which decides whether the word is done.

/// Typed text with `c` appended. Control characters are dropped.
pub fn push_char(typed: &str, c: char) -> String {
    let mut text = typed.to_string();
    if !c.is_control() {
        text.push(c);
    }
    text
}

/// Typed text without its last char
pub fn pop_char(typed: &str) -> String {
    let mut text = typed.to_string();
    text.pop();
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_char_appends() {
        assert_eq!(push_char("", 'r'), "r");
        assert_eq!(push_char("rea", 'c'), "reac");
    }

    #[test]
    fn test_push_char_drops_control_chars() {
        assert_eq!(push_char("re", '\t'), "re");
        assert_eq!(push_char("re", '\u{7f}'), "re");
    }

    #[test]
    fn test_push_char_keeps_multibyte() {
        assert_eq!(push_char("caf", 'é'), "café");
    }

    #[test]
    fn test_pop_char() {
        assert_eq!(pop_char("reac"), "rea");
        assert_eq!(pop_char("café"), "caf");
        assert_eq!(pop_char(""), "");
    }
}
