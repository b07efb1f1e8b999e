use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Reveals `text` one character per tick. Never loops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    // byte offset of the revealed prefix, always on a char boundary
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    /// Reveal the next character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        match self.text[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_hi_then_stops() {
        let mut tw = Typewriter::new("Hi");
        assert_eq!(tw.visible(), "");

        // ~100ms
        assert!(tw.tick());
        assert_eq!(tw.visible(), "H");
        // ~200ms
        assert!(tw.tick());
        assert_eq!(tw.visible(), "Hi");
        assert!(tw.is_done());

        assert!(!tw.tick());
        assert_eq!(tw.visible(), "Hi");
    }

    #[test]
    fn test_prefixes_in_order_and_bounded() {
        let text = "Building AI-driven apps";
        let mut tw = Typewriter::new(text);
        let mut last = 0;
        for _ in 0..text.len() * 2 {
            tw.tick();
            assert!(text.starts_with(tw.visible()));
            assert!(tw.visible().len() >= last);
            assert!(tw.visible().len() <= text.len());
            last = tw.visible().len();
        }
        assert!(tw.is_done());
    }

    #[test]
    fn test_multibyte_chars_reveal_whole() {
        let mut tw = Typewriter::new("é→");
        tw.tick();
        assert_eq!(tw.visible(), "é");
        tw.tick();
        assert_eq!(tw.visible(), "é→");
        assert!(tw.is_done());
    }

    #[test]
    fn test_empty_text_is_done() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert!(!tw.tick());
    }
}
