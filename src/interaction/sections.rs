/// Height of the fixed header, added to the scroll offset before matching.
pub const HEADER_OFFSET: f64 = 100.0;

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent<'_> {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the last section whose extent contains `scroll_y + offset`.
pub fn active_section<'a>(sections: &[SectionExtent<'a>], scroll_y: f64, offset: f64) -> Option<&'a str> {
    let probe = scroll_y + offset;
    sections.iter().rev().find(|s| s.contains(probe)).map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionExtent<'static>> {
        vec![
            SectionExtent { id: "home", top: 0.0, height: 800.0 },
            SectionExtent { id: "about", top: 800.0, height: 600.0 },
            SectionExtent { id: "projects", top: 1400.0, height: 900.0 },
        ]
    }

    #[test]
    fn test_header_offset_applied() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, HEADER_OFFSET), Some("home"));
        // 700 + 100 lands on the first pixel of "about"
        assert_eq!(active_section(&sections, 700.0, HEADER_OFFSET), Some("about"));
        assert_eq!(active_section(&sections, 699.0, HEADER_OFFSET), Some("home"));
    }

    #[test]
    fn test_last_match_wins() {
        let sections = vec![
            SectionExtent { id: "outer", top: 0.0, height: 1000.0 },
            SectionExtent { id: "inner", top: 200.0, height: 100.0 },
        ];
        assert_eq!(active_section(&sections, 150.0, HEADER_OFFSET), Some("inner"));
    }

    #[test]
    fn test_past_end_matches_nothing() {
        let sections = page();
        assert_eq!(active_section(&sections, 5000.0, HEADER_OFFSET), None);
        assert_eq!(active_section(&[], 0.0, HEADER_OFFSET), None);
    }
}
