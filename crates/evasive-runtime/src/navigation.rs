#![forbid(unsafe_code)]

//! Cyclic page navigation with cache-busting URLs.

/// Page used when the location path ends in `/`.
const ROOT_PAGE: &str = "index.html";

/// `page?t=millis`.
#[must_use]
pub fn cache_busted(page: &str, millis: u64) -> String {
    format!("{page}?t={millis}")
}

/// Last path segment of a location pathname, treating the site root as
/// `index.html`.
#[must_use]
pub fn page_name_from_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => ROOT_PAGE,
    }
}

/// Fixed ordered page list, addressed 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSequence {
    pages: Vec<String>,
}

impl PageSequence {
    #[must_use]
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page for a 1-based number, `None` when out of range.
    #[must_use]
    pub fn get(&self, page_number: u32) -> Option<&str> {
        let idx = usize::try_from(page_number).ok()?.checked_sub(1)?;
        self.pages.get(idx).map(String::as_str)
    }

    /// 1-based position of `page`.
    #[must_use]
    pub fn number_of(&self, page: &str) -> Option<u32> {
        let idx = self.pages.iter().position(|p| p == page)?;
        u32::try_from(idx + 1).ok()
    }

    /// The page after `page`, wrapping from the last to the first.
    #[must_use]
    pub fn next_after(&self, page: &str) -> Option<&str> {
        let idx = self.pages.iter().position(|p| p == page)?;
        let next = (idx + 1) % self.pages.len();
        Some(self.pages[next].as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(String::as_str)
    }
}

/// Navigation state: the page sequence plus the affirmative target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    sequence: PageSequence,
    next_page: String,
    total_pages: usize,
    current: Option<u32>,
}

impl Navigator {
    #[must_use]
    pub fn new(sequence: PageSequence, next_page: impl Into<String>) -> Self {
        let total_pages = sequence.len();
        Self {
            sequence,
            next_page: next_page.into(),
            total_pages,
            current: None,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &PageSequence {
        &self.sequence
    }

    #[must_use]
    pub fn next_page(&self) -> &str {
        &self.next_page
    }

    /// Page count last announced by the page markup.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// 1-based number of the page we are on, once known.
    #[must_use]
    pub fn current(&self) -> Option<u32> {
        self.current
    }

    /// Record the current page. Known pages also retarget the affirmative
    /// control to the following page; unknown pages change nothing.
    pub fn enter(&mut self, page: &str) -> bool {
        let Some(number) = self.sequence.number_of(page) else {
            return false;
        };
        if let Some(next) = self.sequence.next_after(page) {
            self.next_page = next.to_string();
        }
        self.current = Some(number);
        true
    }

    /// Replace the next page and/or the announced page count. `None`, an
    /// empty name or a zero count keeps the current value.
    pub fn update(&mut self, next_page: Option<&str>, total_pages: Option<usize>) {
        if let Some(next) = next_page.filter(|n| !n.is_empty()) {
            self.next_page = next.to_string();
        }
        if let Some(total) = total_pages.filter(|t| *t > 0) {
            self.total_pages = total;
        }
    }

    /// Page for a 1-based number anywhere in the sequence.
    #[must_use]
    pub fn target(&self, page_number: u32) -> Option<&str> {
        self.sequence.get(page_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn five() -> PageSequence {
        PageSequence::new([
            "index.html",
            "page2.html",
            "page3.html",
            "page4.html",
            "page5.html",
        ])
    }

    #[test]
    fn page_names_from_paths() {
        assert_eq!(page_name_from_path("/site/page3.html"), "page3.html");
        assert_eq!(page_name_from_path("page4.html"), "page4.html");
        assert_eq!(page_name_from_path("/site/"), "index.html");
        assert_eq!(page_name_from_path(""), "index.html");
        assert_eq!(page_name_from_path("/page2.html?t=1#x"), "page2.html");
    }

    #[test]
    fn cache_busted_format() {
        assert_eq!(cache_busted("page5.html", 1_700_000_000_123), "page5.html?t=1700000000123");
    }

    #[test]
    fn one_based_lookup() {
        let pages = five();
        assert_eq!(pages.get(0), None);
        assert_eq!(pages.get(1), Some("index.html"));
        assert_eq!(pages.get(5), Some("page5.html"));
        assert_eq!(pages.get(6), None);
        assert_eq!(pages.number_of("page3.html"), Some(3));
        assert_eq!(pages.number_of("nope.html"), None);
    }

    #[test]
    fn next_after_wraps() {
        let pages = five();
        assert_eq!(pages.next_after("index.html"), Some("page2.html"));
        assert_eq!(pages.next_after("page5.html"), Some("index.html"));
        assert_eq!(pages.next_after("other.html"), None);
        assert_eq!(pages.iter().count(), 5);
    }

    #[test]
    fn entering_pages_retargets_yes() {
        let mut nav = Navigator::new(five(), "page2.html");
        assert!(nav.enter("page4.html"));
        assert_eq!(nav.next_page(), "page5.html");
        assert_eq!(nav.current(), Some(4));

        assert!(!nav.enter("about.html"));
        assert_eq!(nav.next_page(), "page5.html");
        assert_eq!(nav.current(), Some(4));
    }

    #[test]
    fn update_overrides_without_limiting_targets() {
        let mut nav = Navigator::new(five(), "page2.html");
        nav.update(Some("page3.html"), None);
        assert_eq!(nav.next_page(), "page3.html");
        assert_eq!(nav.total_pages(), 5);

        nav.update(None, Some(3));
        assert_eq!(nav.total_pages(), 3);
        assert_eq!(nav.target(3), Some("page3.html"));
        assert_eq!(nav.target(5), Some("page5.html"));
        assert_eq!(nav.target(6), None);

        nav.update(Some(""), Some(0));
        assert_eq!(nav.next_page(), "page3.html");
        assert_eq!(nav.total_pages(), 3);
    }

    proptest::proptest! {
        #[test]
        fn walking_next_returns_home(count in 1usize..12, start in 0usize..12) {
            let pages = PageSequence::new((1..=count).map(|n| format!("p{n}.html")));
            let home = format!("p{}.html", start % count + 1);
            let mut page = home.clone();
            for _ in 0..count {
                page = pages.next_after(&page).map(str::to_string).unwrap_or_default();
            }
            proptest::prop_assert_eq!(page, home);
        }

        #[test]
        fn targets_follow_sequence_whatever_the_page_count(
            total in 1usize..8,
            number in 0u32..10,
        ) {
            let mut nav = Navigator::new(five(), "page2.html");
            nav.update(None, Some(total));
            let expected = (1..=5).contains(&number);
            proptest::prop_assert_eq!(nav.target(number).is_some(), expected);
        }
    }
}
