use derive_more::Display;

/// Separator between segments of a namespace path.
pub const SEPARATOR: char = '/';

/// A slash-delimited path into the namespace tree.
///
/// Splitting never produces zero segments: the empty string parses to a single
/// empty segment, and consecutive separators produce empty segments in between.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{raw}")]
pub struct NamespacePath {
    raw: String,
    segments: Vec<String>,
}

impl NamespacePath {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw.split(SEPARATOR).map(str::to_string).collect();
        Self { raw, segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Splits the path into the segments leading to the parent and the final segment.
    pub fn split_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last.as_str()),
            // parse() always yields at least one segment
            None => (&[], ""),
        }
    }

    /// Whether `prefix` names this path or one of its ancestors, compared segment by segment.
    pub fn starts_with(&self, prefix: &NamespacePath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

impl From<&str> for NamespacePath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for NamespacePath {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<&String> for NamespacePath {
    fn from(raw: &String) -> Self {
        Self::parse(raw.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("fruits/apples/fuji", &["fruits", "apples", "fuji"])]
    #[case("fruits", &["fruits"])]
    #[case("fruits/apples", &["fruits", "apples"])]
    #[case("fruits:apples:fuji", &["fruits:apples:fuji"])]
    #[case("", &[""])]
    #[case("a//b", &["a", "", "b"])]
    #[case("a/", &["a", ""])]
    fn parse_splits_on_separator(#[case] raw: &str, #[case] expected: &[&str]) {
        let path = NamespacePath::parse(raw);
        assert_eq!(path.segments(), expected);
    }

    #[test]
    fn display_keeps_raw_text() {
        let path = NamespacePath::from("fruits//apples");
        assert_eq!(path.to_string(), "fruits//apples");
    }

    #[test]
    fn split_last_separates_parent_segments() {
        let path = NamespacePath::from("fruits/apples/fuji");
        let (parents, last) = path.split_last();
        assert_eq!(parents, ["fruits", "apples"]);
        assert_eq!(last, "fuji");

        let single = NamespacePath::from("fruits");
        let (parents, last) = single.split_last();
        assert!(parents.is_empty());
        assert_eq!(last, "fruits");
    }

    #[rstest]
    #[case("a/b", "a", true)]
    #[case("a", "a", true)]
    #[case("a/b/c", "a/b", true)]
    #[case("ab/c", "a", false)]
    #[case("a", "a/b", false)]
    #[case("b/a", "a", false)]
    fn starts_with_compares_whole_segments(
        #[case] path: &str,
        #[case] prefix: &str,
        #[case] expected: bool,
    ) {
        let path = NamespacePath::from(path);
        let prefix = NamespacePath::from(prefix);
        assert_eq!(path.starts_with(&prefix), expected);
    }
}
