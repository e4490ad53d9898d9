use once_cell::sync::Lazy;
use regex::Regex;

/// Literal prefix some browsers substitute for the real filesystem path of a
/// selected file, for privacy reasons.
pub const FAKE_PATH_PREFIX: &str = "C:\\fakepath\\";

/// Label text shown while no file is selected.
pub const DEFAULT_PLACEHOLDER: &str = "未选择任何文件";

// Basename capture after the last path separator. The character class covers
// CJK ideographs alongside common filename characters.
static BASENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[/\\]([\x{4e00}-\x{9fa5}\w\s.+\-()]+)$").unwrap());

/// How the filename label is derived from the file control's raw `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStrategy {
    /// Remove the literal `C:\fakepath\` prefix and show the rest. This is
    /// the behavior browsers expect on the common path convention.
    #[default]
    StripFakePath,
    /// Extract the basename after the last `/` or `\`. More robust on
    /// browsers that report a different path convention.
    RegexBasename,
}

/// Computes the text for the filename label from the file control's current
/// `value`. An empty value means no selection and yields the placeholder.
pub fn display_name(value: &str, strategy: LabelStrategy, placeholder: &str) -> String {
    if value.is_empty() {
        return placeholder.to_string();
    }

    match strategy {
        LabelStrategy::StripFakePath => value
            .strip_prefix(FAKE_PATH_PREFIX)
            .unwrap_or(value)
            .to_string(),
        LabelStrategy::RegexBasename => BASENAME_RE
            .captures(value)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            // a value with no separator is already a bare filename
            .unwrap_or_else(|| value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fake_path_prefix() {
        assert_eq!(
            display_name(
                "C:\\fakepath\\report.pdf",
                LabelStrategy::StripFakePath,
                DEFAULT_PLACEHOLDER
            ),
            "report.pdf"
        );
    }

    #[test]
    fn passes_through_values_without_prefix() {
        for value in ["report.pdf", "/home/user/report.pdf", "notes (final).txt"] {
            assert_eq!(
                display_name(value, LabelStrategy::StripFakePath, DEFAULT_PLACEHOLDER),
                value
            );
        }
    }

    #[test]
    fn prefix_is_only_removed_from_the_front() {
        assert_eq!(
            display_name(
                "a C:\\fakepath\\b",
                LabelStrategy::StripFakePath,
                DEFAULT_PLACEHOLDER
            ),
            "a C:\\fakepath\\b"
        );
    }

    #[test]
    fn keeps_non_ascii_filenames() {
        assert_eq!(
            display_name(
                "C:\\fakepath\\中文文件.txt",
                LabelStrategy::StripFakePath,
                DEFAULT_PLACEHOLDER
            ),
            "中文文件.txt"
        );
    }

    #[test]
    fn empty_value_shows_placeholder() {
        assert_eq!(
            display_name("", LabelStrategy::StripFakePath, DEFAULT_PLACEHOLDER),
            DEFAULT_PLACEHOLDER
        );
        assert_eq!(
            display_name("", LabelStrategy::RegexBasename, "no file chosen"),
            "no file chosen"
        );
    }

    #[test]
    fn regex_strategy_extracts_basename() {
        let cases = [
            ("C:\\fakepath\\report.pdf", "report.pdf"),
            ("C:\\fakepath\\中文文件.txt", "中文文件.txt"),
            ("/home/user/photo (1).jpg", "photo (1).jpg"),
            ("D:\\data\\backup+2024.tar", "backup+2024.tar"),
        ];
        for (value, expected) in cases {
            assert_eq!(
                display_name(value, LabelStrategy::RegexBasename, DEFAULT_PLACEHOLDER),
                expected
            );
        }
    }

    #[test]
    fn regex_strategy_keeps_bare_filenames() {
        assert_eq!(
            display_name("report.pdf", LabelStrategy::RegexBasename, DEFAULT_PLACEHOLDER),
            "report.pdf"
        );
    }

    #[test]
    fn recomputation_is_deterministic() {
        let first = display_name(
            "C:\\fakepath\\report.pdf",
            LabelStrategy::StripFakePath,
            DEFAULT_PLACEHOLDER,
        );
        let second = display_name(
            "C:\\fakepath\\report.pdf",
            LabelStrategy::StripFakePath,
            DEFAULT_PLACEHOLDER,
        );
        assert_eq!(first, second);
    }
}
