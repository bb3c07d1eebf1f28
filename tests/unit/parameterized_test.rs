//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use docs_exclude::core::models::{GlobPattern, RegexPattern};
use test_case::test_case;

use crate::common::{Rules, abs};

// =============================================================================
// Glob Matching Tests
// =============================================================================

#[test_case("*", "any/file.md", true ; "star matches everything")]
#[test_case("*.md", "index.md", true ; "extension matches")]
#[test_case("*.md", "guide/index.md", true ; "star crosses directories")]
#[test_case("*.md", "index.markdown", false ; "extension rejects different")]
#[test_case("guide/*", "guide/a/b.md", true ; "dir star matches nested")]
#[test_case("guide/*", "other/guide/a.md", false ; "glob is anchored at start")]
#[test_case("**/index.md", "index.md", false ; "double star needs a slash")]
#[test_case("**/index.md", "a/index.md", true ; "double star matches one level")]
#[test_case("page?.md", "page1.md", true ; "question mark matches one char")]
#[test_case("page?.md", "page12.md", false ; "question mark matches exactly one")]
#[test_case("v[12].md", "v2.md", true ; "class matches member")]
#[test_case("v[!12].md", "v2.md", false ; "negated class rejects member")]
#[test_case("v[a-c].md", "vb.md", true ; "class range")]
#[test_case("[", "[", true ; "lone bracket is literal")]
#[test_case("README.md", "readme.md", false ; "case sensitive")]
#[test_case("a.b", "axb", false ; "dot is literal")]
fn test_glob_matching(pattern: &str, path: &str, expected: bool) {
    let glob = GlobPattern::new(pattern).unwrap();
    assert_eq!(glob.matches(path), expected, "pattern={pattern:?} path={path:?}");
}

// =============================================================================
// Regex Matching Tests
// =============================================================================

#[test_case("^draft", "draft-notes.md", true ; "caret prefix")]
#[test_case("draft", "draft-notes.md", true ; "implicit anchor")]
#[test_case("draft", "my-draft.md", false ; "no match after start")]
#[test_case(r".*\.tmp$", "a/b.tmp", true ; "full match with dot star")]
#[test_case(r"\.", ".hidden/x.md", true ; "hidden dir")]
#[test_case(r"\.", "a/.hidden", false ; "hidden file below root")]
#[test_case("(?i)readme", "README.md", true ; "inline case insensitive")]
fn test_regex_matching(pattern: &str, path: &str, expected: bool) {
    let regex = RegexPattern::new(pattern).unwrap();
    assert_eq!(regex.matches(path), expected, "pattern={pattern:?} path={path:?}");
}

#[test_case("(" ; "unclosed group")]
#[test_case("[a-" ; "unclosed class")]
#[test_case("*" ; "dangling repetition")]
fn test_invalid_regex(pattern: &str) {
    assert!(RegexPattern::new(pattern).is_err());
}

// =============================================================================
// Rule Order Tests
// =============================================================================

#[test_case("keep/a.tmp", true ; "include glob beats exclude glob")]
#[test_case("keep-me.tmp", true ; "include regex beats exclude glob")]
#[test_case("a.tmp", false ; "exclude glob")]
#[test_case("draft.md", false ; "exclude regex")]
#[test_case("index.md", true ; "default include")]
fn test_rule_order(path: &str, expected: bool) {
    let decider = Rules {
        globs: &["*.tmp"],
        regexes: &["draft"],
        include_globs: &["keep/*"],
        include_regexes: &["keep-"],
    }
    .decider();
    assert_eq!(decider.classify(path, &abs(path)), expected, "path={path:?}");
}
