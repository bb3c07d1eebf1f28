//! Tests for the include/exclude decider

use docs_exclude::core::models::Decision;

use crate::common::{FakeOracle, Rules, abs};

fn classify(rules: &Rules<'_>, path: &str) -> bool {
    rules.decider().classify(path, &abs(path))
}

// =============================================================================
// RULE ORDER
// =============================================================================

#[test]
fn test_no_rules_keeps_everything() {
    let rules = Rules::default();
    for path in ["index.md", "a/b/c.tmp", ".hidden", ""] {
        assert!(classify(&rules, path), "{path:?} should be kept");
    }
}

#[test]
fn test_exclude_glob_scenario() {
    let rules = Rules {
        globs: &["*.tmp"],
        ..Rules::default()
    };
    assert!(!classify(&rules, "notes.tmp"));
    assert!(classify(&rules, "notes.md"));
}

#[test]
fn test_include_glob_short_circuits_exclude() {
    let rules = Rules {
        globs: &["*.tmp"],
        include_globs: &["keep/*.tmp"],
        ..Rules::default()
    };
    assert!(classify(&rules, "keep/x.tmp"));
    assert!(!classify(&rules, "drop/x.tmp"));
}

#[test]
fn test_include_regex_short_circuits_exclude_regex() {
    let rules = Rules {
        regexes: &["draft"],
        include_regexes: &["draft-final"],
        ..Rules::default()
    };
    assert!(classify(&rules, "draft-final.md"));
    assert!(!classify(&rules, "draft-1.md"));
}

#[test]
fn test_exclude_regex_needs_match_at_start() {
    let rules = Rules {
        regexes: &["^draft"],
        ..Rules::default()
    };
    assert!(!classify(&rules, "draft-notes.md"));
    assert!(classify(&rules, "my-draft.md"));
}

#[test]
fn test_explain_names_the_first_rule() {
    let rules = Rules {
        globs: &["*.md", "drafts/*"],
        regexes: &["drafts"],
        include_regexes: &["drafts/keep"],
        ..Rules::default()
    };
    let decider = rules.decider();

    assert_eq!(
        decider.explain("drafts/a.md", &abs("drafts/a.md")),
        Decision::ExcludedByGlob("*.md".into())
    );
    assert_eq!(
        decider.explain("drafts/a.txt", &abs("drafts/a.txt")),
        Decision::ExcludedByGlob("drafts/*".into())
    );
    assert_eq!(
        decider.explain("drafts/keep.md", &abs("drafts/keep.md")),
        Decision::IncludedByRegex("drafts/keep".into())
    );
}

// =============================================================================
// IGNORE ORACLE
// =============================================================================

#[test]
fn test_ignored_file_is_dropped() {
    let oracle = FakeOracle::ignoring(&["build/out.md"]);
    let decider = Rules::default().decider().with_ignore_oracle(oracle);

    assert_eq!(
        decider.explain("build/out.md", &abs("build/out.md")),
        Decision::IgnoredByVcs
    );
    assert!(decider.classify("index.md", &abs("index.md")));
}

#[test]
fn test_oracle_only_sees_included_files() {
    let oracle = FakeOracle::new();
    let decider = Rules {
        globs: &["*.tmp"],
        ..Rules::default()
    }
    .decider()
    .with_ignore_oracle(oracle.clone());

    assert!(!decider.classify("a.tmp", &abs("a.tmp")));
    assert!(decider.classify("b.md", &abs("b.md")));
    assert_eq!(oracle.calls(), [abs("b.md")]);
}

#[test]
fn test_oracle_sees_absolute_path_not_relative() {
    let oracle = FakeOracle::new();
    let decider = Rules::default().decider().with_ignore_oracle(oracle.clone());

    let _ = decider.classify("guide/setup.md", &abs("guide/setup.md"));
    assert_eq!(oracle.calls(), [abs("guide/setup.md")]);
}

#[test]
fn test_include_override_still_subject_to_oracle() {
    let oracle = FakeOracle::ignoring(&["keep/x.tmp"]);
    let decider = Rules {
        globs: &["*.tmp"],
        include_globs: &["keep/*"],
        ..Rules::default()
    }
    .decider()
    .with_ignore_oracle(oracle);

    assert!(!decider.classify("keep/x.tmp", &abs("keep/x.tmp")));
}

// =============================================================================
// SEPARATOR NORMALIZATION
// =============================================================================

#[test]
fn test_backslash_path_kept_by_include_glob_after_normalizing() {
    let decider = Rules {
        include_globs: &["a/*.md"],
        ..Rules::default()
    }
    .decider_with_separator('\\');

    assert_eq!(
        decider.explain("a\\b.md", &abs("a/b.md")),
        Decision::IncludedByGlob("a/*.md".into())
    );
}

#[test]
fn test_backslash_path_dropped_by_exclude_glob_after_normalizing() {
    let decider = Rules {
        globs: &["a/*.md"],
        ..Rules::default()
    }
    .decider_with_separator('\\');

    // The raw form matches nothing, the normalized form is excluded
    assert_eq!(decider.decide("a\\b.md"), Decision::Default);
    assert!(!decider.classify("a\\b.md", &abs("a/b.md")));
}

#[test]
fn test_both_forms_must_include() {
    // Raw form excluded by a backslash-aware glob, normalized form untouched
    let decider = Rules {
        globs: &["a\\*"],
        ..Rules::default()
    }
    .decider_with_separator('\\');

    assert_eq!(decider.decide("a/b.md"), Decision::Default);
    assert!(!decider.classify("a\\b.md", &abs("a/b.md")));
}

#[test]
fn test_normalization_happens_before_oracle() {
    let oracle = FakeOracle::new();
    let decider = Rules {
        globs: &["a/*.md"],
        ..Rules::default()
    }
    .decider_with_separator('\\')
    .with_ignore_oracle(oracle.clone());

    assert!(!decider.classify("a\\b.md", &abs("a/b.md")));
    assert!(oracle.calls().is_empty());
}

#[test]
fn test_slash_separator_evaluates_once() {
    let decider = Rules {
        globs: &["a/*.md"],
        ..Rules::default()
    }
    .decider_with_separator('/');

    // On `/` platforms a backslash is an ordinary filename character
    assert!(decider.classify("a\\b.md", &abs("a\\b.md")));
}
