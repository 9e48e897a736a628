//! Integration tests for termdocs.
//!
//! Tests term table loading, resolution and link rewriting through the
//! public API.

mod common;

use anyhow::Result;
use termdocs::{LinkRewriter, TermResolver, TermTable};

fn sample_resolver() -> Result<TermResolver> {
    let table = TermTable::from_json(common::SAMPLE_TERMS)?;
    TermResolver::new(&table)
}

/// Tests every pattern resolves in singular, plural and rooted forms.
#[test]
fn test_exact_patterns_resolve_in_all_forms() -> Result<()> {
    // Arrange
    let resolver = sample_resolver()?;
    let cases = [
        ("alarm", "/alarms"),
        ("alarms/custom", "/alarms/custom"),
        ("custom-alarm", "/alarms/custom"),
        ("resource", "/resources"),
    ];

    for (pattern, expected) in cases {
        // Act
        let singular = resolver.resolve(&format!("t/{}", pattern));
        let plural = resolver.resolve(&format!("t/{}s", pattern));
        let rooted = resolver.resolve(&format!("/t/{}", pattern));

        // Assert
        assert_eq!(singular, expected, "t/{}", pattern);
        assert_eq!(plural, expected, "t/{}s", pattern);
        assert_eq!(rooted, singular, "/t/{}", pattern);
    }

    Ok(())
}

/// Tests wildcard term forwards trailing path.
#[test]
fn test_wildcard_suffix_forwarded() -> Result<()> {
    // Arrange
    let resolver = sample_resolver()?;

    // Act & Assert
    assert_eq!(resolver.resolve("t/resource/hosts"), "/resources/hosts");
    assert_eq!(resolver.resolve("t/resources/pods/list"), "/resources/pods/list");
    assert_eq!(resolver.resolve("t/resourceful/x"), "t/resourceful/x");

    Ok(())
}

/// Tests exact multi segment term wins over wildcard prefix.
#[test]
fn test_exact_before_wildcard() -> Result<()> {
    // Arrange
    let table = TermTable::from_json(
        r#"{ "terms": [
            { "path": "everything", "patterns": ["alarm"], "wildcard": true },
            { "path": "alarms/custom", "patterns": ["alarm/custom"], "wildcard": false }
        ] }"#,
    )?;
    let resolver = TermResolver::new(&table)?;

    // Act
    let result = resolver.resolve("t/alarm/custom");

    // Assert
    assert_eq!(result, "/alarms/custom");
    assert_eq!(resolver.resolve("t/alarm/other"), "/everything/other");

    Ok(())
}

/// Tests term with only empty patterns never matches.
#[test]
fn test_empty_pattern_term_excluded() -> Result<()> {
    // Arrange
    let resolver = sample_resolver()?;

    // Act & Assert
    assert_eq!(resolver.term_count(), 3, "ghost term should be excluded");
    assert_eq!(resolver.resolve("t/"), "t/");
    assert_eq!(resolver.resolve("t//anything"), "t//anything");

    Ok(())
}

/// Tests document rewrite followed by second rewrite is stable.
#[test]
fn test_document_rewrite_idempotent() -> Result<()> {
    // Arrange
    let resolver = sample_resolver()?;
    let rewriter = LinkRewriter::new(&resolver, "https://docs.example.com");
    let document = "\
# Custom alarms

A [custom alarm](t/custom-alarms) watches a [host](t/resource/hosts).
See the [guide](https://example.com/guide) or an [unknown](t/nothing).
";

    // Act
    let (once, report) = rewriter.rewrite_with_report(document);
    let twice = rewriter.rewrite(&once);

    // Assert
    assert!(once.contains("[custom alarm](https://docs.example.com/alarms/custom)"));
    assert!(once.contains("[host](https://docs.example.com/resources/hosts)"));
    assert!(once.contains("[guide](https://example.com/guide)"));
    assert!(once.contains("[unknown](t/nothing)"));
    assert_eq!(report.unresolved, vec!["t/nothing".to_string()]);
    assert_eq!(once, twice);

    Ok(())
}

/// Tests malformed term table fails at load.
#[test]
fn test_malformed_table_rejected() {
    // Arrange
    let documents = [
        r#"{ "terms": [ { "patterns": ["a"] } ] }"#,
        r#"{ "terms": [ { "path": "a", "patterns": "a" } ] }"#,
        r#"{ "terms": [ { "path": "a", "patterns": [1] } ] }"#,
        r#"{ "terms": [ { "path": "a", "patterns": ["a"], "wildcard": "yes" } ] }"#,
        r#"{ "terms": {} }"#,
    ];

    for json in documents {
        // Act
        let result = TermTable::from_json(json);

        // Assert
        assert!(result.is_err(), "Should reject: {}", json);
    }
}
