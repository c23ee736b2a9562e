//! Self checks shipped with the runner binary.
//!
//! Each entry exercises the tokenizer or the selector on a fixed input, so
//! `SURTUR_TESTS='*' surtur_tests` doubles as a smoke test of the crate.

use crate::lexer::split_into_tokens;
use crate::registry::Registry;
use crate::selector::Selector;
use anyhow::ensure;
use std::io::Write;

fn expect_tokens(out: &mut dyn Write, source: &str, expected: &[&str]) -> anyhow::Result<()> {
    let tokens = split_into_tokens(source);
    writeln!(out, "  {:?} -> {:?}", source, tokens)?;
    ensure!(
        tokens == expected,
        "tokens of {:?} are {:?}, expected {:?}",
        source,
        tokens,
        expected
    );
    Ok(())
}

/// Registry with all built-in checks, in the order they run.
pub fn self_checks() -> Registry {
    let mut registry = Registry::new();

    registry
        .register("tokenize_mixed_separators", |out| {
            expect_tokens(out, "foo,bar_baz;42qux", &["foo", "bar_baz", "42qux"])
        })
        .register("tokenize_padded", |out| {
            expect_tokens(out, "  foo  ", &["foo"])
        })
        .register("tokenize_empty", |out| expect_tokens(out, "", &[]))
        .register("tokenize_separators_only", |out| {
            for source in [" ", ",;", "--..!!", "\t\n"] {
                expect_tokens(out, source, &[])?;
            }
            Ok(())
        })
        .register("tokenize_join_roundtrip", |out| {
            let names = ["alpha", "beta_2", "_gamma", "7"];
            for sep in [",", " ", ";", "/"] {
                expect_tokens(out, &names.join(sep), &names)?;
            }
            Ok(())
        })
        .register("selector_unset", |_| {
            let selector = Selector::new(None);
            ensure!(!selector.is_enabled("foo"), "unset selection enabled foo");
            Ok(())
        })
        .register("selector_wildcard", |_| {
            for raw in ["*", "*, foo"] {
                let selector = Selector::new(Some(raw));
                ensure!(selector.is_enabled("anything"), "{:?} is not a wildcard", raw);
            }
            Ok(())
        })
        .register("selector_exact_match", |_| {
            let selector = Selector::new(Some("foo,bar_baz;42qux"));
            ensure!(selector.is_enabled("bar_baz"), "bar_baz is not selected");
            ensure!(!selector.is_enabled("bar"), "bar matched partially");
            Ok(())
        })
        .register("selector_empty_value", |_| {
            let selector = Selector::new(Some(""));
            ensure!(!selector.is_enabled("foo"), "empty selection enabled foo");
            Ok(())
        });

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Environment;
    use crate::runner::Runner;
    use crate::selector::SELECTOR_VAR;

    #[test]
    fn test_all_self_checks_pass() {
        let mut env = Environment::default();
        env.set_var(SELECTOR_VAR, "*");

        let registry = self_checks();
        let total = registry.len();
        let runner = Runner::new(env, registry).with_color(false);

        let mut out = Vec::new();
        let summary = runner.run(&mut out).unwrap();

        assert_eq!(summary.failure, None, "{}", String::from_utf8_lossy(&out));
        assert_eq!(summary.passed, total);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_self_check_names_are_unique_tokens() {
        let registry = self_checks();
        let names: Vec<&str> = registry.names().collect();
        for name in &names {
            assert_eq!(split_into_tokens(name), vec![name.to_string()]);
        }
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
    }

    #[test]
    fn test_expect_tokens_reports_mismatch() {
        let mut out = Vec::new();
        let err = expect_tokens(&mut out, "a b", &["a"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "tokens of \"a b\" are [\"a\", \"b\"], expected [\"a\"]"
        );
        assert_eq!(String::from_utf8(out).unwrap(), "  \"a b\" -> [\"a\", \"b\"]\n");
    }
}
