#[cfg(test)]
mod tests {
    use super::super::rewriter::{rewrite, BulkCodeRewriter};
    use crate::units::context::ConversionContext;
    use crate::units::error::ConversionError;
    use crate::units::formatter::Formatter;
    use crate::units::types::Unit;

    fn ctx() -> ConversionContext {
        ConversionContext::new().with_root_font_size(16.0)
    }

    #[test]
    fn test_rewrite_px_to_rem() {
        let result = rewrite(
            ".a { width: 32px; margin: 4px; }",
            Unit::Px,
            Unit::Rem,
            &ctx(),
        )
        .unwrap();
        assert_eq!(result, ".a { width: 2rem; margin: 0.25rem; }");
    }

    #[test]
    fn test_no_matching_tokens_is_identity() {
        let source = "color: red;";
        assert_eq!(rewrite(source, Unit::Px, Unit::Rem, &ctx()).unwrap(), source);

        let source = ".b { width: 50%; font-size: 1.5em; }";
        assert_eq!(rewrite(source, Unit::Px, Unit::Rem, &ctx()).unwrap(), source);
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(
            rewrite("10px solid", Unit::Px, Unit::Em, &ctx()).unwrap(),
            "0.63em solid"
        );
        assert_eq!(rewrite("210px", Unit::Px, Unit::Rem, &ctx()).unwrap(), "13.13rem");
        assert_eq!(rewrite("10px1", Unit::Px, Unit::Rem, &ctx()).unwrap(), "10px1");
        assert_eq!(rewrite("10pxx", Unit::Px, Unit::Rem, &ctx()).unwrap(), "10pxx");
        assert_eq!(rewrite(".col-10px", Unit::Px, Unit::Rem, &ctx()).unwrap(), ".col-10px");
        assert_eq!(rewrite("h1px", Unit::Px, Unit::Rem, &ctx()).unwrap(), "h1px");
    }

    #[test]
    fn test_unit_substrings_do_not_collide() {
        // `em` must not match inside `rem`, `in` must not match inside `index`
        assert_eq!(
            rewrite("a: 2rem; b: 1em;", Unit::Em, Unit::Px, &ctx()).unwrap(),
            "a: 2rem; b: 16px;"
        );
        assert_eq!(
            rewrite("z-index: 10; width: 1in;", Unit::In, Unit::Px, &ctx()).unwrap(),
            "z-index: 10; width: 96px;"
        );
        assert_eq!(
            rewrite("width: 10pc; height: 10pt;", Unit::Pc, Unit::Px, &ctx()).unwrap(),
            "width: 160px; height: 10pt;"
        );
    }

    #[test]
    fn test_signs_decimals_and_case() {
        assert_eq!(
            rewrite("margin: -8px .5px +24PX 1.5px;", Unit::Px, Unit::Rem, &ctx()).unwrap(),
            "margin: -0.5rem 0.03rem 1.5rem 0.09rem;"
        );
    }

    #[test]
    fn test_plus_sign_splits_tokens() {
        assert_eq!(
            rewrite("calc(1px+2px)", Unit::Px, Unit::Rem, &ctx()).unwrap(),
            "calc(0.06rem+0.13rem)"
        );
        // `-` continues the identifier, so `px-4px` is one unit name
        assert_eq!(rewrite("10px-4px", Unit::Px, Unit::Rem, &ctx()).unwrap(), "10px-4px");
        assert_eq!(rewrite("a-4px", Unit::Px, Unit::Rem, &ctx()).unwrap(), "a-4px");
    }

    #[test]
    fn test_non_ascii_identifiers() {
        assert_eq!(rewrite("é10px", Unit::Px, Unit::Rem, &ctx()).unwrap(), "é10px");
        assert_eq!(rewrite("10pxé", Unit::Px, Unit::Rem, &ctx()).unwrap(), "10pxé");
        assert_eq!(
            rewrite("10px é", Unit::Px, Unit::Rem, &ctx()).unwrap(),
            "0.63rem é"
        );
    }

    #[test]
    fn test_other_units_untouched() {
        let source = "@media (min-width: 768px) { .c { padding: 1em 32px; } }";
        assert_eq!(
            rewrite(source, Unit::Px, Unit::Rem, &ctx()).unwrap(),
            "@media (min-width: 48rem) { .c { padding: 1em 2rem; } }"
        );
    }

    #[test]
    fn test_comments_are_rewritten_too() {
        assert_eq!(
            rewrite("/* 16px grid */", Unit::Px, Unit::Rem, &ctx()).unwrap(),
            "/* 1rem grid */"
        );
    }

    #[test]
    fn test_stats() {
        let rewriter = BulkCodeRewriter::new(Unit::Px, Unit::Rem);
        let outcome = rewriter
            .rewrite_with_stats(".col-10px { width: 16px; } h1px", &ctx())
            .unwrap();
        assert_eq!(outcome.output, ".col-10px { width: 1rem; } h1px");
        assert_eq!(outcome.replacements, 1);
        assert_eq!(outcome.skipped, 2);
    }

    #[test]
    fn test_missing_context_aborts() {
        let err = rewrite("height: 50vh;", Unit::Vh, Unit::Px, &ctx()).unwrap_err();
        assert!(matches!(err, ConversionError::MissingContext { unit: Unit::Vh, .. }));

        // Nothing to convert, nothing to fail on
        assert_eq!(
            rewrite("height: 50px;", Unit::Vh, Unit::Px, &ctx()).unwrap(),
            "height: 50px;"
        );
    }

    #[test]
    fn test_viewport_rewrite() {
        let ctx = ctx().with_viewport(1920.0, 1080.0);
        assert_eq!(
            rewrite("width: 50vw; height: 10vh;", Unit::Vw, Unit::Px, &ctx).unwrap(),
            "width: 960px; height: 10vh;"
        );
    }

    #[test]
    fn test_custom_precision() {
        let rewriter = BulkCodeRewriter::new(Unit::Px, Unit::Rem)
            .with_formatter(Formatter::new().with_precision(Unit::Rem, 4));
        assert_eq!(rewriter.rewrite("top: 5px;", &ctx()).unwrap(), "top: 0.3125rem;");
        assert_eq!(rewriter.from_unit(), Unit::Px);
        assert_eq!(rewriter.to_unit(), Unit::Rem);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(rewrite("", Unit::Px, Unit::Rem, &ctx()).unwrap(), "");
    }
}
