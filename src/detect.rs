//! Feature-detection snippet for locale polyfills
//!
//! The snippet is emitted as `detect.js` and evaluated by the polyfill
//! service, never by this tool. It is truthy when the environment ships
//! `Intl.DisplayNames` with native data for the locale but still has the
//! ICU bug where region names echo the region code.

/// File name of the detection snippet inside a locale directory
pub const DETECT_FILE_NAME: &str = "detect.js";

/// Build the detection snippet for a locale
///
/// `locale` is inserted unescaped into a single-quoted JavaScript string, so
/// callers must only pass validated locale identifiers.
pub fn detect_snippet(locale: &str) -> String {
    format!(
        "'Intl' in self &&
Intl.DisplayNames &&
Intl.DisplayNames.supportedLocalesOf &&
Intl.DisplayNames.supportedLocalesOf('{locale}').length === 1 &&
(function hasMissingICUBug() {{
\tif (Intl.DisplayNames) {{
\t\tconst regionNames = new Intl.DisplayNames(['en'], {{type: 'region'}});
\t\treturn regionNames.of('CA') === 'CA';
\t}}
\treturn false;
}})()"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_quoted_once() {
        let snippet = detect_snippet("fr");
        assert_eq!(snippet.matches("'fr'").count(), 1);
        assert!(snippet.contains("supportedLocalesOf('fr').length === 1"));
    }

    #[test]
    fn test_region_locale() {
        let snippet = detect_snippet("fr-CA");
        assert_eq!(snippet.matches("fr-CA").count(), 1);
        assert!(snippet.contains("supportedLocalesOf('fr-CA')"));
    }

    #[test]
    fn test_bug_check_is_locale_independent() {
        let bug_check = "const regionNames = new Intl.DisplayNames(['en'], {type: 'region'});\n\t\treturn regionNames.of('CA') === 'CA';";
        assert!(detect_snippet("de").contains(bug_check));
        assert!(detect_snippet("ja").contains(bug_check));
    }

    #[test]
    fn test_capability_checks_in_order() {
        let snippet = detect_snippet("de");
        let global = snippet.find("'Intl' in self").unwrap();
        let api = snippet.find("Intl.DisplayNames &&").unwrap();
        let query = snippet.find("Intl.DisplayNames.supportedLocalesOf &&").unwrap();
        let bug_fn = snippet.find("hasMissingICUBug").unwrap();
        assert!(global < api && api < query && query < bug_fn);
        assert!(snippet.ends_with("})()"));
    }

    #[test]
    fn test_only_locale_argument_varies() {
        let de = detect_snippet("de");
        let fr = detect_snippet("fr");
        assert_eq!(de.replace("'de'", "'fr'"), fr);
    }
}
