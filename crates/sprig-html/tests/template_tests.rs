//! Integration tests for the template helper.

use sprig_html::{Attribute, Interpolation, LexError, Token, render, tokenize_template};

#[test]
fn test_render_interleaves_values() {
    let markup = render(
        &["<p class=\"", "\">", "</p>"],
        &[
            Interpolation::from("payment-value"),
            Interpolation::from("N/D"),
        ],
    );
    assert_eq!(markup, "<p class=\"payment-value\">N/D</p>");
}

#[test]
fn test_render_skips_empty_and_absent_values() {
    let markup = render(
        &["<span>", "|", "|", "</span>"],
        &[
            Interpolation::from(""),
            Interpolation::Absent,
            Interpolation::List(Vec::new()),
        ],
    );
    assert_eq!(markup, "<span>||</span>");
}

#[test]
fn test_render_joins_lists() {
    let options: Vec<String> = ["january", "february"]
        .iter()
        .map(|month| format!("<option>{month}</option>"))
        .collect();
    let markup = render(&["<select>", "</select>"], &[options.into()]);
    assert_eq!(
        markup,
        "<select><option>january</option><option>february</option></select>"
    );
}

#[test]
fn test_render_ignores_extra_values() {
    let markup = render(&["a", "b"], &["1".into(), "2".into(), "3".into()]);
    assert_eq!(markup, "a1b2");
}

#[test]
fn test_render_without_values() {
    assert_eq!(render(&["<br/>"], &[]), "<br/>");
    assert_eq!(render(&[], &["x".into()]), "");
}

#[test]
fn test_tokenize_template() {
    let tokens = tokenize_template(&["<span id=\"", "\"></span>"], &["Advance-Date".into()]);
    assert_eq!(
        tokens,
        Ok(vec![
            Token::StartTag {
                name: "span".to_string(),
                self_closing: false,
                attributes: vec![Attribute::new("id".to_string(), "advance-date".to_string())],
            },
            Token::EndTag {
                name: "span".to_string()
            },
        ])
    );
}

#[test]
fn test_tokenize_template_reports_errors() {
    let result = tokenize_template(&["<", ">"], &["1".into()]);
    assert!(matches!(result, Err(LexError::InvalidTagStart { found: '1', .. })));
}
