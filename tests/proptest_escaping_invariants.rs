//! Property tests: user text never reaches the markup unescaped, and rendering is pure.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use wallkit::{
    class_list, escape_html, DemoComponent, DemoComponentProps, DemoHeader, DemoHeaderProps,
    DemoSection, DemoSectionProps, DemoStats, DemoStatsProps, Render,
};

/// Text holding `<name"`, a sequence no emitted tag contains, so the raw input
/// can only show up in the output if it was emitted unencoded.
fn hostile_text() -> impl Strategy<Value = String> {
    ("[a-z &'/=]{0,16}", "[a-z]{0,6}", "[a-z <>&\"'/=]{0,16}")
        .prop_map(|(head, name, tail)| format!("{head}<{name}\"{tail}"))
}

fn assert_escaped_only(raw: &str, html: &str) -> Result<(), TestCaseError> {
    prop_assert!(html.contains(&escape_html(raw)), "missing escaped text in {}", html);
    prop_assert!(!html.contains(raw), "raw text leaked into {}", html);
    Ok(())
}

proptest! {
    #[test]
    fn header_text_is_escaped(title in hostile_text(), subtitle in hostile_text()) {
        let html = DemoHeader::new(DemoHeaderProps {
            title: title.clone(),
            subtitle: subtitle.clone(),
            icon: None,
        })
        .unwrap()
        .to_string();
        assert_escaped_only(&title, &html)?;
        assert_escaped_only(&subtitle, &html)?;
        prop_assert_eq!(html.matches('<').count(), 6);
    }

    #[test]
    fn demo_card_code_is_escaped(title in hostile_text(), code in hostile_text()) {
        let card = DemoComponent::new(DemoComponentProps {
            title: title.clone(),
            code: Some(code.clone()),
            ..Default::default()
        })
        .unwrap();
        let html = card.to_string();
        assert_escaped_only(&title, &html)?;
        assert_escaped_only(code.trim(), &html)?;
        prop_assert!(!html.contains("<script"));
    }

    #[test]
    fn escape_output_has_no_special_characters(text in ".{0,64}") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn class_list_has_no_blank_tokens(tokens in prop::collection::vec("[a-z-]{0,8}| ", 0..8)) {
        let classes = class_list(&tokens);
        prop_assert!(!classes.starts_with(' '));
        prop_assert!(!classes.ends_with(' '));
        prop_assert!(!classes.contains("  "));
        let kept = tokens.iter().filter(|t| !t.trim().is_empty()).count();
        prop_assert_eq!(classes.split(' ').filter(|t| !t.is_empty()).count(), kept);
    }

    #[test]
    fn stats_progress_is_bounded(total in 0u32..10_000, ratio in 0.0f64..=1.0) {
        let stable = (f64::from(total) * ratio).floor() as u32;
        let stats = DemoStats::new(DemoStatsProps {
            total,
            stable,
            ..Default::default()
        })
        .unwrap();
        prop_assert!(stats.progress() <= 100);
        if total == 0 {
            prop_assert_eq!(stats.progress(), 0);
        }
    }

    #[test]
    fn stats_reject_stable_above_total(total in 0u32..1_000, extra in 1u32..100) {
        let result = DemoStats::new(DemoStatsProps {
            total,
            stable: total + extra,
            ..Default::default()
        });
        prop_assert!(result.is_err());
    }

    #[test]
    fn rendering_is_idempotent(title in hostile_text(), description in hostile_text()) {
        let section = DemoSection::new(DemoSectionProps {
            title,
            description: Some(description),
            ..Default::default()
        })
        .unwrap();
        prop_assert_eq!(section.render(), section.render());
        prop_assert_eq!(section.to_string(), section.render().into_string());
    }
}
