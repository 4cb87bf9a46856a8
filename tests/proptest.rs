//! Property-based tests for inkline-rs.
//!
//! These generate random markdown-shaped input and verify the writer
//! never panics, always produces valid UTF-8, and honors wrap width.

use proptest::prelude::*;

use inkline_config::{Options, Theme};
use inkline_render::render_to_vec;

/// Generate a random markdown-like string.
fn markdown_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]*").unwrap()
}

/// Generate a random line of text.
fn text_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E]{0,200}").unwrap()
}

/// Generate a heading.
fn heading() -> impl Strategy<Value = String> {
    (1..=6usize, text_line()).prop_map(|(level, text)| format!("{} {}", "#".repeat(level), text))
}

/// Generate a code block.
fn code_block() -> impl Strategy<Value = String> {
    (text_line(), prop::collection::vec(text_line(), 0..10)).prop_map(|(lang, lines)| {
        let lang = if lang.is_empty() {
            String::new()
        } else {
            lang.split_whitespace().next().unwrap_or("").to_string()
        };
        format!("```{}\n{}\n```", lang, lines.join("\n"))
    })
}

/// Generate a list.
fn list() -> impl Strategy<Value = String> {
    prop::collection::vec(text_line(), 1..10).prop_map(|items| {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn mono_options(width: usize) -> Options {
    Options {
        console_width: width,
        enable_colors: false,
        strip_html: true,
        use_hyperlinks: false,
        theme: Theme::monochrome(),
    }
}

// =============================================================================
// Writer property tests
// =============================================================================

proptest! {
    /// The writer should never panic on arbitrary input.
    #[test]
    fn writer_never_panics(input in markdown_string()) {
        let result = std::panic::catch_unwind(|| render_to_vec(&input, mono_options(80)));
        prop_assert!(result.is_ok(), "writer panicked on input");
    }

    /// The writer should produce valid UTF-8 output.
    #[test]
    fn writer_produces_valid_utf8(input in markdown_string()) {
        let bytes = render_to_vec(&input, mono_options(80)).unwrap();
        prop_assert!(String::from_utf8(bytes).is_ok(), "writer produced invalid UTF-8");
    }

    /// The writer should handle different widths without panicking.
    #[test]
    fn writer_handles_widths(input in text_line(), width in 20..200usize) {
        let bytes = render_to_vec(&input, mono_options(width)).unwrap();
        prop_assert!(String::from_utf8(bytes).is_ok());
    }

    /// Headings of any level/text should render without panicking.
    #[test]
    fn writer_handles_headings(h in heading()) {
        let _ = render_to_vec(&h, mono_options(80)).unwrap();
    }

    /// Code blocks of arbitrary language/content should render without panicking.
    #[test]
    fn writer_handles_code_blocks(code in code_block()) {
        let _ = render_to_vec(&code, mono_options(80)).unwrap();
    }

    /// Lists of arbitrary items should render without panicking.
    #[test]
    fn writer_handles_lists(list in list()) {
        let _ = render_to_vec(&list, mono_options(80)).unwrap();
    }
}

// =============================================================================
// ANSI utility property tests
// =============================================================================

proptest! {
    /// visible_length should never panic.
    #[test]
    fn visible_length_never_panics(input in markdown_string()) {
        let _ = inkline_ansi::utils::visible_length(&input);
    }

    /// visible should never panic.
    #[test]
    fn visible_never_panics(input in markdown_string()) {
        let _ = inkline_ansi::utils::visible(&input);
    }
}

// =============================================================================
// Color property tests
// =============================================================================

proptest! {
    /// HSV to RGB conversion should never panic and always yield valid bytes.
    #[test]
    fn hsv_produces_valid_rgb(h in 0.0f64..1.0, s in 0.0f64..1.0, v in 0.0f64..1.0) {
        use inkline_ansi::color::hsv_to_rgb;
        let (r, g, b) = hsv_to_rgb(h, s, v);
        let _ = (r, g, b);
    }

    /// Hex parsing should handle valid hex colors.
    #[test]
    fn hex2rgb_handles_valid_hex(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        use inkline_ansi::color::hex2rgb;

        let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
        let result = hex2rgb(&hex);

        prop_assert!(result.is_some());
        let (pr, pg, pb) = result.unwrap();
        prop_assert_eq!(pr, r);
        prop_assert_eq!(pg, g);
        prop_assert_eq!(pb, b);
    }
}
