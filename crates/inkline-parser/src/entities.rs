//! HTML entity decoding

use std::collections::HashMap;
use std::sync::LazyLock;

/// Common HTML entities mapping
static HTML_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    // Copyright, trademark, registered
    m.insert("&copy;", "©");
    m.insert("&trade;", "™");
    m.insert("&reg;", "®");
    // Common symbols
    m.insert("&amp;", "&");
    m.insert("&lt;", "<");
    m.insert("&gt;", ">");
    m.insert("&quot;", "\"");
    m.insert("&apos;", "'");
    m.insert("&nbsp;", " ");
    // Dashes and spaces
    m.insert("&mdash;", "—");
    m.insert("&ndash;", "–");
    m.insert("&hellip;", "…");
    // Arrows
    m.insert("&larr;", "←");
    m.insert("&rarr;", "→");
    m.insert("&uarr;", "↑");
    m.insert("&darr;", "↓");
    // Math
    m.insert("&times;", "×");
    m.insert("&divide;", "÷");
    m.insert("&plusmn;", "±");
    m.insert("&ne;", "≠");
    m.insert("&le;", "≤");
    m.insert("&ge;", "≥");
    m.insert("&infin;", "∞");
    // Currency
    m.insert("&euro;", "€");
    m.insert("&pound;", "£");
    m.insert("&yen;", "¥");
    m.insert("&cent;", "¢");
    // Other common
    m.insert("&deg;", "°");
    m.insert("&para;", "¶");
    m.insert("&sect;", "§");
    m.insert("&bull;", "•");
    m.insert("&middot;", "·");
    m.insert("&laquo;", "«");
    m.insert("&raquo;", "»");
    m.insert("&dagger;", "†");
    m.insert("&Dagger;", "‡");
    m.insert("&permil;", "‰");
    m.insert("&prime;", "′");
    m.insert("&Prime;", "″");
    m
});

/// Try to match an HTML entity (`&name;` or `&#NNN;`/`&#xHH;`) starting
/// at `chars[pos]` (which must be `&`). Returns the decoded
/// replacement and the index just past the consumed `;`.
///
/// Used by the inline formatter's single forward pass, which decodes
/// entities character-by-character rather than as a whole-string
/// rewrite.
pub fn match_entity(chars: &[char], pos: usize) -> Option<(String, usize)> {
    debug_assert_eq!(chars[pos], '&');

    let limit = chars.len().min(pos + 12);
    let end = (pos + 1..limit).find(|&i| chars[i] == ';')?;
    let entity: String = chars[pos..=end].iter().collect();

    if let Some(rep) = HTML_ENTITIES.get(entity.as_str()) {
        return Some(((*rep).to_string(), end + 1));
    }

    if let Some(num_str) = entity.strip_prefix("&#").and_then(|s| s.strip_suffix(';')) {
        let codepoint = if let Some(hex) = num_str.strip_prefix('x').or_else(|| num_str.strip_prefix('X')) {
            u32::from_str_radix(hex, 16).ok()
        } else {
            num_str.parse::<u32>().ok()
        };
        if let Some(c) = codepoint.and_then(char::from_u32) {
            return Some((c.to_string(), end + 1));
        }
    }

    None
}

/// Decode HTML entities in a string
pub fn decode_html_entities(text: &str) -> String {
    let mut result = text.to_string();

    // Replace named entities
    for (entity, replacement) in HTML_ENTITIES.iter() {
        result = result.replace(entity, replacement);
    }

    // Handle numeric entities like &#169; or &#x00A9;
    // Decimal: &#123;
    while let Some(start) = result.find("&#") {
        if let Some(end) = result[start..].find(';') {
            let entity = &result[start..start + end + 1];
            let num_str = &entity[2..entity.len() - 1];

            let codepoint = if num_str.starts_with('x') || num_str.starts_with('X') {
                // Hex: &#x00A9;
                u32::from_str_radix(&num_str[1..], 16).ok()
            } else {
                // Decimal: &#169;
                num_str.parse::<u32>().ok()
            };

            if let Some(cp) = codepoint {
                if let Some(c) = char::from_u32(cp) {
                    result = result.replace(entity, &c.to_string());
                    continue;
                }
            }
        }
        // If we couldn't parse it, break to avoid infinite loop
        break;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        assert_eq!(decode_html_entities("&copy;"), "©");
        assert_eq!(decode_html_entities("&trade;"), "™");
        assert_eq!(decode_html_entities("&reg;"), "®");
        assert_eq!(decode_html_entities("&amp;"), "&");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_html_entities("&#169;"), "©");
        assert_eq!(decode_html_entities("&#x00A9;"), "©");
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            decode_html_entities("Copyright &copy; 2024"),
            "Copyright © 2024"
        );
    }

    #[test]
    fn match_entity_named() {
        let chars: Vec<char> = "&copy; 2024".chars().collect();
        let (rep, end) = match_entity(&chars, 0).unwrap();
        assert_eq!(rep, "©");
        assert_eq!(end, 6);
    }

    #[test]
    fn match_entity_numeric_decimal_and_hex() {
        let dec: Vec<char> = "&#169;x".chars().collect();
        assert_eq!(match_entity(&dec, 0), Some(("©".to_string(), 6)));

        let hex: Vec<char> = "&#x00A9;x".chars().collect();
        assert_eq!(match_entity(&hex, 0), Some(("©".to_string(), 8)));
    }

    #[test]
    fn match_entity_unknown_returns_none() {
        let chars: Vec<char> = "&nosuchentity; rest".chars().collect();
        assert_eq!(match_entity(&chars, 0), None);
    }

    #[test]
    fn match_entity_no_semicolon_returns_none() {
        let chars: Vec<char> = "& just an ampersand".chars().collect();
        assert_eq!(match_entity(&chars, 0), None);
    }
}
