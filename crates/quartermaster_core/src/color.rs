//! Role color presets and resolution.

use quartermaster_error::{ProvisionError, ProvisionResult};

/// Discord's default role colors, offered as the `rolecolor` choice list.
///
/// Values use the same `0xRRGGBB` string form the platform delivers back
/// when a choice is selected.
pub const ROLE_COLOR_PRESETS: [(&str, &str); 25] = [
    ("Aqua", "0x1abc9c"),
    ("Green", "0x57f287"),
    ("Blue", "0x3498db"),
    ("Yellow", "0xfee75c"),
    ("LuminousVividPink", "0xe91e63"),
    ("Fuchsia", "0xeb459e"),
    ("Gold", "0xf1c40f"),
    ("Orange", "0xe67e22"),
    ("Red", "0xed4245"),
    ("Grey", "0x95a5a6"),
    ("Navy", "0x34495e"),
    ("DarkAqua", "0x11806a"),
    ("DarkGreen", "0x1f8b4c"),
    ("DarkBlue", "0x206694"),
    ("DarkPurple", "0x71368a"),
    ("DarkVividPink", "0xad1457"),
    ("DarkGold", "0xc27c0e"),
    ("DarkOrange", "0xa84300"),
    ("DarkRed", "0x992d22"),
    ("DarkerGrey", "0x7f8c8d"),
    ("LightGrey", "0xbcc0c0"),
    ("DarkNavy", "0x2c3e50"),
    ("Blurple", "0x5865f2"),
    ("Greyple", "0x99aab5"),
    ("DarkButNotBlack", "0x2c2f33"),
];

/// Parse a `0xRRGGBB` or `#RRGGBB` color string into a 24-bit value.
///
/// # Errors
///
/// Returns a validation error when the string is not exactly six hex
/// digits after the prefix.
#[track_caller]
pub fn parse_color(s: &str) -> ProvisionResult<u32> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('#'))
        .unwrap_or(trimmed);

    if digits.len() != 6 {
        return Err(ProvisionError::validation(format!(
            "'{trimmed}' is not a color code like 0x1abc9c"
        )));
    }

    u32::from_str_radix(digits, 16).map_err(|_| {
        ProvisionError::validation(format!("'{trimmed}' is not a color code like 0x1abc9c"))
    })
}

/// Resolve the role color precedence: an explicit custom hex code
/// overrides a preset choice; neither set means the platform default.
///
/// # Errors
///
/// Returns a validation error when the winning string fails to parse.
#[track_caller]
pub fn resolve_role_color(
    custom: Option<&str>,
    preset: Option<&str>,
) -> ProvisionResult<Option<u32>> {
    match custom.or(preset) {
        Some(code) => parse_color(code).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_and_bare_codes() {
        assert_eq!(parse_color("0x1abc9c").unwrap(), 0x1abc9c);
        assert_eq!(parse_color("#ED4245").unwrap(), 0xed4245);
        assert_eq!(parse_color("5865f2").unwrap(), 0x5865f2);
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(parse_color("0x12345").is_err());
        assert!(parse_color("0x1234567").is_err());
        assert!(parse_color("0xgggggg").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn custom_overrides_preset() {
        let resolved = resolve_role_color(Some("0xe67e22"), Some("0x1abc9c")).unwrap();
        assert_eq!(resolved, Some(0xe67e22));
    }

    #[test]
    fn preset_applies_when_no_custom() {
        let resolved = resolve_role_color(None, Some("0x1abc9c")).unwrap();
        assert_eq!(resolved, Some(0x1abc9c));
    }

    #[test]
    fn neither_set_means_no_color() {
        assert_eq!(resolve_role_color(None, None).unwrap(), None);
    }

    #[test]
    fn every_preset_parses() {
        for (name, code) in ROLE_COLOR_PRESETS {
            assert!(parse_color(code).is_ok(), "preset {name} failed to parse");
        }
    }
}
