//! Formation identifiers, the slot coordinate table and position labels.

pub mod coordinates;
pub mod position;

pub use coordinates::{
    formation_coordinates, is_supported_formation, lookup, supported_formations, FieldCoordinate,
    FormationSlots, DEFAULT_COORDINATE, FORMATIONS,
};
pub use position::{infer_position, PositionLabel};

/// Identifier used when a lineup carries no formation code.
pub const DEFAULT_FORMATION: &str = "4-3-3";

/// Expand a compact feed code into a formation identifier by placing a dash
/// between every character: "433" -> "4-3-3", "4231" -> "4-2-3-1".
pub fn expand_formation_code(code: &str) -> String {
    let mut id = String::with_capacity(code.len() * 2);
    for (i, ch) in code.chars().enumerate() {
        if i > 0 {
            id.push('-');
        }
        id.push(ch);
    }
    id
}

/// Leading-integer parse of a formation place string.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first
/// non-digit, so "7", " 7" and "7th" all yield 7. Returns `None` when no
/// digits are present. Only decimal is understood: "0x5" yields 0, not 5.
pub fn parse_slot(place: &str) -> Option<i64> {
    let s = place.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_formation_code() {
        assert_eq!(expand_formation_code("433"), "4-3-3");
        assert_eq!(expand_formation_code("4231"), "4-2-3-1");
        assert_eq!(expand_formation_code("4"), "4");
        assert_eq!(expand_formation_code(""), "");
    }

    #[test]
    fn test_parse_slot() {
        assert_eq!(parse_slot("1"), Some(1));
        assert_eq!(parse_slot("11"), Some(11));
        assert_eq!(parse_slot("  9"), Some(9));
        assert_eq!(parse_slot("05"), Some(5));
        assert_eq!(parse_slot("7th"), Some(7));
        assert_eq!(parse_slot("-3"), Some(-3));
        assert_eq!(parse_slot(""), None);
        assert_eq!(parse_slot("GK"), None);
        assert_eq!(parse_slot("-"), None);
    }

    #[test]
    fn test_parse_slot_is_decimal_only() {
        assert_eq!(parse_slot("0x5"), Some(0));
        assert_eq!(crate::models::Player::new("p", "0x5").slot(), None);
    }
}
