// src/generators/charset.rs

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*(),.?\":{}|<>";

/// The four classes in draw order.
pub const CLASSES: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL];

pub const ALPHABET_LEN: usize = UPPERCASE.len() + LOWERCASE.len() + DIGITS.len() + SPECIAL.len();

/// Uppercase, lowercase, digits, then specials.
pub static ALPHABET: [u8; ALPHABET_LEN] = combined();

const fn combined() -> [u8; ALPHABET_LEN] {
    let mut out = [0u8; ALPHABET_LEN];
    let mut pos = 0;
    let mut class = 0;
    while class < CLASSES.len() {
        let chars = CLASSES[class];
        let mut i = 0;
        while i < chars.len() {
            out[pos] = chars[i];
            pos += 1;
            i += 1;
        }
        class += 1;
    }
    out
}

pub fn is_special(c: char) -> bool {
    c.is_ascii() && SPECIAL.contains(&(c as u8))
}

#[cfg(test)]
pub fn in_alphabet(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alphabet_has_82_distinct_symbols() {
        assert_eq!(ALPHABET_LEN, 82);
        let unique: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), 82);
    }

    #[test]
    fn alphabet_keeps_class_order() {
        assert_eq!(&ALPHABET[..26], UPPERCASE);
        assert_eq!(&ALPHABET[26..52], LOWERCASE);
        assert_eq!(&ALPHABET[52..62], DIGITS);
        assert_eq!(&ALPHABET[62..], SPECIAL);
    }

    #[test]
    fn special_set_is_exact() {
        for c in "!@#$%^&*(),.?\":{}|<>".chars() {
            assert!(is_special(c), "{c} should be special");
        }
        for c in ['-', '_', '=', '+', '[', ']', ';', '\'', '/', '\\', '~', '`', ' ', '£'] {
            assert!(!is_special(c), "{c} should not be special");
        }
    }
}
