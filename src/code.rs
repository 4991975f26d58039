use rand::seq::SliceRandom;
use rand::thread_rng;

/// Characters a paste code may contain. Uppercase alphanumeric with the
/// visually-ambiguous `0`, `O`, `1` and `I` removed.
pub const CODE_ALPHABET: &[u8] = b"23456789ABCDEFGHJKMNPQRSTUVWXYZ";

/// Fixed length of every paste code.
pub const CODE_LENGTH: usize = 6;

/// Generate a random candidate code. Uniqueness is enforced at insert time,
/// not here.
pub fn generate_code() -> String {
    let mut rng = thread_rng();
    (0..CODE_LENGTH)
        .map(|_| *CODE_ALPHABET.choose(&mut rng).unwrap() as char)
        .collect()
}

/// Normalize a user-supplied code for lookup. Codes are stored uppercase, so
/// lookups are case-insensitive.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
