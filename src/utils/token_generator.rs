//! Short token generation.
//!
//! Tokens are drawn from a 62-character alphanumeric alphabet using the
//! operating system CSPRNG. Each character is chosen independently and
//! uniformly; bytes that would bias the modulo are rejected and redrawn.

/// Upper- and lower-case ASCII letters followed by digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default token length (62^7 ≈ 3.5 × 10^12 possible tokens).
pub const DEFAULT_TOKEN_LENGTH: usize = 7;

/// Paths owned by the HTTP router that a token must never shadow.
pub const RESERVED_TOKENS: &[&str] = &["health", "shorten"];

/// Largest multiple of the alphabet size that fits in a byte.
const REJECTION_LIMIT: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Produces candidate short tokens.
///
/// Generators do not guarantee uniqueness; collisions are handled by
/// [`crate::application::services::ResolutionEngine`].
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Cryptographically secure fixed-length token generator.
#[derive(Debug, Clone)]
pub struct RandomTokenGenerator {
    length: usize,
}

impl RandomTokenGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    fn draw(&self) -> String {
        let mut token = String::with_capacity(self.length);
        let mut buffer = [0u8; 32];

        while token.len() < self.length {
            getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

            for &byte in buffer.iter().filter(|&&b| b < REJECTION_LIMIT) {
                if token.len() == self.length {
                    break;
                }
                token.push(ALPHABET[byte as usize % ALPHABET.len()] as char);
            }
        }

        token
    }
}

impl Default for RandomTokenGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_LENGTH)
    }
}

impl TokenGenerator for RandomTokenGenerator {
    /// Generates a token of the configured length.
    ///
    /// # Panics
    ///
    /// Panics if the system random number generator fails. Entropy exhaustion
    /// is not recoverable.
    fn generate(&self) -> String {
        loop {
            let token = self.draw();
            if !RESERVED_TOKENS.contains(&token.as_str()) {
                return token;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_generate_default_length() {
        let token = RandomTokenGenerator::default().generate();
        assert_eq!(token.len(), 7);
    }

    #[test]
    fn test_generate_custom_length() {
        let generator = RandomTokenGenerator::new(12);
        assert_eq!(generator.generate().len(), 12);
        assert_eq!(generator.length(), 12);
    }

    #[test]
    fn test_generate_alphanumeric_only() {
        let generator = RandomTokenGenerator::default();
        for _ in 0..200 {
            let token = generator.generate();
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_produces_unique_tokens() {
        let generator = RandomTokenGenerator::default();
        let tokens: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: HashSet<&u8> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_reserved_tokens_are_alphanumeric() {
        // Only alphanumeric words can ever be drawn, so only those need reserving.
        for reserved in RESERVED_TOKENS {
            assert!(reserved.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_rejection_limit() {
        assert_eq!(REJECTION_LIMIT, 248);
    }

    #[test]
    fn test_every_character_is_reachable() {
        let generator = RandomTokenGenerator::new(32);
        let mut seen: HashMap<char, usize> = HashMap::new();

        for _ in 0..500 {
            for c in generator.generate().chars() {
                *seen.entry(c).or_default() += 1;
            }
        }

        // 16000 draws over 62 symbols; each appears ~258 times on average.
        assert_eq!(seen.len(), 62);
    }
}
