use crate::Generator;
use burrow_core::shortcode::{SHORT_CODE_ALPHABET, SHORT_CODE_LENGTH};
use burrow_core::ShortCode;
use rand::Rng;

/// Draws each character of a short code uniformly from `[a-zA-Z0-9]`.
///
/// Randomness comes from the thread-local CSPRNG, so codes issued in the
/// same instant are independent of each other. Uniqueness is left to
/// probability: 62^6 possible codes and no collision check.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }

    fn code_with<R: Rng>(rng: &mut R) -> String {
        (0..SHORT_CODE_LENGTH)
            .map(|_| {
                let index = rng.random_range(0..SHORT_CODE_ALPHABET.len());
                char::from(SHORT_CODE_ALPHABET[index])
            })
            .collect()
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        ShortCode::new(Self::code_with(&mut rand::rng()))
    }
}
