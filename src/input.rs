//! Input arrays: random generation and parsing of user-supplied lists

use rand::Rng;
use std::fmt;

/// Number of bars in the default random array
pub const DEFAULT_ARRAY_SIZE: usize = 20;

/// Smallest value in a random array
pub const MIN_RANDOM_VALUE: i32 = 10;

/// Largest value in a random array
pub const MAX_RANDOM_VALUE: i32 = 99;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A token that is not an integer
    InvalidValue { token: String, position: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidValue { token, position } => {
                write!(
                    f,
                    "Invalid value '{}' at position {} (expected an integer)",
                    token, position
                )
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Generate `len` values uniformly in `MIN_RANDOM_VALUE..=MAX_RANDOM_VALUE`
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len)
        .map(|_| rng.gen_range(MIN_RANDOM_VALUE..=MAX_RANDOM_VALUE))
        .collect()
}

/// Parse a comma and/or whitespace separated list of integers
pub fn parse_values(text: &str) -> Result<Vec<i32>, InputError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i32>().map_err(|_| InputError::InvalidValue {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_array_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_array(&mut rng, DEFAULT_ARRAY_SIZE);
        assert_eq!(values.len(), DEFAULT_ARRAY_SIZE);
        assert!(values
            .iter()
            .all(|v| (MIN_RANDOM_VALUE..=MAX_RANDOM_VALUE).contains(v)));
    }

    #[test]
    fn test_seeded_arrays_repeat() {
        let a = random_array(&mut StdRng::seed_from_u64(42), 10);
        let b = random_array(&mut StdRng::seed_from_u64(42), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_mixed_separators() {
        assert_eq!(parse_values("5,3 8,  1"), Ok(vec![5, 3, 8, 1]));
        assert_eq!(parse_values(""), Ok(vec![]));
        assert_eq!(parse_values("-4, 2"), Ok(vec![-4, 2]));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_values("1, x, 3"),
            Err(InputError::InvalidValue {
                token: "x".to_string(),
                position: 1,
            })
        );
    }
}
