//! Odometer-style word enumeration

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::types::GenerationSpec;

/// Lazy enumeration of every fixed-length word over a charset.
///
/// Words are ordered like the digits of a base-`charset.len()` counter with
/// the charset as the digit alphabet: the rightmost position cycles fastest,
/// and symbol order gives digit order. Length 0 yields the empty word once.
pub struct LengthIter<'a> {
    charset: &'a [char],
    digits: Vec<usize>,
    exhausted: bool,
}

impl<'a> LengthIter<'a> {
    /// Create an iterator over all words of `length` symbols
    pub fn new(charset: &'a [char], length: usize) -> Self {
        Self {
            charset,
            digits: vec![0; length],
            // An empty charset admits no word except the empty one.
            exhausted: charset.is_empty() && length > 0,
        }
    }

    /// Advance the odometer one step. Returns false on wrap-around,
    /// i.e. when the last word has been produced.
    fn increment(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.charset.len() {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl Iterator for LengthIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let word: String = self.digits.iter().map(|&i| self.charset[i]).collect();
        self.exhausted = !self.increment();
        Some(word)
    }
}

/// The full candidate sequence of a spec: every length from shortest to
/// longest, each length enumerated in odometer order.
pub fn words(spec: &GenerationSpec) -> impl Iterator<Item = String> + '_ {
    (spec.min_length..=spec.max_length)
        .flat_map(move |length| LengthIter::new(spec.charset.symbols(), length))
}

/// Word at a given rank within one length, without enumerating up to it.
///
/// Decodes `index` as a most-significant-digit-first number in base
/// `charset.len()`. Returns `None` when the rank is out of range.
pub fn word_at(charset: &[char], length: usize, index: &BigUint) -> Option<String> {
    if charset.is_empty() {
        return if length == 0 && index.to_usize() == Some(0) {
            Some(String::new())
        } else {
            None
        };
    }

    let base = BigUint::from(charset.len());
    let mut total = BigUint::from(1u8);
    for _ in 0..length {
        total *= &base;
    }
    if *index >= total {
        return None;
    }

    let mut result = vec![charset[0]; length];
    let mut n = index.clone();
    for slot in result.iter_mut().rev() {
        let digit = (&n % &base).to_usize()?;
        *slot = charset[digit];
        n /= &base;
    }

    Some(result.into_iter().collect())
}
