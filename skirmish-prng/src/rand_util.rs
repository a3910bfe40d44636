use std::mem;

use crate::{
    MAX_OUTPUT,
    PseudoRandomNumberGenerator,
};

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random real number in the closed range `[min, max]`.
///
/// A generator output of `0` maps to `min` and an output of [`MAX_OUTPUT`] maps exactly to `max`.
pub fn uniform(prng: &mut dyn PseudoRandomNumberGenerator, min: f64, max: f64) -> f64 {
    let fraction = prng.next().min(MAX_OUTPUT) as f64 / MAX_OUTPUT as f64;
    max - (max - min) * (1.0 - fraction)
}

/// Fisher-Yates shuffle.
pub fn shuffle<T>(prng: &mut dyn PseudoRandomNumberGenerator, items: &mut [T]) {
    let end = items.len() as u64;
    if end < 2 {
        return;
    }
    let mut start = 0;
    while start < end - 1 {
        let next = range(prng, start, end);
        if start != next {
            let (head, tail) = items.split_at_mut(next as usize);
            mem::swap(&mut head[start as usize], &mut tail[0]);
        }
        start += 1;
    }
}
