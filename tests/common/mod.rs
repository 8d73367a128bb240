/*
 * Utility functions and consts used by the tests.
 *
 */

use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

/// The symbols random texts are made of. Earlier symbols are sampled more often.
pub const ALPHABET: &[char] = &[
    'e', ' ', 't', 'a', 'o', 'i', 'n', 's', 'h', 'r', 'd', 'l', '\n', 'u', 'c', 'm', ',', '.',
    'w', 'f', 'g', 'y', 'p', 'b', '-', '\\', 'v', 'k', 'é', 'ß', 'x', 'q', 'j', 'z', '\r', '€',
];

/// Length of the random texts used to test.
#[allow(dead_code)]
pub const TEXT_LENGTH: usize = 10_000;

/// Creates a text of `length` symbols sampled from [`ALPHABET`] with a Zipfian distribution.
#[allow(dead_code)]
pub fn get_text(seed: u64, length: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Zipf::new(ALPHABET.len() as u64, 1.0).unwrap();

    (0..length)
        .map(|_| ALPHABET[distribution.sample(&mut rng) as usize - 1])
        .collect()
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
