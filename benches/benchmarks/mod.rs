use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

pub mod decoder;
pub mod encoder;

/// Number of symbols of the text used to bench.
const TEXT_LENGTH: usize = 200_000;

/// Number of distinct symbols the zipfian distribution can output.
const ALPHABET_SIZE: u64 = 96;

/// Creates a text of [`TEXT_LENGTH`] printable ASCII symbols sampled from a Zipfian distribution.
pub fn get_text() -> String {
    let mut rng = StdRng::seed_from_u64(0);
    let distribution = Zipf::new(ALPHABET_SIZE, 1.0).unwrap();

    (0..TEXT_LENGTH)
        .map(|_| match distribution.sample(&mut rng) as u8 {
            1 => '\n',
            rank => (b' ' + rank - 2) as char,
        })
        .collect()
}
