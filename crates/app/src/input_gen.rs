//! Sample input generation for demo runs.
//!
//! When no input file is specified in compress mode, we generate sample
//! data with interesting compression characteristics: a mix of repetitive,
//! text-like, and random sections, so the printed ratio actually shows the
//! codec doing something.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate sample data with mixed compressibility.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: approximate size of generated data
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    let mut remaining = size_bytes;
    while remaining > 0 {
        let section = remaining.min(2048);
        let kind: u8 = rng.gen_range(0..10);

        match kind {
            // 30% highly compressible: runs of the same byte
            0..=2 => {
                let byte: u8 = rng.gen();
                data.extend(std::iter::repeat(byte).take(section));
            }

            // 50% text-like: limited alphabet with skewed frequencies
            3..=7 => {
                let alphabet = b"etaoin shrdlucmfwypvbgkqjxz.!,\n";
                for _ in 0..section {
                    // Bias toward the front of the alphabet
                    let r: f64 = rng.gen();
                    let idx = ((r * r) * alphabet.len() as f64) as usize;
                    data.push(alphabet[idx.min(alphabet.len() - 1)]);
                }
            }

            // 20% incompressible: uniform random bytes
            _ => {
                for _ in 0..section {
                    data.push(rng.gen());
                }
            }
        }

        remaining -= section;
    }

    data
}
