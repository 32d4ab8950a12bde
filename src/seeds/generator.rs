use rand::RngExt;

pub const SEED_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates `count` seeds of `length` characters from the thread-local CSPRNG.
pub fn generate_seeds(count: usize, length: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            (0..length)
                .map(|_| SEED_CHARSET[rng.random_range(0..SEED_CHARSET.len())] as char)
                .collect()
        })
        .collect()
}
