use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A random ASCII alphanumeric string of `length` characters, drawn from the
/// thread-local generator.
pub fn random_string(length: usize) -> String {
  random_string_with(&mut rand::thread_rng(), length)
}

/// Like [`random_string`], drawing from `rng`.
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
  (0..length)
    .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
    .collect()
}
