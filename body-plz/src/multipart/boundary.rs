use rand::Rng;

pub const BOUNDARY_LEN: usize = 6;
pub const BOUNDARY_PREFIX: &[u8] = b"--";

// BOUNDARY_LEN chars from A-Z
pub fn generate<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    (0..BOUNDARY_LEN)
        .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
        .collect()
}

pub fn occurs_in(boundary: &str, data: &[u8]) -> bool {
    let needle = boundary.as_bytes();
    !needle.is_empty()
        && data.len() >= needle.len()
        && data.windows(needle.len()).any(|window| window == needle)
}
