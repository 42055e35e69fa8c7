use rand::Rng;

pub const HEX_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// Route colors lean dark: the leading digit comes from `0-9`, every other
/// digit from `0-6`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for i in 0..6 {
        let index = if i == 0 { rng.random_range(0..10) } else { rng.random_range(0..7) };
        color.push(char::from(HEX_ALPHABET[index]));
    }
    color
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
