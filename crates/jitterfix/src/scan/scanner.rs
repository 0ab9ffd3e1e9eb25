/// Find the first occurrence of a wildcard pattern in a module image.
///
/// Naive sliding-window match: a `None` element matches any byte, fixed
/// elements must match exactly. Patterns are short and this runs once at
/// startup, so no fancier algorithm is warranted.
pub fn find_pattern(image: &[u8], pattern: &[Option<u8>]) -> Option<usize> {
    if pattern.is_empty() || image.len() < pattern.len() {
        return None;
    }

    let last = image.len() - pattern.len();

    'outer: for i in 0..=last {
        for (j, byte) in pattern.iter().enumerate() {
            if let Some(value) = byte
                && image[i + j] != *value
            {
                continue 'outer;
            }
        }
        return Some(i);
    }

    None
}
