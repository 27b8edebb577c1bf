//! Order-1 Delta
//!
//! First byte verbatim, then wrapping differences between consecutive bytes.
//! Never smaller on its own; useful when a later stage (or `best`) can exploit
//! the flattened value distribution.

pub fn encode(data: &[u8]) -> Vec<u8> {
    let Some(&first) = data.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(data.len());
    out.push(first);
    for window in data.windows(2) {
        out.push(window[1].wrapping_sub(window[0]));
    }
    out
}

pub fn decode(data: &[u8]) -> Vec<u8> {
    let Some(&first) = data.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(data.len());
    let mut previous = first;
    out.push(first);
    for &delta in &data[1..] {
        previous = previous.wrapping_add(delta);
        out.push(previous);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotone_data_flattens() {
        let input: Vec<u8> = (10..200).collect();
        let encoded = encode(&input);
        // Every delta after the first byte is 1.
        assert!(encoded[1..].iter().all(|&d| d == 1));
        assert_eq!(decode(&encoded), input);
    }

    #[test]
    fn wrapping_boundaries_roundtrip() {
        let input = [250u8, 5, 250, 5, 0, 255, 0];
        assert_eq!(decode(&encode(&input)), input);
    }

    #[test]
    fn empty_and_single_byte() {
        assert!(encode(&[]).is_empty());
        assert_eq!(decode(&encode(&[7])), vec![7]);
    }
}
