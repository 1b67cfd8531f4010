//! SHA256 and double-SHA256 digests.

use sha2::{Digest, Sha256};

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Bitcoin's double SHA256: SHA256(SHA256(data)).
///
/// Used for header hashes, txids, merkle nodes and address checksums.
#[inline]
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sha256d_known_vector() {
        // SHA256d("hello")
        let expected =
            hex::decode("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50")
                .unwrap();
        assert_eq!(sha256d(b"hello").as_slice(), expected.as_slice());
    }

    #[test]
    fn test_sha256_empty() {
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(sha256(&[]).as_slice(), expected.as_slice());
    }

    #[test]
    fn test_sha256d_empty_is_sha256_twice() {
        assert_eq!(sha256d(&[]), sha256(&sha256(&[])));
    }

    proptest! {
        #[test]
        fn sha256d_is_sha256_composed(data in prop::collection::vec(any::<u8>(), 0..256)) {
            prop_assert_eq!(sha256d(&data), sha256(&sha256(&data)));
        }
    }
}
