#![no_main]
use ecdh25519::{Error, PRIVATE_KEY_SIZE, compute_shared_secret, derive_public_key};
use libfuzzer_sys::fuzz_target;

// Input layout: one byte giving the private key length, the private key,
// then the public key.
fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = usize::from(split).min(rest.len());
    let (private_key, public_key) = rest.split_at(split);

    match compute_shared_secret(private_key, public_key) {
        Ok(shared) => {
            // agreement succeeds only for well-formed keys and never yields zero
            assert_eq!(private_key.len(), PRIVATE_KEY_SIZE);
            assert_eq!(public_key.len(), 32);
            assert_ne!(shared.as_bytes(), &[0u8; 32]);
        }
        Err(Error::BadPrivateKeyLength(len)) => assert_eq!(len, private_key.len()),
        Err(Error::BadPublicKeyLength(len)) => {
            assert_eq!(private_key.len(), PRIVATE_KEY_SIZE);
            assert_eq!(len, public_key.len());
        }
        Err(Error::KeyDerivationFailure) => {}
        Err(Error::RandomSourceFailure) => unreachable!("agreement draws no randomness"),
    }

    if private_key.len() == PRIVATE_KEY_SIZE {
        let first = derive_public_key(private_key);
        let second = derive_public_key(private_key);
        assert_eq!(first, second);
    }
});
