//! Integration tests for the X25519 KEM through the public facade

use proptest::prelude::*;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use xkem::prelude::*;
use xkem_tests::{hex32, init_tracing, vectors};

fn scheme() -> &'static dyn Scheme {
    &X25519
}

#[test]
fn test_static_roundtrip() {
    init_tracing();
    let mut rng = OsRng;

    let (public_key, secret_key) = <X25519Kem as Kem>::keypair(&mut rng).unwrap();
    let (ciphertext, shared_secret_sender) =
        <X25519Kem as Kem>::encapsulate(&mut rng, &public_key).unwrap();
    let shared_secret_recipient =
        <X25519Kem as Kem>::decapsulate(&secret_key, &ciphertext).unwrap();

    assert_eq!(shared_secret_sender.as_ref(), shared_secret_recipient.as_ref());
}

#[test]
fn test_dynamic_roundtrip() {
    init_tracing();
    let scheme = scheme();

    let (public_key, private_key) = scheme.generate_key().unwrap();
    let (ciphertext, shared_secret) = scheme.encapsulate(public_key.as_ref()).unwrap();

    assert_eq!(ciphertext.len(), scheme.ciphertext_size());
    assert_eq!(shared_secret.len(), scheme.shared_key_size());
    assert_eq!(scheme.decapsulate(private_key.as_ref(), &ciphertext).unwrap(), shared_secret);
}

#[test]
fn test_scheme_descriptor() {
    let scheme = scheme();

    assert_eq!(scheme.name(), "X25519");
    assert_eq!(scheme.public_key_size(), 32);
    assert_eq!(scheme.private_key_size(), 32);
    assert_eq!(scheme.seed_size(), 32);
    assert_eq!(scheme.shared_key_size(), 32);
    assert_eq!(scheme.ciphertext_size(), 32);
    assert_eq!(scheme.encapsulation_seed_size(), 32);
    assert_eq!(format!("{:?}", scheme), "Scheme { name: \"X25519\" }");
}

#[test]
fn test_derive_key_vectors() {
    let scheme = scheme();

    let (public_key, private_key) = scheme.derive_key(&[0u8; 32]).unwrap();
    assert_eq!(public_key.marshal_binary(), hex32(vectors::SEED_ZERO_PUBLIC));
    assert_eq!(private_key.marshal_binary(), vec![0u8; 32]);

    let (public_key, _) = scheme.derive_key(&[0xffu8; 32]).unwrap();
    assert_eq!(public_key.marshal_binary(), hex32(vectors::SEED_FF_PUBLIC));
}

#[test]
fn test_derive_key_rejects_bad_seed() {
    for len in [0usize, 31, 33] {
        let err = scheme().derive_key(&vec![0u8; len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SeedSize, "seed of {} bytes", len);
    }
}

#[test]
fn test_keys_report_their_scheme() {
    let (public_key, private_key) = scheme().derive_key(&[1u8; 32]).unwrap();

    assert_eq!(public_key.scheme().name(), scheme().name());
    assert_eq!(private_key.scheme().name(), scheme().name());
}

#[test]
fn test_encapsulate_deterministically_vector() {
    init_tracing();
    let scheme = scheme();
    let recipient = scheme
        .unmarshal_binary_public_key(&hex32(vectors::RFC7748_ALICE_PUBLIC))
        .unwrap();

    let (ciphertext, shared_secret) =
        scheme.encapsulate_deterministically(recipient.as_ref(), &[1u8; 32]).unwrap();
    assert_eq!(ciphertext, hex32(vectors::ENCAPSULATION_SEED_ONES_CIPHERTEXT));
    assert_eq!(shared_secret, hex32(vectors::ENCAPSULATION_SEED_ONES_SHARED));

    // Alice recovers the same secret from the ciphertext
    let alice = scheme
        .unmarshal_binary_private_key(&hex32(vectors::RFC7748_ALICE_PRIVATE))
        .unwrap();
    assert_eq!(scheme.decapsulate(alice.as_ref(), &ciphertext).unwrap(), shared_secret);
}

#[test]
fn test_encapsulate_deterministically_rejects_bad_seed() {
    let scheme = scheme();
    let (public_key, _) = scheme.derive_key(&[2u8; 32]).unwrap();

    for len in [31usize, 33] {
        let err = scheme
            .encapsulate_deterministically(public_key.as_ref(), &vec![0u8; len])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SeedSize);
    }
}

#[test]
fn test_decapsulate_rejects_bad_ciphertext_length() {
    let scheme = scheme();
    let (_, private_key) = scheme.derive_key(&[2u8; 32]).unwrap();

    for len in [0usize, 31, 33] {
        let err = scheme.decapsulate(private_key.as_ref(), &vec![9u8; len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CiphertextSize);
    }
}

#[test]
fn test_low_order_points_rejected() {
    init_tracing();
    let scheme = scheme();
    let (_, private_key) = scheme.derive_key(&[2u8; 32]).unwrap();

    let mut one = [0u8; 32];
    one[0] = 1;
    for point in [[0u8; 32], one] {
        let public_key = scheme.unmarshal_binary_public_key(&point).unwrap();
        let err = scheme.encapsulate(public_key.as_ref()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPublicKey);

        let err = scheme.decapsulate(private_key.as_ref(), &point).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCiphertext);
    }
}

#[test]
fn test_unmarshal_rejects_bad_lengths() {
    let scheme = scheme();

    let err = scheme.unmarshal_binary_public_key(&[0u8; 31]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PublicKeySize);
    let err = scheme.unmarshal_binary_public_key(&[0u8; 33]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PublicKeySize);
    let err = scheme.unmarshal_binary_private_key(&[0u8; 31]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PrivateKeySize);
    let err = scheme.unmarshal_binary_private_key(&[0u8; 33]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PrivateKeySize);
}

#[test]
fn test_marshal_unmarshal_preserves_keys() {
    let scheme = scheme();
    let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
    let (public_key, private_key) = scheme.generate_key_from_rng(&mut rng).unwrap();

    let public_again = scheme.unmarshal_binary_public_key(&public_key.marshal_binary()).unwrap();
    let private_again = scheme.unmarshal_binary_private_key(&private_key.marshal_binary()).unwrap();

    assert!(public_key.equal(public_again.as_ref()));
    assert!(private_key.equal(private_again.as_ref()));
}

#[test]
fn test_marshal_roundtrip_boundary_patterns() {
    let scheme = scheme();

    for fill in [0x00u8, 0xff] {
        let public_key = scheme.unmarshal_binary_public_key(&[fill; 32]).unwrap();
        let private_key = scheme.unmarshal_binary_private_key(&[fill; 32]).unwrap();

        assert_eq!(public_key.marshal_binary(), vec![fill; 32]);
        assert_eq!(private_key.marshal_binary(), vec![fill; 32]);
    }
}

#[test]
fn test_public_key_of_private_key() {
    let (pk, sk) = X25519Kem::derive_keypair(&[0u8; 32]).unwrap();

    assert_eq!(sk.public_key(), pk);
    assert_eq!(pk.as_bytes(), &hex32(vectors::SEED_ZERO_PUBLIC));
}

#[test]
fn test_marshal_returns_copies() {
    let (public_key, private_key) = scheme().derive_key(&[4u8; 32]).unwrap();

    let mut bytes = private_key.marshal_binary();
    bytes[0] ^= 0xff;
    assert_eq!(private_key.marshal_binary(), vec![4u8; 32]);

    let mut bytes = public_key.marshal_binary();
    let original = bytes.clone();
    bytes[0] ^= 0xff;
    assert_eq!(public_key.marshal_binary(), original);
}

#[test]
fn test_generate_key_from_seeded_rng_is_reproducible() {
    let scheme = scheme();
    let mut rng_a = ChaCha20Rng::from_seed([12u8; 32]);
    let mut rng_b = ChaCha20Rng::from_seed([12u8; 32]);

    let (pk_a, sk_a) = scheme.generate_key_from_rng(&mut rng_a).unwrap();
    let (pk_b, sk_b) = scheme.generate_key_from_rng(&mut rng_b).unwrap();
    assert!(pk_a.equal(pk_b.as_ref()));
    assert!(sk_a.equal(sk_b.as_ref()));

    let (ct_a, ss_a) = scheme.encapsulate_from_rng(pk_a.as_ref(), &mut rng_a).unwrap();
    let (ct_b, ss_b) = scheme.encapsulate_from_rng(pk_b.as_ref(), &mut rng_b).unwrap();
    assert_eq!(ct_a, ct_b);
    assert_eq!(ss_a, ss_b);
}

#[test]
fn test_private_key_equality() {
    let scheme = scheme();

    for fill in [0x00u8, 0xff] {
        let key = scheme.unmarshal_binary_private_key(&[fill; 32]).unwrap();
        let same = scheme.unmarshal_binary_private_key(&[fill; 32]).unwrap();
        assert!(key.equal(same.as_ref()));

        for i in 0..32 {
            let mut flipped = [fill; 32];
            flipped[i] ^= 0x80;
            let other = scheme.unmarshal_binary_private_key(&flipped).unwrap();
            assert!(!key.equal(other.as_ref()), "flip at byte {}", i);
        }
    }
}

#[test]
fn test_static_and_dynamic_paths_agree() {
    let seed = [21u8; 32];
    let encapsulation_seed = [22u8; 32];

    let (pk, sk) = X25519Kem::derive_keypair(&seed).unwrap();
    let (ct, ss) = X25519Kem::encapsulate_deterministic(&pk, &encapsulation_seed).unwrap();

    let (dyn_pk, dyn_sk) = X25519.derive_key(&seed).unwrap();
    let (dyn_ct, dyn_ss) = X25519
        .encapsulate_deterministically(dyn_pk.as_ref(), &encapsulation_seed)
        .unwrap();

    assert_eq!(pk.to_bytes(), dyn_pk.marshal_binary());
    assert_eq!(sk.to_bytes_zeroizing().as_slice(), dyn_sk.marshal_binary().as_slice());
    assert_eq!(ct.to_bytes(), dyn_ct);
    assert_eq!(ss.as_ref(), dyn_ss.as_slice());
}

#[test]
fn test_error_messages_carry_context() {
    let err = scheme().decapsulate(
        scheme().derive_key(&[1u8; 32]).unwrap().1.as_ref(),
        &[0u8; 31],
    );
    let message = err.unwrap_err().to_string();

    assert!(message.starts_with("X25519 decapsulate"), "{}", message);
    assert!(message.contains("expected 32, got 31"), "{}", message);
}

proptest! {
    #[test]
    fn prop_roundtrip_from_any_seeds(seed in any::<[u8; 32]>(), eseed in any::<[u8; 32]>()) {
        let scheme = scheme();
        let (public_key, private_key) = scheme.derive_key(&seed).unwrap();
        let (ciphertext, shared_secret) =
            scheme.encapsulate_deterministically(public_key.as_ref(), &eseed).unwrap();

        prop_assert_eq!(scheme.decapsulate(private_key.as_ref(), &ciphertext).unwrap(), shared_secret);
    }

    #[test]
    fn prop_derive_key_is_deterministic(seed in any::<[u8; 32]>()) {
        let (pk_a, sk_a) = scheme().derive_key(&seed).unwrap();
        let (pk_b, sk_b) = scheme().derive_key(&seed).unwrap();

        prop_assert!(pk_a.equal(pk_b.as_ref()));
        prop_assert!(sk_a.equal(sk_b.as_ref()));
        prop_assert_eq!(sk_a.marshal_binary(), seed.to_vec());
    }

    #[test]
    fn prop_private_key_bit_flip_detected(
        bytes in any::<[u8; 32]>(),
        position in 0usize..32,
        bit in 0u32..8,
    ) {
        let scheme = scheme();
        let mut flipped = bytes;
        flipped[position] ^= 1u8 << bit;

        let key = scheme.unmarshal_binary_private_key(&bytes).unwrap();
        let same = scheme.unmarshal_binary_private_key(&bytes).unwrap();
        let other = scheme.unmarshal_binary_private_key(&flipped).unwrap();

        prop_assert!(key.equal(same.as_ref()));
        prop_assert!(!key.equal(other.as_ref()));
        prop_assert!(!other.equal(key.as_ref()));
    }

    #[test]
    fn prop_public_key_roundtrip(bytes in any::<[u8; 32]>()) {
        let scheme = scheme();
        let key = scheme.unmarshal_binary_public_key(&bytes).unwrap();
        let again = scheme.unmarshal_binary_public_key(&key.marshal_binary()).unwrap();

        prop_assert!(key.equal(again.as_ref()));
        prop_assert_eq!(again.marshal_binary(), bytes.to_vec());
    }

    #[test]
    fn prop_wrong_seed_length_rejected(seed in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(seed.len() != 32);
        let err = scheme().derive_key(&seed).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::SeedSize);
    }
}
