use ecdh25519::{compute_shared_secret, generate_key_pair_from_os_rng};

fn main() -> ecdh25519::Result<()> {
    let (alice_public, alice_private) = generate_key_pair_from_os_rng()?;
    let (bob_public, bob_private) = generate_key_pair_from_os_rng()?;

    let alice_shared = compute_shared_secret(&alice_private, bob_public)?;
    let bob_shared = compute_shared_secret(&bob_private, alice_public)?;

    if alice_shared == bob_shared {
        println!("shared secrets are equal");
    }

    println!("alice public key: {:02x?}", alice_public.as_bytes());
    println!("bob public key:   {:02x?}", bob_public.as_bytes());

    Ok(())
}
