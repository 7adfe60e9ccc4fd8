use rsa_radix::{
    text::{deserialize, serialize},
    BigInt, Config, Error, KeyPair, PrivateKey, PublicKey, Rsa112, seeded,
};

#[test]
fn integer_lines() {
    let n = BigInt::from_digits(&[42, 7]).unwrap();
    assert_eq!(serialize(&n), "00007-00042\n");
    assert_eq!(deserialize("00007-00042\n").unwrap(), n);
    assert_eq!(n.to_string(), "00007-00042");
    assert_eq!("00007-00042".parse::<BigInt>().unwrap(), n);
}

#[test]
fn key_files() {
    let pair = KeyPair::generate(&mut seeded(11), &Config::of::<Rsa112>()).unwrap();
    let (public, private) = pair.into_keys().unwrap();

    let public_text = public.to_text();
    let private_text = private.to_text();

    let mut public_lines = public_text.lines();
    assert_eq!(public_lines.next().map(deserialize).unwrap().unwrap(), *public.exponent());
    assert_eq!(public_lines.next().map(deserialize).unwrap().unwrap(), *public.modulus());
    assert!(public_text.ends_with('\n'));

    // both files carry the same modulus line
    assert_eq!(public_text.lines().nth(1), private_text.lines().nth(1));

    let public_again = PublicKey::from_text(&public_text).unwrap();
    let private_again = PrivateKey::from_text(&private_text).unwrap();

    let ciphertext = public_again.encrypt(b"round trip through text").unwrap();
    assert_eq!(private_again.decrypt(&ciphertext).unwrap(), b"round trip through text");
}

#[test]
fn fixed_width_writers_are_read() {
    // leading zero groups padding the modulus out to a fixed width
    let text = "00000-00017\n00000-00000-16380-08541\n";
    let public = PublicKey::from_text(text).unwrap();
    assert_eq!(public.exponent().to_u64(), Some(17));
    assert_eq!(public.modulus(), &BigInt::from_digits(&[8541, 16380]).unwrap());
}

#[test]
fn malformed_text() {
    assert!(matches!(deserialize("7-42"), Err(Error::MalformedInteger(_))));
    assert!(matches!(deserialize("20000"), Err(Error::MalformedInteger(_))));
    assert!(matches!(PublicKey::from_text("00017"), Err(Error::MalformedKey(_))));
    assert!(matches!(PrivateKey::from_text("00017\n00017\n00017\n"), Err(Error::MalformedKey(_))));
}
