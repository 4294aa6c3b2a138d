//! Interactive walkthrough of the ElGamal cryptosystem: Alice generates a
//! keypair, Bob encrypts a short message to her, Alice decrypts it, and
//! every intermediate value is printed along the way.

use std::error::Error as StdError;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use elgamal32::{
    elgamal_encrypt, ElGamalEncryptConfig, ElGamalKeyGenConfig, ElGamalKeyPair, Error,
};

/// Byte messages need a prime above 255, so the demo insists on at least
/// 9 bits.
const MIN_BITS: u8 = 9;
const MAX_BITS: u8 = 31;

const MAX_MESSAGE_BYTES: usize = 64;

/// A handful of primes make the factor search on `p - 1` exhaust;
/// redrawing a fresh prime is the demo's answer.
const KEYGEN_ATTEMPTS: u32 = 10;

fn prompt_bits(input: &mut impl BufRead) -> io::Result<u8> {
    loop {
        print!(
            "Choose the bit length of the prime to generate [{}-{}]: ",
            MIN_BITS, MAX_BITS
        );
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        match line.trim().parse::<u8>() {
            Ok(bits) if (MIN_BITS..=MAX_BITS).contains(&bits) => return Ok(bits),
            Ok(bits) => println!("{} bits is outside [{}, {}].", bits, MIN_BITS, MAX_BITS),
            Err(_) => println!("Please enter an integer."),
        }
    }
}

fn prompt_message(input: &mut impl BufRead) -> io::Result<String> {
    loop {
        print!(
            "Enter the message Bob will send to Alice (at most {} bytes): ",
            MAX_MESSAGE_BYTES
        );
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        let message = line.trim_end_matches(['\r', '\n']).to_string();
        if message.is_empty() {
            println!("The message must not be empty.");
        } else if message.len() > MAX_MESSAGE_BYTES {
            println!("Please enter at most {} bytes.", MAX_MESSAGE_BYTES);
        } else {
            return Ok(message);
        }
    }
}

/// Key generation, retrying with a fresh prime when the factorizer or the
/// root search reports one of its known dead ends.
fn generate_keypair(bits: u8) -> Result<ElGamalKeyPair, Error> {
    let mut last = Error::InvalidBitLength(bits);
    for attempt in 1..=KEYGEN_ATTEMPTS {
        match ElGamalKeyPair::generate(&ElGamalKeyGenConfig { bit_length: bits, seed: None }) {
            Ok(keypair) => return Ok(keypair),
            Err(e @ (Error::FactorSearchExhausted(_) | Error::NoPrimitiveRoot(_))) => {
                println!("  (attempt {}: {}; drawing a fresh prime)", attempt, e);
                last = e;
            }
            Err(e) => return Err(e),
        }
    }
    Err(last)
}

fn run() -> Result<(), Box<dyn StdError>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let bits = prompt_bits(&mut input)?;
    let message = prompt_message(&mut input)?;

    println!();
    let keypair = generate_keypair(bits)?;
    let public = keypair.public;
    println!("Generated prime:           {}", public.p);
    println!("Generator:                 {}", public.g);
    println!(
        "Alice's private exponent:  {}",
        keypair.private.secret_exponent()
    );
    println!("Alice's public key:        {}", public.y);
    println!("Alice publishes the prime, the generator, and the public key.");
    println!();

    let symbols: Vec<u32> = message.bytes().map(u32::from).collect();
    let ciphertext = elgamal_encrypt(&public, &symbols, &ElGamalEncryptConfig { seed: None })?;
    println!("Bob encrypts with a fresh ephemeral key.");
    println!("Ciphertext c1:             {}", ciphertext.c1);
    println!("Ciphertext c2:             {:?}", ciphertext.c2);
    println!();

    let shared_secret = keypair.private.shared_secret(ciphertext.c1)?;
    println!("Alice derives the shared secret from c1: {}", shared_secret);

    let recovered = keypair.decrypt(&ciphertext)?;
    let bytes: Vec<u8> = recovered.iter().map(|&symbol| symbol as u8).collect();
    println!(
        "Alice decrypts the message:              {:?}",
        String::from_utf8_lossy(&bytes)
    );
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("demo failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
