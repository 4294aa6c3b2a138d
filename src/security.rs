pub mod elgamal;

pub use elgamal::{
    elgamal_decrypt, elgamal_encrypt, ElGamalCiphertext, ElGamalEncryptConfig,
    ElGamalKeyGenConfig, ElGamalKeyPair, ElGamalParams, ElGamalPrivateKey, ElGamalPublicKey,
};
