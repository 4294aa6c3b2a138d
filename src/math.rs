pub mod factor;
pub mod modular;
pub mod primality;
pub mod prime;
pub mod primitive_root;

pub use factor::{pollard_rho_prime_factor, unique_prime_factors};
pub use modular::{gcd, mod_exp, mod_inverse};
pub use primality::is_prime;
pub use prime::generate_prime;
pub use primitive_root::find_primitive_root;
