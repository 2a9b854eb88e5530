/// Module dedicated to the shared number theory routines: extended gcd,
/// modular inverses and primality testing
pub mod algo;

/// Module dedicated to the prime number generation
pub mod prime;

/// Module dedicated to the rsa keys and the block operations
pub mod rsa;

/// Module dedicated to encrypting text one character at a time
pub mod text;
