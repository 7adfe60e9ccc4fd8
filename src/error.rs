use alloc::boxed::Box;
use core::fmt;

/// The step of key generation or of the block pipeline that failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    PrimeP,
    PrimeQ,
    Modulus,
    Totient,
    PublicExponent,
    PrivateExponent,
    /// index of the plaintext block
    EncryptBlock(usize),
    /// index of the ciphertext block
    DecryptBlock(usize),
}

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// Growing a digit buffer failed.
    OutOfMemory,
    /// Division by (or reduction modulo) zero.
    DivisionByZero,
    /// A negative increment would take a magnitude below zero.
    Underflow,
    /// Magnitudes are non-negative.
    NegativeValue,
    /// Digit-group text did not parse.
    MalformedInteger(&'static str),
    /// Key text is not exactly two integer lines.
    MalformedKey(&'static str),
    MalformedCiphertext(&'static str),
    /// Only 7-bit bytes can be packed, two to a digit.
    NonAsciiPlaintext { offset: usize, byte: u8 },
    /// A block value is not below the modulus, or does not fit its width.
    BlockTooLarge,
    /// The modulus needs at least two digits to carry a non-empty block.
    ModulusTooSmall,
    /// RSA needs two distinct primes.
    EqualPrimes,
    /// No probable prime among this many candidates.
    PrimeSearchExhausted { candidates: usize },
    /// Some step failed.
    During { step: Step, source: Box<Error> },
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The underlying error, with any step information peeled off.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::During { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::PrimeP => f.write_str("generating prime p"),
            Step::PrimeQ => f.write_str("generating prime q"),
            Step::Modulus => f.write_str("computing modulus n"),
            Step::Totient => f.write_str("computing totient"),
            Step::PublicExponent => f.write_str("choosing public exponent e"),
            Step::PrivateExponent => f.write_str("computing private exponent d"),
            Step::EncryptBlock(i) => write!(f, "encrypting block {}", i),
            Step::DecryptBlock(i) => write!(f, "decrypting block {}", i),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfMemory => f.write_str("out of memory"),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::Underflow => f.write_str("decrement below zero"),
            Error::NegativeValue => f.write_str("negative value"),
            Error::MalformedInteger(reason) => write!(f, "malformed integer: {}", reason),
            Error::MalformedKey(reason) => write!(f, "malformed key: {}", reason),
            Error::MalformedCiphertext(reason) => write!(f, "malformed ciphertext: {}", reason),
            Error::NonAsciiPlaintext { offset, byte } => {
                write!(f, "plaintext byte {:#04x} at offset {} is not 7-bit", byte, offset)
            }
            Error::BlockTooLarge => f.write_str("block value does not fit"),
            Error::ModulusTooSmall => f.write_str("modulus has fewer than two digits"),
            Error::EqualPrimes => f.write_str("p and q are equal"),
            Error::PrimeSearchExhausted { candidates } => {
                write!(f, "no probable prime among {} candidates", candidates)
            }
            Error::During { step, source } => write!(f, "{}: {}", step, source),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::During { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<alloc::collections::TryReserveError> for Error {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        Error::OutOfMemory
    }
}

/// Tag a failure with the step it happened in.
pub(crate) trait Context<T> {
    fn during(self, step: Step) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    fn during(self, step: Step) -> Result<T> {
        self.map_err(|error| Error::During { step, source: Box::new(error) })
    }
}
