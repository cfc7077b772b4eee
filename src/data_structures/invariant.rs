/// Invariant trait for digit-chain validity checks
pub trait Invariant<T> {
    fn check(&self, value: &T) -> bool;
}

/// Decimal digit range invariant: a stored digit is always in 0..=9
pub struct DecimalDigit;

impl Invariant<u8> for DecimalDigit {
    fn check(&self, value: &u8) -> bool {
        *value <= 9
    }
}
