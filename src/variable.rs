use std::fmt;

/// A BDD variable identifies one of the positions in the caller's variable
/// ordering.
///
/// Variables are used instead of raw `u32` indices to provide enhanced type
/// safety, and so that the internal representation can change (e.g. to
/// support more than `u8::MAX` variables on the wire, see
/// [`crate::serialize`]) without touching call sites.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BddVariable(u32);

impl BddVariable {
    pub fn new(index: u32) -> BddVariable {
        BddVariable(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for BddVariable {
    fn from(index: u32) -> BddVariable {
        BddVariable::new(index)
    }
}

impl fmt::Display for BddVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
