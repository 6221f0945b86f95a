use std::hash::Hash;

/// The domain of values a BDD's leaves can carry.
///
/// The unique table only needs `Copy + Eq + Hash` to hash-cons
/// terminals. The Boolean-algebra operators (`and`, `or`, `ite`, and the
/// operators built atop them in [`crate::apply`]) additionally need to know
/// which two values play the role of `false` and `true`, which is what this
/// trait adds.
pub trait Terminal: Copy + Eq + Hash {
    const FALSE: Self;
    const TRUE: Self;
}

impl Terminal for bool {
    const FALSE: bool = false;
    const TRUE: bool = true;
}

/// Small-integer terminal domain, exercised by the reference test suite
/// alongside `bool` (e.g. an `ite` that returns `0` or `2`). `0` plays the
/// role of `false` and `1` plays the role of `true`; any other value is a
/// legitimate terminal but has no Boolean meaning of its own.
impl Terminal for i32 {
    const FALSE: i32 = 0;
    const TRUE: i32 = 1;
}
