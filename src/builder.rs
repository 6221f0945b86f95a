//! Small expression-building combinators layered on top of the apply engine.

use crate::id::NodeId;
use crate::terminal::Terminal;
use crate::variable::BddVariable;
use crate::BddCache;

impl<T: Terminal> BddCache<T> {
    /// The single-variable BDD for `variable`, positive if `polarity` is
    /// `true` and negated otherwise.
    pub fn literal(&mut self, variable: BddVariable, polarity: bool) -> NodeId {
        let f = self.terminal(T::FALSE);
        let t = self.terminal(T::TRUE);
        if polarity {
            self.nonterminal(variable, f, t)
        } else {
            self.nonterminal(variable, t, f)
        }
    }

    /// The conjunction of every id in `operands`, `true` (the identity for
    /// `and`) if `operands` is empty.
    pub fn and_many<I: IntoIterator<Item = NodeId>>(&mut self, operands: I) -> NodeId {
        let identity = self.terminal(T::TRUE);
        operands.into_iter().fold(identity, |acc, id| self.and(acc, id))
    }

    /// The disjunction of every id in `operands`, `false` (the identity for
    /// `or`) if `operands` is empty.
    pub fn or_many<I: IntoIterator<Item = NodeId>>(&mut self, operands: I) -> NodeId {
        let identity = self.terminal(T::FALSE);
        operands.into_iter().fold(identity, |acc, id| self.or(acc, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_polarity() {
        let mut cache: BddCache<bool> = BddCache::new();
        let pos = cache.literal(BddVariable::new(0), true);
        let neg = cache.literal(BddVariable::new(0), false);

        assert_eq!(
            cache.evaluate(pos, &crate::eval::BoolArrayAssignment::new(&[true])),
            true
        );
        assert_eq!(
            cache.evaluate(neg, &crate::eval::BoolArrayAssignment::new(&[true])),
            false
        );
    }

    #[test]
    fn and_many_of_three_literals() {
        let mut cache: BddCache<bool> = BddCache::new();
        let literals = vec![
            cache.literal(BddVariable::new(0), true),
            cache.literal(BddVariable::new(1), true),
            cache.literal(BddVariable::new(2), false),
        ];
        let conjunction = cache.and_many(literals);

        let all_true = crate::eval::BoolArrayAssignment::new(&[true, true, false]);
        let one_wrong = crate::eval::BoolArrayAssignment::new(&[true, false, false]);

        assert_eq!(cache.evaluate(conjunction, &all_true), true);
        assert_eq!(cache.evaluate(conjunction, &one_wrong), false);
    }

    #[test]
    fn and_many_of_nothing_is_true() {
        let mut cache: BddCache<bool> = BddCache::new();
        let conjunction = cache.and_many(std::iter::empty());
        assert_eq!(*cache.terminal_value(conjunction), true);
    }

    #[test]
    fn or_many_of_nothing_is_false() {
        let mut cache: BddCache<bool> = BddCache::new();
        let disjunction = cache.or_many(std::iter::empty());
        assert_eq!(*cache.terminal_value(disjunction), false);
    }
}
