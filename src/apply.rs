//! The memoized apply engine and the Boolean operators built on top of it.

use crate::cache::BinOp;
use crate::id::NodeId;
use crate::node::Node;
use crate::terminal::Terminal;
use crate::variable::BddVariable;
use crate::BddCache;

/// A variable index that sorts after every real variable, standing in for
/// "this operand is a terminal" when picking the next variable to recurse
/// on.
const INFINITY: u32 = u32::MAX;

impl<T: Terminal> BddCache<T> {
    fn terminal_value_of(&self, id: NodeId) -> Option<T> {
        match self.node(id) {
            Node::Terminal(v) => Some(*v),
            Node::NonTerminal { .. } => None,
        }
    }

    fn variable_or_infinity(&self, id: NodeId) -> u32 {
        match self.node(id) {
            Node::Terminal(_) => INFINITY,
            Node::NonTerminal { variable, .. } => variable.index(),
        }
    }

    /// The branches `id` contributes at the pivot variable `v`: its real
    /// branches if `id` is conditioned on `v`, or itself on both branches
    /// otherwise (the standard "don't care yet" cofactor).
    fn cofactors(&self, id: NodeId, id_variable: u32, v: u32) -> (NodeId, NodeId) {
        if id_variable == v {
            let (_, low, high) = self.nonterminal_fields(id);
            (low, high)
        } else {
            (id, id)
        }
    }

    fn eval_and(x: T, y: T) -> T {
        if x == T::TRUE && y == T::TRUE {
            T::TRUE
        } else {
            T::FALSE
        }
    }

    fn eval_or(x: T, y: T) -> T {
        if x == T::TRUE || y == T::TRUE {
            T::TRUE
        } else {
            T::FALSE
        }
    }

    /// Terminal short-circuit for `op`, if `x` alone already determines the
    /// result. Purely an optimization: skipping it would still terminate
    /// correctly, just slower.
    fn short_circuit(op: BinOp, x: T) -> Option<T> {
        match op {
            BinOp::And if x == T::FALSE => Some(T::FALSE),
            BinOp::Or if x == T::TRUE => Some(T::TRUE),
            _ => None,
        }
    }

    /// The recursive memoized apply algorithm, specialized to the two
    /// commutative Boolean operators.
    fn apply_bin(&mut self, op: BinOp, a: NodeId, b: NodeId) -> NodeId {
        // Commutativity normalization: key the memo by the sorted pair to
        // double the hit rate.
        let (a, b) = (a.min(b), a.max(b));

        if let Some(&cached) = self.bin_memo.get(&(op, a, b)) {
            return cached;
        }

        let a_term = self.terminal_value_of(a);
        let b_term = self.terminal_value_of(b);

        let result = if let (Some(x), Some(y)) = (a_term, b_term) {
            self.terminal(Self::eval_and_or(op, x, y))
        } else if let Some(x) = a_term.filter(|&x| Self::short_circuit(op, x).is_some()) {
            self.terminal(Self::short_circuit(op, x).unwrap())
        } else if let Some(y) = b_term.filter(|&y| Self::short_circuit(op, y).is_some()) {
            self.terminal(Self::short_circuit(op, y).unwrap())
        } else {
            let a_var = self.variable_or_infinity(a);
            let b_var = self.variable_or_infinity(b);
            let v = a_var.min(b_var);

            let (a_low, a_high) = self.cofactors(a, a_var, v);
            let (b_low, b_high) = self.cofactors(b, b_var, v);

            let r_low = self.apply_bin(op, a_low, b_low);
            let r_high = self.apply_bin(op, a_high, b_high);
            self.nonterminal(BddVariable::new(v), r_low, r_high)
        };

        self.bin_memo.insert((op, a, b), result);
        result
    }

    fn eval_and_or(op: BinOp, x: T, y: T) -> T {
        match op {
            BinOp::And => Self::eval_and(x, y),
            BinOp::Or => Self::eval_or(x, y),
        }
    }

    /// The recursive memoized ITE algorithm: `if c then t else e`.
    fn apply_ite(&mut self, c: NodeId, t: NodeId, e: NodeId) -> NodeId {
        if t == e {
            return t;
        }

        if let Some(&cached) = self.ite_memo.get(&(c, t, e)) {
            return cached;
        }

        let result = if let Some(cv) = self.terminal_value_of(c) {
            if cv == T::TRUE {
                t
            } else {
                e
            }
        } else {
            let c_var = self.variable_or_infinity(c);
            let t_var = self.variable_or_infinity(t);
            let e_var = self.variable_or_infinity(e);
            let v = c_var.min(t_var).min(e_var);

            let (c_low, c_high) = self.cofactors(c, c_var, v);
            let (t_low, t_high) = self.cofactors(t, t_var, v);
            let (e_low, e_high) = self.cofactors(e, e_var, v);

            let r_low = self.apply_ite(c_low, t_low, e_low);
            let r_high = self.apply_ite(c_high, t_high, e_high);
            self.nonterminal(BddVariable::new(v), r_low, r_high)
        };

        self.ite_memo.insert((c, t, e), result);
        result
    }

    /// Logical conjunction.
    pub fn and(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.apply_bin(BinOp::And, a, b)
    }

    /// Logical disjunction.
    pub fn or(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.apply_bin(BinOp::Or, a, b)
    }

    /// If-then-else: `if condition then then_branch else else_branch`.
    /// Universal for Boolean operations; `not`/`xor`/`imp`/`iff` are all
    /// expressed in terms of it below.
    pub fn ite(&mut self, condition: NodeId, then_branch: NodeId, else_branch: NodeId) -> NodeId {
        self.apply_ite(condition, then_branch, else_branch)
    }

    /// Logical negation, `ite(a, false, true)`.
    pub fn not(&mut self, a: NodeId) -> NodeId {
        let t = self.terminal(T::TRUE);
        let f = self.terminal(T::FALSE);
        self.ite(a, f, t)
    }

    /// Exclusive or, `ite(a, !b, b)`.
    pub fn xor(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let not_b = self.not(b);
        self.ite(a, not_b, b)
    }

    /// Material implication, `ite(a, b, true)`.
    pub fn imp(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let t = self.terminal(T::TRUE);
        self.ite(a, b, t)
    }

    /// Logical biconditional, `ite(a, b, !b)`.
    pub fn iff(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let not_b = self.not(b);
        self.ite(a, b, not_b)
    }
}
