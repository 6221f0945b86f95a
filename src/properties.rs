//! Property-style coverage: random formulas checked against a brute-force
//! truth table, and against a save/load round-trip.

use rand::Rng;

use crate::{BddCache, BddVariable, BoolArrayAssignment};

const VARIABLES: usize = 4;
const MAX_DEPTH: usize = 4;
const SAMPLES: usize = 50;

enum Formula {
    Var(usize),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
}

fn random_formula(rng: &mut impl Rng, depth: usize) -> Formula {
    if depth == 0 || rng.gen_bool(0.3) {
        Formula::Var(rng.gen_range(0, VARIABLES))
    } else {
        match rng.gen_range(0, 3) {
            0 => Formula::Not(Box::new(random_formula(rng, depth - 1))),
            1 => Formula::And(
                Box::new(random_formula(rng, depth - 1)),
                Box::new(random_formula(rng, depth - 1)),
            ),
            _ => Formula::Or(
                Box::new(random_formula(rng, depth - 1)),
                Box::new(random_formula(rng, depth - 1)),
            ),
        }
    }
}

fn eval_formula(formula: &Formula, values: &[bool]) -> bool {
    match formula {
        Formula::Var(i) => values[*i],
        Formula::Not(a) => !eval_formula(a, values),
        Formula::And(a, b) => eval_formula(a, values) && eval_formula(b, values),
        Formula::Or(a, b) => eval_formula(a, values) || eval_formula(b, values),
    }
}

fn build_bdd(cache: &mut BddCache<bool>, formula: &Formula) -> crate::NodeId {
    match formula {
        Formula::Var(i) => cache.literal(BddVariable::new(*i as u32), true),
        Formula::Not(a) => {
            let inner = build_bdd(cache, a);
            cache.not(inner)
        }
        Formula::And(a, b) => {
            let left = build_bdd(cache, a);
            let right = build_bdd(cache, b);
            cache.and(left, right)
        }
        Formula::Or(a, b) => {
            let left = build_bdd(cache, a);
            let right = build_bdd(cache, b);
            cache.or(left, right)
        }
    }
}

fn all_assignments() -> impl Iterator<Item = Vec<bool>> {
    (0..(1u32 << VARIABLES)).map(|mask| (0..VARIABLES).map(|i| (mask >> i) & 1 == 1).collect())
}

#[test]
fn random_formulas_match_brute_force_truth_tables() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let formula = random_formula(&mut rng, MAX_DEPTH);
        let mut cache: BddCache<bool> = BddCache::new();
        let root = build_bdd(&mut cache, &formula);

        for values in all_assignments() {
            let expected = eval_formula(&formula, &values);
            let actual = cache.evaluate(root, &BoolArrayAssignment::new(&values));
            assert_eq!(actual, expected, "mismatch for assignment {:?}", values);
        }
    }
}

#[test]
fn random_formulas_round_trip_through_save_and_load() {
    let mut rng = rand::thread_rng();

    for _ in 0..(SAMPLES / 2) {
        let formula = random_formula(&mut rng, MAX_DEPTH);
        let mut cache: BddCache<bool> = BddCache::new();
        let root = build_bdd(&mut cache, &formula);

        let mut bytes = Vec::new();
        cache.save(&mut bytes, root).unwrap();

        let mut reloaded: BddCache<bool> = BddCache::new();
        let loaded = reloaded.load(&mut bytes.as_slice()).unwrap();

        for values in all_assignments() {
            let assignment = BoolArrayAssignment::new(&values);
            assert_eq!(
                cache.evaluate(root, &assignment),
                reloaded.evaluate(loaded, &assignment)
            );
        }
    }
}
