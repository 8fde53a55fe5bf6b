//! Cardinality constraints via the ladder (sequential counter) network.
//!
//! Auxiliary variables s[i][j] mean "at least j of the first i variables are
//! true". The network costs O(m·k) auxiliary variables and clauses, where a
//! naive subset-exclusion encoding would need O(C(m, k+1)) clauses. Every
//! clause the construction implies is emitted; there is no sampled or
//! partial emission path for any input size.

use super::formula::Clause;
use super::variables::VariableAllocator;

/// A constraint on how many of a variable set may be true
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityBound {
    AtLeast(i64),
    AtMost(i64),
    Exactly(i64),
}

impl std::fmt::Display for CardinalityBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardinalityBound::AtLeast(k) => write!(f, "at least {}", k),
            CardinalityBound::AtMost(k) => write!(f, "at most {}", k),
            CardinalityBound::Exactly(k) => write!(f, "exactly {}", k),
        }
    }
}

/// Encode a cardinality bound over the given variables
pub fn encode_bound(
    bound: CardinalityBound,
    variables: &[i32],
    allocator: &mut VariableAllocator,
) -> Vec<Clause> {
    match bound {
        CardinalityBound::AtLeast(k) => encode_at_least_k(variables, k, allocator),
        CardinalityBound::AtMost(k) => encode_at_most_k(variables, k, allocator),
        CardinalityBound::Exactly(k) => encode_exactly_k(variables, k, allocator),
    }
}

/// Encode: at least k of the variables are true.
///
/// `k <= 0` is trivially satisfied and emits nothing. `k > m` is infeasible
/// and emits the empty clause. `k == 1` collapses to the plain disjunction
/// of all variables, avoiding the auxiliary network entirely.
pub fn encode_at_least_k(
    variables: &[i32],
    k: i64,
    allocator: &mut VariableAllocator,
) -> Vec<Clause> {
    let m = variables.len();

    if k <= 0 {
        return Vec::new();
    }
    if k > m as i64 {
        return vec![Clause::empty()];
    }
    if k == 1 {
        return vec![Clause::new(variables.to_vec())];
    }

    let k = k as usize;
    let (s, mut clauses) = build_ladder(variables, k, allocator);

    // At least k of all m variables are true
    clauses.push(Clause::unit(s[m][k]));

    clauses
}

/// Encode: at most k of the variables are true.
///
/// `k < 0` is infeasible and emits the empty clause. `k >= m` is trivially
/// satisfied and emits nothing.
pub fn encode_at_most_k(
    variables: &[i32],
    k: i64,
    allocator: &mut VariableAllocator,
) -> Vec<Clause> {
    let m = variables.len();

    if k < 0 {
        return vec![Clause::empty()];
    }
    if k >= m as i64 {
        return Vec::new();
    }

    let k = k as usize;
    let (s, mut clauses) = build_ladder(variables, k + 1, allocator);

    // The count must not reach k + 1
    clauses.push(Clause::unit(-s[m][k + 1]));

    clauses
}

/// Encode: exactly k of the variables are true.
///
/// One ladder up to j = k + 1 serves both terminal constraints (s[m][k] true
/// and s[m][k+1] false); two separate networks would double the size for no
/// gain. `k == 0` and `k == m` degenerate to unit clauses on every variable.
pub fn encode_exactly_k(
    variables: &[i32],
    k: i64,
    allocator: &mut VariableAllocator,
) -> Vec<Clause> {
    let m = variables.len();

    if k < 0 || k > m as i64 {
        return vec![Clause::empty()];
    }
    if k == 0 {
        return variables.iter().map(|&v| Clause::unit(-v)).collect();
    }
    if k == m as i64 {
        return variables.iter().map(|&v| Clause::unit(v)).collect();
    }

    let k = k as usize;
    let (s, mut clauses) = build_ladder(variables, k + 1, allocator);

    clauses.push(Clause::unit(s[m][k])); // at least k
    clauses.push(Clause::unit(-s[m][k + 1])); // not at least k + 1

    clauses
}

/// Build the counter network s[i][j] for i in 0..=m, j in 0..=top.
///
/// Base row: s[0][0] is forced true (zero variables satisfy "at least 0")
/// and s[0][j] forced false for j >= 1. Each inductive step enforces the
/// full biconditional
///
/// ```text
/// s[i][j] <-> s[i-1][j] OR (x_i AND s[i-1][j-1])
/// ```
///
/// as four clauses. All four are required; dropping any one breaks either
/// soundness or completeness of the counter.
fn build_ladder(
    variables: &[i32],
    top: usize,
    allocator: &mut VariableAllocator,
) -> (Vec<Vec<i32>>, Vec<Clause>) {
    let m = variables.len();
    let mut clauses = Vec::with_capacity((m + 1) * (top + 1) * 4);
    let mut s: Vec<Vec<i32>> = Vec::with_capacity(m + 1);

    let base: Vec<i32> = (0..=top).map(|_| allocator.fresh()).collect();
    clauses.push(Clause::unit(base[0]));
    for &var in &base[1..] {
        clauses.push(Clause::unit(-var));
    }
    s.push(base);

    for i in 1..=m {
        let x = variables[i - 1];
        let row: Vec<i32> = (0..=top).map(|_| allocator.fresh()).collect();
        let prev = &s[i - 1];

        // "at least 0" holds at every step
        clauses.push(Clause::unit(row[0]));

        for j in 1..=top {
            // Forward: s[i][j] implies one of the two disjuncts
            clauses.push(Clause::new(vec![-row[j], prev[j], x]));
            clauses.push(Clause::new(vec![-row[j], prev[j], prev[j - 1]]));
            // Backward: either disjunct implies s[i][j]
            clauses.push(Clause::binary(-prev[j], row[j]));
            clauses.push(Clause::new(vec![-x, -prev[j - 1], row[j]]));
        }

        s.push(row);
    }

    (s, clauses)
}
