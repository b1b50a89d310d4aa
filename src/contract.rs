// SPDX-FileCopyrightText: 2026 oddeven developers
// SPDX-License-Identifier: MIT

//! Built-in contract templates.
//!
//! Currently the only template is [`OddEvenDiff`], whose single getter reports the
//! difference between the number of odd and even elements of its input.

use crate::chain::ContractAbi;

/// Contract reporting parity counts of integer sequences.
///
/// Stateless. Every deployed instance behaves identically, and nothing about a call
/// outlives the call itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct OddEvenDiff;

impl OddEvenDiff {
    /// Template name this contract registers under.
    pub const NAME: &'static str = "OddEvenDiff";

    /// Construct new odd/even difference contract.
    pub fn new() -> Self {
        Self
    }

    /// Count of odd elements minus count of even elements.
    ///
    /// Parity is decided by `value % 2 == 0`, so negative odd values count as odd and
    /// an empty input yields zero.
    pub fn get_odd_even_diff(&self, values: &[i64]) -> i64 {
        let mut odd_count = 0i64;
        let mut even_count = 0i64;
        for value in values {
            if value % 2 == 0 {
                even_count += 1;
            } else {
                odd_count += 1;
            }
        }

        odd_count - even_count
    }
}

impl ContractAbi for OddEvenDiff {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn dispatch(&self, method: &str, input: &[i64]) -> Option<i64> {
        match method {
            "get_odd_even_diff" => Some(self.get_odd_even_diff(input)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq as pretty_assert_eq;
    use simple_test_case::test_case;

    #[test_case(vec![2, 4, 6, 8, 10], -5; "all even")]
    #[test_case(vec![1, 3, 5, 7, 9], 5; "all odd")]
    #[test_case(vec![1, 2, 3, 4, 5], 1; "mixed")]
    #[test_case(Vec::new(), 0; "empty")]
    #[test_case(vec![-3, -2, 0], -1; "negative values")]
    #[test]
    fn smoke_get_odd_even_diff(values: Vec<i64>, expect: i64) {
        let contract = OddEvenDiff::new();
        pretty_assert_eq!(contract.get_odd_even_diff(&values), expect);
    }

    #[test_case("get_odd_even_diff", Some(1); "known method")]
    #[test_case("getOddEvenDiff", None; "unknown method")]
    #[test]
    fn smoke_dispatch(method: &str, expect: Option<i64>) {
        let contract = OddEvenDiff::new();
        pretty_assert_eq!(contract.dispatch(method, &[1, 2, 3]), expect);
    }
}
