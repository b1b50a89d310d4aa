// SPDX-FileCopyrightText: 2026 oddeven developers
// SPDX-License-Identifier: MIT

use oddeven::{chain::DevChain, contract::OddEvenDiff};

use anyhow::Result;
use pretty_assertions::assert_eq as pretty_assert_eq;

#[tokio::test]
async fn get_odd_even_diff_for_all_even_input() -> Result<()> {
    let chain = DevChain::new();
    let factory = chain.factory(OddEvenDiff::NAME)?;
    let contract = factory.deploy().await?;

    // pretty_assert_eq!(contract.call("get_odd_even_diff", &[1, 2, 3, 4, 5]).await?, 1);
    // pretty_assert_eq!(contract.call("get_odd_even_diff", &[1, 3, 5, 7, 9]).await?, 5);
    pretty_assert_eq!(contract.call("get_odd_even_diff", &[2, 4, 6, 8, 10]).await?, -5);

    Ok(())
}

#[tokio::test]
async fn deploy_fails_for_unregistered_template() {
    let chain = DevChain::new();
    let result = chain.factory("TestContract");
    assert!(result.is_err());
}
