// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use proptest::prelude::*;
use test_strategy::proptest;

use tinyrv_sys::multiply::self_test::self_test;
use tinyrv_sys::multiply::{expected_products, run_chain, ChainProducts, SEED_A, SEED_B};
use tinyrv_sys::result_regs::{ResultRegisters, SLOT_COUNT};

/// Back the result register block with plain memory so the chain can run on
/// the host.
fn with_block<R>(f: impl FnOnce(&ResultRegisters) -> R) -> ([u32; SLOT_COUNT], R) {
    let mut slots = [0u32; SLOT_COUNT];
    let regs = unsafe { ResultRegisters::new(slots.as_mut_ptr() as *const ()) };
    let out = f(&regs);
    (slots, out)
}

#[test]
fn canonical_chain_products() {
    let (slots, products) = with_block(|regs| run_chain(regs, SEED_A, SEED_B));

    assert_eq!(
        products,
        ChainProducts {
            a: 3,
            b: 4,
            c: 12,
            d: 36,
            e: 144,
        }
    );
    assert_eq!(slots, [3, 4, 12, 36, 144]);
}

#[test]
fn self_test_passes_on_canonical_seeds() {
    let (_, failures) = with_block(|regs| {
        self_test(regs.clone())
            .filter_map(|(name, result)| result.map(|msg| (name, msg)))
            .collect::<Vec<_>>()
    });

    assert_eq!(failures, Vec::new());
}

#[test]
fn final_state_for_register_inspector() {
    // The smoke test binary reruns the canonical chain after the self test,
    // so the inspector always finds the canonical products in the block.
    let (slots, _) = with_block(|regs| {
        for _ in self_test(regs.clone()) {}
        run_chain(regs, SEED_A, SEED_B)
    });

    assert_eq!(slots, [3, 4, 12, 36, 144]);
}

#[proptest]
fn chain_matches_expected_for_any_seeds(seed_a: u32, seed_b: u32) {
    let (slots, products) = with_block(|regs| run_chain(regs, seed_a, seed_b));

    prop_assert_eq!(products, expected_products(seed_a, seed_b));
    prop_assert_eq!(
        slots,
        [products.a, products.b, products.c, products.d, products.e]
    );
}

#[proptest]
fn chain_is_idempotent_for_fixed_seeds(seed_a: u32, seed_b: u32) {
    let (slots, second) = with_block(|regs| {
        run_chain(regs, seed_a, seed_b);
        run_chain(regs, seed_a, seed_b)
    });

    prop_assert_eq!(second, expected_products(seed_a, seed_b));
    prop_assert_eq!(slots, [second.a, second.b, second.c, second.d, second.e]);
}
