// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
/*! Chained multiply smoke test.

Exercises the core's `mul` instruction and register file by pushing three
chained products through the result register block. Every value is stored
with a volatile write and every factor is read back with a volatile read, so
each multiply consumes state that a previous step already made observable.

 - [`run_chain`] performs the sequence against a [`ResultRegisters`] block.
 - [`expected_products`] computes the products the block must hold afterwards.
 - [`self_test`](self_test::self_test) wraps the sequence in named checks.
*/

use crate::result_regs::ResultRegisters;


/// Canonical seed for slot A.
pub const SEED_A: u32 = 3;
/// Canonical seed for slot B.
pub const SEED_B: u32 = 4;

/// The values held by the result register block after a run of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainProducts {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
}

/// Compute the products the chain must leave behind for the given seeds.
///
/// Multiplication wraps on overflow, matching the core's `mul` instruction.
/// The canonical seeds never wrap.
pub fn expected_products(seed_a: u32, seed_b: u32) -> ChainProducts {
    let c = seed_a.wrapping_mul(seed_b);
    let d = c.wrapping_mul(seed_a);
    let e = d.wrapping_mul(seed_b);
    ChainProducts {
        a: seed_a,
        b: seed_b,
        c,
        d,
        e,
    }
}

/// Run the chained multiply sequence through the result register block.
///
/// Stores both seeds, then computes and stores `c = a * b`, `d = c * a` and
/// `e = d * b`. Every factor is read back from the block before it is used,
/// so the data dependency chain runs through the observable slots.
pub fn run_chain(regs: &ResultRegisters, seed_a: u32, seed_b: u32) -> ChainProducts {
    regs.set_a(seed_a);
    regs.set_b(seed_b);

    let c = regs.a().wrapping_mul(regs.b());
    regs.set_c(c);

    let d = regs.c().wrapping_mul(regs.a());
    regs.set_d(d);

    let e = regs.d().wrapping_mul(regs.b());
    regs.set_e(e);

    ChainProducts {
        a: regs.a(),
        b: regs.b(),
        c: regs.c(),
        d: regs.d(),
        e: regs.e(),
    }
}
