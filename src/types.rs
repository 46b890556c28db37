multiversx_sc::imports!();

// ============================================================
// Fixed-point price - one feed reading, already sign-checked
// ============================================================

/// Price of one native unit in USD, scaled by `10^decimals`.
pub struct FixedPointPrice<M: ManagedTypeApi> {
    pub answer: BigUint<M>,
    pub decimals: u8,
}
