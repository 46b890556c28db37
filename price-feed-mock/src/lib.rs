#![no_std]

multiversx_sc::imports!();

pub mod price_feed_mock_proxy;

/// Reported by `version`, matching the aggregator interface revision it mimics.
const AGGREGATOR_VERSION: u64 = 4;

// ============================================================
// Contract - Chainlink-style aggregator with a settable answer
// ============================================================

#[multiversx_sc::contract]
pub trait PriceFeedMock {
    #[init]
    fn init(&self, decimals: u8, initial_answer: BigInt) {
        self.decimals().set(decimals);
        self.update_answer(initial_answer);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(updateAnswer)]
    fn update_answer(&self, answer: BigInt) {
        let round_id = self.latest_round().get() + 1;
        let timestamp = self.blockchain().get_block_timestamp();

        self.latest_round().set(round_id);
        self.latest_answer().set(&answer);
        self.latest_timestamp().set(timestamp);
    }

    #[view(latestRoundData)]
    fn latest_round_data(&self) -> MultiValue5<u64, BigInt, u64, u64, u64> {
        let round_id = self.latest_round().get();
        let timestamp = self.latest_timestamp().get();
        (
            round_id,
            self.latest_answer().get(),
            timestamp,
            timestamp,
            round_id,
        )
            .into()
    }

    #[view(version)]
    fn version(&self) -> u64 {
        AGGREGATOR_VERSION
    }

    #[view(decimals)]
    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;

    #[storage_mapper("latestRound")]
    fn latest_round(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("latestAnswer")]
    fn latest_answer(&self) -> SingleValueMapper<BigInt>;

    #[storage_mapper("latestTimestamp")]
    fn latest_timestamp(&self) -> SingleValueMapper<u64>;
}
