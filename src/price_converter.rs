multiversx_sc::imports!();

use crate::errors::FundError;
use crate::price_feed_proxy;
use crate::types::FixedPointPrice;

/// EGLD is denominated in 10^-18 units.
pub const NATIVE_DECIMALS: u32 = 18;

/// USD values are compared at 18 decimals regardless of the feed's precision.
pub const USD_DECIMALS: u32 = 18;

pub fn pow10<M: ManagedTypeApi>(exp: u32) -> BigUint<M> {
    BigUint::from(10u64).pow(exp)
}

/// Rejects zero and negative feed answers.
pub fn positive_price<M: ManagedTypeApi>(answer: BigInt<M>) -> Result<BigUint<M>, FundError> {
    match answer.into_big_uint().into_option() {
        Some(price) if price > 0u64 => Ok(price),
        _ => Err(FundError::InvalidPrice),
    }
}

/// amount * price * 10^USD_DECIMALS / (10^NATIVE_DECIMALS * 10^feed_decimals)
pub fn usd_value<M: ManagedTypeApi>(amount: &BigUint<M>, price: &FixedPointPrice<M>) -> BigUint<M> {
    let numerator = amount * &price.answer * pow10::<M>(USD_DECIMALS);
    let denominator = pow10::<M>(NATIVE_DECIMALS) * pow10::<M>(price.decimals as u32);
    numerator / denominator
}

#[multiversx_sc::module]
pub trait PriceConverterModule {
    fn latest_price(&self) -> Result<FixedPointPrice<Self::Api>, FundError> {
        let feed = self.price_feed().get();

        let round: MultiValue5<u64, BigInt<Self::Api>, u64, u64, u64> = self
            .tx()
            .to(&feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .latest_round_data()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let (_round_id, answer, _started_at, _updated_at, _answered_in_round) = round.into_tuple();

        let decimals: u8 = self
            .tx()
            .to(&feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call_readonly();

        Ok(FixedPointPrice {
            answer: positive_price(answer)?,
            decimals,
        })
    }

    /// USD value of `amount`, scaled to `USD_DECIMALS`.
    fn conversion_rate(&self, amount: &BigUint<Self::Api>) -> Result<BigUint<Self::Api>, FundError> {
        let price = self.latest_price()?;
        Ok(usd_value(amount, &price))
    }

    #[view(getConversionRate)]
    fn get_conversion_rate(&self, amount: BigUint) -> BigUint {
        match self.conversion_rate(&amount) {
            Ok(usd) => usd,
            Err(err) => sc_panic!(err.as_str()),
        }
    }

    #[view(getVersion)]
    fn get_version(&self) -> u64 {
        let feed = self.price_feed().get();
        self.tx()
            .to(&feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .version()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getPriceFeed)]
    #[storage_mapper("priceFeed")]
    fn price_feed(&self) -> SingleValueMapper<ManagedAddress>;
}
