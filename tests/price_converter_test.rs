// Fixed-point conversion checks. These run on StaticApi managed types and
// need no VM or price-feed contract.

use fund_me::errors::FundError;
use fund_me::price_converter::{pow10, positive_price, usd_value};
use fund_me::types::FixedPointPrice;
use multiversx_sc_scenario::imports::*;

const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

fn usd(whole: u64) -> BigUint<StaticApi> {
    BigUint::from(whole) * pow10::<StaticApi>(18)
}

fn price(whole_usd: u64, decimals: u8) -> FixedPointPrice<StaticApi> {
    FixedPointPrice {
        answer: BigUint::from(whole_usd) * pow10::<StaticApi>(decimals as u32),
        decimals,
    }
}

#[test]
fn test_one_egld_at_2000_usd() {
    let value = usd_value(&BigUint::from(ONE_EGLD), &price(2_000, 8));
    assert_eq!(value, usd(2_000));
}

#[test]
fn test_hundredth_egld_is_below_minimum() {
    let value = usd_value(&BigUint::from(ONE_EGLD / 100), &price(2_000, 8));
    assert_eq!(value, usd(20));
    assert!(value < fund_me::minimum_usd::<StaticApi>());
}

#[test]
fn test_feed_precision_does_not_change_result() {
    let amount = BigUint::from(3 * ONE_EGLD / 2);
    let eight = usd_value(&amount, &price(2_000, 8));
    let eighteen = usd_value(&amount, &price(2_000, 18));
    let zero = usd_value(&amount, &price(2_000, 0));
    assert_eq!(eight, usd(3_000));
    assert_eq!(eight, eighteen);
    assert_eq!(eight, zero);
}

#[test]
fn test_conversion_truncates() {
    // 1 wei at 1.5 USD with 1 decimal -> 1.5 * 10^-18 USD -> 1 at 18 decimals
    let price = FixedPointPrice {
        answer: BigUint::<StaticApi>::from(15u64),
        decimals: 1,
    };
    assert_eq!(usd_value(&BigUint::from(1u64), &price), BigUint::from(1u64));
}

#[test]
fn test_zero_amount_is_zero_usd() {
    let value = usd_value(&BigUint::<StaticApi>::zero(), &price(2_000, 8));
    assert_eq!(value, BigUint::zero());
}

#[test]
fn test_minimum_usd_is_fifty_dollars() {
    assert_eq!(fund_me::minimum_usd::<StaticApi>(), usd(50));
}

#[test]
fn test_positive_price_accepted() {
    let answer = BigInt::<StaticApi>::from(200_000_000_000i64);
    assert_eq!(
        positive_price(answer),
        Ok(BigUint::from(200_000_000_000u64))
    );
}

#[test]
fn test_zero_and_negative_prices_rejected() {
    assert_eq!(
        positive_price(BigInt::<StaticApi>::from(0i64)),
        Err(FundError::InvalidPrice)
    );
    assert_eq!(
        positive_price(BigInt::<StaticApi>::from(-200_000_000_000i64)),
        Err(FundError::InvalidPrice)
    );
}

#[test]
fn test_error_messages_are_stable() {
    assert_eq!(FundError::NotOwner.as_str(), "FundMe__NotOwner");
    assert_eq!(
        FundError::InsufficientContribution.as_str(),
        "FundMe__InsufficientContribution"
    );
    assert_eq!(FundError::TransferFailed.as_str(), "FundMe__TransferFailed");
    assert_eq!(FundError::IndexOutOfRange.as_str(), "FundMe__IndexOutOfRange");
    assert_eq!(FundError::InvalidPrice.as_str(), "FundMe__InvalidPrice");
}
