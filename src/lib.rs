#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod fund_me_proxy;
pub mod price_converter;
pub mod price_feed_proxy;
pub mod types;

use errors::FundError;
use price_converter::{pow10, USD_DECIMALS};

// ============================================================
// Constants
// ============================================================

/// Smallest accepted contribution, in whole USD
const MINIMUM_USD: u64 = 50;

/// MINIMUM_USD scaled to USD_DECIMALS
pub fn minimum_usd<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(MINIMUM_USD) * pow10::<M>(USD_DECIMALS)
}

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundMe: price_converter::PriceConverterModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, price_feed_address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.price_feed().set(&price_feed_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fund
    // Payment must be worth at least MINIMUM_USD at the current feed price.
    // ========================================================

    #[endpoint(fund)]
    #[payable("EGLD")]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        let usd_value = match self.conversion_rate(&payment_amount) {
            Ok(usd_value) => usd_value,
            Err(err) => sc_panic!(err.as_str()),
        };
        require!(
            usd_value >= minimum_usd::<Self::Api>(),
            (FundError::InsufficientContribution.as_str())
        );

        self.address_to_amount_funded(&caller)
            .update(|amount| *amount += &payment_amount);
        // Repeat funders are appended again
        self.funders().push(&caller);

        self.fund_event(&caller, &payment_amount, &usd_value);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Owner only. Walks the stored funder list entry by entry.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), (FundError::NotOwner.as_str()));

        let mut index = 1;
        while index <= self.funders().len() {
            let funder = self.funders().get(index);
            self.address_to_amount_funded(&funder).clear();
            index += 1;
        }
        let funders_cleared = self.funders().len();
        self.funders().clear();

        if let Err(err) = self.pay_out_owner(funders_cleared) {
            sc_panic!(err.as_str());
        }
    }

    // ========================================================
    // ENDPOINT: cheaperWithdraw
    // Same outcome as withdraw; the funder list is read from
    // storage once into memory before anything is mutated.
    // ========================================================

    #[endpoint(cheaperWithdraw)]
    fn cheaper_withdraw(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), (FundError::NotOwner.as_str()));

        let funders = self.funders().load_as_vec();
        for funder in funders.iter() {
            self.address_to_amount_funded(&funder).clear();
        }
        self.funders().clear();

        if let Err(err) = self.pay_out_owner(funders.len()) {
            sc_panic!(err.as_str());
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Sends the whole EGLD balance to the owner. A failed transfer reverts
    /// inside the VM; anything still held afterwards is reported as well.
    fn pay_out_owner(&self, funders_cleared: usize) -> Result<(), FundError> {
        let owner = self.owner().get();
        let balance = self.egld_balance();

        if balance > 0u64 {
            self.send().direct_egld(&owner, &balance);
        }
        if self.egld_balance() > 0u64 {
            return Err(FundError::TransferFailed);
        }

        self.withdraw_event(&owner, funders_cleared, &balance);
        Ok(())
    }

    fn egld_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // VIEWS - read-only queries
    // ========================================================

    #[view(getAddressToAmountFunded)]
    fn get_address_to_amount_funded(&self, funder: ManagedAddress) -> BigUint {
        self.address_to_amount_funded(&funder).get()
    }

    /// Zero-based position in the funder list.
    #[view(getFunder)]
    fn get_funder(&self, index: usize) -> ManagedAddress {
        require!(
            index < self.funders().len(),
            (FundError::IndexOutOfRange.as_str())
        );
        self.funders().get(index + 1)
    }

    #[view(getFundersCount)]
    fn get_funders_count(&self) -> usize {
        self.funders().len()
    }

    #[view(getMinimumUsd)]
    fn get_minimum_usd(&self) -> BigUint {
        minimum_usd::<Self::Api>()
    }

    #[view(getFundStats)]
    fn get_fund_stats(&self) -> MultiValue3<BigUint, usize, BigUint> {
        let balance = self.egld_balance();
        let funders_count = self.funders().len();
        (balance, funders_count, minimum_usd::<Self::Api>()).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fund")]
    fn fund_event(
        &self,
        #[indexed] funder: &ManagedAddress,
        #[indexed] amount: &BigUint,
        usd_value: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] funders_cleared: usize,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("addressToAmountFunded")]
    fn address_to_amount_funded(&self, funder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}
