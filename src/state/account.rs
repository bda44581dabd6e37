use {
    crate::{
        error::PotError,
        math::{Ray, TryAdd, TrySub},
    },
    odra::casper_types::U256,
};

/// A depositor's position in the pot.
#[odra::odra_type]
#[derive(Default)]
pub struct Account {
    /// Face value deposited, net of withdrawals
    pub principal: U256,
    /// Normalized balance; `shares * index` is the redeemable value
    pub shares: U256,
    /// Block time in seconds of the latest deposit
    pub last_deposit_time: u64,
}

/// Amounts paid out by a withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub principal: U256,
    pub interest: U256,
}

impl Payout {
    pub fn total(&self) -> Result<U256, PotError> {
        self.principal.try_add(self.interest)
    }
}

impl Account {
    /// Redeemable value at `index`. Never reported below principal, share
    /// truncation on deposit can otherwise lose one unit.
    pub fn value(&self, index: Ray) -> Result<U256, PotError> {
        let value = index.try_scale(self.shares)?;
        Ok(value.max(self.principal))
    }

    /// Interest accrued and not yet withdrawn
    pub fn earned(&self, index: Ray) -> Result<U256, PotError> {
        self.value(index)?.try_sub(self.principal)
    }

    /// Credit `amount` at the current index.
    pub fn deposit(&mut self, amount: U256, index: Ray, now: u64) -> Result<(), PotError> {
        let shares = index.try_unscale(amount)?;
        self.shares = self.shares.try_add(shares)?;
        self.principal = self.principal.try_add(amount)?;
        self.last_deposit_time = now;
        Ok(())
    }

    /// Withdraw `amount` of principal together with all earned interest.
    ///
    /// The remaining shares are rebased onto the current index, so what is
    /// left starts again with nothing earned.
    pub fn withdraw(&mut self, amount: U256, index: Ray) -> Result<Payout, PotError> {
        if amount > self.principal {
            return Err(PotError::InsufficientPrincipal);
        }
        let interest = self.earned(index)?;
        let principal = self.principal.try_sub(amount)?;
        let shares = index.try_unscale(principal)?;

        self.principal = principal;
        self.shares = shares;
        Ok(Payout {
            principal: amount,
            interest,
        })
    }

    /// Seconds held since the latest deposit
    pub fn held_for(&self, now: u64) -> u64 {
        now.saturating_sub(self.last_deposit_time)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ok;
    use crate::math::{TryMul, WAD};

    fn units(n: u128) -> U256 {
        U256::from(n * WAD)
    }

    fn index(s: &str) -> Ray {
        Ray::from_scaled_val(U256::from_dec_str(s).unwrap())
    }

    #[test]
    fn nothing_earned_right_after_deposit() {
        for idx in [Ray::one(), index("1100000000000000000000000000"), index("1048808848170151546991453513")] {
            let mut account = Account::default();
            ok(account.deposit(units(10), idx, 5));
            assert_eq!(ok(account.earned(idx)), U256::zero());
            assert_eq!(ok(account.value(idx)), units(10));
            assert_eq!(account.last_deposit_time, 5);
        }
    }

    #[test]
    fn single_depositor_earns_index_growth() {
        let mut account = Account::default();
        ok(account.deposit(units(10), Ray::one(), 0));

        let grown = index("1100000000000000000000000000");
        assert_eq!(ok(account.earned(grown)), units(1));
        assert_eq!(ok(account.value(grown)), units(11));
    }

    #[test]
    fn later_deposit_does_not_earn_past_growth() {
        let mut account = Account::default();
        let at_deposit = index("1100000000000000000000000000");
        ok(account.deposit(units(10), at_deposit, 0));

        // index grows by another 10%
        let later = ok(at_deposit.try_mul(index("1100000000000000000000000000")));
        let earned = ok(account.earned(later));
        let expected = units(1);
        let diff = if earned > expected { earned - expected } else { expected - earned };
        assert!(diff <= U256::from(2u64));
    }

    #[test]
    fn withdraw_realizes_all_interest_and_rebases() {
        let mut account = Account::default();
        ok(account.deposit(units(10), Ray::one(), 0));

        let grown = index("1100000000000000000000000000");
        let payout = ok(account.withdraw(units(4), grown));
        assert_eq!(payout.principal, units(4));
        assert_eq!(payout.interest, units(1));
        assert_eq!(ok(payout.total()), units(5));

        assert_eq!(account.principal, units(6));
        assert_eq!(ok(account.earned(grown)), U256::zero());
        assert_eq!(ok(account.value(grown)), units(6));
    }

    #[test]
    fn full_withdraw_leaves_empty_record() {
        let mut account = Account::default();
        ok(account.deposit(units(10), Ray::one(), 0));
        let payout = ok(account.withdraw(units(10), Ray::one()));
        assert_eq!(ok(payout.total()), units(10));
        assert_eq!(account.principal, U256::zero());
        assert_eq!(account.shares, U256::zero());
    }

    #[test]
    fn withdraw_more_than_principal_is_rejected() {
        let mut account = Account::default();
        ok(account.deposit(units(10), Ray::one(), 0));
        let result = account.withdraw(units(11), index("1100000000000000000000000000"));
        assert!(matches!(result, Err(PotError::InsufficientPrincipal)));
        assert_eq!(account.principal, units(10));
        assert_eq!(account.shares, units(10));
    }

    #[test]
    fn held_for_counts_from_latest_deposit() {
        let mut account = Account::default();
        ok(account.deposit(units(1), Ray::one(), 10));
        assert_eq!(account.held_for(14), 4);
        ok(account.deposit(units(1), Ray::one(), 20));
        assert_eq!(account.held_for(21), 1);
        assert_eq!(account.held_for(0), 0);
    }
}
