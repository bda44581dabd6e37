// FILE: bin/cli.rs
// Deploys the savings pot and runs maintenance scenarios against it.

use odra::casper_types::U256;
use odra::host::HostEnv;
use odra::prelude::Addressable;

use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt, OdraCli,
};

use savings_pot::{
    math::{wad::format_wad, Ray},
    pot::{Pot, PotInitArgs},
    token::{MockToken, MockTokenInitArgs},
};

/// Gas for installing a contract (300 CSPR)
const DEPLOY_GAS: u64 = 300_000_000_000;
/// Gas for a single entry point call (5 CSPR)
const CALL_GAS: u64 = 5_000_000_000;
/// Seconds a deposit must sit before it can be withdrawn
const FLASH_LOAN_DELAY: u64 = 5;

/// Deploys the reference token stand-in and the pot on top of it
pub struct PotDeployScript;

impl DeployScript for PotDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        let token = MockToken::load_or_deploy(
            env,
            MockTokenInitArgs {
                name: "lisUSD".to_string(),
                symbol: "lisUSD".to_string(),
                initial_supply: U256::zero(),
            },
            container,
            DEPLOY_GAS,
        )?;
        log::info!("reference token at {:?}", token.address());

        let pot = Pot::load_or_deploy(
            env,
            PotInitArgs {
                name: "lisUSD savings".to_string(),
                symbol: "sLisUSD".to_string(),
                token: token.address(),
                exit_delay: 0,
                flash_loan_delay: FLASH_LOAN_DELAY,
            },
            container,
            DEPLOY_GAS,
        )?;

        println!("Pot deployed at: {:?}", pot.address());
        Ok(())
    }
}

/// Prints the pot's rate state and totals
pub struct StatusScenario;

impl Scenario for StatusScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args,
    ) -> Result<(), Error> {
        let pot = container.contract_ref::<Pot>(env)?;
        log::debug!("reading pot at {:?}", pot.address());

        println!("live:            {}", pot.live());
        println!("rate:            {}", Ray::from_scaled_val(pot.rate()));
        println!("index:           {}", Ray::from_scaled_val(pot.index()));
        println!("last accrual:    {}", pot.last_accrual_time());
        println!("total principal: {}", format_wad(pot.total_principal()));
        println!("reserve:         {}", format_wad(pot.reserve_balance()));
        Ok(())
    }
}

impl ScenarioMetadata for StatusScenario {
    const NAME: &'static str = "status";
    const DESCRIPTION: &'static str = "Prints the rate, index and reserve of the pot";
}

/// Brings the pot's rate index up to date
pub struct DripScenario;

impl Scenario for DripScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args,
    ) -> Result<(), Error> {
        let mut pot = container.contract_ref::<Pot>(env)?;
        let before = pot.index();

        env.set_gas(CALL_GAS);
        let after = pot.accrue();

        log::info!("index moved from {} to {}", before, after);
        println!("index: {}", Ray::from_scaled_val(after));
        Ok(())
    }
}

impl ScenarioMetadata for DripScenario {
    const NAME: &'static str = "drip";
    const DESCRIPTION: &'static str = "Accrues interest up to the current block time";
}

pub fn main() {
    OdraCli::new()
        .about("CLI tool for the savings pot")
        .deploy(PotDeployScript)
        .contract::<Pot>()
        .contract::<MockToken>()
        .scenario(StatusScenario)
        .scenario(DripScenario)
        .build()
        .run();
}
