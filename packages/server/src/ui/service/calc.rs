use async_trait::async_trait;
use serde_json::Value;

use crate::{
    infrastructure::dto::rpc::{
        CALC_SERVICE, CgpaArgs, TaxArgs, VoteArgs,
        calc_methods::{CALCULATE_CGPA, CALCULATE_TAX, IS_ELIGIBLE_TO_VOTE},
    },
    ui::error::DispatchError,
    usecase::{CalculatorError, CalculatorUseCase},
};

use super::{RemoteService, decode_args, encode_result, unknown_method};

const METHODS: &[&str] = &[CALCULATE_TAX, CALCULATE_CGPA, IS_ELIGIBLE_TO_VOTE];

/// `CalcService`: tax, CGPA and voting eligibility
#[derive(Debug, Clone, Default)]
pub struct CalcServiceEndpoint {
    usecase: CalculatorUseCase,
}

impl CalcServiceEndpoint {
    pub fn new(usecase: CalculatorUseCase) -> Self {
        Self { usecase }
    }
}

impl From<CalculatorError> for DispatchError {
    fn from(error: CalculatorError) -> Self {
        match error {
            CalculatorError::InvalidInput(e) => DispatchError::InvalidInput(e.to_string()),
        }
    }
}

#[async_trait]
impl RemoteService for CalcServiceEndpoint {
    fn name(&self) -> &'static str {
        CALC_SERVICE
    }

    fn methods(&self) -> &'static [&'static str] {
        METHODS
    }

    async fn invoke(&self, method: &str, args: Value) -> Result<Value, DispatchError> {
        match method {
            CALCULATE_TAX => {
                let args: TaxArgs = decode_args(args)?;
                encode_result(self.usecase.calculate_tax(args.income))
            }
            CALCULATE_CGPA => {
                let args: CgpaArgs = decode_args(args)?;
                encode_result(self.usecase.calculate_cgpa(&args.marks)?)
            }
            IS_ELIGIBLE_TO_VOTE => {
                let args: VoteArgs = decode_args(args)?;
                encode_result(self.usecase.is_eligible_to_vote(args.age))
            }
            _ => Err(unknown_method(self, method)),
        }
    }
}
