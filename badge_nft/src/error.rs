use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("[101] sender is not the minter")]
    NotMinter,

    #[error("[102] sender is not the admin")]
    NotAdmin,

    #[error("[105] sender does not own token {token_id}")]
    NotTokenOwner { token_id: u64 },

    #[error("[106] token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("[107] uri is longer than {max} bytes")]
    InvalidUri { max: usize },

    #[error("[108] minting is paused")]
    MintPaused,

    #[error("[111] burning is disabled")]
    BurnDisabled,
}

impl ContractError {
    /// Stable numeric code for business errors. `None` for std errors.
    pub fn code(&self) -> Option<u32> {
        match self {
            ContractError::Std(_) => None,
            ContractError::NotMinter => Some(101),
            ContractError::NotAdmin => Some(102),
            ContractError::NotTokenOwner { .. } => Some(105),
            ContractError::TokenNotFound { .. } => Some(106),
            ContractError::InvalidUri { .. } => Some(107),
            ContractError::MintPaused => Some(108),
            ContractError::BurnDisabled => Some(111),
        }
    }
}
