use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    /// 省略時は instantiate の sender
    pub admin: Option<String>,
    /// 省略時は admin
    pub minter: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// minter のみ。成功時は data に新しい token_id
    Mint { recipient: String, uri: String },
    /// 所有者のみ、burn_enabled のときだけ
    Burn { token_id: u64 },

    SetMintPaused { value: bool },
    SetBurnEnabled { value: bool },
    SetMinter { minter: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TokenInfoResponse)]
    TokenInfo { token_id: u64 },

    #[returns(u64)]
    TokenMintedAt { token_id: u64 },

    #[returns(u64)]
    TotalSupply {},

    #[returns(Addr)]
    Owner { token_id: u64 },

    #[returns(String)]
    TokenUri { token_id: u64 },

    /// まだ mint していなければ 0
    #[returns(u64)]
    LastTokenId {},

    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct TokenInfoResponse {
    pub owner: Addr,
    pub uri: String,
    pub minter: Addr,
    pub minted_at: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub minter: Addr,
    pub mint_paused: bool,
    pub burn_enabled: bool,
}
