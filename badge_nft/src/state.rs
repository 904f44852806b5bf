use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    // admin は instantiate 後に変更不可
    pub admin: Addr,
    pub minter: Addr,
    pub mint_paused: bool,
    pub burn_enabled: bool,
}

#[cw_serde]
pub struct TokenRecord {
    pub owner: Addr,
    pub uri: String,
    pub minter: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

// 次に割り当てる token_id（1 始まり、burn しても再利用しない）
pub const NEXT_TOKEN_ID: Item<u64> = Item::new("next_token_id");
pub const TOTAL_SUPPLY: Item<u64> = Item::new("total_supply");

pub const TOKENS: Map<u64, TokenRecord> = Map::new("tokens");
// TOKENS と同時に保存・削除する
pub const MINTED_AT: Map<u64, u64> = Map::new("minted_at");
