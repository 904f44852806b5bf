#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, Storage,
};
use cw2::{get_contract_version, set_contract_version};

pub mod error;
pub mod msg;
pub mod state;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, TokenInfoResponse,
};
use crate::state::{Config, TokenRecord, CONFIG, MINTED_AT, NEXT_TOKEN_ID, TOKENS, TOTAL_SUPPLY};

const CONTRACT_NAME: &str = "crates.io:badge_nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// string-utf8 256 相当
pub const MAX_URI_BYTES: usize = 256;

/* ===========================
 * role helpers
 * =========================== */

fn ensure_admin(cfg: &Config, sender: &Addr) -> Result<(), ContractError> {
    if &cfg.admin != sender {
        return Err(ContractError::NotAdmin);
    }
    Ok(())
}

fn ensure_minter(cfg: &Config, sender: &Addr) -> Result<(), ContractError> {
    if &cfg.minter != sender {
        return Err(ContractError::NotMinter);
    }
    Ok(())
}

fn load_token(store: &dyn Storage, token_id: u64) -> Result<TokenRecord, ContractError> {
    TOKENS
        .may_load(store, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })
}

fn load_minted_at(store: &dyn Storage, token_id: u64) -> Result<u64, ContractError> {
    MINTED_AT
        .may_load(store, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })
}

/* ===========================
 * entry points
 * =========================== */

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let admin = match msg.admin {
        Some(a) => deps.api.addr_validate(&a)?,
        None => info.sender.clone(),
    };
    let minter = match msg.minter {
        Some(m) => deps.api.addr_validate(&m)?,
        None => admin.clone(),
    };

    let cfg = Config {
        admin: admin.clone(),
        minter: minter.clone(),
        mint_paused: false,
        burn_enabled: false,
    };
    CONFIG.save(deps.storage, &cfg)?;
    NEXT_TOKEN_ID.save(deps.storage, &1)?;
    TOTAL_SUPPLY.save(deps.storage, &0)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("minter", minter))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { recipient, uri } => exec_mint(deps, env, info, recipient, uri),
        ExecuteMsg::Burn { token_id } => exec_burn(deps, info, token_id),
        ExecuteMsg::SetMintPaused { value } => exec_set_mint_paused(deps, info, value),
        ExecuteMsg::SetBurnEnabled { value } => exec_set_burn_enabled(deps, info, value),
        ExecuteMsg::SetMinter { minter } => exec_set_minter(deps, info, minter),
    }
}

// 検査はすべて書き込みより前に行う（失敗時に状態を変えない）
fn exec_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    uri: String,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    ensure_minter(&cfg, &info.sender)?;
    if cfg.mint_paused {
        return Err(ContractError::MintPaused);
    }

    let owner = deps.api.addr_validate(&recipient)?;
    if uri.len() > MAX_URI_BYTES {
        return Err(ContractError::InvalidUri { max: MAX_URI_BYTES });
    }

    let token_id = NEXT_TOKEN_ID.load(deps.storage)?;
    let next = token_id
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("token id overflow"))?;
    let supply = TOTAL_SUPPLY.load(deps.storage)? + 1;
    let minted_at = env.block.time.seconds();

    let rec = TokenRecord {
        owner: owner.clone(),
        uri: uri.clone(),
        minter: info.sender.clone(),
    };
    TOKENS.save(deps.storage, token_id, &rec)?;
    MINTED_AT.save(deps.storage, token_id, &minted_at)?;
    NEXT_TOKEN_ID.save(deps.storage, &next)?;
    TOTAL_SUPPLY.save(deps.storage, &supply)?;

    Ok(Response::new()
        .set_data(to_json_binary(&token_id)?)
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", owner)
        .add_attribute("minter", info.sender)
        .add_attribute("uri", uri)
        .add_attribute("minted_at", minted_at.to_string()))
}

fn exec_burn(deps: DepsMut, info: MessageInfo, token_id: u64) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if !cfg.burn_enabled {
        return Err(ContractError::BurnDisabled);
    }
    let rec = load_token(deps.storage, token_id)?;
    if rec.owner != info.sender {
        return Err(ContractError::NotTokenOwner { token_id });
    }

    let supply = TOTAL_SUPPLY.load(deps.storage)?.saturating_sub(1);
    TOKENS.remove(deps.storage, token_id);
    MINTED_AT.remove(deps.storage, token_id);
    TOTAL_SUPPLY.save(deps.storage, &supply)?;

    Ok(Response::new()
        .set_data(to_json_binary(&true)?)
        .add_attribute("action", "burn")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", rec.owner))
}

fn exec_set_mint_paused(
    deps: DepsMut,
    info: MessageInfo,
    value: bool,
) -> Result<Response, ContractError> {
    CONFIG.update(deps.storage, |mut cfg| -> Result<_, ContractError> {
        ensure_admin(&cfg, &info.sender)?;
        cfg.mint_paused = value;
        Ok(cfg)
    })?;

    Ok(Response::new()
        .set_data(to_json_binary(&value)?)
        .add_attribute("action", "set_mint_paused")
        .add_attribute("value", value.to_string()))
}

fn exec_set_burn_enabled(
    deps: DepsMut,
    info: MessageInfo,
    value: bool,
) -> Result<Response, ContractError> {
    CONFIG.update(deps.storage, |mut cfg| -> Result<_, ContractError> {
        ensure_admin(&cfg, &info.sender)?;
        cfg.burn_enabled = value;
        Ok(cfg)
    })?;

    Ok(Response::new()
        .set_data(to_json_binary(&value)?)
        .add_attribute("action", "set_burn_enabled")
        .add_attribute("value", value.to_string()))
}

fn exec_set_minter(
    deps: DepsMut,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    let mut cfg = CONFIG.load(deps.storage)?;
    ensure_admin(&cfg, &info.sender)?;
    cfg.minter = deps.api.addr_validate(&minter)?;
    CONFIG.save(deps.storage, &cfg)?;

    Ok(Response::new()
        .set_data(to_json_binary(&cfg.minter)?)
        .add_attribute("action", "set_minter")
        .add_attribute("minter", cfg.minter))
}

/* ============== query entry ============== */

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let bin = match msg {
        QueryMsg::TokenInfo { token_id } => to_json_binary(&query_token_info(deps, token_id)?)?,
        QueryMsg::TokenMintedAt { token_id } => {
            to_json_binary(&load_minted_at(deps.storage, token_id)?)?
        }
        QueryMsg::TotalSupply {} => to_json_binary(&TOTAL_SUPPLY.load(deps.storage)?)?,
        QueryMsg::Owner { token_id } => to_json_binary(&load_token(deps.storage, token_id)?.owner)?,
        QueryMsg::TokenUri { token_id } => to_json_binary(&load_token(deps.storage, token_id)?.uri)?,
        QueryMsg::LastTokenId {} => {
            to_json_binary(&NEXT_TOKEN_ID.load(deps.storage)?.saturating_sub(1))?
        }
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
    };
    Ok(bin)
}

fn query_token_info(deps: Deps, token_id: u64) -> Result<TokenInfoResponse, ContractError> {
    let rec = load_token(deps.storage, token_id)?;
    let minted_at = load_minted_at(deps.storage, token_id)?;
    Ok(TokenInfoResponse {
        owner: rec.owner,
        uri: rec.uri,
        minter: rec.minter,
        minted_at,
    })
}

fn query_config(deps: Deps) -> Result<ConfigResponse, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: cfg.admin,
        minter: cfg.minter,
        mint_paused: cfg.mint_paused,
        burn_enabled: cfg.burn_enabled,
    })
}

/* ============== migrate ============== */

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Std(StdError::generic_err(format!(
            "cannot migrate from contract {}",
            stored.contract
        ))));
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
