/*
[INPUT]:  Chain accounts, transfer parameters, user permissions
[OUTPUT]: Transaction objects ready for a sign request
[POS]:    Transaction layer - composition helpers per chain family
[UPDATE]: When adding chain families or transaction shapes
*/

use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::types::{AccountType, SignProvider, UserData};

/// Compose a standard `eosio.token` transfer action.
///
/// Quantity uses the EOS asset format with four decimal places,
/// e.g. `"1.0000 EOS"`.
pub fn eos_token_transfer(
    from: &str,
    to: &str,
    quantity: Decimal,
    symbol: &str,
    memo: &str,
) -> Value {
    json!({
        "account": "eosio.token",
        "name": "transfer",
        "authorization": [{
            "actor": from,
            "permission": "active",
        }],
        "data": {
            "from": from,
            "to": to,
            "quantity": format_eos_asset(quantity, symbol),
            "memo": memo,
        },
    })
}

/// Compose an Algorand payment transaction.
pub fn algorand_payment(from: &str, to: &str, microalgos: u64, note: &str) -> Value {
    json!({
        "type": "pay",
        "from": from,
        "to": to,
        "amount": microalgos,
        "note": note,
    })
}

/// Wrap a transaction for the selected sign provider.
///
/// The identity service signs an `{actions: [...]}` envelope; external
/// wallets take the bare transaction.
pub fn wrap_for_provider(provider: SignProvider, transaction: Value) -> Value {
    match provider {
        SignProvider::Service => json!({ "actions": [transaction] }),
        SignProvider::Wallet(_) => transaction,
    }
}

/// Comma-joined chain accounts of the user's multisig permissions for the
/// given chain account; `None` when there are none.
pub fn multisig_chain_accounts(user: &UserData, chain_account: &str) -> Option<String> {
    let joined = user
        .permissions
        .iter()
        .filter(|permission| {
            permission.chain_account == chain_account
                && permission.account_type == Some(AccountType::Msig)
        })
        .map(|permission| permission.chain_account.as_str())
        .collect::<Vec<_>>()
        .join(",");

    (!joined.is_empty()).then_some(joined)
}

fn format_eos_asset(quantity: Decimal, symbol: &str) -> String {
    format!("{:.4} {}", quantity, symbol)
}
