/*
[INPUT]:  A logged-in session and a composed transaction
[OUTPUT]: Sign flow walkthrough on stdout
[POS]:    Examples - transaction signing handshake demonstration
[UPDATE]: When the sign flow changes
*/

use idport_adapter::*;

/// Example: Sign flow
///
/// Demonstrates composing a sample transaction per chain family and the
/// sign request options.
fn main() {
    println!("=== IdPort Sign Example ===\n");

    // Compose a sample transfer for each supported chain family
    let eos_action = tx::eos_token_transfer(
        "alice.eos",
        "bob.eos",
        "1".parse().unwrap(),
        "EOS",
        "idport sample transaction",
    );
    println!("EOS action:\n{}\n", serde_json::to_string_pretty(&eos_action).unwrap());

    let algo_payment = tx::algorand_payment(
        "FROMADDR",
        "VBS2IRDUN2E7FJGYEKQXUAQX3XWL6UNBJZZJHB7CJDMWHUKXAGSHU5NXNQ",
        1_000,
        "idport sample transaction",
    );
    println!("Algorand payment:\n{}\n", serde_json::to_string_pretty(&algo_payment).unwrap());

    // The service signs an actions envelope; wallets take the bare object
    let wrapped = tx::wrap_for_provider(SignProvider::Service, eos_action);
    println!("Service envelope:\n{}\n", serde_json::to_string_pretty(&wrapped).unwrap());

    // Sign options as the coordinator submits them:
    //   SignOptions {
    //       provider: SignProvider::Wallet(ExternalWalletType::Algosigner),
    //       chain_account: "FROMADDR".into(),
    //       chain_network: ChainNetwork::AlgoTest,
    //       transaction: algo_payment,
    //       broadcast: true,
    //       return_signed_transaction: false,
    //       prevent_auto_sign: false,
    //       state: Some("abc".into()),
    //   }
    // coordinator.sign(options).await then yields either
    // SignFlow::Redirect(sign_url) or SignFlow::Completed(outcome).

    println!("✓ Sign example complete");
}
