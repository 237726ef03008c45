/*
[INPUT]:  CLI arguments, YAML configuration, pasted callback URLs
[OUTPUT]: Interactive login/sign/discover session against the service
[POS]:    Binary entry point - terminal stand-in for the browser UI
[UPDATE]: When changing CLI flags or menu actions
*/

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use idport_adapter::{
    AppCredentials, AuthProvider, ChainFamily, Coordinator, CoordinatorConfig,
    ExternalWalletType, IdportClient, LoginFlow, Permission, SignFlow, SignOptions, SignProvider,
    UiState, tx,
};

use config::DemoConfig;

const WALLETS: &[ExternalWalletType] = &[
    ExternalWalletType::Algosigner,
    ExternalWalletType::Ledger,
    ExternalWalletType::Lynx,
    ExternalWalletType::Scatter,
    ExternalWalletType::Tokenpocket,
    ExternalWalletType::Wombat,
];

#[derive(Parser, Debug)]
#[command(name = "idport-demo", version, about = "IdPort redirect handshake demo")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", default_value = "idport-demo.yaml")]
    config_path: String,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = DemoConfig::from_file(&args.config_path)
        .with_context(|| format!("load config from {}", args.config_path))?;
    info!(app_id = %config.app_id, "starting idport-demo");

    let coordinator = build_coordinator(&config)?;
    coordinator.load_user_from_cache();

    let theme = ColorfulTheme::default();
    println!("{}", style("IdPort Demo").bold().cyan());

    loop {
        print_session(&coordinator.session().snapshot());

        let actions = vec![
            "Log in",
            "Paste callback URL",
            "Sign sample transaction",
            "Discover wallet keys",
            "Log out",
            "Exit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        let result = match selection {
            0 => login(&coordinator, &config, &theme).await,
            1 => paste_callback(&coordinator, &theme).await,
            2 => sign_sample_transaction(&coordinator, &config, &theme).await,
            3 => discover(&coordinator, &config, &theme).await,
            4 => logout(&coordinator),
            _ => return Ok(()),
        };

        // Failures are already in the session error slot; the next loop
        // iteration renders them. Nothing is retried automatically.
        if let Err(err) = result {
            info!(error = %err, "action failed");
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn build_coordinator(config: &DemoConfig) -> Result<Coordinator> {
    let credentials = AppCredentials {
        app_id: config.app_id.clone(),
        api_key: config.api_key.clone(),
    };
    let client = match &config.service_url {
        Some(base_url) => IdportClient::with_config_and_base_url(
            credentials,
            idport_adapter::ClientConfig::default(),
            base_url,
        )?,
        None => IdportClient::new(credentials)?,
    };

    let coordinator_config = CoordinatorConfig {
        auth_callback_url: Url::parse(&config.auth_callback_url).context("auth callback URL")?,
        sign_callback_url: Url::parse(&config.sign_callback_url).context("sign callback URL")?,
        app_origin: Url::parse(&config.app_origin).context("app origin")?,
        background_color: config.background_color.clone(),
    };

    Ok(Coordinator::new(client, coordinator_config))
}

fn print_session(state: &UiState) {
    println!();
    if state.is_logged_in {
        if let Some(user) = &state.user_info {
            println!("{} {}", style("Logged in as").green(), style(&user.account_name).bold());
            if let Some(name) = &user.name {
                println!("  name:     {name}");
            }
            if let Some(username) = &user.username {
                println!("  username: {username}");
            }
            if let Some(email) = &user.email {
                println!("  email:    {email}");
            }
            for permission in &user.permissions {
                println!(
                    "  key: {} on {} ({})",
                    permission.chain_account,
                    permission.chain_network.as_str(),
                    permission.permission
                );
            }
        }
    } else {
        println!("{}", style("Not logged in").yellow());
    }

    if let Some(transaction_id) = &state.transaction_id {
        println!("Returned transactionId: {transaction_id}");
    }
    if let Some(signed) = &state.signed_transaction {
        println!("Returned signed transaction: {signed}");
    }
    if let Some(sign_state) = &state.sign_state {
        println!("Returned state param: {sign_state}");
    }
    if let Some(error) = &state.error_message {
        println!("{} {}", style("Error:").red().bold(), style(error).red());
    }
}

async fn login(
    coordinator: &Coordinator,
    config: &DemoConfig,
    theme: &ColorfulTheme,
) -> Result<()> {
    let labels: Vec<&str> = AuthProvider::ALL
        .iter()
        .map(|provider| provider.display_name())
        .collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Log in with")
        .items(&labels)
        .default(0)
        .interact()?;
    let provider = AuthProvider::ALL[selection];

    match coordinator.login(provider, Some(config.chain_network)).await? {
        LoginFlow::Redirect(url) => {
            println!("Open this URL in a browser to continue:");
            println!("  {}", style(url.as_str()).underlined());
            println!("then paste the callback URL back here.");
        }
        LoginFlow::Completed { account } => {
            println!("Logged in as {}", style(&account).bold());
            coordinator.load_user_from_api(&account).await?;
        }
    }
    Ok(())
}

async fn paste_callback(coordinator: &Coordinator, theme: &ColorfulTheme) -> Result<()> {
    let url: String = Input::with_theme(theme)
        .with_prompt("Callback URL")
        .interact_text()?;

    // Both handlers no-op when the URL does not address them, so calling
    // them unconditionally mirrors a page load.
    let auth = coordinator.handle_auth_callback(&url).await?;
    let sign = coordinator.handle_sign_callback(&url).await?;
    info!(?auth, ?sign, "callback handled");
    Ok(())
}

async fn sign_sample_transaction(
    coordinator: &Coordinator,
    config: &DemoConfig,
    theme: &ColorfulTheme,
) -> Result<()> {
    let Some(user) = coordinator.session().user_info() else {
        println!("{}", style("Log in first.").yellow());
        return Ok(());
    };
    if user.permissions.is_empty() {
        println!("{}", style("No keys registered; try discovery.").yellow());
        return Ok(());
    }

    let items: Vec<String> = user
        .permissions
        .iter()
        .map(|permission| {
            let wallet = permission
                .external_wallet_type
                .map(|wallet| wallet.as_str())
                .unwrap_or("idport");
            format!(
                "{} on {} via {}",
                permission.chain_account,
                permission.chain_network.as_str(),
                wallet
            )
        })
        .collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Sign with key")
        .items(&items)
        .default(0)
        .interact()?;
    let permission = &user.permissions[selection];

    let provider = match permission.external_wallet_type {
        Some(wallet) => SignProvider::Wallet(wallet),
        None => SignProvider::Service,
    };
    let transaction = compose_sample_transaction(permission, &config.transfer_to);

    let options = SignOptions {
        provider,
        chain_account: permission.chain_account.clone(),
        chain_network: permission.chain_network,
        transaction,
        broadcast: true,
        return_signed_transaction: false,
        prevent_auto_sign: false,
        state: Some("abc".to_string()),
    };

    match coordinator.sign(options).await? {
        SignFlow::Redirect(url) => {
            println!("Open this URL in a browser to sign:");
            println!("  {}", style(url.as_str()).underlined());
            println!("then paste the callback URL back here.");
        }
        SignFlow::Completed(outcome) => {
            println!("Signed without redirect: {outcome:?}");
        }
    }
    Ok(())
}

fn compose_sample_transaction(permission: &Permission, transfer_to: &str) -> serde_json::Value {
    match permission.chain_network.family() {
        ChainFamily::Algorand => tx::algorand_payment(
            &permission.chain_account,
            transfer_to,
            1_000,
            "idport demo transaction",
        ),
        family => {
            let symbol = match family {
                ChainFamily::Wax => "WAX",
                ChainFamily::Ore => "ORE",
                _ => "EOS",
            };
            tx::eos_token_transfer(
                &permission.chain_account,
                transfer_to,
                Decimal::ONE,
                symbol,
                "idport demo transaction",
            )
        }
    }
}

async fn discover(
    coordinator: &Coordinator,
    config: &DemoConfig,
    theme: &ColorfulTheme,
) -> Result<()> {
    let labels: Vec<&str> = WALLETS.iter().map(|wallet| wallet.as_str()).collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Scan wallet")
        .items(&labels)
        .default(0)
        .interact()?;

    coordinator
        .discover(WALLETS[selection], config.chain_network)
        .await?;
    println!("Discovery complete; permissions refreshed.");
    Ok(())
}

fn logout(coordinator: &Coordinator) -> Result<()> {
    let origin = coordinator.logout()?;
    println!("Logged out; navigate to {origin} to drop callback parameters.");
    Ok(())
}
