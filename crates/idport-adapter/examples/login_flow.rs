/*
[INPUT]:  App credentials and callback URLs
[OUTPUT]: Login flow walkthrough on stdout
[POS]:    Examples - redirect-login handshake demonstration
[UPDATE]: When the login flow changes
*/

use url::Url;

use idport_adapter::*;

/// Example: Login flow
///
/// This example demonstrates the redirect-login handshake:
/// 1. Create HTTP client with app credentials
/// 2. Create the coordinator with callback URLs
/// 3. Request a login (redirect URL or synchronous completion)
/// 4. Hand the callback URL back to the coordinator after the redirect
#[tokio::main]
async fn main() {
    println!("=== IdPort Login Example ===\n");

    // Step 1: Create HTTP client
    let credentials = AppCredentials {
        app_id: "demo_0097ed83e0a54e679ca46d082ee0e33a".to_string(),
        api_key: "demo_k_97b33a2f8c984fb5b119567ca19e4a49".to_string(),
    };
    let client = match IdportClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    // Step 2: Create the coordinator
    let config = CoordinatorConfig {
        auth_callback_url: Url::parse("https://demo.example.com/authcallback").unwrap(),
        sign_callback_url: Url::parse("https://demo.example.com/signcallback").unwrap(),
        app_origin: Url::parse("https://demo.example.com/").unwrap(),
        background_color: Some("3F7BC7".to_string()),
    };
    let coordinator = Coordinator::new(client, config);
    coordinator.load_user_from_cache();
    println!("✓ Coordinator created");

    // One login button per provider tag
    println!("\nAvailable login providers:");
    for provider in AuthProvider::ALL {
        println!("  - {}", provider.display_name());
    }

    // Step 3: Request a login
    // In production this calls the live service:
    //   match coordinator.login(AuthProvider::Google, None).await {
    //       Ok(LoginFlow::Redirect(url)) => open the URL in a browser,
    //       Ok(LoginFlow::Completed { account }) => session is already set,
    //       Err(e) => the message is also in the session error slot,
    //   }

    // Step 4: After the browser redirect, hand the full callback URL back:
    //   coordinator.handle_auth_callback(&current_url).await
    // The handler is a no-op when the URL does not address the callback,
    // so it is safe to call on every page load.

    println!("\n✓ Login example complete");
}
