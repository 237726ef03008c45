/*
[INPUT]:  Service schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - enumerated identifiers shared across the crate
[UPDATE]: When the service adds providers, wallet types, or chain networks
*/

use serde::{Deserialize, Serialize};

/// Login providers the identity service supports.
///
/// A flat enumerated set; the UI renders one login button per tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Apple,
    Email,
    Facebook,
    Github,
    Google,
    Kakao,
    Line,
    Linkedin,
    Phone,
    Twitch,
    Twitter,
}

impl AuthProvider {
    /// Every provider, in button-render order.
    pub const ALL: &'static [AuthProvider] = &[
        AuthProvider::Apple,
        AuthProvider::Facebook,
        AuthProvider::Twitter,
        AuthProvider::Github,
        AuthProvider::Twitch,
        AuthProvider::Line,
        AuthProvider::Kakao,
        AuthProvider::Linkedin,
        AuthProvider::Google,
        AuthProvider::Email,
        AuthProvider::Phone,
    ];

    /// Wire identifier for the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Apple => "apple",
            AuthProvider::Email => "email",
            AuthProvider::Facebook => "facebook",
            AuthProvider::Github => "github",
            AuthProvider::Google => "google",
            AuthProvider::Kakao => "kakao",
            AuthProvider::Line => "line",
            AuthProvider::Linkedin => "linkedin",
            AuthProvider::Phone => "phone",
            AuthProvider::Twitch => "twitch",
            AuthProvider::Twitter => "twitter",
        }
    }

    /// Human-readable label for login buttons.
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthProvider::Apple => "Apple",
            AuthProvider::Email => "Email",
            AuthProvider::Facebook => "Facebook",
            AuthProvider::Github => "GitHub",
            AuthProvider::Google => "Google",
            AuthProvider::Kakao => "Kakao",
            AuthProvider::Line => "LINE",
            AuthProvider::Linkedin => "LinkedIn",
            AuthProvider::Phone => "Phone",
            AuthProvider::Twitch => "Twitch",
            AuthProvider::Twitter => "Twitter",
        }
    }
}

/// External wallet plugins usable for signing and key discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalWalletType {
    Algosigner,
    Ledger,
    Lynx,
    Scatter,
    Tokenpocket,
    Wombat,
}

impl ExternalWalletType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExternalWalletType::Algosigner => "algosigner",
            ExternalWalletType::Ledger => "ledger",
            ExternalWalletType::Lynx => "lynx",
            ExternalWalletType::Scatter => "scatter",
            ExternalWalletType::Tokenpocket => "tokenpocket",
            ExternalWalletType::Wombat => "wombat",
        }
    }
}

impl std::str::FromStr for ExternalWalletType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "algosigner" => Ok(ExternalWalletType::Algosigner),
            "ledger" => Ok(ExternalWalletType::Ledger),
            "lynx" => Ok(ExternalWalletType::Lynx),
            "scatter" => Ok(ExternalWalletType::Scatter),
            "tokenpocket" => Ok(ExternalWalletType::Tokenpocket),
            "wombat" => Ok(ExternalWalletType::Wombat),
            other => Err(format!("unknown wallet type: {other}")),
        }
    }
}

/// Blockchain families the service can route transactions to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainFamily {
    Algorand,
    Eos,
    Ore,
    Wax,
}

/// Named chain networks registered with the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainNetwork {
    AlgoBeta,
    AlgoMain,
    AlgoTest,
    EosJungle,
    EosKylin,
    EosMain,
    OreMain,
    WaxMain,
}

impl ChainNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainNetwork::AlgoBeta => "algo_beta",
            ChainNetwork::AlgoMain => "algo_main",
            ChainNetwork::AlgoTest => "algo_test",
            ChainNetwork::EosJungle => "eos_jungle",
            ChainNetwork::EosKylin => "eos_kylin",
            ChainNetwork::EosMain => "eos_main",
            ChainNetwork::OreMain => "ore_main",
            ChainNetwork::WaxMain => "wax_main",
        }
    }

    /// Chain family, used to pick a matching transaction composer.
    pub fn family(&self) -> ChainFamily {
        match self {
            ChainNetwork::AlgoBeta | ChainNetwork::AlgoMain | ChainNetwork::AlgoTest => {
                ChainFamily::Algorand
            }
            ChainNetwork::EosJungle | ChainNetwork::EosKylin | ChainNetwork::EosMain => {
                ChainFamily::Eos
            }
            ChainNetwork::OreMain => ChainFamily::Ore,
            ChainNetwork::WaxMain => ChainFamily::Wax,
        }
    }
}

/// Account classification attached to a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Native,
    Msig,
    Virtual,
    Pending,
}

/// The `provider` field of a sign request: either the identity service
/// itself or an external wallet plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignProvider {
    Service,
    Wallet(ExternalWalletType),
}

impl SignProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignProvider::Service => "idport",
            SignProvider::Wallet(wallet) => wallet.as_str(),
        }
    }
}

impl Serialize for SignProvider {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SignProvider {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value == "idport" {
            return Ok(SignProvider::Service);
        }
        value
            .parse::<ExternalWalletType>()
            .map(SignProvider::Wallet)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_wire_names() {
        let json = serde_json::to_string(&AuthProvider::Google).unwrap();
        assert_eq!(json, r#""google""#);
        assert_eq!(AuthProvider::Linkedin.as_str(), "linkedin");
        assert_eq!(AuthProvider::ALL.len(), 11);
    }

    #[test]
    fn test_chain_network_family() {
        assert_eq!(ChainNetwork::AlgoTest.family(), ChainFamily::Algorand);
        assert_eq!(ChainNetwork::EosKylin.family(), ChainFamily::Eos);
        assert_eq!(ChainNetwork::WaxMain.family(), ChainFamily::Wax);
    }

    #[test]
    fn test_chain_network_serde() {
        let json = serde_json::to_string(&ChainNetwork::AlgoTest).unwrap();
        assert_eq!(json, r#""algo_test""#);
        let parsed: ChainNetwork = serde_json::from_str(r#""eos_main""#).unwrap();
        assert_eq!(parsed, ChainNetwork::EosMain);
    }

    #[test]
    fn test_sign_provider_serde() {
        let service = serde_json::to_string(&SignProvider::Service).unwrap();
        assert_eq!(service, r#""idport""#);

        let wallet =
            serde_json::to_string(&SignProvider::Wallet(ExternalWalletType::Algosigner)).unwrap();
        assert_eq!(wallet, r#""algosigner""#);

        let parsed: SignProvider = serde_json::from_str(r#""scatter""#).unwrap();
        assert_eq!(parsed, SignProvider::Wallet(ExternalWalletType::Scatter));
    }
}
