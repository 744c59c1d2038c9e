//! # Wallet Catalogue
//!
//! The fixed set of wallets offered by the connect panel, and the connector
//! descriptors reported by the connection library.
//!
//! Option `i` in [`WALLET_OPTIONS`] is always served by connector `i` of the
//! library's connector list.

/// A wallet button shown by the connect panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalletOption {
    /// Label rendered on the button
    pub display_name: &'static str,
    /// Stable identifier used for analytics labels and error lookup
    pub key: &'static str,
    /// Icon path relative to the site root
    pub icon_path: &'static str,
    /// Where the download view sends users who don't have the wallet yet
    pub install_url: &'static str,
}

/// Every wallet the panel offers, in button order.
pub static WALLET_OPTIONS: [WalletOption; 5] = [
    WalletOption {
        display_name: "MetaMask",
        key: "meta_mask",
        icon_path: "/img/metamask@2x.png",
        install_url: "https://metamask.io/download/",
    },
    WalletOption {
        display_name: "TokenPocket",
        key: "token_pocket",
        icon_path: "/img/tokenPocket.png",
        install_url: "https://www.tokenpocket.pro/en/download/app",
    },
    WalletOption {
        display_name: "Bitget Wallet",
        key: "bitget_wallet",
        icon_path: "/img/bitgetWallet.png",
        install_url: "https://web3.bitget.com/en/wallet-download",
    },
    WalletOption {
        display_name: "Particle Network",
        key: "particle_network",
        icon_path: "/img/particleNetwork.png",
        install_url: "https://particle.network/",
    },
    WalletOption {
        display_name: "WalletConnect",
        key: "wallet_connect",
        icon_path: "/img/walletconnet.png",
        install_url: "https://walletconnect.com/",
    },
];

/// Display mode of the wallet popover that hosts the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalletMode {
    #[default]
    Connect,
    Download,
}

/// A connector as reported by the connection library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectorInfo {
    pub name: String,
}

impl ConnectorInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Find the connector whose name matches `name`, ignoring case.
pub fn find_connector(connectors: &[ConnectorInfo], name: &str) -> Option<usize> {
    let wanted = name.to_lowercase();
    connectors
        .iter()
        .position(|connector| connector.name.to_lowercase() == wanted)
}

/// Shorten an account address for display, e.g. `0x1234...abcd`.
///
/// The `0x` prefix is kept on top of `keep` leading characters. Addresses too
/// short to shorten are returned unchanged.
pub fn short_address(address: &str, keep: usize) -> String {
    let body_start = if address.starts_with("0x") { 2 } else { 0 };
    let len = address.len();
    if !address.is_ascii() || len <= body_start + keep * 2 {
        return address.to_string();
    }
    format!("{}...{}", &address[..body_start + keep], &address[len - keep..])
}
