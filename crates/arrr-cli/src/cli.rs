use clap::{Parser, Subcommand};

/// Query a Pirate Chain daemon over JSON-RPC.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Daemon RPC URL.
    #[arg(long, default_value = "http://127.0.0.1:45453", env = "ARRR_RPC_URL")]
    pub rpc_url: String,

    /// RPC username (optional; credentials may also be embedded in the URL).
    #[arg(long, env = "ARRR_RPC_USER")]
    pub rpc_user: Option<String>,

    /// RPC password.
    #[arg(long, env = "ARRR_RPC_PASS")]
    pub rpc_pass: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per facade method, plus `raw`.
#[derive(Subcommand)]
pub enum Command {
    /// Probe the daemon; prints true or false.
    IsConnected,
    /// General daemon state (getinfo).
    Info,
    /// Chain processing state (getblockchaininfo).
    BlockchainInfo,
    /// Current block height.
    BlockCount,
    /// Block hash at a height.
    BlockHash { height: u64 },
    /// Block data for a block hash.
    Block {
        hash: String,
        /// Return the hex-encoded block instead of the decoded object.
        #[arg(long)]
        hex: bool,
    },
    /// Transaction receipt for a txid.
    TransactionReceipt { txid: String },
    /// Connected peer data (getpeerinfo).
    PeerInfo,
    /// P2P networking state (getnetworkinfo).
    NetworkInfo,
    /// Ask the daemon to validate an address.
    ValidateAddress { address: String },
    /// The N most recent shielded transactions.
    ListTransactions {
        #[arg(default_value = "10")]
        count: u64,
    },
    /// Back up the wallet to a destination directory or file.
    BackupWallet { destination: String },
    /// Reveal the private key for a transparent address.
    DumpPrivKey { address: String },
    /// Reveal the spending key for a shielded z-address.
    ZExportKey { address: String },
    /// Encrypt the wallet; the daemon shuts down when done.
    EncryptWallet { passphrase: String },
    /// Account name associated with an address.
    GetAccount { address: String },
    /// Receiving address for an account (default account when omitted).
    AccountAddress { account: Option<String> },
    /// All addresses of an account (default account when omitted).
    AddressesByAccount { account: Option<String> },
    /// New shielded receiving address.
    NewAddress,
    /// Shielded transaction details by txid.
    GetTransaction { txid: String },
    /// Wallet state (getwalletinfo).
    WalletInfo,
    /// Total unconfirmed balance.
    UnconfirmedBalance,
    /// Add a watch-only address.
    ImportAddress {
        address: String,
        #[arg(long)]
        label: Option<String>,
        /// Pass `--rescan false` to skip the wallet rescan.
        #[arg(long)]
        rescan: Option<bool>,
    },
    /// Import a spendable address by private key.
    ImportPrivKey {
        private_key: String,
        #[arg(long)]
        label: Option<String>,
        /// Pass `--rescan false` to skip the wallet rescan.
        #[arg(long)]
        rescan: Option<bool>,
    },
    /// Import a watch-only address by public key.
    ImportPubKey {
        public_key: String,
        #[arg(long)]
        label: Option<String>,
        /// Pass `--rescan false` to skip the wallet rescan.
        #[arg(long)]
        rescan: Option<bool>,
    },
    /// Import keys from a wallet dump file.
    ImportWallet { filename: String },
    /// Address groups with publicly linked ownership.
    ListAddressGroupings,
    /// Outputs locked as temporarily unspendable.
    ListLockUnspent,
    /// Unspent transparent outputs.
    ListUnspent,
    /// Send an amount to an address.
    SendToAddress {
        address: String,
        amount: f64,
        /// Comment stored with the transaction.
        #[arg(long)]
        comment: Option<String>,
        /// Comment naming the receiving party.
        #[arg(long)]
        comment_to: Option<String>,
        /// Deduct the fee from the amount being sent.
        #[arg(long)]
        subtract_fee: bool,
        /// Pass `--replaceable false` to forbid BIP 125 replacement.
        #[arg(long)]
        replaceable: Option<bool>,
        /// Confirmation target in blocks.
        #[arg(long)]
        conf_target: Option<u32>,
        /// One of UNSET, ECONOMICAL, CONSERVATIVE.
        #[arg(long)]
        estimate_mode: Option<String>,
        /// Address to send from (daemon picks when omitted).
        #[arg(long)]
        from: Option<String>,
        /// Return the change to the sender address.
        #[arg(long)]
        change_to_sender: bool,
    },
    /// Set the per-kB transaction fee.
    SetTxFee { amount: f64 },
    /// Lock the encrypted wallet.
    WalletLock,
    /// Unlock the encrypted wallet for a number of seconds.
    WalletPassphrase {
        passphrase: String,
        timeout: u64,
        /// Unlock for staking only.
        #[arg(long)]
        staking_only: bool,
    },
    /// Change the encrypted wallet's passphrase.
    WalletPassphraseChange {
        old_passphrase: String,
        new_passphrase: String,
    },
    /// Call any daemon RPC by name. Parameters parse as JSON where
    /// possible and fall back to plain strings.
    Raw {
        method: String,
        params: Vec<String>,
    },
}
