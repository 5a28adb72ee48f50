use serde_json::{json, Value};

use crate::error::Error;
use crate::transport::{HttpTransport, RawRpc};

/// Client facade for the Pirate Chain daemon RPC interface.
///
/// One method per daemon RPC, each a thin wrapper that fixes the method
/// name and parameter order, substitutes documented defaults for omitted
/// optional parameters, and delegates to the transport. No method
/// validates, converts, or retries; all call semantics are defined by
/// the daemon.
///
/// Object and array results are returned as raw [`serde_json::Value`]s;
/// RPCs whose result is a single JSON scalar deserialize it into the
/// matching Rust type.
pub struct ArrrClient<T = HttpTransport> {
    transport: T,
}

impl ArrrClient {
    /// Connect to a daemon endpoint without credentials (or with
    /// credentials embedded in the URL userinfo).
    pub fn connect(url: &str) -> Result<Self, Error> {
        Ok(Self {
            transport: HttpTransport::new(url, None, None)?,
        })
    }

    /// Connect with explicit basic-auth credentials.
    pub fn connect_with_auth(url: &str, user: &str, pass: &str) -> Result<Self, Error> {
        Ok(Self {
            transport: HttpTransport::new(url, Some(user), Some(pass))?,
        })
    }
}

/// Optional parameters of [`ArrrClient::send_to_address`], in daemon
/// parameter order. `Default` matches the daemon's documented defaults.
#[derive(Debug, Clone)]
pub struct SendOptions {
    /// Comment stored with the transaction.
    pub comment: String,
    /// Comment naming the receiving party.
    pub comment_to: String,
    /// Deduct the fee from the amount being sent.
    pub subtract_fee_from_amount: bool,
    /// Allow BIP 125 fee-bump replacement.
    pub replaceable: bool,
    /// Confirmation target in blocks.
    pub conf_target: u32,
    /// One of `UNSET`, `ECONOMICAL`, `CONSERVATIVE`.
    pub estimate_mode: String,
    /// Address to send from; the daemon picks when absent.
    pub sender_address: Option<String>,
    /// Return the change to the sender address.
    pub change_to_sender: bool,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            comment: String::new(),
            comment_to: String::new(),
            subtract_fee_from_amount: false,
            replaceable: true,
            conf_target: 6,
            estimate_mode: "UNSET".to_owned(),
            sender_address: None,
            change_to_sender: false,
        }
    }
}

impl<T: RawRpc> ArrrClient<T> {
    /// Wrap an existing transport. Mainly useful for tests and custom
    /// transport implementations.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    // ===== misc =====

    /// Probe the daemon with `getnetworkinfo`. Resolves `true` when the
    /// daemon answers with an object, `false` on any failure.
    pub async fn is_connected(&self) -> bool {
        match self.transport.raw_call("getnetworkinfo", Vec::new()).await {
            Ok(res) => res.is_object(),
            Err(_) => false,
        }
    }

    /// General daemon state (`getinfo`).
    pub async fn get_info(&self) -> Result<Value, Error> {
        self.transport.raw_call("getinfo", Vec::new()).await
    }

    /// Per-peer connection data (`getpeerinfo`).
    pub async fn get_peer_info(&self) -> Result<Value, Error> {
        self.transport.raw_call("getpeerinfo", Vec::new()).await
    }

    /// P2P networking state (`getnetworkinfo`).
    pub async fn get_network_info(&self) -> Result<Value, Error> {
        self.transport.raw_call("getnetworkinfo", Vec::new()).await
    }

    // ===== blockchain =====

    /// Block data for a block hash. `verbose` defaults to `true`
    /// (decoded object); `Some(false)` returns the hex-encoded block.
    pub async fn get_block(&self, block_hash: &str, verbose: Option<bool>) -> Result<Value, Error> {
        self.transport
            .raw_call(
                "getblock",
                vec![json!(block_hash), json!(verbose.unwrap_or(true))],
            )
            .await
    }

    /// Chain processing state (`getblockchaininfo`).
    pub async fn get_blockchain_info(&self) -> Result<Value, Error> {
        self.transport
            .raw_call("getblockchaininfo", Vec::new())
            .await
    }

    /// Height of the most-work fully-validated chain.
    pub async fn get_block_count(&self) -> Result<u64, Error> {
        let raw = self.transport.raw_call("getblockcount", Vec::new()).await?;
        typed(raw, "getblockcount")
    }

    /// Block hash at the given height.
    pub async fn get_block_hash(&self, height: u64) -> Result<String, Error> {
        let raw = self
            .transport
            .raw_call("getblockhash", vec![json!(height)])
            .await?;
        typed(raw, "getblockhash")
    }

    /// Transaction receipt for a txid (`gettransactionreceipt`).
    pub async fn get_transaction_receipt(&self, txid: &str) -> Result<Value, Error> {
        self.transport
            .raw_call("gettransactionreceipt", vec![json!(txid)])
            .await
    }

    // ===== util =====

    /// Ask the daemon whether an address is valid (`validateaddress`).
    /// Validation is entirely daemon-side.
    pub async fn validate_address(&self, address: &str) -> Result<Value, Error> {
        self.transport
            .raw_call("validateaddress", vec![json!(address)])
            .await
    }

    // ===== wallet =====

    /// The `most_recent` latest shielded transactions across all
    /// addresses (`zs_listtransactions`). The three leading parameters
    /// are fixed to 0 (all addresses, default filtering).
    pub async fn list_transactions(&self, most_recent: u64) -> Result<Value, Error> {
        self.transport
            .raw_call(
                "zs_listtransactions",
                vec![json!(0), json!(0), json!(0), json!(most_recent)],
            )
            .await
    }

    /// Back up the wallet to a destination directory or file.
    pub async fn backup_wallet(&self, destination: &str) -> Result<Value, Error> {
        self.transport
            .raw_call("backupwallet", vec![json!(destination)])
            .await
    }

    /// Reveal the private key for a transparent address.
    pub async fn dump_priv_key(&self, address: &str) -> Result<String, Error> {
        let raw = self
            .transport
            .raw_call("dumpprivkey", vec![json!(address)])
            .await?;
        typed(raw, "dumpprivkey")
    }

    /// Reveal the spending key for a shielded z-address.
    pub async fn z_export_key(&self, address: &str) -> Result<String, Error> {
        let raw = self
            .transport
            .raw_call("z_exportkey", vec![json!(address)])
            .await?;
        typed(raw, "z_exportkey")
    }

    /// Encrypt the wallet for the first time. The daemon shuts down
    /// once encryption completes.
    pub async fn encrypt_wallet(&self, passphrase: &str) -> Result<Value, Error> {
        self.transport
            .raw_call("encryptwallet", vec![json!(passphrase)])
            .await
    }

    /// Account name associated with an address.
    pub async fn get_account(&self, address: &str) -> Result<String, Error> {
        let raw = self
            .transport
            .raw_call("getaccount", vec![json!(address)])
            .await?;
        typed(raw, "getaccount")
    }

    /// Receiving address for an account. `account` defaults to `""`,
    /// the default account.
    pub async fn get_account_address(&self, account: Option<&str>) -> Result<String, Error> {
        let raw = self
            .transport
            .raw_call("getaccountaddress", vec![json!(account.unwrap_or(""))])
            .await?;
        typed(raw, "getaccountaddress")
    }

    /// All addresses of an account. `account` defaults to `""`.
    pub async fn get_addresses_by_account(&self, account: Option<&str>) -> Result<Value, Error> {
        self.transport
            .raw_call("getaddressesbyaccount", vec![json!(account.unwrap_or(""))])
            .await
    }

    /// New shielded address for receiving payments (`z_getnewaddress`).
    pub async fn get_new_address(&self) -> Result<String, Error> {
        let raw = self
            .transport
            .raw_call("z_getnewaddress", Vec::new())
            .await?;
        typed(raw, "z_getnewaddress")
    }

    /// Shielded transaction details by txid (`zs_gettransaction`).
    pub async fn get_transaction(&self, txid: &str) -> Result<Value, Error> {
        self.transport
            .raw_call("zs_gettransaction", vec![json!(txid)])
            .await
    }

    /// Wallet state (`getwalletinfo`).
    pub async fn get_wallet_info(&self) -> Result<Value, Error> {
        self.transport.raw_call("getwalletinfo", Vec::new()).await
    }

    /// Total unconfirmed balance.
    pub async fn get_unconfirmed_balance(&self) -> Result<f64, Error> {
        let raw = self
            .transport
            .raw_call("getunconfirmedbalance", Vec::new())
            .await?;
        typed(raw, "getunconfirmedbalance")
    }

    /// Add a watch-only address or script. `label` defaults to `""`,
    /// `rescan` defaults to `true` (full wallet rescan).
    pub async fn import_address(
        &self,
        address: &str,
        label: Option<&str>,
        rescan: Option<bool>,
    ) -> Result<Value, Error> {
        self.transport
            .raw_call(
                "importaddress",
                vec![
                    json!(address),
                    json!(label.unwrap_or("")),
                    json!(rescan.unwrap_or(true)),
                ],
            )
            .await
    }

    /// Import a spendable address by private key. Same defaults as
    /// [`import_address`](Self::import_address).
    pub async fn import_priv_key(
        &self,
        private_key: &str,
        label: Option<&str>,
        rescan: Option<bool>,
    ) -> Result<Value, Error> {
        self.transport
            .raw_call(
                "importprivkey",
                vec![
                    json!(private_key),
                    json!(label.unwrap_or("")),
                    json!(rescan.unwrap_or(true)),
                ],
            )
            .await
    }

    /// Import a watch-only address by public key. Same defaults as
    /// [`import_address`](Self::import_address).
    pub async fn import_pub_key(
        &self,
        public_key: &str,
        label: Option<&str>,
        rescan: Option<bool>,
    ) -> Result<Value, Error> {
        self.transport
            .raw_call(
                "importpubkey",
                vec![
                    json!(public_key),
                    json!(label.unwrap_or("")),
                    json!(rescan.unwrap_or(true)),
                ],
            )
            .await
    }

    /// Import keys from a wallet dump file.
    pub async fn import_wallet(&self, filename: &str) -> Result<Value, Error> {
        self.transport
            .raw_call("importwallet", vec![json!(filename)])
            .await
    }

    /// Address groups whose common ownership has been made public by
    /// shared transaction inputs or change.
    pub async fn list_address_groupings(&self) -> Result<Value, Error> {
        self.transport
            .raw_call("listaddressgroupings", Vec::new())
            .await
    }

    /// Outputs locked as temporarily unspendable.
    pub async fn list_lock_unspent(&self) -> Result<Value, Error> {
        self.transport.raw_call("listlockunspent", Vec::new()).await
    }

    /// Unspent transparent outputs.
    pub async fn list_unspent(&self) -> Result<Value, Error> {
        self.transport.raw_call("listunspent", Vec::new()).await
    }

    /// Send an amount to an address. Optional daemon parameters come
    /// from `options`; an absent sender address is sent as JSON null so
    /// the daemon applies its own selection.
    pub async fn send_to_address(
        &self,
        address: &str,
        amount: f64,
        options: &SendOptions,
    ) -> Result<Value, Error> {
        self.transport
            .raw_call(
                "sendtoaddress",
                vec![
                    json!(address),
                    json!(amount),
                    json!(options.comment),
                    json!(options.comment_to),
                    json!(options.subtract_fee_from_amount),
                    json!(options.replaceable),
                    json!(options.conf_target),
                    json!(options.estimate_mode),
                    json!(options.sender_address),
                    json!(options.change_to_sender),
                ],
            )
            .await
    }

    /// Set the per-kB transaction fee, overriding `paytxfee`.
    pub async fn set_tx_fee(&self, amount: f64) -> Result<bool, Error> {
        let raw = self
            .transport
            .raw_call("settxfee", vec![json!(amount)])
            .await?;
        typed(raw, "settxfee")
    }

    /// Lock the encrypted wallet.
    pub async fn wallet_lock(&self) -> Result<Value, Error> {
        self.transport.raw_call("walletlock", Vec::new()).await
    }

    /// Unlock the encrypted wallet for `timeout` seconds.
    /// `staking_only` defaults to `false`.
    pub async fn wallet_passphrase(
        &self,
        passphrase: &str,
        timeout: u64,
        staking_only: Option<bool>,
    ) -> Result<Value, Error> {
        self.transport
            .raw_call(
                "walletpassphrase",
                vec![
                    json!(passphrase),
                    json!(timeout),
                    json!(staking_only.unwrap_or(false)),
                ],
            )
            .await
    }

    /// Change the encrypted wallet's passphrase.
    pub async fn wallet_passphrase_change(
        &self,
        old_passphrase: &str,
        new_passphrase: &str,
    ) -> Result<Value, Error> {
        self.transport
            .raw_call(
                "walletpassphrasechange",
                vec![json!(old_passphrase), json!(new_passphrase)],
            )
            .await
    }

    /// Escape hatch: call any daemon RPC by name with raw parameters.
    pub async fn raw_call(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value, Error> {
        self.transport.raw_call(method, params).await
    }
}

fn typed<V: serde::de::DeserializeOwned>(raw: Value, method: &str) -> Result<V, Error> {
    serde_json::from_value(raw).map_err(|e| Error::Decode(format!("invalid {method} result: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    fn client_with(mock: MockTransport) -> ArrrClient<MockTransport> {
        ArrrClient::with_transport(mock)
    }

    #[tokio::test]
    async fn get_block_defaults_verbose_to_true() {
        let client = client_with(MockTransport::new());
        client.get_block("00000000deadbeef", None).await.unwrap();
        assert_eq!(
            client.transport.calls(),
            vec![(
                "getblock".to_owned(),
                vec![json!("00000000deadbeef"), json!(true)]
            )]
        );
    }

    #[tokio::test]
    async fn get_block_honors_explicit_verbose() {
        let client = client_with(MockTransport::new());
        client
            .get_block("00000000deadbeef", Some(false))
            .await
            .unwrap();
        assert_eq!(
            client.transport.calls()[0].1,
            vec![json!("00000000deadbeef"), json!(false)]
        );
    }

    #[tokio::test]
    async fn list_transactions_pins_leading_zero_params() {
        let client = client_with(MockTransport::new());
        client.list_transactions(25).await.unwrap();
        assert_eq!(
            client.transport.calls(),
            vec![(
                "zs_listtransactions".to_owned(),
                vec![json!(0), json!(0), json!(0), json!(25)]
            )]
        );
    }

    #[tokio::test]
    async fn import_address_defaults_label_and_rescan() {
        let client = client_with(MockTransport::new());
        client.import_address("zs1example", None, None).await.unwrap();
        assert_eq!(
            client.transport.calls(),
            vec![(
                "importaddress".to_owned(),
                vec![json!("zs1example"), json!(""), json!(true)]
            )]
        );
    }

    #[tokio::test]
    async fn import_priv_key_honors_overrides() {
        let client = client_with(MockTransport::new());
        client
            .import_priv_key("Kxxxx", Some("cold"), Some(false))
            .await
            .unwrap();
        assert_eq!(
            client.transport.calls(),
            vec![(
                "importprivkey".to_owned(),
                vec![json!("Kxxxx"), json!("cold"), json!(false)]
            )]
        );
    }

    #[tokio::test]
    async fn send_to_address_serializes_default_options_in_order() {
        let client = client_with(MockTransport::new());
        client
            .send_to_address("RTestAddr", 1.5, &SendOptions::default())
            .await
            .unwrap();
        assert_eq!(
            client.transport.calls(),
            vec![(
                "sendtoaddress".to_owned(),
                vec![
                    json!("RTestAddr"),
                    json!(1.5),
                    json!(""),
                    json!(""),
                    json!(false),
                    json!(true),
                    json!(6),
                    json!("UNSET"),
                    Value::Null,
                    json!(false),
                ]
            )]
        );
    }

    #[tokio::test]
    async fn send_to_address_carries_sender_address() {
        let client = client_with(MockTransport::new());
        let options = SendOptions {
            sender_address: Some("RSenderAddr".to_owned()),
            change_to_sender: true,
            ..SendOptions::default()
        };
        client
            .send_to_address("RTestAddr", 0.25, &options)
            .await
            .unwrap();
        let params = &client.transport.calls()[0].1;
        assert_eq!(params[8], json!("RSenderAddr"));
        assert_eq!(params[9], json!(true));
    }

    #[tokio::test]
    async fn wallet_passphrase_defaults_staking_only_to_false() {
        let client = client_with(MockTransport::new());
        client
            .wallet_passphrase("hunter2", 60, None)
            .await
            .unwrap();
        assert_eq!(
            client.transport.calls(),
            vec![(
                "walletpassphrase".to_owned(),
                vec![json!("hunter2"), json!(60), json!(false)]
            )]
        );
    }

    #[tokio::test]
    async fn get_account_address_defaults_to_default_account() {
        let client = client_with(
            MockTransport::new().with_response(Ok(json!("RDefaultAddr"))),
        );
        let address = client.get_account_address(None).await.unwrap();
        assert_eq!(address, "RDefaultAddr");
        assert_eq!(
            client.transport.calls(),
            vec![("getaccountaddress".to_owned(), vec![json!("")])]
        );
    }

    #[tokio::test]
    async fn get_block_count_deserializes_scalar() {
        let client = client_with(MockTransport::new().with_response(Ok(json!(2_500_123))));
        assert_eq!(client.get_block_count().await.unwrap(), 2_500_123);
        assert_eq!(
            client.transport.calls(),
            vec![("getblockcount".to_owned(), Vec::new())]
        );
    }

    #[tokio::test]
    async fn get_block_count_rejects_non_numeric_result() {
        let client = client_with(MockTransport::new().with_response(Ok(json!("not-a-number"))));
        let err = client.get_block_count().await.unwrap_err();
        assert!(matches!(err, Error::Decode(ref message) if message.contains("getblockcount")));
    }

    #[tokio::test]
    async fn is_connected_true_for_object_result() {
        let client = client_with(
            MockTransport::new().with_response(Ok(json!({"version": 5008052}))),
        );
        assert!(client.is_connected().await);
    }

    #[tokio::test]
    async fn is_connected_false_on_rpc_error() {
        let client = client_with(MockTransport::new().with_response(Err(Error::Rpc {
            code: -28,
            message: "Loading block index...".to_owned(),
        })));
        assert!(!client.is_connected().await);
    }

    #[tokio::test]
    async fn rpc_error_passes_through_unchanged() {
        let client = client_with(MockTransport::new().with_response(Err(Error::Rpc {
            code: -14,
            message: "walletpassphrase incorrect".to_owned(),
        })));
        let err = client
            .wallet_passphrase("wrong", 60, None)
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::Rpc { code: -14, ref message }
                if message == "walletpassphrase incorrect")
        );
    }

    #[tokio::test]
    async fn result_object_passes_through_unchanged() {
        let info = json!({"walletversion": 60000, "unlocked_until": 0});
        let client = client_with(MockTransport::new().with_response(Ok(info.clone())));
        assert_eq!(client.get_wallet_info().await.unwrap(), info);
    }
}
