mod cli;

use clap::Parser;
use eyre::WrapErr;

use arrr_rpc::{ArrrClient, SendOptions};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let client = match (&args.rpc_user, &args.rpc_pass) {
        (Some(user), Some(pass)) => ArrrClient::connect_with_auth(&args.rpc_url, user, pass),
        _ => ArrrClient::connect(&args.rpc_url),
    }
    .wrap_err("while configuring the daemon endpoint")?;
    tracing::debug!(url = %args.rpc_url, "daemon endpoint configured");

    let output = run(&client, args.command)
        .await
        .wrap_err_with(|| format!("while calling the daemon at {}", args.rpc_url))?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(
    client: &ArrrClient,
    command: cli::Command,
) -> Result<serde_json::Value, arrr_rpc::Error> {
    use cli::Command;

    match command {
        Command::IsConnected => Ok(client.is_connected().await.into()),
        Command::Info => client.get_info().await,
        Command::BlockchainInfo => client.get_blockchain_info().await,
        Command::BlockCount => client.get_block_count().await.map(Into::into),
        Command::BlockHash { height } => client.get_block_hash(height).await.map(Into::into),
        Command::Block { hash, hex } => client.get_block(&hash, Some(!hex)).await,
        Command::TransactionReceipt { txid } => client.get_transaction_receipt(&txid).await,
        Command::PeerInfo => client.get_peer_info().await,
        Command::NetworkInfo => client.get_network_info().await,
        Command::ValidateAddress { address } => client.validate_address(&address).await,
        Command::ListTransactions { count } => client.list_transactions(count).await,
        Command::BackupWallet { destination } => client.backup_wallet(&destination).await,
        Command::DumpPrivKey { address } => client.dump_priv_key(&address).await.map(Into::into),
        Command::ZExportKey { address } => client.z_export_key(&address).await.map(Into::into),
        Command::EncryptWallet { passphrase } => client.encrypt_wallet(&passphrase).await,
        Command::GetAccount { address } => client.get_account(&address).await.map(Into::into),
        Command::AccountAddress { account } => client
            .get_account_address(account.as_deref())
            .await
            .map(Into::into),
        Command::AddressesByAccount { account } => {
            client.get_addresses_by_account(account.as_deref()).await
        }
        Command::NewAddress => client.get_new_address().await.map(Into::into),
        Command::GetTransaction { txid } => client.get_transaction(&txid).await,
        Command::WalletInfo => client.get_wallet_info().await,
        Command::UnconfirmedBalance => client.get_unconfirmed_balance().await.map(Into::into),
        Command::ImportAddress {
            address,
            label,
            rescan,
        } => {
            client
                .import_address(&address, label.as_deref(), rescan)
                .await
        }
        Command::ImportPrivKey {
            private_key,
            label,
            rescan,
        } => {
            client
                .import_priv_key(&private_key, label.as_deref(), rescan)
                .await
        }
        Command::ImportPubKey {
            public_key,
            label,
            rescan,
        } => {
            client
                .import_pub_key(&public_key, label.as_deref(), rescan)
                .await
        }
        Command::ImportWallet { filename } => client.import_wallet(&filename).await,
        Command::ListAddressGroupings => client.list_address_groupings().await,
        Command::ListLockUnspent => client.list_lock_unspent().await,
        Command::ListUnspent => client.list_unspent().await,
        Command::SendToAddress {
            address,
            amount,
            comment,
            comment_to,
            subtract_fee,
            replaceable,
            conf_target,
            estimate_mode,
            from,
            change_to_sender,
        } => {
            let defaults = SendOptions::default();
            let options = SendOptions {
                comment: comment.unwrap_or(defaults.comment),
                comment_to: comment_to.unwrap_or(defaults.comment_to),
                subtract_fee_from_amount: subtract_fee,
                replaceable: replaceable.unwrap_or(defaults.replaceable),
                conf_target: conf_target.unwrap_or(defaults.conf_target),
                estimate_mode: estimate_mode.unwrap_or(defaults.estimate_mode),
                sender_address: from,
                change_to_sender,
            };
            client.send_to_address(&address, amount, &options).await
        }
        Command::SetTxFee { amount } => client.set_tx_fee(amount).await.map(Into::into),
        Command::WalletLock => client.wallet_lock().await,
        Command::WalletPassphrase {
            passphrase,
            timeout,
            staking_only,
        } => {
            client
                .wallet_passphrase(&passphrase, timeout, Some(staking_only))
                .await
        }
        Command::WalletPassphraseChange {
            old_passphrase,
            new_passphrase,
        } => {
            client
                .wallet_passphrase_change(&old_passphrase, &new_passphrase)
                .await
        }
        Command::Raw { method, params } => {
            let params = params.into_iter().map(parse_raw_param).collect();
            client.raw_call(&method, params).await
        }
    }
}

/// Parse a command-line RPC parameter the way bitcoin-cli does: JSON
/// where it parses, a bare string otherwise.
fn parse_raw_param(raw: String) -> serde_json::Value {
    serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw))
}

#[cfg(test)]
mod tests {
    use super::parse_raw_param;

    #[test]
    fn raw_params_parse_json_scalars() {
        assert_eq!(parse_raw_param("42".to_owned()), serde_json::json!(42));
        assert_eq!(parse_raw_param("true".to_owned()), serde_json::json!(true));
        assert_eq!(parse_raw_param("null".to_owned()), serde_json::Value::Null);
    }

    #[test]
    fn raw_params_fall_back_to_strings() {
        assert_eq!(
            parse_raw_param("zs1example".to_owned()),
            serde_json::json!("zs1example")
        );
    }

    #[test]
    fn raw_params_parse_json_arrays() {
        assert_eq!(
            parse_raw_param("[0,0,0,10]".to_owned()),
            serde_json::json!([0, 0, 0, 10])
        );
    }
}
