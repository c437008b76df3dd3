mod cli;

use clap::Parser;
use coinrpc::{Param, RpcClient};
use eyre::WrapErr;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let rpc = RpcClient::new(&args.user, &args.pass, &args.host, args.port, args.precision);
    let params = args.params.iter().map(|raw| parse_param(raw)).collect();

    tracing::debug!(method = %args.method, host = %args.host, port = args.port, "issuing call");
    let result = rpc
        .call(&args.method, params)
        .await
        .wrap_err_with(|| format!("call `{}` against {}:{}", args.method, args.host, args.port))?;

    println!(
        "{}",
        serde_json::to_string_pretty(&result).wrap_err("render result")?
    );
    Ok(())
}

/// Interpret one command-line parameter.
///
/// Integers stay integral. Numbers with a fractional part become decimals
/// so the client's precision policy applies to them before transmission.
/// Everything else goes through the JSON parser, with a string fallback
/// for bare words such as addresses and txids.
fn parse_param(raw: &str) -> Param {
    if let Ok(int) = raw.parse::<i64>() {
        return Param::Int(int);
    }
    if let Ok(decimal) = raw.parse::<Decimal>() {
        return Param::Decimal(decimal);
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => Param::from(value),
        Err(_) => Param::String(raw.to_owned()),
    }
}
