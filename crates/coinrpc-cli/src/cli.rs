use clap::Parser;

/// Invoke a JSON-RPC method on a coin daemon and print the result.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// RPC server hostname.
    #[arg(long, default_value = "127.0.0.1", env = "COINRPC_HOST")]
    pub host: String,

    /// RPC server port.
    #[arg(long, default_value = "8332", env = "COINRPC_PORT")]
    pub port: u16,

    /// RPC username.
    #[arg(long, env = "COINRPC_USER")]
    pub user: String,

    /// RPC password.
    #[arg(long, env = "COINRPC_PASS")]
    pub pass: String,

    /// Fractional digits kept when sending decimal parameters.
    /// Coin daemons quote amounts to 8 places.
    #[arg(long, default_value = "8")]
    pub precision: u32,

    /// Method to invoke.
    pub method: String,

    /// Positional parameters. Each is parsed as JSON where possible;
    /// numbers with a fractional part are treated as exact decimals, and
    /// anything that is not valid JSON is sent as a string.
    pub params: Vec<String>,
}
