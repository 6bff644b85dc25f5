use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SHORTCUT_GATEWAY_LISTEN_ADDR";
pub const RANDOM_BYTES_ENV: &str = "SHORTCUT_DIGEST_RANDOM_BYTES";
pub const CODE_LENGTH_ENV: &str = "SHORTCUT_DIGEST_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "SHORTCUT_DIGEST_MAX_ATTEMPTS";
pub const PREFIX_ENV: &str = "SHORTCUT_DIGEST_PREFIX";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PREFIX: &str = "http://short.ly/";

#[derive(Debug, Parser)]
#[command(name = "shortcut-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Random bytes drawn per generated-code candidate.
    #[arg(long, env = RANDOM_BYTES_ENV, default_value_t = 10)]
    pub random_bytes: usize,

    /// Length of generated short codes.
    #[arg(long, env = CODE_LENGTH_ENV, default_value_t = 6)]
    pub code_length: usize,

    /// Attempt budget for random-code generation.
    #[arg(long, env = MAX_ATTEMPTS_ENV, default_value_t = 10)]
    pub max_attempts: u32,

    /// Prefix prepended to ids to form shortcuts.
    #[arg(long, env = PREFIX_ENV, default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}
