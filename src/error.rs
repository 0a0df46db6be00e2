use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `TreadGPT`.
///
/// The chat engine itself is total — the selector always produces a reply and
/// store appends cannot fail — so every variant here belongs to a boundary:
/// configuration loading or the HTTP gateway. Internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum TreadError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Gateway ─────────────────────────────────────────────────────────
    #[error("gateway: {0}")]
    Gateway(#[from] GatewayError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config from {path}: {message}")]
    Load { path: String, message: String },

    #[error("failed to parse config at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("failed to write default config at {path}: {message}")]
    Init { path: String, message: String },

    #[error("no home directory available to place the workspace")]
    NoHome,

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Gateway errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("invalid listen address {addr}: {message}")]
    Addr { addr: String, message: String },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, TreadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_path_and_message() {
        let err = TreadError::Config(ConfigError::Parse {
            path: "/tmp/config.toml".into(),
            message: "unexpected key".into(),
        });
        assert!(err.to_string().contains("/tmp/config.toml"));
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn gateway_bind_error_displays_addr() {
        let err = TreadError::Gateway(GatewayError::Bind {
            addr: "127.0.0.1:3000".into(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        });
        assert!(err.to_string().contains("127.0.0.1:3000"));
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let tread_err: TreadError = anyhow_err.into();
        assert!(tread_err.to_string().contains("something went wrong"));
    }
}
