use clap::{Parser, ValueEnum};

/// Serve an in-memory ledger of accounts and transfers over HTTP
#[derive(Parser, Debug)]
#[command(name = "money-transfer")]
#[command(about = "Serve an in-memory ledger of accounts and transfers over HTTP", long_about = None)]
pub struct CliArgs {
    /// Interface to listen on
    #[arg(
        long = "host",
        value_name = "HOST",
        env = "MONEY_TRANSFER_HOST",
        default_value = "127.0.0.1",
        help = "Address or host name to bind the HTTP listener to"
    )]
    pub host: String,

    /// Port to listen on
    #[arg(
        long = "port",
        value_name = "PORT",
        env = "MONEY_TRANSFER_PORT",
        default_value_t = 8080,
        help = "TCP port for the HTTP listener"
    )]
    pub port: u16,

    /// Default log filter, overridden by RUST_LOG when set
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        env = "MONEY_TRANSFER_LOG_LEVEL",
        default_value = "info",
        help = "Log filter directive, e.g. 'info' or 'money_transfer=debug' (RUST_LOG takes precedence)"
    )]
    pub log_level: String,

    /// Log output format
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        env = "MONEY_TRANSFER_LOG_FORMAT",
        default_value = "text",
        help = "Log format: 'text' for human-readable lines or 'json' for structured output"
    )]
    pub log_format: LogFormat,
}

/// Available log output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl CliArgs {
    /// Host and port pair accepted by `TcpListener::bind`
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();

        assert_eq!(parsed.bind_address(), ("127.0.0.1", 8080));
        assert_eq!(parsed.log_level, "info");
        assert_eq!(parsed.log_format, LogFormat::Text);
    }

    #[rstest]
    #[case::port_only(&["program", "--port", "9000"], "127.0.0.1", 9000)]
    #[case::host_only(&["program", "--host", "0.0.0.0"], "0.0.0.0", 8080)]
    #[case::both(&["program", "--host", "localhost", "--port", "1"], "localhost", 1)]
    fn test_bind_address(#[case] args: &[&str], #[case] host: &str, #[case] port: u16) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.bind_address(), (host, port));
    }

    #[rstest]
    #[case::text(&["program", "--log-format", "text"], LogFormat::Text)]
    #[case::json(&["program", "--log-format", "json"], LogFormat::Json)]
    fn test_log_format_parsing(#[case] args: &[&str], #[case] expected: LogFormat) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_format, expected);
    }

    #[test]
    fn test_log_level_option() {
        let parsed =
            CliArgs::try_parse_from(["program", "--log-level", "money_transfer=debug"]).unwrap();
        assert_eq!(parsed.log_level, "money_transfer=debug");
    }

    // Error handling tests
    #[rstest]
    #[case::port_not_a_number(&["program", "--port", "http"])]
    #[case::port_out_of_range(&["program", "--port", "70000"])]
    #[case::invalid_log_format(&["program", "--log-format", "xml"])]
    #[case::unknown_flag(&["program", "--strategy", "sync"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
