//! Command-line arguments

use std::time::Duration;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use strato_dns_provider::{ClientOptions, DnsRecord, STRATO_API_BASE, StratoCredentials};

/// Manage TXT, SPF and DMARC settings in the Strato customer panel.
#[derive(Debug, Parser)]
#[command(name = "strato-dns", version, about)]
pub struct Cli {
    /// Customer service endpoint
    #[arg(long, env = "STRATO_API", default_value = STRATO_API_BASE)]
    pub api: String,

    /// Login identifier (customer number or e-mail)
    #[arg(long, env = "STRATO_IDENTIFIER")]
    pub identifier: String,

    /// Login password
    #[arg(long, env = "STRATO_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Package order number to manage
    #[arg(long, env = "STRATO_ORDER")]
    pub order: String,

    /// (Sub-)domain to manage
    #[arg(long, env = "STRATO_DOMAIN")]
    pub domain: String,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, env = "STRATO_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current configuration
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a record unless an identical one exists
    Add(RecordArgs),
    /// Remove every record identical to the given one
    Remove(RecordArgs),
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Record type
    #[arg(long = "type", default_value = "TXT", value_parser = NonEmptyStringValueParser::new())]
    pub record_type: String,

    /// Record prefix (subdomain label)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub prefix: String,

    /// Record value
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub value: String,
}

impl RecordArgs {
    pub fn to_record(&self) -> DnsRecord {
        DnsRecord::new(&self.record_type, &self.prefix, &self.value)
    }
}

impl Cli {
    pub fn credentials(&self) -> StratoCredentials {
        StratoCredentials {
            endpoint: self.api.clone(),
            identifier: self.identifier.clone(),
            password: self.password.clone(),
            order: self.order.clone(),
            domain: self.domain.clone(),
        }
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout.map(Duration::from_secs),
            ..ClientOptions::default()
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: [&str; 9] = [
        "strato-dns",
        "--identifier",
        "user",
        "--password",
        "pw",
        "--order",
        "ORDER1",
        "--domain",
        "example.com",
    ];

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(BASE.iter().chain(extra.iter()))
    }

    #[test]
    fn list_uses_default_endpoint() {
        let cli = parse(&["list"]).unwrap();
        assert_eq!(cli.api, STRATO_API_BASE);
        assert!(matches!(cli.command, Command::List { json: false }));
        assert_eq!(cli.log_level(), "warn");
        assert!(cli.client_options().timeout.is_none());
    }

    #[test]
    fn add_defaults_type_to_txt() {
        let cli = parse(&["add", "--prefix", "_acme", "--value", "token"]).unwrap();
        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.to_record(), DnsRecord::new("TXT", "_acme", "token"));
    }

    #[test]
    fn remove_requires_value() {
        assert!(parse(&["remove", "--prefix", "_acme"]).is_err());
    }

    #[test]
    fn empty_record_fields_are_rejected() {
        assert!(parse(&["add", "--prefix", "", "--value", "token"]).is_err());
        assert!(parse(&["remove", "--prefix", "_acme", "--value", ""]).is_err());
        assert!(parse(&["add", "--type", "", "--prefix", "_acme", "--value", "token"]).is_err());
    }

    #[test]
    fn verbosity_and_timeout() {
        let cli = parse(&["--timeout", "30", "list", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "debug");
        assert_eq!(cli.client_options().timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn credentials_carry_all_fields() {
        let cli = parse(&["list"]).unwrap();
        let creds = cli.credentials();
        assert_eq!(creds.identifier, "user");
        assert_eq!(creds.password, "pw");
        assert_eq!(creds.order, "ORDER1");
        assert_eq!(creds.domain, "example.com");
    }
}
