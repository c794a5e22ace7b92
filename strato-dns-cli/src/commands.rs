//! Command execution

use std::fmt;

use anyhow::{Context, Result};
use strato_dns_provider::{DnsConfig, DnsConfigProvider, RecordChange};

use crate::cli::Command;

pub async fn run(provider: &dyn DnsConfigProvider, command: &Command) -> Result<()> {
    match command {
        Command::List { json } => {
            let config = provider
                .get_configuration()
                .await
                .context("Failed to fetch DNS configuration")?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", ConfigListing(&config));
            }
        }
        Command::Add(args) => {
            let record = args.to_record();
            let change = provider
                .add_record(&record)
                .await
                .with_context(|| format!("Failed to add record ({record})"))?;
            report(change, &record.to_string());
        }
        Command::Remove(args) => {
            let record = args.to_record();
            let change = provider
                .remove_record(&record)
                .await
                .with_context(|| format!("Failed to remove record ({record})"))?;
            report(change, &record.to_string());
        }
    }
    Ok(())
}

fn report(change: RecordChange, record: &str) {
    let message = match change {
        RecordChange::Added => "New record added successfully",
        RecordChange::AlreadyPresent => "Record already exists",
        RecordChange::Removed => "Record successfully removed",
        RecordChange::NotFound => "Record not found",
    };
    println!("{message}: {record}");
}

/// Human-readable listing of a configuration.
pub struct ConfigListing<'a>(pub &'a DnsConfig);

impl fmt::Display for ConfigListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DMARC Type: {}", self.0.dmarc_type)?;
        writeln!(f, "SPF Type: {}", self.0.spf_type)?;
        writeln!(f, "DNS records:")?;
        for record in &self.0.records {
            writeln!(f, "  {record}")?;
        }
        Ok(())
    }
}
