use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdns_client::naming::make_domain_canonical;
use pdns_client::types::{RrType, Zone, ZoneKind};
use pdns_client::Client;

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    /// PowerDNS API base URL (e.g. http://127.0.0.1:8081/api/v1)
    #[arg(long, value_name = "URL")]
    api_url: String,
    /// PowerDNS API key
    #[arg(long, value_name = "KEY")]
    api_key: String,
    /// Server id the API paths address
    #[arg(long, value_name = "ID", default_value = "localhost")]
    server_id: String,
    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Command {
    /// List all zones on the server
    ListZones,
    /// Show one zone, including its record sets
    GetZone { zone: String },
    /// Create a Native zone served by the given nameservers
    CreateZone {
        zone: String,
        /// Nameserver FQDN (repeat for multiple values)
        #[arg(long = "nameserver", value_name = "FQDN", required = true)]
        nameservers: Vec<String>,
    },
    /// Delete a zone and everything in it
    DeleteZone { zone: String },
    /// Queue a NOTIFY to the zone's slaves
    NotifyZone { zone: String },
    /// Replace the record set for a name/type pair
    AddRecord {
        zone: String,
        name: String,
        #[arg(value_parser = parse_rr_type)]
        rr_type: RrType,
        /// Record content (repeat for multiple records)
        #[arg(required = true)]
        contents: Vec<String>,
        #[arg(long, value_name = "SECS", default_value_t = 300)]
        ttl: u32,
    },
    /// Delete the record set for a name/type pair
    DeleteRecord {
        zone: String,
        name: String,
        #[arg(value_parser = parse_rr_type)]
        rr_type: RrType,
    },
    /// List a zone's DNSSEC signing keys
    ListCryptokeys { zone: String },
    /// Show one signing key, including private key material
    GetCryptokey { zone: String, id: u64 },
    /// Remove a signing key from a zone
    DeleteCryptokey { zone: String, id: u64 },
    /// List the server's configuration settings
    ListConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let client = Client::builder(&cli.api_url, &cli.api_key)
        .server_id(&cli.server_id)
        .timeout(Duration::from_secs(cli.timeout))
        .build()
        .context("failed to construct API client")?;

    match cli.command {
        Command::ListZones => print_json(&client.list_zones().await?)?,
        Command::GetZone { zone } => print_json(&client.get_zone(&zone).await?)?,
        Command::CreateZone { zone, nameservers } => {
            let zone = Zone {
                name: make_domain_canonical(&zone),
                kind: Some(ZoneKind::Native),
                nameservers: Some(
                    nameservers
                        .iter()
                        .map(|ns| make_domain_canonical(ns))
                        .collect(),
                ),
                ..Default::default()
            };
            print_json(&client.create_zone(&zone).await?)?;
        }
        Command::DeleteZone { zone } => {
            client.delete_zone(&zone).await?;
            println!("deleted zone {zone}");
        }
        Command::NotifyZone { zone } => print_json(&client.notify_zone(&zone).await?)?,
        Command::AddRecord {
            zone,
            name,
            rr_type,
            contents,
            ttl,
        } => {
            let contents: Vec<&str> = contents.iter().map(String::as_str).collect();
            client
                .add_record(&zone, &name, rr_type, ttl, &contents)
                .await?;
            println!("replaced {rr_type} record set for {name}");
        }
        Command::DeleteRecord { zone, name, rr_type } => {
            client.delete_record(&zone, &name, rr_type).await?;
            println!("deleted {rr_type} record set for {name}");
        }
        Command::ListCryptokeys { zone } => print_json(&client.list_cryptokeys(&zone).await?)?,
        Command::GetCryptokey { zone, id } => print_json(&client.get_cryptokey(&zone, id).await?)?,
        Command::DeleteCryptokey { zone, id } => {
            client.delete_cryptokey(&zone, id).await?;
            println!("deleted cryptokey {id} of zone {zone}");
        }
        Command::ListConfig => print_json(&client.list_config_settings().await?)?,
    }

    Ok(())
}

fn parse_rr_type(s: &str) -> Result<RrType, pdns_client::types::UnknownRrType> {
    s.parse()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
