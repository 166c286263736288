//! `zone`: authoritative zones

use std::io::Write;

use anyhow::Result;
use dnscli_pdns::{NewZone, ZonesApi, canonicalize, de_canonicalize, is_valid_domain};

use crate::cli::{NameArg, ZoneAddArgs, ZoneCommand};
use crate::error::CliError;
use crate::output::{self, OutputType};

pub async fn run(
    command: ZoneCommand,
    api: &dyn ZonesApi,
    output: OutputType,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        ZoneCommand::List => {
            let zones = api.list().await?;
            match output {
                OutputType::Json => output::print_json(out, &zones)?,
                OutputType::Text => output::print_zones(out, &zones)?,
            }
        }
        ZoneCommand::Show(NameArg { name }) => {
            let zone = api.get(&canonicalize(&name)).await?;
            match output {
                OutputType::Json => output::print_json(out, &zone)?,
                OutputType::Text => output::print_zone(out, &zone)?,
            }
        }
        ZoneCommand::Add(args) => add(args, api, output, out).await?,
        ZoneCommand::Del(NameArg { name }) => {
            api.delete(&canonicalize(&name)).await?;
            match output {
                OutputType::Json => output::print_empty_json(out)?,
                OutputType::Text => {
                    writeln!(out, "zone {} has been removed", de_canonicalize(&name))?;
                }
            }
        }
    }
    Ok(())
}

async fn add(
    args: ZoneAddArgs,
    api: &dyn ZonesApi,
    output: OutputType,
    out: &mut dyn Write,
) -> Result<()> {
    if !is_valid_domain(&args.name) {
        return Err(CliError::InvalidDomain(args.name).into());
    }
    let new_zone = NewZone {
        name: canonicalize(&args.name),
        kind: args.kind,
        nameservers: args
            .nameservers
            .iter()
            .map(|ns| ns.trim())
            .filter(|ns| !ns.is_empty())
            .map(canonicalize)
            .collect(),
        masters: args
            .masters
            .iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect(),
    };
    log::debug!("creating {} zone {}", new_zone.kind, new_zone.name);

    let zone = api.create(&new_zone).await?;

    match output {
        OutputType::Json => output::print_json(out, &zone)?,
        OutputType::Text => writeln!(
            out,
            "zone {} ({}) has been created",
            de_canonicalize(&zone.name),
            zone.kind
        )?,
    }
    Ok(())
}
