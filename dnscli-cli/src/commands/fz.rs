//! `fz`: forwarding zones

use std::io::Write;

use anyhow::Result;
use dnscli_pdns::{ForwardZone, ForwardZonesApi, canonicalize, de_canonicalize, is_valid_domain};

use crate::cli::{FzAddArgs, FzCommand, NameArg};
use crate::error::CliError;
use crate::output::{self, OutputType};

pub async fn run(
    command: FzCommand,
    api: &dyn ForwardZonesApi,
    output: OutputType,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        FzCommand::Del(NameArg { name }) => delete(&name, api, output, out).await,
        FzCommand::List => list(api, output, out).await,
        FzCommand::Add(args) => add(args, api, output, out).await,
    }
}

async fn delete(
    name: &str,
    api: &dyn ForwardZonesApi,
    output: OutputType,
    out: &mut dyn Write,
) -> Result<()> {
    api.delete_by_name(&canonicalize(name)).await?;

    match output {
        OutputType::Json => output::print_empty_json(out)?,
        OutputType::Text => writeln!(
            out,
            "domain {} was removed from forwarding zones",
            de_canonicalize(name)
        )?,
    }
    Ok(())
}

async fn list(api: &dyn ForwardZonesApi, output: OutputType, out: &mut dyn Write) -> Result<()> {
    let zones = api.list().await?;
    match output {
        OutputType::Json => output::print_json(out, &zones)?,
        OutputType::Text => output::print_forward_zones(out, &zones)?,
    }
    Ok(())
}

async fn add(
    args: FzAddArgs,
    api: &dyn ForwardZonesApi,
    output: OutputType,
    out: &mut dyn Write,
) -> Result<()> {
    if !is_valid_domain(&args.name) {
        return Err(CliError::InvalidDomain(args.name).into());
    }
    let zone = ForwardZone {
        name: canonicalize(&args.name),
        nameservers: args
            .nameservers
            .iter()
            .map(|ns| ns.trim().to_string())
            .filter(|ns| !ns.is_empty())
            .collect(),
    };

    api.add(&zone).await?;

    match output {
        OutputType::Json => output::print_json(out, &zone)?,
        OutputType::Text => writeln!(
            out,
            "domain {} was added to forwarding zones ({})",
            de_canonicalize(&zone.name),
            zone.nameservers.join(",")
        )?,
    }
    Ok(())
}
