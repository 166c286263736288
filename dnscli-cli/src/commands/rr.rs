//! `rr`: resource record sets

use std::io::Write;

use anyhow::Result;
use dnscli_pdns::{RecordSetRequest, ZoneRecordSet, ZonesApi, de_canonicalize};

use crate::cli::{RrCommand, RrReplaceArgs, RrTarget};
use crate::output::{self, OutputType};

pub async fn run(
    command: RrCommand,
    api: &dyn ZonesApi,
    output: OutputType,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        RrCommand::Replace(args) => replace(args, api, output, out).await,
        RrCommand::Delete(target) => delete(&target, api, output, out).await,
    }
}

async fn replace(
    args: RrReplaceArgs,
    api: &dyn ZonesApi,
    output: OutputType,
    out: &mut dyn Write,
) -> Result<()> {
    let RrReplaceArgs {
        target,
        ttl,
        content,
        set_ptr,
    } = args;
    let request = RecordSetRequest {
        zone: target.zone,
        name: target.name,
        record_type: target.record_type,
        ttl,
        content,
        set_ptr,
    };
    let ZoneRecordSet { zone, rrset } = request.build_replace()?;

    api.add_record_set(&zone, &rrset).await?;

    match output {
        OutputType::Json => output::print_empty_json(out)?,
        OutputType::Text => {
            let values: Vec<&str> = rrset.records.iter().map(|r| r.content.as_str()).collect();
            writeln!(
                out,
                "Resource record {} with type {} and TTL {} has been replaced in zone {} with content {}",
                de_canonicalize(&rrset.name),
                rrset.record_type,
                rrset.ttl,
                de_canonicalize(&zone),
                values.join(",")
            )?;
        }
    }
    Ok(())
}

async fn delete(
    target: &RrTarget,
    api: &dyn ZonesApi,
    output: OutputType,
    out: &mut dyn Write,
) -> Result<()> {
    let ZoneRecordSet { zone, rrset } =
        RecordSetRequest::build_delete(&target.zone, &target.name, &target.record_type)?;

    api.delete_record_set(&zone, &rrset).await?;

    match output {
        OutputType::Json => output::print_empty_json(out)?,
        OutputType::Text => writeln!(
            out,
            "Resource record {} with type {} has been removed from zone {}",
            de_canonicalize(&rrset.name),
            rrset.record_type,
            de_canonicalize(&zone)
        )?,
    }
    Ok(())
}
