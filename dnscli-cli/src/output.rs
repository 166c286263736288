//! Rendering of API results as JSON or tab-aligned text

use std::io::{self, Write};

use clap::ValueEnum;
use dnscli_pdns::{
    ForwardZone, SearchResults, ServerInfo, Zone, de_canonicalize,
};
use serde::{Deserialize, Serialize};
use tabwriter::TabWriter;

/// Output format selected with `--output-type`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    Text,
    Json,
}

/// Writes `value` as a single line of JSON.
pub fn print_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// JSON rendering of a call that returns nothing.
pub fn print_empty_json(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{{}}")
}

/// Writes a tab-aligned table with a header and a dashed separator row.
fn write_table<I>(out: &mut dyn Write, header: &[&str], rows: I) -> io::Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut tw = TabWriter::new(out).padding(2);
    writeln!(tw, "{}", header.join("\t"))?;
    let dashes: Vec<String> = header.iter().map(|h| "-".repeat(h.len())).collect();
    writeln!(tw, "{}", dashes.join("\t"))?;
    for row in rows {
        writeln!(tw, "{}", row.join("\t"))?;
    }
    tw.flush()
}

// ============ search ============

pub fn print_search_results(out: &mut dyn Write, results: &SearchResults) -> io::Result<()> {
    let header = [
        "content",
        "disabled",
        "name",
        "object_type",
        "zone_id",
        "zone",
        "type",
        "ttl",
    ];
    let rows = results.sorted_by_content().into_iter().map(|r| {
        let mut content = de_canonicalize(&r.content);
        // An empty cell would collapse the column
        if content.is_empty() {
            content = " ".to_string();
        }
        vec![
            content,
            r.disabled.to_string(),
            de_canonicalize(&r.name),
            r.object_type.to_string(),
            de_canonicalize(&r.zone_id),
            de_canonicalize(&r.zone),
            r.record_type.clone(),
            r.ttl.to_string(),
        ]
    });
    write_table(out, &header, rows)
}

// ============ zones ============

pub fn print_zones(out: &mut dyn Write, zones: &[Zone]) -> io::Result<()> {
    let rows = zones.iter().map(|z| {
        vec![
            de_canonicalize(&z.name),
            z.kind.to_string(),
            z.serial.to_string(),
            z.dnssec.to_string(),
            z.masters.join(","),
        ]
    });
    write_table(out, &["name", "kind", "serial", "dnssec", "masters"], rows)
}

/// Zone summary followed by one row per record.
pub fn print_zone(out: &mut dyn Write, zone: &Zone) -> io::Result<()> {
    writeln!(out, "zone:   {}", de_canonicalize(&zone.name))?;
    writeln!(out, "kind:   {}", zone.kind)?;
    writeln!(out, "serial: {}", zone.serial)?;
    writeln!(out, "dnssec: {}", zone.dnssec)?;
    if !zone.masters.is_empty() {
        writeln!(out, "masters: {}", zone.masters.join(","))?;
    }
    writeln!(out)?;

    let rrsets = zone.rrsets.as_deref().unwrap_or_default();
    let rows = rrsets.iter().flat_map(|rrset| {
        rrset.records.iter().map(move |record| {
            vec![
                de_canonicalize(&rrset.name),
                rrset.record_type.clone(),
                rrset.ttl.to_string(),
                record.content.clone(),
                record.disabled.to_string(),
            ]
        })
    });
    write_table(out, &["name", "type", "ttl", "content", "disabled"], rows)
}

pub fn print_forward_zones(out: &mut dyn Write, zones: &[ForwardZone]) -> io::Result<()> {
    let rows = zones
        .iter()
        .map(|z| vec![de_canonicalize(&z.name), z.nameservers.join(",")]);
    write_table(out, &["name", "nameservers"], rows)
}

// ============ server ============

pub fn print_server_info(out: &mut dyn Write, info: &ServerInfo) -> io::Result<()> {
    let mut tw = TabWriter::new(out).padding(1);
    for (key, value) in [
        ("type", &info.object_type),
        ("id", &info.id),
        ("daemon_type", &info.daemon_type),
        ("version", &info.version),
        ("url", &info.url),
        ("config_url", &info.config_url),
        ("zones_url", &info.zones_url),
    ] {
        writeln!(tw, "{key}:\t{value}")?;
    }
    tw.flush()
}
