//! Command handlers
//!
//! Each handler takes the API trait it needs, so tests can run it against
//! the in-memory implementations instead of a server.

mod fz;
mod info;
mod rr;
mod search;
mod zone;

use std::io::Write;

use dnscli_pdns::PdnsClient;

use crate::cli::Command;
use crate::output::OutputType;

/// Runs one command against the server.
pub async fn dispatch(
    command: Command,
    client: &PdnsClient,
    output: OutputType,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Command::Rr(command) => rr::run(command, &client.zones(), output, out).await,
        Command::Fz(command) => fz::run(command, &client.forward_zones(), output, out).await,
        Command::Zone(command) => zone::run(command, &client.zones(), output, out).await,
        Command::Search(args) => search::run(&args, &client.search(), output, out).await,
        Command::Info => info::run(&client.servers(), output, out).await,
    }
}
