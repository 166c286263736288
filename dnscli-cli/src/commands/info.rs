//! `info`: server information

use std::io::Write;

use anyhow::Result;
use dnscli_pdns::ServerApi;

use crate::output::{self, OutputType};

pub async fn run(api: &dyn ServerApi, output: OutputType, out: &mut dyn Write) -> Result<()> {
    let info = api.info().await?;
    match output {
        OutputType::Json => output::print_json(out, &info)?,
        OutputType::Text => output::print_server_info(out, &info)?,
    }
    Ok(())
}
