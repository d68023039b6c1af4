// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization of command results for printing

use super::formatter::TextReport;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render<T: Serialize + TextReport>(&self, view: &T) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(view.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(view)?),
        }
    }
}
