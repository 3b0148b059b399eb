// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 The sage authors

//! CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

/// Sage - terminal chat client for a document-Q&A backend
#[derive(Parser, Debug)]
#[command(name = "sage")]
#[command(version, about = "Chat with a document-Q&A backend from your terminal")]
pub struct Cli {
    /// Chat endpoint URL (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Render AI replies as plain text instead of markdown
    #[arg(long)]
    pub plain: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
