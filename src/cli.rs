// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env::current_dir;
use std::path::PathBuf;

use clap::Parser;

use crate::cmd::check::check_decks;
use crate::cmd::export::export_decks;
use crate::cmd::serve::server::ServeConfig;
use crate::cmd::serve::server::start_server;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the decks in a directory as study pages.
    Serve {
        /// Path to the deck directory. Defaults to the current directory.
        directory: Option<String>,
        /// The address to listen on.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to listen on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Don't open the deck list in a browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Check that every deck in a directory loads.
    Check {
        /// Path to the deck directory. Defaults to the current directory.
        directory: Option<String>,
    },
    /// Print every deck in a directory as JSON.
    Export {
        /// Path to the deck directory. Defaults to the current directory.
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            directory,
            host,
            port,
            no_open,
        } => {
            let config = ServeConfig {
                directory: resolve_directory(directory)?,
                host,
                port,
                open_browser: !no_open,
            };
            start_server(config).await
        }
        Command::Check { directory } => check_decks(&resolve_directory(directory)?),
        Command::Export { directory } => export_decks(&resolve_directory(directory)?),
    }
}

fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    match directory {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(current_dir()?),
    }
}
