// Copyright 2025 The axion Authors
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

use clap::Parser;

use axion::{
    banner,
    cli::Cli,
    commands::exec::{execute_command, DispatchOptions, ExecuteCommandParams},
    executor::{is_stderr_tty, should_use_colors},
    report::EXIT_FAILURE,
    utils::init_logging,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.version {
        banner::print_banner();
        banner::print_version();
        return;
    }

    if !cli.silent {
        banner::print_banner();
    }

    let code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}

async fn run(cli: &Cli) -> anyhow::Result<i32> {
    let selection = cli.selection()?;
    let command = cli
        .command
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("-c is required and must be non-empty"))?;

    tracing::debug!("Using credential file {}", cli.config.display());

    execute_command(ExecuteCommandParams {
        config_path: &cli.config,
        selection,
        command,
        host_key_policy: cli.strict_host_key_checking.clone(),
        options: DispatchOptions {
            max_parallel: cli.max_parallel,
            show_progress: !cli.silent && is_stderr_tty(),
            use_colors: should_use_colors(),
        },
    })
    .await
}
