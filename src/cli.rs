// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn upload_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("path")
            .long("path")
            .help("CSV file to upload (defaults to the built-in sample)")
            .conflicts_with("data-uri"),
    )
    .arg(
        Arg::new("data-uri")
            .long("data-uri")
            .help("Upload as a data:<media>;base64,<payload> URI"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("category")
            .long("category")
            .short('c')
            .action(ArgAction::Append)
            .help("Keep only this category (repeat for several)"),
    )
    .arg(
        Arg::new("start")
            .long("start")
            .help("Inclusive start date; ignored unless --end is also given"),
    )
    .arg(
        Arg::new("end")
            .long("end")
            .help("Inclusive end date; ignored unless --start is also given"),
    )
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
        .arg(
            Arg::new("jsonl")
                .long("jsonl")
                .action(ArgAction::SetTrue)
                .conflicts_with("json"),
        )
}

pub fn build_cli() -> Command {
    Command::new("salesboard")
        .about("Filter and aggregate sales CSVs into revenue charts")
        .version(clap::crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Settings JSON file"),
        )
        .subcommand(json_flags(filter_args(upload_args(
            Command::new("report")
                .about("Revenue over time and top products")
                .arg(
                    Arg::new("granularity")
                        .long("granularity")
                        .short('g')
                        .value_parser(["daily", "monthly"]),
                )
                .arg(
                    Arg::new("top")
                        .long("top")
                        .value_parser(value_parser!(usize)),
                ),
        ))))
        .subcommand(json_flags(upload_args(
            Command::new("options").about("Category choices and date bounds"),
        )))
        .subcommand(filter_args(upload_args(
            Command::new("export")
                .about("Write the filtered dataset")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )))
        .subcommand(json_flags(upload_args(
            Command::new("doctor").about("Data-quality observations"),
        )))
}
