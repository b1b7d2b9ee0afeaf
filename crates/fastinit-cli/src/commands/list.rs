//! Implementation of the `fastinit list` command.

use std::sync::Arc;

use fastinit_adapters::catalog;
use fastinit_core::{
    application::{CatalogService, DescriptorInfo},
    domain::Feature,
};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new(Arc::new(catalog()?));

    let descriptors = match &args.feature {
        Some(name) => service.for_feature(name.parse::<Feature>()?),
        None => service.list(),
    };

    // `--output-format json` wins over the default table.
    let format = if output.is_json() && args.format == ListFormat::Table {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Catalog templates:")?;
            for line in table_rows(&descriptors) {
                output.print(&line)?;
            }
            if args.feature.is_none() && !global.quiet {
                output.print("")?;
                output.header("Dependency rules:")?;
                for rule in service.rules() {
                    output.print(&format!("  {} => {}", rule.name, rule.includes))?;
                }
            }
        }

        // Machine formats go straight to stdout so they stay parseable
        // even in quiet mode.
        ListFormat::Json => output.json(&descriptors)?,

        ListFormat::List => {
            for d in &descriptors {
                println!("{}", d.path);
            }
        }

        ListFormat::Csv => {
            for line in csv_rows(&descriptors) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn table_rows(descriptors: &[DescriptorInfo]) -> Vec<String> {
    let width = descriptors.iter().map(|d| d.path.len()).max().unwrap_or(0);
    descriptors
        .iter()
        .map(|d| {
            format!(
                "  {:<width$}  {:<10} {:<16} {}",
                d.path,
                d.feature.as_str(),
                d.variant,
                d.activated_by
            )
        })
        .collect()
}

fn csv_rows(descriptors: &[DescriptorInfo]) -> Vec<String> {
    let mut rows = vec!["path,feature,variant,activated_by".to_string()];
    rows.extend(descriptors.iter().map(|d| {
        format!(
            "{},{},{},\"{}\"",
            d.path,
            d.feature.as_str(),
            d.variant,
            d.activated_by.replace('"', "\"\"")
        )
    }));
    rows
}
