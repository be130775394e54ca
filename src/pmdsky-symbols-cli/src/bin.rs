/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pmdsky_symbols::{
    addresses::Address,
    bundled,
    collections::addended_ordered_map::FindSettings,
    config::LoadConfig,
    loader,
    metadata::{Region, SymbolKinds},
    render::{self, Generator, RenderSettings},
    table::{RegionSymbol, SymbolTable},
};
use std::{path::PathBuf, time::Instant};

mod arg_types;

use arg_types::{parse_address, ArgFormat, ArgKind, ArgRegion};

/// pmdsky-symbols: query and export the Explorers of Sky symbol database
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read the symbols from a pmdsky-debug checkout instead of the bundled table
    #[clap(long, global = true)]
    pmdsky_debug: Option<PathBuf>,

    /// Symbol files directory, relative to the checkout
    #[clap(long, global = true)]
    symbols_dir: Option<String>,

    /// Data headers directory, relative to the checkout
    #[clap(long, global = true)]
    headers_dir: Option<String>,

    /// Don't read data types from the C headers
    #[clap(long, global = true)]
    no_types: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find a symbol by name or by address
    Lookup {
        #[clap(long)]
        region: ArgRegion,

        #[clap(long, conflicts_with = "address", required_unless_present = "address")]
        name: Option<String>,

        #[clap(long, value_parser = parse_address)]
        address: Option<Address>,

        #[clap(long)]
        kind: Option<ArgKind>,

        /// Also match symbols spanning over the address
        #[clap(long)]
        addend: bool,
    },
    /// Print the symbols of a region
    Dump {
        #[clap(long)]
        region: ArgRegion,

        #[clap(long)]
        section: Option<String>,

        #[clap(long, value_enum, default_value_t = ArgFormat::Listing)]
        format: ArgFormat,

        #[clap(long)]
        no_descriptions: bool,
    },
    /// Write one file per region into a directory
    Generate {
        #[clap(long)]
        out: PathBuf,

        #[clap(long, value_enum, default_value_t = ArgFormat::Python)]
        format: ArgFormat,

        /// Release tag to record in `_release.py`
        #[clap(long)]
        release: Option<String>,
    },
    /// List the sections of a region
    Sections {
        #[clap(long)]
        region: ArgRegion,
    },
}

impl Args {
    fn load_config(&self) -> LoadConfig {
        let mut config = LoadConfig::new().with_load_types(!self.no_types);

        if let Some(symbols_dir) = &self.symbols_dir {
            *config.symbols_dir_mut() = symbols_dir.clone();
        }
        if let Some(headers_dir) = &self.headers_dir {
            *config.headers_dir_mut() = headers_dir.clone();
        }
        config
    }
}

fn print_match(sym: &RegionSymbol) {
    let addresses: Vec<_> = sym.addresses().iter().map(|x| x.to_string()).collect();

    print!(
        "{} {} {} [{}]",
        sym.section().name(),
        sym.kind(),
        sym.name(),
        addresses.join(", ")
    );
    if let Some(length) = sym.length() {
        print!(" size:{}", length);
    }
    if let Some(typ) = sym.typ() {
        print!(" ({})", typ);
    }
    println!();
    for line in sym.description().lines() {
        println!("    {}", line);
    }
}

fn lookup(
    table: &SymbolTable,
    region: Region,
    name: Option<&str>,
    address: Option<Address>,
    kinds: SymbolKinds,
    addend: bool,
) -> Result<()> {
    let sections = table.sections(region);

    let found: Vec<RegionSymbol> = match (name, address) {
        (Some(name), _) => sections.find_by_name(name, kinds).into_iter().collect(),
        (None, Some(address)) => {
            sections.find_by_address(address, kinds, FindSettings::new(addend))
        }
        (None, None) => bail!("Either a name or an address is required"),
    };

    if found.is_empty() {
        bail!("No matching symbol in {}", region);
    }
    for sym in &found {
        print_match(sym);
    }
    Ok(())
}

fn list_sections(table: &SymbolTable, region: Region) {
    for section in table.sections(region).iter() {
        let load_address = section
            .load_address()
            .map_or_else(|| "?".into(), |x| x.to_string());
        let length = section
            .length()
            .map_or_else(|| "?".into(), |x| x.to_string());

        println!(
            "{:<12} {:>10} {:>10} {:>4} functions {:>4} data",
            section.name(),
            load_address,
            length,
            section.binary().functions().len(),
            section.binary().data().len()
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let loaded = match &args.pmdsky_debug {
        Some(dir) => {
            let start = Instant::now();
            let table = loader::load_dir(dir, &args.load_config())
                .with_context(|| format!("Failed to load '{}'", dir.display()))?;
            log::info!("Loaded '{}' in {:?}", dir.display(), start.elapsed());
            table
        }
        None => bundled::load().context("Failed to parse the bundled symbols")?,
    };
    let table = &loaded;

    match &args.command {
        Command::Lookup {
            region,
            name,
            address,
            kind,
            addend,
        } => lookup(
            table,
            (*region).into(),
            name.as_deref(),
            *address,
            kind.map_or(SymbolKinds::ANY, Into::into),
            *addend,
        )?,
        Command::Dump {
            region,
            section,
            format,
            no_descriptions,
        } => {
            let settings = RenderSettings::new()
                .with_section(section.clone())
                .with_emit_descriptions(!no_descriptions);
            let text = render::render(table.sections((*region).into()), (*format).into(), &settings)?;
            print!("{}", text);
        }
        Command::Generate {
            out,
            format,
            release,
        } => {
            let generator = Generator::new((*format).into()).with_release(release.clone());
            let written = generator
                .generate(table, out)
                .with_context(|| format!("Failed to generate into '{}'", out.display()))?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Command::Sections { region } => list_sections(table, (*region).into()),
    }

    Ok(())
}
