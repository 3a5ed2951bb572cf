//! dasmproj CLI
//!
//! Inspect and convert disassembler project files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use dasmproj::{json, load, save, Result, SaveOptions};

/// dasmproj CLI
#[derive(Parser, Debug)]
#[command(name = "dasmproj")]
#[command(about = "Inspect and convert disassembler project files")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a project and print its summary fields
    Info {
        /// Project file to read
        path: PathBuf,
    },

    /// Load a project and re-save it (upgrades old files to the newest format)
    Copy {
        /// Project file to read
        src: PathBuf,

        /// Destination project file
        dest: PathBuf,

        /// Write the destination without gzip compression
        #[arg(long)]
        plain: bool,
    },

    /// Convert a project file to a JSON document
    ExportJson {
        /// Project file to read
        src: PathBuf,

        /// Destination JSON file
        dest: PathBuf,
    },

    /// Convert a JSON document back to a project file
    ImportJson {
        /// JSON document to read
        src: PathBuf,

        /// Destination project file
        dest: PathBuf,

        /// Write the destination without gzip compression
        #[arg(long)]
        plain: bool,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dasmproj=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Info { path } => {
            let p = load(&path)?;
            println!("name:         {}", p.name);
            println!("file:         {}", p.file);
            println!("description:  {}", p.description);
            println!("file type:    {}", p.file_type);
            println!("target:       {}", p.target_type);
            println!("version:      {}", p.version);
            println!("chip:         {}", p.chip);
            println!("bin address:  0x{:x}", p.bin_address);
            println!("image:        {} bytes", p.image.len());
            println!("memory flags: {} bytes", p.memory_flags.len());
            println!("entries:      {}", p.memory.len());
            println!("constants:    {}", p.constants.len());
            println!("comments:     {}", p.constant_comments.len());
            println!("relocates:    {}", p.relocates.len());
            println!("patches:      {}", p.patches.len());
            println!("freezes:      {}", p.freezes.len());
        }
        Commands::Copy { src, dest, plain } => {
            let p = load(&src)?;
            let options = if plain {
                SaveOptions::plain()
            } else {
                SaveOptions::compressed()
            };
            save(&dest, &p, options)?;
            tracing::info!(src = %src.display(), dest = %dest.display(), "copied project");
        }
        Commands::ExportJson { src, dest } => {
            let p = load(&src)?;
            json::export(&dest, &p)?;
            tracing::info!(src = %src.display(), dest = %dest.display(), "exported JSON");
        }
        Commands::ImportJson { src, dest, plain } => {
            let p = json::import(&src)?;
            let options = if plain {
                SaveOptions::plain()
            } else {
                SaveOptions::compressed()
            };
            save(&dest, &p, options)?;
            tracing::info!(src = %src.display(), dest = %dest.display(), "imported JSON");
        }
    }
    Ok(())
}
