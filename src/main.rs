use clap::{Parser, Subcommand};

mod assemble;
mod catalog;
mod diagnostics;
mod generate;
mod merge;
mod render;
mod session;
mod xml;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "mpforge")]
#[command(about = "SCOM management pack creator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a management pack from a session file.
    Generate {
        /// Session JSON file.
        #[arg(long)]
        session: String,

        /// Output directory (defaults to the current directory).
        #[arg(short = 'o', long)]
        out: Option<String>,

        /// Also write a PowerShell deployment script.
        #[arg(long)]
        deploy_script: bool,

        /// Management server name for the deployment script.
        #[arg(long)]
        management_server: Option<String>,
    },

    /// Render the selected fragments without assembling a document.
    Preview {
        /// Session JSON file.
        #[arg(long)]
        session: String,
    },

    /// List the available fragment types as JSON.
    Fragments,

    /// Build a session file interactively.
    Wizard {
        /// Where to write the session JSON.
        #[arg(short = 'o', long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = catalog::Catalog::builtin();

    match cli.cmd {
        Commands::Generate {
            session,
            out,
            deploy_script,
            management_server,
        } => {
            // 1) Parse + validate the session file.
            let spec: session::SessionSpec =
                serde_json::from_str(&std::fs::read_to_string(&session)?)?;
            let validated = spec.validate_and_build(&catalog)?;

            // 2) Render, merge, assemble.
            let pack = generate::generate_document(&validated, &catalog)?;
            if pack.skipped_fragments > 0 {
                diagnostics::warn(format!(
                    "{} fragment(s) skipped",
                    pack.skipped_fragments
                ));
            }

            // 3) Write outputs.
            let out_dir = std::path::PathBuf::from(out.unwrap_or_else(|| ".".to_string()));
            let pack_path = out_dir.join(&pack.file_name);
            std::fs::write(&pack_path, &pack.document)?;
            println!("Wrote {}", pack_path.display());

            if deploy_script {
                let script =
                    assemble::deploy_script(&validated.basic_info, management_server.as_deref());
                let script_path =
                    out_dir.join(format!("Deploy-{}.ps1", validated.basic_info.pack_id()));
                std::fs::write(&script_path, script)?;
                println!("Wrote {}", script_path.display());
            }
        }

        Commands::Preview { session } => {
            let spec: session::SessionSpec =
                serde_json::from_str(&std::fs::read_to_string(&session)?)?;
            let validated = spec.validate_and_build(&catalog)?;
            print!("{}", generate::preview_text(&validated, &catalog));
        }

        Commands::Fragments => {
            let listing: Vec<_> = catalog
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "id": f.id,
                        "name": f.name,
                        "category": f.category,
                        "fields": f.fields,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }

        Commands::Wizard { out } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            let spec = session::wizard::run_wizard(&catalog, &mut input, &mut output)?;
            std::fs::write(&out, serde_json::to_string_pretty(&spec)?)?;
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
