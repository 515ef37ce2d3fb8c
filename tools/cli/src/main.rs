//! VisageVault CLI - Command line interface for sealed embedding operations.
//!
//! This tool seals face-embedding vectors under a password, opens them
//! back, and compares two sealed embeddings by cosine similarity.
//! Embeddings enter and leave as JSON arrays of numbers; sealed blobs are
//! stored as one file per identifier in a store directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use visagevault_common::BlobId;
use visagevault_embedding::{classify_pair, normalize, FloatVector};
use visagevault_storage::{BlobStore, LocalStore};
use visagevault_vault::{open, seal};

#[derive(Parser)]
#[command(name = "visagevault")]
#[command(about = "VisageVault - Password-sealed face embeddings")]
#[command(version)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seal an embedding into the store.
    Seal {
        /// Store directory.
        #[arg(short, long)]
        store: PathBuf,

        /// Identifier for the sealed blob.
        #[arg(short, long)]
        id: String,

        /// JSON file containing the embedding as an array of numbers.
        #[arg(short = 'f', long)]
        input: PathBuf,

        /// Read the embedding in double precision.
        #[arg(long)]
        double: bool,

        /// Scale the embedding to unit L2 norm before sealing.
        #[arg(short, long)]
        normalize: bool,
    },

    /// Open a sealed embedding and print it as JSON.
    Open {
        /// Store directory.
        #[arg(short, long)]
        store: PathBuf,

        /// Identifier of the sealed blob.
        #[arg(short, long)]
        id: String,

        /// Write the embedding to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare two sealed embeddings by cosine similarity.
    Compare {
        /// Store directory.
        #[arg(short, long)]
        store: PathBuf,

        /// Identifier of the first sealed blob.
        #[arg(short = 'a', long)]
        id_a: String,

        /// Identifier of the second sealed blob.
        #[arg(short = 'b', long)]
        id_b: String,
    },

    /// List the sealed blobs in a store.
    List {
        /// Store directory.
        #[arg(short, long)]
        store: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Seal {
            store,
            id,
            input,
            double,
            normalize,
        } => cmd_seal(&store, &id, &input, double, normalize).await,

        Commands::Open { store, id, output } => cmd_open(&store, &id, output.as_deref()).await,

        Commands::Compare { store, id_a, id_b } => cmd_compare(&store, &id_a, &id_b).await,

        Commands::List { store } => cmd_list(&store).await,
    }
}

/// Prompt for password securely.
fn prompt_password(prompt: &str) -> Result<String> {
    rpassword::prompt_password(prompt).context("Failed to read password")
}

/// Read an embedding from a JSON array file.
async fn read_embedding(path: &std::path::Path, double: bool) -> Result<FloatVector> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read embedding file {}", path.display()))?;

    let vector = if double {
        let elements: Vec<f64> =
            serde_json::from_slice(&bytes).context("Embedding file is not a JSON number array")?;
        FloatVector::from(elements)
    } else {
        let elements: Vec<f32> =
            serde_json::from_slice(&bytes).context("Embedding file is not a JSON number array")?;
        FloatVector::from(elements)
    };

    if vector.is_empty() {
        anyhow::bail!("Embedding is empty");
    }

    Ok(vector)
}

/// Render an embedding as a JSON array.
fn embedding_to_json(vector: &FloatVector) -> Result<String> {
    let json = match vector {
        FloatVector::F32(elements) => serde_json::to_string(elements),
        FloatVector::F64(elements) => serde_json::to_string(elements),
    };
    json.context("Failed to render embedding as JSON")
}

/// Seal an embedding into the store.
async fn cmd_seal(
    store_dir: &PathBuf,
    id: &str,
    input: &PathBuf,
    double: bool,
    unit_norm: bool,
) -> Result<()> {
    info!("Sealing embedding {} into {}", id, store_dir.display());

    let id = BlobId::new(id).context("Invalid blob identifier")?;
    let mut vector = read_embedding(input, double).await?;

    if unit_norm {
        vector = normalize(&vector).context("Failed to normalize embedding")?;
    }

    let password = prompt_password("Enter password: ")?;
    let confirm = prompt_password("Confirm password: ")?;

    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }

    if password.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    let blob = seal(&vector, &password).context("Failed to seal embedding")?;
    let size = blob.len();

    let store = LocalStore::create(store_dir).await?;
    store.put(&id, blob).await?;

    println!(
        "Sealed embedding stored: {} ({} elements, {} bytes)",
        id,
        vector.len(),
        size
    );

    Ok(())
}

/// Open a sealed embedding.
async fn cmd_open(store_dir: &PathBuf, id: &str, output: Option<&std::path::Path>) -> Result<()> {
    let id = BlobId::new(id).context("Invalid blob identifier")?;
    let password = prompt_password("Enter password: ")?;

    let store = LocalStore::create(store_dir).await?;
    let blob = store.get(&id).await?;

    let vector = open(&blob, &password).context("Failed to open sealed embedding")?;
    let json = embedding_to_json(&vector)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, json.as_bytes())
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Embedding written to {} ({} elements)", path.display(), vector.len());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Compare two sealed embeddings.
async fn cmd_compare(store_dir: &PathBuf, id_a: &str, id_b: &str) -> Result<()> {
    let id_a = BlobId::new(id_a).context("Invalid first blob identifier")?;
    let id_b = BlobId::new(id_b).context("Invalid second blob identifier")?;
    let password = prompt_password("Enter password: ")?;

    let store = LocalStore::create(store_dir).await?;
    let blob_a = store.get(&id_a).await?;
    let blob_b = store.get(&id_b).await?;

    let vector_a = open(&blob_a, &password)
        .with_context(|| format!("Failed to open sealed embedding '{id_a}'"))?;
    let vector_b = open(&blob_b, &password)
        .with_context(|| format!("Failed to open sealed embedding '{id_b}'"))?;

    let result = classify_pair(&vector_a, &vector_b).context("Failed to compare embeddings")?;

    println!("{result}");

    Ok(())
}

/// List sealed blobs in a store.
async fn cmd_list(store_dir: &PathBuf) -> Result<()> {
    let store = LocalStore::create(store_dir).await?;
    let mut ids = store.list().await?;
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    if ids.is_empty() {
        println!("Store is empty.");
    } else {
        println!("Sealed blobs in {}:", store_dir.display());
        for id in ids {
            println!("  {id}");
        }
    }

    Ok(())
}
