//! Schema Studio CLI
//!
//! The editor host around the schema library: keeps a file-backed list of
//! JSON Schema documents and exposes the authoring operations — create,
//! edit properties, duplicate, delete, import, export.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use schema_studio::config::OutputFormat;
use schema_studio::{
    schema_to_fields, Field, PropertyOptions, Schema, SchemaKind, SchemaStore, StudioConfig,
};

#[derive(Parser)]
#[command(name = "schema-studio")]
#[command(about = "Author and manage JSON Schema documents")]
struct Cli {
    /// Path to the store file (overrides config)
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all schemas in the store
    List,

    /// Create a new empty schema
    New {
        /// Title for the new schema
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Show a schema and its field tree
    Show {
        /// Schema id (or unique id prefix, or title)
        id: String,
    },

    /// Add a property to a schema
    Add {
        /// Schema id (or unique id prefix, or title)
        id: String,
        /// Property name
        name: String,
        /// Property type
        #[arg(short = 't', long = "type", value_enum, default_value_t = KindArg::String)]
        kind: KindArg,
        /// Property description
        #[arg(short, long)]
        description: Option<String>,
        /// Mark the property as required
        #[arg(short, long)]
        required: bool,
    },

    /// Remove a property from a schema
    Remove {
        /// Schema id (or unique id prefix, or title)
        id: String,
        /// Property name
        name: String,
    },

    /// Duplicate a schema
    Duplicate {
        /// Schema id (or unique id prefix, or title)
        id: String,
    },

    /// Delete a schema from the store
    Delete {
        /// Schema id (or unique id prefix, or title)
        id: String,
    },

    /// Import a schema from a JSON Schema file
    Import {
        /// Path to the file to import
        path: PathBuf,
    },

    /// Export a schema as JSON Schema text
    Export {
        /// Schema id (or unique id prefix, or title)
        id: String,
        /// Output file (defaults to <title>.schema.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl From<KindArg> for SchemaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::String => SchemaKind::String,
            KindArg::Number => SchemaKind::Number,
            KindArg::Integer => SchemaKind::Integer,
            KindArg::Boolean => SchemaKind::Boolean,
            KindArg::Object => SchemaKind::Object,
            KindArg::Array => SchemaKind::Array,
            KindArg::Null => SchemaKind::Null,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = StudioConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    let store_path = cli.store.unwrap_or_else(|| config.store_path());
    let mut store = SchemaStore::open(&store_path)
        .with_context(|| format!("failed to open store at {:?}", store_path))?;

    match cli.command {
        Command::List => {
            if store.is_empty() {
                println!("📦 Store is empty - create a schema with `schema-studio new`");
                return Ok(());
            }
            println!("📦 {} schema(s) in {:?}", store.len(), store.path());
            println!();
            for entry in store.entries() {
                println!(
                    "  {}  {} ({}, {} properties)",
                    entry.id,
                    entry.title(),
                    entry.schema.display_type(),
                    entry.schema.property_count(),
                );
            }
        }

        Command::New { title } => {
            let title = title.unwrap_or_else(|| config.editor.default_title.clone());
            let mut schema = Schema::empty_object(&title);
            schema.draft = Some(config.editor.draft.clone());
            let entry = store.insert(schema);
            println!("✅ Created '{}' ({})", title, entry.id);
            store.save()?;
        }

        Command::Show { id } => {
            let id = resolve_id(&store, &id)?;
            let entry = store.get(&id).expect("id was just resolved");

            println!("📝 {} ({})", entry.title(), entry.id);
            if let Some(description) = &entry.schema.description {
                println!("   {}", description);
            }
            if let Some(draft) = &entry.schema.draft {
                println!("   draft: {}", draft);
            }
            println!();

            let fields = schema_to_fields(&entry.schema, "");
            if fields.is_empty() {
                println!("  (no fields)");
            } else {
                print_fields(&fields, entry.schema.required.as_ref(), 1);
            }
        }

        Command::Add {
            id,
            name,
            kind,
            description,
            required,
        } => {
            let id = resolve_id(&store, &id)?;
            let options = PropertyOptions {
                description,
                required,
            };
            let edited = store
                .get(&id)
                .expect("id was just resolved")
                .schema
                .add_property(&name, kind.into(), &options);
            store.replace(&id, edited)?;
            store.save()?;
            println!("✅ Added property '{}'", name);
        }

        Command::Remove { id, name } => {
            let id = resolve_id(&store, &id)?;
            let entry = store.get(&id).expect("id was just resolved");
            if !entry.schema.properties.as_ref().is_some_and(|p| p.contains_key(&name)) {
                println!("⚠️  '{}' has no property '{}'", entry.title(), name);
                return Ok(());
            }
            let edited = entry.schema.remove_property(&name);
            store.replace(&id, edited)?;
            store.save()?;
            println!("✅ Removed property '{}'", name);
        }

        Command::Duplicate { id } => {
            let id = resolve_id(&store, &id)?;
            let copy = store.duplicate(&id)?;
            println!("✅ Duplicated as '{}' ({})", copy.title(), copy.id);
            store.save()?;
        }

        Command::Delete { id } => {
            let id = resolve_id(&store, &id)?;
            let removed = store.delete(&id)?;
            println!("✅ Deleted '{}'", removed.title());
            store.save()?;
        }

        Command::Import { path } => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {:?}", path))?;
            match store.import_json(&text) {
                Ok(entry) => {
                    println!("✅ Imported '{}' ({})", entry.title(), entry.id);
                    store.save()?;
                }
                Err(e) => {
                    // Bad file, not a bad store - report and leave everything as it was
                    println!("⚠️  Failed to import: invalid file ({})", e);
                }
            }
        }

        Command::Export { id, output } => {
            let id = resolve_id(&store, &id)?;
            let entry = store.get(&id).expect("id was just resolved");

            let text = match config.export.output_format {
                OutputFormat::Pretty => store.export_json(&id)?,
                OutputFormat::Compact => serde_json::to_string(&entry.schema)?,
            };

            let output = output.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "{}{}",
                    entry.title().to_lowercase(),
                    config.export.suffix
                ))
            });
            fs::write(&output, text)
                .with_context(|| format!("failed to write {:?}", output))?;
            println!("✅ Exported to {:?}", output);
        }
    }

    Ok(())
}

/// Accept a full id, a unique id prefix, or an exact title
fn resolve_id(store: &SchemaStore, needle: &str) -> Result<String> {
    if let Some(entry) = store.get(needle) {
        return Ok(entry.id.clone());
    }

    let matches: Vec<_> = store
        .entries()
        .iter()
        .filter(|entry| entry.id.starts_with(needle) || entry.title() == needle)
        .collect();

    match matches.len() {
        1 => Ok(matches[0].id.clone()),
        0 => bail!("no schema matches '{}'", needle),
        n => bail!("'{}' is ambiguous ({} schemas match)", needle, n),
    }
}

fn print_fields(fields: &[Field<'_>], required: Option<&Vec<String>>, depth: usize) {
    for field in fields {
        let marker = if required.is_some_and(|r| r.iter().any(|n| n == field.name)) {
            "*"
        } else {
            ""
        };
        println!(
            "{:indent$}{}{} : {}  [{}]",
            "",
            field.name,
            marker,
            field.schema.display_type(),
            field.path,
            indent = depth * 2
        );

        if let Some(children) = &field.children {
            let child_required = if field.schema.is_kind(SchemaKind::Array) {
                field.schema.items.as_deref().and_then(|items| items.required.as_ref())
            } else {
                field.schema.required.as_ref()
            };
            print_fields(children, child_required, depth + 1);
        }
    }
}
