//! School registry CLI.
//!
//! # Responsibility
//! - Provide the two user-facing screens as subcommands: `add` (the
//!   creation form) and `list` (the listing screen).
//! - Keep rendering concerns out of `schoolreg_core`.

use clap::{Parser, Subcommand};
use log::debug;
use schoolreg_core::db::open_db;
use schoolreg_core::{
    default_log_level, init_logging, RegisterSchoolRequest, School, SchoolService,
    SqliteSchoolRepository,
};
use std::error::Error;
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Parser)]
#[command(name = "schoolreg")]
#[command(version, about = "Local school registry", long_about = None)]
struct Cli {
    /// Database file to operate on.
    #[arg(long, global = true, default_value = "schools.db")]
    db: PathBuf,

    /// Directory for rolling log files. Logging is disabled when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new school
    Add {
        /// School name
        #[arg(long)]
        name: String,
        /// Street address
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        /// 10-digit contact number
        #[arg(long)]
        contact: String,
        /// Contact email address
        #[arg(long)]
        email: String,
        /// Path or URI of the school image
        #[arg(long)]
        image: String,
    },
    /// List all registered schools
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[derive(Tabled)]
struct SchoolRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Email")]
    email_id: String,
}

impl From<&School> for SchoolRow {
    fn from(school: &School) -> Self {
        Self {
            id: school.id,
            name: school.name.clone(),
            city: school.city.clone(),
            state: school.state.clone(),
            contact: school.contact.clone(),
            email_id: school.email_id.clone(),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let absolute = std::path::absolute(log_dir)?;
        let dir = absolute
            .to_str()
            .ok_or("log directory path must be valid UTF-8")?;
        init_logging(default_log_level(), dir)?;
    }

    let conn = open_db(&cli.db)?;
    let repo = SqliteSchoolRepository::try_new(&conn)?;
    let service = SchoolService::new(repo);

    match cli.command {
        Commands::Add {
            name,
            address,
            city,
            state,
            contact,
            email,
            image,
        } => {
            let request = RegisterSchoolRequest {
                name,
                address,
                city,
                state,
                contact,
                email_id: email,
                image,
            };
            let id = service.register_school(&request)?;
            println!("registered school id={id}");
        }
        Commands::List { format } => {
            let schools = service.list_schools()?;
            debug!(
                "event=list_rendered module=cli status=ok count={}",
                schools.len()
            );
            render_schools(&schools, &format)?;
        }
    }

    Ok(())
}

fn render_schools(schools: &[School], format: &str) -> Result<(), Box<dyn Error>> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(schools)?),
        "table" => {
            if schools.is_empty() {
                println!("no schools registered yet");
                return Ok(());
            }
            let rows: Vec<SchoolRow> = schools.iter().map(SchoolRow::from).collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
        other => return Err(format!("unsupported format `{other}`; expected table|json").into()),
    }

    Ok(())
}
