use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cvd_recolor::api;
use cvd_recolor::cli;
use cvd_recolor::models::AppConfig;
use cvd_recolor::server;
use cvd_recolor::services::RecolorService;
use cvd_transform::Deficiency;

#[derive(Parser)]
#[command(name = "cvd-recolor")]
#[command(about = "Simulate and correct colour-vision deficiencies in images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Recolor an image file and write simulated, daltonized and recolored PNGs
    Recolor {
        /// Input image (PNG, JPEG, GIF, BMP, WebP or TIFF)
        input: PathBuf,

        /// Deficiency: protanopia, deuteranopia or tritanopia (prompts if omitted)
        #[arg(short, long)]
        deficiency: Option<String>,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the side-by-side comparison panels
        #[arg(long)]
        no_panels: bool,
    },
    /// List supported deficiencies and their matrices
    Deficiencies,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "cvd-recolor API",
        description = "Colour-vision-deficiency simulation and correction",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_index,
        api::handle_deficiencies,
        api::handle_correct,
    ),
    components(schemas(
        api::IndexResponse,
        api::DeficienciesResponse,
        api::DeficiencyInfo,
        api::CorrectUpload,
        api::CorrectErrorResponse,
    )),
    tags(
        (name = "Info", description = "Service and catalog information"),
        (name = "Correction", description = "Image recoloring")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Recolor {
            input,
            deficiency,
            output,
            no_panels,
        }) => run_recolor_command(&input, deficiency.as_deref(), output, !no_panels),
        Some(Commands::Deficiencies) => {
            run_deficiencies_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Recolor a file (no server needed)
fn run_recolor_command(
    input: &Path,
    deficiency: Option<&str>,
    output: Option<PathBuf>,
    with_panels: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cvd_recolor=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let deficiency = match deficiency {
        Some(name) => name.parse::<Deficiency>()?,
        None => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            cli::prompt_deficiency(&mut stdin.lock(), &mut stdout)?
        }
    };

    let config = AppConfig::from_env();
    let service = RecolorService::new(config.max_pixels);

    let output_dir = output.unwrap_or_else(|| {
        input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    let report = cli::recolor_file(&service, input, deficiency, &output_dir, with_panels)
        .map_err(|e| anyhow::anyhow!("Recolor error: {e}"))?;

    println!("Recolored {} for {deficiency}:", input.display());
    for path in report.paths() {
        println!("  + {}", path.display());
    }
    if report.panels.is_some() {
        println!(
            "\nPanels, left to right: {}",
            cvd_recolor::rendering::panels::PANEL_TITLES.join(" | ")
        );
    }

    Ok(())
}

/// Print the deficiency catalog
fn run_deficiencies_command() {
    for deficiency in Deficiency::ALL {
        let pair = deficiency.matrices();
        println!("{deficiency}");
        println!("  simulation:");
        for row in pair.simulation.rows() {
            println!("    {row:?}");
        }
        println!("  daltonization:");
        for row in pair.daltonization.rows() {
            println!("    {row:?}");
        }
    }
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("cvd-recolor v{VERSION}");
    println!("Colour-vision-deficiency simulation and correction\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:5000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::from_env();

    println!("\nConfiguration ({config_source}):");
    println!("  bind_addr        = {}", config.bind_addr);
    println!("  max_upload_bytes = {}", config.max_upload_bytes);
    println!("  max_pixels       = {}", config.max_pixels);
    println!("  cors_origins     = {}", config.cors_origins.join(", "));

    println!("\nDeficiencies: {}", Deficiency::names().join(", "));

    println!("\nCommands:");
    println!("  cvd-recolor serve                       Start the HTTP server");
    println!("  cvd-recolor recolor <INPUT> [-d NAME]   Recolor an image file");
    println!("  cvd-recolor deficiencies                List deficiency matrices");
    println!("  cvd-recolor --help                      Show all options");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cvd_recolor=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    tracing::info!(
        max_upload_bytes = config.max_upload_bytes,
        max_pixels = config.max_pixels,
        cors_origins = ?config.cors_origins,
        "Configuration loaded"
    );

    let state = server::create_app_state(config);

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "cvd-recolor server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
