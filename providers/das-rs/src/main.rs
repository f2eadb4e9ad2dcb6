use das_provider::mcp::DasServer;
use das_provider::transport::TransportMode;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first to determine mode
    let args: Vec<String> = std::env::args().collect();
    let (mode, port) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{}", err);
            print_usage();
            std::process::exit(1);
        }
    };

    // Always write to stderr: stdout carries the protocol in stdio mode
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting DAS Provider in {} mode...", mode.as_str());

    let server = DasServer::from_env()?;

    match mode {
        #[cfg(feature = "http_transport")]
        TransportMode::Http => run_http_server(server, port).await?,
        TransportMode::Stdio => das_provider::transport::stdio::run_stdio_server(server).await?,
    }

    Ok(())
}

/// Parse command-line arguments
///
/// Returns a message for unknown arguments and for missing or invalid
/// option values.
fn parse_args(args: &[String]) -> Result<(TransportMode, Option<u16>), String> {
    let mut mode = TransportMode::default();
    let mut port = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                let value = option_value(args, i)?;
                mode = value.parse()?;
                i += 1;
            }
            #[cfg(feature = "http_transport")]
            "--http" | "--sse" => mode = TransportMode::Http,
            "--stdio" => mode = TransportMode::Stdio,
            "--port" => {
                let value = option_value(args, i)?;
                port = Some(
                    value
                        .parse::<u16>()
                        .map_err(|err| format!("Invalid port '{}': {}", value, err))?,
                );
                i += 1;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok((mode, port))
}

fn option_value(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", args[i]))
}

/// Print usage information
fn print_usage() {
    println!("DAS Provider - MCP server for the Helius DAS searchAssets API");
    println!();
    println!("USAGE:");
    println!("    das-provider [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --mode <MODE>       Transport mode: http or stdio (default: http)");
    println!("    --http              Serve /sse, /sse/message and /mcp over HTTP");
    println!("    --stdio             Run in stdio MCP mode");
    println!("    --port <PORT>       Port to listen on in HTTP mode (default: 8000)");
    println!("    --help, -h          Print this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    HELIUS_API_KEY      Helius API key (required for searchAssets calls)");
    println!("    HELIUS_CLUSTER      mainnet or devnet (default: mainnet)");
    println!("    HELIUS_RPC_URL      Helius RPC base URL override");
    println!("    HTTP_HOST           Bind address in HTTP mode (default: 0.0.0.0)");
    println!("    HTTP_PORT           Port in HTTP mode (default: 8000)");
    println!("    RUST_LOG            Logging level (default: info)");
    println!();
    println!("EXAMPLES:");
    println!("    # Start HTTP server on default port (8000)");
    println!("    das-provider --http");
    println!();
    println!("    # Start HTTP server on custom port");
    println!("    das-provider --mode http --port 8080");
    println!();
    println!("    # Start in stdio mode");
    println!("    das-provider --stdio");
}

/// Run the provider in HTTP mode
#[cfg(feature = "http_transport")]
async fn run_http_server(
    server: DasServer,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    use das_provider::config::HttpConfig;

    let mut config = HttpConfig::from_env()?;
    if let Some(port) = port {
        config = config.with_port(port);
    }

    das_provider::transport::http::start_http_server(server, config).await?;
    Ok(())
}
