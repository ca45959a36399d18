//! Runs sample descriptions through the generator and prints a summary.
use clap::Parser;
use tracing_subscriber::EnvFilter;
use uigen_core::ComponentResponse;
use uigen_generator::ComponentGenerator;

const SAMPLES: &[&str] = &[
    "create a blue button",
    "create a red button with loading state",
    "create a large green button",
    "create a pricing table with 3 tiers",
];

#[derive(Parser)]
#[command(name = "uigen-demo", version, about = "Generate UI components from descriptions")]
struct Args {
    /// Print the full response as JSON
    #[arg(long)]
    json: bool,
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Descriptions to generate; the built-in samples when empty
    descriptions: Vec<String>,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn print_summary(response: &ComponentResponse) {
    println!("✅ Generated {} variants:", response.variants.len());
    for (index, variant) in response.variants.iter().enumerate() {
        println!("  {}. {}: {}", index + 1, variant.name, variant.description);
    }

    let metadata = &response.metadata;
    let features = if metadata.features.is_empty() {
        "none".to_string()
    } else {
        metadata.features.join(", ")
    };
    println!("\n📋 Metadata:");
    println!("  - Type: {}", metadata.component_kind);
    println!("  - Framework: {}", metadata.framework);
    println!("  - Styling: {}", metadata.styling);
    println!("  - Features: {}", features);
    println!("  - Responsive: {}", yes_no(metadata.responsive));
    println!("  - Accessible: {}", yes_no(metadata.accessibility));

    println!("\n📦 Integration:");
    for instruction in &response.integration_instructions {
        println!("  {}", instruction);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("UIGEN_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let generator = ComponentGenerator::builtin()?;
    let descriptions: Vec<String> = if args.descriptions.is_empty() {
        SAMPLES.iter().map(|s| s.to_string()).collect()
    } else {
        args.descriptions
    };

    println!("🎨 uigen demo");
    for description in &descriptions {
        println!("\n🔍 Testing: \"{}\"", description);
        println!("{}", "─".repeat(50));

        match generator.quick_generate(description).await {
            Ok(response) if args.json => println!("{}", serde_json::to_string_pretty(&response)?),
            Ok(response) => print_summary(&response),
            Err(e) => println!("❌ Error: {}", e),
        }
    }

    println!("\n🎉 Demo complete!");
    Ok(())
}
