//! Render one or more targets given on the command line and print the plot
//! payload as JSON.
//!
//! Usage: `cargo run --example 02_plot_payload -- [TARGET ...]`

use graphyte::{AnalysisOptions, Graphyte, RenderRequest};
use graphyte_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut targets: Vec<String> = std::env::args().skip(1).collect();
    if targets.is_empty() {
        targets.push("cpu.load".to_string());
    }

    let g = Graphyte::builder().with_connector(get_connector()?).build()?;
    let req = RenderRequest::new(targets)?.from("-1d");
    let report = g.render(&req, &AnalysisOptions::interactive()).await?;

    for w in &report.warnings {
        eprintln!("warning: {w}");
    }
    println!("{}", report.payload.to_json()?);
    Ok(())
}
