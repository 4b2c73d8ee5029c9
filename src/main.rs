//! Results-stage entry point: decode an encoded query, assemble it against
//! the bundled catalog, and print the bundle as JSON plus narration lines.
//!
//! The input stage and the results stage are independent activations sharing
//! only the encoded string; `SearchQuery::encode` produces it, this binary
//! consumes it.

use std::process::ExitCode;

use medsafe::assemble::{assemble, ResultBundle};
use medsafe::catalog::Catalog;
use medsafe::config;
use medsafe::query::SearchQuery;

fn main() -> ExitCode {
    medsafe::init_tracing();
    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let Some(encoded) = std::env::args().nth(1) else {
        eprintln!("usage: medsafe <encoded-query>");
        eprintln!("example: medsafe 'conditions=Liver%20Disease&med1=Paracetamol&med2=Ibuprofen'");
        return ExitCode::from(2);
    };

    let query = match SearchQuery::decode(&encoded) {
        Ok(query) => query,
        Err(err) => {
            tracing::warn!(%err, "query rejected");
            eprintln!("No medicine data found. Start a new search.");
            return ExitCode::FAILURE;
        }
    };

    let bundle = match assemble(&query, Catalog::builtin()) {
        Ok(bundle) => bundle,
        Err(err) => {
            tracing::warn!(%err, "lookup failed");
            eprintln!("No medicine data found. Start a new search.");
            return ExitCode::FAILURE;
        }
    };

    print_bundle(&bundle)
}

fn print_bundle(bundle: &ResultBundle) -> ExitCode {
    match serde_json::to_string_pretty(bundle) {
        Ok(json) => {
            println!("{json}");
            println!();
            println!("Narration: {}", bundle.primary.narration());
            if let Some(secondary) = &bundle.secondary {
                println!("Narration: {}", secondary.narration());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "bundle serialization failed");
            ExitCode::FAILURE
        }
    }
}
