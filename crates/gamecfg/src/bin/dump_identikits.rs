//! Dump the identikit table of a config archive as JSON.
//!
//! Run: `cargo run -p gamecfg --features tools --bin dump_identikits -- <archive> [entry]`

use std::env;
use std::fs;

use gamecfg::{ConfigSettings, IdentikitTable};
use gamecfg_decode::Archive;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: dump_identikits <archive> [entry]");
        std::process::exit(2);
    };

    let mut settings = ConfigSettings::default();
    if let Some(entry) = args.get(2) {
        settings.identikit_entry.clone_from(entry);
    }

    let bytes = fs::read(path)?;
    let archive = Archive::parse(&bytes)?;
    let table = IdentikitTable::from_archive(&archive, &settings)?;
    tracing::info!(path = %path, kits = table.len(), "decoded identikit table");

    let kits: Vec<serde_json::Value> = table
        .iter()
        .map(|(id, kit)| {
            serde_json::json!({
                "id": id,
                "body_part": kit.body_part,
                "body_part_kind": kit.body_part_kind().map(|(part, female)| {
                    serde_json::json!({ "part": format!("{part:?}"), "female": female })
                }),
                "model_ids": kit.model_ids,
                "head_model_ids": kit.head_model_ids,
                "recolors": kit.recolor_pairs().collect::<Vec<_>>(),
                "disabled": kit.disabled,
            })
        })
        .collect();

    let out = serde_json::json!({
        "count": table.len(),
        "identikits": kits,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);

    Ok(())
}
