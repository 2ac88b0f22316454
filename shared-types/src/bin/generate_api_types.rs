use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the display types
    let mut types = Vec::new();

    // Credential types
    types.push(clean_type(TokenResponse::export_to_string()?));
    types.push(clean_type(Identity::export_to_string()?));

    // Transaction types
    types.push(clean_type(RecordKind::export_to_string()?));
    types.push(clean_type(TransactionRecord::export_to_string()?));

    // Report types
    types.push(clean_type(Period::export_to_string()?));
    types.push(clean_type(ReportSection::export_to_string()?));
    types.push(clean_type(Report::export_to_string()?));
    types.push(clean_type(MonthOption::export_to_string()?));

    // Notice types
    types.push(clean_type(Notice::export_to_string()?));

    // Account types
    types.push(clean_type(UpdatePasswordRequest::export_to_string()?));
    types.push(clean_type(UpdateLoginRequest::export_to_string()?));

    let output_dir = Path::new("../mobile/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Every type lands in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
