use std::{env, fs, path::Path};

use deployment::Deployment;
use server::{DeploymentImpl, routes::health::HealthStatus};
use ts_rs::TS;

fn generate_types_content() -> String {
    let header = "// This file was generated by `generate_types`. Do not edit it by hand.\n\n";

    let mut decls = DeploymentImpl::shared_types();
    decls.push(HealthStatus::decl());

    let body = decls
        .into_iter()
        .map(|decl| {
            let trimmed = decl.trim_start();
            if trimmed.starts_with("export") {
                trimmed.to_string()
            } else {
                format!("export {trimmed}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{header}{body}\n")
}

fn main() -> anyhow::Result<()> {
    let check_mode = env::args().any(|arg| arg == "--check");

    let shared_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../shared");
    let types_path = shared_path.join("types.ts");
    let generated = generate_types_content();

    if check_mode {
        let current = fs::read_to_string(&types_path).unwrap_or_default();
        if current == generated {
            println!("✅ shared/types.ts is up to date.");
            return Ok(());
        }
        anyhow::bail!("shared/types.ts is out of date, run `cargo run --bin generate_types`");
    }

    fs::create_dir_all(&shared_path)?;
    fs::write(&types_path, generated)?;
    println!("✅ TypeScript types generated in {}", types_path.display());
    Ok(())
}
