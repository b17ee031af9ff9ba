use std::fs;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use autoimport_core::{slot, sources, ConstantScanner, GlueFile, ImplementorIndex};
use tracing::info;

use crate::cli::Cli;
use crate::exit_codes;

pub fn run(cli: Cli) -> anyhow::Result<i32> {
    let sources = sources::normalize_sources(&cli.base, cli.sources.as_deref());

    // The builtin implementor table is published once at startup; the render
    // path below picks it up through the slot.
    let implementors = slot::implementor_slot();
    implementors.publish(ImplementorIndex::builtin())?;

    let scanner = ConstantScanner::new();
    let constants = scanner
        .scan(&cli.base, &cli.package)
        .with_context(|| format!("constant discovery failed for `{}`", cli.package))?;

    let mut glue = GlueFile::new(cli.package.clone(), sources, constants);
    let table: Arc<OnceLock<ImplementorIndex>> = Arc::new(OnceLock::new());
    let sink = Arc::clone(&table);
    implementors.subscribe(move |index| {
        let _ = sink.set(index);
    })?;
    if let Some(known) = table.get().and_then(|index| index.get(&cli.package)) {
        glue = glue.with_implementors(known);
    }

    let rendered = glue.render();
    if let Some(parent) = cli.out_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&cli.out_file, rendered)
        .with_context(|| format!("failed to write {}", cli.out_file.display()))?;

    info!(out = %cli.out_file.display(), package = %cli.package, "wrote generated glue");
    println!(
        "✓ Generated glue for `{}`: {}",
        cli.package,
        cli.out_file.display()
    );
    Ok(exit_codes::SUCCESS)
}
