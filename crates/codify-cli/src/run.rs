use std::fs;

use anyhow::Context;
use codify_core::{Pack, Resource};
use log::{debug, info};

use crate::args::Cli;
use crate::exit_codes;

pub fn run(cli: Cli) -> anyhow::Result<i32> {
    if cli.pack_name.is_empty() {
        eprintln!("fatal: pack name must not be empty");
        return Ok(exit_codes::USAGE_ERROR);
    }

    // Each file is opened, fully read, and closed before the next one.
    let mut resources = Vec::with_capacity(cli.resources.len());
    for path in &cli.resources {
        let resource = Resource::from_file(path)?;
        debug!(
            "read {} ({} bytes) as `{}`",
            path.display(),
            resource.bytes.len(),
            resource.name
        );
        resources.push(resource);
    }

    let pack = Pack::new(cli.pack_name, resources, cli.include_prefix);
    // Both texts are rendered before any output file is opened.
    let (header, source) = pack.generate()?;

    fs::create_dir_all(&cli.outdir)
        .with_context(|| format!("failed to create output directory {}", cli.outdir.display()))?;

    let header_path = cli.outdir.join(format!("{}.h", pack.pack_name));
    let source_path = cli.outdir.join(format!("{}.cpp", pack.pack_name));
    fs::write(&header_path, header)
        .with_context(|| format!("failed to write {}", header_path.display()))?;
    fs::write(&source_path, source)
        .with_context(|| format!("failed to write {}", source_path.display()))?;

    info!(
        "codified {} resource(s) into {} and {}",
        pack.resources.len(),
        header_path.display(),
        source_path.display()
    );
    Ok(exit_codes::SUCCESS)
}
