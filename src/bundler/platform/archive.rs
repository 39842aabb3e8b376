//! ZIP archive creation from a staging tree.

use crate::{
    bundler::{
        Result,
        error::{Context, ErrorExt},
        utils::fs::{blocking, walk_files},
    },
    cli::OutputManager,
};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Component, Path},
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Files this large need ZIP64 headers.
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Writes every regular file below `src` into a new archive at `zip_path`.
///
/// Entry names are relative to the parent of `src`, so the archive unpacks
/// into a single directory named after `src`. Files are added in sorted
/// order and keep their Unix permission bits. An existing archive at
/// `zip_path` is replaced.
///
/// Returns the entry names in the order they were written.
pub async fn write_zip(src: &Path, zip_path: &Path, output: &OutputManager) -> Result<Vec<String>> {
    output.info(&format!("Creating ZIP: {}", zip_path.display()));

    let base = src
        .parent()
        .context(format!("{} has no parent directory", src.display()))?
        .to_path_buf();
    let src = src.to_path_buf();
    let zip_path = zip_path.to_path_buf();
    let output = output.clone();

    blocking(move || {
        let files = walk_files(&src)?;
        let file = File::create(&zip_path).fs_context("creating archive", &zip_path)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        let mut names = Vec::with_capacity(files.len());

        for path in files {
            let name = entry_name(path.strip_prefix(&base)?);
            let metadata = std::fs::metadata(&path).fs_context("reading metadata of", &path)?;

            zip.start_file(name.as_str(), entry_options(&metadata))?;
            let mut reader = File::open(&path).fs_context("opening", &path)?;
            io::copy(&mut reader, &mut zip).fs_context("compressing", &path)?;

            output.verbose(&format!("Added: {name}"));
            names.push(name);
        }

        zip.finish()?
            .flush()
            .fs_context("flushing archive", &zip_path)?;
        log::debug!("Wrote {} entries to {}", names.len(), zip_path.display());
        Ok(names)
    })
    .await
}

/// Forward-slash entry name, independent of the host separator.
fn entry_name(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn entry_options(metadata: &std::fs::Metadata) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(metadata.len() >= ZIP64_THRESHOLD);

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode() & 0o7777)
    };

    options
}
