use std::fs;
use std::io;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::debug;

use super::PrepError;

pub const UNIHAN_URL: &str = "https://www.unicode.org/Public/UNIDATA/Unihan.zip";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Downloaded { bytes: u64 },
    UpToDate,
}

/// Parse an RFC 7231 `Last-Modified` value, e.g. `Fri, 19 Jul 2024 17:52:14 GMT`.
fn parse_http_date(value: &str) -> Option<OffsetDateTime> {
    let format = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    PrimitiveDateTime::parse(value.trim(), format)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// `Some(true)` when the local copy is newer than the server's; `None` when
/// the server sent no usable `Last-Modified`.
fn local_is_current(url: &str, local: &Path) -> Result<Option<bool>, PrepError> {
    let local_mtime: OffsetDateTime = fs::metadata(local)?.modified()?.into();
    let response = ureq::head(url)
        .call()
        .map_err(|e| PrepError::Http(format!("{url}: {e}")))?;
    let remote = response
        .headers()
        .get("last-modified")
        .and_then(|v| v.to_str().ok())
        .and_then(parse_http_date);
    debug!(?remote, %local_mtime, "Unihan.zip freshness check");
    Ok(remote.map(|remote| local_mtime > remote))
}

/// Download `url` into `dest`, skipping when the existing file is current
/// unless `force` is set.
pub fn download(url: &str, dest: &Path, force: bool) -> Result<FetchOutcome, PrepError> {
    if dest.exists() && !force {
        match local_is_current(url, dest)? {
            Some(true) => {
                eprintln!("Local {} is up-to-date.", dest.display());
                return Ok(FetchOutcome::UpToDate);
            }
            Some(false) => {}
            None => eprintln!(
                "Could not get last-modified header. To update forcefully, run with --force."
            ),
        }
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let response = ureq::get(url)
        .call()
        .map_err(|e| PrepError::Http(format!("{url}: {e}")))?;
    let total = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let progress = match total {
        Some(len) => ProgressBar::new(len).with_style(
            ProgressStyle::with_template("Downloading... [{bar:20}] {percent}% {bytes}/{total_bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        ),
        None => ProgressBar::new_spinner().with_style(
            ProgressStyle::with_template("Downloading... {bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        ),
    };

    let mut reader = progress.wrap_read(response.into_body().into_reader());
    let result = write_atomically(&mut reader, dest);
    progress.finish_and_clear();
    let bytes = result.map_err(|e| PrepError::Http(format!("{url}: {e}")))?;

    eprintln!("Successfully downloaded {} ({bytes} bytes)", dest.display());
    Ok(FetchOutcome::Downloaded { bytes })
}

/// Stream `reader` into `<dest>.part` and rename it to `dest` once complete.
/// The partial file is removed if the copy fails.
fn write_atomically(reader: &mut impl io::Read, dest: &Path) -> io::Result<u64> {
    let part = dest.with_extension("zip.part");
    let copied = fs::File::create(&part).and_then(|mut out| io::copy(reader, &mut out));
    match copied {
        Ok(bytes) => {
            fs::rename(&part, dest)?;
            Ok(bytes)
        }
        Err(e) => {
            let _ = fs::remove_file(&part);
            Err(e)
        }
    }
}

/// Extract every `.txt` entry of `zip_path` into `dest` by basename
/// (zip-slip safe). Returns the number of files extracted.
pub fn extract(zip_path: &Path, dest: &Path) -> Result<usize, PrepError> {
    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(zip_err)?;
    fs::create_dir_all(dest)?;

    let mut count = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(zip_err)?;
        if entry.is_dir() {
            continue;
        }
        let raw_name = entry.name().to_string();
        if !raw_name.ends_with(".txt") {
            continue;
        }
        let basename = Path::new(&raw_name)
            .file_name()
            .ok_or_else(|| PrepError::Zip(format!("invalid ZIP entry name: {raw_name}")))?
            .to_string_lossy()
            .into_owned();
        let mut out = fs::File::create(dest.join(&basename))?;
        io::copy(&mut entry, &mut out)?;
        eprintln!("    → {basename}");
        count += 1;
    }
    Ok(count)
}

fn zip_err(e: zip::result::ZipError) -> PrepError {
    PrepError::Zip(e.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use time::macros::datetime;
    use zip::write::SimpleFileOptions;

    use super::*;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, body) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_parse_http_date() {
        assert_eq!(
            parse_http_date("Fri, 19 Jul 2024 17:52:14 GMT"),
            Some(datetime!(2024-07-19 17:52:14 UTC))
        );
        assert_eq!(parse_http_date("yesterday"), None);
        assert_eq!(parse_http_date(""), None);
    }

    /// Yields `ok` bytes, then fails like a dropped connection.
    struct BrokenReader {
        ok: usize,
    }

    impl io::Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.ok == 0 {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            let n = self.ok.min(buf.len());
            buf[..n].fill(b'x');
            self.ok -= n;
            Ok(n)
        }
    }

    #[test]
    fn test_write_atomically_renames_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("Unihan.zip");
        let bytes = write_atomically(&mut &b"PK payload"[..], &dest).unwrap();
        assert_eq!(bytes, 10);
        assert_eq!(fs::read(&dest).unwrap(), b"PK payload");
        assert!(!dir.path().join("Unihan.zip.part").exists());
    }

    #[test]
    fn test_write_atomically_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("Unihan.zip");
        fs::write(&dest, "previous archive").unwrap();

        let err = write_atomically(&mut BrokenReader { ok: 4096 }, &dest).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        assert!(!dir.path().join("Unihan.zip.part").exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "previous archive");
    }

    #[test]
    fn test_extract_txt_only() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("Unihan.zip");
        write_zip(
            &zip_path,
            &[
                ("Unihan_Readings.txt", "U+4E00\tkMandarin\tyī\n"),
                ("Unihan_Variants.txt", "# variants\n"),
                ("README.md", "skip me"),
            ],
        );

        let out = dir.path().join("Unihan");
        let count = extract(&zip_path, &out).unwrap();
        assert_eq!(count, 2);
        assert!(out.join("Unihan_Readings.txt").is_file());
        assert!(!out.join("README.md").exists());
    }

    #[test]
    fn test_extract_strips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("nested.zip");
        write_zip(&zip_path, &[("Unihan/a.txt", "x"), ("nested/deep/b.txt", "y")]);

        let out = dir.path().join("out");
        assert_eq!(extract(&zip_path, &out).unwrap(), 2);
        assert!(out.join("a.txt").is_file());
        assert!(out.join("b.txt").is_file());
        assert!(!out.join("nested").exists());
    }

    #[test]
    fn test_extract_not_a_zip() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("Unihan.zip");
        fs::write(&zip_path, "not a zip").unwrap();
        let err = extract(&zip_path, &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, PrepError::Zip(_)));
    }
}
