use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::DownloadError;
use crate::github::RepoSource;

/// Archive URL for a branch, derived from a clone URL ending in `.git`.
///
/// The last four characters are dropped unconditionally.
pub fn archive_url(repo_url: &str, branch: &str) -> String {
    let cut = repo_url
        .char_indices()
        .rev()
        .nth(3)
        .map(|(i, _)| i)
        .unwrap_or(0);
    format!("{}/archive/{}.zip", &repo_url[..cut], branch)
}

/// `owner/repo` becomes `owner#repo.zip`.
pub fn archive_file_name(full_name: &str) -> String {
    format!("{}.zip", full_name.replace('/', "#"))
}

/// First of `dest`, `stem (1).ext`, `stem (2).ext`, ... that does not exist yet.
pub fn unique_destination(dest: &Path) -> PathBuf {
    if !dest.exists() {
        return dest.to_path_buf();
    }
    let stem = dest
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = dest
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let mut n = 1;
    loop {
        let candidate = dest.with_file_name(format!("{} ({}){}", stem, n, ext));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Download the `branch` archive of `repo_url` next to `dest`.
///
/// Bytes land in a `.part` file first and are renamed into place on success,
/// so a failure never leaves a truncated archive behind. Returns the final path.
pub fn download_repo<S: RepoSource + ?Sized>(
    source: &S,
    repo_url: &str,
    dest: &Path,
    branch: &str,
) -> Result<PathBuf, DownloadError> {
    let url = archive_url(repo_url, branch);
    let target = unique_destination(dest);
    let mut part = target.clone().into_os_string();
    part.push(".part");
    let part = PathBuf::from(part);

    let fetched = File::create(&part).map_err(DownloadError::from).and_then(|file| {
        let mut out = BufWriter::new(file);
        source.fetch_archive(&url, &mut out)?;
        out.flush()?;
        Ok(())
    });

    match fetched.and_then(|()| fs::rename(&part, &target).map_err(DownloadError::from)) {
        Ok(()) => Ok(target),
        Err(e) => {
            let _ = fs::remove_file(&part);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::types::SearchPage;

    struct StaticArchive(Option<&'static [u8]>);

    impl RepoSource for StaticArchive {
        fn fetch_page(&self, _url: &str) -> Result<SearchPage> {
            unreachable!("archive tests never search")
        }

        fn fetch_archive(
            &self,
            _url: &str,
            out: &mut dyn Write,
        ) -> core::result::Result<u64, DownloadError> {
            match self.0 {
                Some(bytes) => {
                    out.write_all(bytes)?;
                    Ok(bytes.len() as u64)
                }
                None => Err(DownloadError::Status(404)),
            }
        }
    }

    #[test]
    fn archive_url_replaces_git_suffix() {
        assert_eq!(
            archive_url("https://github.com/owner/repo.git", "master"),
            "https://github.com/owner/repo/archive/master.zip"
        );
    }

    #[test]
    fn archive_url_strips_four_chars_even_without_suffix() {
        assert_eq!(archive_url("https://h/o/repo", "main"), "https://h/o//archive/main.zip");
        assert_eq!(archive_url("abc", "main"), "/archive/main.zip");
    }

    #[test]
    fn archive_file_name_uses_hash_separator() {
        assert_eq!(archive_file_name("owner/repo"), "owner#repo.zip");
    }

    #[test]
    fn unique_destination_numbers_collisions() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("o#r.zip");
        assert_eq!(unique_destination(&dest), dest);

        fs::write(&dest, b"old").unwrap();
        assert_eq!(unique_destination(&dest), dir.path().join("o#r (1).zip"));

        fs::write(dir.path().join("o#r (1).zip"), b"old").unwrap();
        assert_eq!(unique_destination(&dest), dir.path().join("o#r (2).zip"));
    }

    #[test]
    fn successful_download_lands_at_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("o#r.zip");

        let source = StaticArchive(Some(b"PK"));
        let saved = download_repo(&source, "https://github.com/o/r.git", &dest, "master").unwrap();

        assert_eq!(saved, dest);
        assert_eq!(fs::read(&dest).unwrap(), b"PK");
        assert!(!dir.path().join("o#r.zip.part").exists());
    }

    #[test]
    fn existing_archive_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("o#r.zip");
        fs::write(&dest, b"old").unwrap();

        let source = StaticArchive(Some(b"new"));
        let saved = download_repo(&source, "https://github.com/o/r.git", &dest, "master").unwrap();

        assert_eq!(saved, dir.path().join("o#r (1).zip"));
        assert_eq!(fs::read(&dest).unwrap(), b"old");
        assert_eq!(fs::read(&saved).unwrap(), b"new");
    }

    #[test]
    fn failed_download_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("o#r.zip");

        let source = StaticArchive(None);
        let err =
            download_repo(&source, "https://github.com/o/r.git", &dest, "master").unwrap_err();

        assert!(matches!(err, DownloadError::Status(404)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
